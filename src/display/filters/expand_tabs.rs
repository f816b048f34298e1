use crate::display::atom::{advance_char, DisplayAtom};
use crate::display::filter::FilterFn;
use crate::models::DisplayCoord;

const TAB_WIDTH: i64 = 8;

/// 把制表符替换为推进到下一个制表位的空格串。
/// 制表位按显示列计算，每个制表符成为一个带替换内容的原子。
pub fn expand_tabs() -> FilterFn {
    Box::new(|ctx, db| {
        db.transform(ctx.buffer, |atom, start| {
            if atom.replacement().is_some() {
                return vec![atom];
            }
            let content = atom.content(ctx.buffer);
            if !content.contains('\t') {
                return vec![atom];
            }

            let begin = atom.begin();
            let highlight = atom.highlight();
            let mut shards: Vec<DisplayAtom> = Vec::new();
            let mut cur = start;
            let mut run_start = 0usize;

            let mut push_run = |shards: &mut Vec<DisplayAtom>, from: usize, to: usize| {
                if from < to {
                    let mut shard =
                        DisplayAtom::new(DisplayCoord::default(), begin + from, begin + to);
                    if let Some(kind) = highlight {
                        shard.set_highlight(kind);
                    }
                    shards.push(shard);
                }
            };

            for (idx, ch) in content.chars().enumerate() {
                if ch == '\t' {
                    push_run(&mut shards, run_start, idx);
                    let width = TAB_WIDTH - cur.column % TAB_WIDTH;
                    let mut shard = DisplayAtom::replaced(
                        DisplayCoord::default(),
                        begin + idx,
                        begin + idx + 1,
                        " ".repeat(width as usize),
                    );
                    if let Some(kind) = highlight {
                        shard.set_highlight(kind);
                    }
                    shards.push(shard);
                    cur = DisplayCoord::new(cur.line, cur.column + width);
                    run_start = idx + 1;
                } else {
                    cur = advance_char(cur, ch);
                }
            }
            push_run(&mut shards, run_start, content.chars().count());

            shards
        });
    })
}

#[cfg(test)]
#[path = "../../../tests/unit/display/filters/expand_tabs.rs"]
mod tests;
