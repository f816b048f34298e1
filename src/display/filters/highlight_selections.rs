use crate::display::atom::{DisplayAtom, HighlightKind};
use crate::display::filter::FilterFn;
use crate::models::BufferIterator;

/// 标注被任一选区 `[begin, end)` 覆盖的原子，必要时在选区边界拆分。
/// 带替换内容的原子无法再按来源位置拆分，整体按起点归属。
pub fn highlight_selections() -> FilterFn {
    Box::new(|ctx, db| {
        let ranges: Vec<(usize, usize)> = ctx
            .selections
            .iter()
            .map(|sel| (sel.begin().offset(), sel.end().offset()))
            .collect();
        let covered =
            |offset: usize| ranges.iter().any(|&(start, end)| start <= offset && offset < end);

        db.transform(ctx.buffer, |atom, _| {
            let atom_begin = atom.begin().offset();
            let atom_end = atom.end().offset();

            if atom.replacement().is_some() || atom_begin == atom_end {
                let mut atom = atom;
                if covered(atom_begin) {
                    atom.set_highlight(HighlightKind::Selection);
                }
                return vec![atom];
            }

            let mut cuts: Vec<usize> = ranges
                .iter()
                .flat_map(|&(start, end)| [start, end])
                .filter(|&p| atom_begin < p && p < atom_end)
                .collect();
            cuts.sort_unstable();
            cuts.dedup();

            let mut shards: Vec<DisplayAtom> = Vec::with_capacity(cuts.len() + 1);
            let mut rest = atom;
            for cut in cuts {
                let (left, right) = rest.split_at(BufferIterator::new(cut));
                shards.push(left);
                rest = right;
            }
            shards.push(rest);

            for shard in &mut shards {
                if covered(shard.begin().offset()) {
                    shard.set_highlight(HighlightKind::Selection);
                }
            }
            shards
        });
    })
}

#[cfg(test)]
#[path = "../../../tests/unit/display/filters/highlight_selections.rs"]
mod tests;
