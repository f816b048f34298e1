use crate::display::atom::{DisplayAtom, HighlightKind};
use crate::display::filter::FilterFn;

/// C++ syntax annotation over the visible slice.
///
/// A plain scanner, no grammar: comments, string/char literals, numbers,
/// preprocessor lines and keywords. Atoms already annotated (selections)
/// or carrying replacement content are left untouched.
pub fn hlcpp() -> FilterFn {
    Box::new(|ctx, db| {
        db.transform(ctx.buffer, |atom, _| {
            if atom.replacement().is_some() || atom.highlight().is_some() {
                return vec![atom];
            }

            let content = atom.content(ctx.buffer);
            let spans = scan(&content);
            if spans.is_empty() {
                return vec![atom];
            }

            let begin = atom.begin();
            let len = content.chars().count();
            let mut shards: Vec<DisplayAtom> = Vec::with_capacity(spans.len() * 2 + 1);
            let mut prev = 0usize;
            let mut push = |shards: &mut Vec<DisplayAtom>,
                            from: usize,
                            to: usize,
                            kind: Option<HighlightKind>| {
                if from < to {
                    let mut shard =
                        DisplayAtom::new(Default::default(), begin + from, begin + to);
                    if let Some(kind) = kind {
                        shard.set_highlight(kind);
                    }
                    shards.push(shard);
                }
            };

            for (start, end, kind) in spans {
                push(&mut shards, prev, start, None);
                push(&mut shards, start, end, Some(kind));
                prev = end;
            }
            push(&mut shards, prev, len, None);

            shards
        });
    })
}

/// Token spans as char ranges, non-overlapping and sorted.
pub(super) fn scan(text: &str) -> Vec<(usize, usize, HighlightKind)> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut i = 0usize;
    let mut line_has_token = false;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '\n' {
            line_has_token = false;
            i += 1;
            continue;
        }

        if ch == '/' && chars.get(i + 1) == Some(&'/') {
            let start = i;
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            spans.push((start, i, HighlightKind::Comment));
            continue;
        }

        if ch == '/' && chars.get(i + 1) == Some(&'*') {
            let start = i;
            i += 2;
            while i < chars.len() {
                if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    i += 2;
                    break;
                }
                i += 1;
            }
            spans.push((start, i, HighlightKind::Comment));
            line_has_token = true;
            continue;
        }

        if ch == '"' || ch == '\'' {
            let quote = ch;
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != quote && chars[i] != '\n' {
                if chars[i] == '\\' {
                    i += 1;
                }
                i += 1;
            }
            if i < chars.len() && chars[i] == quote {
                i += 1;
            }
            spans.push((start, i, HighlightKind::String));
            line_has_token = true;
            continue;
        }

        if ch == '#' && !line_has_token {
            let start = i;
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            spans.push((start, i, HighlightKind::Preprocessor));
            continue;
        }

        if ch.is_ascii_digit() {
            let start = i;
            while i < chars.len()
                && (chars[i].is_ascii_alphanumeric() || chars[i] == '.' || chars[i] == '\'')
            {
                i += 1;
            }
            spans.push((start, i, HighlightKind::Number));
            line_has_token = true;
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if is_cpp_keyword(&word) {
                spans.push((start, i, HighlightKind::Keyword));
            }
            line_has_token = true;
            continue;
        }

        if !ch.is_whitespace() {
            line_has_token = true;
        }
        i += 1;
    }

    spans
}

fn is_cpp_keyword(word: &str) -> bool {
    matches!(
        word,
        "alignas"
            | "alignof"
            | "asm"
            | "auto"
            | "bool"
            | "break"
            | "case"
            | "catch"
            | "char"
            | "class"
            | "const"
            | "const_cast"
            | "constexpr"
            | "continue"
            | "decltype"
            | "default"
            | "delete"
            | "do"
            | "double"
            | "dynamic_cast"
            | "else"
            | "enum"
            | "explicit"
            | "export"
            | "extern"
            | "false"
            | "float"
            | "for"
            | "friend"
            | "goto"
            | "if"
            | "inline"
            | "int"
            | "long"
            | "mutable"
            | "namespace"
            | "new"
            | "noexcept"
            | "not"
            | "nullptr"
            | "operator"
            | "private"
            | "protected"
            | "public"
            | "register"
            | "reinterpret_cast"
            | "return"
            | "short"
            | "signed"
            | "sizeof"
            | "static"
            | "static_assert"
            | "static_cast"
            | "struct"
            | "switch"
            | "template"
            | "this"
            | "thread_local"
            | "throw"
            | "true"
            | "try"
            | "typedef"
            | "typeid"
            | "typename"
            | "union"
            | "unsigned"
            | "using"
            | "virtual"
            | "void"
            | "volatile"
            | "wchar_t"
            | "while"
    )
}

#[cfg(test)]
#[path = "../../../tests/unit/display/filters/cpp.rs"]
mod tests;
