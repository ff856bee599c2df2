//! Canonical comparison keys for tags.
//!
//! Boards spell the same concept many ways: `Blue_Hair`, `blue-hair`, `(blue hair)`, full-width
//! characters pasted from a Japanese IME. [`normalize`] folds all of them into one key, and every
//! comparison in this crate happens on those keys.
use unicode_normalization::UnicodeNormalization;

const WRAPPERS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

#[inline]
const fn is_dash(c: char) -> bool {
    matches!(
        c,
        '-' | '_' | '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}'
    )
}

/// Map a raw tag to its normalized key.
///
/// NFKC, lowercase, dash/underscore runs become one space, whitespace collapsed and trimmed, then
/// matching outer wrappers (`()`, `[]`, `{}`) are peeled while more than two characters remain.
/// Total and idempotent; returns an empty string when nothing meaningful is left.
pub fn normalize(tag: &str) -> String {
    if tag.is_empty() {
        return String::new();
    }

    // Lowercasing can leave sequences NFKC would still rewrite, so compose once more after it.
    let folded: String = tag.nfkc().collect::<String>().to_lowercase().nfkc().collect();

    let mut spaced = String::with_capacity(folded.len());
    let mut in_dash_run = false;
    for c in folded.chars() {
        if is_dash(c) {
            if !in_dash_run {
                spaced.push(' ');
            }
            in_dash_run = true;
        } else {
            spaced.push(c);
            in_dash_run = false;
        }
    }

    let mut out = collapse_whitespace(&spaced);

    loop {
        let mut chars = out.chars();
        let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
            break;
        };
        if out.chars().count() <= 2 || !WRAPPERS.contains(&(first, last)) {
            break;
        }
        let inner = &out[first.len_utf8()..out.len() - last.len_utf8()];
        out = inner.trim().to_string();
    }

    out
}

/// Looser key used by the classifiers when [`normalize`] leaves nothing: lowercase and
/// underscores to spaces, wrappers kept.
pub fn canonicalize(tag: &str) -> String {
    collapse_whitespace(&tag.to_lowercase().replace('_', " "))
}

/// Normalize, falling back to [`canonicalize`] for inputs that normalize to nothing.
pub(crate) fn classification_key(tag: &str) -> String {
    let key = normalize(tag);
    if key.is_empty() {
        canonicalize(tag)
    } else {
        key
    }
}

/// Raw board tag to prompt text: underscores become spaces, case and wrappers stay.
pub fn prompt_form(tag: &str) -> String {
    collapse_whitespace(&tag.replace('_', " "))
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
