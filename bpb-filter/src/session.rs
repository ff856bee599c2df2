//! Request-scoped context taken from the caller's own prompt.
//!
//! When the caller already asked for "1girl, blue hair, red eyes", the post filter can keep the
//! batch consistent with that: posts showing other hair/eye colors or other subject counts are
//! rejected. Both sets are built once per request and only read afterwards.
use ahash::AHashSet;

use crate::classify::{is_eye_color, is_hair_color, is_subject};
use crate::normalize::normalize;

/// Split a comma separated prompt into normalized terms.
///
/// Attention syntax is unwrapped: `(blue hair:1.2)` and `[red_eyes]` give `blue hair` and
/// `red eyes`. Empty terms are dropped.
pub fn prompt_terms(prompt: &str) -> impl Iterator<Item = String> + '_ {
    prompt
        .split([',', '\n'])
        .map(|term| strip_weight(&normalize(term)))
        .filter(|term| !term.is_empty())
}

/// Drop a trailing `:<number>` weight, re-normalizing whatever wrapper it was sitting in.
fn strip_weight(term: &str) -> String {
    match term.rsplit_once(':') {
        Some((head, weight))
            if !weight.trim().is_empty()
                && weight
                    .trim()
                    .trim_end_matches(['(', ')', '[', ']', '{', '}'])
                    .parse::<f32>()
                    .is_ok() =>
        {
            normalize(head.trim_start_matches(['(', '[', '{']))
        }
        _ => term.to_string(),
    }
}

/// Hair and eye colors the caller's prompt already committed to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionColorBasis {
    pub hair: AHashSet<String>,
    pub eyes: AHashSet<String>,
}

impl SessionColorBasis {
    pub fn from_prompt(prompt: &str) -> Self {
        let mut basis = Self::default();
        for term in prompt_terms(prompt) {
            if is_hair_color(&term) {
                basis.hair.insert(term);
            } else if is_eye_color(&term) {
                basis.eyes.insert(term);
            }
        }
        basis
    }

    /// Whether a color tag (already normalized) clashes with the basis. Colors of a kind the
    /// prompt never mentioned are always fine.
    pub fn conflicts_with(&self, normalized_tag: &str) -> bool {
        (!self.hair.is_empty() && is_hair_color(normalized_tag) && !self.hair.contains(normalized_tag))
            || (!self.eyes.is_empty()
                && is_eye_color(normalized_tag)
                && !self.eyes.contains(normalized_tag))
    }

    pub fn is_empty(&self) -> bool {
        self.hair.is_empty() && self.eyes.is_empty()
    }
}

/// Subject-count tags pinned by the caller's prompt. Empty means "stay self-consistent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedSubjectSet(AHashSet<String>);

impl AllowedSubjectSet {
    pub fn from_prompt(prompt: &str) -> Self {
        Self(prompt_terms(prompt).filter(|t| is_subject(t)).collect())
    }

    /// Pins an explicit tag list. Tags that are not subject counts are dropped, as in
    /// [`from_prompt`](Self::from_prompt).
    pub fn new<S: AsRef<str>>(tags: &[S]) -> Self {
        Self(
            tags.iter()
                .map(|t| normalize(t.as_ref()))
                .filter(|t| is_subject(t))
                .collect(),
        )
    }

    #[inline]
    pub fn contains(&self, normalized_tag: &str) -> bool {
        self.0.contains(normalized_tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
