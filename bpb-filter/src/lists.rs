//! Storage contract for removal and favorites lists.
//!
//! The on-disk format belongs to the host. This crate only needs an ordered, deduplicated
//! sequence of strings in and out, see [`TagListStore`].
use ahash::AHashSet;

use crate::error::FilterError;
use crate::normalize::normalize;

/// Loads and saves one ordered list of tags.
///
/// Implementations must:
/// - return entries in the order they were saved;
/// - never return two entries with the same normalized key (see [`dedup_normalized`]);
/// - make `save` atomic: write a temporary file next to the target, then rename it over the
///   target, so a crash never leaves a half-written list behind.
pub trait TagListStore {
    fn load(&self) -> Result<Vec<String>, FilterError>;

    fn save(&mut self, tags: &[String]) -> Result<(), FilterError>;
}

/// Keep the first spelling of every normalized key, in order. Blank entries are dropped.
///
/// Wildcard entries are compared by their normalized text too, so `Foo_*` and `foo*` collapse.
pub fn dedup_normalized<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen: AHashSet<String> = AHashSet::with_capacity(items.len());
    items
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let key = s.split('*').map(normalize).collect::<Vec<_>>().join("*");
            seen.insert(key)
        })
        .map(str::to_string)
        .collect()
}

/// A [`TagListStore`] kept in memory. Useful for tests and for hosts that manage persistence
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryListStore {
    tags: Vec<String>,
}

impl MemoryListStore {
    pub fn new<S: AsRef<str>>(tags: &[S]) -> Self {
        Self {
            tags: dedup_normalized(tags),
        }
    }
}

impl TagListStore for MemoryListStore {
    fn load(&self) -> Result<Vec<String>, FilterError> {
        Ok(self.tags.clone())
    }

    fn save(&mut self, tags: &[String]) -> Result<(), FilterError> {
        self.tags = dedup_normalized(tags);
        Ok(())
    }
}
