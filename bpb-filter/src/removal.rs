//! Removal lists
//!
//! A removal list is a set of user-written entries, each one either an exact tag or a wildcard
//! pattern:
//!
//! | entry         | kind      | removes                                  |
//! |---------------|-----------|------------------------------------------|
//! | `watermark`   | exact     | `watermark` and its synonyms             |
//! | `holding_*`   | prefix    | `holding sword`, `holding cup`, ...      |
//! | `*_text`      | suffix    | `japanese text`, `english text`, ...     |
//! | `*weapon*`    | contains  | anything with `weapon` inside            |
//! | `*hair*ribbon`| pattern   | full match against `.*hair.*ribbon`      |
//!
//! Entries are compiled once per request into a [`RemovalContext`]. Favorites are compiled into
//! the same context and always win: a favorite tag never matches, whatever else the list says.
use std::fmt::Debug;

use ahash::AHashSet;
use log::{debug, trace, warn};
use regex::Regex;

use crate::error::FilterError;
use crate::lists::TagListStore;
use crate::normalize::normalize;
use crate::synonyms::SynonymExpander;

/// Above this many `*term*` entries a single alternation regex replaces per-term scans.
pub const CONTAINS_REGEX_THRESHOLD: usize = 50;

/// Compiled, immutable form of a removal list plus favorites.
#[derive(Clone, Default)]
pub struct RemovalContext {
    exact: AHashSet<String>,
    prefix: Vec<String>,
    suffix: Vec<String>,
    contains: Vec<String>,
    contains_regex: Option<Regex>,
    regex_objects: Vec<Regex>,
    favorites: AHashSet<String>,
}

impl Debug for RemovalContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemovalContext")
            .field("exact", &self.exact.len())
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("contains", &self.contains.len())
            .field("contains_regex", &self.contains_regex.is_some())
            .field("patterns", &self.regex_objects.len())
            .field("favorites", &self.favorites.len())
            .finish()
    }
}

/// Shape of a single removal entry after looking at its wildcards.
#[derive(Debug, PartialEq, Eq)]
enum EntryKind<'a> {
    Exact(&'a str),
    Prefix(&'a str),
    Suffix(&'a str),
    Contains(&'a str),
    Pattern,
}

fn classify_entry(entry: &str) -> EntryKind<'_> {
    let stars = entry.matches('*').count();
    match stars {
        0 => EntryKind::Exact(entry),
        1 if entry.ends_with('*') => EntryKind::Prefix(&entry[..entry.len() - 1]),
        1 if entry.starts_with('*') => EntryKind::Suffix(&entry[1..]),
        2 if entry.len() > 2 && entry.starts_with('*') && entry.ends_with('*') => {
            EntryKind::Contains(&entry[1..entry.len() - 1])
        }
        _ => EntryKind::Pattern,
    }
}

/// Build the full-match regex for an entry with interior or repeated wildcards.
///
/// Returns `Ok(None)` when the entry has no literal segment at all (`"***"`), which would remove
/// every tag.
fn compile_pattern(entry: &str) -> Result<Option<Regex>, FilterError> {
    let segments: Vec<String> = entry
        .split('*')
        .map(normalize)
        .filter(|s| !s.is_empty())
        .map(|s| regex::escape(&s))
        .collect();

    if segments.is_empty() {
        return Ok(None);
    }

    let lead = if entry.starts_with('*') { ".*" } else { "" };
    let trail = if entry.ends_with('*') { ".*" } else { "" };
    let pattern = format!("^(?:{lead}{}{trail})$", segments.join(".*"));

    Regex::new(&pattern)
        .map(Some)
        .map_err(|source| FilterError::InvalidPattern {
            pattern: entry.to_string(),
            source,
        })
}

fn push_unique(list: &mut Vec<String>, term: String) {
    if !list.contains(&term) {
        list.push(term);
    }
}

impl RemovalContext {
    /// Compile raw removal entries and favorites using the built-in synonym groups.
    pub fn compile<R, F>(raw_entries: &[R], favorites_raw: &[F]) -> Self
    where
        R: AsRef<str>,
        F: AsRef<str>,
    {
        Self::compile_with(raw_entries, favorites_raw, SynonymExpander::global())
    }

    /// Compile raw removal entries and favorites with a caller-supplied synonym expander.
    ///
    /// Never fails: entries that can't be compiled are logged and skipped.
    pub fn compile_with<R, F>(
        raw_entries: &[R],
        favorites_raw: &[F],
        synonyms: &SynonymExpander,
    ) -> Self
    where
        R: AsRef<str>,
        F: AsRef<str>,
    {
        let mut ctx = Self::default();

        for raw in raw_entries {
            let entry = raw.as_ref().trim();
            if entry.is_empty() {
                continue;
            }

            match classify_entry(entry) {
                EntryKind::Exact(body) => {
                    let key = normalize(body);
                    if key.is_empty() {
                        continue;
                    }
                    synonyms.expand(&key, &mut ctx.exact);
                    ctx.exact.insert(key);
                }
                EntryKind::Prefix(body) | EntryKind::Suffix(body) | EntryKind::Contains(body)
                    if normalize(body).is_empty() =>
                {
                    warn!("Removal entry {entry:?} would match every tag, skipping it");
                }
                EntryKind::Prefix(body) => push_unique(&mut ctx.prefix, normalize(body)),
                EntryKind::Suffix(body) => push_unique(&mut ctx.suffix, normalize(body)),
                EntryKind::Contains(body) => push_unique(&mut ctx.contains, normalize(body)),
                EntryKind::Pattern => match compile_pattern(entry) {
                    Ok(Some(re)) => ctx.regex_objects.push(re),
                    Ok(None) => {
                        warn!("Removal entry {entry:?} would match every tag, skipping it");
                    }
                    Err(e) => warn!("{e}"),
                },
            }
        }

        if ctx.contains.len() > CONTAINS_REGEX_THRESHOLD {
            let alternation = ctx
                .contains
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            match Regex::new(&alternation) {
                Ok(re) => ctx.contains_regex = Some(re),
                Err(e) => warn!("Falling back to per-term contains scan: {e}"),
            }
        }

        for raw in favorites_raw {
            let key = normalize(raw.as_ref());
            if key.is_empty() {
                continue;
            }
            synonyms.expand(&key, &mut ctx.favorites);
            ctx.favorites.insert(key);
        }

        debug!("Compiled removal list: {ctx:?}");
        ctx
    }

    /// Load both lists from their stores and compile them.
    pub fn from_stores<R, F>(
        removal: &R,
        favorites: &F,
        synonyms: &SynonymExpander,
    ) -> Result<Self, FilterError>
    where
        R: TagListStore + ?Sized,
        F: TagListStore + ?Sized,
    {
        let entries = removal.load()?;
        let favs = favorites.load()?;
        Ok(Self::compile_with(&entries, &favs, synonyms))
    }

    /// Whether a normalized tag should be removed. Favorites never match.
    pub fn matches(&self, normalized_tag: &str) -> bool {
        if normalized_tag.is_empty() || self.favorites.contains(normalized_tag) {
            return false;
        }

        let hit = self.exact.contains(normalized_tag)
            || self.prefix.iter().any(|p| normalized_tag.starts_with(p.as_str()))
            || self.suffix.iter().any(|s| normalized_tag.ends_with(s.as_str()))
            || match &self.contains_regex {
                Some(re) => re.is_match(normalized_tag),
                None => self.contains.iter().any(|c| normalized_tag.contains(c.as_str())),
            }
            || self.regex_objects.iter().any(|re| re.is_match(normalized_tag));

        if hit {
            trace!("{normalized_tag:?} matched the removal list");
        }
        hit
    }

    /// [`matches`](Self::matches) for a tag that still needs normalizing.
    pub fn matches_raw(&self, raw_tag: &str) -> bool {
        self.matches(&normalize(raw_tag))
    }

    #[inline]
    pub fn is_favorite(&self, normalized_tag: &str) -> bool {
        self.favorites.contains(normalized_tag)
    }

    /// No removal rule at all. Favorites alone don't make a context active.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
            && self.prefix.is_empty()
            && self.suffix.is_empty()
            && self.contains.is_empty()
            && self.regex_objects.is_empty()
    }
}
