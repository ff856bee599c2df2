//! Synonym groups
//!
//! Some concepts have several accepted spellings on boards ("grayscale", "greyscale",
//! "monochrome"). Putting one of them in a removal or favorites list should cover all of them.
//! A [`SynonymExpander`] maps each normalized member to its group so those lists can be closed
//! over their aliases at compile time.
use ahash::{AHashMap, AHashSet};
use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::normalize::normalize;

/// Groups every expander starts from.
pub const DEFAULT_SYNONYM_GROUPS: &[&[&str]] = &[
    &["grayscale", "greyscale", "monochrome"],
    &["grey_hair", "gray_hair"],
    &["grey_eyes", "gray_eyes"],
    &["blonde_hair", "blond_hair", "yellow_hair"],
    &["purple_eyes", "violet_eyes"],
    &["yellow_eyes", "golden_eyes", "amber_eyes"],
    &["thighhighs", "thigh_highs", "thigh-high_socks"],
    &["speech_bubble", "speech_balloon"],
    &["watermark", "watermarked"],
    &["signature", "signed"],
    &["rabbit_ears", "bunny_ears"],
    &["cat_ears", "nekomimi"],
    &["animal_ears", "kemonomimi_mode"],
    &["pokemon", "pok\u{e9}mon"],
];

static DEFAULT_EXPANDER: Lazy<SynonymExpander> =
    Lazy::new(|| SynonymExpander::new(DEFAULT_SYNONYM_GROUPS));

/// Immutable lookup from a normalized tag to its synonym group.
#[derive(Debug, Clone, Default)]
pub struct SynonymExpander {
    groups: Vec<AHashSet<String>>,
    lookup: AHashMap<String, usize>,
}

impl SynonymExpander {
    /// Build an expander from raw groups.
    ///
    /// Members are normalized; members that normalize to nothing are dropped, and so are groups
    /// left with fewer than two members. A tag belongs to at most one group: a later group that
    /// repeats a member loses that member with a warning.
    pub fn new<G, S>(groups: &[G]) -> Self
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut expander = Self::default();
        expander.extend(groups);
        expander
    }

    /// The shared expander built from [`DEFAULT_SYNONYM_GROUPS`].
    pub fn global() -> &'static Self {
        &DEFAULT_EXPANDER
    }

    /// Built-in groups plus `extra` groups, usually coming from the config file.
    pub fn with_defaults<G, S>(extra: &[G]) -> Self
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut expander = Self::global().clone();
        expander.extend(extra);
        expander
    }

    fn extend<G, S>(&mut self, groups: &[G])
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        for raw in groups {
            let mut members: AHashSet<String> = AHashSet::new();
            for member in raw.as_ref() {
                let key = normalize(member.as_ref());
                if key.is_empty() {
                    continue;
                }
                if self.lookup.contains_key(&key) {
                    warn!("Synonym {key:?} already belongs to another group, skipping it");
                    continue;
                }
                members.insert(key);
            }

            if members.len() < 2 {
                continue;
            }

            let idx = self.groups.len();
            for key in &members {
                self.lookup.insert(key.clone(), idx);
            }
            self.groups.push(members);
        }

        debug!("Synonym expander holds {} groups", self.groups.len());
    }

    /// Group containing the normalized `tag`, if any.
    #[inline]
    pub fn group_of(&self, tag: &str) -> Option<&AHashSet<String>> {
        self.lookup.get(tag).map(|&idx| &self.groups[idx])
    }

    /// Union the group of the normalized `tag` into `target`. Tags without a group are left
    /// alone; the caller is expected to have inserted `tag` itself already.
    pub fn expand(&self, tag: &str, target: &mut AHashSet<String>) {
        if let Some(group) = self.group_of(tag) {
            target.extend(group.iter().cloned());
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
