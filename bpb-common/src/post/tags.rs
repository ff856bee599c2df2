//! # Post Tags Module
//!
//! Tags are how boards describe a post. Every [`Tag`] keeps the raw text the board sent (spelling,
//! underscores and case untouched) together with the [`TagType`] the board assigned to it.
//!
//! Filtering only cares about four buckets, see [`TagBucket`]. Board-specific types such as
//! e621's `species` or `lore` fold into the general bucket.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single tag exactly as a board returned it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Raw text, e.g. "blue_sky" or "skadi_(arknights)".
    tag: String,
    tag_type: TagType,
}

/// The category a board assigned to a tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TagType {
    /// Artist tags.
    Author,
    /// Copyright, series or franchise tags.
    Copyright,
    /// Named characters.
    Character,
    /// Species tags, mostly from e621.
    Species,
    /// Everything describing the picture itself.
    General,
    /// Setting/lore tags, mostly from e621.
    Lore,
    /// Tags about the post rather than the picture ("highres", "commentary_request").
    Meta,
    /// Boards that don't categorize their tags.
    Any,
}

/// The four buckets a post's tags are evaluated in, in evaluation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagBucket {
    General,
    Artist,
    Character,
    Copyright,
}

impl TagBucket {
    /// Fixed evaluation order.
    pub const ORDER: [Self; 4] = [Self::General, Self::Artist, Self::Character, Self::Copyright];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Artist => "artist",
            Self::Character => "character",
            Self::Copyright => "copyright",
        }
    }
}

impl Display for TagBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TagType {
    /// Which of the four filtering buckets this tag type belongs to.
    pub const fn bucket(self) -> TagBucket {
        match self {
            Self::Author => TagBucket::Artist,
            Self::Character => TagBucket::Character,
            Self::Copyright => TagBucket::Copyright,
            Self::Species | Self::General | Self::Lore | Self::Meta | Self::Any => {
                TagBucket::General
            }
        }
    }
}

impl Tag {
    pub fn new(text: &str, tag_type: TagType) -> Self {
        Self {
            tag: text.to_string(),
            tag_type,
        }
    }

    /// Shorthand for a [`TagType::General`] tag.
    pub fn general(text: &str) -> Self {
        Self::new(text, TagType::General)
    }

    /// Raw text of the tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub const fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub const fn bucket(&self) -> TagBucket {
        self.tag_type.bucket()
    }

    /// Whether the tag describes visual content and may end up in a prompt.
    ///
    /// Artist, copyright, lore and meta tags describe the artwork's context instead.
    pub const fn is_prompt_tag(&self) -> bool {
        match self.tag_type {
            TagType::Author | TagType::Copyright | TagType::Lore | TagType::Meta => false,
            TagType::Character | TagType::Species | TagType::General | TagType::Any => true,
        }
    }
}
