//! General enum for rating posts found on tag boards
//! # Post Rating
//! Most boards classify posts by how explicit they are. Danbooru-style boards use four levels,
//! older Gelbooru/Moebooru boards use three. Both collapse into this enum:
//! * `General`: nothing suggestive at all.
//! * `Sensitive`: mild suggestiveness, still fine for most audiences.
//! * `Questionable`: partial nudity or clearly suggestive art.
//! * `Explicit`: pornographic or otherwise graphic content.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum Rating {
    General,
    Sensitive,
    Questionable,
    Explicit,
    /// The board sent something that isn't one of the above.
    #[default]
    Unknown,
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Sensitive => write!(f, "sensitive"),
            Self::Questionable => write!(f, "questionable"),
            Self::Explicit => write!(f, "explicit"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl Rating {
    /// Guess the variant from the rating field of a post.
    ///
    /// Three-level boards use `s` for "safe", which maps to [`Rating::General`]; Danbooru's
    /// four-level scheme spells `sensitive` out, so only that form becomes [`Rating::Sensitive`].
    pub fn from_rating_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" | "general" | "s" | "safe" => Self::General,
            "sensitive" => Self::Sensitive,
            "q" | "questionable" => Self::Questionable,
            "e" | "explicit" => Self::Explicit,
            _ => Self::Unknown,
        }
    }
}
