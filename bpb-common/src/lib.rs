//! Data model shared by every stage of the prompt builder.
//!
//! A [`Post`](post::Post) is what a tag-board source hands back: an id, where it came from, a
//! score, the file url, a [`Rating`](post::rating::Rating) and a list of typed
//! [`Tag`](post::tags::Tag)s. Nothing in this crate knows how posts are fetched or filtered.
use std::fmt::{Display, Formatter};

// Public Exports
pub use log;
pub use serde;

use serde::{Deserialize, Serialize};

pub mod post;

/// Every tag-board source a post can come from.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageBoards {
    /// ```https://danbooru.donmai.us```
    Danbooru,
    /// ```https://safebooru.donmai.us```, the all-ages mirror of Danbooru.
    Safebooru,
    /// ```https://e621.net``` or its safe variant ```https://e926.net```.
    E621,
    /// ```https://rule34.xxx```
    Rule34,
    /// ```https://realbooru.com```
    Realbooru,
    /// ```https://konachan.com``` or its safe variant ```https://konachan.net```.
    Konachan,
    /// ```https://yande.re```
    Yandere,
    /// ```https://gelbooru.com```
    Gelbooru,
}

impl Display for ImageBoards {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Danbooru => "danbooru",
            Self::Safebooru => "safebooru",
            Self::E621 => "e621",
            Self::Rule34 => "rule34",
            Self::Realbooru => "realbooru",
            Self::Konachan => "konachan",
            Self::Yandere => "yandere",
            Self::Gelbooru => "gelbooru",
        };
        f.write_str(name)
    }
}

impl ImageBoards {
    /// Resolve a source from its lowercase name, as written in config files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "danbooru" => Some(Self::Danbooru),
            "safebooru" => Some(Self::Safebooru),
            "e621" | "e926" => Some(Self::E621),
            "rule34" => Some(Self::Rule34),
            "realbooru" => Some(Self::Realbooru),
            "konachan" => Some(Self::Konachan),
            "yandere" | "yande.re" => Some(Self::Yandere),
            "gelbooru" => Some(Self::Gelbooru),
            _ => None,
        }
    }
}
