//! Main representation of a tag-board post
//!
//! # Post
//! A [`Post`] is the generic shape every source is mapped into before filtering. Posts are
//! immutable values as far as the filter is concerned: it classifies them, it never edits them.
use serde::{Deserialize, Serialize};

use std::{cmp::Ordering, fmt::Debug};

use crate::ImageBoards;

use self::{
    rating::Rating,
    tags::{Tag, TagBucket},
};

pub mod rating;
pub mod tags;

/// Identity of a post across fetch rounds: the same id may exist on two boards, and a board may
/// serve the same id under a different file when an image is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostKey {
    pub website: ImageBoards,
    pub id: u64,
    pub url: String,
}

/// Catchall model for the parts of a post the prompt builder needs.
#[derive(Clone, Serialize, Deserialize, Eq)]
pub struct Post {
    /// ID number of the post given by the board
    pub id: u64,
    /// The board this post was extracted from
    pub website: ImageBoards,
    /// Board score (favorites/upvotes). Some boards report negative values.
    pub score: i64,
    /// Direct URL of the original file
    pub url: String,
    pub rating: Rating,
    /// Every tag of the post, in board order. Buckets are derived from each tag's type.
    pub tags: Vec<Tag>,
}

impl Debug for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Post")
            .field("Post ID", &self.id)
            .field("Website", &self.website)
            .field("Score", &self.score)
            .field("File URL", &self.url)
            .field("Rating", &self.rating)
            .field("Tag List", &self.tags)
            .finish()
    }
}

impl Ord for Post {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Post {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.key_parts() == other.key_parts()
    }
}

impl Post {
    fn key_parts(&self) -> (ImageBoards, u64, &str) {
        (self.website, self.id, &self.url)
    }

    /// Identity key used to skip posts that were already seen during a request.
    #[inline]
    pub fn key(&self) -> PostKey {
        PostKey {
            website: self.website,
            id: self.id,
            url: self.url.clone(),
        }
    }

    /// Tags that fall into `bucket`, in board order.
    pub fn bucket(&self, bucket: TagBucket) -> impl Iterator<Item = &Tag> + '_ {
        self.tags.iter().filter(move |t| t.bucket() == bucket)
    }

    /// All tags grouped by bucket, in [`TagBucket::ORDER`].
    pub fn tags_by_bucket(&self) -> impl Iterator<Item = (TagBucket, &Tag)> + '_ {
        TagBucket::ORDER
            .into_iter()
            .flat_map(move |b| self.bucket(b).map(move |t| (b, t)))
    }
}
