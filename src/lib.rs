//! # Booru Prompt Builder
//!
//! Turns tag metadata of posts retrieved from booru sites into sanitized prompts, and decides
//! which retrieved posts are usable at all.
//!
//! This crate only re-exports the workspace members:
//! - [`bpb_common`]: the [`Post`] model shared by every stage.
//! - [`bpb_filter`]: tag normalization, classification, removal lists and prefetch filtering.
pub use bpb_common;
pub use bpb_filter;

pub use bpb_common::post::rating::Rating;
pub use bpb_common::post::tags::{Tag, TagBucket, TagType};
pub use bpb_common::post::Post;
pub use bpb_common::ImageBoards;

pub use bpb_filter::prelude;
