//! Tag normalization, classification and post filtering for booru-driven prompt building.
//!
//! The pieces, leaves first:
//! - [`normalize`]: canonical comparison keys for tags.
//! - [`classify`]: category predicates (clothing, text, furry, headwear, colors, series, subjects).
//! - [`synonyms`]: synonym groups that close removal and favorites lists over aliases.
//! - [`removal`]: removal lists and favorites compiled into a [`RemovalContext`].
//! - [`engine`]: the per-post accept/reject decision, [`PostFilter`].
//! - [`prefetch`]: fetch + filter rounds until a batch has enough accepted posts.
//!
//! Everything is synchronous and request-scoped; nothing here keeps state between requests.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod lists;
pub mod normalize;
pub mod prefetch;
pub mod prelude;
pub mod removal;
pub mod session;
pub mod synonyms;
pub mod toggles;


pub use engine::PostFilter;
pub use removal::RemovalContext;
