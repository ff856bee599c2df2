//! Prefetch coordinator
//!
//! Downloading images and running a second generation pass are expensive, so before any of that
//! starts the host wants a guarantee: there are at least `needed` posts the filter accepts.
//! [`Prefetcher::ensure_candidates`] filters what the first search returned, asks the fetch
//! collaborator for more a bounded number of times, and if the batch still falls short it gives
//! up on filtering for this request instead of failing it.
use std::collections::BTreeMap;

use ahash::AHashSet;
use bpb_common::post::{Post, PostKey};
use log::{debug, warn};

use crate::engine::{PostFilter, RejectReason, RejectionRecord, Verdict};
use crate::error::FilterError;

/// Default number of extra fetch rounds.
pub const DEFAULT_MAX_ROUNDS: u8 = 3;

/// What the fetch collaborator is asked for on each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub search_terms: Vec<String>,
    /// Highest page the source may read for this round.
    pub page_bound: u16,
    /// Set when the request targets one specific post.
    pub explicit_id: Option<u64>,
}

/// The source of extra posts. Opaque to this crate; each call blocks until the source answers.
pub trait PostFetch {
    fn fetch(&mut self, request: &FetchRequest) -> Result<Vec<Post>, FilterError>;
}

impl<F> PostFetch for F
where
    F: FnMut(&FetchRequest) -> Result<Vec<Post>, FilterError>,
{
    fn fetch(&mut self, request: &FetchRequest) -> Result<Vec<Post>, FilterError> {
        self(request)
    }
}

/// Result of [`Prefetcher::ensure_candidates`].
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    pub kept: Vec<Post>,
    pub rejections: Vec<RejectionRecord>,
    /// `false` when the filter was disabled or had nothing to filter with.
    pub filtering_was_active: bool,
    /// `true` when filtering could not produce enough posts and `kept` holds unfiltered posts.
    pub relaxed: bool,
}

impl CandidateSet {
    /// Rejection counts per reason, in reason order.
    pub fn rejection_summary(&self) -> BTreeMap<RejectReason, usize> {
        let mut summary = BTreeMap::new();
        for record in &self.rejections {
            *summary.entry(record.reason).or_insert(0) += 1;
        }
        summary
    }
}

/// Runs fetch + filter rounds until enough accepted posts exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefetcher {
    max_rounds: u8,
}

impl Default for Prefetcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS)
    }
}

/// Running state of one `ensure_candidates` call.
struct Tally<'a> {
    filter: &'a PostFilter,
    seen: AHashSet<PostKey>,
    kept: Vec<Post>,
    rejections: Vec<RejectionRecord>,
}

impl Tally<'_> {
    /// Filter `posts` into the running state, skipping already seen posts. With a `limit`, stops
    /// as soon as that many posts are kept.
    fn absorb(&mut self, posts: impl IntoIterator<Item = Post>, limit: Option<usize>) -> usize {
        let mut fresh = 0;
        for post in posts {
            if limit.is_some_and(|n| self.kept.len() >= n) {
                break;
            }
            if !self.seen.insert(post.key()) {
                continue;
            }
            fresh += 1;
            match self.filter.evaluate(&post) {
                Verdict::Accepted => self.kept.push(post),
                Verdict::Rejected(r) => self.rejections.push(RejectionRecord::new(&post, r)),
            }
        }
        fresh
    }
}

impl Prefetcher {
    pub const fn new(max_rounds: u8) -> Self {
        Self { max_rounds }
    }

    pub const fn max_rounds(&self) -> u8 {
        self.max_rounds
    }

    /// Make sure at least `needed` accepted posts exist.
    ///
    /// # Arguments
    /// * `initial_posts`: What the first search returned.
    /// * `fetch_more`: Source for extra rounds. Round `n` (1-based) asks for
    ///   `request.page_bound + n`.
    /// * `request`: Search terms and the page bound used by the first search.
    /// * `needed`: How many accepted posts the batch needs.
    /// * `single_post_lookup`: The caller asked for one specific post; no extra rounds are run.
    /// * `filter`: The request's post filter.
    ///
    /// Never fails. Fetch errors count as an empty round, and when the rounds run out the
    /// unfiltered `initial_posts` come back with `relaxed` set.
    pub fn ensure_candidates<F>(
        &self,
        initial_posts: Vec<Post>,
        fetch_more: &mut F,
        request: &FetchRequest,
        needed: usize,
        single_post_lookup: bool,
        filter: &PostFilter,
    ) -> CandidateSet
    where
        F: PostFetch + ?Sized,
    {
        if !filter.is_active() {
            debug!("Filtering inactive, keeping all {} posts", initial_posts.len());
            return CandidateSet {
                kept: initial_posts,
                ..Default::default()
            };
        }

        let mut state = Tally {
            filter,
            seen: AHashSet::with_capacity(initial_posts.len()),
            kept: Vec::with_capacity(needed.max(initial_posts.len())),
            rejections: Vec::new(),
        };
        state.absorb(initial_posts.iter().cloned(), None);

        debug!(
            "First pass kept {} of {} posts ({needed} needed)",
            state.kept.len(),
            initial_posts.len()
        );

        if state.kept.len() >= needed || single_post_lookup {
            return CandidateSet {
                kept: state.kept,
                rejections: state.rejections,
                filtering_was_active: true,
                relaxed: false,
            };
        }

        let mut fetched_extra: Vec<Post> = Vec::new();

        for round in 1..=self.max_rounds {
            let round_request = FetchRequest {
                page_bound: request.page_bound.saturating_add(u16::from(round)),
                ..request.clone()
            };

            let posts = match fetch_more.fetch(&round_request) {
                Ok(posts) => posts,
                Err(e) => {
                    warn!("Prefetch round {round} failed: {e}");
                    continue;
                }
            };

            if initial_posts.is_empty() {
                fetched_extra.extend(posts.iter().cloned());
            }

            let fresh = state.absorb(posts, Some(needed));
            debug!(
                "Prefetch round {round}: {fresh} new posts, {} of {needed} kept",
                state.kept.len()
            );

            if state.kept.len() >= needed {
                return CandidateSet {
                    kept: state.kept,
                    rejections: state.rejections,
                    filtering_was_active: true,
                    relaxed: false,
                };
            }
        }

        warn!(
            "Only {} of {needed} posts passed the filter after {} extra rounds, relaxing filters",
            state.kept.len(),
            self.max_rounds
        );

        // an empty first search still hands back whatever the extra rounds found
        let kept = if initial_posts.is_empty() {
            dedup_posts(fetched_extra)
        } else {
            initial_posts
        };

        CandidateSet {
            kept,
            rejections: state.rejections,
            filtering_was_active: true,
            relaxed: true,
        }
    }
}

fn dedup_posts(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = AHashSet::with_capacity(posts.len());
    posts.into_iter().filter(|p| seen.insert(p.key())).collect()
}
