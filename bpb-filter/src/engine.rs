//! Post filter
//!
//! A [`PostFilter`] decides, post by post, whether a retrieved post is usable for the current
//! request. It walks the post's tags bucket by bucket (general, artist, character, copyright) and
//! stops at the first tag that trips a rule. For every tag the rules are tried in this order:
//!
//! 1. artist tags (`remove-artist`)
//! 2. character tags (`remove-character`)
//! 3. series/copyright tags (`remove-series`)
//! 4. clothing (`remove-clothing`)
//! 5. text and watermarks (`remove-text`)
//! 6. furry traits (`remove-furry`)
//! 7. headwear and halos (`remove-headwear`)
//! 8. hair/eye colors outside the session basis (`preserve-hair-eye-color`)
//! 9. subject counts (`restrict-subject-count`)
//! 10. the compiled removal list
//!
//! Favorite tags skip all of the above.
use std::cell::RefCell;
use std::fmt::Display;
use std::time::Instant;

use ahash::{AHashMap, AHashSet};
use bpb_common::post::tags::TagBucket;
use bpb_common::post::Post;
use bpb_common::ImageBoards;
use log::debug;

use crate::classify::{
    headcount, is_clothing, is_furry, is_headwear, is_series, is_subject, is_textual, Headcount,
};
use crate::normalize::{normalize, prompt_form};
use crate::removal::RemovalContext;
use crate::session::{AllowedSubjectSet, SessionColorBasis};
use crate::toggles::FilterToggles;

/// Which rule rejected a tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RejectReason {
    Artist,
    Character,
    Series,
    Clothing,
    Text,
    Furry,
    Headwear,
    ColorConflict,
    /// A subject-count tag outside the subjects pinned by the caller's prompt.
    SubjectMismatch,
    /// Two subject-count tags in one post that disagree on the head count.
    MultipleSubjects,
    RemovalList,
}

impl RejectReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Character => "character",
            Self::Series => "series",
            Self::Clothing => "clothing",
            Self::Text => "text",
            Self::Furry => "furry",
            Self::Headwear => "headwear",
            Self::ColorConflict => "color-conflict",
            Self::SubjectMismatch => "subject-mismatch",
            Self::MultipleSubjects => "multiple-subjects",
            Self::RemovalList => "removal-list",
        }
    }
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tag that got a post rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub raw_tag: String,
    pub normalized: String,
    pub reason: RejectReason,
    pub bucket: TagBucket,
}

/// Outcome of [`PostFilter::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    #[inline]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub const fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Accepted => None,
            Self::Rejected(r) => Some(r.reason),
        }
    }
}

/// Diagnostic entry for one rejected post. Only ever logged or shown; never drives control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionRecord {
    pub post_id: u64,
    pub website: ImageBoards,
    pub raw_tag: String,
    pub normalized: String,
    pub reason: RejectReason,
    pub bucket: TagBucket,
}

impl RejectionRecord {
    pub fn new(post: &Post, rejection: Rejection) -> Self {
        Self {
            post_id: post.id,
            website: post.website,
            raw_tag: rejection.raw_tag,
            normalized: rejection.normalized,
            reason: rejection.reason,
            bucket: rejection.bucket,
        }
    }
}

/// `true` when the raw tag carries a qualifier in parentheses after its name, which is how boards
/// disambiguate characters: `skadi_(arknights)`.
fn has_trailing_qualifier(raw: &str) -> bool {
    raw.match_indices('(')
        .any(|(idx, _)| idx > 0 && raw[idx..].contains(')'))
}

/// Request-scoped post filter.
///
/// Everything it holds is built once at the start of a request and only read afterwards. The
/// normalization memo is the one exception: it grows as tags are seen and is dropped with the
/// filter, so it never outlives the request.
#[derive(Debug)]
pub struct PostFilter {
    context: RemovalContext,
    toggles: FilterToggles,
    colors: SessionColorBasis,
    subjects: AllowedSubjectSet,
    disabled: bool,
    memo: RefCell<AHashMap<String, String>>,
}

impl PostFilter {
    /// Creates a new filter for one request.
    ///
    /// # Arguments
    /// * `context`: The compiled removal list and favorites.
    /// * `toggles`: Which category rules are active.
    /// * `colors`: Hair/eye colors from the caller's prompt, used by `PRESERVE_HAIR_EYE_COLOR`.
    /// * `subjects`: Subject-count tags from the caller's prompt, used by
    ///   `RESTRICT_SUBJECT_COUNT`. Empty means self-consistency mode.
    /// * `disabled`: Filtering is administratively off for this request; every post is accepted.
    #[must_use]
    pub fn new(
        context: RemovalContext,
        toggles: FilterToggles,
        colors: SessionColorBasis,
        subjects: AllowedSubjectSet,
        disabled: bool,
    ) -> Self {
        Self {
            context,
            toggles,
            colors,
            subjects,
            disabled,
            memo: RefCell::new(AHashMap::new()),
        }
    }

    /// Whether this filter can reject anything at all.
    pub fn is_active(&self) -> bool {
        !self.disabled && (!self.toggles.is_empty() || !self.context.is_empty())
    }

    pub const fn toggles(&self) -> FilterToggles {
        self.toggles
    }

    pub const fn context(&self) -> &RemovalContext {
        &self.context
    }

    fn normalized(&self, raw: &str) -> String {
        if let Some(key) = self.memo.borrow().get(raw) {
            return key.clone();
        }
        let key = normalize(raw);
        self.memo.borrow_mut().insert(raw.to_string(), key.clone());
        key
    }

    /// Rules 1 to 8: everything that only depends on the tag itself.
    fn category_rule(&self, bucket: TagBucket, raw: &str, key: &str) -> Option<RejectReason> {
        let on = |flag| self.toggles.contains(flag);

        if on(FilterToggles::REMOVE_ARTIST)
            && (bucket == TagBucket::Artist
                || key.ends_with(" artist")
                || key.contains(" drawn by"))
        {
            return Some(RejectReason::Artist);
        }

        if on(FilterToggles::REMOVE_CHARACTER)
            && (bucket == TagBucket::Character
                || has_trailing_qualifier(raw)
                || [" character", " characters", " series", " franchise"]
                    .iter()
                    .any(|s| key.ends_with(s)))
        {
            return Some(RejectReason::Character);
        }

        if on(FilterToggles::REMOVE_SERIES) && (bucket == TagBucket::Copyright || is_series(raw))
        {
            return Some(RejectReason::Series);
        }

        if on(FilterToggles::REMOVE_CLOTHING) && is_clothing(key) {
            return Some(RejectReason::Clothing);
        }

        if on(FilterToggles::REMOVE_TEXT) && is_textual(key) {
            return Some(RejectReason::Text);
        }

        if on(FilterToggles::REMOVE_FURRY) && is_furry(key) {
            return Some(RejectReason::Furry);
        }

        if on(FilterToggles::REMOVE_HEADWEAR) && is_headwear(key) {
            return Some(RejectReason::Headwear);
        }

        if on(FilterToggles::PRESERVE_HAIR_EYE_COLOR) && self.colors.conflicts_with(key) {
            return Some(RejectReason::ColorConflict);
        }

        None
    }

    /// Rule 9. `implicit` carries the head count established by earlier subject tags of the same
    /// post when no subjects are pinned.
    fn subject_rule(&self, key: &str, implicit: &mut Option<Headcount>) -> Option<RejectReason> {
        if !self.toggles.contains(FilterToggles::RESTRICT_SUBJECT_COUNT) || !is_subject(key) {
            return None;
        }

        if !self.subjects.is_empty() {
            return (!self.subjects.contains(key)).then_some(RejectReason::SubjectMismatch);
        }

        let count = headcount(key)?;
        match *implicit {
            None => *implicit = Some(count),
            Some(first) if first.agrees_with(count) => {
                // "multiple girls" followed by "2girls" narrows down to two
                if first == Headcount::Multiple {
                    *implicit = Some(count);
                }
            }
            Some(_) => return Some(RejectReason::MultipleSubjects),
        }
        None
    }

    /// Decide whether `post` is acceptable. Never modifies the post.
    pub fn evaluate(&self, post: &Post) -> Verdict {
        if self.disabled {
            return Verdict::Accepted;
        }

        let mut implicit = None;

        for (bucket, tag) in post.tags_by_bucket() {
            let raw = tag.tag();
            let key = self.normalized(raw);
            if key.is_empty() || self.context.is_favorite(&key) {
                continue;
            }

            let reason = self
                .category_rule(bucket, raw, &key)
                .or_else(|| self.subject_rule(&key, &mut implicit))
                .or_else(|| self.context.matches(&key).then_some(RejectReason::RemovalList));

            if let Some(reason) = reason {
                debug!("Post {} rejected by {raw:?} ({reason})", post.id);
                return Verdict::Rejected(Rejection {
                    raw_tag: raw.to_string(),
                    normalized: key,
                    reason,
                    bucket,
                });
            }
        }

        Verdict::Accepted
    }

    /// Split `list` into accepted posts and a rejection record per rejected post.
    #[must_use]
    pub fn filter(&self, list: Vec<Post>) -> (Vec<Post>, Vec<RejectionRecord>) {
        let start = Instant::now();
        let original_size = list.len();

        let mut kept = Vec::with_capacity(original_size);
        let mut rejections = Vec::new();

        for post in list {
            match self.evaluate(&post) {
                Verdict::Accepted => kept.push(post),
                Verdict::Rejected(r) => rejections.push(RejectionRecord::new(&post, r)),
            }
        }

        debug!("Filtering took {:?}", start.elapsed());
        debug!("Removed {} of {original_size} posts", rejections.len());

        (kept, rejections)
    }

    /// Prompt-ready tags of `post`: the tags that describe the picture, de-underscored, minus
    /// every tag the category rules or the removal list would flag. Favorites always stay.
    ///
    /// Subject-count consistency is a property of whole posts and isn't applied here.
    pub fn strip_tags(&self, post: &Post) -> Vec<String> {
        let mut seen: AHashSet<String> = AHashSet::new();
        let mut out = Vec::new();

        for (bucket, tag) in post.tags_by_bucket() {
            if !tag.is_prompt_tag() {
                continue;
            }

            let raw = tag.tag();
            let key = self.normalized(raw);
            if key.is_empty() || seen.contains(&key) {
                continue;
            }

            let keep = self.context.is_favorite(&key)
                || (self.category_rule(bucket, raw, &key).is_none() && !self.context.matches(&key));

            if keep {
                out.push(prompt_form(raw));
            }
            seen.insert(key);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpb_common::post::rating::Rating;
    use bpb_common::post::tags::{Tag, TagType};

    const NONE: [&str; 0] = [];

    fn post(tags: &[(&str, TagType)]) -> Post {
        Post {
            id: 1,
            website: ImageBoards::Danbooru,
            score: 0,
            url: "https://cdn.example/1.png".to_string(),
            rating: Rating::General,
            tags: tags.iter().map(|(t, ty)| Tag::new(t, *ty)).collect(),
        }
    }

    fn general(tags: &[&str]) -> Post {
        post(&tags.iter().map(|t| (*t, TagType::General)).collect::<Vec<_>>())
    }

    fn filter_with(toggles: FilterToggles) -> PostFilter {
        PostFilter::new(
            RemovalContext::default(),
            toggles,
            SessionColorBasis::default(),
            AllowedSubjectSet::default(),
            false,
        )
    }

    #[test]
    fn qualifier_anywhere_after_the_name() {
        assert!(has_trailing_qualifier("skadi_(arknights)"));
        assert!(has_trailing_qualifier("(a)_b_(c)"));
        assert!(!has_trailing_qualifier("(cosplay)"));
        assert!(!has_trailing_qualifier("smile"));
        assert!(!has_trailing_qualifier("open_(mouth"));
    }

    #[test]
    fn inactive_filter_accepts_everything() {
        let f = filter_with(FilterToggles::empty());
        assert!(!f.is_active());
        assert_eq!(f.evaluate(&general(&["watermark", "1girl"])), Verdict::Accepted);
    }

    #[test]
    fn artist_by_bucket_or_shape() {
        let f = filter_with(FilterToggles::REMOVE_ARTIST);
        let by_bucket = post(&[("1girl", TagType::General), ("wlop", TagType::Author)]);
        let verdict = f.evaluate(&by_bucket);
        assert_eq!(verdict.reason(), Some(RejectReason::Artist));
        let Verdict::Rejected(r) = verdict else {
            unreachable!()
        };
        assert_eq!(r.bucket, TagBucket::Artist);
        assert_eq!(r.raw_tag, "wlop");

        assert!(f.evaluate(&general(&["guest_artist"])).is_rejected());
        assert!(f.evaluate(&general(&["fanart_drawn_by_someone"])).is_rejected());
        assert!(!f.evaluate(&general(&["artistic"])).is_rejected());
    }

    #[test]
    fn character_by_bucket_or_qualifier() {
        let f = filter_with(FilterToggles::REMOVE_CHARACTER);
        assert_eq!(
            f.evaluate(&post(&[("hatsune_miku", TagType::Character)])).reason(),
            Some(RejectReason::Character)
        );
        assert!(f.evaluate(&general(&["skadi_(arknights)"])).is_rejected());
        assert!(f.evaluate(&general(&["original_characters"])).is_rejected());
        // wrapper at position 0 is not a qualifier
        assert!(!f.evaluate(&general(&["(smile)"])).is_rejected());
        assert!(!f.evaluate(&general(&["smile_(unclosed"])).is_rejected());
    }

    #[test]
    fn series_by_bucket_or_classifier() {
        let f = filter_with(FilterToggles::REMOVE_SERIES);
        assert_eq!(
            f.evaluate(&post(&[("some_show", TagType::Copyright)])).reason(),
            Some(RejectReason::Series)
        );
        assert!(f.evaluate(&general(&["gundam_series"])).is_rejected());
        assert!(!f.evaluate(&general(&["1girl"])).is_rejected());
    }

    #[test]
    fn category_toggles() {
        let cases = [
            (FilterToggles::REMOVE_CLOTHING, "white_dress", RejectReason::Clothing),
            (FilterToggles::REMOVE_TEXT, "english_text", RejectReason::Text),
            (FilterToggles::REMOVE_FURRY, "fox_ears", RejectReason::Furry),
            (FilterToggles::REMOVE_HEADWEAR, "witch_hat", RejectReason::Headwear),
        ];
        for (toggle, tag, reason) in cases {
            assert_eq!(filter_with(toggle).evaluate(&general(&[tag])).reason(), Some(reason));
            assert!(!filter_with(FilterToggles::empty())
                .evaluate(&general(&[tag]))
                .is_rejected());
        }
        let f = filter_with(FilterToggles::REMOVE_CLOTHING);
        assert!(!f.evaluate(&general(&["no_bra", "nude_apron"])).is_rejected());
    }

    #[test]
    fn first_matching_rule_wins() {
        // "skadi_(arknights)" is both a character and, through "arknights", a series
        let f = filter_with(FilterToggles::REMOVE_CHARACTER | FilterToggles::REMOVE_SERIES);
        assert_eq!(
            f.evaluate(&general(&["skadi_(arknights)"])).reason(),
            Some(RejectReason::Character)
        );
    }

    #[test]
    fn color_conflicts_follow_basis() {
        let f = PostFilter::new(
            RemovalContext::default(),
            FilterToggles::PRESERVE_HAIR_EYE_COLOR,
            SessionColorBasis::from_prompt("blue hair"),
            AllowedSubjectSet::default(),
            false,
        );
        assert_eq!(
            f.evaluate(&general(&["1girl", "pink_hair"])).reason(),
            Some(RejectReason::ColorConflict)
        );
        assert!(!f.evaluate(&general(&["Blue_Hair", "green_eyes"])).is_rejected());

        let no_basis = filter_with(FilterToggles::PRESERVE_HAIR_EYE_COLOR);
        assert!(!no_basis.evaluate(&general(&["pink_hair"])).is_rejected());
    }

    #[test]
    fn subject_self_consistency() {
        let f = filter_with(FilterToggles::RESTRICT_SUBJECT_COUNT);
        assert_eq!(
            f.evaluate(&general(&["1girl", "2girls"])).reason(),
            Some(RejectReason::MultipleSubjects)
        );
        assert_eq!(f.evaluate(&general(&["1girl", "1girl"])), Verdict::Accepted);
        assert_eq!(f.evaluate(&general(&["1girl", "solo"])), Verdict::Accepted);
        assert_eq!(
            f.evaluate(&general(&["multiple_girls", "2girls", "3girls"])).reason(),
            Some(RejectReason::MultipleSubjects)
        );
        assert_eq!(
            f.evaluate(&general(&["2girls", "multiple_girls"])),
            Verdict::Accepted
        );
        assert_eq!(
            f.evaluate(&general(&["solo", "multiple_girls"])).reason(),
            Some(RejectReason::MultipleSubjects)
        );
    }

    #[test]
    fn subject_state_is_per_post() {
        let f = filter_with(FilterToggles::RESTRICT_SUBJECT_COUNT);
        assert!(!f.evaluate(&general(&["1girl"])).is_rejected());
        assert!(!f.evaluate(&general(&["2girls"])).is_rejected());
    }

    #[test]
    fn pinned_subjects() {
        let f = PostFilter::new(
            RemovalContext::default(),
            FilterToggles::RESTRICT_SUBJECT_COUNT,
            SessionColorBasis::default(),
            AllowedSubjectSet::from_prompt("1girl, solo"),
            false,
        );
        assert!(!f.evaluate(&general(&["1girl", "solo", "smile"])).is_rejected());
        assert_eq!(
            f.evaluate(&general(&["1girl", "1boy"])).reason(),
            Some(RejectReason::SubjectMismatch)
        );
    }

    #[test]
    fn removal_list_is_last() {
        let ctx = RemovalContext::compile(&["white_dress"], &NONE);
        let f = PostFilter::new(
            ctx,
            FilterToggles::REMOVE_CLOTHING,
            SessionColorBasis::default(),
            AllowedSubjectSet::default(),
            false,
        );
        assert_eq!(
            f.evaluate(&general(&["white_dress"])).reason(),
            Some(RejectReason::Clothing)
        );
    }

    #[test]
    fn favorites_bypass_every_rule() {
        let ctx = RemovalContext::compile(&["*hat*"], &["witch_hat", "wlop"]);
        let f = PostFilter::new(
            ctx,
            FilterToggles::REMOVE_HEADWEAR | FilterToggles::REMOVE_ARTIST,
            SessionColorBasis::default(),
            AllowedSubjectSet::default(),
            false,
        );
        let p = post(&[("witch_hat", TagType::General), ("wlop", TagType::Author)]);
        assert_eq!(f.evaluate(&p), Verdict::Accepted);
        assert!(f.evaluate(&general(&["top_hat"])).is_rejected());
    }

    #[test]
    fn disabled_filter_accepts_everything() {
        let f = PostFilter::new(
            RemovalContext::compile(&["1girl"], &NONE),
            FilterToggles::all(),
            SessionColorBasis::default(),
            AllowedSubjectSet::default(),
            true,
        );
        assert!(!f.is_active());
        assert_eq!(f.evaluate(&general(&["1girl"])), Verdict::Accepted);
    }

    #[test]
    fn filter_partitions_and_records() {
        let f = PostFilter::new(
            RemovalContext::compile(&["watermark"], &NONE),
            FilterToggles::empty(),
            SessionColorBasis::default(),
            AllowedSubjectSet::default(),
            false,
        );
        let mut bad = general(&["1girl", "Watermark"]);
        bad.id = 7;
        let good = general(&["1girl"]);

        let (kept, rejected) = f.filter(vec![bad, good]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].post_id, 7);
        assert_eq!(rejected[0].raw_tag, "Watermark");
        assert_eq!(rejected[0].normalized, "watermark");
        assert_eq!(rejected[0].reason, RejectReason::RemovalList);
        assert_eq!(rejected[0].bucket, TagBucket::General);
    }

    #[test]
    fn strip_tags_keeps_prompt_tags_only() {
        let f = PostFilter::new(
            RemovalContext::compile(&["watermark", "*_text"], &NONE),
            FilterToggles::REMOVE_CHARACTER,
            SessionColorBasis::default(),
            AllowedSubjectSet::default(),
            false,
        );
        let p = post(&[
            ("1girl", TagType::General),
            ("watermark", TagType::General),
            ("japanese_text", TagType::General),
            ("blue_hair", TagType::General),
            ("Blue-Hair", TagType::General),
            ("highres", TagType::Meta),
            ("hatsune_miku", TagType::Character),
            ("vocaloid", TagType::Copyright),
        ]);
        assert_eq!(f.strip_tags(&p), vec!["1girl", "blue hair"]);
    }
}
