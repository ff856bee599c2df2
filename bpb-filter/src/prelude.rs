pub use crate::config::FilterConfig;
pub use crate::engine::{PostFilter, RejectReason, Rejection, RejectionRecord, Verdict};
pub use crate::error::FilterError;
pub use crate::lists::{MemoryListStore, TagListStore};
pub use crate::normalize::normalize;
pub use crate::prefetch::{CandidateSet, FetchRequest, PostFetch, Prefetcher};
pub use crate::removal::RemovalContext;
pub use crate::session::{AllowedSubjectSet, SessionColorBasis};
pub use crate::synonyms::SynonymExpander;
pub use crate::toggles::FilterToggles;
