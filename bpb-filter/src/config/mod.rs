//! Filter configuration
//!
//! # The filter config file
//! Removal lists, favorites and rule toggles live in a TOML file, by default at
//! `$XDG_CONFIG_HOME/booru-prompt-builder/filter.toml` (or the OS equivalent). The file is
//! created with the content of [`DEFAULT_FILTER_TOML`] the first time it's looked up:
//!
//! ```toml
//! [filter]
//! enabled = true
//! remove = ["watermark", "*_text"]
//! favorites = ["blue_hair"]
//!
//! [filter.toggles]
//! remove_text = true
//! restrict_subject_count = true
//!
//! [prefetch]
//! max_rounds = 3
//!
//! [synonyms]
//! groups = [["cape", "cloak"]]
//! ```
//!
//! Any missing key falls back to its default.
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::PostFilter;
use crate::error::FilterError;
use crate::prefetch::{FetchRequest, Prefetcher, DEFAULT_MAX_ROUNDS};
use crate::removal::RemovalContext;
use crate::session::{AllowedSubjectSet, SessionColorBasis};
use crate::synonyms::SynonymExpander;
use crate::toggles::{FilterToggles, ToggleConfig};

/// Content written to a fresh config file.
pub const DEFAULT_FILTER_TOML: &str = include_str!("filter.toml");

const CONFIG_FILE_NAME: &str = "filter.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FilterSection {
    pub enabled: bool,
    pub remove: Vec<String>,
    pub favorites: Vec<String>,
    pub toggles: ToggleConfig,
}

impl Default for FilterSection {
    fn default() -> Self {
        Self {
            enabled: true,
            remove: Vec::new(),
            favorites: Vec::new(),
            toggles: ToggleConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PrefetchSection {
    pub max_rounds: u8,
    pub page_bound: u16,
}

impl Default for PrefetchSection {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            page_bound: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SynonymSection {
    pub groups: Vec<Vec<String>>,
}

/// The whole `filter.toml` document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    pub filter: FilterSection,
    pub prefetch: PrefetchSection,
    pub synonyms: SynonymSection,
}

impl FilterConfig {
    /// Parses the config from a string.
    ///
    /// # Errors
    /// Fails when the content isn't valid TOML or a key has the wrong type.
    pub fn from_config(config_content: &str) -> Result<Self, FilterError> {
        let cfg = toml::from_str::<Self>(config_content)?;
        debug!(
            "Filter config decoded: {} removal entries, {} favorites, {} extra synonym groups",
            cfg.filter.remove.len(),
            cfg.filter.favorites.len(),
            cfg.synonyms.groups.len()
        );
        Ok(cfg)
    }

    pub fn to_config(&self) -> Result<String, FilterError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// `filter.toml` inside the per-user config directory.
    pub fn default_path() -> Result<PathBuf, FilterError> {
        let dirs = ProjectDirs::from("com", "booru-prompt-builder", "booru-prompt-builder")
            .ok_or(FilterError::MissingConfigDir)?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Read the config at `path`, writing [`DEFAULT_FILTER_TOML`] there first if it doesn't exist.
    pub fn load_or_create(path: &Path) -> Result<Self, FilterError> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            debug!("Creating filter config at {}", path.display());
            fs::write(path, DEFAULT_FILTER_TOML)?;
        }

        let content = fs::read_to_string(path)?;
        Self::from_config(&content)
    }

    pub fn toggles(&self) -> FilterToggles {
        self.filter.toggles.into()
    }

    /// Built-in synonym groups plus the configured ones.
    pub fn synonyms(&self) -> SynonymExpander {
        if self.synonyms.groups.is_empty() {
            SynonymExpander::global().clone()
        } else {
            SynonymExpander::with_defaults(&self.synonyms.groups)
        }
    }

    pub fn prefetcher(&self) -> Prefetcher {
        Prefetcher::new(self.prefetch.max_rounds)
    }

    /// The first-search request for `search_terms`.
    pub fn fetch_request<S: AsRef<str>>(&self, search_terms: &[S]) -> FetchRequest {
        FetchRequest {
            search_terms: search_terms.iter().map(|s| s.as_ref().to_string()).collect(),
            page_bound: self.prefetch.page_bound,
            explicit_id: None,
        }
    }

    /// Build the post filter for one request. `prompt` is the caller's own starting prompt, the
    /// source of the color basis and the pinned subject counts.
    pub fn build_filter(&self, prompt: &str) -> PostFilter {
        let synonyms = self.synonyms();
        let context =
            RemovalContext::compile_with(&self.filter.remove, &self.filter.favorites, &synonyms);

        PostFilter::new(
            context,
            self.toggles(),
            SessionColorBasis::from_prompt(prompt),
            AllowedSubjectSet::from_prompt(prompt),
            !self.filter.enabled,
        )
    }
}
