use thiserror::Error;

/// Errors that can surface from the filtering core.
///
/// Most of them never reach the caller of the public compile/filter/prefetch operations: a bad
/// wildcard entry or a failed fetch round is logged and skipped there. They are returned as-is by
/// the configuration and list-store helpers.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A removal entry with interior or repeated wildcards could not be compiled.
    #[error("Invalid removal pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The fetch collaborator failed to deliver a round of posts.
    #[error("Failed to fetch more posts: {message}")]
    FetchFailed { message: String },

    #[error("Failed to decode filter config: {0}")]
    ConfigDecode(#[from] toml::de::Error),

    #[error("Failed to encode filter config: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    /// Reading or writing a config or list file failed.
    #[error("Failed to access file: {source}")]
    ListIo {
        #[from]
        source: std::io::Error,
    },

    /// No home/config directory could be resolved for this platform.
    #[error("Unable to determine the config directory for this user")]
    MissingConfigDir,
}
