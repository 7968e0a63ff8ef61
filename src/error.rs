use std::path::PathBuf;

use thiserror::Error;

/// TLD engine error types
#[derive(Error, Debug)]
pub enum TldError {
    /// No rules were available to build a trie from. Construction is
    /// all-or-nothing; a partial engine is never returned.
    #[error("rule set is empty, cannot build suffix trie")]
    EmptyRuleSet,

    #[error("failed to read cache file '{path}': {source}")]
    CacheRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write cache file '{path}': {source}")]
    CacheWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("download from '{url}' failed: {message}")]
    Download { url: String, message: String },

    /// Every configured source (URLs and cache file) came up empty.
    #[error("no suffix rules available from any configured source")]
    NoRuleSource,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TldError>;
