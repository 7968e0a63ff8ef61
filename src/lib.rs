//! TLD Engine - A high-performance public suffix (effective TLD) extraction engine for Rust
//!
//! This library classifies an arbitrary input string (URL, hostname, or
//! email-like address) into one of:
//! - A valid domain, decomposed into subdomain / registered domain / public suffix
//! - A literal IPv4 or IPv6 address
//! - Malformed input
//!
//! The authority on what constitutes a public suffix is a rule list in the
//! [publicsuffix.org](https://publicsuffix.org) format: plain rules
//! (`com`, `co.uk`), wildcard rules (`*.kawasaki.jp`), and exception rules
//! (`!city.kawasaki.jp`). Rules are compiled once into a label trie and
//! matched right-to-left with exception-over-wildcard-over-plain precedence.
//!
//! # Example
//!
//! ```rust
//! use tld_engine_r::{ExtractResult, TldExtractor};
//!
//! // A rule set normally comes from the suffix list loader; any iterator
//! // of lowercase rules works.
//! let extractor = TldExtractor::new(["com", "co.uk"]).unwrap();
//!
//! match extractor.extract("https://user@mail.example.co.uk:443/inbox") {
//!     ExtractResult::Domain { subdomain, domain, suffix } => {
//!         assert_eq!(subdomain, "mail");
//!         assert_eq!(domain, "example");
//!         assert_eq!(suffix, "co.uk");
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! # Loading the real list
//!
//! ```rust,no_run
//! use tld_engine_r::{ListConfig, TldExtractor};
//!
//! let config = ListConfig::new().with_cache_path("suffix.cache");
//! let extractor = TldExtractor::from_config(&config).unwrap();
//! let result = extractor.extract("www.example.com");
//! ```
//!
//! The engine is immutable after construction and `extract` is pure, so a
//! single extractor can be shared across threads without locking.

pub mod error;
pub mod extract;
pub mod list;
pub mod normalize;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use error::{Result, TldError};
pub use extract::TldExtractor;
pub use list::{load_rules, normalize_lines, ListConfig, DEFAULT_LIST_URLS, LIST_URLS_ENV};
pub use normalize::{clean_host, normalize, Host};
pub use trie::SuffixTrie;
pub use types::ExtractResult;
