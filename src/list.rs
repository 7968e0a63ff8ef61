//! Suffix list acquisition: download from the public suffix list mirrors,
//! cache to a local file, and normalize the raw text into a deduplicated
//! rule set. Everything here is ordinary I/O; the matching engine itself
//! never touches the network or the filesystem.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{Result, TldError};

/// Default suffix list mirrors, tried in order and merged.
pub const DEFAULT_LIST_URLS: [&str; 2] = [
    "https://publicsuffix.org/list/public_suffix_list.dat",
    "https://raw.githubusercontent.com/publicsuffix/list/master/public_suffix_list.dat",
];

/// Environment variable holding a comma-separated URL override.
pub const LIST_URLS_ENV: &str = "TLD_ENGINE_URLS";

/// Configuration for the suffix list loader.
///
/// All process-wide concerns (default URLs, environment overrides) live in
/// this explicit struct; the engine takes a finished rule set and nothing
/// else.
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Download URLs, merged in order. Per-URL failures are skipped.
    pub urls: Vec<String>,
    /// Local cache file for the normalized rule list.
    pub cache_path: Option<PathBuf>,
    /// When true (the default), download first and fall back to the cache
    /// file; when false, read the cache first and download on a miss.
    pub refresh: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_LIST_URLS.iter().map(|s| s.to_string()).collect(),
            cache_path: None,
            refresh: true,
        }
    }
}

impl ListConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the `TLD_ENGINE_URLS` environment override, if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(LIST_URLS_ENV) {
            let urls: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !urls.is_empty() {
                config.urls = urls;
            }
        }
        config
    }

    /// Replace the download URL list.
    pub fn with_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Set the local cache file path.
    pub fn with_cache_path(mut self, path: impl AsRef<Path>) -> Self {
        self.cache_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set cache-first (false) or download-first (true) behavior.
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }
}

/// Split raw list text into rules: trim, drop blank lines and `//`
/// comments, lowercase the survivors.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .map(str::to_lowercase)
        .collect()
}

/// Load a rule set according to `config`.
///
/// Errors only when every configured source (URLs and cache file) yields
/// nothing.
pub fn load_rules(config: &ListConfig) -> Result<HashSet<String>> {
    if config.refresh {
        let rules = fetch_rules(&config.urls);
        if !rules.is_empty() {
            if let Some(ref path) = config.cache_path {
                // Best effort: a stale cache beats losing fresh rules.
                if let Err(e) = write_cache_file(path, &rules) {
                    warn!("failed to refresh cache file: {}", e);
                }
            }
            return Ok(rules);
        }
        warn!("no rules fetched from any URL, falling back to cache");
        match config.cache_path {
            Some(ref path) => read_cache_file(path),
            None => Err(TldError::NoRuleSource),
        }
    } else {
        if let Some(ref path) = config.cache_path {
            match read_cache_file(path) {
                Ok(rules) if !rules.is_empty() => return Ok(rules),
                Ok(_) => debug!("cache file is empty, trying download"),
                Err(e) => debug!("cache read failed ({}), trying download", e),
            }
        }
        let rules = fetch_rules(&config.urls);
        if rules.is_empty() {
            return Err(TldError::NoRuleSource);
        }
        if let Some(ref path) = config.cache_path {
            if let Err(e) = write_cache_file(path, &rules) {
                warn!("failed to write cache file: {}", e);
            }
        }
        Ok(rules)
    }
}

/// Read and normalize a cached rule list.
pub fn read_cache_file(path: impl AsRef<Path>) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TldError::CacheRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_lines(&text).into_iter().collect())
}

/// Write a rule set to the cache file, newline-separated.
///
/// Writes through a temporary sibling file and renames it into place so a
/// failed write never truncates an existing cache.
pub fn write_cache_file(path: impl AsRef<Path>, rules: &HashSet<String>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut lines: Vec<&str> = rules.iter().map(String::as_str).collect();
    lines.sort_unstable();

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, lines.join("\n")).map_err(|source| TldError::CacheWrite {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| TldError::CacheWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Download and merge rules from every URL, skipping the ones that fail.
pub fn fetch_rules(urls: &[String]) -> HashSet<String> {
    let mut rules = HashSet::new();
    for url in urls {
        match fetch_url(url) {
            Ok(text) => {
                let before = rules.len();
                rules.extend(normalize_lines(&text));
                info!("fetched {} rules from {}", rules.len() - before, url);
            }
            Err(e) => warn!("skipping suffix list source: {}", e),
        }
    }
    rules
}

/// Fetch one URL body as text.
fn fetch_url(url: &str) -> Result<String> {
    let response = ureq::get(url).call().map_err(|e| TldError::Download {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let (_, body) = response.into_parts();
    let mut reader = body.into_reader();
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| TldError::Download {
            url: url.to_string(),
            message: e.to_string(),
        })?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lines_strips_noise() {
        let text = "// comment line\n\ncom\n  CO.UK  \n//another\n*.kawasaki.jp\n!city.kawasaki.jp\n";
        let lines = normalize_lines(text);
        assert_eq!(lines, vec!["com", "co.uk", "*.kawasaki.jp", "!city.kawasaki.jp"]);
    }

    #[test]
    fn test_normalize_lines_empty_input() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("\n\n// only noise\n").is_empty());
    }

    #[test]
    fn test_cache_round_trip() {
        let dir = std::env::temp_dir().join("tld_engine_test_cache");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("suffix.cache");

        let rules: HashSet<String> = ["com", "co.uk", "*.kawasaki.jp"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        write_cache_file(&path, &rules).unwrap();

        let loaded = read_cache_file(&path).unwrap();
        assert_eq!(loaded, rules);

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_read_cache_file_normalizes() {
        let dir = std::env::temp_dir().join("tld_engine_test_norm");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("noisy.cache");
        fs::write(&path, "// header\nCOM\n\nco.uk\nco.uk\n").unwrap();

        let loaded = read_cache_file(&path).unwrap();
        let expected: HashSet<String> =
            ["com", "co.uk"].iter().map(|s| s.to_string()).collect();
        assert_eq!(loaded, expected);

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_read_missing_cache_file() {
        let result = read_cache_file("/nonexistent/path/suffix.cache");
        match result {
            Err(TldError::CacheRead { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/path/suffix.cache"));
            }
            other => panic!("expected CacheRead, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rules_falls_back_to_cache() {
        // No URLs configured, so the refresh fetch yields nothing and the
        // loader must fall back to the cache file.
        let dir = std::env::temp_dir().join("tld_engine_test_fallback");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("suffix.cache");
        fs::write(&path, "com\nco.uk\n").unwrap();

        let empty_urls: Vec<String> = Vec::new();
        let config = ListConfig::new()
            .with_urls(empty_urls)
            .with_cache_path(&path);
        let rules = load_rules(&config).unwrap();
        assert!(rules.contains("com"));
        assert!(rules.contains("co.uk"));

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_load_rules_cache_first_mode() {
        let dir = std::env::temp_dir().join("tld_engine_test_cache_first");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("suffix.cache");
        fs::write(&path, "com\n").unwrap();

        let empty_urls: Vec<String> = Vec::new();
        let config = ListConfig::new()
            .with_urls(empty_urls)
            .with_cache_path(&path)
            .with_refresh(false);
        let rules = load_rules(&config).unwrap();
        assert_eq!(rules.len(), 1);
        assert!(rules.contains("com"));

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_load_rules_no_sources() {
        let empty_urls: Vec<String> = Vec::new();
        let config = ListConfig::new().with_urls(empty_urls);
        match load_rules(&config) {
            Err(TldError::NoRuleSource) => {}
            other => panic!("expected NoRuleSource, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_urls() {
        let config = ListConfig::default();
        assert_eq!(config.urls.len(), 2);
        assert!(config.urls[0].contains("publicsuffix.org"));
        assert!(config.refresh);
        assert!(config.cache_path.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = ListConfig::new()
            .with_urls(["https://example.com/list.dat"])
            .with_cache_path("/tmp/x.cache")
            .with_refresh(false);
        assert_eq!(config.urls, vec!["https://example.com/list.dat"]);
        assert_eq!(config.cache_path, Some(PathBuf::from("/tmp/x.cache")));
        assert!(!config.refresh);
    }
}
