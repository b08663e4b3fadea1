//! Disk-backed response cache.
//!
//! A flat directory of JSON files, one per cached response, each named by
//! the hex SHA-256 digest of the exact URL string it was requested under.
//! Entries have no TTL and are never evicted; they persist until removed
//! externally. The cache is an explicit handle so callers (and tests) can
//! point it at any directory.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::config::CACHE_DIR_NAME;

/// A cached (content-type, body) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// `Content-Type` the response was served with.
    pub content_type: String,
    /// Decoded response body.
    pub body: String,
}

/// Handle to an on-disk response cache directory.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    /// Opens (creating if necessary) the cache directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create cache directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Looks up the entry stored for `url`, if any.
    ///
    /// An entry that exists but cannot be parsed is removed and reported as
    /// a miss rather than an error.
    pub fn get(&self, url: &str) -> Result<Option<CacheEntry>> {
        let path = self.entry_path(url);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read cache entry {}", path.display()))?;
        match serde_json::from_str(&content) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                warn!("discarding unreadable cache entry {}: {e}", path.display());
                let _ = fs::remove_file(&path);
                Ok(None)
            }
        }
    }

    /// Stores `entry` under `url`, replacing any previous entry.
    ///
    /// The entry is written to a sibling temporary file and renamed into
    /// place, so a concurrent reader never observes a partially written
    /// entry; when two processes race, the last writer wins.
    pub fn put(&self, url: &str, entry: &CacheEntry) -> Result<()> {
        let path = self.entry_path(url);
        let content = serde_json::to_string(entry).context("failed to serialize cache entry")?;

        let mut file = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("failed to create temporary file in {}", self.dir.display()))?;
        file.write_all(content.as_bytes())
            .context("failed to write cache entry")?;
        file.persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("failed to publish cache entry {}", path.display()))?;

        debug!("cached {} bytes for {url}", entry.body.len());
        Ok(())
    }

    /// Directory backing this cache.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        self.dir.join(cache_key(url))
    }
}

/// Derives the storage identifier for a URL: the lowercase hex SHA-256
/// digest of the exact string, byte for byte. Distinct URL strings always
/// get distinct entries, even when they name the same resource.
pub fn cache_key(url: &str) -> String {
    use std::fmt::Write as _;

    let digest = Sha256::digest(url.as_bytes());
    let mut key = String::with_capacity(64);
    for byte in digest.as_slice() {
        let _ = write!(key, "{byte:02x}");
    }
    key
}

/// Default cache location: `~/.go2web_cache`, falling back to the working
/// directory when no home directory is set.
pub fn default_cache_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CACHE_DIR_NAME)
}
