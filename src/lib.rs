//! go2web library: a minimal web client over hand-built HTTP/1.1.
//!
//! This library fetches URLs without a full HTTP client: it writes literal
//! HTTP/1.1 request text onto a blocking TCP (optionally TLS) stream, reads
//! the reply until the peer closes, parses the status line and headers
//! itself, follows 301/302 redirects up to a bounded number of hops, and
//! caches terminal responses on disk keyed by a digest of the requested URL.
//!
//! # Example
//!
//! ```no_run
//! use go2web::config::{ACCEPT_HTML, MAX_REDIRECT_HOPS};
//! use go2web::{default_cache_dir, fetch_url, to_readable, ResponseCache};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cache = ResponseCache::open(default_cache_dir())?;
//! let page = fetch_url("example.com", ACCEPT_HTML, &cache, MAX_REDIRECT_HOPS)?;
//! println!("{}", to_readable(&page.content_type, &page.body));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod cache;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod render;
mod search;

// Re-export public API
pub use cache::{cache_key, default_cache_dir, CacheEntry, ResponseCache};
pub use error_handling::{exit_code, FetchError, InitializationError};
pub use fetch::{fetch_url, Page, Target};
pub use render::{html_to_text, to_readable};
pub use search::{build_search_url, extract_results, SearchResult};
