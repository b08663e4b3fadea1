//! Configuration constants.
//!
//! This module defines all operational constants used throughout the
//! application, including timeouts, size limits, and endpoints.

use std::time::Duration;

/// User-Agent header value sent with every request.
pub const USER_AGENT: &str = concat!("go2web/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the default (HTML) mode.
pub const ACCEPT_HTML: &str = "text/html";

/// Accept header value when JSON output is preferred (`--json`).
pub const ACCEPT_JSON: &str = "application/json";

/// Maximum number of redirect hops to follow before declaring a loop.
pub const MAX_REDIRECT_HOPS: usize = 5;

/// Maximum URL length in bytes.
/// Matches common browser and server limits; longer inputs are rejected
/// before any network activity.
pub const MAX_URL_LENGTH: usize = 2048;

/// TCP connection timeout.
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Socket read timeout.
/// The response is framed by connection close, so this bounds how long an
/// unresponsive server can stall a fetch.
pub const SOCKET_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Socket write timeout.
pub const SOCKET_WRITE_TIMEOUT: Duration = Duration::from_secs(15);

/// Maximum response size in bytes (2MB).
/// Bytes beyond this are discarded with a warning to prevent memory
/// exhaustion on unbounded bodies.
pub const MAX_RESPONSE_BYTES: usize = 2 * 1024 * 1024;

/// Name of the cache directory created under the user's home directory.
pub const CACHE_DIR_NAME: &str = ".go2web_cache";

/// Search endpoint queried in `-s/--search` mode.
pub const SEARCH_ENDPOINT: &str = "http://www.bing.com/search";

/// Maximum number of search results listed per query.
pub const MAX_SEARCH_RESULTS: usize = 10;
