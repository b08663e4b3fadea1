//! Fetching: the redirect-following HTTP transaction engine.
//!
//! One call to [`fetch_url`] runs the whole pipeline: normalize the URL,
//! consult the response cache, and on a miss perform bounded redirect
//! following with one blocking transport round trip per hop. The engine is
//! an iterative loop with an explicit hop counter rather than recursion, so
//! the budget is enforced without growing the call stack.

mod request;
mod response;
mod target;
mod transport;

pub use target::Target;

use log::{debug, info, warn};

use crate::cache::{CacheEntry, ResponseCache};
use crate::error_handling::FetchError;
use crate::fetch::request::build_request;
use crate::fetch::response::parse_response;

/// A fetched document: negotiated content type plus decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// `Content-Type` header value (`text/html` when the server sent none).
    pub content_type: String,
    /// Response body decoded as UTF-8 with replacement.
    pub body: String,
}

impl From<CacheEntry> for Page {
    fn from(entry: CacheEntry) -> Self {
        Page {
            content_type: entry.content_type,
            body: entry.body,
        }
    }
}

/// Fetches `raw_url`, following up to `max_hops` redirects.
///
/// The cache is consulted for each hop's URL before any network activity;
/// a hit is returned verbatim and does not consume redirect budget. A
/// terminal (non-redirect) network response is cached under the *original*
/// requested URL before being returned. Only 301/302 responses carrying a
/// `Location` header are followed.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] for unusable URLs,
/// [`FetchError::Network`] for connect/TLS/send/receive failures,
/// [`FetchError::EmptyResponse`] when a server closes without sending
/// anything, and [`FetchError::LoopDetected`] once `max_hops` redirects
/// have been followed without reaching a terminal response.
pub fn fetch_url(
    raw_url: &str,
    accept: &str,
    cache: &ResponseCache,
    max_hops: usize,
) -> Result<Page, FetchError> {
    let mut target = Target::parse(raw_url)?;
    let original_url = target.as_str().to_string();
    let mut hops_left = max_hops;

    loop {
        match cache.get(target.as_str()) {
            Ok(Some(entry)) => {
                debug!("cache hit for {target}");
                return Ok(entry.into());
            }
            Ok(None) => {}
            Err(e) => warn!("failed to read cache entry for {target}: {e:#}"),
        }

        let request = build_request(&target, accept);
        let raw = transport::exchange(&target, request.as_bytes())?;
        let parsed = parse_response(&raw)?;
        debug!(
            "{} responded {} ({})",
            target,
            parsed.status.map_or_else(|| "?".to_string(), |s| s.to_string()),
            parsed.content_type
        );

        match parsed.redirect {
            Some(location) => {
                hops_left = hops_left.saturating_sub(1);
                if hops_left == 0 {
                    return Err(FetchError::LoopDetected(max_hops));
                }
                target = target.resolve_location(&location)?;
                info!("following redirect to {target} ({hops_left} hops left)");
            }
            None => {
                let entry = CacheEntry {
                    content_type: parsed.content_type,
                    body: parsed.body,
                };
                if let Err(e) = cache.put(&original_url, &entry) {
                    warn!("failed to cache response for {original_url}: {e:#}");
                }
                return Ok(entry.into());
            }
        }
    }
}
