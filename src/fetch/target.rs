//! URL normalization.
//!
//! A [`Target`] is the normalized destination of one fetch attempt. It is
//! built once from a raw user-supplied string, is immutable, and a redirect
//! produces a fresh one via [`Target::resolve_location`].

use std::fmt;

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Normalized (scheme, host, port, path, query) destination for one attempt.
#[derive(Debug, Clone)]
pub struct Target {
    url: Url,
}

impl Target {
    /// Parses and normalizes a raw URL string.
    ///
    /// Adds an `http://` prefix if the string carries no scheme, then
    /// delegates to the URL grammar parser. Rejects non-http(s) schemes,
    /// URLs without a host, and URLs longer than [`MAX_URL_LENGTH`].
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let raw = raw.trim();
        if raw.len() > MAX_URL_LENGTH {
            return Err(FetchError::Parse(format!(
                "URL exceeds maximum length ({} > {})",
                raw.len(),
                MAX_URL_LENGTH
            )));
        }

        let normalized = if !raw.starts_with("http://") && !raw.starts_with("https://") {
            format!("http://{raw}")
        } else {
            raw.to_string()
        };

        Self::from_url(Url::parse(&normalized)?)
    }

    /// Wraps an already-parsed URL, validating scheme and host.
    fn from_url(url: Url) -> Result<Self, FetchError> {
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(FetchError::Parse(format!("unsupported scheme: {other}")));
            }
        }
        if url.host_str().is_none() {
            return Err(FetchError::Parse("URL has no host".to_string()));
        }
        Ok(Self { url })
    }

    /// Resolves a `Location` header value against this target.
    ///
    /// An absolute `Location` is used as-is; a relative one is joined
    /// against the URL of the response that issued it.
    pub fn resolve_location(&self, location: &str) -> Result<Self, FetchError> {
        let absolute = Url::parse(location).or_else(|_| self.url.join(location))?;
        Self::from_url(absolute)
    }

    /// URL scheme (`http` or `https`).
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Whether the transport must wrap the connection in TLS.
    pub fn is_tls(&self) -> bool {
        self.url.scheme() == "https"
    }

    /// Host as it appears in the URL (IPv6 hosts keep their brackets).
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Host form usable for socket address resolution and TLS server names
    /// (IPv6 brackets stripped).
    pub fn connect_host(&self) -> String {
        self.host().trim_matches(['[', ']']).to_string()
    }

    /// Port, falling back to the scheme default (80/443).
    pub fn port(&self) -> u16 {
        self.url.port_or_known_default().unwrap_or(80)
    }

    /// Value for the `Host` request header: the host, plus the port when one
    /// was given explicitly.
    pub fn host_header(&self) -> String {
        match self.url.port() {
            Some(port) => format!("{}:{port}", self.host()),
            None => self.host().to_string(),
        }
    }

    /// Request-line path: the URL path (never empty) plus the query string.
    pub fn request_path(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{query}", self.url.path()),
            None => self.url.path().to_string(),
        }
    }

    /// The exact normalized URL string; this is also the cache key input.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
