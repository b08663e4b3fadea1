//! HTTP request construction.
//!
//! Requests are literal HTTP/1.1 text built fresh for every attempt and
//! never reused.

use crate::config::USER_AGENT;
use crate::fetch::target::Target;

/// Serializes a GET request for `target` with the given `Accept` value.
///
/// The header set and order are fixed: `Host`, `User-Agent`, `Accept`,
/// `Connection: close`. The `Connection: close` header is what lets the
/// response be framed by connection shutdown instead of `Content-Length`.
pub(crate) fn build_request(target: &Target, accept: &str) -> String {
    let headers = [
        ("Host", target.host_header()),
        ("User-Agent", USER_AGENT.to_string()),
        ("Accept", accept.to_string()),
        ("Connection", "close".to_string()),
    ];

    let mut request = format!("GET {} HTTP/1.1\r\n", target.request_path());
    for (name, value) in headers {
        request.push_str(name);
        request.push_str(": ");
        request.push_str(&value);
        request.push_str("\r\n");
    }
    request.push_str("\r\n");
    request
}
