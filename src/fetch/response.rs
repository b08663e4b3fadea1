//! Raw HTTP response parsing.
//!
//! Splits one transport exchange's bytes into status line, headers, and
//! body, and extracts the few fields the redirect engine cares about.

use crate::error_handling::FetchError;

/// Content type assumed when the server sends none.
const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// The parsed view of one raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedResponse {
    /// Numeric status code, if the status line carried one.
    pub(crate) status: Option<u16>,
    /// `Content-Type` header value, defaulted to `text/html`.
    pub(crate) content_type: String,
    /// Body decoded as UTF-8 with replacement.
    pub(crate) body: String,
    /// Trimmed `Location` value when the response is a 301/302 redirect.
    pub(crate) redirect: Option<String>,
}

/// Parses the raw bytes of one exchange.
///
/// The header section ends at the first `\r\n\r\n`; a response without that
/// separator is treated as headers with an empty body. Both sections are
/// decoded permissively: invalid byte sequences are replaced, never fatal.
pub(crate) fn parse_response(raw: &[u8]) -> Result<ParsedResponse, FetchError> {
    if raw.is_empty() {
        return Err(FetchError::EmptyResponse);
    }

    let (header_bytes, body_bytes) = match find_blank_line(raw) {
        Some(at) => (&raw[..at], &raw[at + 4..]),
        None => (raw, &raw[raw.len()..]),
    };

    let header_text = String::from_utf8_lossy(header_bytes);
    let body = String::from_utf8_lossy(body_bytes).into_owned();

    let mut lines = header_text.lines();
    let status_line = lines.next().unwrap_or_default();
    let status = parse_status_code(status_line);

    let mut content_type = None;
    let mut location = None;
    for line in lines {
        if content_type.is_none() {
            content_type = header_value(line, "content-type");
        }
        if location.is_none() {
            location = header_value(line, "location");
        }
    }

    let redirect = match status {
        Some(301) | Some(302) => location,
        _ => None,
    };

    Ok(ParsedResponse {
        status,
        content_type: content_type.unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        body,
        redirect,
    })
}

/// Byte offset of the first `\r\n\r\n`, if any.
fn find_blank_line(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|window| window == b"\r\n\r\n")
}

/// Status code from the second whitespace-separated field of the status
/// line. Returns `None` for junk status lines, which the engine then treats
/// as a terminal response.
fn parse_status_code(status_line: &str) -> Option<u16> {
    status_line.split_whitespace().nth(1)?.parse().ok()
}

/// Value of `line` if its name case-insensitively matches `name`, trimmed.
fn header_value(line: &str, name: &str) -> Option<String> {
    let (header_name, value) = line.split_once(':')?;
    if header_name.trim().eq_ignore_ascii_case(name) {
        Some(value.trim().to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_response, parse_status_code};
    use crate::error_handling::FetchError;

    fn raw(text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }

    #[test]
    fn test_parses_terminal_response() {
        let response = parse_response(&raw(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello",
        ))
        .expect("parse");
        assert_eq!(response.status, Some(200));
        assert_eq!(response.content_type, "text/plain");
        assert_eq!(response.body, "hello");
        assert!(response.redirect.is_none());
    }

    #[test]
    fn test_detects_301_redirect_with_location() {
        let response = parse_response(&raw(
            "HTTP/1.1 301 Moved Permanently\r\nLocation: /new\r\n\r\n",
        ))
        .expect("parse");
        assert_eq!(response.redirect.as_deref(), Some("/new"));
    }

    #[test]
    fn test_detects_302_redirect() {
        let response = parse_response(&raw(
            "HTTP/1.1 302 Found\r\nLocation: http://b.example/\r\n\r\n",
        ))
        .expect("parse");
        assert_eq!(response.redirect.as_deref(), Some("http://b.example/"));
    }

    #[test]
    fn test_other_3xx_codes_are_terminal() {
        for status in ["303 See Other", "307 Temporary Redirect", "308 Permanent"] {
            let text = format!("HTTP/1.1 {status}\r\nLocation: /elsewhere\r\n\r\n");
            let response = parse_response(text.as_bytes()).expect("parse");
            assert!(response.redirect.is_none(), "{status} must not be followed");
        }
    }

    #[test]
    fn test_redirect_without_location_is_terminal() {
        let response =
            parse_response(&raw("HTTP/1.1 301 Moved Permanently\r\n\r\ngone")).expect("parse");
        assert!(response.redirect.is_none());
        assert_eq!(response.body, "gone");
    }

    #[test]
    fn test_301_in_body_or_header_value_is_not_a_redirect() {
        let response = parse_response(&raw(
            "HTTP/1.1 200 OK\r\nX-Debug: error 301\r\n\r\nsee section 301",
        ))
        .expect("parse");
        assert!(response.redirect.is_none());
    }

    #[test]
    fn test_location_value_is_trimmed() {
        let response = parse_response(&raw(
            "HTTP/1.1 302 Found\r\nLocation:   /padded \r\n\r\n",
        ))
        .expect("parse");
        assert_eq!(response.redirect.as_deref(), Some("/padded"));
    }

    #[test]
    fn test_content_type_matching_is_case_insensitive() {
        let response = parse_response(&raw(
            "HTTP/1.1 200 OK\r\ncOnTeNt-TyPe: application/json\r\n\r\n{}",
        ))
        .expect("parse");
        assert_eq!(response.content_type, "application/json");
    }

    #[test]
    fn test_first_content_type_header_wins() {
        let response = parse_response(&raw(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Type: text/csv\r\n\r\n",
        ))
        .expect("parse");
        assert_eq!(response.content_type, "text/plain");
    }

    #[test]
    fn test_missing_content_type_defaults_to_html() {
        let response = parse_response(&raw("HTTP/1.1 200 OK\r\n\r\n<p>hi</p>")).expect("parse");
        assert_eq!(response.content_type, "text/html");
    }

    #[test]
    fn test_missing_blank_line_means_empty_body() {
        let response =
            parse_response(&raw("HTTP/1.1 200 OK\r\nContent-Type: text/plain")).expect("parse");
        assert_eq!(response.status, Some(200));
        assert_eq!(response.body, "");
    }

    #[test]
    fn test_empty_input_is_empty_response_error() {
        assert!(matches!(
            parse_response(b""),
            Err(FetchError::EmptyResponse)
        ));
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let mut bytes = raw("HTTP/1.1 200 OK\r\n\r\n");
        bytes.extend_from_slice(&[0xff, 0xfe, b'o', b'k']);
        let response = parse_response(&bytes).expect("parse");
        assert!(response.body.ends_with("ok"));
    }

    #[test]
    fn test_status_line_parsing() {
        assert_eq!(parse_status_code("HTTP/1.1 200 OK"), Some(200));
        assert_eq!(parse_status_code("HTTP/1.0 301 Moved"), Some(301));
        assert_eq!(parse_status_code("garbage"), None);
        assert_eq!(parse_status_code("HTTP/1.1 abc OK"), None);
        assert_eq!(parse_status_code(""), None);
    }
}
