//! Readable rendering of fetched documents.
//!
//! JSON bodies are pretty-printed; everything else is treated as HTML and
//! flattened to plain text. Scripts and styles are dropped, block elements
//! break lines, links keep their destination, images are ignored.

use scraper::{ElementRef, Html, Node};

/// Renders a fetched body for terminal output based on its content type.
///
/// A body served as `application/json` that fails to parse is returned
/// unchanged rather than erroring.
pub fn to_readable(content_type: &str, body: &str) -> String {
    if content_type.contains("application/json") {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string())
            }
            Err(_) => body.to_string(),
        }
    } else {
        html_to_text(body)
    }
}

/// Converts an HTML document to plain text.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut out = String::new();
    walk(document.root_element(), &mut out);
    collapse_blank_lines(&out)
}

fn walk(element: ElementRef<'_>, out: &mut String) {
    let tag = element.value().name();
    if matches!(tag, "script" | "style" | "noscript" | "template" | "head") {
        return;
    }

    if let Some(level) = heading_level(tag) {
        out.push('\n');
        for _ in 0..level {
            out.push('#');
        }
        out.push(' ');
    } else if is_block(tag) {
        out.push('\n');
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_inline(out, text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    walk(child_element, out);
                }
            }
            _ => {}
        }
    }

    if tag == "a" {
        if let Some(href) = element.value().attr("href") {
            if !href.is_empty() && !href.starts_with('#') {
                out.push_str(" (");
                out.push_str(href);
                out.push(')');
            }
        }
    }

    if tag == "br" || tag == "hr" || is_block(tag) || heading_level(tag).is_some() {
        out.push('\n');
    }
}

/// Appends a text node with runs of whitespace collapsed to single spaces.
fn push_inline(out: &mut String, text: &str) {
    if text.trim().is_empty() {
        if !out.is_empty() && !out.ends_with(char::is_whitespace) {
            out.push(' ');
        }
        return;
    }
    if text.starts_with(char::is_whitespace)
        && !out.is_empty()
        && !out.ends_with(char::is_whitespace)
    {
        out.push(' ');
    }
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
    if text.ends_with(char::is_whitespace) {
        out.push(' ');
    }
}

fn heading_level(tag: &str) -> Option<usize> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "main"
            | "nav"
            | "aside"
            | "ul"
            | "ol"
            | "li"
            | "table"
            | "tr"
            | "blockquote"
            | "pre"
            | "form"
            | "figure"
            | "figcaption"
    )
}

/// Trims each line and squeezes runs of blank lines down to one.
fn collapse_blank_lines(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_blank = false;
    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push_str("\n\n");
            pending_blank = false;
        } else if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}
