//! HTML rendering helpers
//!
//! Escaping, tag rendering and script-safe JSON encoding. Everything that
//! ends up in markup goes through here.

mod attributes;

pub use attributes::Attributes;

use serde_json::Value;

use crate::error::TreeGridResult;

/// Escape text for use in element content or attribute values
///
/// Escapes: ampersand, angle brackets, double and single quotes
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an element. `content` is inserted verbatim.
pub fn tag(name: &str, content: &str, attrs: &Attributes) -> String {
    format!("<{name}{}>{content}</{name}>", attrs.render())
}

/// Serialize JSON so it can be embedded inside a `<script>` element
///
/// `<`, `>`, `&`, `'` and `"` inside strings become `\uXXXX` escapes, so the
/// output never closes the script tag or an enclosing attribute.
pub fn json_html_encode(value: &Value) -> TreeGridResult<String> {
    let json = serde_json::to_string(value)?;
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push_str("\\u0022"),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '&' => out.push_str("\\u0026"),
            '\'' => out.push_str("\\u0027"),
            _ => out.push(c),
        }
    }
    Ok(out)
}
