//! Utilities for raw header blocks.
//!
//! The request editor hands the adapter headers as a single newline-separated
//! string block, not a structured map. These helpers parse that block into
//! name/value pairs, look headers up case-insensitively, and upsert a value
//! while leaving every other line intact.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches a non-empty `Authorization` header line anywhere in a block.
#[allow(clippy::unwrap_used)]
static AUTHORIZATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^authorization:\s?.+$").unwrap());

/// A single parsed header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name as written in the block.
    pub name: String,
    /// Header value, empty when the line carried none.
    pub value: String,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Parses a raw block into header pairs.
///
/// Lines split on the first `:`; both sides are trimmed. A line without a
/// colon becomes a name with an empty value. Blank lines are skipped.
#[must_use]
pub fn parse_headers(block: &str) -> Vec<Header> {
    block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(':') {
            Some((name, value)) => Header {
                name: name.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => Header {
                name: line.trim().to_string(),
                value: String::new(),
            },
        })
        .collect()
}

/// Finds a header value by name, case-insensitively.
#[must_use]
pub fn find_header(block: &str, name: &str) -> Option<String> {
    parse_headers(block)
        .into_iter()
        .find(|header| header.name.eq_ignore_ascii_case(name))
        .map(|header| header.value)
}

/// Whether the block already carries a non-empty `Authorization` header.
///
/// Line-anchored and case-insensitive; a bare `authorization:` line with no
/// value does not count.
#[must_use]
pub fn has_authorization(block: &str) -> bool {
    AUTHORIZATION_LINE.is_match(block)
}

/// Upserts a header value and reserializes the block.
///
/// Every line whose name matches case-insensitively gets the new value; when
/// none matches, a new line is appended under the given name. Unrelated lines
/// survive in order (re-serialized in `name: value` form).
#[must_use]
pub fn replace_header_value(block: &str, name: &str, value: &str) -> String {
    let mut headers = parse_headers(block);
    let mut replaced = false;
    for header in &mut headers {
        if header.name.eq_ignore_ascii_case(name) {
            header.value = value.to_string();
            replaced = true;
        }
    }
    if !replaced {
        headers.push(Header {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    headers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
