//! YAML rendering and parsing of bundle documents
//!
//! Output layout (one record per key, keys sorted):
//!
//! ```text
//! # <banner>
//! # Generated at: 2024-03-09 07:05:03
//!
//! run_basic_yaml:
//!   path: "run/basic.yaml"
//!   content: |
//!     key: value
//!
//! ```
//!
//! Content is written as a literal block with every line behind a four-space margin,
//! so blank lines and indentation survive. YAML clips the trailing line breaks of a
//! literal block to one, which is why write-back normalizes the end of each document.
//! Content holding characters a literal block cannot carry verbatim (carriage returns,
//! Unicode line separators, control characters) is written as an escaped
//! double-quoted scalar instead.

use serde_yaml::Value;
use std::fmt::Write as _;

use super::{Bundle, ParsedBundle, RawEntry};
use crate::error::{Result, bundle as bundle_error};

/// Margin in front of every content line
const CONTENT_MARGIN: &str = "    ";

/// Render a bundle as a YAML document
pub fn serialize(bundle: &Bundle, banner: &str, generated_at: &str) -> String {
    serialize_records(&ParsedBundle::from(bundle), banner, generated_at)
}

/// Render parsed records, writing only the fields each record has
///
/// A record without `path` and `content` is written as an empty mapping so it
/// parses back as the same incomplete record.
pub fn serialize_records(records: &ParsedBundle, banner: &str, generated_at: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", single_line(banner));
    let _ = writeln!(out, "# Generated at: {}", single_line(generated_at));
    out.push('\n');

    for (key, record) in &records.records {
        write_record(&mut out, key, record);
    }

    out
}

fn write_record(out: &mut String, key: &str, record: &RawEntry) {
    let key = if is_plain_key(key) {
        key.to_string()
    } else {
        quote(key)
    };
    if record.path.is_none() && record.content.is_none() {
        let _ = writeln!(out, "{key}: {{}}");
        out.push('\n');
        return;
    }

    let _ = writeln!(out, "{key}:");
    if let Some(ref path) = record.path {
        let _ = writeln!(out, "  path: {}", quote(path));
    }
    if let Some(ref content) = record.content {
        write_content(out, content);
    }
    out.push('\n');
}

fn write_content(out: &mut String, content: &str) {
    if !content.chars().all(is_block_safe) {
        let _ = writeln!(out, "  content: {}", quote(content));
        return;
    }

    let header = if needs_indent_indicator(content) {
        "|2"
    } else {
        "|"
    };
    let _ = writeln!(out, "  content: {header}");
    for line in content.lines() {
        out.push_str(CONTENT_MARGIN);
        out.push_str(line);
        out.push('\n');
    }
}

/// Characters a literal block reproduces exactly
///
/// YAML parsers treat `\r`, U+0085, U+2028 and U+2029 as line breaks, and reject
/// other control characters and U+FEFF outside escapes.
fn is_block_safe(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | ' '..='~'
            | '\u{A0}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    ) && !matches!(c, '\u{2028}' | '\u{2029}' | '\u{FEFF}')
}

/// Parse a bundle document; `origin` names the document in errors
pub fn parse(text: &str, origin: &str) -> Result<ParsedBundle> {
    if is_blank_document(text) {
        return Ok(ParsedBundle::default());
    }

    let value: Value =
        serde_yaml::from_str(text).map_err(|e| bundle_error::malformed(origin, e.to_string()))?;

    let mapping = match value {
        Value::Null => return Ok(ParsedBundle::default()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(bundle_error::malformed(
                origin,
                format!("top level is {}, expected a mapping", describe(&other)),
            ));
        }
    };

    let mut parsed = ParsedBundle::default();
    for (key, record) in mapping {
        let Value::String(key) = key else {
            return Err(bundle_error::malformed(
                origin,
                format!("key {} is {}, expected a string", render(&key), describe(&key)),
            ));
        };
        let Value::Mapping(fields) = record else {
            return Err(bundle_error::malformed(
                origin,
                format!("entry '{key}' is {}, expected a mapping", describe(&record)),
            ));
        };

        let raw = RawEntry {
            path: fields.get("path").and_then(Value::as_str).map(str::to_string),
            content: fields
                .get("content")
                .and_then(Value::as_str)
                .map(str::to_string),
        };
        parsed.records.insert(key, raw);
    }

    Ok(parsed)
}

/// Only comments and whitespace
fn is_blank_document(text: &str) -> bool {
    text.lines().all(|line| {
        let trimmed = line.trim();
        trimmed.is_empty() || trimmed.starts_with('#')
    })
}

/// Leading whitespace in the first content line would be taken for block indentation
fn needs_indent_indicator(content: &str) -> bool {
    for line in content.lines() {
        if line.trim().is_empty() {
            if !line.is_empty() {
                return true;
            }
            continue;
        }
        return line.starts_with([' ', '\t']);
    }
    false
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return false;
    }
    !matches!(
        key.to_ascii_lowercase().as_str(),
        "true" | "false" | "null" | "y" | "n" | "yes" | "no" | "on" | "off"
    )
}

/// Double-quoted YAML scalar
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if !is_block_safe(c) => {
                let _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || !is_block_safe(c) { ' ' } else { c })
        .collect()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn render(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| "?".to_string())
}
