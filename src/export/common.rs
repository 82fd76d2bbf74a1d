//! Common utilities for PDF export.
//!
//! Shared helpers for file naming, template interpolation, and timestamps.

use chrono::Local;
use lazy_static::lazy_static;
use regex::Regex;

/// Base name used when a document name sanitizes to nothing.
pub const DEFAULT_BASE_NAME: &str = "document";

const MAX_BASE_NAME_LEN: usize = 80;

lazy_static! {
    static ref DISALLOWED_RUN: Regex = Regex::new(r"[^A-Za-z0-9._-]+").unwrap();
    static ref UNDERSCORE_RUN: Regex = Regex::new(r"_+").unwrap();
}

/// Derive a filesystem-safe base name (without extension) from a display name.
///
/// Drops characters outside printable ASCII, turns every run of characters
/// outside `[A-Za-z0-9._-]` into `_`, collapses `_` runs, trims `_` from both
/// ends and caps the result at 80 characters.
pub fn sanitize_filename(name: &str) -> String {
    let printable: String = name.chars().filter(|c| (' '..='~').contains(c)).collect();
    let replaced = DISALLOWED_RUN.replace_all(&printable, "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&replaced, "_");
    let trimmed = collapsed.trim_matches('_');

    // Only ASCII remains, so byte truncation stays on a char boundary.
    let capped = &trimmed[..trimmed.len().min(MAX_BASE_NAME_LEN)];

    if capped.is_empty() {
        DEFAULT_BASE_NAME.to_string()
    } else {
        capped.to_string()
    }
}

/// Escape text for an HTML body or attribute.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Fill `{{ name }}` slots in an HTML template with escaped values.
///
/// Slots with no matching value render empty; text outside slots is copied
/// unchanged.
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        match after.find("}}") {
            Some(close) => {
                let name = after[..close].trim();
                if let Some((_, value)) = values.iter().find(|(key, _)| *key == name) {
                    out.push_str(&escape_html(value));
                }
                rest = &after[close + 2..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Local timestamp printed on exported documents.
pub fn format_render_timestamp() -> String {
    Local::now().format("%d/%m/%Y, %H:%M:%S").to_string()
}
