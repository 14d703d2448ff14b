//! Canonical listing of resources
//!
//! Produces the presentable form of a resource collection: stable-sorted,
//! every derived field computed, serialized deterministically.
//!
//! # Pipeline
//!
//! `JSON records → parse_resources → sort_resources → render → SHA-256`
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces byte-identical output
//! - **Idempotent ordering**: rendering a sorted list again changes nothing
//! - Empty URLs are omitted, never printed as broken links

use sha2::{Digest, Sha256};

use crate::{Resource, Result};

// ── Options ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Markdown,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: Format,
    /// Stable-sort by full type before rendering; off keeps input order
    pub sort: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: Format::Markdown,
            sort: true,
        }
    }
}

/// Derived, display-ready view of one resource
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub full_type: String,
    pub mode: crate::Mode,
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl From<&Resource> for Entry {
    fn from(resource: &Resource) -> Self {
        Entry {
            full_type: resource.full_type(),
            mode: resource.mode,
            version: resource.display_version(),
            url: resource.url(),
        }
    }
}

// ── Public API ────────────────────────────────────────────

/// Load, order and render JSON resource records
///
/// # Errors
/// Returns loader errors for malformed input.
pub fn normalize(json: &str, options: &RenderOptions) -> Result<String> {
    let mut resources = crate::loader::parse_resources(json)?;
    if options.sort {
        crate::ordering::sort_resources_in_place(&mut resources);
    }
    render(&resources, options.format)
}

/// Render resources in their given order
pub fn render(resources: &[Resource], format: Format) -> Result<String> {
    let entries: Vec<Entry> = resources.iter().map(Entry::from).collect();
    match format {
        Format::Markdown => Ok(render_markdown(&entries)),
        Format::Json => render_json(&entries),
    }
}

/// Lowercase hex SHA-256 of a rendered listing
pub fn fingerprint(rendered: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rendered.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ── Serializers ───────────────────────────────────────────

fn render_markdown(entries: &[Entry]) -> String {
    let mut out = String::from("## Resources\n\n");
    if entries.is_empty() {
        out.push_str("No resources.\n");
        return out;
    }

    for entry in entries {
        out.push_str("- ");
        if entry.url.is_empty() {
            out.push_str(&entry.full_type);
        } else {
            out.push('[');
            out.push_str(&entry.full_type);
            out.push_str("](");
            out.push_str(&entry.url);
            out.push(')');
        }
        if let Some(label) = entry.mode.label() {
            out.push_str(" (");
            out.push_str(label);
            out.push(')');
        }
        out.push('\n');
    }
    out
}

fn render_json(entries: &[Entry]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(entries)?;
    out.push('\n');
    Ok(out)
}
