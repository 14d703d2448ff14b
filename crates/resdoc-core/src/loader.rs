//! Loader - raw JSON resource records into [`Resource`] descriptors
//!
//! Accepts either a bare array of records or `{ "resources": [...] }`.
//!
//! ```text
//! { "type": "private_key", "provider": "tls", "source": "hashicorp/tls",
//!   "mode": "managed", "version": ">= 4.0" }
//! ```
//!
//! `version` may be a string (one clause) or an array of clauses. It is
//! never resolved here; a string is kept as a pending constraint.
//! Record order is preserved.

use serde::Deserialize;

use crate::{Error, Mode, Resource, Result, Version};

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    List(Vec<serde_json::Value>),
    Wrapped { resources: Vec<serde_json::Value> },
}

#[derive(Deserialize)]
struct RawResource {
    #[serde(rename = "type")]
    resource_type: String,
    provider: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    version: Option<Version>,
}

/// Parse JSON text into resource descriptors, in input order
///
/// # Errors
/// `Json` if the text is not a record list, `InvalidRecord` naming the
/// first record that lacks `type`/`provider` or has a mistyped field.
pub fn parse_resources(json: &str) -> Result<Vec<Resource>> {
    let records = match serde_json::from_str::<Document>(json)? {
        Document::List(records) => records,
        Document::Wrapped { resources } => resources,
    };

    let resources = records
        .into_iter()
        .enumerate()
        .map(|(index, value)| lower_record(index, value))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = resources.len(), "loaded resource records");
    Ok(resources)
}

fn lower_record(index: usize, value: serde_json::Value) -> Result<Resource> {
    let raw: RawResource = serde_json::from_value(value).map_err(|e| Error::InvalidRecord {
        index,
        reason: e.to_string(),
    })?;

    let mode_literal = raw.mode.unwrap_or_default();
    let mode = Mode::parse(&mode_literal);
    if mode == Mode::Unspecified && !mode_literal.is_empty() {
        tracing::debug!(
            index,
            mode = %mode_literal,
            "unknown mode literal, treating as unspecified"
        );
    }

    Ok(Resource {
        resource_type: raw.resource_type,
        provider_name: raw.provider,
        provider_source: raw.source.unwrap_or_default(),
        mode,
        version: raw.version.unwrap_or_default(),
    })
}
