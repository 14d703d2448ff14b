//! Version resolver - maps declared constraints to a display version
//!
//! Only the leading operator of a single clause is interpreted. There is no
//! semantic-version parsing: an exact pin yields its bare version, every
//! other shape yields [`LATEST`].
//!
//! | Constraints                | Result   |
//! |----------------------------|----------|
//! | `[]`                       | `latest` |
//! | `["1.2.3"]`, `["= 1.2.3"]` | `1.2.3`  |
//! | `["!= 1.2.3"]`, `["~>1.2"]`| `latest` |
//! | `["> 1.2.3, < 2.0.0"]`     | `latest` |
//! | `[">= 1.0", "< 2.0"]`      | `latest` |

/// Display version for anything that is not an exact pin
pub const LATEST: &str = "latest";

const OPERATOR_CHARS: &[char] = &['=', '!', '<', '>', '~'];

/// Resolve a list of constraint clauses to a single display version
pub fn resolve_version<S: AsRef<str>>(constraints: &[S]) -> String {
    let clause = match constraints {
        [only] => only.as_ref().trim(),
        _ => {
            tracing::trace!(
                clauses = constraints.len(),
                "constraint set is not a single clause"
            );
            return LATEST.to_string();
        }
    };

    // "> 1.2.3, < 2.0.0" is a range even when declared as one element
    if clause.contains(',') {
        tracing::trace!(clause, "compound constraint clause");
        return LATEST.to_string();
    }

    match exact_pin(clause) {
        Some(version) => version,
        None => {
            tracing::trace!(clause, "constraint is not an exact pin");
            LATEST.to_string()
        }
    }
}

/// Bare version of an exact pin (`1.2.3`, `=1.2.3`, `= 1.2.3`)
fn exact_pin(clause: &str) -> Option<String> {
    let compact: String = clause.chars().filter(|c| !c.is_whitespace()).collect();
    let version = compact.trim_start_matches(OPERATOR_CHARS);
    let operator = &compact[..compact.len() - version.len()];

    if !(operator.is_empty() || operator == "=") || version.is_empty() {
        return None;
    }
    Some(version.to_string())
}
