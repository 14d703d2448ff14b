//! resdoc core - deterministic normalization of resource metadata
//!
//! Turns resource records (type, provider identity, version constraint,
//! usage mode) into stable, presentable values.
//!
//! # Architecture
//!
//! ```text
//! JSON records → Loader → Vec<Resource> → Ordering (stable sort)
//!                                    ↓
//!                 full_type / resolve_version / url (per resource)
//!                                    ↓
//!                               Render → listing + fingerprint
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces identical output
//! - **Total**: derivations never fail, "no usable value" is a sentinel
//! - **Stable**: equal full types keep their input order

pub mod error;
pub mod identity;
pub mod loader;
pub mod ordering;
pub mod render;
pub mod version;

pub use error::{Error, Result};
pub use identity::{full_type, url};
pub use ordering::{compare, sort_resources};
pub use version::{resolve_version, LATEST};

/// Version of the resdoc-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How a resource is used by its configuration
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    /// Provider-managed resource (`"managed"`)
    Managed,
    /// Read-only data source (`"data"`)
    Data,
    /// No mode annotation
    #[default]
    Unspecified,
}

impl Mode {
    /// Map a mode literal. Anything but the two known literals is `Unspecified`.
    pub fn parse(s: &str) -> Self {
        match s {
            "managed" => Mode::Managed,
            "data" => Mode::Data,
            _ => Mode::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Managed => "managed",
            Mode::Data => "data",
            Mode::Unspecified => "",
        }
    }

    /// Display suffix for listings; `None` means no suffix.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Mode::Managed => Some("resource"),
            Mode::Data => Some("data source"),
            Mode::Unspecified => None,
        }
    }
}

impl From<String> for Mode {
    fn from(s: String) -> Self {
        Mode::parse(&s)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Version attached to a resource: either already resolved for display,
/// or the raw constraint clauses still waiting for [`resolve_version`].
///
/// Serialized as a JSON string or array. Deserializing never yields
/// `Resolved`: a string is one pending clause, an array is many.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Version {
    Resolved(String),
    Constraints(Vec<String>),
}

impl Version {
    /// Display string: the resolved value, or the constraints resolved now
    pub fn display(&self) -> String {
        match self {
            Version::Resolved(v) => v.clone(),
            Version::Constraints(clauses) => resolve_version(clauses),
        }
    }

    /// Collapse pending constraints into a resolved value. Idempotent.
    pub fn resolve(self) -> Version {
        match self {
            Version::Resolved(_) => self,
            Version::Constraints(clauses) => Version::Resolved(resolve_version(&clauses)),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Version::Resolved(_))
    }
}

impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Declared {
            Clause(String),
            Clauses(Vec<String>),
        }

        Ok(match Declared::deserialize(deserializer)? {
            Declared::Clause(clause) => Version::Constraints(vec![clause]),
            Declared::Clauses(clauses) => Version::Constraints(clauses),
        })
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::Constraints(Vec::new())
    }
}

/// Resource descriptor - one declared infrastructure resource
///
/// Built once by the loader, then only read: sorting moves descriptors
/// around but never rewrites `resource_type`, `provider_name`,
/// `provider_source` or `mode`.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Resource {
    /// Type name within the provider, e.g. `private_key`
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Short provider identifier, e.g. `tls`
    #[serde(rename = "provider")]
    pub provider_name: String,
    /// Provider source, normally `<namespace>/<name>`; may be anything
    #[serde(rename = "source", default)]
    pub provider_source: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub version: Version,
}

impl Resource {
    pub fn new(
        resource_type: impl Into<String>,
        provider_name: impl Into<String>,
        provider_source: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            provider_name: provider_name.into(),
            provider_source: provider_source.into(),
            mode: Mode::Unspecified,
            version: Version::default(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// `<provider>_<type>`
    pub fn full_type(&self) -> String {
        identity::full_type(self)
    }

    /// Registry documentation URL, empty when it cannot be determined
    pub fn url(&self) -> String {
        identity::url(self)
    }

    pub fn display_version(&self) -> String {
        self.version.display()
    }
}
