//! Identity and documentation URL derivation
//!
//! Both functions are total. A provider source that does not look like a
//! registry address yields an empty URL, which callers treat as "omit".

use crate::Resource;

/// Base of the public registry's provider documentation
pub const REGISTRY_PROVIDERS_URL: &str = "https://registry.terraform.io/providers";

/// Composite type name: `<provider>_<type>`
pub fn full_type(resource: &Resource) -> String {
    let capacity = resource.provider_name.len() + 1 + resource.resource_type.len();
    let mut out = String::with_capacity(capacity);
    out.push_str(&resource.provider_name);
    out.push('_');
    out.push_str(&resource.resource_type);
    out
}

/// Registry documentation URL for the resource, or `""` when the provider
/// source is not a plain `<namespace>/<name>` pair.
pub fn url(resource: &Resource) -> String {
    let Some((namespace, name)) = registry_address(&resource.provider_source) else {
        tracing::debug!(
            source = %resource.provider_source,
            resource_type = %resource.resource_type,
            "provider source is not a registry address, omitting url"
        );
        return String::new();
    };

    format!(
        "{}/{}/{}/{}/docs/resources/{}",
        REGISTRY_PROVIDERS_URL,
        namespace,
        name,
        resource.version.display(),
        resource.resource_type
    )
}

/// Split `<namespace>/<name>`; anything with a host, scheme or extra path
/// segment is rejected.
fn registry_address(source: &str) -> Option<(&str, &str)> {
    let mut segments = source.split('/');
    let namespace = segments.next()?;
    let name = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let plain = |s: &str| !s.is_empty() && !s.contains(':') && !s.contains(char::is_whitespace);
    if !plain(namespace) || !plain(name) || namespace.contains('.') {
        return None;
    }
    Some((namespace, name))
}
