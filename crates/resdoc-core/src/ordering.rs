//! Ordering engine - deterministic order for resource listings
//!
//! The only key is the full type. Resources sharing a full type keep their
//! input order, so the sort MUST be stable: `slice::sort_by` is documented
//! stable, `sort_unstable_by` and parallel sorts are not acceptable here.

use std::cmp::Ordering;

use crate::Resource;

/// Compare two resources by full type (plain byte-wise string order)
pub fn compare(a: &Resource, b: &Resource) -> Ordering {
    // Same as comparing the concatenated strings, without allocating
    a.provider_name
        .bytes()
        .chain(std::iter::once(b'_'))
        .chain(a.resource_type.bytes())
        .cmp(
            b.provider_name
                .bytes()
                .chain(std::iter::once(b'_'))
                .chain(b.resource_type.bytes()),
        )
}

/// Stable sort of a resource collection by full type
pub fn sort_resources(mut resources: Vec<Resource>) -> Vec<Resource> {
    sort_resources_in_place(&mut resources);
    resources
}

/// In-place variant of [`sort_resources`]
pub fn sort_resources_in_place(resources: &mut [Resource]) {
    resources.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, Version};

    fn res(provider: &str, ty: &str, source: &str, mode: Mode, version: &str) -> Resource {
        Resource::new(ty, provider, source)
            .with_mode(mode)
            .with_version(Version::Resolved(version.into()))
    }

    fn sample_resources() -> Vec<Resource> {
        vec![
            res("c", "e", "hashicorp/e", Mode::Managed, "1.5.0"),
            res("c", "e_x", "hashicorp/e", Mode::Managed, "1.5.0"),
            res("a", "a", "hashicorp/a", Mode::Managed, "1.1.0"),
            res("b", "d", "hashicorp/d", Mode::Managed, "1.4.0"),
            res("b", "b", "hashicorp/b", Mode::Managed, "1.2.0"),
            res("c", "c", "hashicorp/c", Mode::Managed, "1.3.0"),
            res("a", "f", "hashicorp/f", Mode::Managed, "1.6.0"),
            res("z", "z", "hashicorp/a", Mode::Managed, "1.5.0"),
            res("z", "z", "hashicorp/a", Mode::Data, "1.5.0"),
            res("z", "z", "hashicorp/a", Mode::Unspecified, "1.5.0"),
        ]
    }

    fn full_types(resources: &[Resource]) -> Vec<String> {
        resources.iter().map(Resource::full_type).collect()
    }

    // ── Ordering by type ───────────────────────────────

    #[test]
    fn test_sorted_by_type() {
        let sorted = sort_resources(sample_resources());
        assert_eq!(
            full_types(&sorted),
            vec!["a_a", "a_f", "b_b", "b_d", "c_c", "c_e", "c_e_x", "z_z", "z_z", "z_z"]
        );
    }

    #[test]
    fn test_sorted_by_type_keeps_mode_order() {
        let sorted = sort_resources(sample_resources());
        let actual: Vec<String> = sorted
            .iter()
            .map(|r| {
                let suffix = match r.mode {
                    Mode::Managed => "_m",
                    Mode::Data => "_d",
                    Mode::Unspecified => "",
                };
                format!("{}{}", r.full_type(), suffix)
            })
            .collect();
        assert_eq!(
            actual,
            vec![
                "a_a_m", "a_f_m", "b_b_m", "b_d_m", "c_c_m", "c_e_m", "c_e_x_m", "z_z_m", "z_z_d",
                "z_z"
            ]
        );
    }

    #[test]
    fn test_ties_keep_input_order_regardless_of_mode() {
        let input = vec![
            res("z", "z", "", Mode::Unspecified, "3"),
            res("a", "a", "", Mode::Managed, "0"),
            res("z", "z", "", Mode::Data, "2"),
            res("z", "z", "", Mode::Managed, "1"),
        ];
        let sorted = sort_resources(input);
        let versions: Vec<String> = sorted.iter().map(Resource::display_version).collect();
        assert_eq!(versions, vec!["0", "3", "2", "1"]);
    }

    #[test]
    fn test_empty_type_sorts_first_within_provider() {
        let sorted = sort_resources(vec![
            res("aws", "bucket", "", Mode::Managed, "1"),
            res("aws", "", "", Mode::Managed, "1"),
        ]);
        assert_eq!(full_types(&sorted), vec!["aws_", "aws_bucket"]);
    }

    // ── compare ────────────────────────────────────────

    #[test]
    fn test_compare_matches_full_type_order() {
        let resources = sample_resources();
        for a in &resources {
            for b in &resources {
                assert_eq!(
                    compare(a, b),
                    a.full_type().cmp(&b.full_type()),
                    "{} vs {}",
                    a.full_type(),
                    b.full_type()
                );
            }
        }
    }

    #[test]
    fn test_compare_ignores_mode_and_version() {
        let a = res("z", "z", "x/y", Mode::Managed, "1.0.0");
        let b = res("z", "z", "other", Mode::Data, "9.9.9");
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_compare_underscore_boundary() {
        // "c_e" < "c_e_x" and "a_b_c" splits differently from "a_b" + "c"
        let a = res("c", "e", "", Mode::Managed, "");
        let b = res("c", "e_x", "", Mode::Managed, "");
        assert_eq!(compare(&a, &b), Ordering::Less);

        let c = res("a_b", "c", "", Mode::Managed, "");
        let d = res("a", "b_c", "", Mode::Managed, "");
        assert_eq!(compare(&c, &d), Ordering::Equal);
    }

    // ── Idempotence / determinism ──────────────────────

    #[test]
    fn test_sort_idempotent() {
        let once = sort_resources(sample_resources());
        let twice = sort_resources(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_determinism_100_iterations() {
        let first = sort_resources(sample_resources());
        for i in 0..100 {
            let result = sort_resources(sample_resources());
            assert_eq!(first, result, "Determinism failure at iteration {}", i);
        }
    }

    #[test]
    fn test_sort_in_place_empty() {
        let mut resources: Vec<Resource> = Vec::new();
        sort_resources_in_place(&mut resources);
        assert!(resources.is_empty());
    }
}
