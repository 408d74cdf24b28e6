//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on anchoring behavior across reference/base pairs.

use super::normalize::{anchor, resolve_components};
use proptest::prelude::*;
use std::path::{Component, Path, PathBuf};

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            path_component_strategy(),
        ],
        1..8,
    )
    .prop_map(|parts| parts.iter().collect::<PathBuf>())
}

fn plain_relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8)
        .prop_map(|parts| parts.iter().collect::<PathBuf>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Anchoring against an absolute base always yields an absolute path
    #[test]
    fn anchored_paths_are_absolute(
        reference in relative_path_strategy(),
        base in absolute_path_strategy(),
    ) {
        let anchored = anchor(&reference, &base);
        prop_assert!(anchored.is_absolute());
    }

    // Anchored paths never retain . or .. components
    #[test]
    fn anchored_paths_fully_resolved(
        reference in relative_path_strategy(),
        base in absolute_path_strategy(),
    ) {
        let anchored = anchor(&reference, &base);
        for component in anchored.components() {
            prop_assert_ne!(component, Component::CurDir);
            prop_assert_ne!(component, Component::ParentDir);
        }
    }

    // Absolute references are independent of the base they are anchored to
    #[test]
    fn absolute_references_ignore_base(
        reference in absolute_path_strategy(),
        base1 in absolute_path_strategy(),
        base2 in absolute_path_strategy(),
    ) {
        let anchored1 = anchor(&reference, &base1);
        let anchored2 = anchor(&reference, &base2);
        prop_assert_eq!(anchored1, anchored2);
    }

    // References without parent components stay inside their base
    #[test]
    fn plain_references_stay_under_base(
        reference in plain_relative_path_strategy(),
        base in absolute_path_strategy(),
    ) {
        let anchored = anchor(&reference, &base);
        prop_assert!(anchored.starts_with(&base));
        prop_assert!(anchored.ends_with(&reference));
    }

    // Anchoring an anchored path against any base changes nothing
    #[test]
    fn anchoring_is_stable(
        reference in relative_path_strategy(),
        base in absolute_path_strategy(),
        other_base in absolute_path_strategy(),
    ) {
        let first = anchor(&reference, &base);
        let second = anchor(&first, &other_base);
        prop_assert_eq!(first, second);
    }

    // Resolving components is idempotent
    #[test]
    fn resolve_components_idempotent(path in relative_path_strategy()) {
        let once = resolve_components(&path);
        let twice = resolve_components(&once);
        prop_assert_eq!(once, twice);
    }

    // Resolution of an absolute path never escapes the root
    #[test]
    fn resolve_components_clamps_at_root(
        reference in relative_path_strategy(),
    ) {
        let mut rooted = PathBuf::from("/");
        rooted.push(&reference);
        let resolved = resolve_components(&rooted);
        prop_assert!(resolved.is_absolute());
        prop_assert!(resolved.starts_with(Path::new("/")));
    }
}
