//! Property-based tests for repository identifiers and path resolution.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::identifier::{parse_remote_uri, RepoId};
    use crate::path::resolve_local_path;
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    // ============================================================================
    // resolve_local_path property tests
    // ============================================================================

    proptest! {
        /// Property: resolve_local_path is deterministic (same input = same output)
        #[test]
        fn resolve_is_deterministic(
            root in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
            org in "[a-zA-Z0-9.-]{1,20}",
            name in "[a-zA-Z0-9._-]{1,20}",
        ) {
            let id = RepoId::new(org, name);
            let first = resolve_local_path(Path::new(&root), &id);
            let second = resolve_local_path(Path::new(&root), &id);
            prop_assert_eq!(first, second);
        }

        /// Property: the result is exactly root/org/name
        #[test]
        fn resolve_appends_org_then_name(
            root in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
            org in "[a-zA-Z0-9-]{1,20}",
            name in "[a-zA-Z0-9_-]{1,20}",
        ) {
            let id = RepoId::new(org.clone(), name.clone());
            let path = resolve_local_path(Path::new(&root), &id);
            prop_assert_eq!(&path, &PathBuf::from(format!("{}/{}/{}", root, org, name)));
            prop_assert!(path.starts_with(&root));
            prop_assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(name.as_str()));
        }
    }

    // ============================================================================
    // parse_remote_uri property tests
    // ============================================================================

    proptest! {
        /// Property: https URIs yield the org and repo segments back
        #[test]
        fn https_uri_roundtrips_org_and_name(
            host in "[a-z]{1,10}\\.(com|org|io)",
            org in "[a-zA-Z0-9][a-zA-Z0-9.-]{0,15}",
            name in "[a-zA-Z0-9][a-zA-Z0-9._-]{0,15}",
        ) {
            let uri = format!("https://{}/{}/{}.git", host, org, name);
            let id = parse_remote_uri(&uri).unwrap();
            prop_assert_eq!(id.organization(), org.as_str());
            prop_assert_eq!(id.name(), name.as_str());
        }

        /// Property: scp-like URIs yield the org and repo segments back
        #[test]
        fn scp_uri_roundtrips_org_and_name(
            host in "[a-z]{1,10}\\.(com|org|io)",
            org in "[a-zA-Z0-9][a-zA-Z0-9.-]{0,15}",
            name in "[a-zA-Z0-9][a-zA-Z0-9._-]{0,15}",
        ) {
            let uri = format!("git@{}:{}/{}.git", host, org, name);
            let id = parse_remote_uri(&uri).unwrap();
            prop_assert_eq!(id.organization(), org.as_str());
            prop_assert_eq!(id.name(), name.as_str());
        }

        /// Property: anything not ending in .git is rejected, never panics
        #[test]
        fn parse_never_accepts_without_suffix(input in "[^.]*") {
            prop_assert!(parse_remote_uri(&input).is_err());
        }
    }
}
