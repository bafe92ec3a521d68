//! Property tests for locator handling.

use std::path::Path;

use pkgmirror::{resolve, MirrorError, SpecDocument};
use proptest::prelude::*;

proptest! {
    #[test]
    fn resolve_accepts_any_locator_with_enough_separators(
        segments in proptest::collection::vec("[a-z0-9]{1,8}", 2..6),
        file in "[a-z0-9]{1,8}\\.tar",
    ) {
        let locator = format!("http://{}/{}", segments.join("/"), file);
        let (dir, name) = resolve(&locator, Path::new("/root")).unwrap();

        prop_assert_eq!(name.as_str(), file.as_str());
        prop_assert!(!name.contains('/'));
        prop_assert!(dir.starts_with("/root"));
    }

    #[test]
    fn resolve_rejects_fewer_than_three_separators(
        parts in proptest::collection::vec("[a-z0-9:.]{0,12}", 1..4),
    ) {
        // Joining n parts yields n-1 separators, so at most 2 here.
        let locator = parts.join("/");
        let result = resolve(&locator, Path::new("/root"));

        let is_malformed = matches!(result, Err(MirrorError::MalformedLocator { .. }));
        prop_assert!(is_malformed);
    }

    #[test]
    fn parse_keeps_exactly_the_locator_lines(
        lines in proptest::collection::vec("[a-z0-9/.:-]{1,20}", 0..8),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.txt");

        let mut content = String::from("# header\n@EXPLICIT\n");
        for line in &lines {
            content.push_str("  ");
            content.push_str(line);
            content.push_str("  \n\n@directive value\n");
        }
        std::fs::write(&path, &content).unwrap();

        let doc = SpecDocument::parse(&path).unwrap();
        prop_assert_eq!(doc.locators(), lines.as_slice());
    }

    #[test]
    fn replace_without_a_segment_match_is_identity(
        segments in proptest::collection::vec("[a-z]{1,6}", 3..6),
        token in "[0-9]{2,4}",
    ) {
        // Digit-only token can never equal a letter-only segment.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.txt");
        let locator = format!("http://{}/pkg.tar", segments.join("/"));
        std::fs::write(&path, format!("@EXPLICIT\n{locator}\n")).unwrap();

        let mut doc = SpecDocument::parse(&path).unwrap();
        let before = doc.locators().to_vec();
        doc.replace(&token, "replacement");

        prop_assert_eq!(doc.locators(), before.as_slice());
    }
}
