use std::error::Error;
use std::path::Path;

use proptest::prelude::*;
use regex::Regex;

use watchrun::errors::WatchrunError;
use watchrun::watch::{PathFilter, DEFAULT_INCLUDE};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn default_filter_accepts_everything() -> TestResult {
    let filter = PathFilter::new(DEFAULT_INCLUDE, None)?;

    assert!(filter.accepts(Path::new("/tmp/project/main.go")));
    assert!(filter.accepts(Path::new("relative/file.txt")));
    assert!(filter.accepts(Path::new("")));
    Ok(())
}

#[test]
fn include_and_exclude_are_combined() -> TestResult {
    let filter = PathFilter::new(r".*\.go$", Some(r"_test\.go$"))?;

    assert!(filter.accepts(Path::new("/d/main.go")));
    assert!(!filter.accepts(Path::new("/d/main_test.go")));
    assert!(!filter.accepts(Path::new("/d/x.tmp")));
    Ok(())
}

#[test]
fn patterns_match_the_reported_path_unanchored() -> TestResult {
    // No implicit anchoring and no relativizing: the pattern sees the whole
    // path string as reported.
    let filter = PathFilter::new("src/", None)?;

    assert!(filter.accepts(Path::new("/home/me/project/src/lib.rs")));
    assert!(!filter.accepts(Path::new("/home/me/project/tests/lib.rs")));
    Ok(())
}

#[test]
fn exclude_that_matches_nothing_excludes_nothing() -> TestResult {
    let filter = PathFilter::new(".*", Some(r"[^\s\S]"))?;

    assert!(filter.accepts(Path::new("/d/anything")));
    assert_eq!(filter.exclude(), Some(r"[^\s\S]"));
    Ok(())
}

#[test]
fn malformed_include_is_reported() {
    match PathFilter::new("(unclosed", None) {
        Err(WatchrunError::InvalidPattern { kind, pattern, .. }) => {
            assert_eq!(kind, "include");
            assert_eq!(pattern, "(unclosed");
        }
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn malformed_exclude_is_reported() {
    match PathFilter::new(".*", Some("[z-a]")) {
        Err(WatchrunError::InvalidPattern { kind, .. }) => assert_eq!(kind, "exclude"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn accepts_is_include_and_not_exclude(
        path in "[a-z/._]{0,24}",
        include in prop::sample::select(vec![".*", "a", r"\.rs$", "^/", "src/"]),
        exclude in prop::option::of(prop::sample::select(vec!["b", r"\.tmp$", "^x", "_"])),
    ) {
        let filter = PathFilter::new(include, exclude).unwrap();
        let inc = Regex::new(include).unwrap();
        let exc = exclude.map(|e| Regex::new(e).unwrap());

        let expected = inc.is_match(&path)
            && !exc.as_ref().map(|e| e.is_match(&path)).unwrap_or(false);

        prop_assert_eq!(filter.accepts_str(&path), expected);
    }
}
