//! Conformance tests that run YAML fixtures against matchutils
//!
//! Run with: cargo test -p matchutils-test --test conformance --features fixtures
//!
//! Note: This test file requires the `fixtures` feature to be enabled.

#![cfg(feature = "fixtures")]

use matchutils_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixtures directory of this crate
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and run one fixture file, returning how many fixtures it held
fn run_fixture_file(name: &str) -> usize {
    let path = fixtures_dir().join(name);
    let yaml = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    // Parse potentially multiple fixtures (separated by ---)
    let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
        panic!("Failed to parse {}: {}", path.display(), e);
    });

    for fixture in &fixtures {
        println!("  Running: {}", fixture.name);
        fixture.run_and_assert();
    }
    fixtures.len()
}

#[test]
fn test_dispatch() {
    assert_eq!(run_fixture_file("01_dispatch.yaml"), 2);
}

#[test]
fn test_predicates() {
    assert_eq!(run_fixture_file("02_predicates.yaml"), 2);
}

#[test]
fn test_failures() {
    assert_eq!(run_fixture_file("03_failures.yaml"), 2);
}

#[test]
fn test_every_fixture_file_is_covered() {
    let mut names: Vec<String> = fs::read_dir(fixtures_dir())
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".yaml") || name.ends_with(".yml"))
        .collect();
    names.sort();
    assert_eq!(
        names,
        ["01_dispatch.yaml", "02_predicates.yaml", "03_failures.yaml"]
    );
}
