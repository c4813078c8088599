//! Shared test utilities for the sitemap-gen test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = setup_site(&["index.php", "lifts/index.php"], "Disallow: /admin\n");
//! let names = scanned_names(site.path());
//! assert_names(&names, &["/index.php", "/lifts/index.php"]);
//! ```

use std::path::Path;
use std::time::{Duration, UNIX_EPOCH};
use tempfile::TempDir;

use crate::robots::RobotsExclusion;
use crate::scan;

/// Fixed modification time applied to every fixture file:
/// 2022-06-15T12:30:45Z.
pub const FIXTURE_MTIME_SECS: u64 = 1_655_296_245;

// =========================================================================
// Fixture setup
// =========================================================================

/// Build a site in a temp directory.
///
/// Every path in `files` is created (parents included) with placeholder PHP
/// content and a fixed mtime. `robots` becomes `robots.txt` in the root.
pub fn setup_site(files: &[&str], robots: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for file in files {
        write_page(tmp.path(), file);
    }
    std::fs::write(tmp.path().join("robots.txt"), robots).unwrap();
    tmp
}

/// Create one page under `root` with the fixture mtime.
pub fn write_page(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, "<?php echo 'hello'; ?>\n").unwrap();
    let mtime = UNIX_EPOCH + Duration::from_secs(FIXTURE_MTIME_SECS);
    filetime::set_file_mtime(&path, filetime::FileTime::from_system_time(mtime)).unwrap();
}

// =========================================================================
// Scan shortcuts
// =========================================================================

/// Scan `root` with its own `robots.txt` and return the accepted filenames.
pub fn scanned_names(root: &Path) -> Vec<String> {
    let robots = RobotsExclusion::load(&root.join("robots.txt")).unwrap();
    scan::scan(root, &robots)
        .unwrap()
        .into_iter()
        .map(|entry| entry.filename)
        .collect()
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert `actual` holds exactly `expected`, ignoring order.
///
/// Traversal order depends on the filesystem, so tests never rely on it.
pub fn assert_names(actual: &[String], expected: &[&str]) {
    let mut actual: Vec<&str> = actual.iter().map(String::as_str).collect();
    let mut expected = expected.to_vec();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected, "scanned pages differ");
}

/// Extract every `<tag>` value from a rendered sitemap, in document order.
pub fn tag_values(xml: &str, tag: &str) -> Vec<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    xml.lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix(open.as_str())?
                .strip_suffix(close.as_str())
                .map(str::to_string)
        })
        .collect()
}

/// Find the `<priority>` paired with `loc`. Panics if `loc` is absent.
pub fn priority_for(xml: &str, loc: &str) -> String {
    let locs = tag_values(xml, "loc");
    let priorities = tag_values(xml, "priority");
    let index = locs.iter().position(|l| l == loc).unwrap_or_else(|| {
        panic!("loc '{loc}' not found. Available: {locs:?}")
    });
    priorities[index].clone()
}
