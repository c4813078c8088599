//! Site tree traversal and page filtering.
//!
//! Walks the site root recursively and yields a [`FileEntry`] for every page
//! that belongs in the sitemap. Entries come out in filesystem order; nothing
//! is sorted.
//!
//! ## Acceptance Rules
//!
//! An entry is a page when all of these hold:
//!
//! - its relative path contains `.php`
//! - it is a regular file (symlinks are resolved)
//! - [`RobotsExclusion::excludes`] is false for it
//! - its relative path does not contain `elms`
//!
//! Hidden entries (names starting with `.`) below the root are not visited.
//! Symlinked directories are descended into; a link cycle aborts the scan.

use crate::robots::RobotsExclusion;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Marker every page path must contain.
pub const PAGE_MARKER: &str = ".php";

/// Paths containing this are never listed.
pub const EXCLUDED_MARKER: &str = "elms";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// One filesystem entry under the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the site root with a leading `/` and forward slashes.
    /// Non-UTF-8 bytes are replaced with U+FFFD.
    pub filename: String,
    /// Full path for metadata lookups.
    pub filepath: PathBuf,
    /// Number of `/` in `filename`. The root `/index.php` has depth 1.
    pub depth: usize,
}

impl FileEntry {
    /// Build an entry for `path`, relative to `root`.
    ///
    /// Returns `None` when `path` is not under `root`.
    pub fn new(root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        let mut filename = String::new();
        for component in relative.components() {
            filename.push('/');
            filename.push_str(&component.as_os_str().to_string_lossy());
        }
        // Windows separators can survive inside a lossy component
        let filename = filename.replace('\\', "/");
        let depth = filename.matches('/').count();
        Some(Self {
            filename,
            filepath: path.to_path_buf(),
            depth,
        })
    }

    /// Apply the acceptance rules.
    pub fn is_page(&self, robots: &RobotsExclusion) -> bool {
        self.filename.contains(PAGE_MARKER)
            && self.filepath.is_file()
            && !robots.excludes(&self.filename)
            && !self.filename.contains(EXCLUDED_MARKER)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Lazily walk `root`, yielding accepted pages in traversal order.
///
/// Errors from the walk are yielded in place and do not stop iteration;
/// callers that want fail-fast behaviour stop at the first `Err`.
pub fn pages<'a>(
    root: &'a Path,
    robots: &'a RobotsExclusion,
) -> impl Iterator<Item = Result<FileEntry, ScanError>> + 'a {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(move |entry| match entry {
            Err(e) => Some(Err(ScanError::from(e))),
            Ok(entry) => FileEntry::new(root, entry.path())
                .filter(|file| file.is_page(robots))
                .map(Ok),
        })
}

/// Collect every accepted page under `root`.
pub fn scan(root: &Path, robots: &RobotsExclusion) -> Result<Vec<FileEntry>, ScanError> {
    pages(root, robots).collect()
}
