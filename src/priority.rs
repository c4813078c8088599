//! Priority heuristic.
//!
//! Shallow pages rank higher: the base score is `0.9 - depth * 0.15`. The
//! first matching rule then adjusts it:
//!
//! | Rule | Priority |
//! |------|----------|
//! | `/index.php` at depth 1 | `1.00` |
//! | any other `/index.php` | base + `index_bonus` |
//! | under `featured_section` | base + `featured_bonus` |
//! | under `archive_section`, not `/<current year>` | base − `archive_penalty` |
//! | otherwise | base |
//!
//! Scores are rendered with two decimals. Very deep pages fall below zero
//! (`-0.15` at depth 7) and are written that way unless `clamp_priority` is
//! set, which limits them to the sitemap protocol's `0.0..=1.0` range.

use crate::config::PriorityConfig;
use crate::scan::FileEntry;
use std::fmt;

const ROOT_INDEX_MARKER: &str = "/index.php";
const BASELINE: f64 = 0.9;

/// A sitemap priority score.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(f64);

impl Priority {
    pub const MAX: Priority = Priority(1.0);

    pub fn new(value: f64) -> Self {
        Priority(value)
    }

    /// Limit the score to `0.0..=1.0`. `NaN` becomes `0.0`.
    pub fn clamped(self) -> Self {
        if self.0.is_nan() {
            return Priority(0.0);
        }
        // + 0.0 turns -0.0 into 0.0 so it never renders as "-0.00"
        Priority(self.0.clamp(0.0, 1.0) + 0.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Priority before any section rule: `0.9 - depth * 1.5 / 10`.
pub fn base_priority(depth: usize) -> f64 {
    BASELINE - (depth as f64 * 1.5) / 10.0
}

/// Compute the priority of `filename` at `depth`.
///
/// `current_year` decides whether an archive page is recent. The score is
/// only limited to `0.0..=1.0` when `rules.clamp_priority` is set.
pub fn priority(
    filename: &str,
    depth: usize,
    current_year: i32,
    rules: &PriorityConfig,
) -> Priority {
    let score = raw_priority(filename, depth, current_year, rules);
    if rules.clamp_priority {
        score.clamped()
    } else {
        score
    }
}

fn raw_priority(
    filename: &str,
    depth: usize,
    current_year: i32,
    rules: &PriorityConfig,
) -> Priority {
    let base = base_priority(depth);

    if filename.contains(ROOT_INDEX_MARKER) && depth == 1 {
        Priority::MAX
    } else if filename.contains(ROOT_INDEX_MARKER) {
        Priority::new(base + rules.index_bonus)
    } else if section_matches(filename, &rules.featured_section) {
        Priority::new(base + rules.featured_bonus)
    } else if section_matches(filename, &rules.archive_section)
        && !filename.contains(&format!("/{current_year:04}"))
    {
        Priority::new(base - rules.archive_penalty)
    } else {
        Priority::new(base)
    }
}

/// Convenience wrapper over [`priority`] for a scanned entry.
pub fn entry_priority(entry: &FileEntry, current_year: i32, rules: &PriorityConfig) -> Priority {
    priority(&entry.filename, entry.depth, current_year, rules)
}

// An empty section marker would match everything; treat it as disabled.
fn section_matches(filename: &str, section: &str) -> bool {
    !section.is_empty() && filename.contains(section)
}
