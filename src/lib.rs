//! # sitemap-gen
//!
//! Generates an XML sitemap for a PHP website by walking its file tree.
//! Every `.php` page becomes a `<url>` with a canonical location, the file's
//! modification time, and a priority derived from where the page lives.
//!
//! # Pipeline
//!
//! ```text
//! site root  →  scan  →  filter  →  loc / lastmod / priority  →  sitemap.xml
//! ```
//!
//! The run is a single synchronous pass. Pages are written as they are found,
//! in filesystem order.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `sitemap.toml` loading, stock defaults, CLI overrides, validation |
//! | [`robots`] | `robots.txt` substring exclusion |
//! | [`scan`] | Recursive traversal and the page acceptance rules |
//! | [`priority`] | Depth- and section-based priority heuristic |
//! | [`lastmod`] | File modification time lookup and formatting |
//! | [`sitemap`] | Location derivation and XML serialization |
//! | [`generate`] | Ties the stages together and writes the output file |
//! | [`output`] | CLI output formatting |
//!
//! # Compatibility Notes
//!
//! Output deliberately matches the sitemaps this tool has always produced:
//!
//! - `index` and `.php` are removed from locations by plain substring
//!   replacement, so `/reindex.php` becomes `/re`.
//! - `robots.txt` is matched as raw text, not parsed into rules.
//! - `<lastmod>` is local time with a literal `+00:00` unless
//!   `lastmod_utc = true`.
//! - Priorities are not clamped, so very deep pages get negative scores
//!   unless `clamp_priority = true`.
//! - Nothing is XML-escaped.

pub mod config;
pub mod generate;
pub mod lastmod;
pub mod output;
pub mod priority;
pub mod robots;
pub mod scan;
pub mod sitemap;

#[cfg(test)]
pub(crate) mod test_helpers;
