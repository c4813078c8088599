//! Pipeline: scan → filter → compute fields → write XML.
//!
//! [`generate`] runs the whole thing against the filesystem. The exclusion
//! file is read before the output is opened, so a missing `robots.txt`
//! leaves no sitemap behind. Any later failure (an unreadable page, a write
//! error) aborts the run and leaves the partial file on disk.
//!
//! [`write_sitemap`] takes any `Write` and is what tests drive directly.

use crate::config::SitemapConfig;
use crate::lastmod::{self, LastmodZone};
use crate::priority;
use crate::robots::{RobotsError, RobotsExclusion};
use crate::scan::{self, FileEntry, ScanError};
use crate::sitemap::{self, SitemapUrl, SitemapWriter};
use chrono::Datelike;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Robots error: {0}")]
    Robots(#[from] RobotsError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Cannot read modification time of {path}: {source}")]
    Lastmod {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a completed run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub urls: Vec<SitemapUrl>,
}

/// Year used to tell recent archive pages from old ones.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Derive the `<url>` fields for one accepted page.
pub fn url_for(
    entry: &FileEntry,
    config: &SitemapConfig,
    current_year: i32,
) -> Result<SitemapUrl, GenerateError> {
    let zone = LastmodZone::from_utc_flag(config.lastmod_utc);
    let lastmod = lastmod::lastmod(&entry.filepath, zone).map_err(|source| {
        GenerateError::Lastmod {
            path: entry.filepath.clone(),
            source,
        }
    })?;
    Ok(SitemapUrl::new(
        sitemap::location(&config.base_url, &entry.filename),
        lastmod,
        priority::entry_priority(entry, current_year, &config.priority),
    ))
}

/// Lazily yield a `<url>` for every accepted page, in traversal order.
pub fn urls<'a>(
    config: &'a SitemapConfig,
    robots: &'a RobotsExclusion,
    current_year: i32,
) -> impl Iterator<Item = Result<SitemapUrl, GenerateError>> + 'a {
    scan::pages(&config.site_root, robots)
        .map(move |entry| -> Result<SitemapUrl, GenerateError> {
            url_for(&entry?, config, current_year)
        })
}

/// Stream a complete sitemap into `out`, stopping at the first error.
///
/// Returns the flushed writer and the urls written.
pub fn write_sitemap<W: Write>(
    config: &SitemapConfig,
    robots: &RobotsExclusion,
    current_year: i32,
    out: W,
) -> Result<(W, Vec<SitemapUrl>), GenerateError> {
    let mut writer = SitemapWriter::begin(out)?;
    let mut written = Vec::new();
    for url in urls(config, robots, current_year) {
        let url = url?;
        writer.write_url(&url)?;
        written.push(url);
    }
    Ok((writer.finish()?, written))
}

/// Scan without writing anything. Used by `check`.
pub fn collect(
    config: &SitemapConfig,
    current_year: i32,
) -> Result<Vec<SitemapUrl>, GenerateError> {
    let robots = RobotsExclusion::load(&config.robots_path())?;
    urls(config, &robots, current_year).collect()
}

/// Write the sitemap described by `config` to `config.output`.
pub fn generate(
    config: &SitemapConfig,
    current_year: i32,
) -> Result<GenerateReport, GenerateError> {
    let robots = RobotsExclusion::load(&config.robots_path())?;

    let output_error = |source: std::io::Error| GenerateError::Output {
        path: config.output.clone(),
        source,
    };
    let file = File::create(&config.output).map_err(output_error)?;
    let (_, urls) = write_sitemap(config, &robots, current_year, BufWriter::new(file))
        .map_err(|e| match e {
            GenerateError::Io(source) => output_error(source),
            other => other,
        })?;

    Ok(GenerateReport {
        output: config.output.clone(),
        urls,
    })
}
