//! Sitemap XML serialization.
//!
//! The document is written progressively: [`SitemapWriter::begin`] emits the
//! envelope, [`SitemapWriter::write_url`] appends one `<url>` block per page
//! and [`SitemapWriter::finish`] closes it. Output looks like:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//! <!-- Generated with `sitemap-gen` -->
//! <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2022-06-15T12:30:45+00:00</lastmod>
//!     <priority>1.00</priority>
//! </url>
//! </urlset>
//! ```
//!
//! Values are written as-is. Paths are not XML-escaped, so a filename with
//! `&` or `<` produces a malformed document.
//! Non-UTF-8 bytes in a filename reach `<loc>` as U+FFFD.

use crate::priority::Priority;
use serde::Serialize;
use std::io::{self, Write};

pub const XML_PREAMBLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
<!-- Generated with `sitemap-gen` -->
"#;

pub const XML_POSTAMBLE: &str = "</urlset>";

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: String,
    pub priority: String,
}

impl SitemapUrl {
    pub fn new(loc: String, lastmod: String, priority: Priority) -> Self {
        Self {
            loc,
            lastmod,
            priority: priority.to_string(),
        }
    }

    /// Render the `<url>` block, newline-terminated.
    pub fn to_xml(&self) -> String {
        format!(
            "<url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <priority>{}</priority>\n</url>\n",
            self.loc, self.lastmod, self.priority
        )
    }
}

/// Canonical location for a page: `base_url` followed by `filename` with
/// every `.php` and every `index` removed.
///
/// Both removals are plain substring replacement, so `/reindex.php` becomes
/// `/re`.
pub fn location(base_url: &str, filename: &str) -> String {
    let path = filename.replace(".php", "").replace("index", "");
    format!("{base_url}{path}")
}

/// Streams a sitemap to any writer.
pub struct SitemapWriter<W: Write> {
    out: W,
    count: usize,
}

impl<W: Write> SitemapWriter<W> {
    /// Write the preamble and return a writer ready for `<url>` blocks.
    pub fn begin(mut out: W) -> io::Result<Self> {
        out.write_all(XML_PREAMBLE.as_bytes())?;
        Ok(Self { out, count: 0 })
    }

    pub fn write_url(&mut self, url: &SitemapUrl) -> io::Result<()> {
        self.out.write_all(url.to_xml().as_bytes())?;
        self.count += 1;
        Ok(())
    }

    /// Number of `<url>` blocks written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Write the closing tag, flush, and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(XML_POSTAMBLE.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}
