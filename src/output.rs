//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.
//!
//! ## Generate
//!
//! ```text
//! 001 https://example.com/ (1.00)
//! 002 https://example.com/lifts/stair (0.80)
//!
//! Wrote 2 URLs to sitemap.xml
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 https://example.com/
//!     Priority: 1.00
//!     Lastmod: 2022-06-15T12:30:45+00:00
//!
//! 1 page would be listed
//! ```

use crate::generate::GenerateReport;
use crate::sitemap::SitemapUrl;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .urls
        .iter()
        .enumerate()
        .map(|(i, url)| format!("{} {} ({})", format_index(i + 1), url.loc, url.priority))
        .collect();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Wrote {} to {}",
        plural(report.urls.len(), "URL", "URLs"),
        report.output.display()
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

pub fn format_check_output(urls: &[SitemapUrl]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, url) in urls.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), url.loc));
        lines.push(format!("    Priority: {}", url.priority));
        lines.push(format!("    Lastmod: {}", url.lastmod));
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "{} would be listed",
        plural(urls.len(), "page", "pages")
    ));
    lines
}

pub fn print_check_output(urls: &[SitemapUrl]) {
    for line in format_check_output(urls) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::Priority;
    use std::path::PathBuf;

    fn url(loc: &str, priority: f64) -> SitemapUrl {
        SitemapUrl::new(
            loc.to_string(),
            "2022-06-15T12:30:45+00:00".to_string(),
            Priority::new(priority),
        )
    }

    #[test]
    fn generate_lists_urls_then_summary() {
        let report = GenerateReport {
            output: PathBuf::from("sitemap.xml"),
            urls: vec![
                url("https://example.com/", 1.0),
                url("https://example.com/lifts/stair", 0.8),
            ],
        };
        assert_eq!(
            format_generate_output(&report),
            vec![
                "001 https://example.com/ (1.00)",
                "002 https://example.com/lifts/stair (0.80)",
                "",
                "Wrote 2 URLs to sitemap.xml",
            ]
        );
    }

    #[test]
    fn generate_with_no_urls_is_summary_only() {
        let report = GenerateReport {
            output: PathBuf::from("sitemap.xml"),
            urls: vec![],
        };
        assert_eq!(format_generate_output(&report), vec!["Wrote 0 URLs to sitemap.xml"]);
    }

    #[test]
    fn generate_summary_singular() {
        let report = GenerateReport {
            output: PathBuf::from("out.xml"),
            urls: vec![url("/", 1.0)],
        };
        assert_eq!(
            format_generate_output(&report).last().unwrap(),
            "Wrote 1 URL to out.xml"
        );
    }

    #[test]
    fn check_shows_fields_as_context_lines() {
        let lines = format_check_output(&[url("https://example.com/", 1.0)]);
        assert_eq!(
            lines,
            vec![
                "001 https://example.com/",
                "    Priority: 1.00",
                "    Lastmod: 2022-06-15T12:30:45+00:00",
                "",
                "1 page would be listed",
            ]
        );
    }

    #[test]
    fn check_empty() {
        assert_eq!(format_check_output(&[]), vec!["0 pages would be listed"]);
    }
}
