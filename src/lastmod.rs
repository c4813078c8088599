//! Last-modification timestamps.
//!
//! [`modified_time`] is the one place that asks the filesystem when a file's
//! content last changed; `std::fs::Metadata::modified` picks the right
//! platform call (last-write time on Windows, `st_mtime` elsewhere).
//!
//! By default the time is rendered in **local** time and followed by a
//! literal `+00:00`, so on a machine not running in UTC the offset is wrong.
//! Existing deployments depend on that output. [`LastmodZone::Utc`] converts
//! first and makes the offset accurate.

use chrono::{DateTime, Local, Utc};
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// `strftime` pattern for `<lastmod>`. The offset is not a format specifier.
pub const LASTMOD_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

/// Which clock a timestamp is rendered in before the `+00:00` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastmodZone {
    #[default]
    Local,
    Utc,
}

impl LastmodZone {
    pub fn from_utc_flag(utc: bool) -> Self {
        if utc { Self::Utc } else { Self::Local }
    }
}

/// Last content modification time of `path`.
pub fn modified_time(path: &Path) -> io::Result<SystemTime> {
    std::fs::metadata(path)?.modified()
}

/// Render `time` for `<lastmod>`.
pub fn format_lastmod(time: SystemTime, zone: LastmodZone) -> String {
    match zone {
        LastmodZone::Local => DateTime::<Local>::from(time)
            .format(LASTMOD_FORMAT)
            .to_string(),
        LastmodZone::Utc => DateTime::<Utc>::from(time)
            .format(LASTMOD_FORMAT)
            .to_string(),
    }
}

/// Read and render the modification time of `path`.
pub fn lastmod(path: &Path, zone: LastmodZone) -> io::Result<String> {
    Ok(format_lastmod(modified_time(path)?, zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use chrono::TimeZone;
    use std::time::{Duration, UNIX_EPOCH};

    fn fixture_time() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(FIXTURE_MTIME_SECS)
    }

    #[test]
    fn utc_rendering_is_exact() {
        assert_eq!(
            format_lastmod(fixture_time(), LastmodZone::Utc),
            "2022-06-15T12:30:45+00:00"
        );
    }

    #[test]
    fn local_rendering_uses_local_clock_with_literal_offset() {
        let expected = Local
            .timestamp_opt(FIXTURE_MTIME_SECS as i64, 0)
            .unwrap()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
            + "+00:00";
        assert_eq!(format_lastmod(fixture_time(), LastmodZone::Local), expected);
    }

    #[test]
    fn lastmod_reads_file_mtime() {
        let site = setup_site(&["index.php"], "");
        let stamp = lastmod(&site.path().join("index.php"), LastmodZone::Utc).unwrap();
        assert_eq!(stamp, "2022-06-15T12:30:45+00:00");
    }

    #[test]
    fn lastmod_of_missing_file_is_an_error() {
        let site = setup_site(&[], "");
        let err = lastmod(&site.path().join("gone.php"), LastmodZone::Local).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn zone_from_flag() {
        assert_eq!(LastmodZone::from_utc_flag(false), LastmodZone::Local);
        assert_eq!(LastmodZone::from_utc_flag(true), LastmodZone::Utc);
    }
}
