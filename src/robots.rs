//! Robots exclusion check.
//!
//! `robots.txt` is not parsed into rules. Its raw text is searched for the
//! candidate's path with `.php` removed, so `Disallow: /admin` excludes
//! `/admin.php` but keeps `/admin/login.php`. There is no prefix matching:
//! the whole stripped path has to appear in the file.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RobotsError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The verbatim contents of a robots exclusion file.
#[derive(Debug, Clone, Default)]
pub struct RobotsExclusion {
    text: String,
}

impl RobotsExclusion {
    /// Read the exclusion file once. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, RobotsError> {
        let text = fs::read_to_string(path).map_err(|source| RobotsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(text))
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True when `filename`, with every `.php` removed, occurs anywhere in the file.
    pub fn excludes(&self, filename: &str) -> bool {
        self.text.contains(&filename.replace(".php", ""))
    }
}
