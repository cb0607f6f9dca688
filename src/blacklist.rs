//! Blacklist management module
//!
//! Handles loading and querying a set of known-bad passwords. The set
//! is a plain value owned by the caller; the analyzer only reads it, so
//! one instance can be shared across concurrent analyses.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Failed to read blacklist file: {0}")]
    Read(#[from] std::io::Error),
}

/// A set of known-bad passwords, stored lowercased and checked
/// case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// An empty blacklist; no password will ever match it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a blacklist from candidate lines.
    ///
    /// Each candidate is trimmed of surrounding whitespace and folded
    /// to lowercase; blank candidates are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads a blacklist file, one candidate password per line.
    ///
    /// A missing file is a soft condition: it yields an empty set so
    /// analysis can proceed without blacklist coverage. Only an actual
    /// read failure is surfaced as an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.is_file() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Blacklist file not found at {:?}, using empty set", path);
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist = Self::from_lines(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Checks membership of a password, case-insensitively.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
