//! Search configuration

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default number of plies searched below the root's children before the
/// heuristic takes over
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Deepest bound accepted by [`SearchConfig::validate`]
pub const MAX_SUPPORTED_DEPTH: usize = 64;

/// Alpha bound used when searching each root successor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootWindow {
    /// Every root successor is searched with the widest window, so each
    /// candidate's value is exact.
    #[default]
    Full,
    /// Alpha starts at the best value found among earlier root successors.
    /// Faster, and the chosen move is unchanged because a later candidate
    /// only replaces the best when strictly better, but the values reported
    /// for losing candidates are upper bounds rather than exact.
    Seeded,
}

/// Configuration for the alpha-beta engine.
///
/// # Examples
///
/// ```
/// use noughts::search::{RootWindow, SearchConfig};
///
/// let config = SearchConfig::new()
///     .with_max_depth(4)
///     .with_root_window(RootWindow::Seeded);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// A node deeper than this many plies below the root's children is
    /// scored by the heuristic instead of being expanded
    pub max_depth: usize,
    /// Alpha bound for root successors
    pub root_window: RootWindow,
    /// Check that the generator's root successors are one ply ahead
    pub check_root_successors: bool,
}

impl SearchConfig {
    /// Create a configuration with default values:
    /// - Max depth: [`DEFAULT_MAX_DEPTH`]
    /// - Root window: [`RootWindow::Full`]
    /// - Root successor checks: enabled
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            root_window: RootWindow::default(),
            check_root_successors: true,
        }
    }

    /// Set the depth bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the root window.
    pub fn with_root_window(mut self, root_window: RootWindow) -> Self {
        self.root_window = root_window;
        self
    }

    /// Enable or disable root successor checks.
    pub fn with_root_checks(mut self, enabled: bool) -> Self {
        self.check_root_successors = enabled;
        self
    }

    /// Reject bounds the recursion should not be asked to reach.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `max_depth` exceeds
    /// [`MAX_SUPPORTED_DEPTH`].
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "max_depth {} exceeds the supported maximum of {MAX_SUPPORTED_DEPTH}",
                    self.max_depth
                ),
            });
        }
        Ok(())
    }

    /// Load and validate a JSON configuration file. Missing fields take
    /// their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON for
    /// this type, or fails [`SearchConfig::validate`].
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config file {path:?}"),
            source,
        })?;
        let config: SearchConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create config file {path:?}"),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
