//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use md_core::{Tolerance, ValidationError};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Matching window in seconds. Pairs strictly closer than this match.
    pub tolerance_secs: f64,

    /// Whether to color terminal output.
    pub color: bool,

    /// Column width of the reference name in match listings.
    pub name_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance_secs: Tolerance::DEFAULT_SECS,
            color: true,
            name_width: 35,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (MATCH_DICOM_*)
        figment = figment.merge(Env::prefixed("MATCH_DICOM_"));

        figment.extract()
    }

    /// Returns the validated matching window.
    pub fn tolerance(&self) -> Result<Tolerance, ValidationError> {
        Tolerance::from_secs_f64(self.tolerance_secs)
    }
}

/// Returns the platform-specific config directory for match-dicom.
///
/// On Linux: `~/.config/match-dicom`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("match-dicom"))
}
