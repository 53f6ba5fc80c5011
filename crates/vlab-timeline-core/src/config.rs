//! Report configuration
//!
//! Settings come from [`ReportConfig::default`], optionally overlaid by a TOML
//! file. Every key in the file is optional:
//!
//! ```toml
//! output = "reports/timeline.xlsx"
//! sheet_name = "Project Timeline"
//! title = "Virtual Lab LMS - TaRL Assessment System"
//! subtitle = "Project Timeline: August - November 2024"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Default output file name, written relative to the working directory
pub const DEFAULT_OUTPUT: &str = "Virtual_Lab_Timeline_August_November_2024.xlsx";

/// Characters Excel rejects in worksheet names
const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Resolved report settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Destination of the spreadsheet
    pub output: PathBuf,
    /// Name of the single worksheet
    pub sheet_name: String,
    /// Main title (first merged row)
    pub title: String,
    /// Subtitle (second merged row)
    pub subtitle: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            sheet_name: "Project Timeline".into(),
            title: "Virtual Lab LMS - TaRL Assessment System".into(),
            subtitle: "Project Timeline: August - November 2024".into(),
        }
    }
}

/// On-disk form of [`ReportConfig`]
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output: Option<PathBuf>,
    sheet_name: Option<String>,
    title: Option<String>,
    subtitle: Option<String>,
}

impl ReportConfig {
    /// Load defaults overlaid with the TOML file at `path`
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse defaults overlaid with TOML `content`
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();
        let config = Self {
            output: file.output.unwrap_or(defaults.output),
            sheet_name: file.sheet_name.unwrap_or(defaults.sheet_name),
            title: file.title.unwrap_or(defaults.title),
            subtitle: file.subtitle.unwrap_or(defaults.subtitle),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Check the worksheet name against Excel's naming rules
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.sheet_name.as_str();
        let len = name.chars().count();
        if len == 0
            || len > 31
            || name.contains(INVALID_SHEET_CHARS)
            || name.starts_with('\'')
            || name.ends_with('\'')
            || name.eq_ignore_ascii_case("history")
        {
            return Err(ConfigError::InvalidSheetName(self.sheet_name.clone()));
        }
        Ok(())
    }
}
