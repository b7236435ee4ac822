use mindex_parser_api::ParserConfig;
use serde::{Deserialize, Serialize};

/// Directories never descended into unless the skip-list is replaced
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "dist",
    "build",
    "__pycache__",
    "venv",
    "env",
    ".venv",
    ".env",
    "site-packages",
];

/// Shape of each file's entry in the result tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Bare exported names
    #[default]
    Legacy,
    /// Full export records with kinds and metadata
    Enhanced,
}

/// Configuration for a project scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory names that are never descended into
    pub skip_dirs: Vec<String>,

    /// Names or records per file
    pub mode: OutputMode,

    /// Settings handed to every parser
    pub parser: ParserConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            mode: OutputMode::Legacy,
            parser: ParserConfig::default(),
        }
    }
}

impl ScanConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.skip_dirs.iter().any(|d| d.is_empty()) {
            return Err("skip_dirs cannot contain an empty name".to_string());
        }
        self.parser.validate()
    }

    /// Whether a directory with this name is left out of the scan.
    /// Hidden directories are always skipped.
    pub fn should_skip_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.skip_dirs.iter().any(|d| d == name)
    }

    /// Replace the skip-list
    pub fn with_skip_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Select the output mode
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the parser configuration
    pub fn with_parser_config(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}
