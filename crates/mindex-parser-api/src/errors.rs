use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while extracting exports from a single file
///
/// None of these escape a project scan: the scanner logs them and records
/// the file as having no exports.
#[derive(Error, Debug)]
pub enum ParserError {
    /// Failed to read file
    #[error("IO error reading {0}: {1}")]
    IoError(PathBuf, #[source] std::io::Error),

    /// Syntax error in source code
    #[error("Syntax error in {0}:{1}:{2}: {3}")]
    SyntaxError(PathBuf, usize, usize, String),

    /// File too large
    #[error("File {0} exceeds maximum size ({1} bytes)")]
    FileTooLarge(PathBuf, usize),

    /// The file extension is outside the parser's support boundary
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(PathBuf),

    /// The grammar could not be loaded or produced no tree
    #[error("Grammar error in {0}: {1}")]
    GrammarError(PathBuf, String),

    /// External interpreter exceeded its time limit
    #[error("External parser for {0} exceeded timeout of {1:?}")]
    Timeout(PathBuf, Duration),

    /// External interpreter could not be spawned or exited unsuccessfully
    #[error("External parser failed for {0}: {1}")]
    ExternalProcess(PathBuf, String),

    /// External interpreter printed something other than a JSON name list
    #[error("Malformed output from external parser for {0}: {1}")]
    MalformedOutput(PathBuf, String),

    /// No interpreter is installed for a delegated language
    #[error("Interpreter '{0}' is not available")]
    InterpreterUnavailable(String),

    /// Invalid parser configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ParserError {
    /// Whether this error is the silent "not my file type" boundary rather
    /// than a failure worth a warning.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ParserError::UnsupportedExtension(_))
    }
}

/// Result type for parser operations
pub type ParserResult<T> = Result<T, ParserError>;
