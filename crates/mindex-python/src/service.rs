//! Python symbol service: backend selection and the ExportParser surface

use mindex_parser_api::{
    ExportParser, ExportRecord, ParserConfig, ParserError, ParserResult, PythonBackend,
    SymbolKind,
};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, instrument, warn};

use crate::embedded;
use crate::interpreter::InterpreterBackend;

/// Names starting with this prefix are private by convention
pub const PRIVATE_PREFIX: char = '_';

/// The backend actually serving requests once configuration and the
/// availability probe have been taken into account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedBackend {
    Interpreter,
    Embedded,
    /// Interpreter required but not installed; every request yields nothing
    Unavailable,
}

/// Top-level public symbol names for Python sources
///
/// The backend is resolved on first use and kept for the lifetime of the
/// service.
pub struct PythonSymbolService {
    config: ParserConfig,
    interpreter: InterpreterBackend,
    resolved: OnceLock<ResolvedBackend>,
}

impl PythonSymbolService {
    /// Create a service with default configuration
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a service with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        let interpreter =
            InterpreterBackend::new(config.python_interpreter.clone(), config.python_timeout);
        Self {
            config,
            interpreter,
            resolved: OnceLock::new(),
        }
    }

    /// Whether the configured interpreter answers the availability probe
    pub fn is_interpreter_available(&self) -> bool {
        self.interpreter.is_available()
    }

    /// Backend serving requests, resolving it on first call
    pub fn backend(&self) -> ResolvedBackend {
        *self.resolved.get_or_init(|| self.resolve_backend())
    }

    fn resolve_backend(&self) -> ResolvedBackend {
        let interpreter = self.interpreter.interpreter();
        match self.config.python_backend {
            PythonBackend::Embedded => ResolvedBackend::Embedded,
            PythonBackend::Interpreter if self.is_interpreter_available() => {
                ResolvedBackend::Interpreter
            }
            PythonBackend::Interpreter => {
                warn!(
                    interpreter,
                    "Python interpreter not available; Python files will report no symbols"
                );
                ResolvedBackend::Unavailable
            }
            PythonBackend::Auto if self.is_interpreter_available() => {
                info!(interpreter, "Using Python interpreter for symbol extraction");
                ResolvedBackend::Interpreter
            }
            PythonBackend::Auto => {
                warn!(
                    interpreter,
                    "Python interpreter not available; using embedded grammar"
                );
                ResolvedBackend::Embedded
            }
        }
    }

    /// Public top-level names, surfacing every failure
    #[instrument(skip(self, source), fields(file = %file_path.display()))]
    pub fn try_extract_symbols(&self, source: &str, file_path: &Path) -> ParserResult<Vec<String>> {
        if source.len() > self.config.max_file_size {
            return Err(ParserError::FileTooLarge(file_path.to_path_buf(), source.len()));
        }

        let names = match self.backend() {
            ResolvedBackend::Interpreter => self.interpreter.extract(source, file_path)?,
            ResolvedBackend::Embedded => embedded::extract(source, file_path)?,
            ResolvedBackend::Unavailable => {
                debug!("Skipping file, no Python backend");
                Vec::new()
            }
        };
        Ok(public_names(names))
    }

    /// Public top-level names; any failure is logged and yields nothing
    pub fn extract_symbols(&self, source: &str, file_path: &Path) -> Vec<String> {
        match self.try_extract_symbols(source, file_path) {
            Ok(names) => names,
            Err(e) => {
                warn!(file = %file_path.display(), error = %e, "Python symbol extraction failed");
                Vec::new()
            }
        }
    }
}

impl Default for PythonSymbolService {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop private names and repeats, keeping first-seen order
fn public_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|n| !n.is_empty() && !n.starts_with(PRIVATE_PREFIX))
        .filter(|n| seen.insert(n.clone()))
        .collect()
}

impl ExportParser for PythonSymbolService {
    fn language(&self) -> &str {
        "python"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".py"]
    }

    fn try_parse(&self, source: &str, file_path: &Path) -> ParserResult<Vec<ExportRecord>> {
        if !self.can_parse(file_path) {
            return Err(ParserError::UnsupportedExtension(file_path.to_path_buf()));
        }
        Ok(self
            .try_extract_symbols(source, file_path)?
            .into_iter()
            .map(|name| ExportRecord::new(name, SymbolKind::Unknown))
            .collect())
    }

    fn config(&self) -> &ParserConfig {
        &self.config
    }
}
