use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How Python sources are turned into symbol lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PythonBackend {
    /// Use the interpreter when the availability probe succeeds, otherwise
    /// the embedded grammar
    #[default]
    Auto,
    /// Always shell out to the interpreter; unavailable means empty results
    Interpreter,
    /// Always use the embedded tree-sitter grammar
    Embedded,
}

/// Configuration for parser behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Maximum file size to parse (in bytes)
    /// Files larger than this are reported with no exports
    pub max_file_size: usize,

    /// Backend used for `.py` files
    pub python_backend: PythonBackend,

    /// Interpreter executable for the Python backend
    pub python_interpreter: String,

    /// Upper bound on a single interpreter run
    #[serde(with = "duration_millis", rename = "python_timeout_ms")]
    pub python_timeout: Duration,
}

// Helper module for serializing Duration
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10 MB
            python_backend: PythonBackend::Auto,
            python_interpreter: "python3".to_string(),
            python_timeout: Duration::from_secs(5),
        }
    }
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_size == 0 {
            return Err("max_file_size must be greater than 0".to_string());
        }

        if self.python_interpreter.trim().is_empty() {
            return Err("python_interpreter cannot be empty".to_string());
        }

        if self.python_timeout.is_zero() {
            return Err("python_timeout must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Set maximum file size
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    /// Select the Python backend
    pub fn with_python_backend(mut self, backend: PythonBackend) -> Self {
        self.python_backend = backend;
        self
    }

    /// Set the interpreter executable
    pub fn with_python_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.python_interpreter = interpreter.into();
        self
    }

    /// Set the interpreter timeout
    pub fn with_python_timeout(mut self, timeout: Duration) -> Self {
        self.python_timeout = timeout;
        self
    }
}
