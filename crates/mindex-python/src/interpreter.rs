//! Out-of-process symbol extraction through the Python interpreter
//!
//! The source and a short analysis script are written to uniquely named
//! scratch files, the interpreter runs the script under a deadline, and the
//! last line of its standard output is read as a JSON list of names. The
//! scratch files are removed when they go out of scope, on every path.

use mindex_parser_api::{ParserError, ParserResult};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tempfile::NamedTempFile;
use tracing::debug;

const ANALYSIS_SCRIPT: &str = include_str!("top_level_symbols.py");

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured result of a finished interpreter run
#[derive(Debug)]
pub struct ProcessOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the analysis script with a given interpreter and deadline
#[derive(Debug, Clone)]
pub struct InterpreterBackend {
    interpreter: String,
    timeout: Duration,
    scratch_dir: Option<PathBuf>,
}

impl InterpreterBackend {
    pub fn new(interpreter: impl Into<String>, timeout: Duration) -> Self {
        Self {
            interpreter: interpreter.into(),
            timeout,
            scratch_dir: None,
        }
    }

    /// Place scratch files in `dir` instead of the system temp directory
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Probe the interpreter with `--version`
    pub fn is_available(&self) -> bool {
        let status = Command::new(&self.interpreter)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        matches!(status, Ok(status) if status.success())
    }

    /// Top-level public names of `source`, as reported by the interpreter
    pub fn extract(&self, source: &str, file_path: &Path) -> ParserResult<Vec<String>> {
        let io_err = |e| ParserError::IoError(file_path.to_path_buf(), e);

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let dir = self.scratch_dir.clone().unwrap_or_else(std::env::temp_dir);
        let source_file =
            scratch_file(&dir, &format!("mindex_source_{stamp}_"), source).map_err(io_err)?;
        let script_file = scratch_file(&dir, &format!("mindex_parser_{stamp}_"), ANALYSIS_SCRIPT)
            .map_err(io_err)?;

        let mut command = Command::new(&self.interpreter);
        command.arg(script_file.path()).arg(source_file.path());
        debug!(interpreter = %self.interpreter, "Running analysis script");

        let output = run_with_timeout(&mut command, self.timeout, file_path)?;
        if !output.status.success() {
            return Err(ParserError::ExternalProcess(
                file_path.to_path_buf(),
                format!("{} ({})", output.status, output.stderr.trim()),
            ));
        }

        parse_output(&output.stdout, file_path)
    }
}

fn scratch_file(dir: &Path, prefix: &str, contents: &str) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".py")
        .tempfile_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Run `command` to completion, killing it once `timeout` has elapsed
pub fn run_with_timeout(
    command: &mut Command,
    timeout: Duration,
    file_path: &Path,
) -> ParserResult<ProcessOutput> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ParserError::ExternalProcess(file_path.to_path_buf(), e.to_string()))?;

    // Drain both pipes so a chatty child cannot block on a full buffer
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match wait_until(&mut child, Instant::now() + timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ParserError::Timeout(file_path.to_path_buf(), timeout));
        }
        Err(e) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ParserError::ExternalProcess(
                file_path.to_path_buf(),
                e.to_string(),
            ));
        }
    };

    Ok(ProcessOutput {
        status,
        stdout: stdout.join().unwrap_or_default(),
        stderr: stderr.join().unwrap_or_default(),
    })
}

fn wait_until(child: &mut Child, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R>(pipe: Option<R>) -> thread::JoinHandle<String>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

/// Decode the last non-empty stdout line as a JSON array of strings
pub fn parse_output(stdout: &str, file_path: &Path) -> ParserResult<Vec<String>> {
    let line = stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| {
            ParserError::MalformedOutput(file_path.to_path_buf(), "empty output".to_string())
        })?;

    serde_json::from_str(line)
        .map_err(|e| ParserError::MalformedOutput(file_path.to_path_buf(), e.to_string()))
}
