//! Depth-first project scan producing the nested export tree

use mindex_parser_api::{extract_names, ExportRecord, ScanMetrics};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::config::{OutputMode, ScanConfig};
use crate::error::{ScanError, ScanResult};
use crate::language::{ParserSet, SourceLanguage};
use crate::tree::{DirectoryNode, FileExports};

/// Result tree of a scan together with its statistics
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub tree: DirectoryNode,
    pub metrics: ScanMetrics,
}

/// Walks a project directory and reports the exports of every file
pub struct ProjectScanner {
    config: ScanConfig,
    parsers: ParserSet,
}

/// Per-scan mutable state
#[derive(Default)]
struct Walk {
    metrics: ScanMetrics,
    /// Canonical paths of the directories currently being descended
    ancestors: HashSet<PathBuf>,
}

impl ProjectScanner {
    /// Create a scanner with default configuration
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    /// Create a scanner with custom configuration
    pub fn with_config(config: ScanConfig) -> Self {
        let parsers = ParserSet::new(&config.parser);
        Self { config, parsers }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `root` recursively.
    ///
    /// # Errors
    /// Fails only when the configuration is invalid or the root itself is
    /// missing, not a directory, or unreadable. Failures below the root are
    /// logged and reported as empty entries.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn scan(&self, root: &Path) -> ScanResult<ScanReport> {
        self.config.validate().map_err(ScanError::InvalidConfig)?;
        validate_root(root)?;

        let start = Instant::now();
        let mut walk = Walk::default();
        let tree = self.scan_dir(root, &mut walk);

        let mut metrics = walk.metrics;
        metrics.total_scan_time = start.elapsed();

        info!(
            files = metrics.files_seen,
            parsed = metrics.files_parsed,
            failures = metrics.parse_failures + metrics.read_failures,
            records = metrics.total_records,
            elapsed_ms = metrics.total_scan_time.as_millis() as u64,
            "Scan complete"
        );

        Ok(ScanReport { tree, metrics })
    }

    fn scan_dir(&self, dir: &Path, walk: &mut Walk) -> DirectoryNode {
        let mut node = DirectoryNode::new();

        let canonical = fs::canonicalize(dir).ok();
        if let Some(canonical) = &canonical {
            if !walk.ancestors.insert(canonical.clone()) {
                warn!(path = %dir.display(), "Directory cycle detected, not descending");
                return node;
            }
        }

        walk.metrics.directories_scanned += 1;
        match fs::read_dir(dir) {
            Ok(entries) => {
                for entry in entries {
                    match entry {
                        Ok(entry) => self.scan_entry(&entry.path(), entry.file_name(), &mut node, walk),
                        Err(e) => {
                            warn!(path = %dir.display(), error = %e, "Failed to read directory entry")
                        }
                    }
                }
            }
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "Failed to read directory");
                walk.metrics.directory_failures += 1;
            }
        }

        if let Some(canonical) = &canonical {
            walk.ancestors.remove(canonical);
        }
        node
    }

    fn scan_entry(
        &self,
        path: &Path,
        file_name: std::ffi::OsString,
        node: &mut DirectoryNode,
        walk: &mut Walk,
    ) {
        let name = file_name.to_string_lossy().into_owned();

        // Follows symlinks, so a link to a directory is scanned as one
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to stat entry");
                walk.metrics.files_seen += 1;
                walk.metrics.read_failures += 1;
                node.insert_file(name, self.shape(Vec::new()));
                return;
            }
        };

        if metadata.is_dir() {
            if self.config.should_skip_dir(&name) {
                debug!(path = %path.display(), "Skipping directory");
                walk.metrics.directories_skipped += 1;
                return;
            }
            let child = self.scan_dir(path, walk);
            node.insert_directory(&name, child);
        } else {
            let exports = self.scan_file(path, metadata.len(), walk);
            node.insert_file(name, exports);
        }
    }

    fn scan_file(&self, path: &Path, size: u64, walk: &mut Walk) -> FileExports {
        walk.metrics.files_seen += 1;

        let language = SourceLanguage::from_path(path);
        if !language.is_supported() {
            return self.shape(Vec::new());
        }

        if size > self.config.parser.max_file_size as u64 {
            warn!(
                path = %path.display(),
                size,
                max = self.config.parser.max_file_size,
                "File exceeds maximum size, skipping"
            );
            return self.shape(Vec::new());
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read file");
                walk.metrics.read_failures += 1;
                return self.shape(Vec::new());
            }
        };
        let source = String::from_utf8_lossy(&bytes);

        debug!(path = %path.display(), language = language.as_str(), "Parsing file");
        walk.metrics.files_parsed += 1;
        let extraction = self.parsers.extract(language, &source, path);
        if extraction.failed {
            walk.metrics.parse_failures += 1;
        }

        let exports = self.shape(extraction.records);
        walk.metrics.total_records += exports.len();
        exports
    }

    fn shape(&self, records: Vec<ExportRecord>) -> FileExports {
        match self.config.mode {
            OutputMode::Legacy => FileExports::Names(extract_names(&records)),
            OutputMode::Enhanced => FileExports::Records(records),
        }
    }
}

impl Default for ProjectScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_root(root: &Path) -> ScanResult<()> {
    let metadata = fs::metadata(root).map_err(|source| ScanError::RootNotFound {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    fs::read_dir(root).map_err(|source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Scan `root` in legacy mode with the given skip-list and default parser
/// settings, returning only the tree
pub fn scan_directory(root: &Path, skip_dirs: &[&str]) -> ScanResult<DirectoryNode> {
    let config = ScanConfig::default().with_skip_dirs(skip_dirs.iter().copied());
    ProjectScanner::with_config(config)
        .scan(root)
        .map(|report| report.tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_root(dir.path()).is_ok());

        let missing = dir.path().join("missing");
        assert!(matches!(
            validate_root(&missing),
            Err(ScanError::RootNotFound { .. })
        ));

        let file = dir.path().join("a.js");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            validate_root(&file),
            Err(ScanError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = ProjectScanner::with_config(ScanConfig::default().with_skip_dirs([""]));
        assert!(matches!(
            scanner.scan(dir.path()),
            Err(ScanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_shape_follows_mode() {
        let records = vec![
            ExportRecord::new("a", mindex_parser_api::SymbolKind::Function),
            ExportRecord::new("b", mindex_parser_api::SymbolKind::Class),
        ];

        let legacy = ProjectScanner::new().shape(records.clone());
        assert_eq!(legacy, FileExports::Names(vec!["a".to_string(), "b".to_string()]));

        let enhanced = ProjectScanner::with_config(
            ScanConfig::default().with_mode(OutputMode::Enhanced),
        )
        .shape(records.clone());
        assert_eq!(enhanced, FileExports::Records(records));
    }
}
