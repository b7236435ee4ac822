use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metrics collected during a project scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScanMetrics {
    /// Files encountered, supported or not
    pub files_seen: usize,

    /// Files routed to at least one parser
    pub files_parsed: usize,

    /// Parsed files whose every parser failed
    pub parse_failures: usize,

    /// Files that could not be stat'ed or read
    pub read_failures: usize,

    /// Directories descended into (the root included)
    pub directories_scanned: usize,

    /// Directories left out by the skip-list or the hidden-name rule
    pub directories_skipped: usize,

    /// Directories whose listing failed
    pub directory_failures: usize,

    /// Export records kept after normalization
    pub total_records: usize,

    /// Wall time of the scan
    #[serde(with = "duration_serde")]
    pub total_scan_time: Duration,
}

// Helper module for serializing Duration
mod duration_serde {
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

impl ScanMetrics {
    /// Share of parsed files that produced a result (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.files_parsed == 0 {
            0.0
        } else {
            self.files_parsed.saturating_sub(self.parse_failures) as f64 / self.files_parsed as f64
        }
    }

    /// Average records per successfully parsed file
    pub fn avg_records_per_file(&self) -> f64 {
        let succeeded = self.files_parsed.saturating_sub(self.parse_failures);
        if succeeded == 0 {
            0.0
        } else {
            self.total_records as f64 / succeeded as f64
        }
    }

    /// Merge another metrics object into this one
    pub fn merge(&mut self, other: &ScanMetrics) {
        self.files_seen += other.files_seen;
        self.files_parsed += other.files_parsed;
        self.parse_failures += other.parse_failures;
        self.read_failures += other.read_failures;
        self.directories_scanned += other.directories_scanned;
        self.directories_skipped += other.directories_skipped;
        self.directory_failures += other.directory_failures;
        self.total_records += other.total_records;
        self.total_scan_time += other.total_scan_time;
    }
}
