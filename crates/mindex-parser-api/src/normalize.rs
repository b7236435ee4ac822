//! Bridging rich export records to the bare-name shape

use crate::record::ExportRecord;
use std::collections::HashSet;

/// Deduplicated names in first-seen order; empty names are dropped.
pub fn extract_names(records: &[ExportRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| !r.name.is_empty())
        .filter(|r| seen.insert(r.name.as_str()))
        .map(|r| r.name.clone())
        .collect()
}

/// Collapse records sharing a name, keeping the first one seen.
pub fn dedup_records(records: Vec<ExportRecord>) -> Vec<ExportRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| !r.name.is_empty() && seen.insert(r.name.clone()))
        .collect()
}

/// Set-union of several parsers' output for one file.
///
/// Batches are consumed in order, so when two parsers report the same name
/// the earlier batch's record wins, whatever its kind.
pub fn merge_records<I>(batches: I) -> Vec<ExportRecord>
where
    I: IntoIterator<Item = Vec<ExportRecord>>,
{
    dedup_records(batches.into_iter().flatten().collect())
}
