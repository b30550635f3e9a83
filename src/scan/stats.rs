//! Per-scan statistics.

use std::collections::HashSet;

/// Counters accumulated over one import run.
///
/// Creator and collection ids go through sets because the resolver hands
/// back the same row many times during a scan. On a dry run every
/// resolution fabricates a fresh id, so the resolved counts equal the
/// number of resolver calls there.
#[derive(Debug, Default)]
pub struct ScanStats {
    seen_creator_ids: HashSet<i64>,
    seen_collection_ids: HashSet<i64>,
    pub models_imported: u64,
    pub files_imported: u64,
    pub bytes_digested: u64,
    pub entries_skipped: u64,
}

impl ScanStats {
    /// Record a resolved creator row.
    pub fn record_creator(&mut self, id: i64) {
        self.seen_creator_ids.insert(id);
    }

    /// Record a resolved collection row.
    pub fn record_collection(&mut self, id: i64) {
        self.seen_collection_ids.insert(id);
    }

    /// Record an imported model directory.
    pub fn record_model(&mut self) {
        self.models_imported += 1;
    }

    /// Record an imported file and the bytes hashed for it.
    pub fn record_file(&mut self, size: u64) {
        self.files_imported += 1;
        self.bytes_digested += size;
    }

    /// Record a skipped non-directory entry.
    pub fn record_skipped(&mut self) {
        self.entries_skipped += 1;
    }

    /// Number of distinct creator rows touched by this scan.
    pub fn creators_resolved(&self) -> u64 {
        self.seen_creator_ids.len() as u64
    }

    /// Number of distinct collection rows touched by this scan.
    pub fn collections_resolved(&self) -> u64 {
        self.seen_collection_ids.len() as u64
    }
}
