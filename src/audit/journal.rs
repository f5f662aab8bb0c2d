//! In-memory audit journal
//!
//! Entries are appended in order and mirrored to the tracing subscriber as
//! single-line JSON at debug level.

use super::entry::AuditEntry;

/// Append-only, in-memory journal of audit entries
#[derive(Debug, Default)]
pub struct AuditJournal {
    entries: Vec<AuditEntry>,
}

impl AuditJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn record(&mut self, entry: AuditEntry) {
        match serde_json::to_string(&entry) {
            Ok(json) => tracing::debug!(target: "registrar::audit", "{}", json),
            Err(e) => {
                tracing::warn!(target: "registrar::audit", error = %e, "unserializable audit entry")
            }
        }
        self.entries.push(entry);
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
