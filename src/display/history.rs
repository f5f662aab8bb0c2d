//! Audit history formatting

use crate::audit::AuditJournal;

/// Format the audit journal, oldest entry first
pub fn format_history(journal: &AuditJournal) -> String {
    if journal.is_empty() {
        return "No changes recorded.\n".to_string();
    }

    let mut output = format!("Audit history ({} entries):\n", journal.len());
    for entry in journal.entries() {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}
