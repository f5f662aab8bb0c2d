//! Audit journal for the registrar
//!
//! Records every successful mutation (course added, student registered,
//! enrollment, payment) with before/after snapshots. The journal lives in
//! memory for the lifetime of the process; nothing is written to disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use registrar::audit::{AuditEntry, AuditJournal, EntityType};
//!
//! let mut journal = AuditJournal::new();
//! journal.record(AuditEntry::create(
//!     EntityType::Course,
//!     "CS101",
//!     Some("Programming".to_string()),
//!     &course,
//! ));
//! ```

mod diff;
mod entry;
mod journal;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use journal::AuditJournal;
