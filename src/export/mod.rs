//! Generated documents offered as downloads
//!
//! Two ad hoc formats: an HTML resume built from the profile, and a
//! JSON snapshot of the live collections that can be imported back.

pub mod backup;
pub mod resume;

pub use backup::{parse_backup, render_backup, BackupFile, BACKUP_VERSION};
pub use resume::render_resume;
