//! JSON snapshot of the live site state
//!
//! The snapshot is a faithful serialization of the collections, not a
//! placeholder: what is exported can be imported back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Profile, Project, Theme};

pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub version: u32,
    #[serde(default = "Utc::now")]
    pub exported_at: DateTime<Utc>,
    pub projects: Vec<Project>,
    pub categories: Vec<Category>,
    pub profile: Profile,
    pub theme: Theme,
}

impl BackupFile {
    pub fn new(
        projects: Vec<Project>,
        categories: Vec<Category>,
        profile: Profile,
        theme: Theme,
    ) -> Self {
        Self {
            version: BACKUP_VERSION,
            exported_at: Utc::now(),
            projects,
            categories,
            profile,
            theme,
        }
    }
}

/// Serialize a snapshot for download.
pub fn render_backup(backup: &BackupFile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(backup)
}

/// Parse a snapshot. Unsupported versions are rejected the same way a
/// malformed document is; callers surface one generic format error.
pub fn parse_backup(content: &str) -> Result<BackupFile, BackupFormatError> {
    let backup: BackupFile = serde_json::from_str(content).map_err(|_| BackupFormatError)?;
    if backup.version != BACKUP_VERSION {
        return Err(BackupFormatError);
    }
    Ok(backup)
}

/// The import path reports all failures as one generic format error,
/// with no partial application.
#[derive(Debug, PartialEq, Eq)]
pub struct BackupFormatError;

impl std::fmt::Display for BackupFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "檔案格式錯誤")
    }
}

impl std::error::Error for BackupFormatError {}
