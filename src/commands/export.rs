//! Resume/backup export and backup import commands

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::export::{parse_backup, render_backup, render_resume, BackupFile};
use crate::AppState;
use super::CommandError;

/// Write the generated HTML resume to `path`.
pub fn download_resume(state: &AppState, path: &Path) -> Result<(), CommandError> {
    state.require_admin()?;

    let html = render_resume(&state.profile);
    fs::write(path, html)?;

    info!("Resume written to {:?}", path);
    Ok(())
}

/// Write a JSON snapshot of the live collections to `path`.
pub fn export_backup(state: &AppState, path: &Path) -> Result<(), CommandError> {
    state.require_admin()?;

    let backup = BackupFile::new(
        state.catalog.projects().to_vec(),
        state.catalog.categories().to_vec(),
        state.profile.clone(),
        state.theme.clone(),
    );
    let json = render_backup(&backup)?;
    fs::write(path, json)?;

    info!(
        "Backup written to {:?} ({} projects, {} categories)",
        path,
        backup.projects.len(),
        backup.categories.len()
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ImportResult {
    pub projects: usize,
    pub categories: usize,
}

/// Read a snapshot file and replace the live state with it. A document
/// that does not parse leaves the state untouched.
pub fn import_backup(state: &mut AppState, path: &Path) -> Result<ImportResult, CommandError> {
    state.require_admin()?;

    let content = fs::read_to_string(path)?;
    let backup = parse_backup(&content)?;

    let result = ImportResult {
        projects: backup.projects.len(),
        categories: backup.categories.len(),
    };
    state.catalog.restore(backup.projects, backup.categories);
    state.profile = backup.profile;
    state.theme = backup.theme;

    info!(
        "Imported backup from {:?}: {} projects, {} categories",
        path, result.projects, result.categories
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{auth, projects};
    use crate::models::ProjectPatch;
    use tempfile::tempdir;

    fn admin_state() -> AppState {
        let mut state = AppState::seeded("letmein");
        auth::login(&mut state, "letmein").unwrap();
        state
    }

    #[test]
    fn resume_file_is_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.html");
        let state = admin_state();

        download_resume(&state, &path).unwrap();
        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains(&state.profile.name));
    }

    #[test]
    fn backup_round_trips_through_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio-backup.json");
        let mut state = admin_state();

        // Mutate, export, mutate again, then restore the export.
        projects::like_project(&mut state, 3).unwrap();
        export_backup(&state, &path).unwrap();

        projects::update_project(
            &mut state,
            1,
            ProjectPatch {
                title: Some("changed after backup".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let result = import_backup(&mut state, &path).unwrap();
        assert_eq!(result.projects, 3);
        assert_eq!(result.categories, 4);
        assert_eq!(state.catalog.project(1).unwrap().title, "E-commerce Platform");
        assert_eq!(state.catalog.project(3).unwrap().likes, 29);
    }

    #[test]
    fn hand_edited_backup_cannot_smuggle_markup_into_the_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio-backup.json");
        let mut state = admin_state();
        export_backup(&state, &path).unwrap();

        // Edit the snapshot outside the application, the way a user
        // with a text editor would.
        let mut doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        doc["projects"][0]["description"] =
            serde_json::Value::String("<script>alert(1)</script>pwn".to_string());
        fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

        import_backup(&mut state, &path).unwrap();

        let imported = &state.catalog.projects()[0];
        assert!(!imported.description.contains("<script>"));
        assert_eq!(imported.description, "pwn");
    }

    #[test]
    fn malformed_backup_leaves_state_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let mut state = admin_state();
        let before = state.catalog.projects().len();

        let err = import_backup(&mut state, &path).unwrap_err();
        match err {
            CommandError::Format(_) => {}
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(state.catalog.projects().len(), before);
    }

    #[test]
    fn exports_require_a_session() {
        let dir = tempdir().unwrap();
        let state = AppState::seeded("letmein");
        assert!(download_resume(&state, &dir.path().join("r.html")).is_err());
        assert!(export_backup(&state, &dir.path().join("b.json")).is_err());
    }
}
