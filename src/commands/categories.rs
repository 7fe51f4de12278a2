//! Category management commands

use tracing::info;

use crate::models::{Category, CategoryDraft, CategoryPatch, CategorySummary};
use crate::AppState;
use super::CommandError;

/// All categories with their live project counts.
pub fn list_categories(state: &AppState) -> Vec<CategorySummary> {
    state.catalog.category_summaries()
}

pub fn create_category(
    state: &mut AppState,
    draft: CategoryDraft,
) -> Result<Category, CommandError> {
    state.require_admin()?;
    let category = state.catalog.add_category(draft).clone();
    info!("Created category: {} ({})", category.name, category.id);
    Ok(category)
}

pub fn update_category(
    state: &mut AppState,
    id: i64,
    patch: CategoryPatch,
) -> Result<Category, CommandError> {
    state.require_admin()?;
    let category = state.catalog.update_category(id, patch)?.clone();
    info!("Updated category: {}", category.name);
    Ok(category)
}

/// Remove a category. Projects referencing it are left pointing at the
/// dead id; the gallery simply stops offering the category filter.
pub fn delete_category(state: &mut AppState, id: i64) -> Result<(), CommandError> {
    state.require_admin()?;
    state.catalog.delete_category(id)?;
    info!("Deleted category: {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth;

    fn admin_state() -> AppState {
        let mut state = AppState::seeded("letmein");
        auth::login(&mut state, "letmein").unwrap();
        state
    }

    #[test]
    fn summaries_carry_live_counts() {
        let state = AppState::seeded("letmein");
        let summaries = list_categories(&state);
        let web = summaries.iter().find(|c| c.name == "Web Development").unwrap();
        assert_eq!(web.project_count, 1);
        let devops = summaries.iter().find(|c| c.name == "DevOps").unwrap();
        assert_eq!(devops.project_count, 0);
    }

    #[test]
    fn create_assigns_a_fresh_id() {
        let mut state = admin_state();
        let existing: Vec<i64> = state.catalog.categories().iter().map(|c| c.id).collect();
        let category = create_category(
            &mut state,
            CategoryDraft {
                name: "Embedded".to_string(),
                description: String::new(),
            },
        )
        .unwrap();
        assert!(!existing.contains(&category.id));
        assert_eq!(state.catalog.project_count(category.id), 0);
    }

    #[test]
    fn delete_keeps_referencing_projects() {
        let mut state = admin_state();
        delete_category(&mut state, 1).unwrap();
        let orphan = state
            .catalog
            .projects()
            .iter()
            .find(|p| p.category_id == 1)
            .expect("project still references the deleted category");
        assert_eq!(orphan.category, "Web Development");
    }
}
