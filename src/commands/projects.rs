//! Project management and gallery commands

use serde::Deserialize;
use tracing::info;

use crate::models::{Project, ProjectDraft, ProjectPatch};
use crate::store::gallery::{self, GalleryQuery, Overview};
use crate::AppState;
use super::CommandError;

/// The gallery listing for a set of user-chosen criteria.
pub fn list_gallery<'a>(state: &'a AppState, query: &GalleryQuery) -> Vec<&'a Project> {
    gallery::visible_projects(state.catalog.projects(), query)
}

/// Unique tags across all projects, for the tag selector.
pub fn list_tags(state: &AppState) -> Vec<String> {
    gallery::all_tags(state.catalog.projects())
}

/// Totals for the admin overview tab.
pub fn get_overview(state: &AppState) -> Overview {
    gallery::overview(state.catalog.projects())
}

pub fn get_project(state: &AppState, id: i64) -> Option<&Project> {
    state.catalog.project(id)
}

/// Fetch a project for its detail page, counting the view.
pub fn view_project(state: &mut AppState, id: i64) -> Result<Project, CommandError> {
    state.catalog.record_view(id)?;
    let project = state
        .catalog
        .project(id)
        .ok_or(crate::store::StoreError::ProjectNotFound(id))?;
    Ok(project.clone())
}

/// Register one like. Unbounded and undeduplicated; the card UI keeps
/// its own per-session "already liked" flag.
pub fn like_project(state: &mut AppState, id: i64) -> Result<u32, CommandError> {
    let likes = state.catalog.like_project(id)?;
    Ok(likes)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub category_id: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Create a project. The denormalized category name is resolved from
/// the referenced category at creation time; an unknown category id is
/// accepted and yields an empty name, matching the admin form.
pub fn create_project(
    state: &mut AppState,
    request: CreateProjectRequest,
) -> Result<Project, CommandError> {
    state.require_admin()?;

    let category = category_name(state, request.category_id);
    let draft = ProjectDraft {
        title: request.title,
        description: request.description,
        category,
        category_id: request.category_id,
        image: request.image,
        tags: request.tags,
        github_url: request.github_url,
        live_url: request.live_url,
        is_active: request.is_active,
    };

    let project = state.catalog.add_project(draft).clone();
    info!("Created project: {} ({})", project.title, project.id);
    Ok(project)
}

/// Merge a partial update into a project. When the category reference
/// changes, the denormalized name is re-resolved alongside it.
pub fn update_project(
    state: &mut AppState,
    id: i64,
    mut patch: ProjectPatch,
) -> Result<Project, CommandError> {
    state.require_admin()?;

    if let Some(category_id) = patch.category_id {
        patch.category = Some(category_name(state, category_id));
    }

    let project = state.catalog.update_project(id, patch)?.clone();
    info!("Updated project: {}", project.title);
    Ok(project)
}

pub fn delete_project(state: &mut AppState, id: i64) -> Result<(), CommandError> {
    state.require_admin()?;
    state.catalog.delete_project(id)?;
    info!("Deleted project: {}", id);
    Ok(())
}

fn category_name(state: &AppState, category_id: i64) -> String {
    state
        .catalog
        .category(category_id)
        .map(|c| c.name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth;
    use crate::security::AuthError;
    use crate::store::SortKey;

    fn admin_state() -> AppState {
        let mut state = AppState::seeded("letmein");
        auth::login(&mut state, "letmein").unwrap();
        state
    }

    fn request(title: &str, category_id: i64) -> CreateProjectRequest {
        CreateProjectRequest {
            title: title.to_string(),
            description: "desc".to_string(),
            category_id,
            image: String::new(),
            tags: vec![],
            github_url: None,
            live_url: None,
            is_active: true,
        }
    }

    #[test]
    fn create_project_requires_a_session() {
        let mut state = AppState::seeded("letmein");
        let err = create_project(&mut state, request("X", 1)).unwrap_err();
        match err {
            CommandError::Auth(AuthError::NotLoggedIn) => {}
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn create_project_resolves_the_category_name() {
        let mut state = admin_state();
        let project = create_project(&mut state, request("X", 1)).unwrap();
        assert_eq!(project.category, "Web Development");
        assert_eq!(project.likes, 0);
        assert_eq!(project.views, 0);

        // First element of the collection is the new record.
        assert_eq!(state.catalog.projects()[0].id, project.id);
    }

    #[test]
    fn create_project_with_unknown_category_gets_an_empty_name() {
        let mut state = admin_state();
        let project = create_project(&mut state, request("X", 999)).unwrap();
        assert_eq!(project.category, "");
        assert_eq!(project.category_id, 999);
    }

    #[test]
    fn update_project_recategorization_refreshes_the_name_copy() {
        let mut state = admin_state();
        let id = state.catalog.projects()[0].id;
        let patch = ProjectPatch {
            category_id: Some(4),
            ..Default::default()
        };
        let updated = update_project(&mut state, id, patch).unwrap();
        assert_eq!(updated.category_id, 4);
        assert_eq!(updated.category, "DevOps");
    }

    #[test]
    fn like_project_is_public_and_unbounded() {
        let mut state = AppState::seeded("letmein");
        let id = state.catalog.projects()[2].id;
        let before = state.catalog.project(id).unwrap().likes;

        // No session required; repeat likes keep counting.
        assert_eq!(like_project(&mut state, id).unwrap(), before + 1);
        assert_eq!(like_project(&mut state, id).unwrap(), before + 2);
    }

    #[test]
    fn view_project_counts_the_view() {
        let mut state = AppState::seeded("letmein");
        let id = state.catalog.projects()[0].id;
        let before = state.catalog.project(id).unwrap().views;
        let project = view_project(&mut state, id).unwrap();
        assert_eq!(project.views, before + 1);
    }

    #[test]
    fn tags_and_overview_read_the_live_collection() {
        let mut state = admin_state();
        let tags = list_tags(&state);
        assert!(tags.contains(&"React".to_string()));
        assert!(tags.contains(&"Stripe".to_string()));

        let before = get_overview(&state);
        let id = state.catalog.projects()[0].id;
        like_project(&mut state, id).unwrap();
        let after = get_overview(&state);
        assert_eq!(after.total_likes, before.total_likes + 1);
        assert_eq!(after.total_projects, before.total_projects);
    }

    #[test]
    fn get_project_finds_by_id() {
        let state = AppState::seeded("letmein");
        assert!(get_project(&state, 1).is_some());
        assert!(get_project(&state, 999_999).is_none());
    }

    #[test]
    fn gallery_listing_reflects_mutations() {
        let mut state = admin_state();
        let query = GalleryQuery {
            sort: SortKey::Popular,
            ..Default::default()
        };

        let likes: Vec<u32> = list_gallery(&state, &query).iter().map(|p| p.likes).collect();
        assert_eq!(likes, vec![45, 32, 28]);

        let last = list_gallery(&state, &query).last().map(|p| p.id).unwrap();
        like_project(&mut state, last).unwrap();

        let likes: Vec<u32> = list_gallery(&state, &query).iter().map(|p| p.likes).collect();
        assert_eq!(likes, vec![45, 32, 29]);
    }
}
