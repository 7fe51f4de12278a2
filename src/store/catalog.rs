//! The catalog of project and category records
//!
//! Both collections live entirely in memory; the running state is the
//! only copy. All mutations run synchronously inside a single logical
//! thread of control, so the catalog carries no interior locking.

use chrono::Utc;

use crate::models::{
    Category, CategoryDraft, CategoryPatch, CategorySummary, Project, ProjectDraft, ProjectPatch,
};
use crate::utils::sanitize::clean_html;
use super::StoreError;

/// Ordered collections of projects and categories, plus the id
/// generator both share.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    categories: Vec<Category>,
    last_id: i64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(projects: Vec<Project>, categories: Vec<Category>) -> Self {
        let last_id = projects
            .iter()
            .map(|p| p.id)
            .chain(categories.iter().map(|c| c.id))
            .max()
            .unwrap_or(0);
        Self {
            projects,
            categories,
            last_id,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn project(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Ids are wall-clock milliseconds, bumped past the previous id when
    /// two allocations land in the same millisecond.
    fn allocate_id(&mut self) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        id
    }

    /// Create a project from a draft: fresh id, zeroed counters, today's
    /// date, description cleaned. The new record goes to the front of
    /// the collection.
    pub fn add_project(&mut self, draft: ProjectDraft) -> &Project {
        let project = Project {
            id: self.allocate_id(),
            title: draft.title,
            description: clean_html(&draft.description),
            category: draft.category,
            category_id: draft.category_id,
            image: draft.image,
            tags: draft.tags,
            likes: 0,
            views: 0,
            github_url: draft.github_url,
            live_url: draft.live_url,
            is_active: draft.is_active,
            created_at: Utc::now().date_naive(),
        };
        self.projects.insert(0, project);
        &self.projects[0]
    }

    /// Shallow-merge a patch into the matching project. Nothing is
    /// mutated when the id is absent.
    pub fn update_project(&mut self, id: i64, mut patch: ProjectPatch) -> Result<&Project, StoreError> {
        if let Some(description) = patch.description.take() {
            patch.description = Some(clean_html(&description));
        }
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProjectNotFound(id))?;
        project.apply(patch);
        Ok(project)
    }

    pub fn delete_project(&mut self, id: i64) -> Result<(), StoreError> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Err(StoreError::ProjectNotFound(id));
        }
        Ok(())
    }

    /// Increment the project's like counter by one. Unbounded; repeat
    /// likes from the same viewer are a presentation concern.
    pub fn like_project(&mut self, id: i64) -> Result<u32, StoreError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProjectNotFound(id))?;
        project.likes += 1;
        Ok(project.likes)
    }

    /// Increment the project's view counter by one.
    pub fn record_view(&mut self, id: i64) -> Result<u32, StoreError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProjectNotFound(id))?;
        project.views += 1;
        Ok(project.views)
    }

    pub fn add_category(&mut self, draft: CategoryDraft) -> &Category {
        let category = Category {
            id: self.allocate_id(),
            name: draft.name,
            description: draft.description,
        };
        self.categories.push(category);
        &self.categories[self.categories.len() - 1]
    }

    pub fn update_category(&mut self, id: i64, patch: CategoryPatch) -> Result<&Category, StoreError> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::CategoryNotFound(id))?;
        category.apply(patch);
        Ok(category)
    }

    /// Remove a category. Projects referencing it keep their
    /// `category_id` and denormalized name: orphaning is the documented
    /// policy, not a cascade.
    pub fn delete_category(&mut self, id: i64) -> Result<(), StoreError> {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return Err(StoreError::CategoryNotFound(id));
        }
        Ok(())
    }

    /// Live count of projects referencing a category, active or not.
    pub fn project_count(&self, category_id: i64) -> usize {
        self.projects
            .iter()
            .filter(|p| p.category_id == category_id)
            .count()
    }

    /// All categories with their live project counts.
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|c| c.with_count(self.project_count(c.id)))
            .collect()
    }

    /// Replace both collections wholesale (backup restore).
    ///
    /// Descriptions go through the sanitizer again: the snapshot file
    /// may have been edited outside the application.
    pub fn restore(&mut self, mut projects: Vec<Project>, categories: Vec<Category>) {
        for project in &mut projects {
            project.description = clean_html(&project.description);
        }
        *self = Catalog::with_data(projects, categories);
    }
}
