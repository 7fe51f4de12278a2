use serde::{Deserialize, Serialize};

/// A named grouping that projects optionally reference.
///
/// The project count is not stored here; it is computed from the live
/// project collection at read time (see `Catalog::project_count`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Fields supplied when creating a category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update for a category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Category plus its live project count, for listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub project_count: usize,
}

impl Category {
    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    pub fn with_count(&self, project_count: usize) -> CategorySummary {
        CategorySummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            project_count,
        }
    }
}
