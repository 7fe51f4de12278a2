use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A displayed portfolio entry with metadata, tags, and engagement counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    /// Sanitized HTML fragment; raw markup is cleaned on the way in.
    pub description: String,
    /// Denormalized copy of the category name at assignment time.
    pub category: String,
    pub category_id: i64,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub views: u32,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDate,
}

/// Fields supplied when creating a project. The id, counters, and
/// creation date are assigned by the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: String,
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

/// Partial update for a project. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub category_id: Option<i64>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default, with = "double_option")]
    pub github_url: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub live_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

// Distinguishes "field absent" from "field set to null" when a patch
// arrives as JSON.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(de).map(Some)
    }
}

impl Project {
    /// Shallow-merge a patch into this record.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(github_url) = patch.github_url {
            self.github_url = github_url;
        }
        if let Some(live_url) = patch.live_url {
            self.live_url = live_url;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}
