use serde::{Deserialize, Serialize};

/// Visual theme variables applied by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub background_color: String,
    pub button_color: String,
    pub font: String,
    pub layout_template: LayoutTemplate,
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutTemplate {
    Grid,
    List,
}

impl Default for LayoutTemplate {
    fn default() -> Self {
        LayoutTemplate::Grid
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    pub primary_color: Option<String>,
    pub background_color: Option<String>,
    pub button_color: Option<String>,
    pub font: Option<String>,
    pub layout_template: Option<LayoutTemplate>,
    pub language: Option<String>,
}

impl Theme {
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(primary_color) = patch.primary_color {
            self.primary_color = primary_color;
        }
        if let Some(background_color) = patch.background_color {
            self.background_color = background_color;
        }
        if let Some(button_color) = patch.button_color {
            self.button_color = button_color;
        }
        if let Some(font) = patch.font {
            self.font = font;
        }
        if let Some(layout_template) = patch.layout_template {
            self.layout_template = layout_template;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
    }
}
