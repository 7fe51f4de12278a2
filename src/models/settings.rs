use serde::{Deserialize, Serialize};

/// Site-wide toggles edited from the admin settings tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_title: String,
    pub language: String,
    pub maintenance_mode: bool,
    pub auto_backup: bool,
    pub enable_comments: bool,
    pub enable_analytics: bool,
    pub seo_enabled: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "作品集網站".to_string(),
            language: "zh".to_string(),
            maintenance_mode: false,
            auto_backup: true,
            enable_comments: true,
            enable_analytics: false,
            seo_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsPatch {
    pub site_title: Option<String>,
    pub language: Option<String>,
    pub maintenance_mode: Option<bool>,
    pub auto_backup: Option<bool>,
    pub enable_comments: Option<bool>,
    pub enable_analytics: Option<bool>,
    pub seo_enabled: Option<bool>,
}

impl SiteSettings {
    pub fn apply(&mut self, patch: SiteSettingsPatch) {
        if let Some(site_title) = patch.site_title {
            self.site_title = site_title;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(maintenance_mode) = patch.maintenance_mode {
            self.maintenance_mode = maintenance_mode;
        }
        if let Some(auto_backup) = patch.auto_backup {
            self.auto_backup = auto_backup;
        }
        if let Some(enable_comments) = patch.enable_comments {
            self.enable_comments = enable_comments;
        }
        if let Some(enable_analytics) = patch.enable_analytics {
            self.enable_analytics = enable_analytics;
        }
        if let Some(seo_enabled) = patch.seo_enabled {
            self.seo_enabled = seo_enabled;
        }
    }
}
