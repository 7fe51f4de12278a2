//! Profile, theme, and site-settings commands

use tracing::info;

use crate::models::{Profile, ProfilePatch, SiteSettings, SiteSettingsPatch, Theme, ThemePatch};
use crate::AppState;
use super::CommandError;

pub fn update_profile(state: &mut AppState, patch: ProfilePatch) -> Result<Profile, CommandError> {
    state.require_admin()?;
    state.profile.apply(patch);
    info!("Updated profile: {}", state.profile.name);
    Ok(state.profile.clone())
}

pub fn update_theme(state: &mut AppState, patch: ThemePatch) -> Result<Theme, CommandError> {
    state.require_admin()?;
    state.theme.apply(patch);
    info!("Updated theme");
    Ok(state.theme.clone())
}

pub fn update_settings(
    state: &mut AppState,
    patch: SiteSettingsPatch,
) -> Result<SiteSettings, CommandError> {
    state.require_admin()?;
    state.settings.apply(patch);
    info!("Updated site settings");
    Ok(state.settings.clone())
}
