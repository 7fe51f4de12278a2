//! folio: the state core of a single-page portfolio site
//!
//! Holds the project catalog, the profile/theme/site-settings records,
//! and the admin session; exposes command handlers that mutate them and
//! pure gallery views that read them. Everything lives in memory and is
//! seeded from hard-coded data on startup; nothing persists across
//! runs.

pub mod commands;
pub mod export;
pub mod models;
pub mod security;
pub mod store;
pub mod utils;

use chrono::Utc;

use models::{Profile, SiteSettings, Theme};
use security::{AdminSession, AuthError, PasswordHash};
use store::{seed, Catalog};

/// The whole application state, passed explicitly to command handlers.
///
/// The UI is single-threaded and event-driven: every mutation runs to
/// completion before the next event, so the state carries no locking.
pub struct AppState {
    pub catalog: Catalog,
    pub profile: Profile,
    pub theme: Theme,
    pub settings: SiteSettings,
    pub admin_password: PasswordHash,
    pub session: Option<AdminSession>,
}

impl AppState {
    /// Empty state with the given admin credential.
    pub fn new(admin_password: PasswordHash) -> Self {
        Self {
            catalog: Catalog::new(),
            profile: seed::profile(),
            theme: seed::theme(),
            settings: SiteSettings::default(),
            admin_password,
            session: None,
        }
    }

    /// State seeded with the mock catalog, hashing the admin password
    /// on the way in.
    pub fn seeded(admin_password: &str) -> Self {
        Self {
            catalog: seed::catalog(),
            profile: seed::profile(),
            theme: seed::theme(),
            settings: SiteSettings::default(),
            admin_password: PasswordHash::derive(admin_password),
            session: None,
        }
    }

    /// Gate for admin-only command handlers.
    pub fn require_admin(&self) -> Result<(), AuthError> {
        match &self.session {
            None => Err(AuthError::NotLoggedIn),
            Some(session) if !session.is_valid(Utc::now()) => Err(AuthError::SessionExpired),
            Some(_) => Ok(()),
        }
    }
}
