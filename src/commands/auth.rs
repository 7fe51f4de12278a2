//! Admin login and logout

use tracing::{info, warn};

use crate::security::{AdminSession, AuthError};
use crate::AppState;
use super::CommandError;

/// Verify the admin password and install a session on the state.
/// Failure is terminal to the attempt: no lockout, no attempt tracking.
pub fn login(state: &mut AppState, password: &str) -> Result<AdminSession, CommandError> {
    if !state.admin_password.verify(password) {
        warn!("Admin login rejected");
        return Err(AuthError::InvalidCredentials.into());
    }

    let session = AdminSession::new();
    info!("Admin login, session expires at {}", session.expires_at);
    state.session = Some(session.clone());
    Ok(session)
}

pub fn logout(state: &mut AppState) {
    if state.session.take().is_some() {
        info!("Admin logout");
    }
}
