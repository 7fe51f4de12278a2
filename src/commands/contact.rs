//! Contact-form submission
//!
//! Delivery is simulated: the handler validates the message, waits the
//! fixed artificial delay, and resolves. No retry, no backoff, no
//! cancellation; concurrent submissions are prevented by the form
//! disabling its submit control, not by any queuing here.

use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use crate::models::ContactMessage;
use super::CommandError;

/// The original's simulated API round trip.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1000);

pub async fn submit_contact(message: ContactMessage) -> Result<(), CommandError> {
    if !message.is_complete() {
        return Err(CommandError::Validation(
            "姓名、Email 和訊息內容為必填".to_string(),
        ));
    }
    if !looks_like_email(&message.email) {
        return Err(CommandError::Validation("Email 格式不正確".to_string()));
    }

    sleep(SIMULATED_DELAY).await;

    info!(
        "Contact message from {} <{}>: {}",
        message.name, message.email, message.subject
    );
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
