use serde::Serialize;
use tracing::{debug, info};

use crate::error::ActivityError;
use crate::services::registry::{Activities, ActivityRegistry};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

pub fn list_activities(registry: &ActivityRegistry) -> Activities {
    registry.snapshot()
}

pub fn signup_for_activity(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ActivityError> {
    if let Err(e) = registry.signup(activity_name, email) {
        debug!(activity = %activity_name, email = %email, reason = %e, "signup rejected");
        return Err(e);
    }

    info!(activity = %activity_name, email = %email, "participant signed up");
    Ok(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub fn unregister_from_activity(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ActivityError> {
    let removed = match registry.unregister(activity_name, email) {
        Ok(removed) => removed,
        Err(e) => {
            debug!(activity = %activity_name, email = %email, reason = %e, "unregister rejected");
            return Err(e);
        }
    };

    info!(activity = %activity_name, email = %removed, "participant unregistered");
    Ok(MessageResponse {
        message: format!("Unregistered {} from {}", removed, activity_name),
    })
}
