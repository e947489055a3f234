use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Rejections of a registry operation. Each one maps to exactly one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::ActivityNotFound | ActivityError::NotRegistered => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp | ActivityError::ActivityFull => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Problems with the registry contents supplied at startup.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("activity {0:?} must allow at least one participant")]
    ZeroCapacity(String),
    #[error("activity {name:?} has {count} participants but room for {max}")]
    OverCapacity { name: String, count: usize, max: u32 },
    #[error("activity {name:?} lists {email:?} more than once")]
    DuplicateParticipant { name: String, email: String },
    #[error("failed to read seed file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(ActivityError::ActivityNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ActivityError::NotRegistered.status(), StatusCode::NOT_FOUND);
        assert_eq!(ActivityError::AlreadySignedUp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ActivityError::ActivityFull.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn messages_carry_the_expected_phrases() {
        assert!(ActivityError::ActivityNotFound.to_string().contains("not found"));
        assert!(ActivityError::AlreadySignedUp
            .to_string()
            .contains("already signed up"));
        assert!(ActivityError::ActivityFull.to_string().contains("full"));
        assert!(ActivityError::NotRegistered
            .to_string()
            .contains("not registered"));
    }
}
