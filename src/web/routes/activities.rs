use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ActivityError;
use crate::services::activities_service::{self, MessageResponse};
use crate::services::registry::{Activities, ActivityRegistry};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn list_activities_handler(State(registry): State<ActivityRegistry>) -> Json<Activities> {
    Json(activities_service::list_activities(&registry))
}

pub async fn signup_handler(
    State(registry): State<ActivityRegistry>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ActivityError> {
    activities_service::signup_for_activity(&registry, &activity_name, &query.email).map(Json)
}

pub async fn unregister_handler(
    State(registry): State<ActivityRegistry>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ActivityError> {
    activities_service::unregister_from_activity(&registry, &activity_name, &query.email).map(Json)
}
