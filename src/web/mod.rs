pub mod routes;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::services::registry::ActivityRegistry;
use routes::{activities, health};

pub const INDEX_PATH: &str = "/static/index.html";

/// Builds the full application around an owned registry handle.
pub fn router(registry: ActivityRegistry, static_dir: impl AsRef<Path>) -> Router {
    let api = Router::new()
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        // Participant lists change on every signup, never cache them.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .with_state(registry);

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/health", get(health::health_handler))
        .merge(api)
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
