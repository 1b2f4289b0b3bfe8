use axum::{
    http::{header, Method, Uri},
    routing::get,
    Router,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::handlers;
use crate::state::AppState;

pub mod health;

/// Preflight responses may be cached by browsers for a day
const CORS_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: true,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(CORS_MAX_AGE);

    // API routes
    let api_routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Organization structures
        .route("/ulb/structure", get(handlers::department::get_ulb_structure))
        .route("/mcg/wards", get(handlers::directory::get_mcg_wards))
        .route("/gmda/divisions", get(handlers::directory::get_gmda_divisions))
        // Departments
        .route("/departments", get(handlers::department::get_departments))
        .route("/departments/tree", get(handlers::department::get_department_tree))
        .route("/departments/chart", get(handlers::department::get_department_chart))
        // Search and people
        .route("/search", get(handlers::search::search_roles_personnel))
        .route("/personnel", get(handlers::directory::get_personnel))
        // Roles
        .route("/role-details/:role_id", get(handlers::role::get_role_details))
        .route("/contact-info/:role_id", get(handlers::role::get_contact_info))
        .route("/roles/:role_id/related", get(handlers::role::get_role_relations))
        // Grievance and Right to Service
        .route(
            "/grievance-categories",
            get(handlers::directory::get_grievance_categories),
        )
        .route("/rts-services", get(handlers::directory::get_rts_services));

    Router::new()
        .route("/", get(health::banner))
        .nest("/api", api_routes)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Fallback handler for 404
pub async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("Endpoint not found: {}", uri.path()))
}
