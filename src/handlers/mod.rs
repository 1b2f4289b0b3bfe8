//! Request handlers module

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::hierarchy::Organization;

pub mod department;
pub mod directory;
pub mod role;
pub mod search;

/// JSON body served straight from the response cache
pub struct CachedJson(pub Arc<Value>);

impl IntoResponse for CachedJson {
    fn into_response(self) -> Response {
        match serde_json::to_vec(self.0.as_ref()) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(err) => AppError::Json(err).into_response(),
        }
    }
}

impl From<Arc<Value>> for CachedJson {
    fn from(value: Arc<Value>) -> Self {
        Self(value)
    }
}

/// Parse an optional `organization` query value
pub(crate) fn parse_organization(raw: Option<&str>) -> AppResult<Option<Organization>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value.parse::<Organization>().map(Some).map_err(AppError::BadRequest),
        None => Ok(None),
    }
}
