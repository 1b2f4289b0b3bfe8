//! Role and personnel search

use axum::extract::{Query, State};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use super::CachedJson;
use crate::entity::personnel::PersonnelView;
use crate::entity::role::RoleView;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub roles: Vec<RoleView>,
    pub personnel: Vec<PersonnelView>,
    pub total: usize,
}

/// GET /api/search?query=
pub async fn search_roles_personnel(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<CachedJson> {
    let term = query.query.as_deref().unwrap_or_default().trim();
    if term.is_empty() {
        return Err(AppError::BadRequest("Query parameter is required".to_string()));
    }

    let key = format!("search-{}", term.to_lowercase());
    let store = &state.store;
    let value = state
        .cached(&key, async {
            let (roles, personnel) =
                tokio::try_join!(store.search_roles(term), store.search_personnel(term))?;
            Ok::<_, DbErr>(SearchResults {
                total: roles.len() + personnel.len(),
                roles,
                personnel,
            })
        })
        .await?;

    Ok(value.into())
}
