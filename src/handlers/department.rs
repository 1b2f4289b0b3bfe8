//! Department handlers
//!
//! Flat department listing plus the hierarchy views built from it

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

use super::{parse_organization, CachedJson};
use crate::error::{AppError, AppResult};
use crate::hierarchy::{self, DepartmentNode, HierarchyPolicy, Organization};
use crate::state::AppState;

/// Query parameters for the tree endpoint
#[derive(Debug, Deserialize)]
pub struct TreeQuery {
    pub organization: Option<String>,
    /// Search term; blank means unfiltered
    pub q: Option<String>,
}

/// Query parameters for the chart endpoint
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub organization: Option<String>,
    pub q: Option<String>,
    /// Comma-separated ids of expanded nodes
    pub expanded: Option<String>,
}

fn tree_cache_key(organization: Option<Organization>) -> String {
    match organization {
        Some(org) => format!("tree-{}", org.as_str().to_lowercase()),
        None => "tree-all".to_string(),
    }
}

/// Build (or fetch from cache) the unfiltered forest for `organization`
async fn cached_forest(
    state: &AppState,
    organization: Option<Organization>,
) -> AppResult<Arc<Value>> {
    let policy = organization
        .map(|org| state.config.policy_for(org))
        .unwrap_or_else(HierarchyPolicy::default);

    state
        .cached(&tree_cache_key(organization), async {
            let records = state.store.departments(organization).await?;
            let forest = hierarchy::build(&records, &policy);
            tracing::debug!(
                organization = ?organization,
                records = records.len(),
                roots = forest.len(),
                "built department hierarchy"
            );
            Ok::<_, DbErr>(forest)
        })
        .await
}

fn decode_forest(value: &Value) -> AppResult<Vec<DepartmentNode>> {
    Ok(Vec::<DepartmentNode>::deserialize(value)?)
}

fn parse_expanded(raw: Option<&str>) -> AppResult<HashSet<i64>> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("invalid node id '{}'", s)))
        })
        .collect()
}

/// GET /api/ulb/structure
pub async fn get_ulb_structure(State(state): State<AppState>) -> AppResult<CachedJson> {
    let policy = state.config.policy_for(Organization::Ulb);

    let value = state
        .cached("ulb-structure", async {
            let records = state.store.departments(Some(Organization::Ulb)).await?;
            Ok::<_, DbErr>(hierarchy::build(&records, &policy))
        })
        .await?;

    Ok(value.into())
}

/// GET /api/departments
pub async fn get_departments(State(state): State<AppState>) -> AppResult<CachedJson> {
    let value = state
        .cached("all-departments", state.store.departments(None))
        .await?;
    Ok(value.into())
}

/// GET /api/departments/tree
pub async fn get_department_tree(
    State(state): State<AppState>,
    Query(query): Query<TreeQuery>,
) -> AppResult<Response> {
    let organization = parse_organization(query.organization.as_deref())?;
    let value = cached_forest(&state, organization).await?;

    let term = query.q.as_deref().unwrap_or_default().trim();
    if term.is_empty() {
        return Ok(CachedJson(value).into_response());
    }

    let forest = decode_forest(&value)?;
    let roots = hierarchy::filter(&forest, term);
    tracing::debug!(
        term,
        matches = hierarchy::forest_len(&roots),
        "filtered department hierarchy"
    );

    Ok(Json(roots).into_response())
}

/// GET /api/departments/chart
///
/// Mermaid flowchart source for the client to render
pub async fn get_department_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> AppResult<Response> {
    let organization = parse_organization(query.organization.as_deref())?;
    let expanded = parse_expanded(query.expanded.as_deref())?;

    let value = cached_forest(&state, organization).await?;
    let forest = decode_forest(&value)?;
    let forest = hierarchy::filter(&forest, query.q.as_deref().unwrap_or_default());

    let chart = hierarchy::render_mermaid(&forest, &expanded);
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], chart).into_response())
}
