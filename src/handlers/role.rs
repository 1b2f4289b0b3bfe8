//! Role handlers
//!
//! Role detail, office contact, and the people and services linked to a role

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CachedJson;
use crate::entity::grievance_category::GrievanceCategoryView;
use crate::entity::personnel::PersonnelView;
use crate::entity::role;
use crate::entity::rts_service::RtsServiceView;
use crate::error::{AppResult, OptionExt};
use crate::matching;
use crate::state::AppState;

/// Everything the role detail view shows besides the role detail row
#[derive(Debug, Serialize)]
pub struct RoleRelations<'a> {
    pub role: role::Model,
    pub personnel: Option<&'a PersonnelView>,
    pub grievance_categories: Vec<&'a GrievanceCategoryView>,
    pub rts_services: Vec<&'a RtsServiceView>,
}

fn decode<T>(value: &Value) -> AppResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    Ok(T::deserialize(value)?)
}

/// GET /api/role-details/:role_id
///
/// Returns `null` when the role has no detail row
pub async fn get_role_details(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
) -> AppResult<CachedJson> {
    let value = state
        .cached(
            &format!("role-details-{}", role_id),
            state.store.role_detail(role_id),
        )
        .await?;
    Ok(value.into())
}

/// GET /api/contact-info/:role_id
pub async fn get_contact_info(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
) -> AppResult<CachedJson> {
    let value = state
        .cached(
            &format!("contact-info-{}", role_id),
            state.store.contact_info(role_id),
        )
        .await?;
    Ok(value.into())
}

/// GET /api/roles/:role_id/related
pub async fn get_role_relations(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
) -> AppResult<Response> {
    // Uncached: unknown ids must not leave entries behind
    let role = state
        .store
        .role(role_id)
        .await?
        .ok_or_not_found(format!("Role {} not found", role_id))?;

    let personnel_value = state.cached("all-personnel", state.store.personnel()).await?;
    let categories_value = state
        .cached("grievance-categories", state.store.grievance_categories())
        .await?;
    let services_value = state
        .cached("rts-services", state.store.rts_services())
        .await?;

    let personnel: Vec<PersonnelView> = decode(&personnel_value)?;
    let categories: Vec<GrievanceCategoryView> = decode(&categories_value)?;
    let services: Vec<RtsServiceView> = decode(&services_value)?;

    let relations = RoleRelations {
        personnel: matching::best_personnel_match(&personnel, &role.title),
        grievance_categories: matching::related_grievance_categories(&categories, &role.title),
        rts_services: matching::related_rts_services(&services, &role.title),
        role,
    };

    Ok(Json(relations).into_response())
}
