//! Directory listing handlers
//!
//! Wards, GMDA divisions, personnel, grievance categories and Right to
//! Service timelines. Each is a cached listing served verbatim.

use axum::extract::State;

use super::CachedJson;
use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/mcg/wards
pub async fn get_mcg_wards(State(state): State<AppState>) -> AppResult<CachedJson> {
    let value = state.cached("mcg-wards", state.store.wards()).await?;
    Ok(value.into())
}

/// GET /api/gmda/divisions
pub async fn get_gmda_divisions(State(state): State<AppState>) -> AppResult<CachedJson> {
    let value = state
        .cached("gmda-divisions", state.store.gmda_divisions())
        .await?;
    Ok(value.into())
}

/// GET /api/personnel
pub async fn get_personnel(State(state): State<AppState>) -> AppResult<CachedJson> {
    let value = state.cached("all-personnel", state.store.personnel()).await?;
    Ok(value.into())
}

/// GET /api/grievance-categories
pub async fn get_grievance_categories(State(state): State<AppState>) -> AppResult<CachedJson> {
    let value = state
        .cached("grievance-categories", state.store.grievance_categories())
        .await?;
    Ok(value.into())
}

/// GET /api/rts-services
pub async fn get_rts_services(State(state): State<AppState>) -> AppResult<CachedJson> {
    let value = state
        .cached("rts-services", state.store.rts_services())
        .await?;
    Ok(value.into())
}
