//! Right to Service entity
//!
//! Table: rts_services. Statutory delivery timelines notified under the
//! Haryana Right to Service Act.

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rts_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(128))")]
    pub service_name: String,

    #[sea_orm(nullable)]
    pub department_id: Option<i64>,

    #[sea_orm(column_type = "String(Some(128))")]
    pub designated_officer: String,

    pub timeline_days: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub documents_required: Option<String>,

    pub fee_amount: f64,

    /// Penalty per day of delay payable by the designated officer
    pub penalty_amount: f64,

    #[sea_orm(column_type = "String(Some(128))", nullable)]
    pub appellate_authority: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize, Deserialize)]
pub struct RtsServiceView {
    pub id: i64,
    pub service_name: String,
    pub department_id: Option<i64>,
    pub designated_officer: String,
    pub timeline_days: i32,
    pub documents_required: Option<String>,
    pub fee_amount: f64,
    pub penalty_amount: f64,
    pub appellate_authority: Option<String>,
    pub department_name: Option<String>,
}
