//! Role detail entity
//!
//! Table: role_details. Free-text fields hold one item per line.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "role_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub role_id: i64,

    #[sea_orm(column_type = "Text", nullable)]
    pub responsibilities: Option<String>,

    #[sea_orm(column_type = "String(Some(128))", nullable)]
    pub reporting_to: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub escalation_process: Option<String>,

    #[sea_orm(column_type = "String(Some(128))", nullable)]
    pub grievance_contact: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub service_standards: Option<String>,

    /// Right to Service timeline in days
    #[sea_orm(nullable)]
    pub rts_timeline: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
