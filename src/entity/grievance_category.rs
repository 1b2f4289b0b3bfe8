//! Grievance category entity
//!
//! Table: grievance_categories

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "grievance_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(128))")]
    pub category_name: String,

    #[sea_orm(nullable)]
    pub department_id: Option<i64>,

    /// First point of escalation
    #[sea_orm(column_type = "String(Some(128))", nullable)]
    pub escalation_level_1: Option<String>,

    #[sea_orm(column_type = "String(Some(128))", nullable)]
    pub escalation_level_2: Option<String>,

    #[sea_orm(column_type = "String(Some(128))", nullable)]
    pub escalation_level_3: Option<String>,

    #[sea_orm(nullable)]
    pub rts_timeline: Option<i32>,

    #[sea_orm(column_type = "String(Some(32))", nullable)]
    pub helpline_number: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct GrievanceCategoryView {
    pub id: i64,
    pub category_name: String,
    pub department_id: Option<i64>,
    pub escalation_level_1: Option<String>,
    pub escalation_level_2: Option<String>,
    pub escalation_level_3: Option<String>,
    pub rts_timeline: Option<i32>,
    pub helpline_number: Option<String>,
    pub department_name: Option<String>,
}
