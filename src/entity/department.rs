//! Department entity
//!
//! Table: departments

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::hierarchy::DepartmentRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(128))")]
    pub name: String,

    /// Parent department (NULL for a top-level department)
    #[sea_orm(nullable)]
    pub parent_id: Option<i64>,

    /// Depth hint supplied with the source data
    pub level: i32,

    /// Owning body: ULB, MCG, GMDA or WARD
    #[sea_orm(column_type = "String(Some(16))")]
    pub organization: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DepartmentRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            parent_id: model.parent_id,
            level: model.level,
            organization: model.organization,
            name: model.name,
            description: model.description,
        }
    }
}

/// GMDA division row: a level-2 department with its leadership role and holder
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct DivisionView {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
    pub level: i32,
    pub organization: String,
    pub description: Option<String>,
    pub head_role: Option<String>,
    pub head_name: Option<String>,
}
