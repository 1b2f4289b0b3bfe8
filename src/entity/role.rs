//! Role entity
//!
//! Table: roles

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(128))")]
    pub title: String,

    pub department_id: i64,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Head of the department (commissioner, mayor, chief engineer...)
    pub is_leadership: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Role joined with its department, as returned by search
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct RoleView {
    pub id: i64,
    pub title: String,
    pub department_id: i64,
    pub description: Option<String>,
    pub is_leadership: bool,
    pub department_name: String,
    pub organization: String,
}
