//! Personnel entity
//!
//! Table: personnel

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "personnel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(128))")]
    pub name: String,

    pub role_id: i64,

    #[sea_orm(column_type = "String(Some(64))", nullable)]
    pub contact: Option<String>,

    #[sea_orm(column_type = "String(Some(128))", nullable)]
    pub email: Option<String>,

    /// Elected representative rather than appointed official
    pub is_elected: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Person joined with role title and department
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct PersonnelView {
    pub id: i64,
    pub name: String,
    pub role_id: i64,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub is_elected: bool,
    pub role_title: String,
    pub department_name: String,
    pub organization: String,
}
