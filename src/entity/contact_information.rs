//! Contact information entity
//!
//! Table: contact_information

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_information")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub department_id: i64,

    #[sea_orm(column_type = "String(Some(128))")]
    pub office_name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,

    #[sea_orm(column_type = "String(Some(128))", nullable)]
    pub phone_numbers: Option<String>,

    #[sea_orm(column_type = "String(Some(128))", nullable)]
    pub email: Option<String>,

    #[sea_orm(column_type = "String(Some(64))", nullable)]
    pub office_hours: Option<String>,

    #[sea_orm(column_type = "String(Some(64))", nullable)]
    pub public_dealing_hours: Option<String>,

    #[sea_orm(column_type = "String(Some(32))", nullable)]
    pub emergency_number: Option<String>,

    #[sea_orm(column_type = "String(Some(128))", nullable)]
    pub website: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
