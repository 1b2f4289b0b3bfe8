//! Ward entity
//!
//! Table: wards

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub ward_number: i32,

    pub zone_id: i64,

    /// Personnel id of the elected councillor
    #[sea_orm(nullable)]
    pub councillor_id: Option<i64>,

    #[sea_orm(column_type = "Text", nullable)]
    pub area_description: Option<String>,

    pub population: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct WardView {
    pub id: i64,
    pub ward_number: i32,
    pub zone_id: i64,
    pub councillor_id: Option<i64>,
    pub area_description: Option<String>,
    pub population: i64,
    pub councillor_name: Option<String>,
}
