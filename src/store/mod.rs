//! Directory store
//!
//! Read-only queries over the directory tables. Handlers only see the
//! [`DirectoryStore`] trait; the PostgreSQL implementation lives in
//! [`postgres`].

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::entity::department::DivisionView;
use crate::entity::grievance_category::GrievanceCategoryView;
use crate::entity::personnel::PersonnelView;
use crate::entity::role::RoleView;
use crate::entity::rts_service::RtsServiceView;
use crate::entity::ward::WardView;
use crate::entity::{contact_information, role, role_detail};
use crate::hierarchy::{DepartmentRecord, Organization};

pub mod postgres;

#[cfg(test)]
pub(crate) mod memory;

pub use postgres::SeaOrmStore;

/// Maximum rows returned per search category
pub const SEARCH_LIMIT: u64 = 20;

#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Department rows ordered by organization, level and name
    async fn departments(
        &self,
        organization: Option<Organization>,
    ) -> Result<Vec<DepartmentRecord>, DbErr>;

    /// GMDA level-2 departments with their leadership role and holder
    async fn gmda_divisions(&self) -> Result<Vec<DivisionView>, DbErr>;

    /// Wards ordered by ward number
    async fn wards(&self) -> Result<Vec<WardView>, DbErr>;

    /// Roles whose title or description contains `term`, leadership first
    async fn search_roles(&self, term: &str) -> Result<Vec<RoleView>, DbErr>;

    /// People whose name or role title contains `term`, elected first
    async fn search_personnel(&self, term: &str) -> Result<Vec<PersonnelView>, DbErr>;

    async fn personnel(&self) -> Result<Vec<PersonnelView>, DbErr>;

    async fn role(&self, role_id: i64) -> Result<Option<role::Model>, DbErr>;

    async fn role_detail(&self, role_id: i64) -> Result<Option<role_detail::Model>, DbErr>;

    /// Office contact for the department a role belongs to
    async fn contact_info(
        &self,
        role_id: i64,
    ) -> Result<Option<contact_information::Model>, DbErr>;

    async fn grievance_categories(&self) -> Result<Vec<GrievanceCategoryView>, DbErr>;

    /// RTS services ordered by timeline, then name
    async fn rts_services(&self) -> Result<Vec<RtsServiceView>, DbErr>;
}

/// `LIKE` pattern for a free-text term, with wildcards in the term escaped
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
