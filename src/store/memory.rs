//! In-memory directory store for handler tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sea_orm::DbErr;

use super::DirectoryStore;
use crate::entity::department::DivisionView;
use crate::entity::grievance_category::GrievanceCategoryView;
use crate::entity::personnel::PersonnelView;
use crate::entity::role::RoleView;
use crate::entity::rts_service::RtsServiceView;
use crate::entity::ward::WardView;
use crate::entity::{contact_information, role, role_detail};
use crate::hierarchy::{DepartmentRecord, Organization};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub departments: Vec<DepartmentRecord>,
    pub roles: Vec<role::Model>,
    pub personnel: Vec<PersonnelView>,
    pub wards: Vec<WardView>,
    pub role_details: Vec<role_detail::Model>,
    pub contacts: Vec<contact_information::Model>,
    pub grievance_categories: Vec<GrievanceCategoryView>,
    pub rts_services: Vec<RtsServiceView>,
    /// When set, every query fails
    pub fail: bool,
    pub query_count: AtomicUsize,
}

impl MemoryStore {
    /// Number of queries served so far
    pub fn queries(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }

    fn hit(&self) -> Result<(), DbErr> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DbErr::Custom("store unavailable".to_string()));
        }
        Ok(())
    }

    fn department_name(&self, id: i64) -> String {
        self.departments
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.clone())
            .unwrap_or_default()
    }

    fn organization_of(&self, department_id: i64) -> String {
        self.departments
            .iter()
            .find(|d| d.id == department_id)
            .map(|d| d.organization.clone())
            .unwrap_or_default()
    }
}

fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(&term.to_lowercase())
}

#[async_trait]
impl DirectoryStore for MemoryStore {
    async fn departments(
        &self,
        organization: Option<Organization>,
    ) -> Result<Vec<DepartmentRecord>, DbErr> {
        self.hit()?;
        let mut rows: Vec<DepartmentRecord> = self
            .departments
            .iter()
            .filter(|d| organization.map_or(true, |org| d.organization == org.as_str()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            (a.organization.as_str(), a.level, a.name.as_str())
                .cmp(&(b.organization.as_str(), b.level, b.name.as_str()))
        });
        Ok(rows)
    }

    async fn gmda_divisions(&self) -> Result<Vec<DivisionView>, DbErr> {
        self.hit()?;
        let mut rows: Vec<DivisionView> = self
            .departments
            .iter()
            .filter(|d| d.organization == "GMDA" && d.level == 2)
            .map(|d| DivisionView {
                id: d.id,
                name: d.name.clone(),
                parent_id: d.parent_id,
                level: d.level,
                organization: d.organization.clone(),
                description: d.description.clone(),
                head_role: None,
                head_name: None,
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn wards(&self) -> Result<Vec<WardView>, DbErr> {
        self.hit()?;
        let mut rows = self.wards.clone();
        rows.sort_by_key(|w| w.ward_number);
        Ok(rows)
    }

    async fn search_roles(&self, term: &str) -> Result<Vec<RoleView>, DbErr> {
        self.hit()?;
        Ok(self
            .roles
            .iter()
            .filter(|r| {
                contains(&r.title, term)
                    || r.description.as_deref().map_or(false, |d| contains(d, term))
            })
            .map(|r| RoleView {
                id: r.id,
                title: r.title.clone(),
                department_id: r.department_id,
                description: r.description.clone(),
                is_leadership: r.is_leadership,
                department_name: self.department_name(r.department_id),
                organization: self.organization_of(r.department_id),
            })
            .collect())
    }

    async fn search_personnel(&self, term: &str) -> Result<Vec<PersonnelView>, DbErr> {
        self.hit()?;
        Ok(self
            .personnel
            .iter()
            .filter(|p| contains(&p.name, term) || contains(&p.role_title, term))
            .cloned()
            .collect())
    }

    async fn personnel(&self) -> Result<Vec<PersonnelView>, DbErr> {
        self.hit()?;
        let mut rows = self.personnel.clone();
        rows.sort_by(|a, b| {
            a.organization
                .cmp(&b.organization)
                .then(b.is_elected.cmp(&a.is_elected))
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(rows)
    }

    async fn role(&self, role_id: i64) -> Result<Option<role::Model>, DbErr> {
        self.hit()?;
        Ok(self.roles.iter().find(|r| r.id == role_id).cloned())
    }

    async fn role_detail(&self, role_id: i64) -> Result<Option<role_detail::Model>, DbErr> {
        self.hit()?;
        Ok(self.role_details.iter().find(|d| d.role_id == role_id).cloned())
    }

    async fn contact_info(
        &self,
        role_id: i64,
    ) -> Result<Option<contact_information::Model>, DbErr> {
        self.hit()?;
        let Some(role) = self.roles.iter().find(|r| r.id == role_id) else {
            return Ok(None);
        };
        Ok(self
            .contacts
            .iter()
            .find(|c| c.department_id == role.department_id)
            .cloned())
    }

    async fn grievance_categories(&self) -> Result<Vec<GrievanceCategoryView>, DbErr> {
        self.hit()?;
        let mut rows = self.grievance_categories.clone();
        rows.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        Ok(rows)
    }

    async fn rts_services(&self) -> Result<Vec<RtsServiceView>, DbErr> {
        self.hit()?;
        let mut rows = self.rts_services.clone();
        rows.sort_by(|a, b| {
            a.timeline_days
                .cmp(&b.timeline_days)
                .then_with(|| a.service_name.cmp(&b.service_name))
        });
        Ok(rows)
    }
}
