//! PostgreSQL directory store

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, Statement, Value,
};

use super::{like_pattern, DirectoryStore, SEARCH_LIMIT};
use crate::entity::department::{self, DivisionView};
use crate::entity::grievance_category::GrievanceCategoryView;
use crate::entity::personnel::PersonnelView;
use crate::entity::role::{self, RoleView};
use crate::entity::rts_service::RtsServiceView;
use crate::entity::ward::WardView;
use crate::entity::{contact_information, role_detail};
use crate::hierarchy::{DepartmentRecord, Organization};

const GMDA_DIVISIONS_SQL: &str = r#"
    SELECT d.id, d.name, d.parent_id, d.level, d.organization, d.description,
           r.title AS head_role, p.name AS head_name
    FROM departments d
    LEFT JOIN roles r ON r.department_id = d.id AND r.is_leadership
    LEFT JOIN personnel p ON p.role_id = r.id
    WHERE d.organization = 'GMDA' AND d.level = 2
    ORDER BY d.name
"#;

const WARDS_SQL: &str = r#"
    SELECT w.*, p.name AS councillor_name
    FROM wards w
    LEFT JOIN personnel p ON p.id = w.councillor_id
    ORDER BY w.ward_number
"#;

const SEARCH_ROLES_SQL: &str = r#"
    SELECT r.*, d.name AS department_name, d.organization
    FROM roles r
    JOIN departments d ON d.id = r.department_id
    WHERE r.title ILIKE $1 OR r.description ILIKE $1
    ORDER BY r.is_leadership DESC, r.title
    LIMIT $2
"#;

const SEARCH_PERSONNEL_SQL: &str = r#"
    SELECT p.*, r.title AS role_title, d.name AS department_name, d.organization
    FROM personnel p
    JOIN roles r ON r.id = p.role_id
    JOIN departments d ON d.id = r.department_id
    WHERE p.name ILIKE $1 OR r.title ILIKE $1
    ORDER BY p.is_elected DESC, p.name
    LIMIT $2
"#;

const ALL_PERSONNEL_SQL: &str = r#"
    SELECT p.*, r.title AS role_title, d.name AS department_name, d.organization
    FROM personnel p
    JOIN roles r ON r.id = p.role_id
    JOIN departments d ON d.id = r.department_id
    ORDER BY d.organization, p.is_elected DESC, p.name
"#;

const CONTACT_INFO_SQL: &str = r#"
    SELECT ci.*
    FROM contact_information ci
    JOIN roles r ON r.department_id = ci.department_id
    WHERE r.id = $1
    ORDER BY ci.id
    LIMIT 1
"#;

const GRIEVANCE_CATEGORIES_SQL: &str = r#"
    SELECT gc.*, d.name AS department_name
    FROM grievance_categories gc
    LEFT JOIN departments d ON d.id = gc.department_id
    ORDER BY gc.category_name
"#;

const RTS_SERVICES_SQL: &str = r#"
    SELECT rts.*, d.name AS department_name
    FROM rts_services rts
    LEFT JOIN departments d ON d.id = rts.department_id
    ORDER BY rts.timeline_days, rts.service_name
"#;

/// Directory store backed by a sea-orm connection pool
#[derive(Clone, Debug)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn statement<I>(&self, sql: &str, values: I) -> Statement
    where
        I: IntoIterator<Item = Value>,
    {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, values)
    }

    fn plain(&self, sql: &str) -> Statement {
        Statement::from_string(self.db.get_database_backend(), sql)
    }

    fn search_values(term: &str) -> [Value; 2] {
        [like_pattern(term).into(), (SEARCH_LIMIT as i64).into()]
    }
}

#[async_trait]
impl DirectoryStore for SeaOrmStore {
    async fn departments(
        &self,
        organization: Option<Organization>,
    ) -> Result<Vec<DepartmentRecord>, DbErr> {
        let mut query = department::Entity::find();
        if let Some(org) = organization {
            query = query.filter(department::Column::Organization.eq(org.as_str()));
        }

        let rows = query
            .order_by_asc(department::Column::Organization)
            .order_by_asc(department::Column::Level)
            .order_by_asc(department::Column::Name)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(DepartmentRecord::from).collect())
    }

    async fn gmda_divisions(&self) -> Result<Vec<DivisionView>, DbErr> {
        DivisionView::find_by_statement(self.plain(GMDA_DIVISIONS_SQL))
            .all(&self.db)
            .await
    }

    async fn wards(&self) -> Result<Vec<WardView>, DbErr> {
        WardView::find_by_statement(self.plain(WARDS_SQL))
            .all(&self.db)
            .await
    }

    async fn search_roles(&self, term: &str) -> Result<Vec<RoleView>, DbErr> {
        RoleView::find_by_statement(self.statement(SEARCH_ROLES_SQL, Self::search_values(term)))
            .all(&self.db)
            .await
    }

    async fn search_personnel(&self, term: &str) -> Result<Vec<PersonnelView>, DbErr> {
        PersonnelView::find_by_statement(
            self.statement(SEARCH_PERSONNEL_SQL, Self::search_values(term)),
        )
        .all(&self.db)
        .await
    }

    async fn personnel(&self) -> Result<Vec<PersonnelView>, DbErr> {
        PersonnelView::find_by_statement(self.plain(ALL_PERSONNEL_SQL))
            .all(&self.db)
            .await
    }

    async fn role(&self, role_id: i64) -> Result<Option<role::Model>, DbErr> {
        role::Entity::find_by_id(role_id).one(&self.db).await
    }

    async fn role_detail(&self, role_id: i64) -> Result<Option<role_detail::Model>, DbErr> {
        role_detail::Entity::find()
            .filter(role_detail::Column::RoleId.eq(role_id))
            .order_by_asc(role_detail::Column::Id)
            .one(&self.db)
            .await
    }

    async fn contact_info(
        &self,
        role_id: i64,
    ) -> Result<Option<contact_information::Model>, DbErr> {
        contact_information::Entity::find()
            .from_raw_sql(self.statement(CONTACT_INFO_SQL, [Value::from(role_id)]))
            .one(&self.db)
            .await
    }

    async fn grievance_categories(&self) -> Result<Vec<GrievanceCategoryView>, DbErr> {
        GrievanceCategoryView::find_by_statement(self.plain(GRIEVANCE_CATEGORIES_SQL))
            .all(&self.db)
            .await
    }

    async fn rts_services(&self) -> Result<Vec<RtsServiceView>, DbErr> {
        RtsServiceView::find_by_statement(self.plain(RTS_SERVICES_SQL))
            .all(&self.db)
            .await
    }
}
