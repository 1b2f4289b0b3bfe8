use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema,
    Statement,
};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::{
    contact_information, department, grievance_category, personnel, role, role_detail,
    rts_service, ward,
};

/// Initialize database connection and create any missing tables
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let database_url = config.connection_url();

    info!("Connecting to database: {}:{}/{}", config.host, config.port, config.name);

    let mut opt = ConnectOptions::new(&database_url);
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug)
        .set_schema_search_path("public");

    let db = Database::connect(opt).await?;
    info!("Database connection established");

    auto_migrate(&db).await?;

    Ok(db)
}

/// Create directory tables from the entity definitions
async fn auto_migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Running auto-migration for all entities...");

    let statements = [
        schema.create_table_from_entity(department::Entity),
        schema.create_table_from_entity(role::Entity),
        schema.create_table_from_entity(personnel::Entity),
        schema.create_table_from_entity(ward::Entity),
        schema.create_table_from_entity(role_detail::Entity),
        schema.create_table_from_entity(contact_information::Entity),
        schema.create_table_from_entity(grievance_category::Entity),
        schema.create_table_from_entity(rts_service::Entity),
    ];

    for stmt in statements {
        create_table_if_not_exists(db, backend, stmt).await?;
    }

    info!("Auto-migration completed successfully");
    Ok(())
}

/// Create a table if it doesn't exist
async fn create_table_if_not_exists(
    db: &DatabaseConnection,
    backend: DbBackend,
    mut stmt: TableCreateStatement,
) -> Result<(), DbErr> {
    stmt.if_not_exists();

    let sql = backend.build(&stmt);

    db.execute(Statement::from_string(backend, sql.to_string())).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_table_statement() {
        let schema = Schema::new(DbBackend::Postgres);
        let mut stmt = schema.create_table_from_entity(department::Entity);
        stmt.if_not_exists();
        let sql = DbBackend::Postgres.build(&stmt).to_string();

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"departments\""));
        assert!(sql.contains("\"parent_id\""));
        assert!(sql.contains("\"organization\""));
    }
}
