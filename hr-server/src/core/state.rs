use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::services::{DepartmentService, EmployeeService};

/// Shared server state, cloned into every handler
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | immutable configuration |
/// | db | DbService | SQLite pool |
/// | jwt_service | Arc<JwtService> | token issuance and validation |
/// | departments | DepartmentService | department rules |
/// | employees | EmployeeService | employee rules |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub jwt_service: Arc<JwtService>,
    pub departments: DepartmentService,
    pub employees: EmployeeService,
}

impl ServerState {
    /// Wire services around an already opened database
    pub fn new(config: Config, db: DbService) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let departments = DepartmentService::new(db.pool.clone());
        let employees = EmployeeService::new(db.pool.clone());

        Self {
            config,
            db,
            jwt_service,
            departments,
            employees,
        }
    }

    /// Open the configured database (applying migrations) and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url).await?;
        Ok(Self::new(config.clone(), db))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
