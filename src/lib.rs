pub mod config;
pub mod database;
pub mod error;
pub mod features;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod shaping;
pub mod specification;

use sqlx::SqlitePool;

pub use config::Config;
pub use database::repositories::{
    SqlDepartmentRepository, SqlEmployeeRepository, SqlPositionRepository,
    SqlSalaryRangeRepository,
};
pub use error::AppError;

pub struct AppState {
    pub config: Config,
    pub employee_repository: SqlEmployeeRepository,
    pub department_repository: SqlDepartmentRepository,
    pub position_repository: SqlPositionRepository,
    pub salary_range_repository: SqlSalaryRangeRepository,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            config,
            employee_repository: SqlEmployeeRepository::new(pool.clone()),
            department_repository: SqlDepartmentRepository::new(pool.clone()),
            position_repository: SqlPositionRepository::new(pool.clone()),
            salary_range_repository: SqlSalaryRangeRepository::new(pool),
        }
    }
}
