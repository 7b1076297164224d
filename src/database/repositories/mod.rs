use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::entity::Entity;
use crate::database::models::{Department, Employee, Position, SalaryRange};
use crate::error::AppError;
use crate::features::departments::GetDepartmentsQuery;
use crate::features::employees::{GetEmployeesQuery, PagedEmployeesQuery};
use crate::features::positions::{GetPositionsQuery, PagedPositionsQuery};
use crate::features::salary_ranges::GetSalaryRangesQuery;
use crate::shaping::ShapedRow;
use crate::specification::Specification;

pub mod department;
pub mod employee;
pub mod generic;
pub mod position;
pub mod salary_range;

pub use generic::SqlRepository;

pub type SqlDepartmentRepository = SqlRepository<Department>;
pub type SqlEmployeeRepository = SqlRepository<Employee>;
pub type SqlPositionRepository = SqlRepository<Position>;
pub type SqlSalaryRangeRepository = SqlRepository<SalaryRange>;

pub type RepositoryResult<T> = Result<T, AppError>;

/// Records matching the current filter versus all records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsCount {
    pub records_filtered: i64,
    pub records_total: i64,
}

/// A page of shaped rows with its counts.
pub type ShapedPage = (Vec<ShapedRow>, RecordsCount);

#[async_trait]
pub trait GenericRepository<T: Entity>: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<T>>;

    async fn get_all(&self) -> RepositoryResult<Vec<T>>;

    /// Inserts the entity, stamping its audit timestamps.
    async fn add(&self, entity: T) -> RepositoryResult<T>;

    /// Overwrites every column of the stored row. An absent id is a no-op.
    async fn update(&self, entity: T) -> RepositoryResult<()>;

    async fn delete(&self, entity: &T) -> RepositoryResult<()>;

    /// Inserts all entities in one transaction.
    async fn bulk_insert(&self, entities: Vec<T>) -> RepositoryResult<()>;

    async fn list(&self, spec: &Specification<T>) -> RepositoryResult<Vec<T>>;

    async fn first_or_default(&self, spec: &Specification<T>) -> RepositoryResult<Option<T>>;

    async fn count(&self, spec: &Specification<T>) -> RepositoryResult<i64>;

    /// Offset paging over the whole table, no filtering.
    async fn get_paged_response(&self, page_number: i64, page_size: i64)
    -> RepositoryResult<Vec<T>>;

    /// Every record, ordered and projected, no filtering.
    async fn get_shaped_response(
        &self,
        order_by: &str,
        fields: &str,
    ) -> RepositoryResult<Vec<ShapedRow>>;
}

#[async_trait]
pub trait EmployeeRepository: GenericRepository<Employee> {
    async fn get_employee_response(&self, query: &GetEmployeesQuery)
    -> RepositoryResult<ShapedPage>;

    async fn get_paged_employee_response(
        &self,
        query: &PagedEmployeesQuery,
    ) -> RepositoryResult<ShapedPage>;
}

#[async_trait]
pub trait PositionRepository: GenericRepository<Position> {
    async fn is_unique_position_number(&self, position_number: &str) -> RepositoryResult<bool>;

    async fn get_position_response(&self, query: &GetPositionsQuery)
    -> RepositoryResult<ShapedPage>;

    async fn get_paged_position_response(
        &self,
        query: &PagedPositionsQuery,
    ) -> RepositoryResult<ShapedPage>;
}

#[async_trait]
pub trait DepartmentRepository: GenericRepository<Department> {
    async fn get_department_response(
        &self,
        query: &GetDepartmentsQuery,
    ) -> RepositoryResult<ShapedPage>;
}

#[async_trait]
pub trait SalaryRangeRepository: GenericRepository<SalaryRange> {
    async fn get_salary_range_response(
        &self,
        query: &GetSalaryRangesQuery,
    ) -> RepositoryResult<ShapedPage>;
}
