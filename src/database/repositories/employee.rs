use async_trait::async_trait;

use super::{EmployeeRepository, RepositoryResult, ShapedPage, SqlRepository};
use crate::database::models::Employee;
use crate::features::employees::{GetEmployeesQuery, PagedEmployeesQuery};
use crate::specification::employee;

#[async_trait]
impl EmployeeRepository for SqlRepository<Employee> {
    async fn get_employee_response(
        &self,
        query: &GetEmployeesQuery,
    ) -> RepositoryResult<ShapedPage> {
        let spec = employee::by_filters(query);
        self.shaped_page(spec, query.fields.as_deref().unwrap_or_default())
            .await
    }

    async fn get_paged_employee_response(
        &self,
        query: &PagedEmployeesQuery,
    ) -> RepositoryResult<ShapedPage> {
        let spec = employee::by_keyword(query);
        self.shaped_page(spec, query.request.fields()).await
    }
}
