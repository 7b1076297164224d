use async_trait::async_trait;

use super::{DepartmentRepository, RepositoryResult, ShapedPage, SqlRepository};
use crate::database::models::Department;
use crate::features::departments::GetDepartmentsQuery;
use crate::specification::department;

#[async_trait]
impl DepartmentRepository for SqlRepository<Department> {
    async fn get_department_response(
        &self,
        query: &GetDepartmentsQuery,
    ) -> RepositoryResult<ShapedPage> {
        let spec = department::by_filters(query);
        self.shaped_page(spec, query.fields.as_deref().unwrap_or_default())
            .await
    }
}
