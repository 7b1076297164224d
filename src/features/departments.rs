use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::database::entity::Entity;
use crate::database::models::Department;
use crate::database::repositories::DepartmentRepository;
use crate::error::AppError;
use crate::handlers::shared::PagedResult;
use crate::shaping::ShapedRow;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentCommand {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl CreateDepartmentCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: DepartmentRepository + ?Sized,
    {
        let department = repository.add(Department::new(self.name)).await?;
        log::info!("Created department {}", department.id);
        Ok(department.id)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentCommand {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl UpdateDepartmentCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: DepartmentRepository + ?Sized,
    {
        let mut department = repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(Department::NAME))?;

        department.name = self.name;

        let id = department.id;
        repository.update(department).await?;
        log::info!("Updated department {}", id);
        Ok(id)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteDepartmentByIdCommand {
    pub id: Uuid,
}

impl DeleteDepartmentByIdCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: DepartmentRepository + ?Sized,
    {
        let department = repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(Department::NAME))?;

        repository.delete(&department).await?;
        log::info!("Deleted department {}", department.id);
        Ok(department.id)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GetDepartmentByIdQuery {
    pub id: Uuid,
}

impl GetDepartmentByIdQuery {
    pub async fn handle<R>(self, repository: &R) -> Result<Department, AppError>
    where
        R: DepartmentRepository + ?Sized,
    {
        repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(Department::NAME))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetDepartmentsQuery {
    pub name: Option<String>,
    pub order_by: Option<String>,
    pub page_number: i64,
    pub page_size: i64,
    pub fields: Option<String>,
}

impl Default for GetDepartmentsQuery {
    fn default() -> Self {
        Self {
            name: None,
            order_by: None,
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            fields: None,
        }
    }
}

impl GetDepartmentsQuery {
    pub async fn handle<R>(self, repository: &R) -> Result<PagedResult<ShapedRow>, AppError>
    where
        R: DepartmentRepository + ?Sized,
    {
        let (data, counts) = repository.get_department_response(&self).await?;
        Ok(PagedResult::success(
            data,
            self.page_number,
            self.page_size,
            counts,
        ))
    }
}
