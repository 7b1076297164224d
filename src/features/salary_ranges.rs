use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::database::entity::Entity;
use crate::database::models::SalaryRange;
use crate::database::repositories::SalaryRangeRepository;
use crate::error::AppError;
use crate::handlers::shared::PagedResult;
use crate::shaping::ShapedRow;

fn check_bounds(min_salary: &BigDecimal, max_salary: &BigDecimal) -> Result<(), AppError> {
    if min_salary > max_salary {
        return Err(AppError::Validation(vec![
            "max_salary: must be greater than or equal to min_salary".to_string(),
        ]));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalaryRangeCommand {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub min_salary: BigDecimal,
    pub max_salary: BigDecimal,
}

impl CreateSalaryRangeCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: SalaryRangeRepository + ?Sized,
    {
        check_bounds(&self.min_salary, &self.max_salary)?;

        let salary_range = repository
            .add(SalaryRange::new(self.name, self.min_salary, self.max_salary))
            .await?;
        log::info!("Created salary range {}", salary_range.id);
        Ok(salary_range.id)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSalaryRangeCommand {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub min_salary: BigDecimal,
    pub max_salary: BigDecimal,
}

impl UpdateSalaryRangeCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: SalaryRangeRepository + ?Sized,
    {
        let mut salary_range = repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(SalaryRange::NAME))?;

        check_bounds(&self.min_salary, &self.max_salary)?;
        salary_range.name = self.name;
        salary_range.min_salary = self.min_salary;
        salary_range.max_salary = self.max_salary;

        let id = salary_range.id;
        repository.update(salary_range).await?;
        log::info!("Updated salary range {}", id);
        Ok(id)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteSalaryRangeByIdCommand {
    pub id: Uuid,
}

impl DeleteSalaryRangeByIdCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: SalaryRangeRepository + ?Sized,
    {
        let salary_range = repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(SalaryRange::NAME))?;

        repository.delete(&salary_range).await?;
        log::info!("Deleted salary range {}", salary_range.id);
        Ok(salary_range.id)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GetSalaryRangeByIdQuery {
    pub id: Uuid,
}

impl GetSalaryRangeByIdQuery {
    pub async fn handle<R>(self, repository: &R) -> Result<SalaryRange, AppError>
    where
        R: SalaryRangeRepository + ?Sized,
    {
        repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(SalaryRange::NAME))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetSalaryRangesQuery {
    pub name: Option<String>,
    pub order_by: Option<String>,
    pub page_number: i64,
    pub page_size: i64,
    pub fields: Option<String>,
}

impl Default for GetSalaryRangesQuery {
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

impl GetSalaryRangesQuery {
    pub async fn handle<R>(self, repository: &R) -> Result<PagedResult<ShapedRow>, AppError>
    where
        R: SalaryRangeRepository + ?Sized,
    {
        let (data, counts) = repository.get_salary_range_response(&self).await?;
        Ok(PagedResult::success(
            data,
            self.page_number,
            self.page_size,
            counts,
        ))
    }
}
