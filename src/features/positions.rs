use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::datatables::DataTablesRequest;
use super::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::database::entity::Entity;
use crate::database::models::Position;
use crate::database::repositories::PositionRepository;
use crate::error::AppError;
use crate::handlers::shared::{PagedDataTableResult, PagedResult};
use crate::shaping::ShapedRow;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePositionCommand {
    #[validate(length(min = 1, max = 100))]
    pub position_title: String,
    #[validate(length(min = 1, max = 50))]
    pub position_number: String,
    #[validate(length(min = 1, max = 500))]
    pub position_description: String,
    pub department_id: Uuid,
    pub salary_range_id: Uuid,
}

impl CreatePositionCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: PositionRepository + ?Sized,
    {
        if !repository
            .is_unique_position_number(&self.position_number)
            .await?
        {
            return Err(AppError::Validation(vec![format!(
                "position_number: {} already exists",
                self.position_number
            )]));
        }

        let position = Position::new(
            self.position_title,
            self.position_number,
            self.position_description,
            self.department_id,
            self.salary_range_id,
        );
        let position = repository.add(position).await?;
        log::info!("Created position {}", position.id);
        Ok(position.id)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePositionCommand {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub position_title: String,
    #[validate(length(min = 1, max = 50))]
    pub position_number: String,
    #[validate(length(min = 1, max = 500))]
    pub position_description: String,
    pub department_id: Uuid,
    pub salary_range_id: Uuid,
}

impl UpdatePositionCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: PositionRepository + ?Sized,
    {
        let mut position = repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(Position::NAME))?;

        position.position_title = self.position_title;
        position.position_number = self.position_number;
        position.position_description = self.position_description;
        position.department_id = self.department_id;
        position.salary_range_id = self.salary_range_id;

        let id = position.id;
        repository.update(position).await?;
        log::info!("Updated position {}", id);
        Ok(id)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeletePositionByIdCommand {
    pub id: Uuid,
}

impl DeletePositionByIdCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: PositionRepository + ?Sized,
    {
        let position = repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(Position::NAME))?;

        repository.delete(&position).await?;
        log::info!("Deleted position {}", position.id);
        Ok(position.id)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GetPositionByIdQuery {
    pub id: Uuid,
}

impl GetPositionByIdQuery {
    pub async fn handle<R>(self, repository: &R) -> Result<Position, AppError>
    where
        R: PositionRepository + ?Sized,
    {
        repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(Position::NAME))
    }
}

/// Number, title and department-name filters, ORed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetPositionsQuery {
    pub position_number: Option<String>,
    pub position_title: Option<String>,
    pub department: Option<String>,
    pub order_by: Option<String>,
    pub page_number: i64,
    pub page_size: i64,
    pub fields: Option<String>,
}

impl Default for GetPositionsQuery {
    fn default() -> Self {
        Self {
            position_number: None,
            position_title: None,
            department: None,
            order_by: None,
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            fields: None,
        }
    }
}

impl GetPositionsQuery {
    pub async fn handle<R>(self, repository: &R) -> Result<PagedResult<ShapedRow>, AppError>
    where
        R: PositionRepository + ?Sized,
    {
        let (data, counts) = repository.get_position_response(&self).await?;
        Ok(PagedResult::success(
            data,
            self.page_number,
            self.page_size,
            counts,
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PagedPositionsQuery {
    pub request: DataTablesRequest,
}

impl PagedPositionsQuery {
    pub async fn handle<R>(
        self,
        repository: &R,
    ) -> Result<PagedDataTableResult<ShapedRow>, AppError>
    where
        R: PositionRepository + ?Sized,
    {
        let (data, counts) = repository.get_paged_position_response(&self).await?;
        Ok(PagedDataTableResult::success(data, self.request.draw, counts))
    }
}
