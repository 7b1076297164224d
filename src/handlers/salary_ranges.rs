use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;
use crate::features::salary_ranges::{
    CreateSalaryRangeCommand, DeleteSalaryRangeByIdCommand, GetSalaryRangeByIdQuery,
    GetSalaryRangesQuery, UpdateSalaryRangeCommand,
};
use crate::features::validate;
use crate::handlers::shared::ApiResult;
use crate::handlers::{created, ensure_route_id};
use crate::middleware::CorrelationId;

pub async fn get_salary_ranges(
    state: web::Data<AppState>,
    query: web::Query<GetSalaryRangesQuery>,
) -> Result<HttpResponse, AppError> {
    let result = query
        .into_inner()
        .handle(&state.salary_range_repository)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn get_salary_range(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let query = GetSalaryRangeByIdQuery {
        id: path.into_inner(),
    };
    let salary_range = query.handle(&state.salary_range_repository).await?;
    Ok(HttpResponse::Ok().json(ApiResult::success(salary_range)))
}

pub async fn create_salary_range(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    command: web::Json<CreateSalaryRangeCommand>,
) -> Result<HttpResponse, AppError> {
    let command = command.into_inner();
    validate(&command)?;

    let id = command.handle(&state.salary_range_repository).await?;
    log::info!("[{}] Salary range {} created", correlation_id, id);
    Ok(created("salary-ranges", id))
}

pub async fn update_salary_range(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    path: web::Path<Uuid>,
    command: web::Json<UpdateSalaryRangeCommand>,
) -> Result<HttpResponse, AppError> {
    let command = command.into_inner();
    ensure_route_id(path.into_inner(), command.id)?;
    validate(&command)?;

    let id = command.handle(&state.salary_range_repository).await?;
    log::info!("[{}] Salary range {} updated", correlation_id, id);
    Ok(HttpResponse::Ok().json(ApiResult::success(id)))
}

pub async fn delete_salary_range(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let command = DeleteSalaryRangeByIdCommand {
        id: path.into_inner(),
    };
    let id = command.handle(&state.salary_range_repository).await?;
    log::info!("[{}] Salary range {} deleted", correlation_id, id);
    Ok(HttpResponse::Ok().json(ApiResult::success(id)))
}
