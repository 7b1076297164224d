use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;
use crate::features::positions::{
    CreatePositionCommand, DeletePositionByIdCommand, GetPositionByIdQuery, GetPositionsQuery,
    PagedPositionsQuery, UpdatePositionCommand,
};
use crate::features::validate;
use crate::handlers::shared::ApiResult;
use crate::handlers::{created, ensure_route_id};
use crate::middleware::CorrelationId;

pub async fn get_positions(
    state: web::Data<AppState>,
    query: web::Query<GetPositionsQuery>,
) -> Result<HttpResponse, AppError> {
    let result = query.into_inner().handle(&state.position_repository).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn get_position(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let query = GetPositionByIdQuery {
        id: path.into_inner(),
    };
    let position = query.handle(&state.position_repository).await?;
    Ok(HttpResponse::Ok().json(ApiResult::success(position)))
}

pub async fn paged_positions(
    state: web::Data<AppState>,
    query: web::Json<PagedPositionsQuery>,
) -> Result<HttpResponse, AppError> {
    let result = query.into_inner().handle(&state.position_repository).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn create_position(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    command: web::Json<CreatePositionCommand>,
) -> Result<HttpResponse, AppError> {
    let command = command.into_inner();
    validate(&command)?;

    let id = command.handle(&state.position_repository).await?;
    log::info!("[{}] Position {} created", correlation_id, id);
    Ok(created("positions", id))
}

pub async fn update_position(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    path: web::Path<Uuid>,
    command: web::Json<UpdatePositionCommand>,
) -> Result<HttpResponse, AppError> {
    let command = command.into_inner();
    ensure_route_id(path.into_inner(), command.id)?;
    validate(&command)?;

    let id = command.handle(&state.position_repository).await?;
    log::info!("[{}] Position {} updated", correlation_id, id);
    Ok(HttpResponse::Ok().json(ApiResult::success(id)))
}

pub async fn delete_position(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let command = DeletePositionByIdCommand {
        id: path.into_inner(),
    };
    let id = command.handle(&state.position_repository).await?;
    log::info!("[{}] Position {} deleted", correlation_id, id);
    Ok(HttpResponse::Ok().json(ApiResult::success(id)))
}
