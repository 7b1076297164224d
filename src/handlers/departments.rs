use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;
use crate::features::departments::{
    CreateDepartmentCommand, DeleteDepartmentByIdCommand, GetDepartmentByIdQuery,
    GetDepartmentsQuery, UpdateDepartmentCommand,
};
use crate::features::validate;
use crate::handlers::shared::ApiResult;
use crate::handlers::{created, ensure_route_id};
use crate::middleware::CorrelationId;

pub async fn get_departments(
    state: web::Data<AppState>,
    query: web::Query<GetDepartmentsQuery>,
) -> Result<HttpResponse, AppError> {
    let result = query
        .into_inner()
        .handle(&state.department_repository)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn get_department(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let query = GetDepartmentByIdQuery {
        id: path.into_inner(),
    };
    let department = query.handle(&state.department_repository).await?;
    Ok(HttpResponse::Ok().json(ApiResult::success(department)))
}

pub async fn create_department(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    command: web::Json<CreateDepartmentCommand>,
) -> Result<HttpResponse, AppError> {
    let command = command.into_inner();
    validate(&command)?;

    let id = command.handle(&state.department_repository).await?;
    log::info!("[{}] Department {} created", correlation_id, id);
    Ok(created("departments", id))
}

pub async fn update_department(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    path: web::Path<Uuid>,
    command: web::Json<UpdateDepartmentCommand>,
) -> Result<HttpResponse, AppError> {
    let command = command.into_inner();
    ensure_route_id(path.into_inner(), command.id)?;
    validate(&command)?;

    let id = command.handle(&state.department_repository).await?;
    log::info!("[{}] Department {} updated", correlation_id, id);
    Ok(HttpResponse::Ok().json(ApiResult::success(id)))
}

pub async fn delete_department(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let command = DeleteDepartmentByIdCommand {
        id: path.into_inner(),
    };
    let id = command.handle(&state.department_repository).await?;
    log::info!("[{}] Department {} deleted", correlation_id, id);
    Ok(HttpResponse::Ok().json(ApiResult::success(id)))
}
