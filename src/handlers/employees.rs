use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;
use crate::features::employees::{
    CreateEmployeeCommand, DeleteEmployeeByIdCommand, GetEmployeeByIdQuery, GetEmployeesQuery,
    PagedEmployeesQuery, UpdateEmployeeCommand,
};
use crate::features::validate;
use crate::handlers::shared::ApiResult;
use crate::handlers::{created, ensure_route_id};
use crate::middleware::CorrelationId;

pub async fn get_employees(
    state: web::Data<AppState>,
    query: web::Query<GetEmployeesQuery>,
) -> Result<HttpResponse, AppError> {
    let result = query.into_inner().handle(&state.employee_repository).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn get_employee(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let query = GetEmployeeByIdQuery {
        id: path.into_inner(),
    };
    let employee = query.handle(&state.employee_repository).await?;
    Ok(HttpResponse::Ok().json(ApiResult::success(employee)))
}

/// DataTables server-side paging.
pub async fn paged_employees(
    state: web::Data<AppState>,
    query: web::Json<PagedEmployeesQuery>,
) -> Result<HttpResponse, AppError> {
    let result = query.into_inner().handle(&state.employee_repository).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn create_employee(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    command: web::Json<CreateEmployeeCommand>,
) -> Result<HttpResponse, AppError> {
    let command = command.into_inner();
    validate(&command)?;

    let id = command.handle(&state.employee_repository).await?;
    log::info!("[{}] Employee {} created", correlation_id, id);
    Ok(created("employees", id))
}

pub async fn update_employee(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    path: web::Path<Uuid>,
    command: web::Json<UpdateEmployeeCommand>,
) -> Result<HttpResponse, AppError> {
    let command = command.into_inner();
    ensure_route_id(path.into_inner(), command.id)?;
    validate(&command)?;

    let id = command.handle(&state.employee_repository).await?;
    log::info!("[{}] Employee {} updated", correlation_id, id);
    Ok(HttpResponse::Ok().json(ApiResult::success(id)))
}

pub async fn delete_employee(
    state: web::Data<AppState>,
    correlation_id: CorrelationId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let command = DeleteEmployeeByIdCommand {
        id: path.into_inner(),
    };
    let id = command.handle(&state.employee_repository).await?;
    log::info!("[{}] Employee {} deleted", correlation_id, id);
    Ok(HttpResponse::Ok().json(ApiResult::success(id)))
}
