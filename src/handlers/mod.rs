use actix_web::{HttpResponse, Responder, http::header};
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::shared::ApiResult;

pub mod departments;
pub mod employees;
pub mod positions;
pub mod salary_ranges;
pub mod shared;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

/// `201 Created` pointing at the new resource.
pub(crate) fn created(collection: &str, id: Uuid) -> HttpResponse {
    HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/{}/{}", collection, id)))
        .json(ApiResult::success(id))
}

/// PUT bodies must name the resource addressed by the route.
pub(crate) fn ensure_route_id(route_id: Uuid, body_id: Uuid) -> Result<(), AppError> {
    if route_id != body_id {
        return Err(AppError::BadRequest(format!(
            "Route id {} does not match body id {}",
            route_id, body_id
        )));
    }
    Ok(())
}
