use actix_web::{HttpRequest, error, web};

use crate::error::AppError;
use crate::handlers;

pub mod departments;
pub mod employees;
pub mod positions;
pub mod salary_ranges;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/api/v1")
                .configure(employees::configure)
                .configure(positions::configure)
                .configure(departments::configure)
                .configure(salary_ranges::configure),
        );
}

/// Malformed bodies get the failure envelope instead of actix's plain text.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    })
}
