use actix_web::web;

use crate::handlers::salary_ranges;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/salary-ranges")
            .route("", web::get().to(salary_ranges::get_salary_ranges))
            .route("", web::post().to(salary_ranges::create_salary_range))
            .route("/{id}", web::get().to(salary_ranges::get_salary_range))
            .route("/{id}", web::put().to(salary_ranges::update_salary_range))
            .route("/{id}", web::delete().to(salary_ranges::delete_salary_range)),
    );
}
