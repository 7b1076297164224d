use actix_web::web;

use crate::handlers::positions;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/positions")
            .route("", web::get().to(positions::get_positions))
            .route("", web::post().to(positions::create_position))
            .route("/Paged", web::post().to(positions::paged_positions))
            .route("/{id}", web::get().to(positions::get_position))
            .route("/{id}", web::put().to(positions::update_position))
            .route("/{id}", web::delete().to(positions::delete_position)),
    );
}
