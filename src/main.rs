use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Result;

use hr_api::database::init_database;
use hr_api::middleware::{RequestId, RequestTiming};
use hr_api::{AppState, Config, routes};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting HR API server...");

    let config = Config::from_env()?;
    log::info!(
        "Configuration loaded (environment: {})",
        config.environment
    );

    let pool = init_database(&config).await?;
    log::info!("Database initialized");

    let app_state = web::Data::new(AppState::new(pool, config.clone()));

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        let cors = if config.is_development() {
            Cors::permissive()
        } else {
            Cors::default()
                .allowed_origin("http://localhost:4200")
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Content-Type", "Accept", "X-Correlation-ID"])
                .expose_headers(vec![
                    "X-Correlation-ID",
                    config.execution_timing.header_name.as_str(),
                ])
                .max_age(3600)
        };

        App::new()
            .app_data(app_state.clone())
            .wrap(RequestTiming::new(&config.execution_timing))
            .wrap(cors)
            .wrap(RequestId)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
