mod api;
mod database;
mod models;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("Starting Users Service...");

    // Initialize MongoDB connection — fatal here means the server never
    // starts listening
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db);

    log::info!("MongoDB connected successfully");
    log::info!("Server starting on {}:{}", host, port);
    log::info!("Swagger UI available at: http://{}:{}/api-docs/", host, port);
    log::info!("OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                "Origin",
                "X-Requested-With",
                "Content-Type",
                "Accept",
                "Z-Key",
            ]);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI + OpenAPI spec
            .service(
                SwaggerUi::new("/api-docs/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            // /api-docs sem a barra final cai na UI
            .route(
                "/api-docs",
                web::get().to(|| async {
                    HttpResponse::Found()
                        .append_header(("Location", "/api-docs/"))
                        .finish()
                }),
            )
            // Hello World
            .service(api::hello::hello_world)
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Users CRUD
            .service(api::users::get_all)
            .service(api::users::get_single)
            .service(api::users::create_user)
            .service(api::users::update_user)
            .service(api::users::delete_user)
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
