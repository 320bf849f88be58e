use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::MongoDB;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Estado da conexão com o MongoDB ("connected" / "disconnected")
    pub database: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service health report, including database connectivity", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<MongoDB>) -> impl Responder {
    let (status, database) = match db.health_check().await {
        Ok(_) => ("healthy", "connected"),
        Err(_) => ("degraded", "disconnected"),
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: "users-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use mongodb::Client;

    #[actix_web::test]
    async fn test_health_check_reports_disconnected_database() {
        // Porta inalcançável e seleção de servidor curta: o ping falha
        // rápido e o endpoint continua respondendo 200.
        let client = Client::with_uri_str(
            "mongodb://127.0.0.1:1/users_service?serverSelectionTimeoutMS=200",
        )
        .await
        .unwrap();
        let db = MongoDB::from_database(client.database("users_service"));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, "degraded");
        assert_eq!(body.database, "disconnected");
        assert_eq!(body.service, "users-service");
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_health_check_reports_connected_database() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/users_service".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.database, "connected");
    }
}
