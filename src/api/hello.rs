use actix_web::{get, HttpResponse, Responder};

/// GET / - Endpoint de teste que devolve Hello World
#[utoipa::path(
    get,
    path = "/",
    tag = "Hello World",
    responses(
        (status = 200, description = "Hello World", body = String, content_type = "text/plain")
    )
)]
#[get("/")]
pub async fn hello_world() -> impl Responder {
    HttpResponse::Ok().body("Hello World")
}
