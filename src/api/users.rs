use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};

use crate::database::MongoDB;
use crate::models::{User, UserRequest, UserResponse};

const COLLECTION: &str = "users";

/// Valida o id vindo do path: precisa parsear como ObjectId e voltar à
/// mesma string no round-trip. Rejeita tamanho errado, caracteres não-hex
/// e hex maiúsculo (o parser aceita, o round-trip não).
fn parse_user_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok().filter(|oid| oid.to_hex() == id)
}

/// GET /users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Database error")
    )
)]
#[get("/users")]
pub async fn get_all(db: web::Data<MongoDB>) -> impl Responder {
    let collection = db.collection::<User>(COLLECTION);

    let mut cursor = match collection.find(doc! {}).await {
        Ok(cursor) => cursor,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Error fetching users",
                "error": e.to_string()
            }));
        }
    };

    let mut users: Vec<UserResponse> = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(user) => users.push(UserResponse::from(user)),
            Err(e) => {
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": "Error fetching users",
                    "error": e.to_string()
                }));
            }
        }
    }

    HttpResponse::Ok().json(users)
}

/// GET /users/{id} - Busca usuário por id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24-char hex ObjectId)")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Invalid user id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Database error")
    )
)]
#[get("/users/{id}")]
pub async fn get_single(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    let id = path.into_inner();

    let object_id = match parse_user_id(&id) {
        Some(oid) => oid,
        None => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Invalid user id"
            }));
        }
    };

    let collection = db.collection::<User>(COLLECTION);

    match collection.find_one(doc! { "_id": object_id }).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserResponse::from(user)),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "User not found"
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Error fetching user",
            "error": e.to_string()
        })),
    }
}

/// POST /users - Cria um novo usuário
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 500, description = "Insert failed or database error")
    )
)]
#[post("/users")]
pub async fn create_user(body: web::Json<UserRequest>, db: web::Data<MongoDB>) -> impl Responder {
    let collection = db.collection::<User>(COLLECTION);
    let user = body.into_inner().into_document();

    match collection.insert_one(&user).await {
        Ok(result) => match result.inserted_id.as_object_id() {
            Some(oid) => {
                let mut created = user;
                created.id = Some(oid);
                HttpResponse::Created().json(UserResponse::from(created))
            }
            // Write não reconhecido pelo servidor
            None => HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Insert failed"
            })),
        },
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Error creating user",
            "error": e.to_string()
        })),
    }
}

/// PUT /users/{id} - Substitui por completo o usuário (full replacement)
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24-char hex ObjectId)")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User replaced; echoes the submitted fields", body = UserResponse),
        (status = 400, description = "Invalid user id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Database error")
    )
)]
#[put("/users/{id}")]
pub async fn update_user(
    path: web::Path<String>,
    body: web::Json<UserRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let id = path.into_inner();

    let object_id = match parse_user_id(&id) {
        Some(oid) => oid,
        None => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Invalid user id"
            }));
        }
    };

    let body = body.into_inner();
    let replacement = body.clone().into_document();
    let collection = db.collection::<User>(COLLECTION);

    match collection.replace_one(doc! { "_id": object_id }, &replacement).await {
        // matched sem modificar (valores idênticos) também é sucesso
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().json(serde_json::json!({
                "message": "User not found"
            }))
        }
        Ok(_) => HttpResponse::Ok().json(UserResponse::echo(id, body)),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Error updating user",
            "error": e.to_string()
        })),
    }
}

/// DELETE /users/{id} - Remove o usuário
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24-char hex ObjectId)")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Database error")
    )
)]
#[delete("/users/{id}")]
pub async fn delete_user(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    let id = path.into_inner();

    let object_id = match parse_user_id(&id) {
        Some(oid) => oid,
        None => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Invalid user id"
            }));
        }
    };

    let collection = db.collection::<User>(COLLECTION);

    match collection.delete_one(doc! { "_id": object_id }).await {
        Ok(result) if result.deleted_count == 0 => {
            HttpResponse::NotFound().json(serde_json::json!({
                "message": "User not found"
            }))
        }
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Error deleting user",
            "error": e.to_string()
        })),
    }
}
