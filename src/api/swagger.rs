use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "1.0.0",
        description = "CRUD API over the `users` collection.\n\n**Endpoints:**\n- Hello World test route\n- Users CRUD (list, get by id, create, replace, delete)\n- Health monitoring",
        contact(
            name = "Users Service Team",
            email = "support@users-service.com"
        )
    ),
    paths(
        // Hello World
        crate::api::hello::hello_world,

        // Health
        crate::api::health::health_check,

        // Users
        crate::api::users::get_all,
        crate::api::users::get_single,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
    ),
    components(
        schemas(
            crate::models::UserRequest,
            crate::models::UserResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Hello World", description = "Test endpoint returning a plain-text greeting."),
        (name = "Users", description = "CRUD endpoints over the users collection. No field-level validation — only the path id is checked."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
