use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Documento de usuário (armazenado no MongoDB, collection `users`)
///
/// Todos os campos são opcionais de propósito: a API não valida o corpo
/// da requisição, então campos ausentes são gravados como null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(rename = "firstName")]
    pub first_name: Option<String>,

    #[serde(rename = "lastName")]
    pub last_name: Option<String>,

    pub email: Option<String>,

    #[serde(rename = "favoriteColor")]
    pub favorite_color: Option<String>,

    /// Data em texto (ex: "1990-05-14") — nenhum formato é imposto
    pub birthday: Option<String>,
}

/// Corpo de requisição para POST /users e PUT /users/{id}
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct UserRequest {
    #[serde(rename = "firstName")]
    #[schema(example = "Carlos")]
    pub first_name: Option<String>,

    #[serde(rename = "lastName")]
    #[schema(example = "Ramirez")]
    pub last_name: Option<String>,

    #[schema(example = "carlos.ramirez@example.com")]
    pub email: Option<String>,

    #[serde(rename = "favoriteColor")]
    #[schema(example = "Blue")]
    pub favorite_color: Option<String>,

    #[schema(example = "1990-05-14")]
    pub birthday: Option<String>,
}

impl UserRequest {
    /// Monta o documento a ser persistido, sempre com `_id` ausente —
    /// o banco é quem atribui o identificador.
    pub fn into_document(self) -> User {
        User {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            favorite_color: self.favorite_color,
            birthday: self.birthday,
        }
    }
}

/// Response de usuário — o `_id` sai como string hexadecimal de 24
/// caracteres, não como o ObjectId estendido do BSON.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    #[schema(example = "64f1b2a4c9e77a0012345678")]
    pub id: String,

    #[serde(rename = "firstName")]
    pub first_name: Option<String>,

    #[serde(rename = "lastName")]
    pub last_name: Option<String>,

    pub email: Option<String>,

    #[serde(rename = "favoriteColor")]
    pub favorite_color: Option<String>,

    pub birthday: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            favorite_color: user.favorite_color,
            birthday: user.birthday,
        }
    }
}

impl UserResponse {
    /// Eco da requisição: PUT responde os valores enviados pelo cliente,
    /// não o estado pós-escrita no banco.
    pub fn echo(id: String, body: UserRequest) -> Self {
        Self {
            id,
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            favorite_color: body.favorite_color,
            birthday: body.birthday,
        }
    }
}
