pub mod health;
pub mod hello;
pub mod swagger;
pub mod users;
