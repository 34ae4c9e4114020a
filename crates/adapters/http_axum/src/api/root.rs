//! Static greeting endpoints.

use axum::Json;
use serde::Serialize;

/// `{"message": ..}` body.
#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// `GET /`
pub async fn greet() -> Json<Message> {
    Json(Message {
        message: "Greetings, mortals",
    })
}

/// `GET /login`
pub async fn login() -> Json<Message> {
    Json(Message {
        message: "Welcome to the API",
    })
}
