use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Pong {
    message: &'static str,
}

pub async fn ping() -> Json<Pong> {
    Json(Pong { message: "pong" })
}
