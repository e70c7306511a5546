use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
        tag = "Health"
)]
pub async fn health_check() -> Json<HealthData> {
    Json(HealthData {
        status: "ok".to_string(),
    })
}

pub const WELCOME_MESSAGE: &str = "Welcome to the Product Catalog API!";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome text", body = String, content_type = "text/plain"),
    ),
    tag = "Health"
)]
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
