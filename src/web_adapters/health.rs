use actix_web::{get, web::Data, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub version: String,
    pub database: String,
}

#[get("/health")]
pub async fn health_check(state: Data<AppState>) -> HttpResponse {
    let database = match &state.db {
        Some(db) => match db.ping().await {
            Ok(_) => "connected",
            Err(_) => "unavailable",
        },
        None => "unavailable",
    };

    HttpResponse::Ok().json(HealthResponse {
        success: true,
        message: "Grant tagging API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })
}
