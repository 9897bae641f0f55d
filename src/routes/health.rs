use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
    today: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        today: state.today().to_string(),
    };

    let storage_result = check_storage(&state);
    health
        .services
        .insert("storage".to_string(), storage_result.clone());

    let bookings_result = check_bookings(&state).await;
    health
        .services
        .insert("bookings".to_string(), bookings_result.clone());

    if storage_result.status != "ok" || bookings_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_storage(state: &AppState) -> ServiceStatus {
    match state.notes.list() {
        Ok(notes) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Storage readable, {} notes", notes.len())),
        },
        Err(e) => {
            log::error!("Storage health check failed: {}", e);
            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to read storage: {}", e)),
            }
        }
    }
}

async fn check_bookings(state: &AppState) -> ServiceStatus {
    let bookings = state.bookings.read().await;
    ServiceStatus {
        status: "ok".to_string(),
        details: Some(format!(
            "{} bookings across {} resources",
            bookings.len(),
            state.resources.len()
        )),
    }
}
