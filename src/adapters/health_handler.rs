use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use super::SharedDefinition;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub form: String,
}

pub struct HealthHandler {
    definition: SharedDefinition,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(definition: SharedDefinition) -> Self {
        Self {
            definition,
            start_time: std::time::Instant::now(),
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            form: self.definition.read().await.schema.form_title.clone(),
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check - the served schema has at least one field that renders
    pub async fn ready(&self) -> impl IntoResponse {
        let definition = self.definition.read().await;
        let renderable = definition
            .schema
            .fields
            .iter()
            .filter(|f| f.field_type.is_supported())
            .count();

        if renderable > 0 {
            (StatusCode::OK, Json(serde_json::json!({
                "status": "ready",
                "fields": renderable
            })))
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({
                "status": "not_ready",
                "message": "Form has no renderable fields"
            })))
        }
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(serde_json::json!({
            "status": "alive",
            "message": "Server is alive"
        })))
    }
}
