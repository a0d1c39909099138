use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use survey_form::FormDefinition;

use super::SharedDefinition;

/// Envelope every `/api` endpoint answers with
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// GET /api/form - schema plus presentation settings for the browser.
///
/// The configured definition is served as-is, even without fields;
/// `/health/ready` reports whether anything renders.
pub async fn get_form(State(definition): State<SharedDefinition>) -> impl IntoResponse {
    let definition = definition.read().await.clone();
    (StatusCode::OK, Json(ApiResponse::success(definition)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use survey_form::FormSchema;
    use tokio::sync::RwLock;

    #[tokio::test]
    async fn test_get_form_returns_current_definition() {
        let shared = Arc::new(RwLock::new(FormDefinition::default()));

        let response = get_form(State(shared)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ApiResponse<FormDefinition> = serde_json::from_slice(&bytes).unwrap();
        assert!(body.success);
        assert_eq!(
            body.data.unwrap().schema.form_title,
            "Project Requirements Survey"
        );
    }

    #[tokio::test]
    async fn test_get_form_sees_reloaded_definition() {
        let shared = Arc::new(RwLock::new(FormDefinition::default()));

        {
            let mut w = shared.write().await;
            w.schema = FormSchema {
                form_title: "Reloaded".to_string(),
                ..FormSchema::project_requirements()
            };
        }

        let response = get_form(State(shared)).await.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["data"]["schema"]["formTitle"], "Reloaded");
    }

    #[tokio::test]
    async fn test_get_form_without_fields_serves_it_as_is() {
        let mut definition = FormDefinition::default();
        definition.schema.form_title = "Placeholder".to_string();
        definition.schema.fields.clear();
        let shared = Arc::new(RwLock::new(definition.clone()));

        let response = get_form(State(shared)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ApiResponse<FormDefinition> = serde_json::from_slice(&bytes).unwrap();
        assert!(body.success);
        assert_eq!(body.data, Some(definition));
    }
}
