//! API client for the survey backend

use crate::types::{ApiResponse, LoadedForm};
use gloo_net::http::Request;
use survey_form::FormDefinition;

const API_BASE: &str = "/api";

/// Fetch the form definition served by the backend
pub async fn get_form_definition() -> Result<FormDefinition, String> {
    let url = format!("{}/form", API_BASE);
    fetch_json::<FormDefinition>(&url).await
}

/// Form definition from the backend, or the compiled-in survey when the
/// backend cannot be reached
pub async fn load_form_definition() -> LoadedForm {
    let loaded = LoadedForm::from_fetch(get_form_definition().await);
    if let Some(reason) = &loaded.fallback_reason {
        log::warn!("Using built-in form definition: {}", reason);
    }
    loaded
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    api_response.into_result()
}
