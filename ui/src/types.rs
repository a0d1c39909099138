//! Wire types shared with the survey server

use serde::{Deserialize, Serialize};
use survey_form::FormDefinition;

/// Envelope every `/api` endpoint answers with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Payload on success, otherwise the server's error text
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data.ok_or_else(|| "No data in response".to_string())
        } else {
            Err(self.error.unwrap_or_else(|| "Unknown error".to_string()))
        }
    }
}

/// The definition the page renders, and why it differs from the server's
/// when the backend could not be reached
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedForm {
    pub definition: FormDefinition,
    pub fallback_reason: Option<String>,
}

impl LoadedForm {
    /// Whatever the server answered is rendered; only a failed fetch falls
    /// back to the compiled-in survey
    pub fn from_fetch(fetched: Result<FormDefinition, String>) -> Self {
        match fetched {
            Ok(definition) => Self {
                definition,
                fallback_reason: None,
            },
            Err(reason) => Self {
                definition: FormDefinition::default(),
                fallback_reason: Some(reason),
            },
        }
    }
}
