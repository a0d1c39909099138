//! Submission collaborator for the browser: console log plus a blocking alert

use leptos::web_sys;
use survey_form::{Collaborator, FormData, LogCollaborator, SubmitError};

pub struct BrowserCollaborator {
    alert: String,
}

impl BrowserCollaborator {
    pub fn new(alert: impl Into<String>) -> Self {
        Self {
            alert: alert.into(),
        }
    }
}

impl Collaborator for BrowserCollaborator {
    fn submit(&self, record: &FormData) -> Result<(), SubmitError> {
        LogCollaborator.submit(record)?;

        let window = web_sys::window()
            .ok_or_else(|| SubmitError::Transport("no window available".to_string()))?;
        window
            .alert_with_message(&self.alert)
            .map_err(|e| SubmitError::Transport(format!("{:?}", e)))
    }
}
