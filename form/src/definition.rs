//! What the server hands to the browser: schema plus presentation settings

use serde::{Deserialize, Serialize};

use crate::schema::FormSchema;
use crate::validation::ValidationDisplay;

pub const DEFAULT_CONFIRMATION: &str = "Form Submitted Successfully!";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    pub schema: FormSchema,
    #[serde(default)]
    pub validation_display: ValidationDisplay,
    #[serde(default = "default_confirmation")]
    pub confirmation_message: String,
}

fn default_confirmation() -> String {
    DEFAULT_CONFIRMATION.to_string()
}

impl Default for FormDefinition {
    fn default() -> Self {
        Self {
            schema: FormSchema::project_requirements(),
            validation_display: ValidationDisplay::default(),
            confirmation_message: default_confirmation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let json = r#"{"schema": {"formTitle": "Short", "fields": []}}"#;
        let def: FormDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.schema.form_title, "Short");
        assert_eq!(def.validation_display, ValidationDisplay::Touched);
        assert_eq!(def.confirmation_message, DEFAULT_CONFIRMATION);
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let value = serde_json::to_value(FormDefinition::default()).unwrap();
        assert_eq!(value["validationDisplay"], "touched");
        assert_eq!(value["schema"]["formTitle"], "Project Requirements Survey");
        assert_eq!(value["schema"]["fields"][1]["validation"]["message"], "Please enter a valid email address");
    }
}
