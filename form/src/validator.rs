//! Schema checks applied when a schema is loaded from outside the program

use std::collections::HashMap;
use thiserror::Error;

use crate::schema::{Field, FormSchema};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Field '{field}' of type '{field_type}' has no options")]
    MissingOptions { field: String, field_type: String },

    #[error("Invalid pattern on field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unsupported type '{field_type}' on field '{field}'")]
    UnsupportedType { field: String, field_type: String },
}

pub struct SchemaValidator;

impl SchemaValidator {
    /// Problems that make the schema unusable as a whole: a field without an
    /// id, two fields sharing an id, or a pattern that does not compile.
    /// Every problem is collected instead of stopping at the first.
    pub fn validate(schema: &FormSchema) -> Result<(), Vec<SchemaError>> {
        let mut errors = Vec::new();

        let mut seen_ids = HashMap::new();
        for (idx, field) in schema.fields.iter().enumerate() {
            if field.id.is_empty() {
                errors.push(SchemaError::MissingField(format!("fields[{}].id", idx)));
            } else if let Some(prev_idx) = seen_ids.insert(field.id.as_str(), idx) {
                errors.push(SchemaError::Duplicate(format!(
                    "Field id '{}' appears at indices {} and {}",
                    field.id, prev_idx, idx
                )));
            }

            if let Some(rule) = &field.validation {
                if let Err(source) = regex::Regex::new(&rule.pattern) {
                    errors.push(SchemaError::InvalidPattern {
                        field: field.id.clone(),
                        source,
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Problems the renderer degrades around: the affected field renders
    /// empty or not at all while the rest of the form still works
    pub fn warnings(schema: &FormSchema) -> Vec<SchemaError> {
        let mut warnings = Vec::new();

        if schema.form_title.trim().is_empty() {
            warnings.push(SchemaError::MissingField("formTitle".to_string()));
        }

        for (idx, field) in schema.fields.iter().enumerate() {
            if field.label.trim().is_empty() {
                warnings.push(SchemaError::MissingField(format!("fields[{}].label", idx)));
            }
            Self::check_field(field, &mut warnings);
        }

        warnings
    }

    fn check_field(field: &Field, warnings: &mut Vec<SchemaError>) {
        if !field.field_type.is_supported() {
            warnings.push(SchemaError::UnsupportedType {
                field: field.id.clone(),
                field_type: field.field_type.to_string(),
            });
        }

        if field.field_type.is_choice() {
            if field.options().is_empty() {
                warnings.push(SchemaError::MissingOptions {
                    field: field.id.clone(),
                    field_type: field.field_type.to_string(),
                });
            }

            let mut seen_values = HashMap::new();
            for (idx, opt) in field.options().iter().enumerate() {
                if let Some(prev_idx) = seen_values.insert(opt.value.as_str(), idx) {
                    warnings.push(SchemaError::Duplicate(format!(
                        "Option '{}' on field '{}' appears at indices {} and {}",
                        opt.value, field.id, prev_idx, idx
                    )));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, FormSchema};

    #[test]
    fn test_project_requirements_is_valid() {
        assert!(SchemaValidator::validate(&FormSchema::project_requirements()).is_ok());
    }

    #[test]
    fn test_duplicate_field_id() {
        let mut schema = FormSchema::project_requirements();
        schema
            .fields
            .push(Field::new("email", FieldType::Text, "Work Email"));

        let errors = SchemaValidator::validate(&schema).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], SchemaError::Duplicate(msg) if msg.contains("'email'")));
    }

    #[test]
    fn test_project_requirements_has_no_warnings() {
        assert!(SchemaValidator::warnings(&FormSchema::project_requirements()).is_empty());
    }

    #[test]
    fn test_choice_field_without_options_is_only_a_warning() {
        let schema = FormSchema {
            form_title: "T".into(),
            form_description: String::new(),
            fields: vec![
                Field::new("size", FieldType::Select, "Size"),
                Field::new("pick", FieldType::Radio, "Pick").with_options(Vec::<(&str, &str)>::new()),
            ],
        };

        assert!(SchemaValidator::validate(&schema).is_ok());
        let warnings = SchemaValidator::warnings(&schema);
        assert_eq!(warnings.len(), 2);
        assert!(warnings
            .iter()
            .all(|e| matches!(e, SchemaError::MissingOptions { .. })));
    }

    #[test]
    fn test_fatal_and_degradable_problems_are_split() {
        let schema = FormSchema {
            form_title: " ".into(),
            form_description: String::new(),
            fields: vec![
                Field::new("", FieldType::Text, ""),
                Field::new("code", FieldType::Text, "Code").with_validation("([a-z]", "bad"),
                Field::new("when", FieldType::Unsupported("date".into()), "When"),
                Field::new("tier", FieldType::Radio, "Tier").with_options([("a", "A"), ("a", "Also A")]),
                Field::new("code", FieldType::Textarea, "Code again"),
            ],
        };

        let errors = SchemaValidator::validate(&schema).unwrap_err();
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(errors.len(), 3, "{:?}", messages);
        assert!(messages.contains(&"Missing required field: fields[0].id".to_string()));
        assert!(errors.iter().any(|e| matches!(e, SchemaError::InvalidPattern { field, .. } if field == "code")));
        assert!(messages.iter().any(|m| m.contains("Field id 'code' appears at indices 1 and 4")));

        let warnings: Vec<String> = SchemaValidator::warnings(&schema)
            .iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(warnings.len(), 4, "{:?}", warnings);
        assert!(warnings.contains(&"Missing required field: formTitle".to_string()));
        assert!(warnings.contains(&"Missing required field: fields[0].label".to_string()));
        assert!(warnings.contains(&"Unsupported type 'date' on field 'when'".to_string()));
        assert!(warnings.iter().any(|m| m.starts_with("Duplicate entry: Option 'a'")));
    }
}
