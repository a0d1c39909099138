//! Form schema files.
//!
//! A schema can live in its own file next to `survey.toml`. The format is
//! picked from the extension:
//!
//! ```yaml
//! formTitle: Onboarding
//! formDescription: Tell us about your team
//! fields:
//!   - id: team
//!     type: text
//!     label: Team name
//!     required: true
//!   - id: size
//!     type: select
//!     label: Team size
//!     options:
//!       - { value: small, label: "1-5" }
//!       - { value: large, label: "6+" }
//! ```

use std::path::{Path, PathBuf};
use survey_form::{FormSchema, SchemaValidator};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaFileError {
    #[error("Failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML schema: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported schema file extension: '{0}'")]
    UnsupportedFormat(String),

    #[error("Schema validation failed:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
}

/// Parse a schema from `content` in the format named by `ext`
pub fn parse_schema(content: &str, ext: &str) -> Result<FormSchema, SchemaFileError> {
    let schema = match ext {
        "json" => serde_json::from_str(content)?,
        "yaml" | "yml" => serde_yaml::from_str(content)?,
        "toml" => toml::from_str(content)?,
        other => return Err(SchemaFileError::UnsupportedFormat(other.to_string())),
    };
    Ok(schema)
}

/// Read, parse and validate a schema file.
///
/// Only problems that break the whole form are errors. Fields the browser
/// renders empty or skips (unknown type, choice without options) are logged.
pub fn load_schema_file(path: &Path) -> Result<FormSchema, SchemaFileError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let content = std::fs::read_to_string(path).map_err(|source| SchemaFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let schema = parse_schema(&content, &ext)?;

    SchemaValidator::validate(&schema).map_err(|errors| {
        SchemaFileError::Invalid(errors.iter().map(|e| e.to_string()).collect())
    })?;

    for warning in SchemaValidator::warnings(&schema) {
        tracing::warn!("{}: {}", path.display(), warning);
    }

    tracing::info!(
        "Loaded form '{}' with {} fields from {}",
        schema.form_title,
        schema.fields.len(),
        path.display()
    );
    Ok(schema)
}
