use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use survey_form::{definition::DEFAULT_CONFIRMATION, FormDefinition, FormSchema, ValidationDisplay};

pub mod schema;
pub mod validator;
pub mod watcher;

use crate::cli::Cli;

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub form: FormSettings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Which schema to serve and how the browser presents it
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FormSettings {
    /// Schema file; the built-in survey is served when absent.
    /// Relative paths resolve against the configuration file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<PathBuf>,
    #[serde(default)]
    pub validation_display: ValidationDisplay,
    #[serde(default = "default_confirmation")]
    pub confirmation_message: String,
}

fn default_confirmation() -> String {
    DEFAULT_CONFIRMATION.to_string()
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            schema_path: None,
            validation_display: ValidationDisplay::default(),
            confirmation_message: default_confirmation(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let config_path = &cli.config;
        let root = config_path.parent().unwrap_or_else(|| Path::new("."));

        let s = Config::builder()
            .add_source(File::from(config_path.clone()).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;
        settings.resolve_paths(root);

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("survey");
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;
        settings.resolve_paths(Path::new(root));

        settings.validate()?;
        Ok(settings)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(schema) = &cli.schema {
            self.form.schema_path = Some(schema.clone());
        }
    }

    fn resolve_paths(&mut self, root: &Path) {
        if let Some(path) = &self.form.schema_path {
            if path.is_relative() && !root.as_os_str().is_empty() {
                self.form.schema_path = Some(root.join(path));
            }
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    /// Build the definition served to the browser
    pub fn load_definition(&self) -> Result<FormDefinition, anyhow::Error> {
        let schema = match &self.form.schema_path {
            Some(path) => schema::load_schema_file(path)?,
            None => {
                tracing::info!("No schema file configured, serving the built-in survey");
                FormSchema::project_requirements()
            }
        };

        Ok(FormDefinition {
            schema,
            validation_display: self.form.validation_display,
            confirmation_message: self.form.confirmation_message.clone(),
        })
    }

    /// Files whose modification should trigger a reload
    pub fn watch_paths(&self, config_path: &Path) -> Vec<PathBuf> {
        let mut paths = vec![config_path.to_path_buf()];
        if let Some(schema) = &self.form.schema_path {
            paths.push(schema.clone());
        }
        paths
    }
}
