//! # Survey - Schema-Driven Survey Form Server
//!
//! Serves a survey form described by a declarative schema. The browser bundle
//! (the `ui` crate) fetches the schema from this server, renders one control per
//! field and hands the completed record to its submission collaborator.
//!
//! ## Features
//!
//! - **Schema files**: JSON, YAML or TOML, validated at load time
//! - **Built-in survey**: served when no schema file is configured
//! - **Live Reload**: the schema and configuration are reloaded on change
//! - **Health Checks**: liveness and readiness endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use survey::config::Settings;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let definition = settings.load_definition()?;
//!     println!("Serving '{}'", definition.schema.form_title);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;

use crate::adapters::form_handler;
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::ui_handler::UIHandler;
use crate::adapters::SharedDefinition;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates the Axum application router.
///
/// # Arguments
///
/// * `definition` - Form definition served at `/api/form`, shared with the reloader
pub fn create_app(definition: SharedDefinition) -> Router {
    let health_handler = Arc::new(HealthHandler::new(definition.clone()));

    let api_router = Router::new()
        .route("/form", get(form_handler::get_form))
        .with_state(definition);

    Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .nest("/api", api_router)
        // UI endpoint (catch-all for the form page and its assets)
        .fallback(UIHandler::serve)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
