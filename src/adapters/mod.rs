pub mod form_handler;
pub mod health_handler;
pub mod ui_handler;

use std::sync::Arc;
use survey_form::FormDefinition;
use tokio::sync::RwLock;

/// The definition currently served; replaced wholesale on reload
pub type SharedDefinition = Arc<RwLock<FormDefinition>>;
