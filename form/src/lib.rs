//! # Survey Form Core
//!
//! Framework-free model behind the schema-driven survey form.
//!
//! - **Schema**: declarative field definitions (`FormSchema`, `Field`)
//! - **Compiled schema**: validation patterns compiled once, options de-duplicated
//! - **Dispatch**: closed mapping from field type to the control that renders it
//! - **Record**: the in-progress `FormData` and its immutable change reducer
//! - **Validation**: inline message display policy
//! - **Submission**: hand-off of the completed record to a collaborator
//!
//! Nothing here depends on a rendering framework, so the same code runs in the
//! browser bundle, on the server and in plain unit tests.

pub mod compiled;
pub mod definition;
pub mod record;
pub mod schema;
pub mod submission;
pub mod validation;
pub mod validator;

pub use compiled::{CompiledField, CompiledSchema, Control, RenderedOption};
pub use definition::FormDefinition;
pub use record::{apply_change, FormData};
pub use schema::{Field, FieldOption, FieldType, FormSchema, TextKind, ValidationRule};
pub use submission::{submit, Collaborator, LogCollaborator, SubmitError, SubmitOutcome};
pub use validation::{Matcher, ValidationDisplay};
pub use validator::{SchemaError, SchemaValidator};
