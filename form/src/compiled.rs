//! Schema prepared for rendering
//!
//! Patterns are compiled once when the schema loads and kept next to their
//! field. Compilation is lenient: a bad pattern or a repeated option value is
//! logged and dropped so the rest of the form still renders.

use std::collections::HashSet;

use crate::record::FormData;
use crate::schema::{Field, FieldOption, FieldType, FormSchema, TextKind};
use crate::validation::{Matcher, ValidationDisplay};

// ============================================================================
// Control Dispatch
// ============================================================================

/// The control a field renders as
#[derive(Clone, Debug, PartialEq)]
pub enum Control<'a> {
    /// Single-value text box (`text`, `email`) or multi-line box (`textarea`)
    TextEntry {
        kind: TextKind,
        placeholder: Option<&'a str>,
    },
    /// Single-choice dropdown
    Dropdown { options: &'a [FieldOption] },
    /// Mutually exclusive choices sharing `group` as their input name
    RadioGroup {
        group: &'a str,
        options: &'a [FieldOption],
    },
    /// Unsupported field type
    Nothing,
}

/// One option as it should appear for the current record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedOption {
    /// Unique within the whole form: `"{field_id}-{value}"`
    pub key: String,
    pub value: String,
    pub label: String,
    /// Selected (dropdown) or checked (radio)
    pub checked: bool,
}

// ============================================================================
// Compiled Field
// ============================================================================

#[derive(Clone, Debug)]
pub struct CompiledField {
    field: Field,
    options: Vec<FieldOption>,
    matcher: Option<Matcher>,
}

impl CompiledField {
    pub fn compile(field: Field) -> Self {
        let matcher = field.validation.as_ref().and_then(|rule| match Matcher::compile(rule) {
            Ok(m) => Some(m),
            Err(e) => {
                log::warn!(
                    "Dropping validation rule on field '{}': invalid pattern '{}': {}",
                    field.id,
                    rule.pattern,
                    e
                );
                None
            }
        });

        let options = {
            let mut seen = HashSet::new();
            field
                .options()
                .iter()
                .filter(|opt| {
                    let fresh = seen.insert(opt.value.as_str());
                    if !fresh {
                        log::warn!(
                            "Dropping duplicate option '{}' on field '{}'",
                            opt.value,
                            field.id
                        );
                    }
                    fresh
                })
                .cloned()
                .collect::<Vec<_>>()
        };

        Self {
            field,
            options,
            matcher,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn id(&self) -> &str {
        &self.field.id
    }

    pub fn label(&self) -> &str {
        &self.field.label
    }

    pub fn required(&self) -> bool {
        self.field.required
    }

    pub fn options(&self) -> &[FieldOption] {
        &self.options
    }

    pub fn matcher(&self) -> Option<&Matcher> {
        self.matcher.as_ref()
    }

    /// Pure mapping from field type to control
    pub fn control(&self) -> Control<'_> {
        match &self.field.field_type {
            FieldType::Text | FieldType::Email | FieldType::Textarea => Control::TextEntry {
                kind: self.field.field_type.text_kind().unwrap_or(TextKind::Text),
                placeholder: self.field.placeholder.as_deref(),
            },
            FieldType::Select => Control::Dropdown {
                options: &self.options,
            },
            FieldType::Radio => Control::RadioGroup {
                group: &self.field.id,
                options: &self.options,
            },
            FieldType::Unsupported(_) => Control::Nothing,
        }
    }

    /// Options in schema order, flagged against the current value
    pub fn rendered_options(&self, record: &FormData) -> Vec<RenderedOption> {
        let current = record.get(self.id());
        self.options
            .iter()
            .map(|opt| RenderedOption {
                key: format!("{}-{}", self.field.id, opt.value),
                value: opt.value.clone(),
                label: opt.label.clone(),
                checked: current == Some(opt.value.as_str()),
            })
            .collect()
    }

    /// Label of the option matching the current value
    pub fn selected_label(&self, record: &FormData) -> Option<&str> {
        let current = record.get(self.id())?;
        self.options
            .iter()
            .find(|opt| opt.value == current)
            .map(|opt| opt.label.as_str())
    }

    /// Inline message for text entry fields whose rule fails
    pub fn validation_message(&self, record: &FormData, display: ValidationDisplay) -> Option<&str> {
        self.field.field_type.text_kind()?;
        self.matcher.as_ref()?.message_for(self.id(), record, display)
    }
}

// ============================================================================
// Compiled Schema
// ============================================================================

#[derive(Clone, Debug)]
pub struct CompiledSchema {
    title: String,
    description: String,
    fields: Vec<CompiledField>,
}

impl CompiledSchema {
    pub fn compile(schema: FormSchema) -> Self {
        let fields = schema
            .fields
            .into_iter()
            .map(CompiledField::compile)
            .collect::<Vec<_>>();
        log::debug!(
            "Compiled form '{}' with {} fields",
            schema.form_title,
            fields.len()
        );
        Self {
            title: schema.form_title,
            description: schema.form_description,
            fields,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Every field in schema order, including unsupported ones
    pub fn fields(&self) -> &[CompiledField] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&CompiledField> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Fields that render a control
    pub fn renderable(&self) -> impl Iterator<Item = &CompiledField> {
        self.fields
            .iter()
            .filter(|f| !matches!(f.control(), Control::Nothing))
    }

    /// All inline messages currently showing, as `(field id, message)`
    pub fn messages<'a>(
        &'a self,
        record: &'a FormData,
        display: ValidationDisplay,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.fields
            .iter()
            .filter_map(move |f| f.validation_message(record, display).map(|m| (f.id(), m)))
    }
}
