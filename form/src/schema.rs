//! Declarative form schema as it appears on the wire

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Field Type
// ============================================================================

/// Kind of input a field asks for.
///
/// Unrecognised type names are kept as `Unsupported` so that a schema written
/// for a newer renderer still loads; such fields render nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Email,
    Textarea,
    Select,
    Radio,
    Unsupported(String),
}

/// The single-value text entry variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextKind {
    Text,
    Email,
    Textarea,
}

impl TextKind {
    /// HTML `type` attribute for `<input>` based kinds
    pub fn input_type(&self) -> &'static str {
        match self {
            TextKind::Text | TextKind::Textarea => "text",
            TextKind::Email => "email",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, TextKind::Textarea)
    }
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Unsupported(name) => name.as_str(),
        }
    }

    /// Text entry kind, if this type is edited through a text box
    pub fn text_kind(&self) -> Option<TextKind> {
        match self {
            FieldType::Text => Some(TextKind::Text),
            FieldType::Email => Some(TextKind::Email),
            FieldType::Textarea => Some(TextKind::Textarea),
            _ => None,
        }
    }

    /// Whether the field picks one value out of `options`
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldType::Unsupported(_))
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "textarea" => FieldType::Textarea,
            "select" => FieldType::Select,
            "radio" => FieldType::Radio,
            _ => FieldType::Unsupported(value),
        }
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Unsupported(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Field
// ============================================================================

/// One choice of a select or radio field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Regex pattern tested against the field value, with the message shown on mismatch
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub pattern: String,
    pub message: String,
}

/// One input definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Record key and DOM correlation key
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub label: String,
    /// Enforced by the browser's native `required` attribute
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,
}

impl Field {
    pub fn new(id: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: label.into(),
            required: false,
            placeholder: None,
            options: None,
            validation: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        self.options = Some(
            options
                .into_iter()
                .map(|(value, label)| FieldOption::new(value, label))
                .collect(),
        );
        self
    }

    pub fn with_validation(mut self, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        self.validation = Some(ValidationRule {
            pattern: pattern.into(),
            message: message.into(),
        });
        self
    }

    /// Declared options, or an empty slice when the schema omitted them
    pub fn options(&self) -> &[FieldOption] {
        self.options.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// Form Schema
// ============================================================================

/// The whole form: title, description and fields in render order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub form_title: String,
    #[serde(default)]
    pub form_description: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl FormSchema {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// The compiled-in "Project Requirements Survey"
    pub fn project_requirements() -> Self {
        Self {
            form_title: "Project Requirements Survey".to_string(),
            form_description: "Please fill out this survey about your project needs".to_string(),
            fields: vec![
                Field::new("name", FieldType::Text, "Full Name")
                    .required()
                    .with_placeholder("Enter your full name"),
                Field::new("email", FieldType::Email, "Email Address")
                    .required()
                    .with_placeholder("you@example.com")
                    .with_validation(
                        r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
                        "Please enter a valid email address",
                    ),
                Field::new("companySize", FieldType::Select, "Company Size")
                    .required()
                    .with_options([
                        ("1-50", "1-50 employees"),
                        ("51-200", "51-200 employees"),
                        ("201-1000", "201-1000 employees"),
                        ("1000+", "1000+ employees"),
                    ]),
                Field::new("industry", FieldType::Radio, "Industry")
                    .required()
                    .with_options([
                        ("tech", "Technology"),
                        ("healthcare", "Healthcare"),
                        ("finance", "Finance"),
                        ("retail", "Retail"),
                        ("other", "Other"),
                    ]),
                Field::new("timeline", FieldType::Select, "Project Timeline")
                    .required()
                    .with_options([
                        ("immediate", "Immediate (within 1 month)"),
                        ("short", "Short-term (1-3 months)"),
                        ("medium", "Medium-term (3-6 months)"),
                        ("long", "Long-term (6+ months)"),
                    ]),
                Field::new("comments", FieldType::Textarea, "Additional Comments")
                    .with_placeholder("Any other details you'd like to share..."),
            ],
        }
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::project_requirements()
    }
}
