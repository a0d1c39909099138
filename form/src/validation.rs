//! Inline validation messages

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::record::FormData;
use crate::schema::ValidationRule;

/// When a failing pattern is allowed to show its message
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationDisplay {
    /// Judge every field from the first render, untouched fields as `""`
    Always,
    /// Judge a field only once it has received a change
    #[default]
    Touched,
}

/// A validation rule with its pattern compiled
#[derive(Clone, Debug)]
pub struct Matcher {
    regex: Regex,
    message: String,
}

impl Matcher {
    pub fn compile(rule: &ValidationRule) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&rule.pattern)?,
            message: rule.message.clone(),
        })
    }

    /// Unanchored search, like `RegExp.prototype.test`
    pub fn accepts(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Message to show for field `id` given the current record
    pub fn message_for(&self, id: &str, record: &FormData, display: ValidationDisplay) -> Option<&str> {
        if display == ValidationDisplay::Touched && !record.is_touched(id) {
            return None;
        }
        if self.accepts(record.value(id)) {
            None
        } else {
            Some(self.message.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

    fn email_matcher() -> Matcher {
        Matcher::compile(&ValidationRule {
            pattern: EMAIL.to_string(),
            message: "Please enter a valid email address".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_email_pattern() {
        let m = email_matcher();
        assert!(m.accepts("alice@example.com"));
        assert!(!m.accepts("alice"));
        assert!(!m.accepts("alice@example"));
        assert!(!m.accepts("al ice@example.com"));
        assert!(!m.accepts(""));
    }

    #[test]
    fn test_unanchored_pattern_searches() {
        let m = Matcher::compile(&ValidationRule {
            pattern: "[0-9]".to_string(),
            message: "needs a digit".to_string(),
        })
        .unwrap();
        assert!(m.accepts("abc1def"));
        assert!(!m.accepts("abcdef"));
    }

    #[test]
    fn test_always_flags_untouched_field() {
        let m = email_matcher();
        let record = FormData::new();
        assert_eq!(
            m.message_for("email", &record, ValidationDisplay::Always),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_touched_waits_for_first_change() {
        let m = email_matcher();
        let record = FormData::new();
        assert_eq!(m.message_for("email", &record, ValidationDisplay::Touched), None);

        let record = record.with_value("email", "alice");
        assert!(m.message_for("email", &record, ValidationDisplay::Touched).is_some());

        let record = record.with_value("email", "alice@example.com");
        assert_eq!(m.message_for("email", &record, ValidationDisplay::Touched), None);

        let record = record.with_value("email", "");
        assert!(m.message_for("email", &record, ValidationDisplay::Touched).is_some());
    }

    #[test]
    fn test_display_policy_wire_names() {
        let d: ValidationDisplay = serde_json::from_str("\"always\"").unwrap();
        assert_eq!(d, ValidationDisplay::Always);
        assert_eq!(ValidationDisplay::default(), ValidationDisplay::Touched);
    }
}
