//! Hand-off of the completed record

use thiserror::Error;

use crate::record::FormData;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Submission failed: {0}")]
    Transport(String),
}

/// Receives the completed record: a diagnostic log, a confirmation dialog, an
/// endpoint. Implementations report failure back so the form can display it.
pub trait Collaborator {
    fn submit(&self, record: &FormData) -> Result<(), SubmitError>;
}

/// Outcome surfaced in the form's confirmation region
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed(String),
    Failed(String),
}

impl SubmitOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Confirmed(msg) | SubmitOutcome::Failed(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed(_))
    }
}

/// Pass the record to `collaborator`. Visible validation messages do not block
/// submission and the record itself is never modified.
pub fn submit<C: Collaborator + ?Sized>(
    collaborator: &C,
    record: &FormData,
    confirmation: &str,
) -> SubmitOutcome {
    match collaborator.submit(record) {
        Ok(()) => SubmitOutcome::Confirmed(confirmation.to_string()),
        Err(e) => {
            log::error!("{}", e);
            SubmitOutcome::Failed(e.to_string())
        }
    }
}

/// Writes the record to the `log` facade
#[derive(Clone, Copy, Debug, Default)]
pub struct LogCollaborator;

impl Collaborator for LogCollaborator {
    fn submit(&self, record: &FormData) -> Result<(), SubmitError> {
        log::info!("Form Submitted: {}", record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiled::CompiledSchema;
    use crate::record::apply_change;
    use crate::schema::FormSchema;
    use crate::validation::ValidationDisplay;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording {
        received: RefCell<Vec<FormData>>,
    }

    impl Collaborator for Recording {
        fn submit(&self, record: &FormData) -> Result<(), SubmitError> {
            self.received.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    struct Offline;

    impl Collaborator for Offline {
        fn submit(&self, _record: &FormData) -> Result<(), SubmitError> {
            Err(SubmitError::Transport("network unreachable".to_string()))
        }
    }

    #[test]
    fn test_collaborator_receives_filled_record() {
        let record = apply_change(&FormData::new(), "name", "Alice");
        let record = apply_change(&record, "email", "alice@example.com");
        let collaborator = Recording::default();

        let outcome = submit(&collaborator, &record, "Form Submitted Successfully!");

        assert_eq!(
            outcome,
            SubmitOutcome::Confirmed("Form Submitted Successfully!".to_string())
        );
        let received = collaborator.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            [("name", "Alice"), ("email", "alice@example.com")]
                .into_iter()
                .collect::<FormData>()
        );
    }

    #[test]
    fn test_submission_does_not_touch_record() {
        let record = apply_change(&FormData::new(), "name", "Alice");
        let snapshot = record.clone();

        submit(&LogCollaborator, &record, "ok");

        assert_eq!(record, snapshot);
        assert!(!record.is_touched("email"));
    }

    #[test]
    fn test_visible_message_does_not_block_submission() {
        let schema = CompiledSchema::compile(FormSchema::project_requirements());
        let record = apply_change(&FormData::new(), "email", "alice");
        assert!(schema.messages(&record, ValidationDisplay::Touched).count() > 0);

        let collaborator = Recording::default();
        let outcome = submit(&collaborator, &record, "done");

        assert!(outcome.is_success());
        assert_eq!(collaborator.received.borrow()[0].value("email"), "alice");
    }

    #[test]
    fn test_failure_is_reported() {
        let outcome = submit(&Offline, &FormData::new(), "done");
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "Submission failed: network unreachable");
    }
}
