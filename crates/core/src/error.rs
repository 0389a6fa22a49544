use crate::form::FormState;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown package kind '{0}'. Must be one of: tour, transfer")]
    UnknownKind(String),

    #[error("Please validate the form before submitting (form is {0})")]
    NotValidated(FormState),

    #[error("Invalid form transition from {from} to {to}")]
    InvalidTransition { from: FormState, to: FormState },
}
