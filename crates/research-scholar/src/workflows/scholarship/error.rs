/// Failures surfaced by pipeline stages. Every stage fails fast; nothing is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid input for {field}: {reason}")]
    InputValidation { field: String, reason: String },
    #[error("{resource} not found")]
    NotFound { resource: String },
    #[error("{stage} stage received invalid input: {detail}")]
    ContractViolation { stage: &'static str, detail: String },
}

impl PipelineError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InputValidation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
