//! Draft generation pipeline.
//!
//! - `validation` - form filling and required-field checks
//! - `completion` - the chat-completion client seam
//! - `pipeline` - ties a catalog entry, the form and the model together

pub mod completion;
pub mod pipeline;
pub mod validation;

pub use completion::{CompletionClient, CompletionError, OpenAiClient};
pub use pipeline::{DraftPipeline, Generation};
pub use validation::{MissingField, ValidationErrors};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),
}

/// What a generate call produced. Failures stay distinct from drafts even
/// though both render as text on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftOutcome {
    /// Trimmed text returned by the completion service.
    Draft(String),
    /// Required fields were empty; nothing was sent to the model.
    Missing(ValidationErrors),
    /// The completion call failed with this message.
    Failed(String),
}

impl DraftOutcome {
    /// Text shown in place of the draft.
    pub fn output(&self) -> String {
        match self {
            Self::Draft(text) => text.clone(),
            Self::Missing(errors) => errors.to_message(),
            Self::Failed(message) => format!("Generation error: {}", message),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Draft(_) => "draft",
            Self::Missing(_) => "missing",
            Self::Failed(_) => "error",
        }
    }

    pub fn missing(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Missing(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
