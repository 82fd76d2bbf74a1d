//! Draft generation: fill the form, check it, prompt the model.

use std::collections::HashMap;
use std::sync::Arc;

use super::completion::CompletionClient;
use super::validation::{fill_fields, validate_required};
use super::{DraftError, DraftOutcome};
use crate::catalog::{Catalog, DocumentSpec, FilledFields};

/// Turns raw form input into a draft for one catalog entry.
#[derive(Clone)]
pub struct DraftPipeline {
    catalog: Arc<Catalog>,
    completion: Arc<dyn CompletionClient>,
}

/// Filled form values together with the outcome of drafting them.
#[derive(Debug)]
pub struct Generation<'a> {
    pub spec: &'a DocumentSpec,
    pub filled: FilledFields,
    pub outcome: DraftOutcome,
}

impl DraftPipeline {
    pub fn new(catalog: Arc<Catalog>, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            catalog,
            completion,
        }
    }

    /// Generate a draft for `type_id` from submitted form values.
    ///
    /// Only an unknown document type is an error; missing fields and
    /// completion failures come back as a [`DraftOutcome`].
    pub async fn generate(
        &self,
        type_id: &str,
        raw: &HashMap<String, String>,
    ) -> Result<Generation<'_>, DraftError> {
        let spec = self
            .catalog
            .lookup(type_id)
            .ok_or_else(|| DraftError::UnknownDocumentType(type_id.to_string()))?;

        let filled = fill_fields(spec.fields(), raw);

        if let Err(errors) = validate_required(spec.fields(), &filled) {
            log::info!(
                "Draft for '{}' not generated, {} required field(s) missing",
                type_id,
                errors.len()
            );
            return Ok(Generation {
                spec,
                filled,
                outcome: DraftOutcome::Missing(errors),
            });
        }

        let user = spec.render_prompt(&filled);
        log::debug!("Prompt for '{}' is {} characters", type_id, user.len());

        let outcome = match self.completion.complete(spec.system(), &user).await {
            Ok(text) => {
                log::info!("Draft generated for '{}' ({} characters)", type_id, text.len());
                DraftOutcome::Draft(text.trim().to_string())
            }
            Err(e) => {
                log::error!("Completion request for '{}' failed: {}", type_id, e);
                DraftOutcome::Failed(e.to_string())
            }
        };

        Ok(Generation {
            spec,
            filled,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafting::completion::CompletionError;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingClient {
        calls: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl CompletionClient for RecordingClient {
        async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
            self.calls.lock().push((system.to_string(), user.to_string()));
            if self.fail {
                Err(CompletionError::Api {
                    status: 429,
                    message: "quota exceeded".to_string(),
                })
            } else {
                Ok("  Dear Sir or Madam,\n\nRegards.  ".to_string())
            }
        }
    }

    fn pipeline(client: Arc<RecordingClient>) -> DraftPipeline {
        DraftPipeline::new(Arc::new(Catalog::builtin().unwrap()), client)
    }

    fn meeting_request() -> HashMap<String, String> {
        [
            ("yourName", "Ada Lovelace"),
            ("recipient", "Charles Babbage"),
            ("purpose", "Discuss the engine"),
            ("proposedDates", "Monday 10am"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[tokio::test]
    async fn test_unknown_type_is_an_error() {
        let client = Arc::new(RecordingClient::default());
        let drafts = pipeline(client.clone());
        let err = drafts
            .generate("no_such_letter", &HashMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DraftError::UnknownDocumentType(ref t) if t == "no_such_letter"));
        assert!(client.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_missing_fields_skip_completion() {
        let client = Arc::new(RecordingClient::default());
        let mut raw = meeting_request();
        raw.remove("recipient");

        let drafts = pipeline(client.clone());
        let generation = drafts
            .generate("general_meeting_request", &raw)
            .await
            .unwrap();

        let missing = generation.outcome.missing().unwrap();
        assert_eq!(missing.labels(), vec!["Recipient"]);
        assert_eq!(generation.outcome.output(), "Missing: Recipient");
        assert!(client.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_success_sends_system_then_user_prompt() {
        let client = Arc::new(RecordingClient::default());
        let drafts = pipeline(client.clone());
        let generation = drafts
            .generate("general_meeting_request", &meeting_request())
            .await
            .unwrap();

        assert_eq!(
            generation.outcome,
            DraftOutcome::Draft("Dear Sir or Madam,\n\nRegards.".to_string())
        );

        let calls = client.calls.lock();
        assert_eq!(calls.len(), 1);
        let (system, user) = &calls[0];
        assert_eq!(system, "You write crisp meeting requests.");
        assert!(user.starts_with("Draft a meeting request."));
        assert!(user.contains("- Format: online"));
        assert!(user.contains("- Tone: neutral"));
    }

    #[tokio::test]
    async fn test_defaults_are_filled() {
        let client = Arc::new(RecordingClient::default());
        let drafts = pipeline(client);
        let generation = drafts
            .generate("general_meeting_request", &meeting_request())
            .await
            .unwrap();
        assert_eq!(generation.spec.key(), "general_meeting_request");
        assert_eq!(generation.filled.get("format"), "online");
        assert_eq!(generation.filled.get("tone"), "neutral");
    }

    #[tokio::test]
    async fn test_completion_failure_becomes_text() {
        let client = Arc::new(RecordingClient {
            fail: true,
            ..Default::default()
        });
        let drafts = pipeline(client);
        let generation = drafts
            .generate("general_meeting_request", &meeting_request())
            .await
            .unwrap();

        assert!(generation.outcome.is_failure());
        assert_eq!(
            generation.outcome.output(),
            "Generation error: 429 quota exceeded"
        );
    }
}
