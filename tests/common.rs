#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use letterdesk_server::cases::MemoryCaseStore;
use letterdesk_server::catalog::Catalog;
use letterdesk_server::drafting::{CompletionClient, CompletionError};
use letterdesk_server::export::PdfExporter;
use letterdesk_server::AppState;
use parking_lot::Mutex;

/// A system/user prompt pair sent to the completion client.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
}

/// Completion client that records prompts and returns a canned reply.
pub struct MockCompletionClient {
    reply: Result<String, (u16, String)>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockCompletionClient {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Err((status, message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        self.calls.lock().push(RecordedCall {
            system: system.to_string(),
            user: user.to_string(),
        });
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(CompletionError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// State backed by the builtin catalog, an in-memory case store and a
/// template path that does not exist.
pub fn test_state(completion: Arc<dyn CompletionClient>) -> web::Data<AppState> {
    test_state_with_exporter(
        completion,
        PdfExporter::new("/nonexistent/templates/document.html", "chromium"),
    )
}

pub fn test_state_with_exporter(
    completion: Arc<dyn CompletionClient>,
    exporter: PdfExporter,
) -> web::Data<AppState> {
    let catalog = Arc::new(Catalog::builtin().expect("builtin catalog must load"));
    web::Data::new(AppState::with_parts(
        catalog,
        completion,
        Arc::new(MemoryCaseStore::new()),
        Arc::new(exporter),
    ))
}
