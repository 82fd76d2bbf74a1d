//! Application state and database wiring.
//!
//! - `case` - Postgres-backed case store

mod case;

pub use case::PgCaseStore;

use std::sync::Arc;
use std::time::Duration;

use crate::cases::store::{CaseStore, MemoryCaseStore};
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::drafting::{CompletionClient, DraftPipeline, OpenAiClient};
use crate::export::PdfExporter;

/// Dependencies shared by every request handler; built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub drafts: DraftPipeline,
    pub cases: Arc<dyn CaseStore>,
    pub exporter: Arc<PdfExporter>,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let catalog = Arc::new(Catalog::builtin()?);
        log::info!("Loaded {} document types", catalog.len());

        let http_client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(900))
            .user_agent(concat!("letterdesk-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        if config.openai_api_key.is_none() {
            log::warn!("OPENAI_API_KEY is not set; draft generation will report errors");
        }
        let completion = Arc::new(OpenAiClient::new(
            http_client,
            config.openai_base_url.clone(),
            config.openai_api_key.clone().unwrap_or_default(),
            config.openai_model.clone(),
        ));
        log::info!("Completion model: {}", completion.model());

        let cases: Arc<dyn CaseStore> = match &config.database_url {
            Some(url) => {
                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(20)
                    .acquire_timeout(Duration::from_secs(30))
                    .idle_timeout(Duration::from_secs(900))
                    .max_lifetime(Duration::from_secs(1800))
                    .connect(url)
                    .await?;
                let store = PgCaseStore::new(pool);
                store.migrate().await?;
                log::info!("Case store connected to Postgres");
                Arc::new(store)
            }
            None => {
                log::warn!("DATABASE_URL not set, cases are kept in memory only");
                Arc::new(MemoryCaseStore::new())
            }
        };

        let exporter = Arc::new(PdfExporter::new(
            config.pdf_template_path.clone(),
            config.chrome_path.clone(),
        ));

        Ok(Self::with_parts(catalog, completion, cases, exporter))
    }

    pub fn with_parts(
        catalog: Arc<Catalog>,
        completion: Arc<dyn CompletionClient>,
        cases: Arc<dyn CaseStore>,
        exporter: Arc<PdfExporter>,
    ) -> Self {
        Self {
            drafts: DraftPipeline::new(catalog.clone(), completion),
            catalog,
            cases,
            exporter,
        }
    }
}
