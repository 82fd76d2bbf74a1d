//! Case persistence seam.
//!
//! Only create and list exist; cases are never updated or deleted.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

use super::model::Case;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[async_trait]
pub trait CaseStore: Send + Sync {
    /// Persist a new case; the store assigns its id and timestamp.
    async fn create_case(&self, title: &str, content: &str) -> Result<Case, StoreError>;

    /// All cases, newest first.
    async fn list_cases(&self) -> Result<Vec<Case>, StoreError>;
}

/// Process-local store used when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryCaseStore {
    cases: RwLock<Vec<Case>>,
}

impl MemoryCaseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CaseStore for MemoryCaseStore {
    async fn create_case(&self, title: &str, content: &str) -> Result<Case, StoreError> {
        let case = Case {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.cases.write().push(case.clone());
        Ok(case)
    }

    async fn list_cases(&self) -> Result<Vec<Case>, StoreError> {
        // Reverse first so equal timestamps keep newest-inserted first.
        let mut cases: Vec<Case> = self.cases.read().iter().rev().cloned().collect();
        cases.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(cases)
    }
}
