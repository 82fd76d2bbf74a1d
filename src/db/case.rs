//! Case database operations

use async_trait::async_trait;
use sqlx::PgPool;

use crate::cases::model::Case;
use crate::cases::store::{CaseStore, StoreError};

pub struct PgCaseStore {
    pool: PgPool,
}

impl PgCaseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the embedded migrations under `migrations/`.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CaseStore for PgCaseStore {
    async fn create_case(&self, title: &str, content: &str) -> Result<Case, StoreError> {
        let case = sqlx::query_as::<_, Case>(
            r#"
            INSERT INTO cases (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content, created_at
            "#,
        )
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(case)
    }

    async fn list_cases(&self) -> Result<Vec<Case>, StoreError> {
        let cases = sqlx::query_as::<_, Case>(
            "SELECT id, title, content, created_at FROM cases ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cases)
    }
}
