use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A saved draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Case {
    #[schema(example = "a1b2c3d4-e5f6-7890-1234-567890abcdef")]
    pub id: Uuid,
    #[schema(example = "Refund Request – Edited 2025-03-14")]
    pub title: String,
    #[schema(example = "Dear Customer Service,\n\nI am writing about order #1234...")]
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Form body for manual case creation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCaseRequest {
    #[serde(default)]
    #[schema(example = "First Document")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "Hello world")]
    pub content: String,
}
