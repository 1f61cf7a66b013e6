// src/storage.rs

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, types::Json};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{category::Category, submission::SubmissionRecord},
};

/// Persistence for finished quizzes.
///
/// Stores are downstream of scoring: a failing store never changes the
/// result a respondent sees.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), AppError>;

    /// Top two categories of a stored result, if the id is known.
    async fn find_top_two(&self, result_id: Uuid) -> Result<Option<[Category; 2]>, AppError>;

    /// How many quizzes have been stored so far.
    async fn count(&self) -> Result<i64, AppError>;
}

/// Postgres-backed store (`quiz_submissions` table).
#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Helper struct for reading the shared part of a submission.
#[derive(sqlx::FromRow)]
struct TopTwoRow {
    top_two_archetypes: Vec<String>,
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), AppError> {
        let top_two: Vec<String> = record
            .top_two
            .iter()
            .map(|c| c.label().to_string())
            .collect();

        sqlx::query(
            r#"
            INSERT INTO quiz_submissions
                (result_id, first_name, email, answers, category_totals, top_two_archetypes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.result_id)
        .bind(&record.first_name)
        .bind(&record.email)
        .bind(Json(record.answers.clone()))
        .bind(Json(record.category_totals))
        .bind(top_two)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert quiz submission: {:?}", e);
            AppError::from(e)
        })?;

        Ok(())
    }

    async fn find_top_two(&self, result_id: Uuid) -> Result<Option<[Category; 2]>, AppError> {
        let row = sqlx::query_as::<_, TopTwoRow>(
            "SELECT top_two_archetypes FROM quiz_submissions WHERE result_id = $1",
        )
        .bind(result_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.and_then(|row| parse_top_two(result_id, &row.top_two_archetypes)))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quiz_submissions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Rows written before a label change may not parse; those read as missing.
fn parse_top_two(result_id: Uuid, labels: &[String]) -> Option<[Category; 2]> {
    match labels {
        [first, second, ..] => match (first.parse(), second.parse()) {
            (Ok(first), Ok(second)) => Some([first, second]),
            _ => {
                tracing::warn!(%result_id, ?labels, "Stored archetype labels no longer match a category");
                None
            }
        },
        _ => {
            tracing::warn!(%result_id, ?labels, "Stored submission has fewer than two archetypes");
            None
        }
    }
}

/// In-process store used when no database is configured, and in tests.
#[derive(Default)]
pub struct MemorySubmissionStore {
    records: RwLock<HashMap<Uuid, SubmissionRecord>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, result_id: Uuid) -> Option<SubmissionRecord> {
        self.records.read().await.get(&result_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.result_id) {
            return Err(AppError::InternalServerError(format!(
                "duplicate result id {}",
                record.result_id
            )));
        }
        records.insert(record.result_id, record.clone());
        Ok(())
    }

    async fn find_top_two(&self, result_id: Uuid) -> Result<Option<[Category; 2]>, AppError> {
        Ok(self.records.read().await.get(&result_id).map(|r| r.top_two))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.len().await as i64)
    }
}
