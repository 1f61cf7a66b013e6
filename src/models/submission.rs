// src/models/submission.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::category::{Category, CategoryMap},
    report::share::ShareLinks,
    scoring::{AnswerMap, ScoreResult},
};

/// Represents a row of the 'quiz_submissions' table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Public identifier used in share links.
    pub result_id: Uuid,
    pub first_name: String,
    pub email: String,
    /// The answer snapshot that was scored.
    pub answers: AnswerMap,
    pub category_totals: CategoryMap<i64>,
    pub top_two: [Category; 2],
    pub created_at: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn new(
        result_id: Uuid,
        first_name: String,
        email: String,
        answers: AnswerMap,
        result: &ScoreResult,
    ) -> Self {
        Self {
            result_id,
            first_name,
            email,
            answers,
            category_totals: result.category_totals,
            top_two: result.top_two,
            created_at: Utc::now(),
        }
    }
}

/// DTO for scoring answers without storing anything.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: AnswerMap,
}

/// DTO for finishing the quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[validate(
        length(min = 1, max = 50, message = "First name must be between 1 and 50 characters."),
        custom(function = validate_not_blank)
    )]
    pub first_name: String,

    #[validate(email(message = "Email address is not valid."))]
    pub email: String,

    /// Key: question index, value: Likert response.
    #[serde(default)]
    pub answers: AnswerMap,
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Response for a finished quiz.
#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    /// Present only when the submission was stored.
    pub result_id: Option<Uuid>,
    pub result: ScoreResult,
    pub share: Option<ShareLinks>,
}

/// One archetype as shown on a shared results page.
#[derive(Debug, Serialize)]
pub struct SharedArchetype {
    pub category: Category,
    pub title: &'static str,
    pub emoji: &'static str,
    pub tagline: &'static str,
}

impl From<Category> for SharedArchetype {
    fn from(category: Category) -> Self {
        let archetype = category.archetype();
        Self {
            category,
            title: archetype.title,
            emoji: archetype.emoji,
            tagline: archetype.tagline,
        }
    }
}

/// Public view of a stored result: only the top two archetypes.
#[derive(Debug, Serialize)]
pub struct SharedResultResponse {
    pub result_id: Uuid,
    /// "The Lion + The Owl"
    pub headline: String,
    pub archetypes: [SharedArchetype; 2],
}

impl SharedResultResponse {
    pub fn new(result_id: Uuid, top_two: [Category; 2]) -> Self {
        Self {
            result_id,
            headline: format!(
                "{} + {}",
                top_two[0].archetype().title,
                top_two[1].archetype().title
            ),
            archetypes: top_two.map(SharedArchetype::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(first_name: &str, email: &str) -> SubmitQuizRequest {
        SubmitQuizRequest {
            first_name: first_name.to_string(),
            email: email.to_string(),
            answers: AnswerMap::new(),
        }
    }

    #[test]
    fn accepts_a_regular_submission() {
        assert!(request("Ada", "ada@example.com").validate().is_ok());
    }

    #[test]
    fn rejects_blank_names_and_bad_emails() {
        assert!(request("", "ada@example.com").validate().is_err());
        assert!(request("   ", "ada@example.com").validate().is_err());
        assert!(request("Ada", "not-an-email").validate().is_err());
        assert!(request(&"a".repeat(51), "ada@example.com").validate().is_err());
    }

    #[test]
    fn answers_deserialize_from_string_keys() {
        let req: SubmitQuizRequest = serde_json::from_str(
            r#"{"first_name": "Ada", "email": "ada@example.com", "answers": {"0": 5, "41": 1}}"#,
        )
        .unwrap();
        assert_eq!(req.answers.get(&0), Some(&5));
        assert_eq!(req.answers.get(&41), Some(&1));
    }

    #[test]
    fn shared_response_headline() {
        let shared = SharedResultResponse::new(Uuid::nil(), [Category::Social, Category::Spiritual]);
        assert_eq!(shared.headline, "The Dolphin + The Butterfly");
        assert_eq!(shared.archetypes[1].emoji, "🦋");
    }
}
