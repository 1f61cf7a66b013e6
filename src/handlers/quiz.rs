// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::{QUESTIONS_PER_PAGE, TOTAL_PAGES},
    error::AppError,
    models::{
        question::{self, LIKERT_SCALE, LikertOption, PublicQuestion, QUESTION_BANK, QUESTION_COUNT},
        submission::{ScoreRequest, SubmissionRecord, SubmitQuizRequest, SubmitQuizResponse},
    },
    notify::ResultsNotification,
    report::share::share_links,
    scoring::score,
    state::AppState,
};

/// Query parameters for listing questions.
#[derive(Debug, Deserialize)]
pub struct QuestionParams {
    /// 0-based page. Omit to get the whole bank.
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuestionBankResponse {
    pub total_questions: usize,
    pub total_pages: usize,
    pub questions_per_page: usize,
    pub questions: Vec<PublicQuestion>,
}

/// Lists the question bank, or a single page of it.
pub async fn list_questions(
    Query(params): Query<QuestionParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions: Vec<PublicQuestion> = match params.page {
        Some(page) => {
            let questions = question::page(page)
                .ok_or_else(|| AppError::NotFound(format!("Page {page} does not exist")))?;
            let start = page * QUESTIONS_PER_PAGE;
            questions
                .iter()
                .enumerate()
                .map(|(offset, q)| PublicQuestion::from_bank(start + offset, q))
                .collect()
        }
        None => QUESTION_BANK
            .iter()
            .enumerate()
            .map(|(index, q)| PublicQuestion::from_bank(index, q))
            .collect(),
    };

    Ok(Json(QuestionBankResponse {
        total_questions: QUESTION_COUNT,
        total_pages: TOTAL_PAGES,
        questions_per_page: QUESTIONS_PER_PAGE,
        questions,
    }))
}

/// Returns the answer scale with its labels.
pub async fn get_scale() -> Json<&'static [LikertOption]> {
    Json(&LIKERT_SCALE)
}

/// Scores answers without storing or sending anything.
pub async fn score_answers(Json(req): Json<ScoreRequest>) -> impl IntoResponse {
    Json(score(&req.answers))
}

#[derive(Debug, Serialize)]
pub struct QuizStats {
    /// Quizzes stored so far.
    pub submissions: i64,
}

/// Returns how many people have taken the quiz.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<QuizStats>, AppError> {
    let submissions = state.store.count().await?;
    Ok(Json(QuizStats { submissions }))
}

/// Finishes the quiz.
///
/// * Validates the respondent's name and email.
/// * Scores the submitted answer snapshot.
/// * Stores the submission; a storage failure is logged and the result is
///   still returned, just without a `result_id`.
/// * Sends the results email in the background once stored.
pub async fn submit_quiz(
    State(state): State<AppState>,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let SubmitQuizRequest {
        first_name,
        email,
        answers,
    } = req;
    let first_name = first_name.trim().to_string();
    let email = email.trim().to_string();

    let result = score(&answers);
    let result_id = Uuid::new_v4();

    let record = SubmissionRecord::new(result_id, first_name.clone(), email.clone(), answers, &result);
    let stored = match state.store.save(&record).await {
        Ok(()) => {
            tracing::info!(%result_id, top = %result.top_two[0], "Quiz submission stored");
            true
        }
        Err(e) => {
            tracing::error!(%result_id, "Failed to store quiz submission: {}", e);
            false
        }
    };

    if stored {
        let notifier = state.notifier.clone();
        let notification = ResultsNotification {
            first_name,
            email,
            result_id,
            result: result.clone(),
        };
        tokio::spawn(async move {
            if let Err(e) = notifier.send_results(&notification).await {
                tracing::error!(result_id = %notification.result_id, "Failed to send results email: {}", e);
            }
        });
    } else {
        tracing::warn!(%result_id, "Skipping results email for unsaved submission");
    }

    let result_id = stored.then_some(result_id);
    let share = share_links(&state.config.public_base_url, result.top_two, result_id)
        .map_err(|e| tracing::warn!("Failed to build share links: {}", e))
        .ok();

    let status = if stored { StatusCode::CREATED } else { StatusCode::OK };

    Ok((
        status,
        Json(SubmitQuizResponse {
            result_id,
            result,
            share,
        }),
    ))
}
