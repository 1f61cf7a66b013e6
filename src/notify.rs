// src/notify.rs

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use url::Url;
use uuid::Uuid;

use crate::{
    config::{Config, RESEND_API_URL},
    error::AppError,
    report::{
        email::{ResultsEmail, render_results_email},
        share::result_url,
    },
    scoring::ScoreResult,
};

/// Everything needed to tell a respondent about their result.
#[derive(Debug, Clone)]
pub struct ResultsNotification {
    pub first_name: String,
    pub email: String,
    pub result_id: Uuid,
    pub result: ScoreResult,
}

impl ResultsNotification {
    pub fn render(&self, base: &Url) -> Result<ResultsEmail, AppError> {
        let link = result_url(base, self.result_id)?;
        Ok(render_results_email(
            &self.first_name,
            link.as_str(),
            base.as_str(),
            &self.result,
        ))
    }
}

/// Delivers results to respondents. Delivery is best-effort: callers log
/// failures and move on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_results(&self, notification: &ResultsNotification) -> Result<(), AppError>;
}

/// Sends the results email through the Resend HTTP API.
pub struct ResendNotifier {
    client: reqwest::Client,
    api_key: String,
    from: String,
    endpoint: String,
    base_url: Url,
}

#[derive(Deserialize)]
struct ResendResponse {
    id: Option<String>,
}

impl ResendNotifier {
    pub fn new(api_key: String, from: String, base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            from,
            endpoint: RESEND_API_URL.to_string(),
            base_url,
        }
    }

    /// Points the notifier at another endpoint (e.g. a local stub).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn send_results(&self, notification: &ResultsNotification) -> Result<(), AppError> {
        let email = notification.render(&self.base_url)?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": [notification.email],
                "subject": email.subject,
                "html": email.html,
                "text": email.text,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ServiceUnavailable(format!(
                "email provider returned {status}: {body}"
            )));
        }

        let sent: ResendResponse = response.json().await?;
        tracing::info!(
            result_id = %notification.result_id,
            message_id = sent.id.as_deref().unwrap_or("unknown"),
            "Results email sent"
        );
        Ok(())
    }
}

/// Renders the email and logs it instead of sending. Used when no email
/// provider is configured.
pub struct LogNotifier {
    base_url: Url,
}

impl LogNotifier {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_results(&self, notification: &ResultsNotification) -> Result<(), AppError> {
        let email = notification.render(&self.base_url)?;
        tracing::info!(
            result_id = %notification.result_id,
            subject = %email.subject,
            "No email provider configured, skipping results email"
        );
        tracing::debug!(body = %email.text, "Results email body");
        Ok(())
    }
}

/// Picks the Resend notifier when an API key is configured.
pub fn from_config(config: &Config) -> Arc<dyn Notifier> {
    match &config.resend_api_key {
        Some(key) => Arc::new(ResendNotifier::new(
            key.clone(),
            config.email_from.clone(),
            config.public_base_url.clone(),
        )),
        None => {
            tracing::warn!("RESEND_API_KEY not set, results emails will only be logged");
            Arc::new(LogNotifier::new(config.public_base_url.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{AnswerMap, score};

    fn notification() -> ResultsNotification {
        ResultsNotification {
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            result_id: Uuid::nil(),
            result: score(&AnswerMap::from([(0, 5), (1, 4)])),
        }
    }

    #[test]
    fn render_links_to_the_stored_result() {
        let base = Url::parse("https://courageprofile.com").unwrap();
        let email = notification().render(&base).unwrap();
        assert!(email.text.contains(&format!(
            "https://courageprofile.com/results/{}",
            Uuid::nil()
        )));
        assert!(email.html.contains("🦁 The Lion"));
    }

    #[tokio::test]
    async fn log_notifier_never_fails() {
        let notifier = LogNotifier::new(Url::parse("https://courageprofile.com").unwrap());
        assert!(notifier.send_results(&notification()).await.is_ok());
    }

    #[tokio::test]
    async fn resend_notifier_reports_unreachable_provider() {
        let notifier = ResendNotifier::new(
            "key".to_string(),
            "Quiz <quiz@example.com>".to_string(),
            Url::parse("https://courageprofile.com").unwrap(),
        )
        .with_endpoint("http://127.0.0.1:9/emails");

        let err = notifier.send_results(&notification()).await.unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }
}
