// src/report/share.rs

use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::models::category::Category;

const TWITTER_INTENT_URL: &str = "https://twitter.com/intent/tweet";
const LINKEDIN_SHARE_URL: &str = "https://www.linkedin.com/sharing/share-offsite/";

/// Everything a results page needs to offer sharing.
#[derive(Debug, Clone, Serialize)]
pub struct ShareLinks {
    pub text: String,
    /// Landing page of the quiz.
    pub quiz_url: String,
    /// Public link to this respondent's top two, when the result was stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
    pub twitter_url: String,
    pub linkedin_url: String,
}

/// "I'm a The Lion + The Owl — my Courage Signature. Discover yours at"
pub fn share_text(top_two: [Category; 2]) -> String {
    format!(
        "I'm a {} + {} — my Courage Signature. Discover yours at",
        top_two[0].archetype().title,
        top_two[1].archetype().title
    )
}

/// `{base}/results/{result_id}`, keeping any path prefix on `base`.
pub fn result_url(base: &Url, result_id: Uuid) -> Result<Url, url::ParseError> {
    let mut root = base.clone();
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    root.join(&format!("results/{result_id}"))
}

pub fn twitter_intent_url(text: &str, target: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(TWITTER_INTENT_URL, &[("text", text), ("url", target)])
}

pub fn linkedin_share_url(target: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(LINKEDIN_SHARE_URL, &[("url", target)])
}

pub fn share_links(
    base: &Url,
    top_two: [Category; 2],
    result_id: Option<Uuid>,
) -> Result<ShareLinks, url::ParseError> {
    let text = share_text(top_two);
    let quiz_url = base.as_str().to_string();
    let result_url = result_id
        .map(|id| result_url(base, id).map(String::from))
        .transpose()?;

    Ok(ShareLinks {
        twitter_url: twitter_intent_url(&text, &quiz_url)?.into(),
        linkedin_url: linkedin_share_url(&quiz_url)?.into(),
        text,
        quiz_url,
        result_url,
    })
}
