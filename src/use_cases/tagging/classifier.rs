use anyhow::{anyhow, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use super::vocabulary::VOCABULARY;

const OPENAI_API_URL: &str = "https://api.openai.com/v1";
const CLASSIFIER_MODEL: &str = "gpt-3.5-turbo";

/// Suggests tags for a grant through a remote chat-completion service.
/// Constructed only when a credential is configured; every failure mode is
/// absorbed into an empty suggestion list.
#[derive(Clone)]
pub struct RemoteClassifier {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl RemoteClassifier {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: reqwest::Client::new(),
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub async fn classify(&self, name: &str, description: &str) -> Vec<String> {
        match self.request_tags(name, description).await {
            Ok(tags) => tags,
            Err(e) => {
                event!(target: "backend", Level::WARN, "Remote tag classification failed: {:?}", e);
                Vec::new()
            }
        }
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn request_tags(&self, name: &str, description: &str) -> Result<Vec<String>> {
        let request = ChatRequest {
            model: CLASSIFIER_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(name, description),
            }],
            max_tokens: 200,
            temperature: 0.3,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("classifier API error ({}): {}", status, error_text));
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("empty classifier response"))?;

        parse_tag_array(&content)
    }
}

fn build_prompt(name: &str, description: &str) -> String {
    format!(
        "Analyze this grant and assign relevant tags from the predefined list.\n\
         \n\
         Grant Name: {}\n\
         Grant Description: {}\n\
         \n\
         Available Tags: {}\n\
         \n\
         Return only the most relevant tags (3-8 tags) as a JSON array.\n\
         Only use tags from the predefined list above.\n\
         Focus on the main themes and purposes of the grant.\n\
         \n\
         Example format: [\"agriculture\", \"education\", \"research\"]",
        name,
        description,
        VOCABULARY.join(", ")
    )
}

fn parse_tag_array(text: &str) -> Result<Vec<String>> {
    let cleaned = text.replace("```json", "").replace("```", "");
    match serde_json::from_str::<serde_json::Value>(cleaned.trim())? {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()),
        _ => Err(anyhow!("classifier response is not a JSON array")),
    }
}
