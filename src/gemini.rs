//! Minimal Gemini client for our use-cases.
//!
//! We only call `models/{model}:generateContent` and request either plain text
//! or schema-constrained JSON. Calls are instrumented and log model names,
//! latencies, and response sizes (not contents).
//!
//! NOTE: We never log the API key and we keep payload truncations short.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct Gemini {
  pub client: reqwest::Client,
  api_key: String,
  pub base_url: String,
  pub model: String,
}

impl Gemini {
  /// Construct the client from env. A missing GEMINI_API_KEY is an error;
  /// the caller treats it as fatal at startup.
  pub fn from_env() -> Result<Self, String> {
    let api_key = std::env::var("GEMINI_API_KEY")
      .map_err(|_| "GEMINI_API_KEY environment variable not set".to_string())?;
    let base_url = std::env::var("GEMINI_BASE_URL")
      .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());
    let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into());

    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(20))
      .build()
      .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

    Ok(Self { client, api_key, base_url, model })
  }

  /// Free-text completion mode: returns the model's text output as-is.
  #[instrument(level = "info", skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
  pub async fn generate_text(&self, prompt: &str) -> Result<String, String> {
    self.generate(prompt, None).await
  }

  /// Schema-constrained JSON mode: asks the service for `application/json`
  /// output conforming to `schema`, and returns the raw response text.
  /// Parsing into a domain type is the caller's job.
  #[instrument(level = "info", skip(self, prompt, schema), fields(model = %self.model, prompt_len = prompt.len()))]
  pub async fn generate_json(&self, prompt: &str, schema: Value) -> Result<String, String> {
    let config = GenerationConfig {
      response_mime_type: Some("application/json".into()),
      response_schema: Some(schema),
    };
    self.generate(prompt, Some(config)).await
  }

  async fn generate(
    &self,
    prompt: &str,
    generation_config: Option<GenerationConfig>,
  ) -> Result<String, String> {
    let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
    let req = GenerateContentRequest {
      contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
      generation_config,
    };

    let res = self
      .client
      .post(&url)
      .header(USER_AGENT, "englify-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header("x-goog-api-key", &self.api_key)
      .json(&req)
      .send()
      .await
      .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_gemini_error(&body).unwrap_or(body);
      return Err(format!("Gemini HTTP {}: {}", status, msg));
    }

    let body: GenerateContentResponse = res.json().await.map_err(|e| e.to_string())?;
    if let Some(usage) = &body.usage_metadata {
      info!(
        prompt_tokens = ?usage.prompt_token_count,
        candidate_tokens = ?usage.candidates_token_count,
        total_tokens = ?usage.total_token_count,
        "Gemini usage"
      );
    }

    let text = body
      .candidates
      .into_iter()
      .next()
      .map(|c| {
        c.content
          .parts
          .into_iter()
          .filter_map(|p| p.text)
          .collect::<Vec<_>>()
          .join("")
      })
      .unwrap_or_default();

    info!(response_len = text.len(), "Gemini response received");
    Ok(text)
  }
}

// --- Wire DTOs ---

#[derive(Serialize)]
struct GenerateContentRequest {
  contents: Vec<Content>,
  #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
  generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
  parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
  text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
  #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
  response_mime_type: Option<String>,
  #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
  response_schema: Option<Value>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
  #[serde(rename = "usageMetadata", default)]
  usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
  content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
  #[serde(default)]
  parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
  #[serde(default)]
  text: Option<String>,
}

#[derive(Deserialize)]
struct UsageMetadata {
  #[serde(rename = "promptTokenCount", default)]
  prompt_token_count: Option<u32>,
  #[serde(rename = "candidatesTokenCount", default)]
  candidates_token_count: Option<u32>,
  #[serde(rename = "totalTokenCount", default)]
  total_token_count: Option<u32>,
}

/// Try to extract a clean error message from a Gemini error body.
fn extract_gemini_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap {
    error: EObj,
  }
  #[derive(Deserialize)]
  struct EObj {
    message: String,
  }
  match serde_json::from_str::<EWrap>(body) {
    Ok(w) => Some(w.error.message),
    Err(_) => None,
  }
}
