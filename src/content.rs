//! Content request pipeline: prompt construction, Gemini invocation, and
//! response normalization for lessons, quizzes, and IELTS prep material.
//!
//! Every operation here is total. A service failure of any kind (network,
//! HTTP error, malformed payload) is logged and converted into a fixed
//! fallback value, so callers never need their own error handling. The
//! `Outcome` wrapper keeps success and fallback distinguishable for logging
//! and tests without string-matching the fallback text.

use serde_json::{json, Value};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::config::Prompts;
use crate::domain::{CourseTopic, IeltsModule, Level, QuizQuestion};
use crate::gemini::Gemini;
use crate::util::{fill_template, trunc_for_log};

pub const LESSON_FALLBACK: &str =
  "Sorry, I couldn't generate the lesson at this moment. Please try again later.";
pub const PREP_FALLBACK: &str =
  "Sorry, I couldn't generate the IELTS material right now. Please try again.";

/// Result of a pipeline operation. Both variants carry a displayable value;
/// `Fallback` means the service call failed and the fixed substitute was used.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
  Generated(T),
  Fallback(T),
}

impl<T> Outcome<T> {
  pub fn value(&self) -> &T {
    match self {
      Outcome::Generated(v) | Outcome::Fallback(v) => v,
    }
  }

  pub fn into_value(self) -> T {
    match self {
      Outcome::Generated(v) | Outcome::Fallback(v) => v,
    }
  }

  pub fn is_fallback(&self) -> bool {
    matches!(self, Outcome::Fallback(_))
  }
}

/// Generate a five-section Markdown lesson for `level`/`topic`.
/// Returns the model text verbatim on success; the apology string on failure.
#[instrument(level = "info", skip(gemini, prompts), fields(%level, topic = %topic.title))]
pub async fn generate_lesson(
  gemini: &Gemini,
  prompts: &Prompts,
  level: Level,
  topic: &CourseTopic,
) -> Outcome<String> {
  let request_id = Uuid::new_v4();
  let prompt = fill_template(
    &prompts.lesson_template,
    &[
      ("level", level.as_str()),
      ("topic_title", &topic.title),
      ("topic_description", &topic.description),
    ],
  );

  let start = std::time::Instant::now();
  let result = gemini.generate_text(&prompt).await;
  let elapsed = start.elapsed();
  info!(target: "content", %request_id, ?elapsed, ok = result.is_ok(), "Lesson generation finished");

  lesson_outcome(result, request_id)
}

/// Generate a 5-question multiple-choice quiz for `level`/`topic`.
/// Returns an empty sequence on any failure; callers treat empty as
/// "nothing to display", not as a distinct error state.
#[instrument(level = "info", skip(gemini, prompts), fields(%level, topic = %topic.title))]
pub async fn generate_quiz(
  gemini: &Gemini,
  prompts: &Prompts,
  level: Level,
  topic: &CourseTopic,
) -> Outcome<Vec<QuizQuestion>> {
  let request_id = Uuid::new_v4();
  let prompt = fill_template(
    &prompts.quiz_template,
    &[("level", level.as_str()), ("topic_title", &topic.title)],
  );

  let start = std::time::Instant::now();
  let result = gemini.generate_json(&prompt, quiz_response_schema()).await;
  let elapsed = start.elapsed();
  info!(target: "content", %request_id, ?elapsed, ok = result.is_ok(), "Quiz generation finished");

  quiz_outcome(result, request_id)
}

/// Generate IELTS preparation material for `module` on a free-text `topic`.
/// Same total-function contract as `generate_lesson`.
#[instrument(level = "info", skip(gemini, prompts, topic), fields(%module, topic_len = topic.len()))]
pub async fn generate_prep(
  gemini: &Gemini,
  prompts: &Prompts,
  module: IeltsModule,
  topic: &str,
) -> Outcome<String> {
  let request_id = Uuid::new_v4();
  let prompt = fill_template(
    &prompts.prep_template,
    &[("module", module.as_str()), ("topic", topic)],
  );

  let start = std::time::Instant::now();
  let result = gemini.generate_text(&prompt).await;
  let elapsed = start.elapsed();
  info!(target: "content", %request_id, ?elapsed, ok = result.is_ok(), "Prep generation finished");

  prep_outcome(result, request_id)
}

// -------- Pure normalization seams (unit-tested without a live client) --------

fn lesson_outcome(result: Result<String, String>, request_id: Uuid) -> Outcome<String> {
  text_outcome(result, LESSON_FALLBACK, "lesson", request_id)
}

fn prep_outcome(result: Result<String, String>, request_id: Uuid) -> Outcome<String> {
  text_outcome(result, PREP_FALLBACK, "prep", request_id)
}

fn text_outcome(
  result: Result<String, String>,
  fallback: &str,
  what: &'static str,
  request_id: Uuid,
) -> Outcome<String> {
  match result {
    Ok(text) => Outcome::Generated(text),
    Err(e) => {
      error!(target: "content", %request_id, what, error = %e, "Generation failed; returning fallback text");
      Outcome::Fallback(fallback.to_string())
    }
  }
}

fn quiz_outcome(result: Result<String, String>, request_id: Uuid) -> Outcome<Vec<QuizQuestion>> {
  let raw = match result {
    Ok(raw) => raw,
    Err(e) => {
      error!(target: "content", %request_id, error = %e, "Quiz generation failed; returning empty quiz");
      return Outcome::Fallback(Vec::new());
    }
  };

  match parse_quiz_payload(&raw) {
    Ok(questions) => Outcome::Generated(questions),
    Err(e) => {
      error!(
        target: "content",
        %request_id,
        error = %e,
        payload = %trunc_for_log(&raw, 200),
        "Quiz payload unparseable; returning empty quiz"
      );
      Outcome::Fallback(Vec::new())
    }
  }
}

/// Parse the structured quiz payload: trim, strip an optional Markdown code
/// fence, then decode the question array.
pub fn parse_quiz_payload(raw: &str) -> Result<Vec<QuizQuestion>, String> {
  let cleaned = strip_code_fence(raw);
  serde_json::from_str::<Vec<QuizQuestion>>(cleaned).map_err(|e| format!("JSON parse error: {}", e))
}

/// The service sometimes wraps structured output in a Markdown code fence even
/// when asked for raw JSON. Strip a leading literal "```json" and a trailing
/// literal "```" from the trimmed payload; either may be absent. Fences in the
/// middle of the payload are not handled.
pub fn strip_code_fence(raw: &str) -> &str {
  let mut s = raw.trim();
  if let Some(rest) = s.strip_prefix("```json") {
    s = rest.trim_start();
  }
  if let Some(rest) = s.strip_suffix("```") {
    s = rest.trim_end();
  }
  s
}

/// Response schema for schema-constrained quiz generation: an array of
/// objects with required `question`, `options`, `correctAnswer` fields.
fn quiz_response_schema() -> Value {
  json!({
    "type": "ARRAY",
    "items": {
      "type": "OBJECT",
      "properties": {
        "question": { "type": "STRING" },
        "options": { "type": "ARRAY", "items": { "type": "STRING" } },
        "correctAnswer": { "type": "STRING" }
      },
      "required": ["question", "options", "correctAnswer"]
    }
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const QUIZ_JSON: &str = r#"[
    {"question": "Pick the present simple form.", "options": ["go", "went", "gone", "going"], "correctAnswer": "go"},
    {"question": "Which word is a greeting?", "options": ["hello", "table", "run", "blue"], "correctAnswer": "hello"}
  ]"#;

  fn rid() -> Uuid {
    Uuid::new_v4()
  }

  #[test]
  fn fenced_and_bare_payloads_parse_identically() {
    let fenced = format!("```json\n{}\n```", QUIZ_JSON);
    let a = parse_quiz_payload(&fenced).unwrap();
    let b = parse_quiz_payload(QUIZ_JSON).unwrap();
    assert_eq!(a.len(), b.len());
    assert_eq!(a[0].correct_answer, b[0].correct_answer);
    assert_eq!(a[1].options, b[1].options);
  }

  #[test]
  fn fence_stripping_tolerates_absent_markers() {
    assert_eq!(strip_code_fence("[1,2]"), "[1,2]");
    assert_eq!(strip_code_fence("```json\n[1,2]\n```"), "[1,2]");
    // Trailing fence alone is also removed.
    assert_eq!(strip_code_fence("[1,2]\n```"), "[1,2]");
  }

  #[test]
  fn leading_whitespace_before_fence_is_handled() {
    assert_eq!(strip_code_fence("  \n```json\n[]\n```  "), "[]");
  }

  #[test]
  fn malformed_payload_yields_empty_fallback() {
    let out = quiz_outcome(Ok("this is not json".into()), rid());
    assert!(out.is_fallback());
    assert!(out.value().is_empty());
  }

  #[test]
  fn service_error_yields_empty_fallback() {
    let out = quiz_outcome(Err("Gemini HTTP 500: boom".into()), rid());
    assert!(out.is_fallback());
    assert!(out.value().is_empty());
  }

  #[test]
  fn successful_quiz_is_marked_generated() {
    let out = quiz_outcome(Ok(QUIZ_JSON.into()), rid());
    assert!(!out.is_fallback());
    assert_eq!(out.value().len(), 2);
  }

  #[test]
  fn lesson_failure_returns_fixed_apology() {
    let out = lesson_outcome(Err("timeout".into()), rid());
    assert!(out.is_fallback());
    assert_eq!(out.value(), LESSON_FALLBACK);
  }

  #[test]
  fn prep_failure_returns_fixed_apology() {
    let out = prep_outcome(Err("connection refused".into()), rid());
    assert!(out.is_fallback());
    assert_eq!(out.value(), PREP_FALLBACK);
  }

  #[test]
  fn successful_text_is_returned_verbatim() {
    let text = "## Introduction\nWelcome.";
    let out = lesson_outcome(Ok(text.into()), rid());
    assert!(!out.is_fallback());
    assert_eq!(out.value(), text);
  }

  #[test]
  fn quiz_schema_requires_all_three_fields() {
    let schema = quiz_response_schema();
    assert_eq!(schema["type"], "ARRAY");
    let required = schema["items"]["required"].as_array().unwrap();
    assert_eq!(required.len(), 3);
  }
}
