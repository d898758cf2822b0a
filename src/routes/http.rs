//! HTTP endpoint handlers. These are thin wrappers that forward to the
//! content pipeline and the static catalogs. Each handler is instrumented
//! and logs parameters and basic result info.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, instrument, warn};

use crate::catalog::{course_topics, mock_users};
use crate::content;
use crate::domain::{tally_score, IeltsModule, Level};
use crate::markdown;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

#[instrument(level = "info")]
pub async fn http_get_users() -> impl IntoResponse {
  Json(UsersOut { users: mock_users() })
}

#[instrument(level = "info")]
pub async fn http_get_catalog() -> impl IntoResponse {
  let courses = Level::ALL
    .iter()
    .map(|&level| CourseLevelOut { level, topics: course_topics(level) })
    .collect();
  Json(CatalogOut { courses, ielts_modules: IeltsModule::ALL.to_vec() })
}

#[instrument(level = "info", skip(state, body), fields(level = %body.level, topic = %body.topic.title))]
pub async fn http_post_lesson(
  State(state): State<Arc<AppState>>,
  Json(body): Json<LessonIn>,
) -> impl IntoResponse {
  let out = content::generate_lesson(&state.gemini, &state.prompts, body.level, &body.topic).await;
  if out.is_fallback() {
    warn!(target: "content", topic = %body.topic.title, "Lesson served from fallback");
  } else {
    info!(target: "content", topic = %body.topic.title, len = out.value().len(), "Lesson served");
  }
  let markdown = out.into_value();
  let blocks = markdown::render(&markdown);
  Json(ContentOut { markdown, blocks })
}

#[instrument(level = "info", skip(state, body), fields(level = %body.level, topic = %body.topic.title))]
pub async fn http_post_quiz(
  State(state): State<Arc<AppState>>,
  Json(body): Json<QuizIn>,
) -> impl IntoResponse {
  let out = content::generate_quiz(&state.gemini, &state.prompts, body.level, &body.topic).await;
  if out.is_fallback() {
    warn!(target: "content", topic = %body.topic.title, "Quiz unavailable; serving empty list");
  } else {
    info!(target: "content", topic = %body.topic.title, questions = out.value().len(), "Quiz served");
  }
  Json(QuizOut { questions: out.into_value() })
}

#[instrument(level = "info", skip(body), fields(questions = body.questions.len(), answered = body.answers.len()))]
pub async fn http_post_quiz_score(Json(body): Json<ScoreIn>) -> impl IntoResponse {
  let score = tally_score(&body.questions, &body.answers);
  info!(target: "content", score, total = body.questions.len(), "Quiz scored");
  Json(ScoreOut { score, total: body.questions.len() })
}

#[instrument(level = "info", skip(state, body), fields(module = %body.module, topic_len = body.topic.len()))]
pub async fn http_post_prep(
  State(state): State<Arc<AppState>>,
  Json(body): Json<PrepIn>,
) -> impl IntoResponse {
  // Input validation happens here, before any service request is made.
  if body.topic.trim().is_empty() {
    warn!(target: "content", module = %body.module, "Prep request rejected: empty topic");
    return (
      StatusCode::UNPROCESSABLE_ENTITY,
      Json(ErrorOut { message: "Please select a module and enter a topic.".into() }),
    )
      .into_response();
  }

  let out = content::generate_prep(&state.gemini, &state.prompts, body.module, &body.topic).await;
  if out.is_fallback() {
    warn!(target: "content", module = %body.module, "Prep served from fallback");
  } else {
    info!(target: "content", module = %body.module, len = out.value().len(), "Prep served");
  }
  let markdown = out.into_value();
  let blocks = markdown::render(&markdown);
  Json(ContentOut { markdown, blocks }).into_response()
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::body::Body;
  use axum::http::Request;
  use tower::ServiceExt;

  fn test_router() -> axum::Router {
    // The key only has to be present; these tests never reach the network.
    std::env::set_var("GEMINI_API_KEY", "test-key");
    crate::routes::build_router(Arc::new(AppState::from_env().unwrap()))
  }

  fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
      .method("POST")
      .uri(uri)
      .header("content-type", "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
  }

  #[tokio::test]
  async fn health_responds_ok() {
    let res = test_router()
      .oneshot(Request::builder().uri("/api/v1/health").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn catalog_lists_all_levels_and_modules() {
    let res = test_router()
      .oneshot(Request::builder().uri("/api/v1/catalog").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["courses"].as_array().unwrap().len(), 3);
    assert_eq!(v["ieltsModules"].as_array().unwrap().len(), 4);
  }

  #[tokio::test]
  async fn empty_prep_topic_is_rejected_before_any_service_call() {
    let res = test_router()
      .oneshot(post_json("/api/v1/prep", r#"{"module":"Writing","topic":"   "}"#))
      .await
      .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["message"], "Please select a module and enter a topic.");
  }

  #[tokio::test]
  async fn score_endpoint_tallies_answers() {
    let body = r#"{
      "questions": [
        {"question": "q0", "options": ["a","b","c","d"], "correctAnswer": "a"},
        {"question": "q1", "options": ["a","b","c","d"], "correctAnswer": "b"},
        {"question": "q2", "options": ["a","b","c","d"], "correctAnswer": "c"},
        {"question": "q3", "options": ["a","b","c","d"], "correctAnswer": "d"},
        {"question": "q4", "options": ["a","b","c","d"], "correctAnswer": "a"}
      ],
      "answers": {"0": "a", "1": "a", "2": "c", "3": "a"}
    }"#;
    let res = test_router().oneshot(post_json("/api/v1/quiz/score", body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["score"], 2);
    assert_eq!(v["total"], 5);
  }
}
