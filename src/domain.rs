//! Domain models shared across the backend: proficiency levels, course topics,
//! IELTS modules, users, and quiz questions.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Learner proficiency level. Serialized with the capitalized names the
/// front-end and the course catalog use ("Beginner", ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
  Beginner,
  Intermediate,
  Advanced,
}

impl Level {
  pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

  pub fn as_str(&self) -> &'static str {
    match self {
      Level::Beginner => "Beginner",
      Level::Intermediate => "Intermediate",
      Level::Advanced => "Advanced",
    }
  }
}

impl fmt::Display for Level {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One entry in the static course catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CourseTopic {
  pub title: String,
  pub description: String,
}

/// The four IELTS test modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IeltsModule {
  Listening,
  Reading,
  Writing,
  Speaking,
}

impl IeltsModule {
  pub const ALL: [IeltsModule; 4] = [
    IeltsModule::Listening,
    IeltsModule::Reading,
    IeltsModule::Writing,
    IeltsModule::Speaking,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      IeltsModule::Listening => "Listening",
      IeltsModule::Reading => "Reading",
      IeltsModule::Writing => "Writing",
      IeltsModule::Speaking => "Speaking",
    }
  }
}

impl fmt::Display for IeltsModule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Entry in the mock user directory, consumed read-only by the login surface.
#[derive(Clone, Debug, Serialize)]
pub struct User {
  pub id: u32,
  pub name: String,
  pub avatar: String,
  pub level: Level,
}

/// One multiple-choice question as returned by the quiz generator.
/// `correct_answer` is trusted to equal one of `options` verbatim; we do not
/// validate or normalize it locally (service-enforced contract).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuizQuestion {
  pub question: String,
  pub options: Vec<String>,
  #[serde(rename = "correctAnswer")]
  pub correct_answer: String,
}

/// Tally a quiz score: one point per question whose recorded answer equals
/// `correct_answer` by literal string equality. Unanswered questions score
/// zero. Keys in `answers` are question indices.
pub fn tally_score(questions: &[QuizQuestion], answers: &HashMap<usize, String>) -> usize {
  questions.iter().enumerate().fold(0, |score, (index, q)| {
    match answers.get(&index) {
      Some(a) if *a == q.correct_answer => score + 1,
      _ => score,
    }
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn quiz() -> Vec<QuizQuestion> {
    (0..5)
      .map(|i| QuizQuestion {
        question: format!("Question {}", i),
        options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        correct_answer: "a".into(),
      })
      .collect()
  }

  #[test]
  fn score_counts_only_exact_matches() {
    let questions = quiz();
    let mut answers = HashMap::new();
    answers.insert(0, "a".to_string()); // correct
    answers.insert(1, "b".to_string()); // wrong
    answers.insert(2, "a".to_string()); // correct
    answers.insert(3, "c".to_string()); // wrong
    // question 4 unanswered
    assert_eq!(tally_score(&questions, &answers), 2);
  }

  #[test]
  fn score_is_literal_equality_no_normalization() {
    let questions = quiz();
    let mut answers = HashMap::new();
    answers.insert(0, "A".to_string()); // case differs, scores as wrong
    answers.insert(1, "a ".to_string()); // trailing space, scores as wrong
    assert_eq!(tally_score(&questions, &answers), 0);
  }

  #[test]
  fn score_of_empty_quiz_is_zero() {
    assert_eq!(tally_score(&[], &HashMap::new()), 0);
  }

  #[test]
  fn level_serde_uses_capitalized_names() {
    let s = serde_json::to_string(&Level::Intermediate).unwrap();
    assert_eq!(s, "\"Intermediate\"");
    let back: Level = serde_json::from_str("\"Advanced\"").unwrap();
    assert_eq!(back, Level::Advanced);
  }
}
