//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CourseTopic, IeltsModule, Level, QuizQuestion, User};
use crate::markdown::Block;

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct UsersOut {
    pub users: Vec<User>,
}

/// Course topics for one proficiency level.
#[derive(Serialize)]
pub struct CourseLevelOut {
    pub level: Level,
    pub topics: Vec<CourseTopic>,
}

#[derive(Serialize)]
pub struct CatalogOut {
    pub courses: Vec<CourseLevelOut>,
    #[serde(rename = "ieltsModules")]
    pub ielts_modules: Vec<IeltsModule>,
}

#[derive(Debug, Deserialize)]
pub struct LessonIn {
    pub level: Level,
    pub topic: CourseTopic,
}

/// Lesson/prep delivery: the raw Markdown plus the pre-rendered block
/// sequence so the front-end does not re-parse it.
#[derive(Serialize)]
pub struct ContentOut {
    pub markdown: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Deserialize)]
pub struct QuizIn {
    pub level: Level,
    pub topic: CourseTopic,
}

#[derive(Serialize)]
pub struct QuizOut {
    pub questions: Vec<QuizQuestion>,
}

/// Score tally request: the quiz as delivered plus the user's answers keyed
/// by question index. Unanswered indices are simply absent.
#[derive(Debug, Deserialize)]
pub struct ScoreIn {
    pub questions: Vec<QuizQuestion>,
    pub answers: HashMap<usize, String>,
}

#[derive(Serialize)]
pub struct ScoreOut {
    pub score: usize,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct PrepIn {
    pub module: IeltsModule,
    pub topic: String,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}
