//! Loading prompt templates from TOML.
//!
//! The defaults are the production prompts; a TOML file pointed to by
//! PROMPTS_CONFIG_PATH can override any of them to tune tone/structure
//! without a rebuild.

use serde::Deserialize;
use tracing::{error, info};

/// Prompt templates used by the content pipeline. Placeholders use the
/// `{key}` convention understood by `util::fill_template`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  /// Placeholders: {level}, {topic_title}, {topic_description}
  pub lesson_template: String,
  /// Placeholders: {level}, {topic_title}
  pub quiz_template: String,
  /// Placeholders: {module}, {topic}
  pub prep_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      lesson_template: r#"You are an expert English language teacher. Generate a comprehensive and engaging lesson for an English learner at the "{level}" level.
The topic is "{topic_title}: {topic_description}".

The lesson should be structured clearly and formatted using Markdown. Include the following sections:
1.  **Introduction**: Briefly introduce the topic and why it's important.
2.  **Explanation**: Provide a clear explanation of the grammar point or vocabulary. Use simple language appropriate for the learner's level.
3.  **Examples**: Give at least 3-5 clear example sentences.
4.  **Practice Exercise**: Create a short, simple exercise (e.g., fill in the blanks, create a sentence) to help the learner practice.
5.  **Conclusion**: Briefly summarize the key points.

Use Markdown for formatting:
- Use '##' for main section headings.
- Use '**' for bold text to highlight key terms.
- Use '*' for bullet points.
"#
      .into(),
      quiz_template: r#"Based on the English language topic "{topic_title}" for a "{level}" level learner, create a multiple-choice quiz with 5 questions.
Each question should test understanding of the core concepts of the topic.
For each question, provide 4 options, where only one is correct.
Return the data in a clear JSON format.
"#
      .into(),
      prep_template: r#"You are a senior IELTS examiner. Provide expert preparation material for the **IELTS {module}** test.
The specific topic is "{topic}".

Your response should be comprehensive, practical, and formatted in Markdown. Include the following:
1.  **Module Overview**: Briefly explain the format and objective of the {module} test.
2.  **Key Strategies**: Provide 3-5 actionable tips and strategies specific to this module and topic.
3.  **Topic-Specific Vocabulary**: List 5-7 advanced vocabulary words or phrases related to "{topic}" with simple definitions.
4.  **Practice Task**: Create a realistic IELTS-style practice task based on the module and topic.
5.  **Model Answer/Example**: Provide a high-scoring model answer or example for the practice task.

Use Markdown for clear formatting.
"#
      .into(),
    }
  }
}

/// Attempt to load `Prompts` from PROMPTS_CONFIG_PATH. On any parsing/IO
/// error, returns None and the caller falls back to the defaults.
pub fn load_prompts_from_env() -> Option<Prompts> {
  let path = std::env::var("PROMPTS_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<Prompts>(&s) {
      Ok(p) => {
        info!(target: "englify_backend", %path, "Loaded prompt config (TOML)");
        Some(p)
      }
      Err(e) => {
        error!(target: "englify_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "englify_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
