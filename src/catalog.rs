//! Static data consumed read-only by the API: the mock user directory and the
//! per-level course catalog. These mirror the seeded content the SPA was built
//! around and are never mutated at runtime.

use crate::domain::{CourseTopic, Level, User};

fn topic(title: &str, description: &str) -> CourseTopic {
  CourseTopic { title: title.into(), description: description.into() }
}

/// The mock user directory shown on the login screen.
pub fn mock_users() -> Vec<User> {
  vec![
    User {
      id: 1,
      name: "Alex Johnson".into(),
      avatar: "https://i.pravatar.cc/150?u=alex".into(),
      level: Level::Intermediate,
    },
    User {
      id: 2,
      name: "Maria Garcia".into(),
      avatar: "https://i.pravatar.cc/150?u=maria".into(),
      level: Level::Beginner,
    },
    User {
      id: 3,
      name: "Kenji Tanaka".into(),
      avatar: "https://i.pravatar.cc/150?u=kenji".into(),
      level: Level::Advanced,
    },
    User {
      id: 4,
      name: "Fatima Ahmed".into(),
      avatar: "https://i.pravatar.cc/150?u=fatima".into(),
      level: Level::Intermediate,
    },
  ]
}

/// Course topics offered at a given proficiency level.
pub fn course_topics(level: Level) -> Vec<CourseTopic> {
  match level {
    Level::Beginner => vec![
      topic(
        "Greetings and Introductions",
        "Learn basic ways to greet people and introduce yourself.",
      ),
      topic(
        "Present Simple Tense",
        "Understand and use the present simple for routines and facts.",
      ),
      topic(
        "Basic Vocabulary: Family",
        "Learn common words to describe your family members.",
      ),
      topic(
        "Asking Questions",
        "Form simple questions using \"do\", \"be\", and question words.",
      ),
    ],
    Level::Intermediate => vec![
      topic(
        "Present Perfect vs. Past Simple",
        "Differentiate between actions completed in the past.",
      ),
      topic(
        "Conditionals (First and Second)",
        "Talk about real and hypothetical situations.",
      ),
      topic(
        "Vocabulary: Travel & Tourism",
        "Expand your vocabulary for discussing travel.",
      ),
      topic(
        "Modal Verbs of Obligation",
        "Use must, have to, and should correctly.",
      ),
    ],
    Level::Advanced => vec![
      topic(
        "Third and Mixed Conditionals",
        "Master complex hypothetical situations in the past.",
      ),
      topic(
        "Passive Voice in Various Tenses",
        "Understand and use the passive voice for formal writing.",
      ),
      topic(
        "Vocabulary: Business & Finance",
        "Learn professional vocabulary for the workplace.",
      ),
      topic(
        "Reported Speech",
        "Accurately report what other people have said.",
      ),
    ],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_level_has_four_topics_with_titles() {
    for level in Level::ALL {
      let topics = course_topics(level);
      assert_eq!(topics.len(), 4);
      assert!(topics.iter().all(|t| !t.title.is_empty()));
    }
  }

  #[test]
  fn mock_users_have_unique_ids() {
    let users = mock_users();
    assert_eq!(users.len(), 4);
    let mut ids: Vec<u32> = users.iter().map(|u| u.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 4);
  }
}
