// src/domain/record.rs
//
// Records as delivered by the content API. Field names follow the API's
// JSON so snapshots deserialize without renames.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub lesson_id: i64,
    pub lesson_title: String,
    #[serde(default)]
    pub lesson_description: String,
    #[serde(default)]
    pub lesson_file: String,
    #[serde(default)]
    pub lesson_header: String,
    pub standard_title: String,
    pub course_title: String,
    #[serde(default)]
    pub skill_tags: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: i64,
    pub question_title: String,
    #[serde(default)]
    pub question_description: String,
    #[serde(default)]
    pub status: String,
    pub difficulty_level: String,
    /// "Practice" or "Actual".
    pub question_type: String,
    #[serde(default)]
    pub answer_type: String,
    #[serde(default)]
    pub solution_file: String,
    #[serde(default)]
    pub lesson_title: String,
    pub course_title: String,
    pub standard_title: String,
    #[serde(default)]
    pub skill_tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: i64,
    pub course_title: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standard {
    pub standard_id: i64,
    pub standard_title: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub account_type: String,
    #[serde(default)]
    pub profile_picture_url: String,
    #[serde(default)]
    pub total_question: Option<u64>,
    #[serde(default)]
    pub total_lesson: Option<u64>,
}

/// Counters shown on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub practice_questions: u64,
    pub actual_questions: u64,
    pub total_lessons: u64,
    pub published_lessons: u64,
}

impl UserStats {
    pub fn total_questions(&self) -> u64 {
        self.practice_questions + self.actual_questions
    }

    pub fn draft_lessons(&self) -> u64 {
        self.total_lessons.saturating_sub(self.published_lessons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_api_question_json_when_deserializing_then_reads_fields() {
        let json = r#"{
            "question_id": 7,
            "user_id": "kp_1",
            "question_title": "How many feet are in a mile?",
            "question_description": "x^2",
            "status": "Draft",
            "difficulty_level": "easy",
            "question_type": "Actual",
            "answer_type": "Short Answer",
            "solution_file": "",
            "created_at": "2025-01-01",
            "updated_at": null,
            "lesson_title": "Units",
            "course_title": "Algebra",
            "standard_title": "K2",
            "skill_tags": ["units", "length"],
            "image_url": null
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();

        assert_eq!(question.question_id, 7);
        assert_eq!(question.skill_tags, vec!["units", "length"]);
        assert_eq!(question.image_url, None);
    }

    #[test]
    fn given_minimal_lesson_json_when_deserializing_then_defaults_optional_fields() {
        let json = r#"{
            "lesson_id": 1,
            "lesson_title": "Fractions",
            "standard_title": "K1",
            "course_title": "Arithmetic"
        }"#;

        let lesson: Lesson = serde_json::from_str(json).unwrap();

        assert!(lesson.skill_tags.is_empty());
        assert_eq!(lesson.is_published, None);
    }

    #[test]
    fn given_stats_when_deriving_totals_then_sums_and_subtracts() {
        let stats = UserStats {
            practice_questions: 4,
            actual_questions: 6,
            total_lessons: 5,
            published_lessons: 2,
        };

        assert_eq!(stats.total_questions(), 10);
        assert_eq!(stats.draft_lessons(), 3);
    }
}
