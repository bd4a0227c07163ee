// src/application/draft.rs
//
// Lesson and question drafts as edited in the authoring forms, with the
// submission checks the forms apply before calling the API.
use crate::constants::MAX_TAG_LENGTH;
use crate::domain::{Course, DraftError, Lesson, Question, Standard, TagSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static ONLY_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid digits pattern"));
static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s]+$").expect("valid alphanumeric pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestionType {
    #[default]
    Practice,
    Actual,
}

impl QuestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Practice => "Practice",
            QuestionType::Actual => "Actual",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnswerType {
    #[default]
    #[serde(rename = "Short Answer")]
    Short,
    #[serde(rename = "Long Answer")]
    Long,
}

/// Tag count bounds for one record kind. `max = None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLimits {
    pub min: usize,
    pub max: Option<usize>,
    pub max_len: usize,
}

impl TagLimits {
    pub fn lesson() -> Self {
        Self {
            min: 3,
            max: Some(5),
            max_len: MAX_TAG_LENGTH,
        }
    }

    pub fn question() -> Self {
        Self {
            min: 2,
            max: None,
            max_len: MAX_TAG_LENGTH,
        }
    }

    /// Count rules `count` tags break, empty when within bounds.
    pub fn violations(&self, count: usize) -> Vec<DraftError> {
        let mut errors = Vec::new();
        self.check(count, &mut errors);
        errors
    }

    fn check(&self, count: usize, errors: &mut Vec<DraftError>) {
        if count < self.min {
            errors.push(DraftError::TooFewTags {
                min: self.min,
                actual: count,
            });
        }
        if let Some(max) = self.max {
            if count > max {
                errors.push(DraftError::TooManyTags { max, actual: count });
            }
        }
    }
}

/// Body of a lesson create/update request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonRequest {
    pub lesson_title: String,
    pub lesson_description: String,
    pub lesson_header: String,
    pub lesson_file: String,
    pub course_id: i64,
    pub standard_id: i64,
    pub skill_tags: Vec<String>,
    pub is_published: bool,
}

#[derive(Debug, Clone)]
pub struct LessonDraft {
    pub standard: String,
    pub course: String,
    pub title: String,
    pub description: String,
    pub header_url: String,
    /// Extracted text of the uploaded lesson document.
    pub lesson_file: String,
    pub publish: bool,
    pub tags: TagSet,
    limits: TagLimits,
}

impl LessonDraft {
    pub fn new(limits: TagLimits) -> Self {
        Self {
            standard: String::new(),
            course: String::new(),
            title: String::new(),
            description: String::new(),
            header_url: String::new(),
            lesson_file: String::new(),
            publish: false,
            tags: TagSet::with_max_len(limits.max_len),
            limits,
        }
    }

    /// Draft for editing a persisted lesson.
    pub fn from_lesson(lesson: &Lesson, limits: TagLimits) -> Self {
        Self {
            standard: lesson.standard_title.clone(),
            course: lesson.course_title.clone(),
            title: lesson.lesson_title.clone(),
            description: lesson.lesson_description.clone(),
            header_url: lesson.lesson_header.clone(),
            lesson_file: lesson.lesson_file.clone(),
            publish: lesson.is_published.unwrap_or(false),
            tags: TagSet::with_max_len(limits.max_len).with_persisted(lesson.skill_tags.clone()),
            limits,
        }
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn validate(&self) -> Result<(), Vec<DraftError>> {
        let mut errors = Vec::new();
        required("Standard", &self.standard, &mut errors);
        not_only_digits("Standard", &self.standard, &mut errors);
        required("Course", &self.course, &mut errors);
        not_only_digits("Course", &self.course, &mut errors);
        length("Lesson title", &self.title, 1, 100, &mut errors);
        alphanumeric("Lesson title", &self.title, &mut errors);
        not_only_digits("Lesson title", &self.title, &mut errors);
        length("Lesson description", &self.description, 1, 100, &mut errors);
        not_only_digits("Lesson description", &self.description, &mut errors);
        required("Header image", &self.header_url, &mut errors);
        self.limits.check(self.tag_count(), &mut errors);
        finish(errors)
    }

    /// Validate and resolve course/standard titles to API ids.
    pub fn to_request(
        &self,
        courses: &[Course],
        standards: &[Standard],
    ) -> Result<LessonRequest, Vec<DraftError>> {
        self.validate()?;
        let (course_id, standard_id) = resolve_ids(&self.course, &self.standard, courses, standards)?;
        Ok(LessonRequest {
            lesson_title: self.title.clone(),
            lesson_description: self.description.clone(),
            lesson_header: self.header_url.clone(),
            lesson_file: self.lesson_file.clone(),
            course_id,
            standard_id,
            skill_tags: self.tags.values(),
            is_published: self.publish,
        })
    }
}

/// Body of a question create/update request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionRequest {
    pub question_title: String,
    pub question_description: String,
    pub status: String,
    pub difficulty_level: Difficulty,
    pub question_type: QuestionType,
    pub answer_type: AnswerType,
    pub solution_file: String,
    pub standard_id: i64,
    pub course_id: i64,
    pub lesson_id: i64,
    pub skill_tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub standard: String,
    pub course: String,
    pub lesson: String,
    pub difficulty: Difficulty,
    pub title: String,
    pub description: String,
    pub question_type: QuestionType,
    pub answer_type: AnswerType,
    pub answer: String,
    pub tags: TagSet,
    limits: TagLimits,
}

impl QuestionDraft {
    pub fn new(limits: TagLimits) -> Self {
        Self {
            standard: String::new(),
            course: String::new(),
            lesson: String::new(),
            difficulty: Difficulty::default(),
            title: String::new(),
            description: String::new(),
            question_type: QuestionType::default(),
            answer_type: AnswerType::default(),
            answer: String::new(),
            tags: TagSet::with_max_len(limits.max_len),
            limits,
        }
    }

    /// Draft for editing a persisted question. Unknown API values fall back
    /// to the form defaults.
    pub fn from_question(question: &Question, limits: TagLimits) -> Self {
        let question_type = if question.question_type == QuestionType::Actual.as_str() {
            QuestionType::Actual
        } else {
            QuestionType::Practice
        };
        let answer_type = if question.answer_type == "Long Answer" {
            AnswerType::Long
        } else {
            AnswerType::Short
        };
        Self {
            standard: question.standard_title.clone(),
            course: question.course_title.clone(),
            lesson: question.lesson_title.clone(),
            difficulty: Difficulty::parse(&question.difficulty_level).unwrap_or_default(),
            title: question.question_title.clone(),
            description: question.question_description.clone(),
            question_type,
            answer_type,
            answer: question.solution_file.clone(),
            tags: TagSet::with_max_len(limits.max_len).with_persisted(question.skill_tags.clone()),
            limits,
        }
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn validate(&self) -> Result<(), Vec<DraftError>> {
        let mut errors = Vec::new();
        required("Standard", &self.standard, &mut errors);
        required("Course", &self.course, &mut errors);
        required("Lesson", &self.lesson, &mut errors);
        length("Question title", &self.title, 30, 45, &mut errors);
        length("Question description", &self.description, 1, 250, &mut errors);
        length("Answer", &self.answer, 1, 50, &mut errors);
        self.limits.check(self.tag_count(), &mut errors);
        finish(errors)
    }

    pub fn to_request(
        &self,
        courses: &[Course],
        standards: &[Standard],
        lessons: &[Lesson],
    ) -> Result<QuestionRequest, Vec<DraftError>> {
        self.validate()?;
        let (course_id, standard_id) = resolve_ids(&self.course, &self.standard, courses, standards)?;
        let lesson_id = lessons
            .iter()
            .find(|l| l.lesson_title == self.lesson)
            .map(|l| l.lesson_id)
            .ok_or_else(|| {
                vec![DraftError::UnknownReference {
                    field: "lesson",
                    value: self.lesson.clone(),
                }]
            })?;
        Ok(QuestionRequest {
            question_title: self.title.clone(),
            question_description: self.description.clone(),
            status: "Draft".to_string(),
            difficulty_level: self.difficulty,
            question_type: self.question_type,
            answer_type: self.answer_type,
            solution_file: self.answer.clone(),
            standard_id,
            course_id,
            lesson_id,
            skill_tags: self.tags.values(),
        })
    }
}

fn required(field: &'static str, value: &str, errors: &mut Vec<DraftError>) {
    if value.trim().is_empty() {
        errors.push(DraftError::Missing(field));
    }
}

fn length(field: &'static str, value: &str, min: usize, max: usize, errors: &mut Vec<DraftError>) {
    let actual = value.chars().count();
    if actual < min || actual > max {
        errors.push(DraftError::Length {
            field,
            min,
            max,
            actual,
        });
    }
}

fn not_only_digits(field: &'static str, value: &str, errors: &mut Vec<DraftError>) {
    if ONLY_DIGITS.is_match(value) {
        errors.push(DraftError::OnlyDigits(field));
    }
}

/// Empty values are left to the required/length checks.
fn alphanumeric(field: &'static str, value: &str, errors: &mut Vec<DraftError>) {
    if !value.is_empty() && !ALPHANUMERIC.is_match(value) {
        errors.push(DraftError::InvalidCharacters(field));
    }
}

fn finish(errors: Vec<DraftError>) -> Result<(), Vec<DraftError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        debug!(?errors, "Draft rejected");
        Err(errors)
    }
}

fn resolve_ids(
    course: &str,
    standard: &str,
    courses: &[Course],
    standards: &[Standard],
) -> Result<(i64, i64), Vec<DraftError>> {
    let course_id = courses
        .iter()
        .find(|c| c.course_title == course)
        .map(|c| c.course_id);
    let standard_id = standards
        .iter()
        .find(|s| s.standard_title == standard)
        .map(|s| s.standard_id);

    match (course_id, standard_id) {
        (Some(c), Some(s)) => Ok((c, s)),
        (c, s) => {
            let mut errors = Vec::new();
            if c.is_none() {
                errors.push(DraftError::UnknownReference {
                    field: "course",
                    value: course.to_string(),
                });
            }
            if s.is_none() {
                errors.push(DraftError::UnknownReference {
                    field: "standard",
                    value: standard.to_string(),
                });
            }
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{course, lesson, standard};

    fn valid_lesson_draft() -> LessonDraft {
        let mut draft = LessonDraft::new(TagLimits::lesson());
        draft.standard = "K1".to_string();
        draft.course = "Algebra".to_string();
        draft.title = "Linear equations".to_string();
        draft.description = "Solving for x".to_string();
        draft.header_url = "https://img.example/header.png".to_string();
        draft.tags.add_tags("alg, linear, eq").unwrap();
        draft
    }

    fn valid_question_draft() -> QuestionDraft {
        let mut draft = QuestionDraft::new(TagLimits::question());
        draft.standard = "K1".to_string();
        draft.course = "Algebra".to_string();
        draft.lesson = "Linear equations".to_string();
        draft.title = "How many feet are in one mile, roughly?".to_string();
        draft.description = "1 mile = ? feet".to_string();
        draft.answer = "5280".to_string();
        draft.tags.add_tags("units, length").unwrap();
        draft
    }

    #[test]
    fn given_complete_lesson_draft_when_validating_then_ok() {
        assert!(valid_lesson_draft().validate().is_ok());
    }

    #[test]
    fn given_empty_lesson_draft_when_validating_then_reports_every_rule() {
        let draft = LessonDraft::new(TagLimits::lesson());

        let errors = draft.validate().unwrap_err();

        assert!(errors.contains(&DraftError::Missing("Standard")));
        assert!(errors.contains(&DraftError::Missing("Course")));
        assert!(errors.contains(&DraftError::Missing("Header image")));
        assert!(errors.contains(&DraftError::TooFewTags { min: 3, actual: 0 }));
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn given_numeric_and_symbol_fields_when_validating_lesson_then_rejects_each() {
        let mut draft = valid_lesson_draft();
        draft.standard = "123".to_string();
        draft.course = "456".to_string();
        draft.title = "Fractions & ratios!!".to_string();
        draft.description = "789".to_string();

        let errors = draft.validate().unwrap_err();

        assert_eq!(
            errors,
            vec![
                DraftError::OnlyDigits("Standard"),
                DraftError::OnlyDigits("Course"),
                DraftError::InvalidCharacters("Lesson title"),
                DraftError::OnlyDigits("Lesson description"),
            ]
        );
    }

    #[test]
    fn given_digit_only_title_when_validating_lesson_then_only_digits_error() {
        let mut draft = valid_lesson_draft();
        draft.title = "2024".to_string();

        let errors = draft.validate().unwrap_err();

        assert_eq!(errors, vec![DraftError::OnlyDigits("Lesson title")]);
    }

    #[test]
    fn given_title_with_digits_and_spaces_when_validating_lesson_then_ok() {
        let mut draft = valid_lesson_draft();
        draft.title = "Unit 3 Fractions".to_string();

        assert!(draft.validate().is_ok());
    }

    #[test]
    fn given_tag_counts_when_checking_lesson_limits_then_reports_violations() {
        let limits = TagLimits::lesson();

        assert!(limits.violations(4).is_empty());
        assert_eq!(
            limits.violations(2),
            vec![DraftError::TooFewTags { min: 3, actual: 2 }]
        );
    }

    #[test]
    fn given_six_tags_when_validating_lesson_then_too_many() {
        let mut draft = valid_lesson_draft();
        draft.tags.add_tags("a, b, c").unwrap();

        let errors = draft.validate().unwrap_err();

        assert_eq!(errors, vec![DraftError::TooManyTags { max: 5, actual: 6 }]);
    }

    #[test]
    fn given_short_question_title_when_validating_then_length_error() {
        let mut draft = valid_question_draft();
        draft.title = "Too short".to_string();

        let errors = draft.validate().unwrap_err();

        assert_eq!(
            errors,
            vec![DraftError::Length {
                field: "Question title",
                min: 30,
                max: 45,
                actual: 9,
            }]
        );
    }

    #[test]
    fn given_known_references_when_building_lesson_request_then_resolves_ids() {
        let draft = valid_lesson_draft();

        let request = draft
            .to_request(&[course(4, "Algebra")], &[standard(9, "K1")])
            .unwrap();

        assert_eq!(request.course_id, 4);
        assert_eq!(request.standard_id, 9);
        assert_eq!(request.skill_tags, vec!["alg", "linear", "eq"]);
        assert!(!request.is_published);
    }

    #[test]
    fn given_unknown_course_when_building_request_then_reports_reference() {
        let draft = valid_lesson_draft();

        let errors = draft
            .to_request(&[course(4, "Geometry")], &[standard(9, "K1")])
            .unwrap_err();

        assert_eq!(
            errors,
            vec![DraftError::UnknownReference {
                field: "course",
                value: "Algebra".to_string(),
            }]
        );
    }

    #[test]
    fn given_question_draft_when_building_request_then_serializes_api_values() {
        let mut draft = valid_question_draft();
        draft.difficulty = Difficulty::Hard;
        draft.question_type = QuestionType::Actual;

        let request = draft
            .to_request(
                &[course(4, "Algebra")],
                &[standard(9, "K1")],
                &[lesson(12, "Linear equations", "K1", "Algebra")],
            )
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["lesson_id"], 12);
        assert_eq!(json["difficulty_level"], "hard");
        assert_eq!(json["question_type"], "Actual");
        assert_eq!(json["answer_type"], "Short Answer");
    }

    #[test]
    fn given_persisted_lesson_when_editing_then_seeds_tags() {
        let mut persisted = lesson(1, "Fractions", "K1", "Arithmetic");
        persisted.skill_tags = vec!["frac".to_string(), "num".to_string()];

        let mut draft = LessonDraft::from_lesson(&persisted, TagLimits::lesson());

        assert_eq!(draft.tag_count(), 2);
        assert!(draft.tags.add_tags("FRAC").is_err());
    }

    #[test]
    fn given_mixed_case_difficulty_when_parsing_then_accepts() {
        assert_eq!(Difficulty::parse("Medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("extreme"), None);
    }
}
