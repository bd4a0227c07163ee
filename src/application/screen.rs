// src/application/screen.rs
//
// Filter schemas of the lesson and question records, and the list screens
// built from them.
use crate::application::draft::QuestionType;
use crate::application::filter::{FilterField, Filterable, MatchMode};
use crate::application::list_view::{ListView, ViewSettings};
use crate::domain::{Lesson, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LessonField {
    Standard,
    Course,
    /// Lesson title.
    Search,
}

impl FilterField for LessonField {
    fn mode(self) -> MatchMode {
        match self {
            LessonField::Search => MatchMode::Contains,
            LessonField::Standard | LessonField::Course => MatchMode::Exact,
        }
    }
}

impl Filterable for Lesson {
    type Field = LessonField;

    fn field_value(&self, field: LessonField) -> &str {
        match field {
            LessonField::Standard => &self.standard_title,
            LessonField::Course => &self.course_title,
            LessonField::Search => &self.lesson_title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QuestionField {
    Standard,
    Course,
    Difficulty,
    QuestionType,
    /// Question title.
    Search,
}

impl FilterField for QuestionField {
    fn mode(self) -> MatchMode {
        match self {
            QuestionField::Search => MatchMode::Contains,
            _ => MatchMode::Exact,
        }
    }
}

impl Filterable for Question {
    type Field = QuestionField;

    fn field_value(&self, field: QuestionField) -> &str {
        match field {
            QuestionField::Standard => &self.standard_title,
            QuestionField::Course => &self.course_title,
            QuestionField::Difficulty => &self.difficulty_level,
            QuestionField::QuestionType => &self.question_type,
            QuestionField::Search => &self.question_title,
        }
    }
}

/// "My Lessons": every lesson of the creator.
pub fn lessons_view(settings: ViewSettings) -> ListView<Lesson> {
    ListView::new(settings)
}

/// Question bank: graded questions only.
pub fn question_bank_view(settings: ViewSettings) -> ListView<Question> {
    ListView::new(settings).with_fixed(QuestionField::QuestionType, QuestionType::Actual.as_str())
}

/// Practice problems: practice questions only.
pub fn practice_view(settings: ViewSettings) -> ListView<Question> {
    ListView::new(settings)
        .with_fixed(QuestionField::QuestionType, QuestionType::Practice.as_str())
}
