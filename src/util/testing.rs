// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::RecordSource;
use crate::domain::{Course, DomainError, Lesson, Question, Standard};

/// Shared mock source for tests of views and use cases that fetch records.
///
/// # Examples
///
/// ```
/// use lessondesk::application::RecordSource;
/// use lessondesk::util::testing::{lesson, MockRecordSource};
///
/// let mut source = MockRecordSource::builder()
///     .with_record(lesson(1, "Fractions", "K1", "Arithmetic"))
///     .build();
/// assert_eq!(source.fetch().unwrap().len(), 1);
/// ```
pub struct MockRecordSource<R> {
    records: Vec<R>,
    failure: Option<String>,
    fetches: usize,
}

impl<R> MockRecordSource<R> {
    pub fn builder() -> MockRecordSourceBuilder<R> {
        MockRecordSourceBuilder::new()
    }

    /// Number of fetches served so far.
    pub fn fetches(&self) -> usize {
        self.fetches
    }
}

impl<R: Clone> RecordSource<R> for MockRecordSource<R> {
    fn fetch(&mut self) -> Result<Vec<R>, DomainError> {
        self.fetches += 1;
        match &self.failure {
            Some(message) => Err(DomainError::SourceUnavailable(message.clone())),
            None => Ok(self.records.clone()),
        }
    }
}

/// Builder for MockRecordSource
pub struct MockRecordSourceBuilder<R> {
    records: Vec<R>,
    failure: Option<String>,
}

impl<R> MockRecordSourceBuilder<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            failure: None,
        }
    }

    pub fn with_record(mut self, record: R) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_records(mut self, records: impl IntoIterator<Item = R>) -> Self {
        self.records.extend(records);
        self
    }

    /// Make every fetch fail with SourceUnavailable
    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn build(self) -> MockRecordSource<R> {
        MockRecordSource {
            records: self.records,
            failure: self.failure,
            fetches: 0,
        }
    }
}

impl<R> Default for MockRecordSourceBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn lesson(id: i64, title: &str, standard: &str, course: &str) -> Lesson {
    Lesson {
        lesson_id: id,
        lesson_title: title.to_string(),
        lesson_description: format!("About {}", title),
        lesson_file: String::new(),
        lesson_header: String::new(),
        standard_title: standard.to_string(),
        course_title: course.to_string(),
        skill_tags: vec![],
        status: "Draft".to_string(),
        is_published: None,
        user_id: "kp_test".to_string(),
        created_at: "2025-01-01T00:00:00".to_string(),
        updated_at: None,
        deleted_at: None,
    }
}

pub fn question(id: i64, question_type: &str, difficulty: &str) -> Question {
    Question {
        question_id: id,
        question_title: format!("How many feet are in a mile? {}", id),
        question_description: "1 mile = 5280 feet".to_string(),
        status: "Draft".to_string(),
        difficulty_level: difficulty.to_string(),
        question_type: question_type.to_string(),
        answer_type: "Short Answer".to_string(),
        solution_file: String::new(),
        lesson_title: "Units".to_string(),
        course_title: "Geometry".to_string(),
        standard_title: "K2".to_string(),
        skill_tags: vec!["units".to_string()],
        image_url: None,
        user_id: "kp_test".to_string(),
        created_at: "2025-01-01T00:00:00".to_string(),
        updated_at: None,
    }
}

pub fn course(id: i64, title: &str) -> Course {
    Course {
        course_id: id,
        course_title: title.to_string(),
        user_id: "kp_test".to_string(),
        created_at: String::new(),
        updated_at: None,
        deleted_at: None,
    }
}

pub fn standard(id: i64, title: &str) -> Standard {
    Standard {
        standard_id: id,
        standard_title: title.to_string(),
        created_at: String::new(),
        updated_at: None,
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let noisy_modules = ["proptest"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
