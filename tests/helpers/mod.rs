use anyhow::{Context, Result};
use lessondesk::infrastructure::Config;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const STANDARDS: [&str; 3] = ["K1", "K2", "K3"];
const COURSES: [&str; 2] = ["Arithmetic", "Geometry"];
const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

/// Test fixture holding saved API list responses in a temp directory
#[allow(dead_code)]
pub struct TestSnapshots {
    _temp_dir: TempDir,
    pub lessons_path: PathBuf,
    pub questions_path: PathBuf,
    pub empty_path: PathBuf,
    pub dir: PathBuf,
}

impl TestSnapshots {
    /// 23 lessons and 20 questions (odd ids Practice, even ids Actual)
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let dir = temp_dir.path().to_path_buf();

        let lessons: Vec<Value> = (1..=23).map(lesson_json).collect();
        let questions: Vec<Value> = (1..=20).map(question_json).collect();

        let lessons_path = dir.join("lessons.json");
        write_envelope(&lessons_path, "lessons", lessons)?;
        let questions_path = dir.join("questions.json");
        write_envelope(&questions_path, "questions", questions)?;
        let empty_path = dir.join("empty.json");
        write_envelope(&empty_path, "lessons", Vec::new())?;

        Ok(Self {
            _temp_dir: temp_dir,
            lessons_path,
            questions_path,
            empty_path,
            dir,
        })
    }

    pub fn missing_path(&self) -> PathBuf {
        self.dir.join("missing.json")
    }
}

fn write_envelope(path: &Path, key: &str, records: Vec<Value>) -> Result<()> {
    let mut envelope = json!({
        "total": records.len(),
        "page": 1,
        "size": 50,
    });
    envelope[key] = Value::Array(records);
    std::fs::write(path, serde_json::to_string_pretty(&envelope)?)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Lesson 5 is "Fractions in Geometry"; all others are "Lesson {id}"
pub fn lesson_json(id: usize) -> Value {
    let title = if id == 5 {
        "Fractions in Geometry".to_string()
    } else {
        format!("Lesson {:02}", id)
    };
    json!({
        "lesson_id": id,
        "lesson_title": title,
        "lesson_description": format!("<p>Description of lesson {}</p>", id),
        "lesson_file": "",
        "lesson_header": "https://img.example/header.png",
        "standard_title": STANDARDS[id % STANDARDS.len()],
        "course_title": COURSES[id % COURSES.len()],
        "skill_tags": ["add", "sub", "mul"],
        "status": "Draft",
        "is_published": id % 4 == 0,
        "user_id": "kp_test",
        "created_at": "2025-01-01T00:00:00"
    })
}

pub fn question_json(id: usize) -> Value {
    json!({
        "question_id": id,
        "question_title": format!("How many feet are in {} miles?", id),
        "question_description": format!("{} \\times 5280", id),
        "status": "Draft",
        "difficulty_level": DIFFICULTIES[id % DIFFICULTIES.len()],
        "question_type": if id % 2 == 1 { "Practice" } else { "Actual" },
        "answer_type": "Short Answer",
        "solution_file": format!("{} feet", id * 5280),
        "lesson_title": "Units",
        "course_title": COURSES[id % COURSES.len()],
        "standard_title": STANDARDS[id % STANDARDS.len()],
        "skill_tags": ["units", "length"],
        "image_url": null,
        "user_id": "kp_test",
        "created_at": "2025-01-01T00:00:00"
    })
}

#[allow(dead_code)]
pub fn config_with_page_size(items_per_page: usize) -> Config {
    let mut config = Config::default();
    config.list.items_per_page = items_per_page;
    config
}
