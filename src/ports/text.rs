// src/ports/text.rs
use crate::application::{ListPage, ListStatus, PageLink, TagLimits};
use crate::domain::{Lesson, Question, TagSet};
use crate::util::text::{description_preview, truncate};
use std::fmt::Write;

const TITLE_WIDTH: usize = 40;
const DESCRIPTION_WIDTH: usize = 50;

/// Columns a record contributes to a list table.
pub trait TableRow {
    /// Plural noun used in empty-state messages.
    const NOUN: &'static str;

    fn id(&self) -> i64;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn course(&self) -> &str;
    fn standard(&self) -> &str;
    fn tags(&self) -> &[String];
}

impl TableRow for Lesson {
    const NOUN: &'static str = "lessons";

    fn id(&self) -> i64 {
        self.lesson_id
    }
    fn title(&self) -> &str {
        &self.lesson_title
    }
    fn description(&self) -> &str {
        &self.lesson_description
    }
    fn course(&self) -> &str {
        &self.course_title
    }
    fn standard(&self) -> &str {
        &self.standard_title
    }
    fn tags(&self) -> &[String] {
        &self.skill_tags
    }
}

impl TableRow for Question {
    const NOUN: &'static str = "questions";

    fn id(&self) -> i64 {
        self.question_id
    }
    fn title(&self) -> &str {
        &self.question_title
    }
    fn description(&self) -> &str {
        &self.question_description
    }
    fn course(&self) -> &str {
        &self.course_title
    }
    fn standard(&self) -> &str {
        &self.standard_title
    }
    fn tags(&self) -> &[String] {
        &self.skill_tags
    }
}

#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Plain-text table for one derived page, or the matching empty state.
    pub fn render<R: TableRow>(&self, page: &ListPage<'_, R>, error: Option<&str>) -> String {
        match page.status {
            ListStatus::Loading => "Loading...".to_string(),
            ListStatus::Failed => format!(
                "Could not load {}: {}",
                R::NOUN,
                error.unwrap_or("unknown error")
            ),
            ListStatus::Empty => format!("You have no {} yet. Create one to get started.", R::NOUN),
            ListStatus::NoMatches => format!(
                "No {} match the current filters. Try adjusting your search.",
                R::NOUN
            ),
            ListStatus::Ready => self.render_table(page),
        }
    }

    fn render_table<R: TableRow>(&self, page: &ListPage<'_, R>) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>6}  {:<w$}  {:<16}  {:<8}  {}",
            "ID",
            "TITLE",
            "COURSE",
            "STANDARD",
            "TAGS",
            w = TITLE_WIDTH + 3
        );
        for record in &page.items {
            let _ = writeln!(
                out,
                "{:>6}  {:<w$}  {:<16}  {:<8}  {}",
                record.id(),
                truncate(record.title(), TITLE_WIDTH),
                truncate(record.course(), 13),
                record.standard(),
                record.tags().join(", "),
                w = TITLE_WIDTH + 3
            );
            let preview = description_preview(record.description(), DESCRIPTION_WIDTH);
            if !preview.is_empty() {
                let _ = writeln!(out, "{:>6}  {}", "", preview);
            }
        }
        let _ = writeln!(
            out,
            "\nShowing {}-{} of {}",
            page.start_item, page.end_item, page.total_items
        );
        if page.total_pages > 1 {
            let _ = write!(out, "Pages: {}", self.page_strip(&page.page_numbers, page.current_page));
        }
        out.trim_end().to_string()
    }

    /// `1 … 8 9 [10] 11 12 … 20`
    pub fn page_strip(&self, links: &[PageLink], current: usize) -> String {
        links
            .iter()
            .map(|link| match link {
                PageLink::Number(n) if *n == current => format!("[{}]", n),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render_tags(&self, tags: &TagSet) -> String {
        if tags.is_empty() {
            return "No tags".to_string();
        }
        tags.iter()
            .enumerate()
            .map(|(i, tag)| format!("{}. {}", i + 1, tag.value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One line: the count, its bounds, then "ok" or the broken rules.
    pub fn render_tag_count(&self, count: usize, limits: &TagLimits) -> String {
        let bounds = match limits.max {
            Some(max) => format!("min {}, max {}", limits.min, max),
            None => format!("min {}", limits.min),
        };
        let violations = limits.violations(count);
        let verdict = if violations.is_empty() {
            "ok".to_string()
        } else {
            violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };
        format!("{} tags ({}): {}", count, bounds, verdict)
    }
}
