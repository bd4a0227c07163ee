// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::screen::{lessons_view, practice_view, question_bank_view};
use crate::application::source::{find_by_id, refresh};
use crate::application::{
    Difficulty, Filterable, LessonField, ListStatus, ListView, QuestionField,
};
use crate::cli::args::{Args, Command, TagTarget};
use crate::domain::{Question, TagSet};
use crate::infrastructure::{Config, JsonSnapshot, PreviewWriter};
use crate::ports::{HtmlPresenter, TableRow, TextPresenter};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, instrument};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting lessondesk with arguments");

    let config = Config::resolve(args.config.as_deref())?;
    let output = execute(args.command, &config)?;
    println!("{}", output);

    Ok(())
}

/// Run one command against `config` and return what it prints.
#[instrument(level = "debug", skip(config))]
pub fn execute(command: Command, config: &Config) -> Result<String> {
    let settings = config.view_settings()?;

    match command {
        Command::Lessons {
            snapshot,
            search,
            standard,
            course,
            page,
            json,
        } => {
            let mut view = lessons_view(settings);
            let filters = [
                (LessonField::Search, search),
                (LessonField::Standard, standard),
                (LessonField::Course, course),
            ];
            list(&mut view, &snapshot, filters, page, json)
        }
        Command::Questions {
            snapshot,
            standard,
            difficulty,
            page,
            json,
        } => {
            let difficulty = difficulty
                .map(|d| {
                    Difficulty::parse(&d)
                        .map(|d| d.as_str().to_string())
                        .ok_or_else(|| anyhow!("Unknown difficulty '{}', expected easy, medium or hard", d))
                })
                .transpose()?;
            let mut view = question_bank_view(settings);
            let filters = [
                (QuestionField::Standard, standard),
                (QuestionField::Difficulty, difficulty),
            ];
            list(&mut view, &snapshot, filters, page, json)
        }
        Command::Practice {
            snapshot,
            search,
            standard,
            course,
            page,
            json,
        } => {
            let mut view = practice_view(settings);
            let filters = [
                (QuestionField::Search, search),
                (QuestionField::Standard, standard),
                (QuestionField::Course, course),
            ];
            list(&mut view, &snapshot, filters, page, json)
        }
        Command::Tags {
            existing,
            target,
            input,
        } => add_tags(config, target, existing.as_deref(), &input),
        Command::Preview {
            snapshot,
            question_id,
            out,
            open,
        } => preview(&snapshot, question_id, out.as_deref(), open),
    }
}

fn list<R, const N: usize>(
    view: &mut ListView<R>,
    snapshot: &Path,
    filters: [(R::Field, Option<String>); N],
    page: usize,
    json: bool,
) -> Result<String>
where
    R: Filterable + TableRow + Serialize,
    JsonSnapshot: application::RecordSource<R>,
{
    let mut source = JsonSnapshot::new(snapshot);
    refresh(view, &mut source);

    for (field, value) in filters {
        if value.is_some() {
            view.on_filter_change(field, value.as_deref());
        }
    }
    view.change_page(page);

    let derived = view.derive();
    info!(
        status = ?derived.status,
        total = derived.total_items,
        page = derived.current_page,
        "Derived list page"
    );

    if derived.status == ListStatus::Failed {
        return Err(anyhow!(TextPresenter::new().render(&derived, view.error())));
    }
    if json {
        return serde_json::to_string_pretty(&derived).context("Failed to serialize list page");
    }
    Ok(TextPresenter::new().render(&derived, view.error()))
}

fn add_tags(
    config: &Config,
    target: TagTarget,
    existing: Option<&str>,
    input: &str,
) -> Result<String> {
    let limits = match target {
        TagTarget::Lesson => config.lesson_limits(),
        TagTarget::Question => config.question_limits(),
    };
    let persisted = existing
        .map(|e| {
            e.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    let mut tags = TagSet::with_max_len(limits.max_len).with_persisted(persisted);

    let added = tags.add_tags(input)?;
    info!(added = added.len(), total = tags.len(), ?target, "Added tags");

    let presenter = TextPresenter::new();
    Ok(format!(
        "{}\n{}",
        presenter.render_tags(&tags),
        presenter.render_tag_count(tags.len(), &limits)
    ))
}

fn preview(snapshot: &Path, question_id: i64, out: Option<&Path>, open: bool) -> Result<String> {
    let mut source = JsonSnapshot::new(snapshot);
    let question = find_by_id(&mut source, question_id, |q: &Question| q.question_id)?;
    debug!(?question, "Retrieved question");

    let html = HtmlPresenter::new().render(&question);
    let writer = PreviewWriter::new();
    let path = writer.write(&html, out)?;

    if open {
        info!(question_id, "Opening preview");
        writer.open_in_browser(&path)?;
    }

    Ok(path.display().to_string())
}
