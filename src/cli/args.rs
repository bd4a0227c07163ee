// src/cli/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (default: <config dir>/lessondesk/config.toml)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List lessons from a saved API response
    Lessons {
        /// JSON list response (envelope or bare array)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Case-insensitive substring of the lesson title
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        standard: Option<String>,

        #[arg(long)]
        course: Option<String>,

        /// Page to show, out-of-range pages are ignored
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output the derived page as JSON
        #[arg(long)]
        json: bool,
    },

    /// List graded questions (question bank)
    Questions {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        #[arg(long)]
        standard: Option<String>,

        /// easy, medium or hard
        #[arg(long)]
        difficulty: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        json: bool,
    },

    /// List practice problems
    Practice {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Case-insensitive substring of the question title
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        standard: Option<String>,

        #[arg(long)]
        course: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        json: bool,
    },

    /// Add a comma-separated batch of skill tags to a tag set
    Tags {
        /// Tags already on the record, comma-separated
        #[arg(short, long, value_name = "TAGS")]
        existing: Option<String>,

        /// Record kind whose tag count limits apply
        #[arg(long = "for", value_enum, default_value_t = TagTarget::Lesson)]
        target: TagTarget,

        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Render a question as an HTML page with typeset math
    Preview {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        #[arg(value_name = "QUESTION_ID")]
        question_id: i64,

        /// Write to this file instead of a temp file
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Open the page in the browser
        #[arg(long)]
        open: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagTarget {
    Lesson,
    Question,
}
