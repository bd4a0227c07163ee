// src/application/mod.rs
pub mod cache;
pub mod draft;
pub mod filter;
pub mod list_view;
pub mod paginator;
pub mod screen;
pub mod source;

pub use cache::{CacheTag, Mutation, Query, QueryCache};
pub use draft::{Difficulty, LessonDraft, QuestionDraft, QuestionType, TagLimits};
pub use filter::{FilterState, Filterable};
pub use list_view::{ListPage, ListStatus, ListView, ViewSettings};
pub use paginator::{PageLink, PageState};
pub use screen::{LessonField, QuestionField};
pub use source::RecordSource;
