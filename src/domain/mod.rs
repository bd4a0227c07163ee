// src/domain/mod.rs
pub mod error;
pub mod record;
pub mod tag;

pub use error::{DomainError, DraftError, ValidationError};
pub use record::{Course, Lesson, Question, Standard, User, UserStats};
pub use tag::{Tag, TagSet};
