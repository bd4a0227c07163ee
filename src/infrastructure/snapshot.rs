// src/infrastructure/snapshot.rs
use crate::application::RecordSource;
use crate::domain::{Course, DomainError, Lesson, Question, Standard};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Records that arrive wrapped in an API list envelope under a fixed key.
pub trait EnvelopeKey {
    const KEY: &'static str;
}

impl EnvelopeKey for Lesson {
    const KEY: &'static str = "lessons";
}

impl EnvelopeKey for Question {
    const KEY: &'static str = "questions";
}

impl EnvelopeKey for Course {
    const KEY: &'static str = "courses";
}

impl EnvelopeKey for Standard {
    const KEY: &'static str = "standards";
}

/// Paging header of a list response. The client ignores it for slicing
/// but it is logged for comparison against the local count.
#[derive(Debug, Default, Deserialize)]
struct EnvelopeHeader {
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    page: Option<u64>,
    #[serde(default)]
    size: Option<u64>,
}

/// A saved list response on disk, re-read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn read<R>(&self) -> Result<Vec<R>, DomainError>
    where
        R: EnvelopeKey + DeserializeOwned,
    {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::SourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        parse_envelope(&content)
    }
}

impl<R> RecordSource<R> for JsonSnapshot
where
    R: EnvelopeKey + DeserializeOwned,
{
    fn fetch(&mut self) -> Result<Vec<R>, DomainError> {
        self.read()
    }
}

/// Accepts either the full envelope or a bare array of records.
pub fn parse_envelope<R>(content: &str) -> Result<Vec<R>, DomainError>
where
    R: EnvelopeKey + DeserializeOwned,
{
    let value: Value = serde_json::from_str(content)
        .map_err(|e| DomainError::SourceUnavailable(format!("invalid JSON: {}", e)))?;

    let records = match value {
        Value::Array(_) => value,
        Value::Object(ref map) => {
            let header: EnvelopeHeader =
                serde_json::from_value(value.clone()).unwrap_or_default();
            debug!(
                total = ?header.total,
                page = ?header.page,
                size = ?header.size,
                "Envelope header"
            );
            map.get(R::KEY).cloned().ok_or_else(|| {
                DomainError::SourceUnavailable(format!("response has no \"{}\" list", R::KEY))
            })?
        }
        _ => {
            return Err(DomainError::SourceUnavailable(
                "expected a list response".to_string(),
            ))
        }
    };

    serde_json::from_value(records)
        .map_err(|e| DomainError::SourceUnavailable(format!("malformed {}: {}", R::KEY, e)))
}
