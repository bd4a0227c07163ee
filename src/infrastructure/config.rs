// src/infrastructure/config.rs
use crate::application::{TagLimits, ViewSettings};
use crate::constants::{ITEMS_PER_PAGE, MAX_TAG_LENGTH, PAGE_DELTA};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// TOML configuration for list screens and authoring forms
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub tags: TagConfig,
    #[serde(default)]
    pub lesson: LessonConfig,
    #[serde(default)]
    pub question: QuestionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ListConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    #[serde(default = "default_page_delta")]
    pub page_delta: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TagConfig {
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LessonConfig {
    #[serde(default = "default_lesson_min_tags")]
    pub min_tags: usize,
    #[serde(default = "default_lesson_max_tags")]
    pub max_tags: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct QuestionConfig {
    #[serde(default = "default_question_min_tags")]
    pub min_tags: usize,
}

fn default_items_per_page() -> usize {
    ITEMS_PER_PAGE
}

fn default_page_delta() -> usize {
    PAGE_DELTA
}

fn default_max_length() -> usize {
    MAX_TAG_LENGTH
}

fn default_lesson_min_tags() -> usize {
    TagLimits::lesson().min
}

fn default_lesson_max_tags() -> usize {
    TagLimits::lesson().max.unwrap_or(5)
}

fn default_question_min_tags() -> usize {
    TagLimits::question().min
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            page_delta: default_page_delta(),
        }
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
        }
    }
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            min_tags: default_lesson_min_tags(),
            max_tags: default_lesson_max_tags(),
        }
    }
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            min_tags: default_question_min_tags(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;
        config.validate()?;

        debug!(?config, "Loaded config");
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must load. Without one, the per-user file is used
    /// when it exists and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config_dir>/lessondesk/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lessondesk").join("config.toml"))
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.list.items_per_page == 0 {
            bail!("list.items_per_page must be at least 1");
        }
        if self.tags.max_length == 0 {
            bail!("tags.max_length must be at least 1");
        }
        if self.lesson.min_tags > self.lesson.max_tags {
            bail!(
                "lesson.min_tags ({}) exceeds lesson.max_tags ({})",
                self.lesson.min_tags,
                self.lesson.max_tags
            );
        }
        Ok(())
    }

    pub fn view_settings(&self) -> Result<ViewSettings> {
        let items_per_page = NonZeroUsize::new(self.list.items_per_page)
            .context("list.items_per_page must be at least 1")?;
        Ok(ViewSettings {
            items_per_page,
            page_delta: self.list.page_delta,
        })
    }

    pub fn lesson_limits(&self) -> TagLimits {
        TagLimits {
            min: self.lesson.min_tags,
            max: Some(self.lesson.max_tags),
            max_len: self.tags.max_length,
        }
    }

    pub fn question_limits(&self) -> TagLimits {
        TagLimits {
            min: self.question.min_tags,
            max: None,
            max_len: self.tags.max_length,
        }
    }
}
