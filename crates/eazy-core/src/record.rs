//! # Catalog Records
//!
//! Typed views of the four YAML record kinds. These are what the SQL
//! generator consumes: a missing required key or a value of the wrong
//! shape is a deserialization error naming the field.
//!
//! The `file_path` identity is never read from the document. It is the
//! path the record was loaded from, carried alongside by [`LoadedRecord`].
//!
//! The schema validator walks the untyped YAML instead, so that every
//! missing field is reported separately. Its field shape tables must stay
//! in step with the field types here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::attributes::{Language, Level};
use crate::category::Category;
use crate::error::CatalogError;

/// A scalar entry of a list-valued field (`course_ids`, `modules`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    /// Numeric identifier.
    Integer(i64),
    /// Textual identifier or title.
    Text(String),
}

/// A course record from `courses/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub name: String,
    pub url: String,
    pub duration_hours: u32,
    pub level: Level,
    pub objectives: String,
    pub description: String,
    #[serde(default)]
    pub prerequisites: Option<String>,
    pub technologies: Vec<String>,
    pub language: Language,
    pub deprecated: bool,
}

/// A learning path record from `paths/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LearningPath {
    pub name: String,
    pub target_role: String,
    pub course_ids: Vec<ListItem>,
    #[serde(default)]
    pub prerequisites: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub language: Language,
    pub deprecated: bool,
}

/// A bootcamp record from `bootcamps/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bootcamp {
    pub name: String,
    pub target_role: String,
    pub modules: Vec<ListItem>,
    pub duration_weeks: u32,
    #[serde(default)]
    pub prerequisites: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub language: Language,
    pub deprecated: bool,
}

/// An FAQ record from `faqs/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Faq {
    pub url: String,
    pub questions: Vec<String>,
}

/// One catalog record, tagged by category.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Course(Course),
    Path(LearningPath),
    Bootcamp(Bootcamp),
    Faq(Faq),
}

impl Record {
    /// Parse a YAML document as a record of the given category.
    pub fn from_yaml(category: Category, yaml: &str) -> Result<Self, serde_yaml::Error> {
        Ok(match category {
            Category::Course => Self::Course(serde_yaml::from_str(yaml)?),
            Category::Path => Self::Path(serde_yaml::from_str(yaml)?),
            Category::Bootcamp => Self::Bootcamp(serde_yaml::from_str(yaml)?),
            Category::Faq => Self::Faq(serde_yaml::from_str(yaml)?),
        })
    }

    /// The category this record belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Course(_) => Category::Course,
            Self::Path(_) => Category::Path,
            Self::Bootcamp(_) => Category::Bootcamp,
            Self::Faq(_) => Category::Faq,
        }
    }

    /// The catalog-wide unique name, if this category has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Course(c) => Some(&c.name),
            Self::Path(p) => Some(&p.name),
            Self::Bootcamp(b) => Some(&b.name),
            Self::Faq(_) => None,
        }
    }
}

/// A record together with the path it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecord {
    /// Path as supplied by the caller; used verbatim as the upsert key.
    pub file_path: PathBuf,
    pub record: Record,
}

impl LoadedRecord {
    /// Categorize, read, and parse a record file.
    ///
    /// Categorization happens first, so a file outside every category
    /// directory is rejected without being opened.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnknownCategory`] if the path has no category directory.
    /// - [`CatalogError::Read`] if the file cannot be read.
    /// - [`CatalogError::Parse`] if the YAML is malformed or lacks a required key.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let category = Category::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let record =
            Record::from_yaml(category, &content).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        tracing::debug!(file = %path.display(), %category, "loaded record");
        Ok(Self {
            file_path: path.to_path_buf(),
            record,
        })
    }

    /// The `file_path` key as text, with `/` separators as supplied.
    pub fn file_path_str(&self) -> String {
        self.file_path.display().to_string()
    }
}
