//! # Catalog Category: Single Source of Truth
//!
//! Defines the `Category` enum over the four kinds of catalog content.
//! Each category owns a fixed top-level directory, a target table, and an
//! ordered required-field table. Every `match` on `Category` is exhaustive,
//! so adding a category forces the validator, the naming rules, and the
//! SQL generator to handle it at compile time.
//!
//! ## Routing
//!
//! A file's category comes from its directory components, never from a
//! substring search over the whole path: `courses/python_beginner_en.yaml`
//! is a course, `old-paths/x.yaml` is nothing.

use std::path::{Component, Path};
use std::str::FromStr;

use crate::error::CatalogError;

/// The kinds of content held in the catalog.
///
/// | Category | Directory    | Table       | Unique `name` |
/// |----------|--------------|-------------|---------------|
/// | Course   | `courses/`   | `courses`   | yes           |
/// | Path     | `paths/`     | `paths`     | yes           |
/// | Bootcamp | `bootcamps/` | `bootcamps` | yes           |
/// | Faq      | `faqs/`      | `faqs`      | no            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// A single course.
    Course,
    /// A learning path made of courses.
    Path,
    /// A multi-week bootcamp made of modules.
    Bootcamp,
    /// Frequently asked questions attached to a page.
    Faq,
}

const COURSE_FIELDS: &[&str] = &[
    "name",
    "url",
    "duration_hours",
    "level",
    "objectives",
    "description",
    "technologies",
    "language",
    "deprecated",
];

const PATH_FIELDS: &[&str] = &["name", "target_role", "course_ids", "language", "deprecated"];

const BOOTCAMP_FIELDS: &[&str] = &[
    "name",
    "target_role",
    "modules",
    "duration_weeks",
    "language",
    "deprecated",
];

const FAQ_FIELDS: &[&str] = &["url", "questions"];

impl Category {
    /// Returns all categories in processing order.
    pub fn all() -> &'static [Category] {
        &[Self::Course, Self::Path, Self::Bootcamp, Self::Faq]
    }

    /// The fixed top-level directory holding this category's files.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Course => "courses",
            Self::Path => "paths",
            Self::Bootcamp => "bootcamps",
            Self::Faq => "faqs",
        }
    }

    /// The table this category is upserted into.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Course => "courses",
            Self::Path => "paths",
            Self::Bootcamp => "bootcamps",
            Self::Faq => "faqs",
        }
    }

    /// Required fields, in the order they are checked and reported.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Course => COURSE_FIELDS,
            Self::Path => PATH_FIELDS,
            Self::Bootcamp => BOOTCAMP_FIELDS,
            Self::Faq => FAQ_FIELDS,
        }
    }

    /// Whether records of this category take part in the catalog-wide
    /// `name` uniqueness check.
    pub fn has_unique_name(&self) -> bool {
        !matches!(self, Self::Faq)
    }

    /// Look up a category by its directory name.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.dir_name() == name)
    }

    /// Derive the category of a record file from the nearest enclosing
    /// directory that names a category.
    ///
    /// Components are searched from the file upward, so the innermost
    /// category directory wins: `courses/imports/paths/x.yaml` is a
    /// [`Category::Path`]. Catalog files normally sit directly in their
    /// category directory, where every reading agrees.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] when no directory
    /// component of `path` is a category directory.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        path.parent()
            .into_iter()
            .flat_map(|dir| dir.components().rev())
            .find_map(|component| match component {
                Component::Normal(name) => name.to_str().and_then(Self::from_dir_name),
                _ => None,
            })
            .ok_or_else(|| CatalogError::UnknownCategory {
                path: path.display().to_string(),
            })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Parse a category from its directory name (`"courses"`, `"faqs"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dir_name(s).ok_or_else(|| CatalogError::UnknownValue {
            kind: "category",
            value: s.to_string(),
        })
    }
}
