//! # Record Attributes
//!
//! Closed vocabularies shared by catalog records and filename conventions:
//! the content [`Language`] and the course difficulty [`Level`]. Both
//! serialize as their lowercase identifiers, which are also the tokens
//! embedded in filenames (`python_beginner_en.yaml`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CatalogError;

/// Language a piece of content is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// French.
    Fr,
    /// Spanish.
    Es,
}

impl Language {
    /// Returns all supported languages.
    pub fn all() -> &'static [Language] {
        &[Self::En, Self::Fr, Self::Es]
    }

    /// Returns the two-letter code used in records and filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownValue {
                kind: "language",
                value: s.to_string(),
            })
    }
}

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// No prior knowledge expected.
    Beginner,
    /// Working knowledge expected.
    Intermediate,
    /// Practitioner content.
    Advanced,
}

impl Level {
    /// Returns all levels from easiest to hardest.
    pub fn all() -> &'static [Level] {
        &[Self::Beginner, Self::Intermediate, Self::Advanced]
    }

    /// Returns the lowercase identifier used in records and filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownValue {
                kind: "level",
                value: s.to_string(),
            })
    }
}
