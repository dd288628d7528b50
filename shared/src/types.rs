//! Core course types and identifier helpers
//!
//! A course's identity is derived from its department code and number, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived course identifier, `"{dept}-{number}"`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Prerequisites as they appear in the catalog: free text or a list of course codes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prerequisites {
    One(String),
    Many(Vec<String>),
}

impl fmt::Display for Prerequisites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prerequisites::One(text) => f.write_str(text),
            Prerequisites::Many(codes) => f.write_str(&codes.join(", ")),
        }
    }
}

/// A single catalog entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub dept: String,
    pub number: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prereqs: Option<Prerequisites>,
    #[serde(rename = "cross-listed", default, skip_serializing_if = "Vec::is_empty")]
    pub cross_listed: Vec<String>,
}

impl Course {
    /// Stable identifier, e.g. `CIS-120`
    pub fn id(&self) -> CourseId {
        CourseId(format!("{}-{}", self.dept, self.number))
    }

    /// Heading used everywhere a course is listed, e.g. `CIS 120: Programming Languages and Techniques I`
    pub fn display_title(&self) -> String {
        format!("{} {}: {}", self.dept, self.number, self.title)
    }

    pub fn level(&self) -> Level {
        Level::of(self.number)
    }
}

/// Hundred-bucket classification of a course number (100, 200, ...)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(u32);

impl Level {
    pub fn of(number: u32) -> Self {
        Self(number / 100 * 100)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
