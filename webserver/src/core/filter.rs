//! Catalog browser filtering
//!
//! Pure business logic with no I/O dependencies. Filters are recomputed from
//! the current inputs on every request; nothing is memoized.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use shared::{Course, CourseId, Level, parse_course_ids};

use crate::core::Catalog;

/// Levels offered by the browser's level selector
pub const SELECTABLE_LEVELS: [u32; 4] = [100, 200, 300, 400];

/// Level selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Level(u32),
}

impl LevelFilter {
    pub fn matches(self, level: Level) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Level(value) => level.value() == value,
        }
    }
}

impl FromStr for LevelFilter {
    type Err = std::convert::Infallible;

    /// Anything that is not a level number reads as "all"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim()
            .parse::<u32>()
            .map(LevelFilter::Level)
            .unwrap_or(LevelFilter::All))
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelFilter::All => write!(f, "all"),
            LevelFilter::Level(value) => write!(f, "{value}"),
        }
    }
}

/// Conjunctive filter over the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    search: String,
    number: String,
    level: LevelFilter,
}

impl CourseFilter {
    pub fn new(search: &str, number: &str, level: LevelFilter) -> Self {
        Self {
            search: search.trim().to_lowercase(),
            number: number.trim().to_string(),
            level,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Case-insensitive substring match on title or description
    pub fn matches_search(&self, course: &Course) -> bool {
        self.search.is_empty()
            || course.title.to_lowercase().contains(&self.search)
            || course.description.to_lowercase().contains(&self.search)
    }

    /// Substring match on the decimal course number, so "20" matches 120 and 201
    pub fn matches_number(&self, course: &Course) -> bool {
        self.number.is_empty() || course.number.to_string().contains(&self.number)
    }

    pub fn matches_level(&self, course: &Course) -> bool {
        self.level.matches(course.level())
    }

    pub fn matches(&self, course: &Course) -> bool {
        self.matches_search(course) && self.matches_number(course) && self.matches_level(course)
    }
}

/// Courses shown for `filter`, in catalog order
pub fn filter_courses<'a>(catalog: &'a Catalog, filter: &CourseFilter) -> Vec<&'a Course> {
    catalog
        .courses()
        .iter()
        .filter(|course| filter.matches(course))
        .collect()
}

/// Per-card "show details" state, carried as a comma-joined list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet(BTreeSet<CourseId>);

impl ExpandedSet {
    pub fn parse(raw: &str) -> Self {
        Self(parse_course_ids(raw).into_iter().collect())
    }

    pub fn contains(&self, id: &CourseId) -> bool {
        self.0.contains(id)
    }

    /// Copy of the set with `id` flipped
    pub fn toggled(&self, id: &CourseId) -> Self {
        let mut next = self.0.clone();
        if !next.remove(id) {
            next.insert(id.clone());
        }
        Self(next)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_param(&self) -> String {
        self.0.iter().map(CourseId::as_str).collect::<Vec<_>>().join(",")
    }
}
