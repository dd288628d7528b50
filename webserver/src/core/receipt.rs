//! Receipt reconstruction from a checkout snapshot
//!
//! Pure business logic with no I/O dependencies

use shared::{Course, CourseId, decode_checkout_query, parse_course_ids};

use crate::core::Catalog;

/// Courses resolved for the receipt view
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    requested: Vec<CourseId>,
    courses: Vec<&'a Course>,
}

impl<'a> Receipt<'a> {
    /// Resolve `requested` against the catalog; unknown ids are dropped silently
    pub fn resolve(catalog: &'a Catalog, requested: Vec<CourseId>) -> Self {
        let courses = catalog.resolve(&requested);
        Self { requested, courses }
    }

    /// Resolve from an already-decoded `courses` value
    pub fn from_param(catalog: &'a Catalog, raw: Option<&str>) -> Self {
        let requested = raw.map(parse_course_ids).unwrap_or_default();
        Self::resolve(catalog, requested)
    }

    /// Resolve from a raw request query string
    pub fn from_query(catalog: &'a Catalog, query: &str) -> Self {
        Self::resolve(catalog, decode_checkout_query(query))
    }

    pub fn requested(&self) -> &[CourseId] {
        &self.requested
    }

    pub fn courses(&self) -> &[&'a Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Display id: the requested sequence joined with hyphens
    pub fn receipt_id(&self) -> String {
        self.requested
            .iter()
            .map(CourseId::as_str)
            .collect::<Vec<_>>()
            .join("-")
    }
}
