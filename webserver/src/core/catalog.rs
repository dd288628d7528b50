//! Indexed, read-only course catalog
//!
//! Pure business logic with no I/O dependencies

use std::collections::HashMap;

use shared::{Course, CourseId};

/// The fixed set of offerings, in provider order, with an id index built once per load
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<CourseId, usize>,
    duplicates: Vec<CourseId>,
}

impl Catalog {
    /// Build a catalog from provider order.
    ///
    /// A repeated identifier keeps its first entry in the index; later ones are
    /// still listed but recorded in `duplicates`.
    pub fn new(courses: Vec<Course>) -> Self {
        let mut index = HashMap::with_capacity(courses.len());
        let mut duplicates = Vec::new();

        for (position, course) in courses.iter().enumerate() {
            let id = course.id();
            if index.contains_key(&id) {
                duplicates.push(id);
            } else {
                index.insert(id, position);
            }
        }

        Self {
            courses,
            index,
            duplicates,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.index.get(id).map(|&position| &self.courses[position])
    }

    pub fn contains(&self, id: &CourseId) -> bool {
        self.index.contains_key(id)
    }

    /// Identifiers that appeared more than once in the source data
    pub fn duplicates(&self) -> &[CourseId] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Resolve ids to courses in the given order, dropping unknown ids
    pub fn resolve<'a, I>(&self, ids: I) -> Vec<&Course>
    where
        I: IntoIterator<Item = &'a CourseId>,
    {
        ids.into_iter().filter_map(|id| self.get(id)).collect()
    }
}
