//! Cart store: the ordered, capacity-bounded course selection
//!
//! Pure business logic with no I/O dependencies. Every operation is total;
//! invalid requests leave the selection untouched and report why.

use std::collections::HashSet;

use shared::{CourseId, checkout_location};

/// Default number of courses a cart may hold
pub const DEFAULT_MAX_ITEMS: usize = 7;

/// Result of an add request
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    AtCapacity,
    /// Reported by the controller for ids the catalog does not know
    UnknownCourse,
}

/// Result of a remove request
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveOutcome {
    Removed,
    NotPresent,
}

/// Why a replacement ordering was refused
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "reason", content = "id", rename_all = "snake_case")]
pub enum ReorderRejection {
    LengthMismatch,
    Duplicate(CourseId),
    Unknown(CourseId),
}

/// Result of a reorder request
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum ReorderOutcome {
    Reordered,
    Unchanged,
    Rejected(ReorderRejection),
}

/// Immutable copy of the selection taken at checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSnapshot {
    ids: Vec<CourseId>,
}

impl CheckoutSnapshot {
    pub fn ids(&self) -> &[CourseId] {
        &self.ids
    }

    /// Redirect target for the receipt view
    pub fn location(&self) -> String {
        checkout_location(&self.ids)
    }
}

/// Move `dragged` to the current position of `target`, shifting the items in between.
///
/// This is a remove-then-insert splice, not a swap. Returns the input unchanged
/// when either id is absent or both are the same.
pub fn splice_reorder(current: &[CourseId], dragged: &CourseId, target: &CourseId) -> Vec<CourseId> {
    let mut next = current.to_vec();
    if dragged == target {
        return next;
    }

    let (Some(from), Some(to)) = (
        current.iter().position(|id| id == dragged),
        current.iter().position(|id| id == target),
    ) else {
        return next;
    };

    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

/// Authoritative selection, insertion ordered and bounded by `max_items`
#[derive(Debug, Clone)]
pub struct CartStore {
    ids: Vec<CourseId>,
    max_items: usize,
}

impl CartStore {
    pub fn new(max_items: usize) -> Self {
        Self {
            ids: Vec::with_capacity(max_items),
            max_items,
        }
    }

    pub fn ids(&self) -> &[CourseId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.max_items
    }

    pub fn contains(&self, id: &CourseId) -> bool {
        self.ids.contains(id)
    }

    /// Append `id` unless it is already selected or the cart is full
    pub fn add(&mut self, id: CourseId) -> AddOutcome {
        if self.contains(&id) {
            return AddOutcome::AlreadyPresent;
        }
        if self.is_full() {
            return AddOutcome::AtCapacity;
        }
        self.ids.push(id);
        AddOutcome::Added
    }

    pub fn remove(&mut self, id: &CourseId) -> RemoveOutcome {
        match self.ids.iter().position(|selected| selected == id) {
            Some(position) => {
                self.ids.remove(position);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotPresent,
        }
    }

    /// Replace the selection with `next_order`, which must be a permutation of it
    pub fn reorder(&mut self, next_order: Vec<CourseId>) -> ReorderOutcome {
        if let Err(rejection) = self.validate_permutation(&next_order) {
            return ReorderOutcome::Rejected(rejection);
        }
        if next_order == self.ids {
            return ReorderOutcome::Unchanged;
        }
        self.ids = next_order;
        ReorderOutcome::Reordered
    }

    /// Drag-and-drop: move `dragged` onto `target`'s position
    pub fn move_before(&mut self, dragged: &CourseId, target: &CourseId) -> ReorderOutcome {
        if !self.contains(dragged) {
            return ReorderOutcome::Rejected(ReorderRejection::Unknown(dragged.clone()));
        }
        if !self.contains(target) {
            return ReorderOutcome::Rejected(ReorderRejection::Unknown(target.clone()));
        }
        let next = splice_reorder(&self.ids, dragged, target);
        self.reorder(next)
    }

    /// Snapshot the current order, or `None` when there is nothing to check out
    pub fn checkout(&self) -> Option<CheckoutSnapshot> {
        if self.ids.is_empty() {
            return None;
        }
        Some(CheckoutSnapshot {
            ids: self.ids.clone(),
        })
    }

    fn validate_permutation(&self, next_order: &[CourseId]) -> Result<(), ReorderRejection> {
        let mut seen = HashSet::with_capacity(next_order.len());
        for id in next_order {
            if !self.contains(id) {
                return Err(ReorderRejection::Unknown(id.clone()));
            }
            if !seen.insert(id) {
                return Err(ReorderRejection::Duplicate(id.clone()));
            }
        }
        if next_order.len() != self.ids.len() {
            return Err(ReorderRejection::LengthMismatch);
        }
        Ok(())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITEMS)
    }
}
