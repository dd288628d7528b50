//! Type definitions for webserver
//!
//! Request payloads and view models exchanged with the browser. None of these
//! hold state; they are rebuilt from the cart store on every request.

use serde::{Deserialize, Serialize};
use shared::{Course, CourseId, parse_course_ids};
use url::form_urlencoded;

use crate::core::{CartStore, Catalog, CourseFilter, ExpandedSet, LevelFilter};

/// Which cart presentation to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartVariant {
    /// Compact panel next to the catalog
    Summary,
    /// Dedicated page with ranking and reordering
    Full,
}

/// Browse page query: filters plus expanded cards
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub expanded: String,
}

impl BrowseQuery {
    pub fn level_filter(&self) -> LevelFilter {
        self.level
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn filter(&self) -> CourseFilter {
        CourseFilter::new(&self.search, &self.number, self.level_filter())
    }

    pub fn expanded_set(&self) -> ExpandedSet {
        ExpandedSet::parse(&self.expanded)
    }

    /// Query string for the same filters with a different expanded set
    pub fn with_expanded(&self, expanded: &ExpandedSet) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            serializer.append_pair("search", &self.search);
        }
        if !self.number.is_empty() {
            serializer.append_pair("number", &self.number);
        }
        let level = self.level_filter();
        if level != LevelFilter::All {
            serializer.append_pair("level", &level.to_string());
        }
        if !expanded.is_empty() {
            serializer.append_pair("expanded", &expanded.to_param());
        }
        serializer.finish()
    }
}

/// Single-course intent (add or remove)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRequest {
    pub id: CourseId,
    /// Where to send the browser afterwards (form posts only)
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Full replacement order from the JSON API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub order: Vec<CourseId>,
}

/// Full replacement order from an HTML form, comma-joined
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderForm {
    pub order: String,
}

impl ReorderForm {
    pub fn ids(&self) -> Vec<CourseId> {
        parse_course_ids(&self.order)
    }
}

/// Drag-and-drop intent: drop `dragged` onto `target`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub dragged: CourseId,
    pub target: CourseId,
}

/// Course as listed by the JSON API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseView {
    pub id: CourseId,
    pub display_title: String,
    pub level: u32,
    pub in_cart: bool,
    #[serde(flatten)]
    pub course: Course,
}

impl CourseView {
    pub fn new(course: &Course, cart: &CartStore) -> Self {
        let id = course.id();
        Self {
            in_cart: cart.contains(&id),
            id,
            display_title: course.display_title(),
            level: course.level().value(),
            course: course.clone(),
        }
    }
}

/// One ranked cart row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemView {
    pub rank: usize,
    pub id: CourseId,
    pub display_title: String,
    pub description: String,
}

/// Cart contents as shown to the browser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub count: usize,
    pub max_items: usize,
    pub is_full: bool,
}

impl CartView {
    /// Rank entries in cart order; ids missing from the catalog are skipped
    pub fn new(cart: &CartStore, catalog: &Catalog) -> Self {
        let items = catalog
            .resolve(cart.ids())
            .into_iter()
            .enumerate()
            .map(|(position, course)| CartItemView {
                rank: position + 1,
                id: course.id(),
                display_title: course.display_title(),
                description: course.description.clone(),
            })
            .collect();

        Self {
            items,
            count: cart.len(),
            max_items: cart.max_items(),
            is_full: cart.is_full(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<CourseId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}

/// Outcome of a cart transition plus the cart it left behind, read under the same lock
#[derive(Debug, Clone, Serialize)]
pub struct CartMutation<T: Serialize> {
    pub outcome: T,
    pub cart: CartView,
}
