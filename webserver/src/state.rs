//! Root controller state
//!
//! Owns the cart store and the catalog. Handlers receive it through axum
//! `State` and never touch the store directly; every transition goes through
//! one of the methods below and completes under a single write lock.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use shared::{Component, CourseId, cart_debug, cart_info, cart_warn};

use crate::core::{
    AddOutcome, CartStore, Catalog, CheckoutSnapshot, RemoveOutcome, ReorderOutcome,
};
use crate::types::{CartMutation, CartView};

/// Core webserver state
#[derive(Debug)]
pub struct AppState {
    catalog: Arc<Catalog>,
    cart: RwLock<CartStore>,
    server_start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog, max_items: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cart: RwLock::new(CartStore::new(max_items)),
            server_start_time: Instant::now(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Copy of the cart as it is right now
    pub async fn cart(&self) -> CartStore {
        self.cart.read().await.clone()
    }

    pub async fn cart_view(&self) -> CartView {
        CartView::new(&*self.cart.read().await, &self.catalog)
    }

    pub async fn cart_len(&self) -> usize {
        self.cart.read().await.len()
    }

    pub async fn add_course(&self, id: CourseId) -> CartMutation<AddOutcome> {
        let mut cart = self.cart.write().await;

        let outcome = if self.catalog.contains(&id) {
            cart.add(id.clone())
        } else {
            AddOutcome::UnknownCourse
        };
        match outcome {
            AddOutcome::Added => {
                cart_info!(Component::Cart, "➕ Added {} ({}/{})", id, cart.len(), cart.max_items());
            }
            AddOutcome::UnknownCourse => {
                cart_warn!(Component::Cart, "⚠️ Ignoring add for unknown course {}", id);
            }
            _ => {
                cart_debug!(Component::Cart, "Add of {} was a no-op: {:?}", id, outcome);
            }
        }
        self.mutation(outcome, &cart)
    }

    pub async fn remove_course(&self, id: &CourseId) -> CartMutation<RemoveOutcome> {
        let mut cart = self.cart.write().await;
        let outcome = cart.remove(id);
        match outcome {
            RemoveOutcome::Removed => {
                cart_info!(Component::Cart, "➖ Removed {} ({}/{})", id, cart.len(), cart.max_items());
            }
            RemoveOutcome::NotPresent => {
                cart_debug!(Component::Cart, "Remove of {} was a no-op", id);
            }
        }
        self.mutation(outcome, &cart)
    }

    pub async fn reorder(&self, order: Vec<CourseId>) -> CartMutation<ReorderOutcome> {
        let mut cart = self.cart.write().await;
        let outcome = cart.reorder(order);
        self.log_reorder(&outcome);
        self.mutation(outcome, &cart)
    }

    pub async fn move_course(&self, dragged: &CourseId, target: &CourseId) -> CartMutation<ReorderOutcome> {
        let mut cart = self.cart.write().await;
        let outcome = cart.move_before(dragged, target);
        self.log_reorder(&outcome);
        self.mutation(outcome, &cart)
    }

    /// Snapshot for the receipt view; `None` leaves navigation where it is
    pub async fn checkout(&self) -> Option<CheckoutSnapshot> {
        let snapshot = self.cart.read().await.checkout();
        match &snapshot {
            Some(snapshot) => {
                cart_info!(
                    Component::Checkout,
                    "🧾 Checkout with {} courses",
                    snapshot.ids().len()
                );
            }
            None => {
                cart_debug!(Component::Checkout, "Checkout ignored for empty cart");
            }
        }
        snapshot
    }

    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    fn mutation<T: serde::Serialize>(&self, outcome: T, cart: &CartStore) -> CartMutation<T> {
        CartMutation {
            outcome,
            cart: CartView::new(cart, &self.catalog),
        }
    }

    fn log_reorder(&self, outcome: &ReorderOutcome) {
        match outcome {
            ReorderOutcome::Reordered => {
                cart_info!(Component::Cart, "🔀 Cart reordered");
            }
            ReorderOutcome::Unchanged => {
                cart_debug!(Component::Cart, "Reorder left cart unchanged");
            }
            ReorderOutcome::Rejected(reason) => {
                cart_warn!(Component::Cart, "⚠️ Reorder rejected: {:?}", reason);
            }
        }
    }
}
