//! HTML page handlers
//!
//! Browser-facing routes. Mutations arrive as form posts and answer with a
//! 303 redirect so a reload never repeats them.

use axum::{
    Form,
    extract::{Query, RawQuery, State},
    response::{Html, Redirect},
};
use std::sync::Arc;

use crate::core::Receipt;
use crate::state::AppState;
use crate::types::{BrowseQuery, CartView, CourseRequest, MoveRequest, ReorderForm};
use crate::web::render;

/// Only same-site paths are followed after a form post
pub fn safe_return_to(return_to: Option<&str>, fallback: &'static str) -> String {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => fallback.to_string(),
    }
}

/// `GET /`
pub async fn browse(State(state): State<Arc<AppState>>, Query(query): Query<BrowseQuery>) -> Html<String> {
    let cart = state.cart().await;
    let view = CartView::new(&cart, state.catalog());
    Html(render::browse_page(state.catalog(), &cart, &view, &query))
}

/// `GET /cart`
pub async fn cart(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render::cart_page(&state.cart_view().await))
}

/// `GET /checkout?courses=...`
pub async fn receipt(State(state): State<Arc<AppState>>, RawQuery(query): RawQuery) -> Html<String> {
    let receipt = Receipt::from_query(state.catalog(), query.as_deref().unwrap_or_default());
    Html(render::receipt_page(&receipt, state.cart_len().await))
}

/// `POST /cart/add`
pub async fn add(State(state): State<Arc<AppState>>, Form(request): Form<CourseRequest>) -> Redirect {
    state.add_course(request.id).await;
    Redirect::to(&safe_return_to(request.return_to.as_deref(), "/"))
}

/// `POST /cart/remove`
pub async fn remove(State(state): State<Arc<AppState>>, Form(request): Form<CourseRequest>) -> Redirect {
    state.remove_course(&request.id).await;
    Redirect::to(&safe_return_to(request.return_to.as_deref(), "/"))
}

/// `POST /cart/reorder` with the complete next order
pub async fn reorder(State(state): State<Arc<AppState>>, Form(form): Form<ReorderForm>) -> Redirect {
    state.reorder(form.ids()).await;
    Redirect::to("/cart")
}

/// `POST /cart/move` from the drag-and-drop script
pub async fn move_course(State(state): State<Arc<AppState>>, Form(request): Form<MoveRequest>) -> Redirect {
    state.move_course(&request.dragged, &request.target).await;
    Redirect::to("/cart")
}

/// `POST /cart/checkout`; an empty cart stays on the cart page
pub async fn checkout(State(state): State<Arc<AppState>>) -> Redirect {
    match state.checkout().await {
        Some(snapshot) => Redirect::to(&snapshot.location()),
        None => Redirect::to("/cart"),
    }
}
