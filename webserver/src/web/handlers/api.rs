//! REST API handlers
//!
//! JSON endpoints mirroring the page routes, for scripted clients

use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::core::{AddOutcome, RemoveOutcome, ReorderOutcome, filter_courses};
use crate::state::AppState;
use crate::types::{BrowseQuery, CartMutation, CartView, CourseRequest, CourseView, MoveRequest, ReorderRequest};

/// `GET /api/courses?search=&number=&level=`
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BrowseQuery>,
) -> Json<Vec<CourseView>> {
    let cart = state.cart().await;
    let courses = filter_courses(state.catalog(), &query.filter())
        .into_iter()
        .map(|course| CourseView::new(course, &cart))
        .collect();
    Json(courses)
}

/// `GET /api/cart`
pub async fn get_cart(State(state): State<Arc<AppState>>) -> Json<CartView> {
    Json(state.cart_view().await)
}

/// `POST /api/cart/add`
pub async fn add(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CourseRequest>,
) -> Json<CartMutation<AddOutcome>> {
    Json(state.add_course(request.id).await)
}

/// `POST /api/cart/remove`
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CourseRequest>,
) -> Json<CartMutation<RemoveOutcome>> {
    Json(state.remove_course(&request.id).await)
}

/// `POST /api/cart/reorder`
pub async fn reorder(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReorderRequest>,
) -> Json<CartMutation<ReorderOutcome>> {
    Json(state.reorder(request.order).await)
}

/// `POST /api/cart/move`
pub async fn move_course(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoveRequest>,
) -> Json<CartMutation<ReorderOutcome>> {
    Json(state.move_course(&request.dragged, &request.target).await)
}

/// `POST /api/cart/checkout`
pub async fn checkout(State(state): State<Arc<AppState>>) -> Json<Value> {
    let location = state.checkout().await.map(|snapshot| snapshot.location());
    Json(json!({ "location": location }))
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime": state.get_uptime_seconds(),
        "catalog_size": state.catalog().len(),
        "cart_size": state.cart_len().await,
    }))
}
