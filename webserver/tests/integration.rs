//! Integration tests for the browser-facing pages
//!
//! Drives the router the way a browser would: form posts, redirects and
//! rendered HTML.

mod fixtures;
mod helpers;

use axum::http::StatusCode;
use helpers::*;

#[tokio::test]
async fn test_browse_page_lists_catalog() {
    let app = create_test_router();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Penn Course Cart"));
    assert!(html.contains("CIS 120: Programming Languages and Techniques I"));
    assert!(html.contains("NETS 112: Networked Life"));
    assert!(html.contains("0 of 7 courses selected"));
}

#[tokio::test]
async fn test_browse_filters_from_query() {
    let app = create_test_router();

    let html = body_text(get(&app, "/?search=Programming").await).await;
    assert!(html.contains("CIS 120:"));
    assert!(html.contains("CIS 121:"));
    assert!(!html.contains("CIS 160:"));

    let html = body_text(get(&app, "/?number=12&level=100").await).await;
    assert!(html.contains("CIS 120:"));
    assert!(html.contains("CIS 121:"));
    assert!(html.contains("NETS 112:"));
    assert!(!html.contains("CIS 160:"));

    let html = body_text(get(&app, "/?level=400").await).await;
    assert!(html.contains("CIS 450:"));
    assert!(!html.contains("CIS 120:"));
}

#[tokio::test]
async fn test_expanded_details_toggle() {
    let app = create_test_router();
    let html = body_text(get(&app, "/?expanded=NETS-112").await).await;

    assert!(html.contains("Cross-listed: OIDD, SOCI"));
    assert!(html.contains("Hide details"));
}

#[tokio::test]
async fn test_add_remove_flow() {
    let app = create_test_router();

    let response = post_form(&app, "/cart/add", "id=CIS-120&return_to=%2F%3Fsearch%3Dprog").await;
    assert_eq!(redirect_location(&response), "/?search=prog");

    post_form(&app, "/cart/add", "id=CIS-121").await;
    let response = post_form(&app, "/cart/remove", "id=CIS-120").await;
    assert_eq!(redirect_location(&response), "/");

    let html = body_text(get(&app, "/cart").await).await;
    assert!(html.contains("1 of 7 courses selected"));
    assert!(html.contains("CIS 121: Programming Languages and Techniques II"));
    assert!(!html.contains("CIS 120: Programming Languages and Techniques I"));
}

#[tokio::test]
async fn test_capacity_disables_add() {
    let app = create_test_webserver(2).build_router();
    post_form(&app, "/cart/add", "id=CIS-120").await;
    post_form(&app, "/cart/add", "id=CIS-121").await;
    post_form(&app, "/cart/add", "id=CIS-160").await;

    let html = body_text(get(&app, "/").await).await;
    assert!(html.contains("2 of 2 courses selected"));
    assert!(html.contains("You reached the 2-course limit."));
    assert!(html.contains(" disabled>Add to cart"));
}

#[tokio::test]
async fn test_drag_reorder_via_form() {
    let app = create_test_router();
    for id in ["CIS-120", "CIS-121", "CIS-160"] {
        post_form(&app, "/cart/add", &format!("id={id}")).await;
    }

    let response = post_form(&app, "/cart/move", "dragged=CIS-160&target=CIS-120").await;
    assert_eq!(redirect_location(&response), "/cart");

    let response = post_form(&app, "/cart/checkout", "").await;
    assert_eq!(
        redirect_location(&response),
        "/checkout?courses=CIS-160%2CCIS-120%2CCIS-121"
    );
}

#[tokio::test]
async fn test_reorder_form_rejects_partial_order() {
    let app = create_test_router();
    post_form(&app, "/cart/add", "id=CIS-120").await;
    post_form(&app, "/cart/add", "id=CIS-121").await;

    post_form(&app, "/cart/reorder", "order=CIS-121").await;
    let response = post_form(&app, "/cart/checkout", "").await;
    assert_eq!(redirect_location(&response), "/checkout?courses=CIS-120%2CCIS-121");

    post_form(&app, "/cart/reorder", "order=CIS-121%2CCIS-120").await;
    let response = post_form(&app, "/cart/checkout", "").await;
    assert_eq!(redirect_location(&response), "/checkout?courses=CIS-121%2CCIS-120");
}

#[tokio::test]
async fn test_empty_checkout_stays_on_cart() {
    let app = create_test_router();
    let response = post_form(&app, "/cart/checkout", "").await;
    assert_eq!(redirect_location(&response), "/cart");
}

#[tokio::test]
async fn test_checkout_receipt_scenario() {
    let app = create_test_router();
    post_form(&app, "/cart/add", "id=CIS-120").await;
    post_form(&app, "/cart/add", "id=CIS-121").await;

    let location = redirect_location(&post_form(&app, "/cart/checkout", "").await);
    let response = get(&app, &location).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("2 course(s)"));
    assert!(html.contains("Receipt ID: CIS-120-CIS-121"));
    let first = html.find("CIS 120:").expect("CIS 120 listed");
    let second = html.find("CIS 121:").expect("CIS 121 listed");
    assert!(first < second);
}

#[tokio::test]
async fn test_receipt_is_independent_of_later_cart_changes() {
    let app = create_test_router();
    post_form(&app, "/cart/add", "id=CIS-120").await;
    let location = redirect_location(&post_form(&app, "/cart/checkout", "").await);

    post_form(&app, "/cart/remove", "id=CIS-120").await;

    let html = body_text(get(&app, &location).await).await;
    assert!(html.contains("1 course(s)"));
    assert!(html.contains("CIS 120:"));
}

#[tokio::test]
async fn test_receipt_drops_unknown_ids() {
    let app = create_test_router();

    let html = body_text(get(&app, "/checkout?courses=CIS-120%2CFAKE-999").await).await;
    assert!(html.contains("1 course(s)"));

    let html = body_text(get(&app, "/checkout?courses=FAKE-999").await).await;
    assert!(html.contains("Your receipt is empty."));

    let html = body_text(get(&app, "/checkout").await).await;
    assert!(html.contains("Back to courses"));
}

#[tokio::test]
async fn test_foreign_return_to_is_ignored() {
    let app = create_test_router();
    let response = post_form(&app, "/cart/add", "id=CIS-120&return_to=https%3A%2F%2Fevil.example").await;
    assert_eq!(redirect_location(&response), "/");
}
