//! Checkout navigation format
//!
//! The cart hands its selection to the receipt view through a single `courses`
//! query parameter: a comma-joined list of identifiers, percent-encoded.

use url::form_urlencoded;

use crate::types::CourseId;

/// Query parameter that carries the checkout snapshot
pub const COURSES_PARAM: &str = "courses";

/// Path of the receipt view
pub const CHECKOUT_PATH: &str = "/checkout";

/// Encode an ordered id sequence as `courses=<encoded>`
pub fn encode_checkout_query(ids: &[CourseId]) -> String {
    let joined = ids.iter().map(CourseId::as_str).collect::<Vec<_>>().join(",");
    form_urlencoded::Serializer::new(String::new())
        .append_pair(COURSES_PARAM, &joined)
        .finish()
}

/// Full location the cart redirects to after checkout
pub fn checkout_location(ids: &[CourseId]) -> String {
    format!("{}?{}", CHECKOUT_PATH, encode_checkout_query(ids))
}

/// Decode the `courses` parameter out of a raw query string.
///
/// A missing parameter yields an empty sequence.
pub fn decode_checkout_query(query: &str) -> Vec<CourseId> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == COURSES_PARAM)
        .map(|(_, value)| parse_course_ids(&value))
        .unwrap_or_default()
}

/// Split an already-decoded value on commas, trimming and dropping empty tokens.
/// Order is kept and repeats are not collapsed.
pub fn parse_course_ids(raw: &str) -> Vec<CourseId> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(CourseId::from)
        .collect()
}
