//! HTTP route label helpers.

use uuid::Uuid;

/// Path segments that name a route rather than carry a value.
const ROUTE_SEGMENTS: &[&str] = &[
    "api-doc",
    "basket",
    "docs",
    "healthcheck",
    "items",
    "metrics",
    "openapi.json",
    "orders",
    "pizzas",
];

/// No served route is deeper than this.
const MAX_SEGMENTS: usize = 3;

/// Label shared by every path that cannot belong to a served route.
pub(super) const UNMATCHED_ROUTE: &str = "{unmatched}";

/// Reduce a request path to a route label drawn from a bounded set.
///
/// Known segments are kept, numbers become `{id}`, UUIDs become `{uuid}` and
/// anything else becomes `{param}`. Paths that start outside the served
/// routes, or nest deeper than any of them, all share [`UNMATCHED_ROUTE`].
pub(super) fn normalise_route(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if segments.len() > MAX_SEGMENTS
        || segments
            .first()
            .is_some_and(|first| !ROUTE_SEGMENTS.contains(first))
    {
        return UNMATCHED_ROUTE.to_owned();
    }

    if segments.is_empty() {
        return "/".to_owned();
    }

    let mut normalised = String::new();

    for segment in segments {
        normalised.push('/');
        normalised.push_str(segment_label(segment));
    }

    normalised
}

fn segment_label(segment: &str) -> &str {
    if ROUTE_SEGMENTS.contains(&segment) {
        segment
    } else if segment.parse::<u64>().is_ok() {
        "{id}"
    } else if Uuid::parse_str(segment).is_ok() {
        "{uuid}"
    } else {
        "{param}"
    }
}
