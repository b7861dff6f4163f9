//! Route path normalization, breadcrumbs, and breadcrumb structured data.
//!
//! Everything here is pure and total: malformed input degrades to `/` rather
//! than producing an error.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

/// Canonical origin all site-relative paths resolve against.
pub const SITE_ORIGIN: &str = "https://disposablecheck.com";

/// Static route list consumed by the sitemap generator.
pub const CANONICAL_ROUTES: [&str; 8] = [
    "/",
    "/bulk",
    "/report",
    "/docs",
    "/get-api-key",
    "/terms",
    "/the-disposable-email-epidemic",
    "/value-proposition",
];

/// One entry in a breadcrumb trail, ordered root-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub path: String,
}

/// Display labels for routes whose slug would read poorly.
fn route_label(path: &str) -> Option<&'static str> {
    match path {
        "/" => Some("Home"),
        "/bulk" => Some("Bulk Email Check"),
        "/report" => Some("Report Disposable Domain"),
        "/docs" => Some("Disposable Email API Documentation"),
        "/get-api-key" => Some("Get Free API Key"),
        "/terms" => Some("Terms of Service"),
        "/the-disposable-email-epidemic" => Some("Disposable Email Research"),
        "/value-proposition" => Some("Disposable Email Checker Value Proposition"),
        _ => None,
    }
}

/// Title-case a path segment, splitting words on `-` only.
fn format_slug(segment: &str) -> String {
    segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a raw route path into its canonical form.
///
/// Strips everything from the first `?` or `#`, guarantees a leading `/`,
/// and removes trailing slashes (the root path stays `/`). Idempotent.
pub fn normalize_path(path: &str) -> String {
    let cut = path.find(['?', '#']).map_or(path, |idx| &path[..idx]);
    if cut.is_empty() {
        return "/".to_string();
    }

    let mut normalized = if cut.starts_with('/') {
        cut.to_string()
    } else {
        format!("/{cut}")
    };

    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

/// Resolve a site-relative path to an absolute URL.
///
/// Inputs that are already absolute `http(s)` URLs pass through unchanged,
/// which keeps externally hosted image assets intact.
pub fn to_absolute_url(path_or_url: &str) -> String {
    if path_or_url.is_empty() {
        return SITE_ORIGIN.to_string();
    }
    if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
        return path_or_url.to_string();
    }

    Url::parse(SITE_ORIGIN)
        .ok()
        .and_then(|origin| origin.join(path_or_url).ok())
        .map(|url| url.to_string())
        .unwrap_or_else(|| SITE_ORIGIN.to_string())
}

/// Build the breadcrumb trail for a path, root-first.
///
/// Every non-root trail starts with Home, followed by one entry per
/// cumulative path segment. Labels come from the static route table,
/// falling back to title-casing the segment.
pub fn build_breadcrumbs(path: &str) -> Vec<BreadcrumbItem> {
    let normalized = normalize_path(path);
    let mut breadcrumbs = vec![BreadcrumbItem {
        name: "Home".to_string(),
        path: "/".to_string(),
    }];

    if normalized == "/" {
        return breadcrumbs;
    }

    let mut current_path = String::new();
    for segment in normalized.split('/').filter(|s| !s.is_empty()) {
        current_path.push('/');
        current_path.push_str(segment);
        let name = route_label(&current_path)
            .map(str::to_string)
            .unwrap_or_else(|| format_slug(segment));
        breadcrumbs.push(BreadcrumbItem {
            name,
            path: current_path.clone(),
        });
    }

    breadcrumbs
}

/// Build a schema.org `BreadcrumbList` for an ordered breadcrumb trail.
pub fn build_breadcrumb_schema(items: &[BreadcrumbItem]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": to_absolute_url(&item.path),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_query_and_fragment() {
        assert_eq!(normalize_path("/bulk?x=1#y"), "/bulk");
        assert_eq!(normalize_path("/bulk#section"), "/bulk");
        assert_eq!(normalize_path("?x=1"), "/");
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_path("/bulk/"), "/bulk");
        assert_eq!(normalize_path("/docs//"), "/docs");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn test_normalize_empty_is_root() {
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize_path("bulk"), "/bulk");
    }

    #[test]
    fn test_absolute_url_passthrough() {
        assert_eq!(
            to_absolute_url("https://example.com/a"),
            "https://example.com/a"
        );
        assert_eq!(to_absolute_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_absolute_url_resolves_paths() {
        assert_eq!(to_absolute_url("/docs"), format!("{SITE_ORIGIN}/docs"));
        assert_eq!(to_absolute_url(""), SITE_ORIGIN);
    }

    #[test]
    fn test_breadcrumbs_root() {
        let crumbs = build_breadcrumbs("/");
        assert_eq!(
            crumbs,
            vec![BreadcrumbItem {
                name: "Home".to_string(),
                path: "/".to_string(),
            }]
        );
    }

    #[test]
    fn test_breadcrumbs_labeled_route() {
        let crumbs = build_breadcrumbs("/get-api-key");
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].name, "Home");
        assert_eq!(crumbs[1].name, "Get Free API Key");
        assert_eq!(crumbs[1].path, "/get-api-key");
    }

    #[test]
    fn test_breadcrumbs_slug_fallback() {
        let crumbs = build_breadcrumbs("/some-new-page");
        assert_eq!(crumbs[1].name, "Some New Page");
    }

    #[test]
    fn test_breadcrumbs_nested_accumulates_paths() {
        let crumbs = build_breadcrumbs("/docs/rate-limits");
        assert_eq!(crumbs.len(), 3);
        assert_eq!(crumbs[1].path, "/docs");
        assert_eq!(crumbs[2].path, "/docs/rate-limits");
        assert_eq!(crumbs[2].name, "Rate Limits");
    }

    #[test]
    fn test_breadcrumb_schema_positions() {
        let crumbs = build_breadcrumbs("/docs/rate-limits");
        let schema = build_breadcrumb_schema(&crumbs);
        let elements = schema["itemListElement"].as_array().unwrap();
        assert_eq!(elements.len(), crumbs.len());
        for (index, element) in elements.iter().enumerate() {
            assert_eq!(element["position"], (index + 1) as u64);
        }
        assert_eq!(elements[0]["item"], format!("{SITE_ORIGIN}/"));
        assert_eq!(elements[1]["item"], format!("{SITE_ORIGIN}/docs"));
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(path in ".*") {
            let once = normalize_path(&path);
            prop_assert_eq!(normalize_path(&once), once);
        }

        #[test]
        fn normalize_output_is_canonical(path in ".*") {
            let normalized = normalize_path(&path);
            prop_assert!(normalized.starts_with('/'));
            prop_assert!(normalized == "/" || !normalized.ends_with('/'));
            prop_assert!(!normalized.contains('?'));
            prop_assert!(!normalized.contains('#'));
        }

        #[test]
        fn absolute_url_is_idempotent(path in "/[a-z0-9-]{0,24}") {
            let once = to_absolute_url(&path);
            prop_assert_eq!(to_absolute_url(&once), once);
        }
    }
}
