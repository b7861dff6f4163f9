//! Sitemap rendering for the build-time generator.

use chrono::NaiveDate;

use crate::routes::normalize_path;

/// Render a sitemap.org `urlset` document for a list of canonical routes.
///
/// Routes are normalized before emission, so duplicates introduced by
/// trailing slashes collapse into one entry.
pub fn render_sitemap(origin: &str, routes: &[&str], lastmod: NaiveDate) -> String {
    let origin = origin.trim_end_matches('/');
    let lastmod = lastmod.format("%Y-%m-%d").to_string();

    let mut seen: Vec<String> = Vec::new();
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for route in routes {
        let path = normalize_path(route);
        if seen.contains(&path) {
            continue;
        }
        seen.push(path.clone());

        out.push_str("  <url>\n");
        out.push_str(&format!(
            "    <loc>{}</loc>\n",
            escape_xml(&format!("{origin}{path}"))
        ));
        out.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        out.push_str("  </url>\n");
    }

    out.push_str("</urlset>\n");
    out
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{CANONICAL_ROUTES, SITE_ORIGIN};

    fn lastmod() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()
    }

    #[test]
    fn test_renders_every_canonical_route() {
        let xml = render_sitemap(SITE_ORIGIN, &CANONICAL_ROUTES, lastmod());
        assert_eq!(xml.matches("<url>").count(), CANONICAL_ROUTES.len());
        assert!(xml.contains("<loc>https://disposablecheck.com/</loc>"));
        assert!(xml.contains("<loc>https://disposablecheck.com/get-api-key</loc>"));
        assert!(xml.contains("<lastmod>2026-01-26</lastmod>"));
    }

    #[test]
    fn test_trailing_slash_duplicates_collapse() {
        let xml = render_sitemap(SITE_ORIGIN, &["/bulk", "/bulk/"], lastmod());
        assert_eq!(xml.matches("<url>").count(), 1);
    }

    #[test]
    fn test_origin_trailing_slash_is_trimmed() {
        let xml = render_sitemap("https://example.com/", &["/docs"], lastmod());
        assert!(xml.contains("<loc>https://example.com/docs</loc>"));
    }
}
