//! End-to-end reconciler behavior over a shell-seeded surface.

use serde_json::json;

use dc_seo::head::{HeadNode, MetaKey};
use dc_seo::{Alternate, HeadSurface, PageMeta};

/// A surface the hosting shell populated before the first navigation.
fn shell_surface() -> HeadSurface {
    let mut surface = HeadSurface::new();
    surface.seed_meta(MetaKey::Name, "viewport", "width=device-width, initial-scale=1");
    surface.seed_meta(MetaKey::Name, "keywords", "left,over,keywords");
    surface.seed_meta(MetaKey::Name, "description", "shell placeholder");
    surface.seed_link("icon", None, "/favicon.ico");
    surface
}

fn count_nodes(surface: &HeadSurface, predicate: impl Fn(&HeadNode) -> bool) -> usize {
    surface
        .tags()
        .iter()
        .filter(|tag| predicate(&tag.node))
        .count()
}

#[test]
fn repeated_navigation_never_accumulates_nodes() {
    let mut surface = shell_surface();

    let home = PageMeta::new("Home", "Home description");
    let research = PageMeta::new("Research", "Research description")
        .with_schemas(vec![json!({"@type": "Article"}), json!({"@type": "FAQPage"})])
        .with_alternates(vec![Alternate::new("tr", "/tr/research")]);

    for _ in 0..3 {
        surface.apply(&home, "/");
        surface.apply(&research, "/the-disposable-email-epidemic");
    }

    // Two custom schemas plus the breadcrumb list, rebuilt each pass.
    assert_eq!(
        count_nodes(&surface, |node| matches!(node, HeadNode::Script { .. })),
        3
    );
    // Implicit en alternate plus the one declared.
    assert_eq!(
        count_nodes(&surface, |node| {
            matches!(node, HeadNode::Link { rel, .. } if rel == "alternate")
        }),
        2
    );
    assert_eq!(
        count_nodes(&surface, |node| {
            matches!(node, HeadNode::Link { rel, .. } if rel == "canonical")
        }),
        1
    );
    assert_eq!(
        count_nodes(&surface, |node| {
            matches!(
                node,
                HeadNode::Meta { attr: MetaKey::Name, key, .. } if key == "description"
            )
        }),
        1
    );
    // The shell's keywords meta never comes back; its other tags survive.
    assert_eq!(
        count_nodes(&surface, |node| {
            matches!(
                node,
                HeadNode::Meta { attr: MetaKey::Name, key, .. } if key == "keywords"
            )
        }),
        0
    );
    assert_eq!(
        count_nodes(&surface, |node| {
            matches!(node, HeadNode::Link { rel, .. } if rel == "icon")
        }),
        1
    );
}

#[test]
fn rendered_head_reflects_last_navigation() {
    let mut surface = shell_surface();
    surface.apply(
        &PageMeta::new("Research", "Research description")
            .with_schema(json!({"@type": "Article"})),
        "/the-disposable-email-epidemic",
    );
    surface.apply(&PageMeta::new("Bulk Email Check", "Bulk description"), "/bulk");

    let html = surface.render();
    assert!(html.contains("<title>Bulk Email Check</title>"));
    assert!(html.contains(
        "<link rel=\"canonical\" href=\"https://disposablecheck.com/bulk\">"
    ));
    assert!(!html.contains("Research description"));
    // Only the breadcrumb schema remains after leaving the article.
    assert_eq!(html.matches("application/ld+json").count(), 1);
    assert!(html.contains("BreadcrumbList"));
    assert!(html.contains("Bulk Email Check"));
    assert_eq!(surface.lang(), "en");
}
