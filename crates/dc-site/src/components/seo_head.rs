//! Page metadata component.
//!
//! Every routed page supplies its descriptor once per mount. The component
//! runs the head reconciler against a fresh surface for the current route
//! and mirrors the reconciled surface into the document head.

use leptos::*;
use leptos_meta::{Html, Link, Meta, Script, Title};
use leptos_router::use_location;
use serde_json::Value;

use dc_seo::head::{HeadNode, MetaKey};
use dc_seo::{Alternate, HeadSurface, OgType, PageMeta};

#[component]
pub fn SeoHead(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] og_type: OgType,
    #[prop(optional, into)] image: Option<String>,
    /// Canonical path override; defaults to the current route.
    #[prop(optional, into)] path: Option<String>,
    #[prop(optional, into)] robots: Option<String>,
    /// Structured-data objects, emitted in order ahead of the breadcrumb list.
    #[prop(optional)] schemas: Vec<Value>,
    #[prop(optional)] alternates: Vec<Alternate>,
) -> impl IntoView {
    let location = use_location();

    let mut meta = PageMeta::new(title, description)
        .with_type(og_type)
        .with_schemas(schemas)
        .with_alternates(alternates);
    if let Some(image) = image {
        meta = meta.with_image(image);
    }
    if let Some(path) = path {
        meta = meta.with_path(path);
    }
    if let Some(robots) = robots {
        meta = meta.with_robots(robots);
    }

    // Recomputed per (route, descriptor) combination, nothing else.
    let surface = create_memo(move |_| {
        let mut surface = HeadSurface::new();
        surface.apply(&meta, &location.pathname.get());
        surface
    });

    let tags = move || {
        surface
            .get()
            .tags()
            .iter()
            .map(|tag| match &tag.node {
                HeadNode::Meta {
                    attr: MetaKey::Name,
                    key,
                    content,
                } => view! { <Meta name=key.clone() content=content.clone()/> }.into_view(),
                HeadNode::Meta {
                    attr: MetaKey::Property,
                    key,
                    content,
                } => view! { <Meta property=key.clone() content=content.clone()/> }.into_view(),
                HeadNode::Link {
                    rel,
                    hreflang: Some(hreflang),
                    href,
                } => view! {
                    <Link rel=rel.clone() hreflang=hreflang.clone() href=href.clone()/>
                }
                .into_view(),
                HeadNode::Link {
                    rel,
                    hreflang: None,
                    href,
                } => view! { <Link rel=rel.clone() href=href.clone()/> }.into_view(),
                HeadNode::Script { json } => {
                    let payload = serde_json::to_string(json).unwrap_or_default();
                    view! { <Script type_="application/ld+json">{payload}</Script> }.into_view()
                }
            })
            .collect_view()
    };

    view! {
        <Html lang="en"/>
        <Title text=move || surface.get().title().to_string()/>
        {tags}
    }
}
