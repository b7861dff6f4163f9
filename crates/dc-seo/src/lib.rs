//! DisposableCheck SEO Core
//!
//! This crate provides the metadata plumbing shared by the website and the
//! build tooling: canonical path/URL normalization, breadcrumb construction,
//! schema.org structured data, the head-metadata surface and its reconciler,
//! and the sitemap renderer.

pub mod head;
pub mod routes;
pub mod sitemap;

pub use head::{Alternate, HeadSurface, OgType, PageMeta};
pub use routes::{
    build_breadcrumb_schema, build_breadcrumbs, normalize_path, to_absolute_url, BreadcrumbItem,
    CANONICAL_ROUTES, SITE_ORIGIN,
};
