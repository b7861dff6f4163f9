//! Head-metadata surface and reconciler.
//!
//! The surface is an owned model of the document head: title, language
//! attribute, and an ordered tag list. Tags created by the reconciler carry
//! an ownership flag so a later pass can remove exactly its own prior
//! output and nothing else. `apply` is a complete, synchronous transition:
//! re-running it with the same descriptor and route leaves the surface in
//! the same observable state.

use serde_json::Value;

use crate::routes::{build_breadcrumb_schema, build_breadcrumbs, normalize_path, to_absolute_url};

const SITE_LANG: &str = "en";
const OG_LOCALE: &str = "en_US";
const TWITTER_CARD: &str = "summary_large_image";
const DEFAULT_IMAGE: &str = "/og-image.png";
const DEFAULT_ROBOTS: &str = "index,follow";

/// Open Graph object type for a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

/// A language variant of the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

impl Alternate {
    pub fn new(hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            hreflang: hreflang.into(),
            href: href.into(),
        }
    }
}

/// Metadata descriptor supplied by each routed page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub og_type: OgType,
    pub image: String,
    pub path: Option<String>,
    pub robots: String,
    pub schemas: Vec<Value>,
    pub alternates: Vec<Alternate>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            og_type: OgType::Website,
            image: DEFAULT_IMAGE.to_string(),
            path: None,
            robots: DEFAULT_ROBOTS.to_string(),
            schemas: Vec::new(),
            alternates: Vec::new(),
        }
    }

    pub fn with_type(mut self, og_type: OgType) -> Self {
        self.og_type = og_type;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Pin the canonical path instead of deriving it from the current route.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_robots(mut self, robots: impl Into<String>) -> Self {
        self.robots = robots.into();
        self
    }

    /// Append one structured-data object. Order is preserved in the output.
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schemas.push(schema);
        self
    }

    pub fn with_schemas(mut self, schemas: Vec<Value>) -> Self {
        self.schemas.extend(schemas);
        self
    }

    pub fn with_alternates(mut self, alternates: Vec<Alternate>) -> Self {
        self.alternates = alternates;
        self
    }
}

/// Which attribute a meta tag is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Name,
    Property,
}

impl MetaKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        }
    }
}

/// One tag in the head model.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadNode {
    Meta {
        attr: MetaKey,
        key: String,
        content: String,
    },
    Link {
        rel: String,
        hreflang: Option<String>,
        href: String,
    },
    /// A JSON-LD structured-data script.
    Script { json: Value },
}

/// A head tag plus its ownership flag.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadTag {
    pub node: HeadNode,
    /// True for tags this mechanism created; only those may be cleaned up.
    pub managed: bool,
}

/// Owned model of the document head metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadSurface {
    title: String,
    lang: String,
    tags: Vec<HeadTag>,
}

impl HeadSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Language attribute for the document element, kept alongside the head
    /// tags because the reconciler owns both.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn tags(&self) -> &[HeadTag] {
        &self.tags
    }

    /// Seed an unmanaged meta tag, as a hosting shell would at load time.
    pub fn seed_meta(&mut self, attr: MetaKey, key: impl Into<String>, content: impl Into<String>) {
        self.tags.push(HeadTag {
            node: HeadNode::Meta {
                attr,
                key: key.into(),
                content: content.into(),
            },
            managed: false,
        });
    }

    /// Seed an unmanaged link tag.
    pub fn seed_link(
        &mut self,
        rel: impl Into<String>,
        hreflang: Option<String>,
        href: impl Into<String>,
    ) {
        self.tags.push(HeadTag {
            node: HeadNode::Link {
                rel: rel.into(),
                hreflang,
                href: href.into(),
            },
            managed: false,
        });
    }

    /// Reconcile the surface against a page descriptor and the current route.
    ///
    /// Singleton meta tags and the canonical link are upserted by key;
    /// alternate links and JSON-LD scripts vary in cardinality per page, so
    /// the previously owned ones are rebuilt from scratch. Tags not created
    /// by this mechanism are left alone, except a stray `keywords` meta,
    /// which is always removed.
    pub fn apply(&mut self, meta: &PageMeta, current_route: &str) {
        let current_path = normalize_path(meta.path.as_deref().unwrap_or(current_route));
        let canonical_url = to_absolute_url(&current_path);
        let image_url = to_absolute_url(&meta.image);

        let breadcrumb_schema = build_breadcrumb_schema(&build_breadcrumbs(&current_path));
        let mut schemas = meta.schemas.clone();
        schemas.push(breadcrumb_schema);

        self.title = meta.title.clone();
        self.lang = SITE_LANG.to_string();

        self.tags.retain(|tag| {
            !matches!(
                &tag.node,
                HeadNode::Meta { attr: MetaKey::Name, key, .. } if key == "keywords"
            )
        });
        self.tags.retain(|tag| {
            !(tag.managed
                && matches!(&tag.node, HeadNode::Link { rel, .. } if rel == "alternate"))
        });
        self.tags
            .retain(|tag| !(tag.managed && matches!(tag.node, HeadNode::Script { .. })));

        self.upsert_meta(MetaKey::Name, "description", &meta.description);
        self.upsert_meta(MetaKey::Name, "robots", &meta.robots);
        self.upsert_meta(MetaKey::Property, "og:title", &meta.title);
        self.upsert_meta(MetaKey::Property, "og:description", &meta.description);
        self.upsert_meta(MetaKey::Property, "og:type", meta.og_type.as_str());
        self.upsert_meta(MetaKey::Property, "og:url", &canonical_url);
        self.upsert_meta(MetaKey::Property, "og:image", &image_url);
        self.upsert_meta(MetaKey::Property, "og:locale", OG_LOCALE);
        self.upsert_meta(MetaKey::Name, "twitter:card", TWITTER_CARD);
        self.upsert_meta(MetaKey::Name, "twitter:title", &meta.title);
        self.upsert_meta(MetaKey::Name, "twitter:description", &meta.description);
        self.upsert_meta(MetaKey::Name, "twitter:image", &image_url);

        self.upsert_canonical(&canonical_url);

        if !meta.alternates.is_empty() {
            self.push_owned_alternate(SITE_LANG, &canonical_url);
            for alternate in &meta.alternates {
                self.push_owned_alternate(&alternate.hreflang, &to_absolute_url(&alternate.href));
            }
        }

        for schema in schemas {
            self.tags.push(HeadTag {
                node: HeadNode::Script { json: schema },
                managed: true,
            });
        }
    }

    fn upsert_meta(&mut self, attr: MetaKey, key: &str, content: &str) {
        for tag in &mut self.tags {
            if let HeadNode::Meta {
                attr: tag_attr,
                key: tag_key,
                content: tag_content,
            } = &mut tag.node
            {
                if *tag_attr == attr && tag_key == key {
                    *tag_content = content.to_string();
                    tag.managed = true;
                    return;
                }
            }
        }
        self.tags.push(HeadTag {
            node: HeadNode::Meta {
                attr,
                key: key.to_string(),
                content: content.to_string(),
            },
            managed: true,
        });
    }

    fn upsert_canonical(&mut self, href: &str) {
        for tag in &mut self.tags {
            if let HeadNode::Link {
                rel,
                href: tag_href,
                ..
            } = &mut tag.node
            {
                if rel == "canonical" {
                    *tag_href = href.to_string();
                    tag.managed = true;
                    return;
                }
            }
        }
        self.tags.push(HeadTag {
            node: HeadNode::Link {
                rel: "canonical".to_string(),
                hreflang: None,
                href: href.to_string(),
            },
            managed: true,
        });
    }

    fn push_owned_alternate(&mut self, hreflang: &str, href: &str) {
        self.tags.push(HeadTag {
            node: HeadNode::Link {
                rel: "alternate".to_string(),
                hreflang: Some(hreflang.to_string()),
                href: href.to_string(),
            },
            managed: true,
        });
    }

    /// Render the surface as head markup for server-side injection.
    ///
    /// The document language attribute is not part of the markup; callers
    /// place `lang()` on the root element themselves.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<title>");
        out.push_str(&escape_html(&self.title));
        out.push_str("</title>\n");

        for tag in &self.tags {
            match &tag.node {
                HeadNode::Meta { attr, key, content } => {
                    out.push_str(&format!(
                        "<meta {}=\"{}\" content=\"{}\">\n",
                        attr.as_str(),
                        escape_html(key),
                        escape_html(content)
                    ));
                }
                HeadNode::Link {
                    rel,
                    hreflang,
                    href,
                } => match hreflang {
                    Some(hreflang) => out.push_str(&format!(
                        "<link rel=\"{}\" hreflang=\"{}\" href=\"{}\">\n",
                        escape_html(rel),
                        escape_html(hreflang),
                        escape_html(href)
                    )),
                    None => out.push_str(&format!(
                        "<link rel=\"{}\" href=\"{}\">\n",
                        escape_html(rel),
                        escape_html(href)
                    )),
                },
                HeadNode::Script { json } => {
                    let payload = serde_json::to_string(json)
                        .unwrap_or_default()
                        .replace('<', "\\u003c");
                    out.push_str("<script type=\"application/ld+json\">");
                    out.push_str(&payload);
                    out.push_str("</script>\n");
                }
            }
        }

        out
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta_count(surface: &HeadSurface, attr: MetaKey, key: &str) -> usize {
        surface
            .tags()
            .iter()
            .filter(|tag| {
                matches!(
                    &tag.node,
                    HeadNode::Meta { attr: a, key: k, .. } if *a == attr && k == key
                )
            })
            .count()
    }

    fn meta_content(surface: &HeadSurface, attr: MetaKey, key: &str) -> Option<String> {
        surface.tags().iter().find_map(|tag| match &tag.node {
            HeadNode::Meta {
                attr: a,
                key: k,
                content,
            } if *a == attr && k == key => Some(content.clone()),
            _ => None,
        })
    }

    fn script_count(surface: &HeadSurface) -> usize {
        surface
            .tags()
            .iter()
            .filter(|tag| matches!(tag.node, HeadNode::Script { .. }))
            .count()
    }

    fn canonical_href(surface: &HeadSurface) -> Option<String> {
        surface.tags().iter().find_map(|tag| match &tag.node {
            HeadNode::Link { rel, href, .. } if rel == "canonical" => Some(href.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_apply_sets_title_and_lang() {
        let mut surface = HeadSurface::new();
        surface.apply(&PageMeta::new("Check Email", "Find disposable emails"), "/");
        assert_eq!(surface.title(), "Check Email");
        assert_eq!(surface.lang(), "en");
    }

    #[test]
    fn test_apply_upserts_all_singletons() {
        let mut surface = HeadSurface::new();
        let meta = PageMeta::new("Title", "Description").with_type(OgType::Article);
        surface.apply(&meta, "/bulk");

        for (attr, key) in [
            (MetaKey::Name, "description"),
            (MetaKey::Name, "robots"),
            (MetaKey::Property, "og:title"),
            (MetaKey::Property, "og:description"),
            (MetaKey::Property, "og:type"),
            (MetaKey::Property, "og:url"),
            (MetaKey::Property, "og:image"),
            (MetaKey::Property, "og:locale"),
            (MetaKey::Name, "twitter:card"),
            (MetaKey::Name, "twitter:title"),
            (MetaKey::Name, "twitter:description"),
            (MetaKey::Name, "twitter:image"),
        ] {
            assert_eq!(meta_count(&surface, attr, key), 1, "missing {key}");
        }

        assert_eq!(
            meta_content(&surface, MetaKey::Property, "og:type").unwrap(),
            "article"
        );
        assert_eq!(
            meta_content(&surface, MetaKey::Property, "og:url").unwrap(),
            "https://disposablecheck.com/bulk"
        );
        assert_eq!(
            meta_content(&surface, MetaKey::Name, "twitter:card").unwrap(),
            "summary_large_image"
        );
        assert_eq!(
            canonical_href(&surface).unwrap(),
            "https://disposablecheck.com/bulk"
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let meta = PageMeta::new("Title", "Description")
            .with_schema(json!({"@type": "Article"}))
            .with_alternates(vec![Alternate::new("tr", "/tr/bulk")]);

        let mut once = HeadSurface::new();
        once.apply(&meta, "/bulk");

        let mut twice = once.clone();
        twice.apply(&meta, "/bulk");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_descriptor_path_overrides_route() {
        let mut surface = HeadSurface::new();
        surface.apply(
            &PageMeta::new("Title", "Description").with_path("/docs"),
            "/somewhere-else",
        );
        assert_eq!(
            canonical_href(&surface).unwrap(),
            "https://disposablecheck.com/docs"
        );
    }

    #[test]
    fn test_custom_schemas_precede_breadcrumbs() {
        let mut surface = HeadSurface::new();
        let meta = PageMeta::new("Title", "Description")
            .with_schemas(vec![json!({"@type": "Article"}), json!({"@type": "FAQPage"})]);
        surface.apply(&meta, "/the-disposable-email-epidemic");

        let scripts: Vec<&Value> = surface
            .tags()
            .iter()
            .filter_map(|tag| match &tag.node {
                HeadNode::Script { json } => Some(json),
                _ => None,
            })
            .collect();

        assert_eq!(scripts.len(), 3);
        assert_eq!(scripts[0]["@type"], "Article");
        assert_eq!(scripts[1]["@type"], "FAQPage");
        assert_eq!(scripts[2]["@type"], "BreadcrumbList");
    }

    #[test]
    fn test_keywords_meta_is_removed() {
        let mut surface = HeadSurface::new();
        surface.seed_meta(MetaKey::Name, "keywords", "email,disposable,temp");
        surface.apply(&PageMeta::new("Title", "Description"), "/");
        assert_eq!(meta_count(&surface, MetaKey::Name, "keywords"), 0);
    }

    #[test]
    fn test_unmanaged_tags_survive() {
        let mut surface = HeadSurface::new();
        surface.seed_link("icon", None, "/favicon.ico");
        surface.seed_link("alternate", Some("fr".to_string()), "/fr");
        surface.seed_meta(MetaKey::Name, "viewport", "width=device-width");

        surface.apply(&PageMeta::new("Title", "Description"), "/");
        surface.apply(&PageMeta::new("Other", "Other description"), "/bulk");

        let unmanaged: Vec<_> = surface.tags().iter().filter(|tag| !tag.managed).collect();
        assert_eq!(unmanaged.len(), 3);
    }

    #[test]
    fn test_seeded_singleton_updated_in_place() {
        let mut surface = HeadSurface::new();
        surface.seed_meta(MetaKey::Name, "description", "shell default");
        surface.apply(&PageMeta::new("Title", "Real description"), "/");

        assert_eq!(meta_count(&surface, MetaKey::Name, "description"), 1);
        assert_eq!(
            meta_content(&surface, MetaKey::Name, "description").unwrap(),
            "Real description"
        );
    }

    #[test]
    fn test_alternates_include_implicit_en_first() {
        let mut surface = HeadSurface::new();
        let meta = PageMeta::new("Title", "Description")
            .with_alternates(vec![Alternate::new("tr", "/tr/bulk")]);
        surface.apply(&meta, "/bulk");

        let alternates: Vec<(String, String)> = surface
            .tags()
            .iter()
            .filter_map(|tag| match &tag.node {
                HeadNode::Link {
                    rel,
                    hreflang: Some(hreflang),
                    href,
                } if rel == "alternate" => Some((hreflang.clone(), href.clone())),
                _ => None,
            })
            .collect();

        assert_eq!(alternates.len(), 2);
        assert_eq!(alternates[0].0, "en");
        assert_eq!(alternates[0].1, "https://disposablecheck.com/bulk");
        assert_eq!(alternates[1].0, "tr");
        assert_eq!(alternates[1].1, "https://disposablecheck.com/tr/bulk");
    }

    #[test]
    fn test_no_alternates_without_descriptor_entries() {
        let mut surface = HeadSurface::new();
        surface.apply(&PageMeta::new("Title", "Description"), "/bulk");
        let count = surface
            .tags()
            .iter()
            .filter(|tag| matches!(&tag.node, HeadNode::Link { rel, .. } if rel == "alternate"))
            .count();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_navigation_replaces_page_scoped_tags() {
        let mut surface = HeadSurface::new();
        let research = PageMeta::new("Research", "Research description")
            .with_schemas(vec![json!({"@type": "Article"}), json!({"@type": "FAQPage"})]);
        surface.apply(&research, "/the-disposable-email-epidemic");
        assert_eq!(script_count(&surface), 3);

        surface.apply(&PageMeta::new("Home", "Home description"), "/");
        assert_eq!(script_count(&surface), 1);
        assert_eq!(
            canonical_href(&surface).unwrap(),
            "https://disposablecheck.com/"
        );
    }

    #[test]
    fn test_render_escapes_markup() {
        let mut surface = HeadSurface::new();
        surface.apply(
            &PageMeta::new("Tools & Toys", "Detect \"burner\" <addresses>"),
            "/",
        );
        let html = surface.render();
        assert!(html.contains("<title>Tools &amp; Toys</title>"));
        assert!(html.contains("Detect &quot;burner&quot; &lt;addresses&gt;"));
        assert!(!html.contains("<addresses>"));
    }
}
