//! Document-level metadata: title, description, social previews, canonical URL.
//!
//! The base URL is fixed at build time from `SITE_URL`; every absolute URL
//! in the descriptors is joined onto it.

use dioxus::prelude::*;
use thiserror::Error;
use tracing::warn;

/// Base URL used when `SITE_URL` is unset or invalid.
pub const FALLBACK_SITE_URL: &str = if cfg!(debug_assertions) {
    "http://localhost:8080"
} else {
    "https://smallsteadycodes.github.io"
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteConfigError {
    #[error("site url `{0}` must start with http:// or https://")]
    UnsupportedScheme(String),
    #[error("site url `{0}` has no host")]
    MissingHost(String),
}

/// Validate a base URL and trim trailing slashes.
pub fn parse_base_url(raw: &str) -> Result<String, SiteConfigError> {
    let trimmed = raw.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| SiteConfigError::UnsupportedScheme(raw.to_string()))?;

    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() {
        return Err(SiteConfigError::MissingHost(raw.to_string()));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Base URL from an optional configured value, falling back (with a warning)
/// when it is missing or malformed.
pub fn resolve_base_url(configured: Option<&str>) -> String {
    match configured.map(parse_base_url) {
        Some(Ok(url)) => url,
        Some(Err(err)) => {
            warn!(%err, fallback = FALLBACK_SITE_URL, "ignoring configured site url");
            FALLBACK_SITE_URL.to_string()
        }
        None => FALLBACK_SITE_URL.to_string(),
    }
}

/// `<meta>` keyed either by `name` or by Open Graph `property`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

impl MetaTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Name(name),
            content: content.into(),
        }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Property(property),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

/// Everything the document head carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub base_url: String,
    pub title: &'static str,
    pub description: &'static str,
    pub og_description: &'static str,
    pub site_name: &'static str,
    pub og_locale: &'static str,
    pub preview: PreviewImage,
    pub twitter_creator: &'static str,
    pub icon: &'static str,
    pub theme_color: &'static str,
}

impl SiteMetadata {
    /// Metadata for the base URL baked in at build time.
    pub fn from_env() -> Self {
        Self::with_base_url(resolve_base_url(option_env!("SITE_URL")))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            title: "프리랜서 개발자 이은진",
            description: "Java & Python 기반 ERP·공공 시스템 프리랜서 개발자 포트폴리오",
            og_description: "ERP·공공 시스템 중심 프리랜서 개발자 이은진의 포트폴리오입니다. \
                Java와 Python 기반의 안정적인 시스템 개발 및 성능 최적화를 수행합니다.",
            site_name: "Eunjin Lee Portfolio",
            og_locale: "ko_KR",
            preview: PreviewImage {
                path: "/preview.jpg",
                width: 600,
                height: 600,
                alt: "이은진 프로필",
            },
            twitter_creator: "@smallsteadycode",
            icon: "/favicon.ico",
            theme_color: "#ffffff",
        }
    }

    /// Join a root-relative path onto the base URL.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Canonical URL of the page (the site root).
    pub fn canonical(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// `<meta>` descriptors in emission order.
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        let preview_url = self.absolute(self.preview.path);
        vec![
            MetaTag::name("description", self.description),
            MetaTag::name("color-scheme", "light"),
            MetaTag::name("theme-color", self.theme_color),
            MetaTag::property("og:title", self.title),
            MetaTag::property("og:description", self.og_description),
            MetaTag::property("og:url", self.canonical()),
            MetaTag::property("og:site_name", self.site_name),
            MetaTag::property("og:image", preview_url.clone()),
            MetaTag::property("og:image:width", self.preview.width.to_string()),
            MetaTag::property("og:image:height", self.preview.height.to_string()),
            MetaTag::property("og:image:alt", self.preview.alt),
            MetaTag::property("og:locale", self.og_locale),
            MetaTag::property("og:type", "website"),
            MetaTag::name("twitter:card", "summary_large_image"),
            MetaTag::name("twitter:title", self.title),
            MetaTag::name("twitter:description", self.description),
            MetaTag::name("twitter:image", preview_url),
            MetaTag::name("twitter:creator", self.twitter_creator),
        ]
    }
}

/// Emits the metadata into the live document head.
#[component]
pub fn SiteHead(metadata: SiteMetadata) -> Element {
    let tags = metadata.meta_tags();

    rsx! {
        document::Title { "{metadata.title}" }
        for tag in tags {
            {meta_element(tag)}
        }
        document::Link { rel: "canonical", href: metadata.canonical() }
        document::Link { rel: "icon", href: metadata.icon }
    }
}

fn meta_element(tag: MetaTag) -> Element {
    match tag.key {
        MetaKey::Name(name) => rsx! {
            document::Meta { name: name.to_string(), content: tag.content }
        },
        MetaKey::Property(property) => rsx! {
            document::Meta { property: property.to_string(), content: tag.content }
        },
    }
}
