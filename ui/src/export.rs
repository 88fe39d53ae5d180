//! Static export: the page rendered to standalone HTML documents.
//!
//! The snapshot carries no script. Its title comes from the first rendered
//! heading, the same way the live page derives it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::language::Language;
use crate::core::title::{first_heading_text, resolve_title};
use crate::site::{MetaKey, MetaTag, SiteMetadata};
use crate::views::PageContent;
use crate::THEME_CSS_INLINE;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where each language's document lands inside the output directory.
pub fn document_path(language: Language) -> &'static str {
    match language {
        Language::Korean => "index.html",
        Language::English => "en/index.html",
    }
}

/// Markup of one language's content tree.
pub fn render_content(language: Language) -> String {
    dioxus_ssr::render_element(rsx! {
        main { class: "portfolio__main", PageContent { language } }
    })
}

/// A complete HTML document for `language`.
pub fn render_document(language: Language, metadata: &SiteMetadata) -> String {
    let content = render_content(language);
    let title = resolve_title(first_heading_text(&content).as_deref())
        .unwrap_or_else(|| metadata.title.to_string());

    let document = dioxus_ssr::render_element(rsx! {
        StaticDocument {
            lang: language.html_lang(),
            title,
            metadata: metadata.clone(),
            content,
        }
    });
    format!("<!DOCTYPE html>\n{document}\n")
}

/// The renderer writes attribute values verbatim; text nodes are escaped.
fn attr(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Document shell around pre-rendered content. `content` is renderer output
/// and is inserted as-is.
#[component]
fn StaticDocument(
    lang: &'static str,
    title: String,
    metadata: SiteMetadata,
    content: String,
) -> Element {
    rsx! {
        html { lang,
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{title}" }
                for tag in metadata.meta_tags() {
                    {static_meta(tag)}
                }
                link { rel: "canonical", href: attr(&metadata.canonical()) }
                link { rel: "icon", href: attr(metadata.icon) }
                style { dangerous_inner_html: THEME_CSS_INLINE }
            }
            body {
                div { class: "portfolio", dangerous_inner_html: content }
            }
        }
    }
}

fn static_meta(tag: MetaTag) -> Element {
    let content = attr(&tag.content);
    match tag.key {
        MetaKey::Name(name) => rsx! {
            meta { name, content }
        },
        MetaKey::Property(property) => rsx! {
            meta { "property": property, content }
        },
    }
}

/// Write every language's document under `out_dir`, returning the paths
/// written.
pub fn write_site(out_dir: &Path, metadata: &SiteMetadata) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::new();

    for language in [Language::Korean, Language::English] {
        let path = out_dir.join(document_path(language));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let html = render_document(language, metadata);
        debug!(?language, bytes = html.len(), "rendered document");
        fs::write(&path, html).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote static page");
        written.push(path);
    }

    Ok(written)
}
