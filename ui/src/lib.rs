//! Shared UI crate for the portfolio page. Section tracking, language
//! switching, metadata and both content trees live here; the `web` and
//! `prerender` crates only pick a host.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod site;
pub mod views;

#[cfg(not(target_arch = "wasm32"))]
pub mod export;

pub mod components {
    // Sticky section navigation (components/site_navbar.rs)
    pub mod site_navbar;
    pub use site_navbar::SiteNavbar;

    // Content building blocks shared by both language trees
    mod contact_item;
    mod section_card;
    mod timeline_entry;
    pub use contact_item::ContactItem;
    pub use section_card::SectionCard;
    pub use timeline_entry::TimelineEntry;
}

/// Page theme, print rules included.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Same stylesheet as text, for documents rendered without an asset pipeline.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
