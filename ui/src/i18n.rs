//! Localization of the navigation chrome.
//!
//! The résumé content itself is authored twice (see `views::korean` and
//! `views::english`); Fluent only carries the handful of strings the
//! navigation bar shares between both trees.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/portfolio-ui.ftl   (fallback/reference)
//!   ko-KR/portfolio-ui.ftl   (default page language)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let print = t!("nav-print");
//! ```
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::core::language::Language;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-print")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "portfolio-ui";

const FALLBACK: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent). The page opens in Korean regardless of
/// the browser's preferred languages.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = set_language(Language::default().locale()) {
            warn!(%err, "failed selecting page language; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Tags that are unparsable or have no embedded
/// bundle are ignored (Ok returned) so the active bundle never silently
/// drops to the fallback.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring unparsable language tag");
        return Ok(());
    };
    if !available_languages().iter().any(|code| code == tag) {
        debug!(tag, "ignoring language without an embedded bundle");
        return Ok(());
    }
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use i18n_embed::LanguageLoader;

    use super::*;

    fn loader_for(tag: &str) -> FluentLanguageLoader {
        let fallback: LanguageIdentifier = FALLBACK.parse().unwrap();
        let loader = FluentLanguageLoader::new(DOMAIN, fallback);
        let lang: LanguageIdentifier = tag.parse().unwrap();
        i18n_embed::select(&loader, &Localizations, &[lang]).unwrap();
        loader
    }

    #[test]
    fn both_page_languages_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "ko-KR"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-brand");
        assert_eq!(s, "SmallSteadyCodes");
    }

    #[test]
    fn each_language_resolves_its_own_bundle() {
        assert_eq!(loader_for("ko-KR").get("nav-toggle-label"), "언어 전환");
        assert_eq!(loader_for("en-US").get("nav-toggle-label"), "Toggle language");
    }

    #[test]
    fn compile_time_checks_read_the_runtime_bundle() {
        const CONFIG: &str = include_str!("../i18n.toml");
        assert!(
            CONFIG.contains(&format!("domain = \"{DOMAIN}\"")),
            "i18n.toml must pin the `{DOMAIN}` domain for fl!()"
        );
        for lang in available_languages() {
            let bundle = format!("{lang}/{DOMAIN}.ftl");
            assert!(Localizations::get(&bundle).is_some(), "{bundle} not embedded");
        }
    }

    #[test]
    fn unknown_tags_are_ignored() {
        init();
        let before = LOADER.current_language();
        assert!(set_language("zz-ZZ").is_ok());
        assert!(set_language("not a tag").is_ok());
        assert_eq!(LOADER.current_language(), before);
    }
}
