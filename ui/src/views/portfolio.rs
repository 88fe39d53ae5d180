use dioxus::prelude::*;
use tracing::debug;

use crate::components::SiteNavbar;
use crate::core::language::Language;
use crate::core::platform;
use crate::core::tracker::use_active_section;
use crate::i18n;

use super::{EnglishContent, KoreanContent};

/// The whole page, opening in Korean.
#[component]
pub fn Portfolio() -> Element {
    let language = use_signal(Language::default);
    rsx! { PortfolioPage { language } }
}

/// Navigation bar plus the content tree of `language`. The tracker lives
/// here, so switching language never resets the active section.
#[component]
pub fn PortfolioPage(language: Signal<Language>) -> Element {
    i18n::init();

    let active = use_active_section();

    // Runs after the render commits, so the heading read is the one on screen.
    use_effect(move || {
        let current = language();
        debug!(?current, "syncing document with rendered language");
        platform::set_document_lang(current.html_lang());
        platform::sync_title_from_heading();
    });

    rsx! {
        div { class: "portfolio",
            SiteNavbar { language, active }
            main { class: "portfolio__main",
                PageContent { language: language() }
            }
        }
    }
}

/// Content tree for one language.
#[component]
pub fn PageContent(language: Language) -> Element {
    rsx! {
        if language == Language::Korean {
            KoreanContent {}
        } else {
            EnglishContent {}
        }
    }
}
