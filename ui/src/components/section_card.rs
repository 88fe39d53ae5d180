use dioxus::prelude::*;

use crate::core::language::Language;
use crate::core::sections::SectionDescriptor;

/// Anchored page section: heading from the descriptor, body in a card.
#[component]
pub fn SectionCard(
    section: &'static SectionDescriptor,
    language: Language,
    children: Element,
) -> Element {
    rsx! {
        section { id: section.id, class: "section",
            h2 { class: "section__title", "{section.label(language)}" }
            div { class: "section__card", {children} }
        }
    }
}
