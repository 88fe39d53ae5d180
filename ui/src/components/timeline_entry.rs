use dioxus::prelude::*;

/// Heading row (title and period) with an optional subtitle and body, shared
/// by the experience and project listings.
#[component]
pub fn TimelineEntry(
    title: &'static str,
    period: &'static str,
    subtitle: &'static str,
    children: Element,
) -> Element {
    rsx! {
        div { class: "entry",
            div { class: "entry__heading",
                h3 { class: "entry__title", "{title}" }
                span { class: "entry__period", "{period}" }
            }
            p { class: "entry__subtitle", "{subtitle}" }
            {children}
        }
    }
}
