use dioxus::prelude::*;

/// `Label: value` line, linked when `href` is given.
#[component]
pub fn ContactItem(label: &'static str, value: &'static str, href: Option<&'static str>) -> Element {
    rsx! {
        div { class: "contact",
            span { class: "contact__label", "{label}" }
            ": "
            if let Some(href) = href {
                a {
                    class: "contact__link",
                    href,
                    target: "_blank",
                    rel: "noopener",
                    "{value}"
                }
            } else {
                span { "{value}" }
            }
        }
    }
}
