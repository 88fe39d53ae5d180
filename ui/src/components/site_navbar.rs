use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::language::Language;
use crate::core::platform;
use crate::core::sections::{default_section, SECTIONS};
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/site_navbar.css");

/// Sticky page navigation: section links with the active one highlighted,
/// the language toggle and the print button.
///
/// `language` is written only by the toggle here; `active` is owned by the
/// section tracker and only read.
#[component]
pub fn SiteNavbar(language: Signal<Language>, active: ReadOnlySignal<&'static str>) -> Element {
    let current = language();
    let active_id = active();

    let mut language_signal = language;
    let on_toggle = move |_| {
        let next = language_signal.peek().toggle();
        if let Err(err) = i18n::set_language(next.locale()) {
            warn!(%err, locale = next.locale(), "navigation strings stay in the previous language");
        }
        debug!(?next, "language toggled");
        language_signal.set(next);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav { id: "site-nav", class: "site-nav",
            div { class: "site-nav__inner",
                a {
                    class: "site-nav__brand",
                    href: default_section().anchor(),
                    {t!("nav-brand")}
                }

                ul {
                    class: "site-nav__links",
                    aria_label: t!("nav-sections-label"),
                    for section in SECTIONS.iter() {
                        li { key: "{section.id}",
                            a {
                                class: if active_id == section.id { "site-nav__link site-nav__link--active" } else { "site-nav__link" },
                                href: section.anchor(),
                                "{section.label(current)}"
                                if active_id == section.id {
                                    span { class: "site-nav__indicator", aria_hidden: "true" }
                                }
                            }
                        }
                    }
                }

                div { class: "site-nav__actions",
                    button {
                        r#type: "button",
                        class: "site-nav__button site-nav__toggle",
                        aria_label: t!("nav-toggle-label"),
                        onclick: on_toggle,
                        "{current.toggle().short_code()}"
                    }
                    button {
                        r#type: "button",
                        class: "site-nav__button site-nav__print",
                        onclick: move |_| platform::print_page(),
                        {t!("nav-print")}
                    }
                }
            }
        }
    }
}
