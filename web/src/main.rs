use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::site::{SiteHead, SiteMetadata};
use ui::views::Portfolio;

fn main() {
    if let Err(err) = dioxus::logger::init(if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let metadata = use_hook(SiteMetadata::from_env);
    use_hook(|| info!(base_url = %metadata.base_url, "portfolio starting"));

    rsx! {
        // Global page resources
        SiteHead { metadata }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Portfolio {}
    }
}
