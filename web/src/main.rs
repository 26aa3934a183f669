use dioxus::prelude::*;

use ui::components::{register_nav, Footer, NavBar, NavBuilder};
use ui::core::config::SiteConfig;
use ui::core::language::LanguageStore;
use ui::core::storage;
use ui::views::{Home, Imprint, Privacy};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/imprint")]
    Imprint {},
    #[route("/privacy")]
    Privacy {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn nav_home(class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_imprint(class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::Imprint {},
        "{label}"
    })
}
fn nav_privacy(class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::Privacy {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| LanguageStore::new(storage::default_store()));
    use_context_provider(SiteConfig::from_env);
    register_nav(NavBuilder {
        home: nav_home,
        imprint: nav_imprint,
        privacy: nav_privacy,
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Navbar and footer around every routed page.
#[component]
fn SiteShell() -> Element {
    rsx! {
        NavBar {}
        main { Outlet::<Route> {} }
        Footer {}
    }
}
