use dioxus::prelude::*;

use crate::components::{LanguageToggle, SectionLink};
use crate::core::navigation::{NavigationState, Section};
use crate::core::platform::DocumentScrollLock;
use crate::i18n::use_locale;
use crate::t;

/// Full-screen mobile menu. Mounted by the nav bar while the menu is open.
#[component]
pub fn MenuOverlay(nav: Signal<NavigationState>) -> Element {
    let locale = use_locale();
    let close_label = t!(locale(), "nav-menu-close");

    rsx! {
        div {
            class: "menu-overlay",
            onclick: move |_| {
                let mut nav = nav;
                nav.write().close_menu(&DocumentScrollLock);
            },
            button {
                class: "menu-overlay__close",
                r#type: "button",
                aria_label: "{close_label}",
                "×"
            }
            nav {
                class: "menu-overlay__panel",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                for section in Section::NAV {
                    SectionLink {
                        key: "{section.anchor()}",
                        section,
                        label: section.nav_label(locale()),
                        class: "menu-overlay__link",
                        nav,
                    }
                }
                div { class: "menu-overlay__locale",
                    LanguageToggle {}
                }
            }
        }
    }
}
