use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::{LanguageToggle, MenuOverlay};
use crate::core::navigation::{NavigationState, Section};
use crate::core::platform::{self, DocumentScrollLock};
use crate::i18n::use_locale;
use crate::texts::NavTexts;

/// Route-aware links supplied by the platform crate.
///
/// `ui` does not know the platform's `Route` enum, so the platform registers
/// one constructor per page; each receives a CSS class plus the localized
/// label and returns a ready `Link`.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |class, label| rsx!( Link { class, to: Route::Home {}, "{label}" } ),
///     imprint: |class, label| rsx!( Link { class, to: Route::Imprint {}, "{label}" } ),
///     privacy: |class, label| rsx!( Link { class, to: Route::Privacy {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(class: &str, label: &str) -> Element,
    pub imprint: fn(class: &str, label: &str) -> Element,
    pub privacy: fn(class: &str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the platform links. Only the first call wins.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

pub(crate) fn nav_builder() -> Option<&'static NavBuilder> {
    NAV_BUILDER.get()
}

/// Home link; plain anchor when no builder is registered.
pub(crate) fn home_link(class: &str, label: &str) -> Element {
    match nav_builder() {
        Some(b) => (b.home)(class, label),
        None => rsx!( a { class: "{class}", href: "/", "{label}" } ),
    }
}

/// Anchor link to a main-page section.
///
/// Clicking scrolls in place when the section is on the current page; on the
/// legal pages the `/#anchor` href navigates home first.
#[component]
pub fn SectionLink(
    section: Section,
    #[props(into)] label: String,
    #[props(into)] class: String,
    nav: Signal<NavigationState>,
) -> Element {
    let active = nav.read().active_section() == Some(section);
    let class = if active {
        format!("{class} {class}--active")
    } else {
        class
    };

    rsx! {
        a {
            class: "{class}",
            href: section.href(),
            onclick: move |evt: MouseEvent| {
                let mut nav = nav;
                nav.write().select(section, &DocumentScrollLock);
                if platform::scroll_to_anchor(section.anchor()) {
                    evt.prevent_default();
                }
            },
            "{label}"
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let locale = use_locale();
    let nav_state = use_signal(NavigationState::new);
    let texts = NavTexts::load(locale());

    debug!("[nav] render locale={}", locale());

    let menu_open = nav_state.read().is_menu_open();
    let burger_label = if menu_open {
        texts.menu_close.clone()
    } else {
        texts.menu_open.clone()
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {home_link("navbar__brand-link", "MR")}
                }

                nav { class: "navbar__links",
                    for section in Section::NAV {
                        SectionLink {
                            key: "{section.anchor()}",
                            section,
                            label: section.nav_label(locale()),
                            class: "navbar__link",
                            nav: nav_state,
                        }
                    }
                }

                div { class: "navbar__locale",
                    LanguageToggle {}
                }

                button {
                    class: if menu_open { "navbar__burger navbar__burger--open" } else { "navbar__burger" },
                    r#type: "button",
                    aria_label: "{burger_label}",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| {
                        let mut nav_state = nav_state;
                        nav_state.write().toggle_menu(&DocumentScrollLock);
                    },
                    span { class: "navbar__burger-bar" }
                    span { class: "navbar__burger-bar" }
                    span { class: "navbar__burger-bar" }
                }
            }
        }

        if menu_open {
            MenuOverlay { nav: nav_state }
        }
    }
}
