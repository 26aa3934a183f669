use dioxus::prelude::*;

use crate::components::AnchorLink;
use crate::content::{CONTACT_EMAIL, GITHUB_PROFILE};
use crate::core::navigation::Section;
use crate::i18n::use_locale;
use crate::texts::HeroTexts;

#[component]
pub fn Hero() -> Element {
    let locale = use_locale();
    let texts = HeroTexts::load(locale());

    rsx! {
        section { id: Section::Hero.anchor(), class: "hero",
            div { class: "hero__content",
                div { class: "hero__headline",
                    h2 { class: "hero__sub-heading", "{texts.sub_heading}" }
                    h1 { class: "hero__main-heading", "{texts.main_heading}" }
                }
                div { class: "hero__actions",
                    AnchorLink { section: Section::Projects, class: "button button--primary",
                        "{texts.check_my_work}"
                    }
                    AnchorLink { section: Section::Contact, class: "button button--ghost",
                        "{texts.contact_me}"
                    }
                }
            }
            HeroSideElements { scroll_label: texts.scroll_down.clone() }
            HeroBanner { texts: texts.clone() }
        }
    }
}

/// Social links and the scroll hint along the hero's edge.
#[component]
fn HeroSideElements(scroll_label: String) -> Element {
    rsx! {
        aside { class: "hero-side",
            div { class: "hero-side__social",
                a {
                    class: "hero-side__link",
                    href: GITHUB_PROFILE,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "GitHub"
                }
                a { class: "hero-side__link", href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
            }
            AnchorLink { section: Section::AboutMe, class: "hero-side__scroll",
                span { class: "visually-hidden", "{scroll_label}" }
                span { class: "hero-side__arrow", aria_hidden: "true", "↓" }
            }
        }
    }
}

/// Endless marquee. The item run is rendered twice so the CSS animation can
/// loop at the halfway point without a visible seam.
#[component]
fn HeroBanner(texts: HeroTexts) -> Element {
    let items = texts.banner_items().map(str::to_string);

    rsx! {
        div { class: "hero-banner", aria_hidden: "true",
            div { class: "hero-banner__track",
                for run in 0..2 {
                    for (index, item) in items.iter().enumerate() {
                        span { key: "{run}-{index}", class: "hero-banner__entry",
                            span { class: "hero-banner__item", "{item}" }
                            span { class: "hero-banner__dot" }
                        }
                    }
                }
            }
        }
    }
}
