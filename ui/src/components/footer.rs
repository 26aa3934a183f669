use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::nav_bar::{home_link, nav_builder};
use crate::content::{CONTACT_EMAIL, GITHUB_PROFILE};
use crate::core::navigation::Section;
use crate::core::platform;
use crate::i18n::use_locale;
use crate::texts::FooterTexts;

fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

fn legal_link(build: Option<fn(&str, &str) -> Element>, href: &str, label: &str) -> Element {
    match build {
        Some(build) => build("footer__legal-link", label),
        None => rsx!( a { class: "footer__legal-link", href: "{href}", "{label}" } ),
    }
}

#[component]
pub fn Footer() -> Element {
    let locale = use_locale();
    let texts = FooterTexts::load(locale(), current_year());
    let builder = nav_builder();
    let top = Section::Hero;

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__identity",
                    {home_link("footer__brand", "Mirko Rinke")}
                    span { class: "footer__position", "{texts.position}" }
                    span { class: "footer__location", "{texts.location}" }
                }

                div { class: "footer__social",
                    a {
                        class: "footer__social-link",
                        href: GITHUB_PROFILE,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "GitHub"
                    }
                    a {
                        class: "footer__social-link",
                        href: "mailto:{CONTACT_EMAIL}",
                        "Email"
                    }
                }

                div { class: "footer__legal",
                    {legal_link(builder.map(|b| b.imprint), "/imprint", &texts.imprint)}
                    {legal_link(builder.map(|b| b.privacy), "/privacy", &texts.privacy)}
                }

                span { class: "footer__copyright", "{texts.copyright}" }

                a {
                    class: "footer__back-to-top",
                    href: top.href(),
                    onclick: move |evt: MouseEvent| {
                        if platform::scroll_to_anchor(top.anchor()) {
                            evt.prevent_default();
                        }
                    },
                    "{texts.back_to_top}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
