use dioxus::prelude::*;

use crate::core::navigation::Section;
use crate::i18n::use_locale;
use crate::texts::AboutTexts;

#[component]
pub fn AboutMe() -> Element {
    let locale = use_locale();
    let texts = AboutTexts::load(locale());

    let points = [
        ("location", texts.work_environment.clone()),
        ("growth", texts.personal_growth.clone()),
        ("puzzle", texts.problem_solving.clone()),
    ];

    rsx! {
        section { id: Section::AboutMe.anchor(), class: "about-me",
            div { class: "about-me__text",
                span { class: "section-eyebrow", "{texts.who_i_am}" }
                h2 { class: "section-heading", "{texts.heading}" }
                p { class: "about-me__intro", "{texts.introduction}" }
                ul { class: "about-me__points",
                    for (icon, text) in points {
                        li { key: "{icon}", class: "about-me__point",
                            img {
                                class: "about-me__point-icon",
                                src: "/icons/about/{icon}.svg",
                                alt: "",
                            }
                            p { "{text}" }
                        }
                    }
                }
            }
            div { class: "about-me__portrait",
                img {
                    src: "/images/about-me.jpg",
                    alt: "Mirko Rinke",
                    loading: "lazy",
                }
            }
        }
    }
}
