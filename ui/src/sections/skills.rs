use dioxus::prelude::*;

use crate::components::AnchorLink;
use crate::content::{icon_path, learning_skills, tech_skills};
use crate::core::navigation::Section;
use crate::i18n::use_locale;
use crate::texts::SkillsTexts;

const GROWTH_MINDSET_ICON: &str = "GrowthMindset";

#[component]
pub fn Skills() -> Element {
    let locale = use_locale();
    let texts = SkillsTexts::load(locale());

    rsx! {
        section { id: Section::Skills.anchor(), class: "skills",
            ul { class: "skills__grid",
                for skill in tech_skills() {
                    li { key: "{skill.icon}", class: "skills__item",
                        img { class: "skills__icon", src: icon_path(skill.icon), alt: skill.alt }
                        span { class: "skills__name", "{skill.name}" }
                        if skill.icon == GROWTH_MINDSET_ICON {
                            div { class: "skills__learning",
                                p { class: "skills__learning-text",
                                    "{texts.growth_mindset_first} "
                                    strong { "{texts.growth_mindset_second}" }
                                }
                                div { class: "skills__learning-icons",
                                    for learning in learning_skills() {
                                        img {
                                            key: "{learning.icon}",
                                            src: icon_path(learning.icon),
                                            alt: learning.alt,
                                            title: learning.name,
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "skills__text",
                span { class: "section-eyebrow", "{texts.title_technologies}" }
                h2 { class: "section-heading", "{texts.title_skill_set}" }
                p { "{texts.description}" }
                p { class: "skills__another",
                    strong { "{texts.another_skill_title} " }
                    span { class: "skills__another-accent", "{texts.another_skill}" }
                }
                p { "{texts.another_skill_description}" }
                AnchorLink { section: Section::Contact, class: "button button--primary",
                    "{texts.lets_talk}"
                }
            }
        }
    }
}
