use dioxus::prelude::*;

use crate::components::nav_bar::home_link;
use crate::texts::LegalTexts;

/// Shared layout of the imprint and privacy pages.
#[component]
pub fn LegalPage(texts: LegalTexts) -> Element {
    rsx! {
        article { class: "legal",
            h1 { class: "legal__title", "{texts.title}" }
            if let Some(intro) = texts.intro.as_ref() {
                p { class: "legal__intro", "{intro}" }
            }
            for (index, block) in texts.blocks.iter().enumerate() {
                section { key: "{index}", class: "legal__block",
                    h2 { "{block.heading}" }
                    p { "{block.body}" }
                }
            }
            div { class: "legal__back",
                {home_link("button button--ghost", &texts.back_home)}
            }
        }
    }
}
