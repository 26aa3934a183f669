use dioxus::prelude::*;

use crate::core::language::Locale;
use crate::i18n::{use_language_store, use_locale};
use crate::t;

/// DE | EN switch. Writes go through the shared language store, which
/// persists the choice and re-renders every subscribed section.
#[component]
pub fn LanguageToggle() -> Element {
    let store = use_language_store();
    let locale = use_locale();
    let current = locale();
    let group_label = t!(current, "nav-language-label");

    rsx! {
        div { class: "language-toggle", role: "group", aria_label: "{group_label}",
            for option in Locale::ALL {
                button {
                    key: "{option.code()}",
                    r#type: "button",
                    class: if option == current { "language-toggle__option language-toggle__option--active" } else { "language-toggle__option" },
                    aria_pressed: "{option == current}",
                    lang: "{option.code()}",
                    onclick: {
                        let store = store.clone();
                        move |_| {
                            if store.get_language() != option {
                                store.set_language(option);
                            }
                        }
                    },
                    "{option.label()}"
                }
            }
        }
    }
}
