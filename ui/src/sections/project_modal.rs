use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::content::{icon_path, projects};
use crate::core::modal::ProjectModal;
use crate::core::platform::{self, DocumentScrollLock};
use crate::i18n::use_locale;
use crate::texts::ProjectsTexts;

/// Detail dialog for the project selected in the gallery.
///
/// Reads the shared `Signal<ProjectModal>`; arrow keys page through the
/// projects for as long as this component is mounted.
#[component]
pub fn ProjectModalView() -> Element {
    let locale = use_locale();
    let modal = use_context::<Signal<ProjectModal>>();
    let texts = ProjectsTexts::load(locale());

    let window_keys = use_hook(move || {
        Rc::new(RefCell::new(platform::on_keydown(move |key| {
            let mut modal = modal;
            if modal.write().handle_key(&key) {
                debug!("[projects] key {key}");
            }
        })))
    });
    let has_window_listener = window_keys.borrow().is_some();
    use_drop(move || {
        window_keys.borrow_mut().take();
    });

    let state = *modal.read();
    let list = projects(locale());
    let Some(project) = list.get(state.current_index()).copied() else {
        return rsx! {};
    };
    let number = format!("{:02}", state.current_index() + 1);

    let close = move |_: MouseEvent| {
        let mut modal = modal;
        modal.write().close(&DocumentScrollLock);
    };

    rsx! {
        div {
            class: "project-modal",
            role: "dialog",
            aria_modal: "true",
            tabindex: "-1",
            onclick: close,
            onkeydown: move |evt: KeyboardEvent| {
                // Browsers route keys through the window listener instead.
                if !has_window_listener {
                    let mut modal = modal;
                    modal.write().handle_key(&evt.key().to_string());
                }
            },
            div {
                class: "project-modal__panel",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                button {
                    class: "project-modal__close",
                    r#type: "button",
                    aria_label: "{texts.modal_close}",
                    onclick: close,
                    "×"
                }

                div { class: "project-modal__text",
                    span { class: "project-modal__number", "{number}" }
                    h3 { class: "project-modal__name", "{project.name}" }
                    h4 { class: "project-modal__about", "{project.about}" }
                    p { class: "project-modal__description", "{project.description}" }

                    ul { class: "project-modal__technologies",
                        for tech in project.technologies {
                            li { key: "{tech.icon}", class: "project-modal__technology",
                                img { src: icon_path(tech.icon), alt: "" }
                                span { "{tech.name}" }
                            }
                        }
                    }

                    div { class: "project-modal__links",
                        a {
                            class: "button button--ghost",
                            href: project.links.github,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{texts.modal_github}"
                        }
                        a {
                            class: "button button--primary",
                            href: project.links.live_test,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{texts.modal_live_test}"
                        }
                    }
                }

                div { class: "project-modal__media",
                    img { src: project.image_path, alt: project.name }
                }

                div { class: "project-modal__nav",
                    button {
                        class: "project-modal__step",
                        r#type: "button",
                        aria_label: "{texts.modal_previous}",
                        onclick: move |_| {
                            let mut modal = modal;
                            modal.write().prev();
                        },
                        "←"
                    }
                    button {
                        class: "project-modal__step",
                        r#type: "button",
                        aria_label: "{texts.modal_next}",
                        onclick: move |_| {
                            let mut modal = modal;
                            modal.write().next();
                        },
                        "{texts.modal_next} →"
                    }
                }
            }
        }
    }
}
