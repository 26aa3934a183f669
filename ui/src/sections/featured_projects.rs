use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::content::projects;
use crate::core::modal::ProjectModal;
use crate::core::navigation::Section;
use crate::core::platform::DocumentScrollLock;
use crate::i18n::use_locale;
use crate::sections::ProjectModalView;
use crate::texts::ProjectsTexts;

/// Project gallery. Owns the modal state and shares it with
/// [`ProjectModalView`] through context.
#[component]
pub fn FeaturedProjects() -> Element {
    let locale = use_locale();
    let texts = ProjectsTexts::load(locale());
    let list = projects(locale());
    let modal = use_context_provider(|| Signal::new(ProjectModal::new(list.len())));
    let is_open = modal.read().is_open();

    rsx! {
        section { id: Section::Projects.anchor(), class: "projects",
            div { class: "projects__intro",
                span { class: "section-eyebrow", "{texts.heading}" }
                h2 { class: "section-heading", "{texts.title}" }
                p { "{texts.description}" }
            }

            ul { class: "projects__list",
                for project in list.iter().filter(|p| p.visible) {
                    li { key: "{project.id}", class: "projects__item",
                        button {
                            class: "projects__card",
                            r#type: "button",
                            onclick: {
                                let id = project.id;
                                move |_| {
                                    let mut modal = modal;
                                    if !modal.write().open(id, &DocumentScrollLock) {
                                        warn!("[projects] no project with id {id}");
                                    }
                                }
                            },
                            span { class: "projects__name", "{project.name}" }
                            span { class: "projects__technologies", "{project.technology_names()}" }
                            img {
                                class: "projects__preview",
                                src: project.image_path,
                                alt: project.name,
                                loading: "lazy",
                            }
                        }
                    }
                }
            }

            if is_open {
                ProjectModalView {}
            }
        }
    }
}
