use api::Mailer;
use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;

use crate::components::nav_bar::nav_builder;
use crate::content::CONTACT_EMAIL;
use crate::core::config::{MailMode, SiteConfig};
use crate::core::contact::{ContactForm, Field, SubmitOutcome, FEEDBACK_VISIBLE_MS};
use crate::core::navigation::Section;
use crate::core::timing;
use crate::i18n::use_locale;
use crate::texts::ContactTexts;

#[component]
pub fn Contact() -> Element {
    let locale = use_locale();
    let texts = ContactTexts::load(locale());
    let config = try_use_context::<SiteConfig>().unwrap_or_default();

    let mut form = use_signal(ContactForm::new);
    let mut sending = use_signal(|| false);
    let mut feedback_visible = use_signal(|| false);
    let mut feedback_task: Signal<Option<Task>> = use_signal(|| None);

    let mut show_feedback = move || {
        if let Some(task) = feedback_task.take() {
            task.cancel();
        }
        feedback_visible.set(true);
        let task = spawn(async move {
            timing::sleep_ms(FEEDBACK_VISIBLE_MS).await;
            feedback_visible.set(false);
        });
        feedback_task.set(Some(task));
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *sending.peek() {
            return;
        }
        let outcome = form.write().submit(config.mail_mode.clone());
        match outcome {
            SubmitOutcome::PrivacyRequired => info!("[contact] privacy policy not accepted"),
            SubmitOutcome::Invalid(fields) => info!("[contact] invalid fields: {fields:?}"),
            SubmitOutcome::Simulated => {
                info!("[contact] test mode, message not sent");
                show_feedback();
            }
            SubmitOutcome::Send(data) => {
                let MailMode::Live { endpoint } = config.mail_mode.clone() else {
                    warn!("[contact] live submit without an endpoint");
                    return;
                };
                sending.set(true);
                spawn(async move {
                    let result = match Mailer::new(&endpoint) {
                        Ok(mailer) => mailer.send(&data).await,
                        Err(err) => Err(err),
                    };
                    sending.set(false);
                    match result {
                        Ok(_) => {
                            info!("[contact] message delivered");
                            form.write().complete_delivery();
                            show_feedback();
                        }
                        Err(err) => error!("[contact] {err}"),
                    }
                });
            }
        }
    };

    let current = form.read().clone();
    let privacy_missing = current.privacy_accepted() == Some(false);
    let submit_class = if current.can_submit() {
        "button button--primary contact__submit"
    } else {
        "button button--primary contact__submit contact__submit--inactive"
    };
    let labels = [
        (Field::Name, texts.form_name.clone()),
        (Field::Email, texts.form_email.clone()),
        (Field::Message, texts.form_message.clone()),
    ];
    let privacy_link = match nav_builder() {
        Some(b) => (b.privacy)("contact__privacy-link", &texts.privacy_text_2),
        None => rsx!( a { class: "contact__privacy-link", href: "/privacy", "{texts.privacy_text_2}" } ),
    };

    rsx! {
        section { id: Section::Contact.anchor(), class: "contact",
            ContactInfo { texts: texts.clone() }

            form { class: "contact__form", novalidate: true, onsubmit: on_submit,
                for (field, caption) in labels {
                    div { key: "{field.id()}", class: "contact__field",
                        label { r#for: "contact-{field.id()}", "{caption}" }
                        if field == Field::Message {
                            textarea {
                                id: "contact-{field.id()}",
                                name: field.id(),
                                class: current.status(field).css_class(),
                                placeholder: current.placeholder(field, locale()),
                                value: current.value(field).to_string(),
                                oninput: move |evt: FormEvent| form.write().set_value(field, evt.value()),
                            }
                        } else {
                            input {
                                id: "contact-{field.id()}",
                                name: field.id(),
                                r#type: if field == Field::Email { "email" } else { "text" },
                                class: current.status(field).css_class(),
                                placeholder: current.placeholder(field, locale()),
                                value: current.value(field).to_string(),
                                oninput: move |evt: FormEvent| form.write().set_value(field, evt.value()),
                            }
                        }
                    }
                }

                div { class: if privacy_missing { "contact__privacy contact__privacy--required" } else { "contact__privacy" },
                    label {
                        input {
                            r#type: "checkbox",
                            checked: current.privacy_accepted() == Some(true),
                            onchange: move |evt: FormEvent| form.write().set_privacy_accepted(evt.checked()),
                        }
                        span { "{texts.privacy_text_1} " }
                        {privacy_link}
                        span { " {texts.privacy_text_3}" }
                    }
                    if privacy_missing {
                        p { class: "contact__privacy-error", role: "alert", "{texts.privacy_required}" }
                    }
                }

                button {
                    class: "{submit_class}",
                    r#type: "submit",
                    disabled: sending(),
                    "{texts.submit}"
                }
            }

            if feedback_visible() {
                div { class: "contact__feedback", role: "status", "{texts.feedback_sent}" }
            }
        }
    }
}

#[component]
fn ContactInfo(texts: ContactTexts) -> Element {
    rsx! {
        div { class: "contact-info",
            span { class: "section-eyebrow", "{texts.subtitle}" }
            h2 { class: "section-heading", "{texts.title}" }
            h3 { class: "contact-info__question", "{texts.question}" }
            p { "{texts.description}" }
            p { class: "contact-info__highlight",
                "{texts.frontend_developer} "
                strong { "{texts.description_highlight}" }
            }
            a { class: "contact-info__email", href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
        }
    }
}
