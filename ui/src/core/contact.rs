//! Contact form state and validation.
//!
//! The form keeps raw field values plus a per-field [`FieldStatus`]. Placeholder
//! text and the CSS tag are derived from the status at render time, so a
//! locale switch never leaves a stale "required" message in the old language.

use api::ContactData;
use once_cell::sync::Lazy;
use regex::Regex;

use super::config::MailMode;
use super::language::Locale;

/// Minimum accepted name length (characters, after trimming).
pub const NAME_MIN_LEN: usize = 2;

/// How long the "message sent" banner stays up.
pub const FEEDBACK_VISIBLE_MS: u64 = 5_000;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

// Same acceptance set as the browser form framework's built-in email rule
// (its length lookaheads are checked separately).
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, _)) = raw.split_once('@') else {
        return false;
    };
    raw.len() <= MAX_EMAIL_LEN && local.len() <= MAX_LOCAL_PART_LEN && EMAIL_PATTERN.is_match(raw)
}

pub fn is_valid_name(raw: &str) -> bool {
    raw.trim().chars().count() >= NAME_MIN_LEN
}

pub fn is_valid_message(raw: &str) -> bool {
    !raw.trim().is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Valid,
    Required,
}

impl FieldStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            FieldStatus::Valid => "placeholder-valid",
            FieldStatus::Required => "placeholder-invalid",
        }
    }
}

/// What the view has to do after a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Privacy checkbox not accepted; nothing was validated or sent.
    PrivacyRequired,
    /// At least one field failed; statuses were updated and values cleared.
    Invalid(Vec<Field>),
    /// Valid and live: POST this payload, then call `complete_delivery`.
    Send(ContactData),
    /// Valid in test mode: the form was already reset.
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub data: ContactData,
    name_status: FieldStatus,
    email_status: FieldStatus,
    message_status: FieldStatus,
    privacy_accepted: Option<bool>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.data.name,
            Field::Email => &self.data.email,
            Field::Message => &self.data.message,
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.data.name = value,
            Field::Email => self.data.email = value,
            Field::Message => self.data.message = value,
        }
    }

    pub fn status(&self, field: Field) -> FieldStatus {
        match field {
            Field::Name => self.name_status,
            Field::Email => self.email_status,
            Field::Message => self.message_status,
        }
    }

    fn status_mut(&mut self, field: Field) -> &mut FieldStatus {
        match field {
            Field::Name => &mut self.name_status,
            Field::Email => &mut self.email_status,
            Field::Message => &mut self.message_status,
        }
    }

    pub fn is_field_valid(&self, field: Field) -> bool {
        let value = self.value(field);
        match field {
            Field::Name => is_valid_name(value),
            Field::Email => is_valid_email(value),
            Field::Message => is_valid_message(value),
        }
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| self.is_field_valid(*f))
    }

    pub fn privacy_accepted(&self) -> Option<bool> {
        self.privacy_accepted
    }

    pub fn set_privacy_accepted(&mut self, accepted: bool) {
        self.privacy_accepted = Some(accepted);
    }

    /// Whether the submit button should look enabled.
    pub fn can_submit(&self) -> bool {
        self.privacy_accepted == Some(true) && self.is_valid()
    }

    /// Localized placeholder for `field`, switching to the "required" message
    /// after a failed submit.
    pub fn placeholder(&self, field: Field, locale: Locale) -> String {
        let required = self.status(field) == FieldStatus::Required;
        match (field, required) {
            (Field::Name, false) => crate::t!(locale, "contact-placeholder-name"),
            (Field::Name, true) => crate::t!(locale, "contact-required-name"),
            (Field::Email, false) => crate::t!(locale, "contact-placeholder-email"),
            (Field::Email, true) => crate::t!(locale, "contact-required-email"),
            (Field::Message, false) => crate::t!(locale, "contact-placeholder-message"),
            (Field::Message, true) => crate::t!(locale, "contact-required-message"),
        }
    }

    pub fn submit(&mut self, mode: MailMode) -> SubmitOutcome {
        if self.privacy_accepted != Some(true) {
            self.privacy_accepted = Some(false);
            return SubmitOutcome::PrivacyRequired;
        }

        let invalid: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| !self.is_field_valid(*f))
            .collect();
        if !invalid.is_empty() {
            for field in &invalid {
                *self.status_mut(*field) = FieldStatus::Required;
                self.set_value(*field, String::new());
            }
            return SubmitOutcome::Invalid(invalid);
        }

        match mode {
            MailMode::Live { .. } => SubmitOutcome::Send(self.data.clone()),
            MailMode::Test => {
                self.reset();
                SubmitOutcome::Simulated
            }
        }
    }

    /// The POST succeeded.
    pub fn complete_delivery(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live() -> MailMode {
        MailMode::Live {
            endpoint: "http://localhost/sendMail.php".into(),
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "Ada".into());
        form.set_value(Field::Email, "ada@example.com".into());
        form.set_value(Field::Message, "Hello".into());
        form
    }

    #[test]
    fn email_rule_matches_framework_behaviour() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(is_valid_email("ada@localhost"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("ada@-example.com"));
        assert!(!is_valid_email(&format!("{}@example.com", "a".repeat(65))));
    }

    #[test]
    fn unchecked_privacy_never_sends() {
        let mut form = filled();
        assert_eq!(form.submit(live()), SubmitOutcome::PrivacyRequired);
        assert_eq!(form.privacy_accepted(), Some(false));

        form.set_privacy_accepted(false);
        assert_eq!(form.submit(live()), SubmitOutcome::PrivacyRequired);
        // Fields untouched.
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn invalid_fields_switch_to_required_and_clear() {
        let mut form = ContactForm::new();
        form.set_value(Field::Email, "bad".into());
        form.set_privacy_accepted(true);

        let outcome = form.submit(live());
        assert_eq!(
            outcome,
            SubmitOutcome::Invalid(vec![Field::Name, Field::Email, Field::Message])
        );
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.status(field).css_class(), "placeholder-invalid");
        }
        assert_eq!(form.placeholder(Field::Name, Locale::De), "Name ist erforderlich");
        assert_eq!(form.placeholder(Field::Email, Locale::En), "Valid email is required");
        assert_eq!(form.placeholder(Field::Message, Locale::En), "Message is required");
    }

    #[test]
    fn only_failing_fields_are_cleared() {
        let mut form = filled();
        form.set_value(Field::Email, "nope".into());
        form.set_privacy_accepted(true);
        assert_eq!(form.submit(live()), SubmitOutcome::Invalid(vec![Field::Email]));
        assert_eq!(form.value(Field::Name), "Ada");
        assert_eq!(form.status(Field::Name), FieldStatus::Valid);
    }

    #[test]
    fn live_mode_hands_back_payload_and_keeps_fields_until_delivery() {
        let mut form = filled();
        form.set_privacy_accepted(true);
        assert!(form.can_submit());

        match form.submit(live()) {
            SubmitOutcome::Send(data) => assert_eq!(data.email, "ada@example.com"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(form.value(Field::Message), "Hello");

        form.complete_delivery();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_mode_resets_without_sending() {
        let mut form = filled();
        form.set_privacy_accepted(true);
        assert_eq!(form.submit(MailMode::Test), SubmitOutcome::Simulated);
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.privacy_accepted(), None);
    }

    #[test]
    fn short_names_are_rejected() {
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name("  "));
        assert!(is_valid_name("Al"));
    }
}
