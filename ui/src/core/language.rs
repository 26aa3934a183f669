//! Active display language: the [`Locale`] enum and the [`LanguageStore`].

use std::fmt;
use std::rc::Rc;

use dioxus::logger::tracing::{error, warn};
use unic_langid::{langid, LanguageIdentifier};

use super::storage::{KeyValueStore, LANGUAGE_KEY};
use super::store::{Store, Subscription};

/// The two languages the site is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    De,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::De, Locale::En];

    /// Short code, as persisted.
    pub fn code(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" | "de-de" => Some(Locale::De),
            "en" | "en-us" | "en-gb" => Some(Locale::En),
            _ => None,
        }
    }

    /// Fluent catalogue identifier.
    pub fn langid(self) -> LanguageIdentifier {
        match self {
            Locale::De => langid!("de-DE"),
            Locale::En => langid!("en-US"),
        }
    }

    /// Label shown on the toggle.
    pub fn label(self) -> &'static str {
        match self {
            Locale::De => "DE",
            Locale::En => "EN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Holds the active locale, persists it and broadcasts changes.
///
/// Created once at the composition root and handed to views through context.
/// Clones share state.
#[derive(Clone)]
pub struct LanguageStore {
    selected: Store<Locale>,
    storage: Rc<dyn KeyValueStore>,
}

impl LanguageStore {
    /// Restore the persisted locale, or start from the default (`de`).
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let initial = match storage.get(LANGUAGE_KEY) {
            Some(raw) => Locale::from_code(&raw).unwrap_or_else(|| {
                warn!("[language] ignoring stored locale {raw:?}");
                Locale::default()
            }),
            None => Locale::default(),
        };

        Self {
            selected: Store::new(initial),
            storage,
        }
    }

    pub fn get_language(&self) -> Locale {
        self.selected.get()
    }

    /// Switch, persist, then notify every subscriber in order.
    pub fn set_language(&self, locale: Locale) {
        if let Err(err) = self.storage.set(LANGUAGE_KEY, locale.code()) {
            error!("[language] could not persist {locale}: {err}");
        }
        self.selected.set(locale);
    }

    /// Receive the current locale now and every change until the handle drops.
    pub fn selected_language(&self, callback: impl Fn(Locale) + 'static) -> Subscription {
        self.selected.subscribe(move |locale| callback(*locale))
    }
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageStore")
            .field("selected", &self.get_language())
            .finish()
    }
}
