//! Internationalization (i18n) support for `folio-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading into one Fluent loader per locale)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   de-DE/folio-ui.ftl   (fallback/reference, site default)
//!   en-US/folio-ui.ftl
//! ```
//!
//! The site only ever shows one of two locales and switches between them
//! wholesale, so instead of re-selecting a single global loader we keep one
//! immutable loader per [`Locale`] and pick the right one at lookup time. The
//! *mutable* part (which locale is active) lives in
//! [`LanguageStore`](crate::core::language::LanguageStore), provided through
//! context by the platform crate.
//!
//! Usage in a component:
//! ```ignore
//! use crate::i18n::use_locale;
//! use crate::t;
//! let locale = use_locale();
//! let heading = t!(locale(), "hero-main-heading");
//! ```
use std::rc::Rc;

use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;

use crate::core::language::{LanguageStore, Locale};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!(locale, "nav-home")
///     t!(locale, "footer-copyright", year = 2024)
///
/// This expands to `fl!(loader(locale), ...)` so every lookup is still
/// checked against the fallback catalogue at compile time.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the catalogue filename).
const DOMAIN: &str = "folio-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static GERMAN: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Locale::De));
static ENGLISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Locale::En));

fn build_loader(locale: Locale) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Locale::default().langid());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[locale.langid()]) {
        error!("[i18n] failed loading catalogue for {locale} ({err}); falling back");
    }
    // Only applies to bundles already loaded, so it must follow `select`.
    // Bidi isolation marks around `{ $year }` would leak into plain text nodes.
    loader.set_use_isolating(false);
    loader
}

/// The immutable catalogue for `locale`.
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    match locale {
        Locale::De => &*GERMAN,
        Locale::En => &*ENGLISH,
    }
}

/// List available (embedded) language identifiers.
#[cfg(test)]
fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// The language store provided at the composition root.
pub fn use_language_store() -> LanguageStore {
    use_context::<LanguageStore>()
}

/// Subscribe the calling component to the language store.
///
/// Returns a signal mirroring the active locale. The subscription is released
/// when the component unmounts.
pub fn use_locale() -> Signal<Locale> {
    let store = use_language_store();
    let locale = use_signal(|| store.get_language());

    let subscription = use_hook(move || {
        Rc::new(store.selected_language(move |next| {
            let mut locale = locale;
            // The replayed current value arrives during the first render.
            if *locale.peek() != next {
                debug!("[i18n] locale -> {next}");
                locale.set(next);
            }
        }))
    });
    use_drop(move || subscription.unsubscribe());

    locale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "de-DE"));
        assert!(langs.iter().any(|l| l == "en-US"));
    }

    #[test]
    fn lookups_resolve_per_locale() {
        assert_eq!(fl!(loader(Locale::De), "nav-home"), "Startseite");
        assert_eq!(fl!(loader(Locale::En), "nav-home"), "Home");
    }

    #[test]
    fn compile_time_domain_matches_runtime_domain() {
        let config = include_str!("../i18n.toml");
        assert!(config.contains(&format!("domain = \"{DOMAIN}\"")));
        assert!(available_languages()
            .iter()
            .all(|lang| Localizations::get(&format!("{lang}/{DOMAIN}.ftl")).is_some()));
    }

    #[test]
    fn placeables_render_without_isolation_marks() {
        let line = crate::t!(Locale::En, "footer-copyright", year = 2024);
        assert_eq!(line, "© 2024 Mirko Rinke");
    }
}
