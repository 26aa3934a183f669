use dioxus::prelude::*;

use crate::i18n::use_locale;
use crate::texts::LegalTexts;
use crate::views::LegalPage;

#[component]
pub fn Imprint() -> Element {
    let locale = use_locale();
    rsx! {
        LegalPage { texts: LegalTexts::imprint(locale()) }
    }
}
