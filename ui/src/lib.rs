//! Shared UI crate for the portfolio site. State machines, content and every
//! view live here; the platform crates only supply routing.

use dioxus::prelude::*;

pub mod content;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod texts;
pub mod views;

pub mod components {
    pub mod anchor_link;
    pub mod footer;
    pub mod language_toggle;
    pub mod menu_overlay;
    pub mod nav_bar;

    pub use anchor_link::AnchorLink;
    pub use footer::Footer;
    pub use language_toggle::LanguageToggle;
    pub use menu_overlay::MenuOverlay;
    pub use nav_bar::{register_nav, NavBar, NavBuilder, SectionLink};
}

/// The shared stylesheet (ui/assets/theme/main.css).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
