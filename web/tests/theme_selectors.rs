//! Theme selector lint for the shared stylesheet (ui/assets/theme/main.css).
//!
//! The components render plain class names, so a renamed or dropped selector
//! only shows up as broken styling in the browser. These checks fail the build
//! instead. When a component's markup changes, update REQUIRED_SELECTORS with it.

use ui::core::carousel::unit_width_for;

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".visually-hidden",
    ".section-heading",
    ".section-eyebrow",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Navigation
    ".navbar__link--active",
    ".navbar__burger--open",
    ".language-toggle__option--active",
    ".menu-overlay__panel",
    // Hero
    ".hero-banner__track",
    ".hero-side__scroll",
    // Projects & modal
    ".projects__card",
    ".project-modal {",
    ".project-modal__panel",
    ".project-modal__nav",
    // Testimonials carousel
    ".testimonials__strip",
    ".testimonials__strip--instant",
    ".testimonials__slide--current",
    ".testimonials__dot--active",
    // Contact form
    ".placeholder-valid",
    ".placeholder-invalid",
    ".contact__privacy--required",
    ".contact__submit--inactive",
    ".contact__feedback",
    // Footer & legal pages
    ".footer__legal-link",
    ".legal__block",
    // Responsive blocks
    "@media (max-width: 1100px)",
    "@media (max-width: 600px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({non_ws_len} non-whitespace chars) - \
         did the file get truncated or path change?"
    );
}

#[test]
fn slide_widths_match_carousel_units() {
    // One viewport per breakpoint band.
    for viewport in [1920.0, 1200.0, 800.0, 375.0] {
        let unit = unit_width_for(viewport);
        let token = format!("{unit}px");
        assert!(
            THEME_CSS.contains(&token),
            "no slide width of {token} for a {viewport}px viewport"
        );
    }
}
