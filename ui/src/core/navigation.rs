//! In-page sections and the nav bar's menu state.

use super::language::Locale;
use super::platform::ScrollLock;

/// Anchored sections of the main page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    AboutMe,
    Skills,
    Projects,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::AboutMe,
        Section::Skills,
        Section::Projects,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Sections linked from the nav bar and the mobile menu.
    pub const NAV: [Section; 3] = [Section::AboutMe, Section::Skills, Section::Projects];

    /// Element id of the section root.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::AboutMe => "about-me",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// Link target that also works from the legal pages.
    pub fn href(self) -> String {
        format!("/#{}", self.anchor())
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Nav label; sections without a nav entry fall back to "home".
    pub fn nav_label(self, locale: Locale) -> String {
        match self {
            Section::AboutMe => crate::t!(locale, "nav-about-me"),
            Section::Skills => crate::t!(locale, "nav-skills"),
            Section::Projects => crate::t!(locale, "nav-projects"),
            _ => crate::t!(locale, "nav-home"),
        }
    }
}

/// Mobile menu flag plus the highlighted nav link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    menu_open: bool,
    active_section: Option<Section>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_section(&self) -> Option<Section> {
        self.active_section
    }

    pub fn open_menu(&mut self, lock: &dyn ScrollLock) {
        if !self.menu_open {
            self.menu_open = true;
            lock.disable();
        }
    }

    pub fn close_menu(&mut self, lock: &dyn ScrollLock) {
        if self.menu_open {
            self.menu_open = false;
            lock.enable();
        }
    }

    pub fn toggle_menu(&mut self, lock: &dyn ScrollLock) {
        if self.menu_open {
            self.close_menu(lock);
        } else {
            self.open_menu(lock);
        }
    }

    /// A section link was picked: close the menu and highlight the link.
    pub fn select(&mut self, section: Section, lock: &dyn ScrollLock) {
        self.active_section = Some(section);
        self.close_menu(lock);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct CountingLock {
        disabled: Cell<u32>,
        enabled: Cell<u32>,
    }

    impl ScrollLock for CountingLock {
        fn disable(&self) {
            self.disabled.set(self.disabled.get() + 1);
        }
        fn enable(&self) {
            self.enabled.set(self.enabled.get() + 1);
        }
    }

    #[test]
    fn anchors_are_stable() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            ["hero", "about-me", "skills", "projects", "testimonials", "contact"]
        );
        assert_eq!(Section::Skills.href(), "/#skills");
        assert_eq!(Section::from_anchor("#contact"), Some(Section::Contact));
        assert_eq!(Section::from_anchor("nope"), None);
    }

    #[test]
    fn menu_toggles_scroll_lock_once_per_transition() {
        let lock = CountingLock::default();
        let mut nav = NavigationState::new();
        nav.toggle_menu(&lock);
        nav.open_menu(&lock);
        assert!(nav.is_menu_open());
        assert_eq!(lock.disabled.get(), 1);

        nav.toggle_menu(&lock);
        nav.close_menu(&lock);
        assert!(!nav.is_menu_open());
        assert_eq!(lock.enabled.get(), 1);
    }

    #[test]
    fn selecting_a_link_closes_the_menu() {
        let lock = CountingLock::default();
        let mut nav = NavigationState::new();
        nav.open_menu(&lock);
        nav.select(Section::Projects, &lock);
        assert!(!nav.is_menu_open());
        assert_eq!(nav.active_section(), Some(Section::Projects));
        assert_eq!(lock.enabled.get(), 1);
    }

    #[test]
    fn nav_labels_follow_the_locale() {
        assert_eq!(Section::AboutMe.nav_label(Locale::En), crate::t!(Locale::En, "nav-about-me"));
        assert_ne!(
            Section::Projects.nav_label(Locale::De),
            Section::Projects.nav_label(Locale::En)
        );
    }
}
