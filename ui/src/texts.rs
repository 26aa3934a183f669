//! Typed text bundles, one per page section.
//!
//! A bundle is resolved in one go from a single locale's catalogue, so a
//! section can never render half German and half English.

use crate::core::language::Locale;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct NavTexts {
    pub home: String,
    pub about_me: String,
    pub skills: String,
    pub projects: String,
    pub language_label: String,
    pub menu_open: String,
    pub menu_close: String,
}

impl NavTexts {
    pub fn load(locale: Locale) -> Self {
        Self {
            home: t!(locale, "nav-home"),
            about_me: t!(locale, "nav-about-me"),
            skills: t!(locale, "nav-skills"),
            projects: t!(locale, "nav-projects"),
            language_label: t!(locale, "nav-language-label"),
            menu_open: t!(locale, "nav-menu-open"),
            menu_close: t!(locale, "nav-menu-close"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroTexts {
    pub sub_heading: String,
    pub main_heading: String,
    pub check_my_work: String,
    pub contact_me: String,
    pub scroll_down: String,
    pub remote_work: String,
    pub job_description: String,
    pub based_in: String,
    pub open_to_work: String,
}

impl HeroTexts {
    pub fn load(locale: Locale) -> Self {
        Self {
            sub_heading: t!(locale, "hero-sub-heading"),
            main_heading: t!(locale, "hero-main-heading"),
            check_my_work: t!(locale, "hero-check-my-work"),
            contact_me: t!(locale, "hero-contact-me"),
            scroll_down: t!(locale, "hero-scroll-down"),
            remote_work: t!(locale, "banner-remote-work"),
            job_description: t!(locale, "banner-job-description"),
            based_in: t!(locale, "banner-based-in"),
            open_to_work: t!(locale, "banner-open-to-work"),
        }
    }

    /// Items of the scrolling banner, in display order.
    pub fn banner_items(&self) -> [&str; 4] {
        [
            &self.remote_work,
            &self.job_description,
            &self.based_in,
            &self.open_to_work,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutTexts {
    pub who_i_am: String,
    pub heading: String,
    pub introduction: String,
    pub work_environment: String,
    pub personal_growth: String,
    pub problem_solving: String,
}

impl AboutTexts {
    pub fn load(locale: Locale) -> Self {
        Self {
            who_i_am: t!(locale, "about-who-i-am"),
            heading: t!(locale, "about-heading"),
            introduction: t!(locale, "about-introduction"),
            work_environment: t!(locale, "about-work-environment"),
            personal_growth: t!(locale, "about-personal-growth"),
            problem_solving: t!(locale, "about-problem-solving"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsTexts {
    pub title_technologies: String,
    pub title_skill_set: String,
    pub description: String,
    pub another_skill_title: String,
    pub another_skill: String,
    pub another_skill_description: String,
    pub lets_talk: String,
    pub growth_mindset_first: String,
    pub growth_mindset_second: String,
}

impl SkillsTexts {
    pub fn load(locale: Locale) -> Self {
        Self {
            title_technologies: t!(locale, "skills-title-technologies"),
            title_skill_set: t!(locale, "skills-title-skill-set"),
            description: t!(locale, "skills-description"),
            another_skill_title: t!(locale, "skills-another-skill-title"),
            another_skill: t!(locale, "skills-another-skill"),
            another_skill_description: t!(locale, "skills-another-skill-description"),
            lets_talk: t!(locale, "skills-lets-talk"),
            growth_mindset_first: t!(locale, "skills-growth-mindset-first"),
            growth_mindset_second: t!(locale, "skills-growth-mindset-second"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsTexts {
    pub heading: String,
    pub title: String,
    pub description: String,
    pub modal_close: String,
    pub modal_next: String,
    pub modal_previous: String,
    pub modal_github: String,
    pub modal_live_test: String,
}

impl ProjectsTexts {
    pub fn load(locale: Locale) -> Self {
        Self {
            heading: t!(locale, "projects-heading"),
            title: t!(locale, "projects-title"),
            description: t!(locale, "projects-description"),
            modal_close: t!(locale, "projects-modal-close"),
            modal_next: t!(locale, "projects-modal-next"),
            modal_previous: t!(locale, "projects-modal-previous"),
            modal_github: t!(locale, "projects-modal-github"),
            modal_live_test: t!(locale, "projects-modal-live-test"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialsTexts {
    pub heading: String,
    pub previous: String,
    pub next: String,
}

impl TestimonialsTexts {
    pub fn load(locale: Locale) -> Self {
        Self {
            heading: t!(locale, "testimonials-heading"),
            previous: t!(locale, "testimonials-previous"),
            next: t!(locale, "testimonials-next"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactTexts {
    pub title: String,
    pub subtitle: String,
    pub question: String,
    pub description: String,
    pub frontend_developer: String,
    pub description_highlight: String,
    pub form_name: String,
    pub form_email: String,
    pub form_message: String,
    pub privacy_text_1: String,
    pub privacy_text_2: String,
    pub privacy_text_3: String,
    pub privacy_required: String,
    pub submit: String,
    pub feedback_sent: String,
}

impl ContactTexts {
    pub fn load(locale: Locale) -> Self {
        Self {
            title: t!(locale, "contact-title"),
            subtitle: t!(locale, "contact-subtitle"),
            question: t!(locale, "contact-question"),
            description: t!(locale, "contact-description"),
            frontend_developer: t!(locale, "contact-frontend-developer"),
            description_highlight: t!(locale, "contact-description-highlight"),
            form_name: t!(locale, "contact-form-name"),
            form_email: t!(locale, "contact-form-email"),
            form_message: t!(locale, "contact-form-message"),
            privacy_text_1: t!(locale, "contact-privacy-text-1"),
            privacy_text_2: t!(locale, "contact-privacy-text-2"),
            privacy_text_3: t!(locale, "contact-privacy-text-3"),
            privacy_required: t!(locale, "contact-privacy-required"),
            submit: t!(locale, "contact-submit"),
            feedback_sent: t!(locale, "contact-feedback-sent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterTexts {
    pub position: String,
    pub location: String,
    pub imprint: String,
    pub privacy: String,
    pub copyright: String,
    pub back_to_top: String,
}

impl FooterTexts {
    pub fn load(locale: Locale, year: i32) -> Self {
        Self {
            position: t!(locale, "footer-position"),
            location: t!(locale, "footer-location"),
            imprint: t!(locale, "footer-imprint"),
            privacy: t!(locale, "footer-privacy"),
            copyright: t!(locale, "footer-copyright", year = year),
            back_to_top: t!(locale, "footer-back-to-top"),
        }
    }
}

/// Heading plus body paragraph on the legal pages.
#[derive(Debug, Clone, PartialEq)]
pub struct LegalBlock {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegalTexts {
    pub title: String,
    pub intro: Option<String>,
    pub blocks: Vec<LegalBlock>,
    pub back_home: String,
}

impl LegalTexts {
    pub fn imprint(locale: Locale) -> Self {
        Self {
            title: t!(locale, "imprint-title"),
            intro: None,
            blocks: vec![
                LegalBlock {
                    heading: t!(locale, "imprint-provider-heading"),
                    body: t!(locale, "imprint-provider-body"),
                },
                LegalBlock {
                    heading: t!(locale, "imprint-contact-heading"),
                    body: t!(locale, "imprint-contact-body"),
                },
                LegalBlock {
                    heading: t!(locale, "imprint-liability-heading"),
                    body: t!(locale, "imprint-liability-body"),
                },
            ],
            back_home: t!(locale, "legal-back-home"),
        }
    }

    pub fn privacy(locale: Locale) -> Self {
        Self {
            title: t!(locale, "privacy-title"),
            intro: Some(t!(locale, "privacy-intro")),
            blocks: vec![
                LegalBlock {
                    heading: t!(locale, "privacy-controller-heading"),
                    body: t!(locale, "privacy-controller-body"),
                },
                LegalBlock {
                    heading: t!(locale, "privacy-contact-form-heading"),
                    body: t!(locale, "privacy-contact-form-body"),
                },
                LegalBlock {
                    heading: t!(locale, "privacy-storage-heading"),
                    body: t!(locale, "privacy-storage-body"),
                },
                LegalBlock {
                    heading: t!(locale, "privacy-rights-heading"),
                    body: t!(locale, "privacy-rights-body"),
                },
            ],
            back_home: t!(locale, "legal-back-home"),
        }
    }
}

/// Main heading of every page section, top to bottom.
pub fn section_headings(locale: Locale) -> Vec<String> {
    vec![
        HeroTexts::load(locale).main_heading,
        AboutTexts::load(locale).heading,
        SkillsTexts::load(locale).title_skill_set,
        ProjectsTexts::load(locale).title,
        TestimonialsTexts::load(locale).heading,
        ContactTexts::load(locale).title,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_resolve_from_one_catalogue() {
        let de = ProjectsTexts::load(Locale::De);
        let en = ProjectsTexts::load(Locale::En);
        assert_eq!(de.title, "Ausgewählte Projekte");
        assert_eq!(en.title, "Featured Projects");
    }

    #[test]
    fn footer_copyright_carries_the_year() {
        let footer = FooterTexts::load(Locale::De, 2026);
        assert!(footer.copyright.contains("2026"));
    }

    #[test]
    fn legal_pages_have_content_in_both_locales() {
        for locale in Locale::ALL {
            assert_eq!(LegalTexts::imprint(locale).blocks.len(), 3);
            let privacy = LegalTexts::privacy(locale);
            assert_eq!(privacy.blocks.len(), 4);
            assert!(privacy.intro.is_some());
        }
    }
}
