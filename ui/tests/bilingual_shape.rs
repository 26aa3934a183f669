//! Both locales must describe the same site: same projects, same testimonial
//! count, same skills, same legal structure. Only the wording may differ.

use std::collections::HashSet;

use ui::content::{learning_skills, projects, tech_skills, testimonials};
use ui::core::language::Locale;
use ui::texts::{HeroTexts, LegalTexts};

#[test]
fn projects_line_up_across_locales() {
    let de = projects(Locale::De);
    let en = projects(Locale::En);
    assert_eq!(de.len(), en.len());
    for (d, e) in de.iter().zip(en) {
        assert_eq!(d.id, e.id);
        assert_eq!(d.name, e.name);
        assert_eq!(d.visible, e.visible);
        assert_eq!(d.image_path, e.image_path);
        assert_eq!(d.links, e.links);
        assert_eq!(d.technology_names(), e.technology_names());
        assert_ne!(d.description, e.description, "{} is not translated", d.name);
    }
}

#[test]
fn project_ids_are_one_based_and_contiguous() {
    for locale in Locale::ALL {
        let ids: Vec<usize> = projects(locale).iter().map(|p| p.id).collect();
        let expected: Vec<usize> = (1..=ids.len()).collect();
        assert_eq!(ids, expected, "{locale}");
    }
}

#[test]
fn testimonials_line_up_across_locales() {
    let de = testimonials(Locale::De);
    let en = testimonials(Locale::En);
    assert_eq!(de.len(), en.len());
    assert!(de.len() >= 2, "the carousel needs at least two entries");
    for (d, e) in de.iter().zip(en) {
        assert_eq!(d.id, e.id);
        assert_eq!(d.author, e.author);
    }
}

#[test]
fn skill_table_serves_both_locales() {
    let skills: Vec<_> = tech_skills().iter().chain(learning_skills()).collect();
    assert_eq!(tech_skills().len(), 11);
    assert_eq!(learning_skills().len(), 2);
    assert!(skills
        .iter()
        .all(|s| !s.name.is_empty() && !s.icon.is_empty() && !s.alt.is_empty()));

    let icons: HashSet<_> = skills.iter().map(|s| s.icon).collect();
    assert_eq!(icons.len(), skills.len(), "duplicate skill icon");

    // Project cards in either language only show technologies from the grid.
    for locale in Locale::ALL {
        for project in projects(locale) {
            for tech in project.technologies {
                assert!(icons.contains(tech.icon), "{locale}: {} has no skill", tech.name);
            }
        }
    }
}

#[test]
fn legal_pages_keep_their_structure() {
    let (de, en) = (LegalTexts::imprint(Locale::De), LegalTexts::imprint(Locale::En));
    assert_eq!(de.blocks.len(), en.blocks.len());
    assert!(de.intro.is_none() && en.intro.is_none());

    let (de, en) = (LegalTexts::privacy(Locale::De), LegalTexts::privacy(Locale::En));
    assert_eq!(de.blocks.len(), en.blocks.len());
    assert!(de.intro.is_some() && en.intro.is_some());
    assert_ne!(de.title, en.title);
}

#[test]
fn banner_has_four_localized_entries() {
    let de = HeroTexts::load(Locale::De);
    let en = HeroTexts::load(Locale::En);
    assert_eq!(de.banner_items().len(), 4);
    assert_ne!(de.banner_items(), en.banner_items());
    assert!(de.banner_items().iter().all(|item| !item.is_empty()));
}
