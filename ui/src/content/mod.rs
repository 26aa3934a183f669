//! Static site content that is not plain message text: project cards,
//! testimonials and the skill grid.
//!
//! Each table exists once per [`Locale`](crate::core::language::Locale) with
//! the same shape; only the strings differ.

pub mod projects;
pub mod skills;
pub mod testimonials;

pub use projects::{projects, Project, ProjectLinks, Technology};
pub use skills::{learning_skills, tech_skills, Skill};
pub use testimonials::{testimonials, Testimonial};

/// Public URL of a technology/skill icon.
pub fn icon_path(icon: &str) -> String {
    format!("/icons/skills/{icon}.svg")
}

/// Owner contact details shown in the contact and footer blocks.
pub const CONTACT_EMAIL: &str = "kontakt@mirko-rinke.de";
pub const GITHUB_PROFILE: &str = "https://github.com/MirkoRinke";
