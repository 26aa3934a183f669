//! The six stacked sections of the main page.

mod about_me;
mod contact;
mod featured_projects;
mod hero;
mod project_modal;
mod skills;
mod testimonials;

pub use about_me::AboutMe;
pub use contact::Contact;
pub use featured_projects::FeaturedProjects;
pub use hero::Hero;
pub use project_modal::ProjectModalView;
pub use skills::Skills;
pub use testimonials::Testimonials;
