use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::navigation::Section;
use crate::core::platform;
use crate::sections::{AboutMe, Contact, FeaturedProjects, Hero, Skills, Testimonials};

/// The single scrolling page with every section stacked in order.
#[component]
pub fn Home() -> Element {
    // Coming back from a legal page via `/#anchor` lands at the top otherwise.
    use_effect(|| {
        let Some(hash) = platform::location_hash() else {
            return;
        };
        match Section::from_anchor(&hash) {
            Some(section) => {
                platform::scroll_to_anchor(section.anchor());
            }
            None => debug!("[home] no section for #{hash}"),
        }
    });

    rsx! {
        Hero {}
        AboutMe {}
        Skills {}
        FeaturedProjects {}
        Testimonials {}
        Contact {}
    }
}
