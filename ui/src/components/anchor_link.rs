use dioxus::prelude::*;

use crate::core::navigation::Section;
use crate::core::platform;

/// Link to a main-page section that scrolls in place when it can.
#[component]
pub fn AnchorLink(section: Section, #[props(into)] class: String, children: Element) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: section.href(),
            onclick: move |evt: MouseEvent| {
                if platform::scroll_to_anchor(section.anchor()) {
                    evt.prevent_default();
                }
            },
            {children}
        }
    }
}
