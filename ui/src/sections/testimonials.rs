use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::content::{testimonials, Testimonial};
use crate::core::carousel::{
    unit_width_for, Carousel, CarouselError, PendingJump, CAROUSEL_JUMP_DELAY_MS,
};
use crate::core::navigation::Section;
use crate::core::{platform, timing};
use crate::i18n::use_locale;
use crate::texts::TestimonialsTexts;

type Strip = Result<Carousel<Testimonial>, CarouselError>;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    Prev,
}

#[component]
pub fn Testimonials() -> Element {
    let locale = use_locale();
    let texts = TestimonialsTexts::load(locale());

    let mut strip: Signal<Strip> = use_signal(|| Carousel::new(testimonials(locale()).to_vec()));
    let mut unit = use_signal(|| unit_width_for(platform::viewport_width()));
    let mut jump_task: Signal<Option<Task>> = use_signal(|| None);

    // New locale, new list: start over from the first slide.
    use_effect(move || {
        let items = testimonials(locale()).to_vec();
        let stale = strip
            .peek()
            .as_ref()
            .map(|c| c.items() != items.as_slice())
            .unwrap_or(true);
        if !stale {
            return;
        }
        if let Some(task) = jump_task.take() {
            task.cancel();
        }
        let mut current = strip.write();
        match current.as_mut() {
            Ok(carousel) => {
                if let Err(err) = carousel.replace_items(items) {
                    *current = Err(err);
                }
            }
            Err(_) => *current = Carousel::new(items),
        }
    });

    let resize = use_hook(move || {
        Rc::new(RefCell::new(platform::on_resize(move |width| {
            let next = unit_width_for(width);
            if *unit.peek() != next {
                unit.set(next);
            }
        })))
    });
    use_drop(move || {
        resize.borrow_mut().take();
    });

    let mut schedule = move |jump: PendingJump| {
        if let Some(task) = jump_task.take() {
            task.cancel();
        }
        let task = spawn(async move {
            timing::sleep_ms(CAROUSEL_JUMP_DELAY_MS).await;
            if let Ok(carousel) = strip.write().as_mut() {
                if !carousel.settle(jump) {
                    debug!("[testimonials] dropped stale jump");
                }
            }
        });
        jump_task.set(Some(task));
    };

    let mut step = move |direction: Step| {
        let jump = match strip.write().as_mut() {
            Ok(carousel) => match direction {
                Step::Next => carousel.next(),
                Step::Prev => carousel.prev(),
            },
            Err(_) => None,
        };
        if let Some(jump) = jump {
            schedule(jump);
        }
    };

    let snapshot = strip.read().clone();
    let carousel = match snapshot {
        Ok(carousel) => carousel,
        Err(err) => {
            warn!("[testimonials] {err}; rendering a static list");
            return rsx! {
                section { id: Section::Testimonials.anchor(), class: "testimonials",
                    h2 { class: "section-heading", "{texts.heading}" }
                    ul { class: "testimonials__static",
                        for item in testimonials(locale()) {
                            li { key: "{item.id}", TestimonialCard { item: *item } }
                        }
                    }
                }
            };
        }
    };

    let unit_px = unit();
    let strip_class = if carousel.is_animating() {
        "testimonials__strip"
    } else {
        "testimonials__strip testimonials__strip--instant"
    };
    let active = carousel.active_item();

    rsx! {
        section { id: Section::Testimonials.anchor(), class: "testimonials",
            h2 { class: "section-heading", "{texts.heading}" }

            div { class: "testimonials__viewport",
                div { class: "{strip_class}",
                    for (index, item) in carousel.display_list().iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if index == carousel.current_index() + 1 { "testimonials__slide testimonials__slide--current" } else { "testimonials__slide" },
                            style: "transform: {carousel.slide_transform(index, unit_px)}",
                            TestimonialCard { item: *item }
                        }
                    }
                }
            }

            div { class: "testimonials__controls",
                button {
                    class: "testimonials__arrow",
                    r#type: "button",
                    aria_label: "{texts.previous}",
                    onclick: move |_| step(Step::Prev),
                    "←"
                }
                div { class: "testimonials__dots",
                    for dot in 0..carousel.len() {
                        span {
                            key: "{dot}",
                            class: if dot == active { "testimonials__dot testimonials__dot--active" } else { "testimonials__dot" },
                        }
                    }
                }
                button {
                    class: "testimonials__arrow",
                    r#type: "button",
                    aria_label: "{texts.next}",
                    onclick: move |_| step(Step::Next),
                    "→"
                }
            }
        }
    }
}

#[component]
fn TestimonialCard(item: Testimonial) -> Element {
    rsx! {
        figure { class: "testimonial",
            blockquote { class: "testimonial__text", "„{item.text}“" }
            figcaption { class: "testimonial__author",
                span { class: "testimonial__name", "{item.author}" }
                span { class: "testimonial__position", "{item.position}" }
            }
        }
    }
}
