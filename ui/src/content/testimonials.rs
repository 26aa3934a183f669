use crate::core::language::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: usize,
    pub author: &'static str,
    pub position: &'static str,
    pub text: &'static str,
}

static TESTIMONIALS_DE: [Testimonial; 5] = [
    Testimonial {
        id: 1,
        author: "H. Janisch",
        position: "Team-Partner",
        text: "Mirko hat sich als zuverlässiger Gruppenpartner erwiesen. Seine technischen Fähigkeiten und sein proaktiver Ansatz waren entscheidend für den Erfolg unseres Projekts.",
    },
    Testimonial {
        id: 2,
        author: "T. Schulz",
        position: "Frontend-Entwickler",
        text: "Ich hatte das Glück, mit Mirko an einem Projekt bei der Developer Akademie zu arbeiten. Er blieb immer ruhig und sorgte dafür, dass unser Team auf Erfolgskurs war.",
    },
    Testimonial {
        id: 3,
        author: "A. Müller",
        position: "Backend-Entwickler",
        text: "Ich habe enorm von Mirkos effizienter Arbeitsweise gelernt. Eine großartige Bereicherung für jedes Team!",
    },
    Testimonial {
        id: 4,
        author: "M. Becker",
        position: "Projektmanager",
        text: "Mirko lieferte stets qualitativ hochwertige Arbeit und war immer bereit, einen zusätzlichen Schritt zu gehen, um den Projekterfolg sicherzustellen.",
    },
    Testimonial {
        id: 5,
        author: "S. Wagner",
        position: "UX-Designer",
        text: "Die Zusammenarbeit mit Mirko war eine Freude. Sein Augenmerk auf Details und sein nutzerzentrierter Ansatz haben unsere Projektergebnisse erheblich verbessert.",
    },
];

static TESTIMONIALS_EN: [Testimonial; 5] = [
    Testimonial {
        id: 1,
        author: "H. Janisch",
        position: "Team Partner",
        text: "Mirko has proven to be a reliable group partner. His technical skills and proactive approach were crucial to the success of our project.",
    },
    Testimonial {
        id: 2,
        author: "T. Schulz",
        position: "Frontend Developer",
        text: "I had the good fortune of working with Mirko on a project at the Developer Akademie. He always stayed calm and made sure our team was set up for success.",
    },
    Testimonial {
        id: 3,
        author: "A. Müller",
        position: "Backend Developer",
        text: "I learned enormously from Mirko's efficient way of working. A great addition to any team!",
    },
    Testimonial {
        id: 4,
        author: "M. Becker",
        position: "Project Manager",
        text: "Mirko consistently delivered high-quality work and was always willing to go the extra mile to ensure project success.",
    },
    Testimonial {
        id: 5,
        author: "S. Wagner",
        position: "UX Designer",
        text: "Working with Mirko was a pleasure. His attention to detail and user-centric approach greatly improved our project outcomes.",
    },
];

pub fn testimonials(locale: Locale) -> &'static [Testimonial] {
    match locale {
        Locale::De => &TESTIMONIALS_DE,
        Locale::En => &TESTIMONIALS_EN,
    }
}
