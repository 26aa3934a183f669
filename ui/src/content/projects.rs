use crate::core::language::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLinks {
    pub github: &'static str,
    pub live_test: &'static str,
}

/// A gallery card. `id` is 1-based and matches the modal's open id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: usize,
    pub name: &'static str,
    pub visible: bool,
    pub about: &'static str,
    pub description: &'static str,
    pub technologies: &'static [Technology],
    pub image_path: &'static str,
    pub links: ProjectLinks,
}

impl Project {
    /// `"JavaScript | HTML | CSS"` style summary for the gallery card.
    pub fn technology_names(&self) -> String {
        self.technologies
            .iter()
            .map(|t| t.name)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

const JAVASCRIPT: Technology = Technology {
    name: "JavaScript",
    icon: "JavaScript",
};
const FIREBASE: Technology = Technology {
    name: "Firebase",
    icon: "Firebase",
};
const HTML: Technology = Technology {
    name: "HTML",
    icon: "HTML",
};
const CSS: Technology = Technology {
    name: "CSS",
    icon: "CSS",
};
const REST_API: Technology = Technology {
    name: "Rest API",
    icon: "API",
};

const JOIN_TECH: &[Technology] = &[JAVASCRIPT, FIREBASE, HTML, CSS];
const POLLO_TECH: &[Technology] = &[JAVASCRIPT, HTML, CSS];
const POKEDEX_TECH: &[Technology] = &[JAVASCRIPT, HTML, CSS, REST_API];

const JOIN_LINKS: ProjectLinks = ProjectLinks {
    github: "https://github.com/MirkoRinke/Developer-Akademie-Join",
    live_test: "https://example.com",
};
const POLLO_LINKS: ProjectLinks = ProjectLinks {
    github: "https://github.com/MirkoRinke/Developer-Akademie-el-pollo-loco",
    live_test: "https://example.com",
};
const POKEDEX_LINKS: ProjectLinks = ProjectLinks {
    github: "https://github.com/MirkoRinke/Developer-Akademie-pokedex",
    live_test: "https://example.com",
};

static PROJECTS_DE: [Project; 3] = [
    Project {
        id: 1,
        name: "Join",
        visible: true,
        about: "Worum geht es bei diesem Projekt?",
        description: "Task-Manager inspiriert vom Kanban-System. Erstellen und organisieren Sie Aufgaben mit Drag-and-Drop-Funktionen, weisen Sie Benutzer und Kategorien zu.",
        technologies: JOIN_TECH,
        image_path: "/images/projects/join.jpg",
        links: JOIN_LINKS,
    },
    Project {
        id: 2,
        name: "El Pollo Loco",
        visible: true,
        about: "Worum geht es bei diesem Projekt?",
        description: "Jump-, Run- und Wurfspiel basierend auf einem objektorientierten Ansatz. Helfen Sie Pepe, Münzen und Tabasco-Salsa zu finden, um gegen das verrückte Huhn zu kämpfen.",
        technologies: POLLO_TECH,
        image_path: "/images/projects/el-pollo-loco.jpg",
        links: POLLO_LINKS,
    },
    Project {
        id: 3,
        name: "Pokedex",
        visible: true,
        about: "Worum geht es bei diesem Projekt?",
        description: "Pokedex-Anwendung zum Suchen nach Pokemon und Abrufen detaillierter Informationen über sie. Die Daten werden von einer externen API abgerufen.",
        technologies: POKEDEX_TECH,
        image_path: "/images/projects/pokedex.jpg",
        links: POKEDEX_LINKS,
    },
];

static PROJECTS_EN: [Project; 3] = [
    Project {
        id: 1,
        name: "Join",
        visible: true,
        about: "What is this project about?",
        description: "Task manager inspired by the Kanban System. Create and organize tasks using drag and drop functions, assign users and categories.",
        technologies: JOIN_TECH,
        image_path: "/images/projects/join.jpg",
        links: JOIN_LINKS,
    },
    Project {
        id: 2,
        name: "El Pollo Loco",
        visible: true,
        about: "What is this project about?",
        description: "Jump, run and throw game based on object-oriented approach. Help Pepe to find coins and tabasco salsa to fight against the crazy hen.",
        technologies: POLLO_TECH,
        image_path: "/images/projects/el-pollo-loco.jpg",
        links: POLLO_LINKS,
    },
    Project {
        id: 3,
        name: "Pokedex",
        visible: true,
        about: "What is this project about?",
        description: "Pokedex application to search for Pokemon and get detailed information about them. The data is fetched from an external API.",
        technologies: POKEDEX_TECH,
        image_path: "/images/projects/pokedex.jpg",
        links: POKEDEX_LINKS,
    },
];

pub fn projects(locale: Locale) -> &'static [Project] {
    match locale {
        Locale::De => &PROJECTS_DE,
        Locale::En => &PROJECTS_EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_one_based_and_sequential() {
        for locale in Locale::ALL {
            for (index, project) in projects(locale).iter().enumerate() {
                assert_eq!(project.id, index + 1);
            }
        }
    }

    #[test]
    fn technology_summary_joins_names() {
        assert_eq!(
            projects(Locale::En)[1].technology_names(),
            "JavaScript | HTML | CSS"
        );
    }

    #[test]
    fn only_the_prose_is_translated() {
        for (de, en) in projects(Locale::De).iter().zip(projects(Locale::En)) {
            assert_eq!(de.name, en.name);
            assert_eq!(de.technologies, en.technologies);
            assert_eq!(de.links, en.links);
            assert_ne!(de.description, en.description);
        }
    }
}
