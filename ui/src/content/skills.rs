//! Skill grid entries. Names are product names and read the same in both
//! languages, so one table serves both locales.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub alt: &'static str,
}

const fn skill(name: &'static str, icon: &'static str, alt: &'static str) -> Skill {
    Skill { name, icon, alt }
}

static TECH_SKILLS: [Skill; 11] = [
    skill("HTML", "HTML", "HTML Logo"),
    skill("CSS", "CSS", "CSS Logo"),
    skill("JavaScript", "JavaScript", "JavaScript Logo"),
    skill("Material Design", "MaterialDesign", "Material Design Logo"),
    skill("TypeScript", "TypeScript", "TypeScript Logo"),
    skill("Angular", "Angular", "Angular Logo"),
    skill("Firebase", "Firebase", "Firebase Logo"),
    skill("GIT", "GIT", "GIT Logo"),
    skill("REST API", "API", "REST API Logo"),
    skill("Scrum", "Scrum", "Scrum Logo"),
    skill("Growth Mindset", "GrowthMindset", "Growth Mindset Logo"),
];

static LEARNING_SKILLS: [Skill; 2] = [
    skill("React", "React", "React Logo"),
    skill("Vue Js", "Vue", "Vue Js Logo"),
];

/// Skills in current use. The last entry ("Growth Mindset") carries the
/// hover bubble listing [`learning_skills`].
pub fn tech_skills() -> &'static [Skill] {
    &TECH_SKILLS
}

pub fn learning_skills() -> &'static [Skill] {
    &LEARNING_SKILLS
}
