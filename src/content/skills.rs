use crate::foundation::error::{FolioError, FolioResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Ui,
    Vue,
    Backend,
    Data,
    Devops,
    Tooling,
    Platforms,
    Seo,
}

impl SkillCategory {
    pub const ALL: [Self; 9] = [
        Self::Frontend,
        Self::Ui,
        Self::Vue,
        Self::Backend,
        Self::Data,
        Self::Devops,
        Self::Tooling,
        Self::Platforms,
        Self::Seo,
    ];

    /// Under `skills.categories.`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Ui => "ui",
            Self::Vue => "vue",
            Self::Backend => "backend",
            Self::Data => "data",
            Self::Devops => "devops",
            Self::Tooling => "tooling",
            Self::Platforms => "platforms",
            Self::Seo => "seo",
        }
    }
}

/// Demo tag attached to a skill; resolved to a renderer in `page::demo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Redux,
    WebSockets,
    Redis,
    Docker,
    Rest,
    React,
    GraphQl,
    TypeScript,
    Git,
    Vue,
    NodeJs,
    Default,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Skill {
    pub id: &'static str,
    /// Under `skills.items.`.
    pub label_key: &'static str,
    pub category: SkillCategory,
    pub icon: &'static str,
    pub demo: DemoKind,
    pub color: &'static str,
}

macro_rules! skill {
    ($id:literal, $cat:ident, $icon:literal, $demo:ident, $color:literal) => {
        Skill {
            id: $id,
            label_key: $id,
            category: SkillCategory::$cat,
            icon: $icon,
            demo: DemoKind::$demo,
            color: $color,
        }
    };
}

pub static SKILLS: &[Skill] = &[
    skill!("react", Frontend, "atom", React, "#61DAFB"),
    skill!("typescript", Frontend, "file-code", TypeScript, "#3178C6"),
    skill!("nextjs", Frontend, "triangle", Default, "#FFFFFF"),
    skill!("tailwind", Frontend, "palette", Default, "#06B6D4"),
    skill!("redux", Frontend, "layers", Redux, "#764ABC"),
    skill!("figma", Ui, "figma", Default, "#F24E1E"),
    skill!("framer", Ui, "sparkles", Default, "#BB4DFF"),
    skill!("vue", Vue, "component", Vue, "#4FC08D"),
    skill!("nuxt", Vue, "hexagon", Default, "#00DC82"),
    skill!("pinia", Vue, "database", Default, "#FFD859"),
    skill!("nodejs", Backend, "server", NodeJs, "#339933"),
    skill!("express", Backend, "route", Default, "#FFFFFF"),
    skill!("graphql", Backend, "share-2", GraphQl, "#E10098"),
    skill!("websockets", Backend, "radio", WebSockets, "#00D4FF"),
    skill!("rest", Backend, "arrow-right-left", Rest, "#FF6B6B"),
    skill!("postgresql", Data, "database", Default, "#336791"),
    skill!("mongodb", Data, "leaf", Default, "#47A248"),
    skill!("redis", Data, "zap", Redis, "#DC382D"),
    skill!("docker", Devops, "container", Docker, "#2496ED"),
    skill!("kubernetes", Devops, "network", Default, "#326CE5"),
    skill!("aws", Devops, "cloud", Default, "#FF9900"),
    skill!("git", Tooling, "git-branch", Git, "#F05032"),
    skill!("webpack", Tooling, "package", Default, "#8DD6F9"),
    skill!("vite", Tooling, "bolt", Default, "#646CFF"),
    skill!("vercel", Platforms, "triangle", Default, "#FFFFFF"),
    skill!("supabase", Platforms, "database", Default, "#3ECF8E"),
    skill!("seo", Seo, "search", Default, "#4285F4"),
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

pub fn skill(id: &str) -> FolioResult<&'static Skill> {
    SKILLS
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| FolioError::content(format!("unknown skill '{id}'")))
}
