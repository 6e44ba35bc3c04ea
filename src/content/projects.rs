use crate::foundation::error::{FolioError, FolioResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    Live,
    Github,
    CaseStudy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CaseStudy {
    pub screenshots: &'static [&'static str],
    /// Bullet keys under `projects.items.<key>.`.
    pub owned_keys: &'static [&'static str],
}

/// A portfolio project. `key` is the translation subtree under `projects.items.`
/// holding `title`, `desc`, `role`, `problem`, `solution`, `result` and the
/// owned bullets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Project {
    pub id: &'static str,
    pub key: &'static str,
    pub stack: &'static [&'static str],
    pub year: u16,
    pub links: &'static [ProjectLink],
    pub case_study: CaseStudy,
}

impl Project {
    pub fn item_key(&self, leaf: &str) -> String {
        format!("projects.items.{}.{leaf}", self.key)
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "ecommerce-platform",
        key: "ecommerce",
        stack: &["React", "TypeScript", "Node.js", "PostgreSQL", "Redis", "Docker"],
        year: 2024,
        links: &[
            ProjectLink {
                kind: LinkKind::Live,
                url: "https://example.com",
            },
            ProjectLink {
                kind: LinkKind::Github,
                url: "https://github.com",
            },
        ],
        case_study: CaseStudy {
            screenshots: &["/placeholder.svg", "/placeholder.svg", "/placeholder.svg"],
            owned_keys: &["owned1", "owned2", "owned3"],
        },
    },
    Project {
        id: "analytics-dashboard",
        key: "analytics",
        stack: &["Vue.js", "Nuxt", "D3.js", "GraphQL", "MongoDB"],
        year: 2023,
        links: &[ProjectLink {
            kind: LinkKind::Live,
            url: "https://example.com",
        }],
        case_study: CaseStudy {
            screenshots: &["/placeholder.svg", "/placeholder.svg"],
            owned_keys: &["owned1", "owned2"],
        },
    },
    Project {
        id: "mobile-app",
        key: "mobileApp",
        stack: &["React Native", "TypeScript", "Firebase", "Redux"],
        year: 2023,
        links: &[ProjectLink {
            kind: LinkKind::Github,
            url: "https://github.com",
        }],
        case_study: CaseStudy {
            screenshots: &["/placeholder.svg", "/placeholder.svg"],
            owned_keys: &["owned1", "owned2"],
        },
    },
];

pub fn project(id: &str) -> FolioResult<&'static Project> {
    PROJECTS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| FolioError::content(format!("unknown project '{id}'")))
}
