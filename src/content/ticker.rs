#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TechItem {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Technologies scrolled in the hero ticker.
pub static TECH_TICKER: &[TechItem] = &[
    TechItem { id: "react", name: "React", icon: "atom", color: "#61DAFB" },
    TechItem { id: "typescript", name: "TypeScript", icon: "file-code", color: "#3178C6" },
    TechItem { id: "nodejs", name: "Node.js", icon: "server", color: "#339933" },
    TechItem { id: "nextjs", name: "Next.js", icon: "triangle", color: "#FFFFFF" },
    TechItem { id: "tailwind", name: "Tailwind", icon: "palette", color: "#06B6D4" },
    TechItem { id: "postgresql", name: "PostgreSQL", icon: "database", color: "#336791" },
    TechItem { id: "docker", name: "Docker", icon: "container", color: "#2496ED" },
    TechItem { id: "graphql", name: "GraphQL", icon: "share-2", color: "#E10098" },
    TechItem { id: "redis", name: "Redis", icon: "zap", color: "#DC382D" },
    TechItem { id: "aws", name: "AWS", icon: "cloud", color: "#FF9900" },
    TechItem { id: "vue", name: "Vue.js", icon: "component", color: "#4FC08D" },
    TechItem { id: "mongodb", name: "MongoDB", icon: "leaf", color: "#47A248" },
];
