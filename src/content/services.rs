#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Development,
    Design,
    Consulting,
}

impl ServiceCategory {
    pub const ALL: [Self; 3] = [Self::Development, Self::Design, Self::Consulting];

    /// Under `services.categories.`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Design => "design",
            Self::Consulting => "consulting",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Service {
    pub id: &'static str,
    /// Under `services.items.`.
    pub label_key: &'static str,
    pub category: ServiceCategory,
    pub icon: &'static str,
    pub color: &'static str,
}

macro_rules! service {
    ($id:literal, $key:literal, $cat:ident, $icon:literal, $color:literal) => {
        Service {
            id: $id,
            label_key: $key,
            category: ServiceCategory::$cat,
            icon: $icon,
            color: $color,
        }
    };
}

pub static SERVICES: &[Service] = &[
    service!("web-apps", "webApps", Development, "globe", "#61DAFB"),
    service!("mobile-apps", "mobileApps", Development, "smartphone", "#4FC08D"),
    service!("api-development", "apiDevelopment", Development, "server", "#339933"),
    service!("ecommerce", "ecommerce", Development, "shopping-cart", "#FF9900"),
    service!("saas", "saas", Development, "cloud", "#3178C6"),
    service!("cms", "cms", Development, "layout", "#E10098"),
    service!("ui-design", "uiDesign", Design, "palette", "#F24E1E"),
    service!("ux-design", "uxDesign", Design, "users", "#BB4DFF"),
    service!("branding", "branding", Design, "star", "#FFD859"),
    service!("prototyping", "prototyping", Design, "figma", "#00DC82"),
    service!("tech-consulting", "techConsulting", Consulting, "lightbulb", "#06B6D4"),
    service!("code-review", "codeReview", Consulting, "code", "#764ABC"),
    service!("architecture", "architecture", Consulting, "layers", "#326CE5"),
    service!("seo-optimization", "seoOptimization", Consulting, "search", "#4285F4"),
];

pub fn services_in(category: ServiceCategory) -> impl Iterator<Item = &'static Service> {
    SERVICES.iter().filter(move |s| s.category == category)
}
