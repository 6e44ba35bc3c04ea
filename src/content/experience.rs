#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ExperienceItem {
    pub id: &'static str,
    /// Under `experience.companies.`.
    pub company_key: &'static str,
    /// Under `experience.roles.`.
    pub role_key: &'static str,
    /// Under `experience.periods.`.
    pub period_key: &'static str,
    /// Under `experience.bullets.`, as `<company>.<bullet>`.
    pub bullet_keys: &'static [&'static str],
}

pub static EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        id: "senior-dev",
        company_key: "techCorp",
        role_key: "seniorDev",
        period_key: "techCorp",
        bullet_keys: &["techCorp.bullet1", "techCorp.bullet2", "techCorp.bullet3"],
    },
    ExperienceItem {
        id: "fullstack-dev",
        company_key: "startupInc",
        role_key: "fullstackDev",
        period_key: "startupInc",
        bullet_keys: &[
            "startupInc.bullet1",
            "startupInc.bullet2",
            "startupInc.bullet3",
        ],
    },
    ExperienceItem {
        id: "frontend-dev",
        company_key: "agencyPro",
        role_key: "frontendDev",
        period_key: "agencyPro",
        bullet_keys: &["agencyPro.bullet1", "agencyPro.bullet2"],
    },
];
