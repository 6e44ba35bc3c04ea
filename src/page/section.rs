use crate::{animation::variants::RevealPreset, foundation::error::FolioError};

/// Top-level page sections in document order. The string form is the DOM id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Services,
    Projects,
    Experience,
    Languages,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 8] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Services,
        Self::Projects,
        Self::Experience,
        Self::Languages,
        Self::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Services => "services",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Languages => "languages",
            Self::Contact => "contact",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Position in the document, starting at 0 for the hero.
    pub fn order(self) -> usize {
        self as usize
    }

    /// Nav label key; the hero is labelled `nav.home`.
    pub fn nav_key(self) -> &'static str {
        match self {
            Self::Hero => "nav.home",
            Self::About => "nav.about",
            Self::Skills => "nav.skills",
            Self::Services => "nav.services",
            Self::Projects => "nav.projects",
            Self::Experience => "nav.experience",
            Self::Languages => "nav.languages",
            Self::Contact => "nav.contact",
        }
    }

    pub fn reveal_preset(self) -> RevealPreset {
        match self {
            Self::Hero => RevealPreset::HERO,
            Self::About => RevealPreset::ABOUT,
            Self::Skills | Self::Services => RevealPreset::TABBED,
            Self::Projects | Self::Experience | Self::Languages | Self::Contact => {
                RevealPreset::LIST
            }
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FolioError::content(format!("unknown section '{s}'")))
    }
}
