/// A spoken language on the résumé (not a UI language).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SpokenLanguage {
    pub id: &'static str,
    /// Under `languages.items.<key>.name`.
    pub name_key: &'static str,
    /// Proficiency, 1..=5.
    pub rating: u8,
    /// Under `languages.items.<key>.note`.
    pub note_key: &'static str,
}

pub const MAX_RATING: u8 = 5;

pub static SPOKEN_LANGUAGES: &[SpokenLanguage] = &[
    SpokenLanguage {
        id: "armenian",
        name_key: "armenian",
        rating: 5,
        note_key: "armenian",
    },
    SpokenLanguage {
        id: "russian",
        name_key: "russian",
        rating: 4,
        note_key: "russian",
    },
    SpokenLanguage {
        id: "english",
        name_key: "english",
        rating: 4,
        note_key: "english",
    },
];
