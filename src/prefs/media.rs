/// Answers to the platform media queries read at startup.
///
/// `prefers_reduced_motion` is `(prefers-reduced-motion: reduce)`,
/// `prefers_light_scheme` is `(prefers-color-scheme: light)`, and
/// `browser_language` is the raw navigator language tag (e.g. `ru-RU`).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SystemPreferences {
    pub prefers_reduced_motion: bool,
    pub prefers_light_scheme: bool,
    pub browser_language: Option<String>,
}

impl SystemPreferences {
    /// Primary subtag of the browser language, lowercased.
    pub fn primary_language(&self) -> Option<String> {
        let tag = self.browser_language.as_deref()?.trim();
        let primary = tag.split(['-', '_']).next()?.trim();
        if primary.is_empty() {
            return None;
        }
        Some(primary.to_ascii_lowercase())
    }
}
