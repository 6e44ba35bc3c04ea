use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    animation::spring::Spring,
    foundation::{
        core::Viewport,
        error::{FolioError, FolioResult},
    },
    page::{
        background::CROSSFADE_MS,
        layout::{DEFAULT_FOOTER_HEIGHT, PageLayout},
        section::SectionId,
    },
    prefs::language::Language,
};

/// Site-wide settings, read from JSON. Every field is optional.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Canonical origin, without a trailing slash.
    pub base_url: String,
    pub author: String,
    /// Shown before any stored or browser language is known.
    pub default_language: Language,
    pub viewport: Viewport,
    /// Section heights in px; missing sections use the built-in heights.
    pub section_heights: BTreeMap<SectionId, f64>,
    pub footer_height: f64,
    /// JSON file backing the preference store; in-memory when unset.
    pub storage_path: Option<PathBuf>,
    pub spotlight: Spring,
    pub crossfade_ms: u64,
    /// Seed for decorative randomness.
    pub seed: u64,
    /// Year printed in the footer.
    pub year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.com".to_string(),
            author: "Alex Developer".to_string(),
            default_language: Language::En,
            viewport: Viewport::default(),
            section_heights: BTreeMap::new(),
            footer_height: DEFAULT_FOOTER_HEIGHT,
            storage_path: None,
            spotlight: Spring::SPOTLIGHT,
            crossfade_ms: CROSSFADE_MS,
            seed: 0x5EED,
            year: 2026,
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> FolioResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FolioError::validation(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> FolioResult<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(FolioError::validation("base_url must not be empty"));
        }
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(FolioError::validation(format!(
                "base_url '{base}' must be an http(s) URL"
            )));
        }
        if self.author.trim().is_empty() {
            return Err(FolioError::validation("author must not be empty"));
        }
        Viewport::new(self.viewport.width, self.viewport.height)?;
        self.spotlight.validate()?;
        // Height checks live with the layout.
        self.layout()?;
        Ok(())
    }

    /// Canonical origin with any trailing slash removed.
    pub fn origin(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    pub fn layout(&self) -> FolioResult<PageLayout> {
        PageLayout::new(self.viewport, &self.section_heights, self.footer_height)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
