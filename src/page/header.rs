use crate::{
    page::{layout::PageLayout, section::SectionId},
    prefs::{Preferences, language::Language},
};

/// Fixed header: nav links, the language menu and the mobile drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Header {
    mobile_menu_open: bool,
    language_menu_open: bool,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_language_menu_open(&self) -> bool {
        self.language_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn toggle_language_menu(&mut self) {
        self.language_menu_open = !self.language_menu_open;
    }

    /// Persist `language` and close the language menu.
    pub fn choose_language(&mut self, language: Language, prefs: &mut Preferences) {
        prefs.set_language(language);
        self.language_menu_open = false;
    }

    /// Scroll target for a nav link; closes the mobile drawer.
    pub fn follow_link(&mut self, section: SectionId, layout: &PageLayout) -> f64 {
        self.mobile_menu_open = false;
        layout.clamp_scroll(layout.offset_top(section))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/header.rs"]
mod tests;
