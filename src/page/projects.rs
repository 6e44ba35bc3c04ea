use crate::{
    content::projects::{Project, project},
    foundation::{core::Millis, error::FolioResult},
    page::modal::{CloseReason, Modal},
};

/// Project grid with its case-study dialog.
#[derive(Clone, Debug, Default)]
pub struct ProjectsPanel {
    selected: Option<&'static Project>,
    modal: Modal,
}

impl ProjectsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project shown in the dialog, kept until the close animation ends.
    pub fn selected(&self) -> Option<&'static Project> {
        self.selected
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Open the case study of project `id`. Opening another project while one
    /// is shown swaps the content in place.
    pub fn open(&mut self, id: &str, now: Millis, reduced_motion: bool) -> FolioResult<()> {
        let p = project(id)?;
        tracing::debug!(project = p.id, "case study opened");
        self.selected = Some(p);
        self.modal.open(now, reduced_motion);
        Ok(())
    }

    pub fn close(&mut self, reason: CloseReason, now: Millis, reduced_motion: bool) -> bool {
        let closing = self.modal.close(reason, now, reduced_motion);
        self.release_if_closed();
        closing
    }

    pub fn key(&mut self, key: &str, now: Millis, reduced_motion: bool) -> bool {
        let closing = self.modal.key(key, now, reduced_motion);
        self.release_if_closed();
        closing
    }

    pub fn tick(&mut self, now: Millis) {
        self.modal.tick(now);
        self.release_if_closed();
    }

    pub fn locks_scroll(&self) -> bool {
        self.modal.locks_scroll()
    }

    fn release_if_closed(&mut self) {
        if self.modal.is_closed() {
            self.selected = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/projects.rs"]
mod tests;
