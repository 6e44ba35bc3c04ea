use std::collections::BTreeMap;

use crate::{
    foundation::{
        core::{Rect, Viewport},
        error::{FolioError, FolioResult},
    },
    page::{section::SectionId, visibility::VisibilityObservation},
};

/// Default rendered height of each section at the default viewport.
pub fn default_height(id: SectionId) -> f64 {
    match id {
        SectionId::Hero => 900.0,
        SectionId::About => 900.0,
        SectionId::Skills => 1100.0,
        SectionId::Services => 1000.0,
        SectionId::Projects => 1100.0,
        SectionId::Experience => 1000.0,
        SectionId::Languages => 700.0,
        SectionId::Contact => 1000.0,
    }
}

pub const DEFAULT_FOOTER_HEIGHT: f64 = 240.0;

/// Vertical document geometry: every section stacked in document order,
/// full viewport width, followed by the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    viewport: Viewport,
    /// `(section, top, height)` in document coordinates.
    sections: Vec<(SectionId, f64, f64)>,
    footer_height: f64,
}

impl PageLayout {
    /// Sections missing from `heights` use [`default_height`].
    pub fn new(
        viewport: Viewport,
        heights: &BTreeMap<SectionId, f64>,
        footer_height: f64,
    ) -> FolioResult<Self> {
        if !(footer_height.is_finite() && footer_height >= 0.0) {
            return Err(FolioError::validation("footer height must be finite and >= 0"));
        }
        let mut sections = Vec::with_capacity(SectionId::ALL.len());
        let mut top = 0.0;
        for id in SectionId::ALL {
            let height = heights.get(&id).copied().unwrap_or_else(|| default_height(id));
            if !(height.is_finite() && height > 0.0) {
                return Err(FolioError::validation(format!(
                    "section '{id}' height must be finite and > 0"
                )));
            }
            sections.push((id, top, height));
            top += height;
        }
        Ok(Self {
            viewport,
            sections,
            footer_height,
        })
    }

    pub fn standard(viewport: Viewport) -> Self {
        let mut top = 0.0;
        let sections = SectionId::ALL
            .into_iter()
            .map(|id| {
                let h = default_height(id);
                let entry = (id, top, h);
                top += h;
                entry
            })
            .collect();
        Self {
            viewport,
            sections,
            footer_height: DEFAULT_FOOTER_HEIGHT,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().map(|(id, _, _)| *id)
    }

    /// Section box in document coordinates.
    pub fn document_rect(&self, id: SectionId) -> Rect {
        let (_, top, height) = self.sections[id.order()];
        Rect::new(0.0, top, self.viewport.width, top + height)
    }

    /// Section box relative to the viewport at `scroll_y`, as
    /// `getBoundingClientRect` reports it.
    pub fn client_rect(&self, id: SectionId, scroll_y: f64) -> Rect {
        let r = self.document_rect(id);
        Rect::new(r.x0, r.y0 - scroll_y, r.x1, r.y1 - scroll_y)
    }

    pub fn offset_top(&self, id: SectionId) -> f64 {
        self.sections[id.order()].1
    }

    pub fn scroll_height(&self) -> f64 {
        let content: f64 = self.sections.iter().map(|(_, _, h)| h).sum();
        (content + self.footer_height).max(self.viewport.height)
    }

    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height() - self.viewport.height).max(0.0)
    }

    pub fn clamp_scroll(&self, scroll_y: f64) -> f64 {
        if !scroll_y.is_finite() {
            return 0.0;
        }
        scroll_y.clamp(0.0, self.max_scroll())
    }

    /// Page scroll progress in `[0, 1]`.
    pub fn scroll_progress(&self, scroll_y: f64) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        self.clamp_scroll(scroll_y) / max
    }
}

/// Fraction of `target` visible inside `root`, in `[0, 1]`.
pub fn intersection_ratio(target: Rect, root: Rect) -> f64 {
    let area = target.width().abs() * target.height().abs();
    if area <= 0.0 {
        return 0.0;
    }
    let w = (target.x1.min(root.x1) - target.x0.max(root.x0)).max(0.0);
    let h = (target.y1.min(root.y1) - target.y0.max(root.y0)).max(0.0);
    (w * h / area).clamp(0.0, 1.0)
}

/// One observation per section at `scroll_y`, measured against the viewport
/// shrunk vertically by `root_margin`.
pub fn sample_observations(
    layout: &PageLayout,
    scroll_y: f64,
    root_margin: f64,
) -> Vec<VisibilityObservation> {
    let root = layout.viewport().root_box(root_margin);
    layout
        .sections()
        .map(|section| {
            let rect = layout.client_rect(section, scroll_y);
            VisibilityObservation {
                section,
                ratio: intersection_ratio(rect, root),
                rect,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/page/layout.rs"]
mod tests;
