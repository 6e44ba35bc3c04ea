use crate::{
    animation::variants::{ItemFrame, ResolvedReveal},
    foundation::core::{Millis, Rect, Viewport},
    page::{layout::intersection_ratio, section::SectionId},
};

/// Root inset for the entrance trigger: a section counts as in view once it is
/// 100px inside the viewport on any side.
pub const REVEAL_MARGIN_PX: f64 = 100.0;

/// One-shot entrance animation of a section.
///
/// The hero plays on mount; every other section plays the first time it
/// enters the shrunk viewport and never re-triggers.
#[derive(Clone, Debug)]
pub struct SectionReveal {
    section: SectionId,
    triggered_at: Option<Millis>,
}

impl SectionReveal {
    pub fn new(section: SectionId, mounted_at: Millis) -> Self {
        let triggered_at = (section == SectionId::Hero).then_some(mounted_at);
        Self {
            section,
            triggered_at,
        }
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn triggered_at(&self) -> Option<Millis> {
        self.triggered_at
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    /// Check `rect` (client coordinates) against the viewport. Returns `true`
    /// only on the call that triggers the reveal.
    pub fn observe(&mut self, rect: Rect, viewport: Viewport, now: Millis) -> bool {
        if self.triggered_at.is_some() {
            return false;
        }
        let root = Rect::new(
            REVEAL_MARGIN_PX,
            REVEAL_MARGIN_PX,
            viewport.width - REVEAL_MARGIN_PX,
            viewport.height - REVEAL_MARGIN_PX,
        );
        if root.width() <= 0.0 || root.height() <= 0.0 {
            return false;
        }
        if intersection_ratio(rect, root) <= 0.0 {
            return false;
        }
        tracing::debug!(section = %self.section, at = now.0, "section revealed");
        self.triggered_at = Some(now);
        true
    }

    fn timing(&self, reduced_motion: bool) -> ResolvedReveal {
        self.section.reveal_preset().resolve(reduced_motion)
    }

    fn elapsed(&self, now: Millis) -> Option<u64> {
        self.triggered_at.map(|t| now.since(t))
    }

    pub fn container_opacity(&self, now: Millis, reduced_motion: bool) -> f64 {
        self.timing(reduced_motion)
            .container_opacity(self.elapsed(now))
    }

    /// Frame of child `index` at `now`.
    pub fn item(&self, index: usize, now: Millis, reduced_motion: bool) -> ItemFrame {
        self.timing(reduced_motion)
            .sample(index, self.elapsed(now))
    }

    /// `true` once every one of `children` has settled.
    pub fn is_settled(&self, children: usize, now: Millis, reduced_motion: bool) -> bool {
        let timing = self.timing(reduced_motion);
        if timing.instant {
            return true;
        }
        self.elapsed(now)
            .is_some_and(|ms| ms >= timing.total_ms(children))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/reveal.rs"]
mod tests;
