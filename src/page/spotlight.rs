use crate::{
    animation::spring::{Spring, SpringValue},
    foundation::core::{Rect, Viewport},
    page::{
        section::SectionId,
        visibility::{VisibilityObservation, dominant},
    },
};

pub const SPOTLIGHT_THRESHOLD: f64 = 0.2;
pub const X_RANGE: (f64, f64) = (20.0, 80.0);
pub const Y_RANGE: (f64, f64) = (10.0, 90.0);
/// Layer opacity when the spotlight is pinned for reduced motion.
pub const PINNED_OPACITY: f64 = 0.2;

/// Focal point of the spotlight in percent: `x` of the viewport width, `y` of
/// the document scroll height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpotlightPosition {
    pub x: f64,
    pub y: f64,
}

impl SpotlightPosition {
    pub const CENTER: Self = Self { x: 50.0, y: 50.0 };

    /// Centre of `rect` (a client rect at `scroll_y`), kept away from the
    /// edges. A NaN coordinate lands mid-range.
    pub fn focal(rect: Rect, viewport: Viewport, scroll_y: f64, scroll_height: f64) -> Self {
        let x = (rect.x0 + rect.width() / 2.0) / viewport.width * 100.0;
        let y = (rect.y0 + rect.height() / 2.0 + scroll_y) / scroll_height * 100.0;
        Self {
            x: clamp_or_center(x, X_RANGE),
            y: clamp_or_center(y, Y_RANGE),
        }
    }

    pub fn in_bounds(&self) -> bool {
        (X_RANGE.0..=X_RANGE.1).contains(&self.x) && (Y_RANGE.0..=Y_RANGE.1).contains(&self.y)
    }
}

fn clamp_or_center(v: f64, (lo, hi): (f64, f64)) -> f64 {
    if v.is_nan() {
        return (lo + hi) / 2.0;
    }
    v.clamp(lo, hi)
}

/// What the spotlight layer draws this frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SpotlightFrame {
    pub position: SpotlightPosition,
    pub opacity: f64,
    pub pinned: bool,
}

/// Radial highlight that follows the most visible section.
#[derive(Clone, Debug)]
pub struct Spotlight {
    section: SectionId,
    target: SpotlightPosition,
    x: SpringValue,
    y: SpringValue,
}

impl Spotlight {
    pub fn new(spring: Spring) -> Self {
        let c = SpotlightPosition::CENTER;
        Self {
            section: SectionId::Hero,
            target: c,
            x: SpringValue::new(spring, c.x),
            y: SpringValue::new(spring, c.y),
        }
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn target(&self) -> SpotlightPosition {
        self.target
    }

    /// Feed one observer batch. Batches whose best ratio is at or below the
    /// threshold are ignored.
    pub fn observe(
        &mut self,
        entries: &[VisibilityObservation],
        viewport: Viewport,
        scroll_y: f64,
        scroll_height: f64,
    ) -> Option<SpotlightPosition> {
        let best = dominant(entries, SPOTLIGHT_THRESHOLD)?;
        self.section = best.section;
        self.target = SpotlightPosition::focal(best.rect, viewport, scroll_y, scroll_height);
        Some(self.target)
    }

    /// Advance the springs. Under reduced motion they are left untouched.
    pub fn step(&mut self, dt_secs: f64, reduced_motion: bool) {
        if reduced_motion {
            return;
        }
        self.x.set_target(self.target.x);
        self.y.set_target(self.target.y);
        self.x.step(dt_secs);
        self.y.step(dt_secs);
    }

    pub fn position(&self) -> SpotlightPosition {
        SpotlightPosition {
            x: self.x.value(),
            y: self.y.value(),
        }
    }

    pub fn frame(&self, reduced_motion: bool) -> SpotlightFrame {
        if reduced_motion {
            return SpotlightFrame {
                position: SpotlightPosition::CENTER,
                opacity: PINNED_OPACITY,
                pinned: true,
            };
        }
        SpotlightFrame {
            position: self.position(),
            opacity: 1.0,
            pinned: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/spotlight.rs"]
mod tests;
