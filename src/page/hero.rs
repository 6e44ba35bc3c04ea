use crate::{
    animation::spring::{Spring, SpringValue},
    foundation::core::{Point, Rect, Vec2},
};

/// Largest background shift in px, reached at the hero's edges.
pub const PARALLAX_RANGE_PX: f64 = 20.0;

/// Pointer parallax of the hero background.
///
/// The pointer is normalised to `[-0.5, 0.5]` over the hero rect and the
/// smoothed value is mapped linearly onto `[-20, 20]` px.
#[derive(Clone, Debug)]
pub struct HeroParallax {
    x: SpringValue,
    y: SpringValue,
}

impl Default for HeroParallax {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroParallax {
    pub fn new() -> Self {
        Self {
            x: SpringValue::new(Spring::PARALLAX, 0.0),
            y: SpringValue::new(Spring::PARALLAX, 0.0),
        }
    }

    /// Pointer moved to `pointer` (client coordinates). Ignored under reduced
    /// motion.
    pub fn pointer_moved(&mut self, pointer: Point, hero: Rect, reduced_motion: bool) {
        if reduced_motion || hero.width() <= 0.0 || hero.height() <= 0.0 {
            return;
        }
        let nx = (pointer.x - hero.x0) / hero.width() - 0.5;
        let ny = (pointer.y - hero.y0) / hero.height() - 0.5;
        if !(nx.is_finite() && ny.is_finite()) {
            return;
        }
        self.x.set_target(nx);
        self.y.set_target(ny);
    }

    pub fn step(&mut self, dt_secs: f64) {
        self.x.step(dt_secs);
        self.y.step(dt_secs);
    }

    /// Background translation this frame; zero under reduced motion.
    pub fn offset(&self, reduced_motion: bool) -> Vec2 {
        if reduced_motion {
            return Vec2::ZERO;
        }
        let map = |v: f64| (v.clamp(-0.5, 0.5) * 2.0) * PARALLAX_RANGE_PX;
        Vec2::new(map(self.x.value()), map(self.y.value()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/hero.rs"]
mod tests;
