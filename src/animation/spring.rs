use crate::foundation::error::{FolioError, FolioResult};

const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;
/// Gaps longer than this land on the target instead of being integrated.
const MAX_STEP_SECS: f64 = 10.0;

/// Second-order spring constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    /// Spotlight follow spring.
    pub const SPOTLIGHT: Self = Self::new(80.0, 25.0, 1.0);
    /// Hero pointer parallax spring.
    pub const PARALLAX: Self = Self::new(100.0, 30.0, 1.0);
    /// Scroll-progress smoothing for the decorative path layer.
    pub const SCROLL_PROGRESS: Self = Self::new(50.0, 20.0, 1.0);

    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        for (name, v) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(FolioError::validation(format!(
                    "spring {name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// `1.0` is critical damping; larger values approach without overshoot.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::SPOTLIGHT
    }
}

/// A scalar that follows its target through a [`Spring`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringValue {
    spring: Spring,
    value: f64,
    velocity: f64,
    target: f64,
}

impl SpringValue {
    pub fn new(spring: Spring, initial: f64) -> Self {
        Self {
            spring,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` and stop, bypassing the spring.
    pub fn snap(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance the simulation by `dt_secs` and return the new value. A step
    /// longer than ten seconds settles on the target outright.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        if !(dt_secs.is_finite() && dt_secs > 0.0) || self.is_settled() {
            if self.is_settled() {
                self.value = self.target;
                self.velocity = 0.0;
            }
            return self.value;
        }

        if dt_secs > MAX_STEP_SECS {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let Spring {
            stiffness,
            damping,
            mass,
        } = self.spring;
        let substeps = (dt_secs / MAX_SUBSTEP_SECS).ceil().max(1.0) as u32;
        let h = dt_secs / f64::from(substeps);
        for _ in 0..substeps {
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
