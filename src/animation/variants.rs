use crate::animation::ease::Ease;

/// Staggered entrance animation for a section: the container fades in and
/// each child slides up from `offset_y` while fading in, one after another.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealPreset {
    pub offset_y: f64,
    pub duration_ms: u64,
    pub stagger_ms: u64,
    pub delay_children_ms: u64,
    pub ease: Ease,
}

impl RevealPreset {
    pub const HERO: Self = Self {
        offset_y: 30.0,
        duration_ms: 600,
        stagger_ms: 150,
        delay_children_ms: 200,
        ease: Ease::EaseOut,
    };

    pub const ABOUT: Self = Self {
        offset_y: 40.0,
        duration_ms: 600,
        stagger_ms: 150,
        delay_children_ms: 0,
        ease: Ease::EaseOut,
    };

    /// Skills lab and services: many small tiles, short stagger.
    pub const TABBED: Self = Self {
        offset_y: 20.0,
        duration_ms: 400,
        stagger_ms: 50,
        delay_children_ms: 0,
        ease: Ease::EaseOut,
    };

    pub const LIST: Self = Self {
        offset_y: 20.0,
        duration_ms: 500,
        stagger_ms: 100,
        delay_children_ms: 0,
        ease: Ease::EaseOut,
    };

    pub fn resolve(self, reduced_motion: bool) -> ResolvedReveal {
        if reduced_motion {
            return ResolvedReveal {
                offset_y: 0.0,
                duration_ms: 0,
                stagger_ms: 0,
                delay_children_ms: 0,
                ease: self.ease,
                instant: true,
            };
        }
        ResolvedReveal {
            offset_y: self.offset_y,
            duration_ms: self.duration_ms,
            stagger_ms: self.stagger_ms,
            delay_children_ms: self.delay_children_ms,
            ease: self.ease,
            instant: false,
        }
    }
}

/// Visual state of one animated element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ItemFrame {
    pub opacity: f64,
    pub offset_y: f64,
}

impl ItemFrame {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        *self == Self::VISIBLE
    }

    /// Inline CSS for this frame; empty when the element is at rest.
    pub fn css(&self) -> String {
        if self.is_visible() {
            return String::new();
        }
        format!(
            "opacity:{:.3};transform:translateY({:.1}px)",
            self.opacity, self.offset_y
        )
    }
}

/// A [`RevealPreset`] with the reduced-motion decision applied.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedReveal {
    pub offset_y: f64,
    pub duration_ms: u64,
    pub stagger_ms: u64,
    pub delay_children_ms: u64,
    pub ease: Ease,
    pub instant: bool,
}

impl ResolvedReveal {
    pub fn hidden(&self) -> ItemFrame {
        if self.instant {
            return ItemFrame::VISIBLE;
        }
        ItemFrame {
            opacity: 0.0,
            offset_y: self.offset_y,
        }
    }

    pub fn child_delay_ms(&self, index: usize) -> u64 {
        self.delay_children_ms
            .saturating_add(self.stagger_ms.saturating_mul(index as u64))
    }

    /// Time from trigger until the last of `children` has settled.
    pub fn total_ms(&self, children: usize) -> u64 {
        if children == 0 {
            return self.duration_ms;
        }
        self.child_delay_ms(children - 1)
            .saturating_add(self.duration_ms)
    }

    pub fn container_opacity(&self, elapsed: Option<u64>) -> f64 {
        if self.instant {
            return 1.0;
        }
        match elapsed {
            None => 0.0,
            Some(_) if self.duration_ms == 0 => 1.0,
            Some(ms) => Ease::Linear.apply(ms as f64 / self.duration_ms as f64),
        }
    }

    /// Frame of child `index`, `elapsed` ms after the section entered view
    /// (`None` while it has not).
    pub fn sample(&self, index: usize, elapsed: Option<u64>) -> ItemFrame {
        let Some(elapsed) = elapsed else {
            return self.hidden();
        };
        if self.instant {
            return ItemFrame::VISIBLE;
        }

        let local = elapsed.saturating_sub(self.child_delay_ms(index));
        if elapsed < self.child_delay_ms(index) {
            return self.hidden();
        }
        let t = if self.duration_ms == 0 {
            1.0
        } else {
            local as f64 / self.duration_ms as f64
        };
        let p = self.ease.apply(t);
        ItemFrame {
            opacity: p,
            offset_y: self.offset_y * (1.0 - p),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/variants.rs"]
mod tests;
