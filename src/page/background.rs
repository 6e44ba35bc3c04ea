use crate::{
    animation::ease::Ease,
    foundation::core::Millis,
    page::section::SectionId,
};

/// Decorative background generators. Several sections share one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundVariant {
    Aurora,
    Grid,
    Noise,
    Path,
}

impl BackgroundVariant {
    pub const ALL: [Self; 4] = [Self::Aurora, Self::Grid, Self::Noise, Self::Path];

    pub fn for_section(section: SectionId) -> Self {
        match section {
            SectionId::Hero | SectionId::About | SectionId::Contact => Self::Aurora,
            SectionId::Skills | SectionId::Services => Self::Grid,
            SectionId::Projects => Self::Noise,
            SectionId::Experience | SectionId::Languages => Self::Path,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aurora => "aurora",
            Self::Grid => "grid",
            Self::Noise => "noise",
            Self::Path => "path",
        }
    }
}

pub const CROSSFADE_MS: u64 = 800;

#[derive(Clone, Copy, Debug, PartialEq)]
enum FadePhase {
    Idle,
    /// Outgoing layer fading from `from` to zero.
    Exiting { start: Millis, from: f64 },
    Entering { start: Millis },
}

/// Current background layer as it should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BackgroundLayer {
    pub variant: BackgroundVariant,
    pub opacity: f64,
}

/// Swaps the background when the active section changes: the shown layer
/// fades out, then the next one fades in. Only one layer is ever mounted.
/// A zero duration swaps instantly.
#[derive(Clone, Debug)]
pub struct BackgroundSelector {
    shown: BackgroundVariant,
    pending: Option<BackgroundVariant>,
    phase: FadePhase,
    duration_ms: u64,
    ease: Ease,
}

impl BackgroundSelector {
    pub fn new(initial: BackgroundVariant, duration_ms: u64) -> Self {
        Self {
            shown: initial,
            pending: None,
            phase: FadePhase::Idle,
            duration_ms,
            ease: Ease::EaseInOut,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Reduced motion sets the duration to zero.
    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    pub fn shown(&self) -> BackgroundVariant {
        self.shown
    }

    /// The variant the selector is heading to.
    pub fn target(&self) -> BackgroundVariant {
        self.pending.unwrap_or(self.shown)
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    /// Route to the variant for `section`. Returns `true` if the target changed.
    pub fn select(&mut self, section: SectionId, now: Millis) -> bool {
        self.tick(now);
        let next = BackgroundVariant::for_section(section);
        if next == self.target() {
            return false;
        }
        tracing::debug!(
            from = self.target().as_str(),
            to = next.as_str(),
            %section,
            "background swap"
        );

        if self.duration_ms == 0 {
            self.shown = next;
            self.pending = None;
            self.phase = FadePhase::Idle;
            return true;
        }

        let from = self.opacity(now);
        self.pending = Some(next);
        self.phase = FadePhase::Exiting { start: now, from };
        true
    }

    pub fn tick(&mut self, now: Millis) {
        loop {
            match self.phase {
                FadePhase::Idle => return,
                FadePhase::Exiting { start, from } => {
                    let end = start.add_ms(self.exit_ms(from));
                    if now < end {
                        return;
                    }
                    if let Some(next) = self.pending.take() {
                        self.shown = next;
                    }
                    self.phase = FadePhase::Entering { start: end };
                }
                FadePhase::Entering { start } => {
                    if now.since(start) < self.duration_ms {
                        return;
                    }
                    self.phase = FadePhase::Idle;
                }
            }
        }
    }

    fn exit_ms(&self, from: f64) -> u64 {
        (self.duration_ms as f64 * from.clamp(0.0, 1.0)).round() as u64
    }

    /// Opacity of the shown layer at `now`, without advancing the phase.
    pub fn opacity(&self, now: Millis) -> f64 {
        match self.phase {
            FadePhase::Idle => 1.0,
            FadePhase::Exiting { start, from } => {
                let span = self.exit_ms(from);
                if span == 0 {
                    return 0.0;
                }
                let t = now.since(start) as f64 / span as f64;
                from * (1.0 - self.ease.apply(t))
            }
            FadePhase::Entering { start } => {
                if self.duration_ms == 0 {
                    return 1.0;
                }
                self.ease
                    .apply(now.since(start) as f64 / self.duration_ms as f64)
            }
        }
    }

    pub fn layer(&self, now: Millis) -> BackgroundLayer {
        BackgroundLayer {
            variant: self.shown,
            opacity: self.opacity(now),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/background.rs"]
mod tests;
