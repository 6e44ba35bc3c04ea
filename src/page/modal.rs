use crate::{animation::ease::Ease, foundation::core::Millis};

pub const MODAL_TRANSITION_MS: u64 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum ModalPhase {
    Closed,
    Opening { since: Millis },
    Open,
    Closing { since: Millis },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseReason {
    Backdrop,
    CloseButton,
    Escape,
}

/// Dialog visuals for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ModalFrame {
    pub backdrop_opacity: f64,
    pub opacity: f64,
    pub scale: f64,
    pub offset_y: f64,
}

impl ModalFrame {
    pub const HIDDEN: Self = Self {
        backdrop_opacity: 0.0,
        opacity: 0.0,
        scale: 0.9,
        offset_y: 20.0,
    };

    pub const SHOWN: Self = Self {
        backdrop_opacity: 1.0,
        opacity: 1.0,
        scale: 1.0,
        offset_y: 0.0,
    };

    fn at(p: f64) -> Self {
        Self {
            backdrop_opacity: p,
            opacity: p,
            scale: 0.9 + 0.1 * p,
            offset_y: 20.0 * (1.0 - p),
        }
    }
}

/// Overlay lifecycle: closed, opening, open, closing, closed.
///
/// Opening and closing only animate; under reduced motion they are skipped.
/// Background scroll stays locked from the moment the dialog starts opening
/// until it has fully closed.
#[derive(Clone, Debug)]
pub struct Modal {
    phase: ModalPhase,
    transition_ms: u64,
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

impl Modal {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            transition_ms: MODAL_TRANSITION_MS,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Open)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.phase, ModalPhase::Closed)
    }

    pub fn locks_scroll(&self) -> bool {
        !self.is_closed()
    }

    /// Returns `true` if the dialog started opening.
    pub fn open(&mut self, now: Millis, reduced_motion: bool) -> bool {
        self.tick(now);
        let next = match self.phase {
            ModalPhase::Closed | ModalPhase::Closing { .. } if reduced_motion => ModalPhase::Open,
            ModalPhase::Closed => ModalPhase::Opening { since: now },
            ModalPhase::Closing { since } => ModalPhase::Opening {
                since: self.reverse(since, now),
            },
            ModalPhase::Opening { .. } | ModalPhase::Open => return false,
        };
        self.transition(next);
        true
    }

    /// Returns `true` if the dialog started closing.
    pub fn close(&mut self, reason: CloseReason, now: Millis, reduced_motion: bool) -> bool {
        self.tick(now);
        let next = match self.phase {
            ModalPhase::Opening { .. } | ModalPhase::Open if reduced_motion => ModalPhase::Closed,
            ModalPhase::Open => ModalPhase::Closing { since: now },
            ModalPhase::Opening { since } => ModalPhase::Closing {
                since: self.reverse(since, now),
            },
            ModalPhase::Closed | ModalPhase::Closing { .. } => return false,
        };
        tracing::debug!(?reason, "modal closing");
        self.transition(next);
        true
    }

    /// Keyboard handler; only Escape is bound.
    pub fn key(&mut self, key: &str, now: Millis, reduced_motion: bool) -> bool {
        key == "Escape" && self.close(CloseReason::Escape, now, reduced_motion)
    }

    pub fn tick(&mut self, now: Millis) {
        let next = match self.phase {
            ModalPhase::Opening { since } if now.since(since) >= self.transition_ms => {
                ModalPhase::Open
            }
            ModalPhase::Closing { since } if now.since(since) >= self.transition_ms => {
                ModalPhase::Closed
            }
            _ => return,
        };
        self.transition(next);
    }

    /// Start time for a reversed transition so progress stays continuous.
    fn reverse(&self, since: Millis, now: Millis) -> Millis {
        let done = now.since(since).min(self.transition_ms);
        Millis(now.0.saturating_sub(self.transition_ms - done))
    }

    fn transition(&mut self, next: ModalPhase) {
        tracing::debug!(from = ?self.phase, to = ?next, "modal phase");
        self.phase = next;
    }

    fn progress(&self, since: Millis, now: Millis) -> f64 {
        if self.transition_ms == 0 {
            return 1.0;
        }
        now.since(since) as f64 / self.transition_ms as f64
    }

    pub fn frame(&self, now: Millis) -> ModalFrame {
        match self.phase {
            ModalPhase::Closed => ModalFrame::HIDDEN,
            ModalPhase::Open => ModalFrame::SHOWN,
            ModalPhase::Opening { since } => {
                ModalFrame::at(Ease::EaseOut.apply(self.progress(since, now)))
            }
            ModalPhase::Closing { since } => {
                ModalFrame::at(1.0 - Ease::EaseIn.apply(self.progress(since, now)))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/modal.rs"]
mod tests;
