use std::collections::BTreeMap;

use crate::{
    foundation::core::Rect,
    page::{
        layout::{PageLayout, sample_observations},
        section::SectionId,
    },
};

/// How visible one section is at a sampling tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct VisibilityObservation {
    pub section: SectionId,
    /// In `[0, 1]`.
    pub ratio: f64,
    /// Client rect of the section at sampling time.
    pub rect: Rect,
}

/// Intersection observer options.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverConfig {
    pub thresholds: Vec<f64>,
    /// Root box inset, as a fraction of the viewport height, top and bottom.
    pub root_margin: f64,
}

impl ObserverConfig {
    /// Quarter steps with a 10% inset: a section has to sit near the middle
    /// of the screen to count.
    pub fn background() -> Self {
        Self {
            thresholds: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            root_margin: 0.1,
        }
    }

    /// Tenth steps against the full viewport.
    pub fn spotlight() -> Self {
        Self {
            thresholds: (0..=10).map(|i| f64::from(i) / 10.0).collect(),
            root_margin: 0.0,
        }
    }

    fn bucket(&self, ratio: f64) -> usize {
        self.thresholds
            .iter()
            .filter(|&&t| ratio > 0.0 && ratio >= t)
            .count()
    }
}

/// Emulates the platform intersection observer: only sections whose ratio
/// crossed a threshold since the previous sample are delivered, and the first
/// sample delivers every section.
#[derive(Clone, Debug)]
pub struct IntersectionSampler {
    config: ObserverConfig,
    buckets: BTreeMap<SectionId, usize>,
}

impl IntersectionSampler {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            buckets: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    pub fn sample(&mut self, layout: &PageLayout, scroll_y: f64) -> Vec<VisibilityObservation> {
        sample_observations(layout, scroll_y, self.config.root_margin)
            .into_iter()
            .filter(|obs| {
                let bucket = self.config.bucket(obs.ratio);
                self.buckets.insert(obs.section, bucket) != Some(bucket)
            })
            .collect()
    }

    /// Forget previous buckets, as a disconnect/observe cycle would.
    pub fn reset(&mut self) {
        self.buckets.clear();
    }
}

/// Entry with the highest ratio, if that ratio is strictly above `threshold`.
/// Ties go to the earlier entry.
pub fn dominant(
    entries: &[VisibilityObservation],
    threshold: f64,
) -> Option<&VisibilityObservation> {
    let mut best: Option<&VisibilityObservation> = None;
    for entry in entries {
        if best.is_none_or(|b| entry.ratio > b.ratio) {
            best = Some(entry);
        }
    }
    best.filter(|b| b.ratio > threshold)
}

pub const ACTIVE_THRESHOLD: f64 = 0.3;

/// Tracks the most visible section with hysteresis: a batch whose best ratio
/// does not clear the threshold leaves the previous section active.
#[derive(Clone, Debug)]
pub struct ActiveSectionObserver {
    active: SectionId,
    threshold: f64,
    connected: bool,
}

impl Default for ActiveSectionObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveSectionObserver {
    pub fn new() -> Self {
        Self {
            active: SectionId::Hero,
            threshold: ACTIVE_THRESHOLD,
            connected: true,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Feed one observer callback batch. Returns the new section when the
    /// active section changed.
    pub fn observe(&mut self, entries: &[VisibilityObservation]) -> Option<SectionId> {
        if !self.connected {
            return None;
        }
        let next = dominant(entries, self.threshold)?.section;
        if next == self.active {
            return None;
        }
        tracing::debug!(from = %self.active, to = %next, "active section changed");
        self.active = next;
        Some(next)
    }

    /// Stop reacting to observations.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/visibility.rs"]
mod tests;
