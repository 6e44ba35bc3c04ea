use super::*;
use crate::foundation::core::Viewport;

fn obs(section: SectionId, ratio: f64) -> VisibilityObservation {
    VisibilityObservation {
        section,
        ratio,
        rect: Rect::ZERO,
    }
}

#[test]
fn dominant_picks_highest_ratio_above_threshold() {
    let entries = [
        obs(SectionId::Hero, 0.2),
        obs(SectionId::About, 0.6),
        obs(SectionId::Skills, 0.4),
    ];
    assert_eq!(dominant(&entries, 0.3).map(|e| e.section), Some(SectionId::About));
    assert!(dominant(&entries, 0.6).is_none());
    assert!(dominant(&[], 0.0).is_none());
}

#[test]
fn dominant_ties_go_to_the_earlier_entry() {
    let entries = [obs(SectionId::Skills, 0.5), obs(SectionId::Services, 0.5)];
    assert_eq!(dominant(&entries, 0.3).map(|e| e.section), Some(SectionId::Skills));
}

#[test]
fn observer_starts_on_hero() {
    let observer = ActiveSectionObserver::new();
    assert_eq!(observer.active(), SectionId::Hero);
    assert!(observer.is_connected());
}

#[test]
fn weak_batches_keep_the_previous_section() {
    let mut observer = ActiveSectionObserver::new();
    assert_eq!(observer.observe(&[obs(SectionId::About, 0.7)]), Some(SectionId::About));
    // Nothing clears 0.3: hysteresis holds About.
    assert_eq!(
        observer.observe(&[obs(SectionId::Skills, 0.3), obs(SectionId::About, 0.1)]),
        None
    );
    assert_eq!(observer.active(), SectionId::About);
}

#[test]
fn same_section_reports_no_change() {
    let mut observer = ActiveSectionObserver::new();
    assert_eq!(observer.observe(&[obs(SectionId::Hero, 0.9)]), None);
}

#[test]
fn disconnected_observer_ignores_batches() {
    let mut observer = ActiveSectionObserver::new();
    observer.disconnect();
    assert_eq!(observer.observe(&[obs(SectionId::Contact, 1.0)]), None);
    assert_eq!(observer.active(), SectionId::Hero);
}

#[test]
fn thresholds_match_observer_options() {
    assert_eq!(ObserverConfig::background().thresholds, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(ObserverConfig::background().root_margin, 0.1);
    let spot = ObserverConfig::spotlight();
    assert_eq!(spot.thresholds.len(), 11);
    assert_eq!(spot.root_margin, 0.0);
}

#[test]
fn sampler_delivers_only_threshold_crossings() {
    let layout = PageLayout::standard(Viewport::default());
    let mut sampler = IntersectionSampler::new(ObserverConfig::background());

    let first = sampler.sample(&layout, 0.0);
    assert_eq!(first.len(), SectionId::ALL.len());
    assert!(sampler.sample(&layout, 0.0).is_empty());
    // 10px keeps every section in its bucket.
    assert!(sampler.sample(&layout, 10.0).is_empty());

    let moved = sampler.sample(&layout, 450.0);
    let sections: Vec<_> = moved.iter().map(|o| o.section).collect();
    assert_eq!(sections, vec![SectionId::Hero, SectionId::About]);
    // Both at 0.4; the earlier one wins the tie.
    assert_eq!(dominant(&moved, ACTIVE_THRESHOLD).map(|o| o.section), Some(SectionId::Hero));

    sampler.reset();
    assert_eq!(sampler.sample(&layout, 450.0).len(), SectionId::ALL.len());
}
