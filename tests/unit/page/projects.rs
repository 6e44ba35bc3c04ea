use super::*;

#[test]
fn opening_selects_the_project() {
    let mut panel = ProjectsPanel::new();
    assert!(panel.selected().is_none());
    panel.open("analytics-dashboard", Millis::ZERO, false).unwrap();
    assert_eq!(panel.selected().map(|p| p.id), Some("analytics-dashboard"));
    assert!(panel.locks_scroll());
}

#[test]
fn unknown_project_is_an_error() {
    let mut panel = ProjectsPanel::new();
    assert!(panel.open("missing", Millis::ZERO, false).is_err());
    assert!(panel.selected().is_none());
    assert!(panel.modal().is_closed());
}

#[test]
fn content_stays_until_close_animation_ends() {
    let mut panel = ProjectsPanel::new();
    panel.open("mobile-app", Millis::ZERO, false).unwrap();
    panel.tick(Millis(300));
    assert!(panel.close(CloseReason::Backdrop, Millis(500), false));
    assert!(panel.selected().is_some());
    panel.tick(Millis(800));
    assert!(panel.selected().is_none());
    assert!(!panel.locks_scroll());
}

#[test]
fn escape_releases_immediately_under_reduced_motion() {
    let mut panel = ProjectsPanel::new();
    panel.open("ecommerce-platform", Millis::ZERO, true).unwrap();
    assert!(panel.key("Escape", Millis(1), true));
    assert!(panel.selected().is_none());
}

#[test]
fn opening_another_project_swaps_content() {
    let mut panel = ProjectsPanel::new();
    panel.open("mobile-app", Millis::ZERO, true).unwrap();
    panel.open("ecommerce-platform", Millis(10), true).unwrap();
    assert_eq!(panel.selected().map(|p| p.id), Some("ecommerce-platform"));
    assert!(panel.modal().is_open());
}
