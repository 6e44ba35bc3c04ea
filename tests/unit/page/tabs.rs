use super::*;

#[test]
fn skills_start_on_frontend_with_first_item() {
    let tabs = skill_tabs();
    assert_eq!(tabs.active_category(), SkillCategory::Frontend);
    assert_eq!(tabs.selected().map(|s| s.id), Some("react"));
    let ids: Vec<_> = tabs.visible().map(|s| s.id).collect();
    assert_eq!(ids, ["react", "typescript", "nextjs", "tailwind", "redux"]);
}

#[test]
fn switching_category_resets_selection() {
    let mut tabs = skill_tabs();
    tabs.select_item("redux").unwrap();
    assert!(tabs.select_category(SkillCategory::Data));
    assert_eq!(tabs.selected().map(|s| s.id), Some("postgresql"));
    assert!(tabs.visible().all(|s| s.category == SkillCategory::Data));
}

#[test]
fn reselecting_active_category_keeps_selection() {
    let mut tabs = skill_tabs();
    tabs.select_item("tailwind").unwrap();
    assert!(!tabs.select_category(SkillCategory::Frontend));
    assert_eq!(tabs.selected().map(|s| s.id), Some("tailwind"));
}

#[test]
fn items_outside_the_active_category_are_rejected() {
    let mut tabs = skill_tabs();
    let err = tabs.select_item("docker").unwrap_err();
    assert!(err.to_string().contains("docker"));
    assert_eq!(tabs.selected().map(|s| s.id), Some("react"));

    assert!(tabs.select_item("nope").is_err());
}

#[test]
fn services_start_on_development() {
    let mut tabs = service_tabs();
    assert_eq!(tabs.active_category(), ServiceCategory::Development);
    assert_eq!(tabs.visible().count(), 6);
    assert_eq!(tabs.selected().map(|s| s.id), Some("web-apps"));

    tabs.select_category(ServiceCategory::Consulting);
    assert_eq!(tabs.selected().map(|s| s.id), Some("tech-consulting"));
    assert_eq!(tabs.select_item("architecture").unwrap().label_key, "architecture");
}
