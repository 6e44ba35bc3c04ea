use std::collections::HashSet;

use super::*;

fn assert_unique<'a>(ids: impl IntoIterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for id in ids {
        assert!(seen.insert(id), "duplicate id {id}");
    }
}

#[test]
fn ids_are_unique_per_table() {
    assert_unique(projects::PROJECTS.iter().map(|p| p.id));
    assert_unique(skills::SKILLS.iter().map(|s| s.id));
    assert_unique(services::SERVICES.iter().map(|s| s.id));
    assert_unique(experience::EXPERIENCE.iter().map(|e| e.id));
    assert_unique(languages::SPOKEN_LANGUAGES.iter().map(|l| l.id));
    assert_unique(contact::CONTACT_LINKS.iter().map(|c| c.id));
    assert_unique(ticker::TECH_TICKER.iter().map(|t| t.id));
}

#[test]
fn every_category_has_entries() {
    for c in skills::SkillCategory::ALL {
        assert!(skills::skills_in(c).next().is_some(), "{c:?}");
    }
    for c in services::ServiceCategory::ALL {
        assert!(services::services_in(c).next().is_some(), "{c:?}");
    }
    assert_eq!(skills::SKILLS.len(), 27);
    assert_eq!(services::SERVICES.len(), 14);
}

#[test]
fn category_filter_preserves_table_order() {
    let backend: Vec<_> = skills::skills_in(skills::SkillCategory::Backend)
        .map(|s| s.id)
        .collect();
    assert_eq!(
        backend,
        ["nodejs", "express", "graphql", "websockets", "rest"]
    );
}

#[test]
fn ratings_are_in_range() {
    for l in languages::SPOKEN_LANGUAGES {
        assert!((1..=languages::MAX_RATING).contains(&l.rating));
    }
}

#[test]
fn only_mailto_links_stay_in_place() {
    let email = contact::CONTACT_LINKS.iter().find(|c| c.id == "email").unwrap();
    assert!(!email.opens_new_tab());
    let github = contact::CONTACT_LINKS.iter().find(|c| c.id == "github").unwrap();
    assert!(github.opens_new_tab());
}

#[test]
fn lookups_report_unknown_ids() {
    assert_eq!(projects::project("mobile-app").unwrap().key, "mobileApp");
    assert!(projects::project("nope").is_err());
    assert_eq!(skills::skill("redis").unwrap().demo, skills::DemoKind::Redis);
    assert!(skills::skill("cobol").is_err());
}

#[test]
fn project_item_keys_are_scoped() {
    let p = projects::project("ecommerce-platform").unwrap();
    assert_eq!(p.item_key("title"), "projects.items.ecommerce.title");
}
