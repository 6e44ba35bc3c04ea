use super::*;

fn tr() -> Translations {
    Translations::embedded().unwrap()
}

#[test]
fn resolves_nested_keys() {
    let t = tr();
    assert_eq!(t.t(Language::En, "about.title"), "About me");
    assert_eq!(
        t.t(Language::En, "projects.items.ecommerce.title"),
        "E-commerce platform"
    );
    assert_eq!(t.t(Language::Ru, "nav.projects"), "Проекты");
}

#[test]
fn falls_back_to_english_then_to_the_key() {
    let t = tr();
    // Skill descriptions are only shipped in English.
    assert_eq!(t.t(Language::Ru, "skills.items.redis.name"), "Redis");
    assert_eq!(t.t(Language::Am, "nope.missing"), "nope.missing");
}

#[test]
fn interpolates_placeholders() {
    let t = tr();
    let s = t.t_with(
        Language::En,
        "footer.copyright",
        &[("year", "2026"), ("author", "Alex")],
    );
    assert_eq!(s, "© 2026 Alex");
}

#[test]
fn reads_object_arrays() {
    let t = tr();
    let cards = t.list(Language::En, "about.cards");
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["title"], "Clean code");
    assert_eq!(t.t(Language::En, "about.cards.1.title"), "Performance");
    assert!(t.list(Language::En, "about.title").is_empty());
}

#[test]
fn every_content_key_exists_in_english() {
    use crate::content::{projects::PROJECTS, services::SERVICES, skills::SKILLS};
    let t = tr();
    for s in SKILLS {
        let key = format!("skills.items.{}.name", s.label_key);
        assert_ne!(t.t(Language::En, &key), key);
    }
    for s in SERVICES {
        let key = format!("services.items.{}.name", s.label_key);
        assert_ne!(t.t(Language::En, &key), key);
    }
    for p in PROJECTS {
        for leaf in ["title", "desc", "role", "problem", "solution", "result"] {
            let key = p.item_key(leaf);
            assert_ne!(t.t(Language::En, &key), key);
        }
        for owned in p.case_study.owned_keys {
            let key = p.item_key(owned);
            assert_ne!(t.t(Language::En, &key), key);
        }
    }
}

#[test]
fn english_is_complete_and_others_report_gaps() {
    let t = tr();
    assert!(t.missing_keys(Language::En).is_empty());
    let ru = t.missing_keys(Language::Ru);
    assert!(ru.iter().any(|k| k == "skills.items.react.desc"));
    assert!(!ru.iter().any(|k| k == "nav.about"));
}

#[test]
fn rejects_bundles_without_english() {
    let err = Translations::from_sources([(Language::Ru, "{}")]).unwrap_err();
    assert!(matches!(err, FolioError::Validation(_)));
    let err = Translations::from_sources([(Language::En, "[1]")]).unwrap_err();
    assert!(matches!(err, FolioError::Validation(_)));
}
