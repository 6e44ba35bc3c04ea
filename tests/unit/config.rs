use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = SiteConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.origin(), "https://example.com");
    assert_eq!(cfg.layout().unwrap().max_scroll(), 7040.0);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = SiteConfig::from_json_str(
        r#"{ "base_url": "https://me.dev/", "author": "Ana", "default_language": "ru" }"#,
    )
    .unwrap();
    assert_eq!(cfg.origin(), "https://me.dev");
    assert_eq!(cfg.author, "Ana");
    assert_eq!(cfg.default_language, Language::Ru);
    assert_eq!(cfg.crossfade_ms, CROSSFADE_MS);
    assert!(cfg.storage_path.is_none());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SiteConfig::from_json_str(r#"{ "theme": "dark" }"#).unwrap_err();
    assert!(matches!(err, FolioError::Serde(_)), "{err}");
}

#[test]
fn invalid_values_are_rejected() {
    let cases = [
        (r#"{ "base_url": "" }"#, "base_url"),
        (r#"{ "base_url": "ftp://files.example.com" }"#, "http"),
        (r#"{ "author": "  " }"#, "author"),
        (r#"{ "viewport": { "width": 0, "height": 900 } }"#, "viewport"),
        (r#"{ "section_heights": { "skills": -5 } }"#, "skills"),
        (r#"{ "footer_height": -1 }"#, "footer"),
        (
            r#"{ "spotlight": { "stiffness": 0, "damping": 25, "mass": 1 } }"#,
            "stiffness",
        ),
    ];
    for (json, needle) in cases {
        let err = SiteConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains(needle), "{json}: {err}");
    }
}

#[test]
fn section_heights_shape_the_layout() {
    let cfg = SiteConfig::from_json_str(r#"{ "section_heights": { "hero": 1000 } }"#).unwrap();
    let layout = cfg.layout().unwrap();
    assert_eq!(layout.offset_top(SectionId::About), 1000.0);
}

#[test]
fn load_reads_a_file() {
    let dir = std::env::temp_dir().join(format!("folio-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("site.json");
    std::fs::write(&path, r#"{ "author": "File Author", "year": 2030 }"#).unwrap();

    let cfg = SiteConfig::load(&path).unwrap();
    assert_eq!(cfg.author, "File Author");
    assert_eq!(cfg.year, 2030);

    let missing = SiteConfig::load(&dir.join("missing.json")).unwrap_err();
    assert!(missing.to_string().contains("missing.json"));
    std::fs::remove_dir_all(&dir).ok();
}
