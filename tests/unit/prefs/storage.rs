use super::*;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> FolioResult<Option<String>> {
        Err(FolioError::storage("unavailable"))
    }

    fn set(&mut self, _key: &str, _value: &str) -> FolioResult<()> {
        Err(FolioError::storage("quota exceeded"))
    }
}

#[test]
fn memory_store_round_trips() {
    let mut s = MemoryStore::new();
    assert_eq!(s.get("theme-mode").unwrap(), None);
    s.set("theme-mode", "light").unwrap();
    assert_eq!(s.get("theme-mode").unwrap().as_deref(), Some("light"));
}

#[test]
fn failures_are_swallowed() {
    let mut s = BrokenStore;
    assert_eq!(read_best_effort(&s, "language"), None);
    write_best_effort(&mut s, "language", "ru");
}

#[test]
fn json_file_store_persists_across_opens() {
    let dir = std::env::temp_dir().join(format!("folio-store-{}", std::process::id()));
    let path = dir.join("prefs.json");
    let _ = std::fs::remove_file(&path);

    let mut s = JsonFileStore::open(&path).unwrap();
    assert_eq!(s.get("language").unwrap(), None);
    s.set("language", "am").unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("language").unwrap().as_deref(), Some("am"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_json_file_is_a_storage_error() {
    let dir = std::env::temp_dir().join(format!("folio-store-bad-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("prefs.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(
        JsonFileStore::open(&path),
        Err(FolioError::Storage(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}
