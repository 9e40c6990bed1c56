use taskline::theme::{
    FileThemeStore, MemoryThemeStore, Theme, ThemeManager, ThemePersistence,
};

#[test]
fn test_defaults_to_light_when_nothing_persisted() {
    let manager = ThemeManager::load(MemoryThemeStore::new());
    assert_eq!(manager.current(), Theme::Light);
}

#[test]
fn test_toggle_persists_new_value() {
    let mut manager = ThemeManager::load(MemoryThemeStore::new());

    assert_eq!(manager.toggle().unwrap(), Theme::Dark);
    assert_eq!(manager.store().value(), Some("dark"));

    assert_eq!(manager.toggle().unwrap(), Theme::Light);
    assert_eq!(manager.store().value(), Some("light"));
}

#[test]
fn test_persisted_dark_applies_at_startup_without_a_toggle() {
    // Simulates a reload after the user toggled to dark last session
    let manager = ThemeManager::load(MemoryThemeStore::with_value("dark"));
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn test_unrecognized_persisted_value_falls_back_to_light() {
    let manager = ThemeManager::load(MemoryThemeStore::with_value("solarized"));
    assert_eq!(manager.current(), Theme::Light);
}

#[test]
fn test_theme_round_trips_through_its_string_form() {
    assert_eq!(Theme::from_persisted(Theme::Dark.as_str()), Theme::Dark);
    assert_eq!(Theme::from_persisted(Theme::Light.as_str()), Theme::Light);
}

#[test]
fn test_file_store_round_trip() {
    let dir = std::env::temp_dir().join("taskline_test_theme");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("theme.toml");

    let mut store = FileThemeStore::new(path.clone());
    assert_eq!(store.load(), None);

    store.save("dark").unwrap();
    assert_eq!(store.load(), Some("dark".to_string()));

    // A fresh store reading the same file sees the persisted value
    let reopened = FileThemeStore::new(path);
    assert_eq!(reopened.load(), Some("dark".to_string()));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_file_store_ignores_garbage_content() {
    let dir = std::env::temp_dir().join("taskline_test_theme_garbage");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("theme.toml");
    std::fs::write(&path, "not valid toml [[[").unwrap();

    let store = FileThemeStore::new(path);
    assert_eq!(store.load(), None);
    // Manager still comes up in the default theme
    let manager = ThemeManager::load(store);
    assert_eq!(manager.current(), Theme::Light);

    let _ = std::fs::remove_dir_all(&dir);
}
