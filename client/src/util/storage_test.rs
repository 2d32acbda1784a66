use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get_item("token"), None);
}

#[test]
fn memory_storage_set_overwrites_previous_value() {
    let storage = MemoryStorage::new();
    storage.set_item("role", "Admin");
    storage.set_item("role", "Base Commander");
    assert_eq!(storage.get_item("role").as_deref(), Some("Base Commander"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove_item("token");
    storage.set_item("token", "abc");
    storage.remove_item("token");
    storage.remove_item("token");
    assert!(storage.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn default_backend_is_empty_outside_the_browser() {
    let backend = default_backend();
    assert_eq!(backend.get_item("token"), None);
    assert_eq!(backend.get_item("role"), None);
}
