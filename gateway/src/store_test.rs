use super::*;

fn ana() -> User {
    User {
        id: 1,
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        created_at: None,
    }
}

#[test]
fn save_then_load_round_trips_token_and_user() {
    let store = MemoryStore::new();
    store.save("t-1", &ana());
    assert_eq!(
        store.load(),
        Some(StoredCredential {
            token: "t-1".to_owned(),
            user: Some(ana())
        })
    );
}

#[test]
fn load_falls_back_to_legacy_keys() {
    let store = MemoryStore::new();
    store.set(LEGACY_TOKEN_KEY, "old");
    store.set(LEGACY_USER_KEY, &serde_json::to_string(&ana()).expect("json"));
    let loaded = store.load().expect("credential");
    assert_eq!(loaded.token, "old");
    assert_eq!(loaded.user, Some(ana()));
}

#[test]
fn canonical_key_wins_over_legacy() {
    let store = MemoryStore::new();
    store.set(LEGACY_TOKEN_KEY, "old");
    store.set(TOKEN_KEY, "new");
    assert_eq!(store.load().map(|c| c.token).as_deref(), Some("new"));
}

#[test]
fn save_purges_legacy_keys() {
    let store = MemoryStore::new();
    store.set(LEGACY_TOKEN_KEY, "old");
    store.set(LEGACY_USER_KEY, "{}");
    store.save("t", &ana());
    let keys: Vec<String> = store.snapshot().into_keys().collect();
    assert_eq!(keys, vec![TOKEN_KEY.to_owned(), USER_KEY.to_owned()]);
}

#[test]
fn clear_removes_every_credential_key() {
    let store = MemoryStore::new();
    store.save("t", &ana());
    store.set(LEGACY_TOKEN_KEY, "old");
    store.set("theme", "dark");
    store.clear();
    assert_eq!(store.load(), None);
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn blank_token_is_ignored_and_corrupt_user_dropped() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "   ");
    assert_eq!(store.load(), None);

    store.set(TOKEN_KEY, "t");
    store.set(USER_KEY, "not json");
    assert_eq!(
        store.load(),
        Some(StoredCredential {
            token: "t".to_owned(),
            user: None
        })
    );
}

#[test]
fn references_delegate_to_the_underlying_store() {
    let store = MemoryStore::new();
    let by_ref: &MemoryStore = &store;
    CredentialStore::set(&by_ref, "k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
}
