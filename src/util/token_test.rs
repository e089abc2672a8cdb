use super::*;

// =============================================================
// encode_credentials
// =============================================================

#[test]
fn encode_known_pair() {
    // base64("a:b")
    assert_eq!(encode_credentials("a", "b"), "YTpi");
}

#[test]
fn encode_is_deterministic() {
    assert_eq!(
        encode_credentials("user", "secret"),
        encode_credentials("user", "secret")
    );
}

#[test]
fn encode_round_trips_through_decode() {
    let pairs = [("alice", "hunter2"), ("b", ""), ("", "p"), ("log:in", "pa:ss")];
    for (login, password) in pairs {
        let token = encode_credentials(login, password);
        let decoded = STANDARD.decode(&token).expect("valid base64");
        assert_eq!(decoded, format!("{login}:{password}").into_bytes());
    }
}

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_set_get_clear() {
    let store = MemoryTokenStore::new();
    assert!(store.get().is_none());

    store.set("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));

    store.set("def");
    assert_eq!(store.get().as_deref(), Some("def"));

    store.clear();
    assert!(store.get().is_none());
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn memory_store_clones_share_state() {
    let store = MemoryTokenStore::with_token("seed");
    let other = store.clone();

    other.set("updated");
    assert_eq!(store.get().as_deref(), Some("updated"));

    store.clear();
    assert!(other.get().is_none());
}
