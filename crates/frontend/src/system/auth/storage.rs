use contracts::system::auth::Session;
use std::sync::Mutex;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "usuario";

/// Persisted credentials of the signed-in user.
///
/// Token and username are always written and removed together.
pub trait SessionStore: Send + Sync {
    fn save(&self, session: &Session);

    fn read(&self) -> Option<Session>;

    /// Remove the session; a no-op when nothing is stored
    fn clear(&self);
}

/// Browser `localStorage` backed store
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSessionStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// String key/value backend of a session store
trait KeyValueStorage {
    fn set(&self, key: &str, value: &str) -> Result<(), String>;

    fn remove(&self, key: &str);
}

impl KeyValueStorage for web_sys::Storage {
    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.set_item(key, value).map_err(|e| format!("{:?}", e))
    }

    fn remove(&self, key: &str) {
        let _ = self.remove_item(key);
    }
}

/// Write both keys or neither; a failed write removes whatever was stored
fn write_session(storage: &impl KeyValueStorage, session: &Session) -> bool {
    let result = storage
        .set(TOKEN_KEY, &session.token)
        .and_then(|_| storage.set(USERNAME_KEY, &session.username));

    match result {
        Ok(()) => true,
        Err(err) => {
            log::error!("Could not persist session, clearing it: {}", err);
            storage.remove(TOKEN_KEY);
            storage.remove(USERNAME_KEY);
            false
        }
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn save(&self, session: &Session) {
        match get_local_storage() {
            Some(storage) => {
                write_session(&storage, session);
            }
            None => log::error!("localStorage unavailable, session not saved"),
        }
    }

    fn read(&self) -> Option<Session> {
        let storage = get_local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        if token.is_empty() {
            return None;
        }
        let username = storage.get_item(USERNAME_KEY).ok().flatten().unwrap_or_default();
        Some(Session { token, username })
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USERNAME_KEY);
        }
    }
}

/// In-process store; the whole session is swapped under one lock
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = Some(session.clone());
        }
    }

    fn read(&self) -> Option<Session> {
        self.session.lock().ok()?.clone()
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::thread;

    /// Map storage that refuses writes to one key
    struct FailingStorage {
        entries: Mutex<HashMap<String, String>>,
        rejected_key: &'static str,
    }

    impl KeyValueStorage for FailingStorage {
        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if key == self.rejected_key {
                return Err("QuotaExceededError".into());
            }
            self.entries.lock().unwrap().insert(key.into(), value.into());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.entries.lock().unwrap().remove(key);
        }
    }

    #[test]
    fn test_failed_username_write_leaves_nothing_stored() {
        let storage = FailingStorage {
            entries: Mutex::new(HashMap::new()),
            rejected_key: USERNAME_KEY,
        };
        assert!(!write_session(&storage, &Session::new("tok", "ana")));
        assert!(storage.entries.lock().unwrap().is_empty());
    }

    #[test]
    fn test_successful_write_stores_both_keys() {
        let storage = FailingStorage {
            entries: Mutex::new(HashMap::new()),
            rejected_key: "",
        };
        assert!(write_session(&storage, &Session::new("tok", "ana")));
        let entries = storage.entries.lock().unwrap();
        assert_eq!(entries.get(TOKEN_KEY).map(String::as_str), Some("tok"));
        assert_eq!(entries.get(USERNAME_KEY).map(String::as_str), Some("ana"));
    }

    #[test]
    fn test_save_read_clear() {
        let store = MemorySessionStore::new();
        assert_eq!(store.read(), None);

        store.save(&Session::new("tok", "ana"));
        assert_eq!(store.read(), Some(Session::new("tok", "ana")));

        store.clear();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemorySessionStore::new();
        store.clear();
        store.clear();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn test_concurrent_reads_never_see_mixed_sessions() {
        let store = Arc::new(MemorySessionStore::with_session(Session::new("a", "a")));
        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..500 {
                    let name = if i % 2 == 0 { "b" } else { "a" };
                    store.save(&Session::new(name, name));
                }
            })
        };

        for _ in 0..500 {
            if let Some(session) = store.read() {
                assert_eq!(session.token, session.username);
            }
        }
        writer.join().unwrap();
    }
}
