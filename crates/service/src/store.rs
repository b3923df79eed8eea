use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::debug;

use models::Person;

/// In-memory name -> `Person` store shared by all request handlers.
///
/// A single `RwLock` over the whole map: mutations on the same key are
/// serialized, reads proceed concurrently, and every operation is a short
/// critical section. Contents live for the process lifetime; there is no
/// persistence layer and none of the operations can fail.
#[derive(Clone)]
pub struct PersonStore {
    inner: Arc<RwLock<HashMap<String, Person>>>,
}

impl PersonStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(HashMap::new())) })
    }

    /// Insert or replace the record stored under `name`.
    /// The write is visible to any `get`/`list` that starts after this returns.
    pub async fn put(&self, name: String, person: Person) {
        let mut map = self.inner.write().await;
        let replaced = map.insert(name.clone(), person).is_some();
        drop(map);
        debug!(%name, replaced, "person stored");
    }

    /// Look up a record. Absence is a normal outcome, not an error.
    pub async fn get(&self, name: &str) -> Option<Person> {
        let map = self.inner.read().await;
        map.get(name).cloned()
    }

    /// Remove a record if present; returns whether it existed.
    /// Deleting an absent name is a silent no-op.
    pub async fn delete(&self, name: &str) -> bool {
        let mut map = self.inner.write().await;
        let existed = map.remove(name).is_some();
        drop(map);
        debug!(%name, existed, "person deleted");
        existed
    }

    /// Snapshot of all entries as `(name, person)` pairs, in no particular
    /// order. Each entry reflects a fully applied mutation.
    pub async fn list(&self) -> Vec<(String, Person)> {
        let map = self.inner.read().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}
