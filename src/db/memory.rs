//! Ephemeral in-memory storage backend
//!
//! Process-local keyed maps with storage-assigned UUID identifiers.
//! State is lost on restart; intended for local development and tests.
//! A single `RwLock` over the collection maps keeps mutation serialized
//! under tokio's parallel workers (locks are never held across awaits).

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use uuid::Uuid;

use super::storage::{Filter, Storage};
use super::{Collection, Document, RepoResult, normalize};

type CollectionMap = HashMap<String, Document>;

/// In-memory document store.
pub struct MemoryStorage {
    collections: RwLock<HashMap<&'static str, CollectionMap>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        let collections = Collection::ALL
            .iter()
            .map(|c| (c.table(), CollectionMap::new()))
            .collect();
        Self {
            collections: RwLock::new(collections),
        }
    }

    fn generate_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    fn matches(doc: &Document, filter: Filter<'_>) -> bool {
        filter
            .iter()
            .all(|(field, expected)| doc.get(*field) == Some(expected))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn list(&self, collection: Collection) -> RepoResult<Vec<Document>> {
        let collections = self.collections.read();
        let map = &collections[collection.table()];
        Ok(map.values().cloned().map(normalize).collect())
    }

    async fn get(&self, collection: Collection, id: &str) -> RepoResult<Option<Document>> {
        let collections = self.collections.read();
        let map = &collections[collection.table()];
        Ok(map.get(id).cloned().map(normalize))
    }

    async fn find(&self, collection: Collection, filter: Filter<'_>) -> RepoResult<Vec<Document>> {
        let collections = self.collections.read();
        let map = &collections[collection.table()];
        Ok(map
            .values()
            .filter(|doc| Self::matches(doc, filter))
            .cloned()
            .map(normalize)
            .collect())
    }

    async fn create(&self, collection: Collection, mut doc: Document) -> RepoResult<Document> {
        let id = Self::generate_id();
        doc.insert("id".into(), Value::String(id.clone()));

        let mut collections = self.collections.write();
        let map = collections.get_mut(collection.table()).expect("known table");
        map.insert(id, doc.clone());
        Ok(normalize(doc))
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Document,
    ) -> RepoResult<Option<Document>> {
        let mut collections = self.collections.write();
        let map = collections.get_mut(collection.table()).expect("known table");

        let Some(existing) = map.get_mut(id) else {
            return Ok(None);
        };
        // Shallow $set-style merge; absent fields stay untouched
        for (key, value) in patch {
            existing.insert(key, value);
        }
        Ok(Some(normalize(existing.clone())))
    }

    async fn delete(&self, collection: Collection, id: &str) -> RepoResult<bool> {
        let mut collections = self.collections.write();
        let map = collections.get_mut(collection.table()).expect("known table");
        Ok(map.remove(id).is_some())
    }

    async fn delete_where(&self, collection: Collection, filter: Filter<'_>) -> RepoResult<u64> {
        let mut collections = self.collections.write();
        let map = collections.get_mut(collection.table()).expect("known table");

        let before = map.len();
        map.retain(|_, doc| !Self::matches(doc, filter));
        Ok((before - map.len()) as u64)
    }

    async fn mark_code_as_used(&self, code: &str) -> RepoResult<bool> {
        // Find-and-flip under the write lock: exactly one caller can win.
        let mut collections = self.collections.write();
        let map = collections
            .get_mut(Collection::UserCodes.table())
            .expect("known table");

        let unused = map.values_mut().find(|doc| {
            doc.get("code").and_then(Value::as_str) == Some(code)
                && doc.get("isUsed").and_then(Value::as_bool) != Some(true)
        });

        match unused {
            Some(doc) => {
                doc.insert("isUsed".into(), Value::Bool(true));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
