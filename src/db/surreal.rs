//! Persistent document-store backend (embedded SurrealDB)
//!
//! Documents live in schemaless tables keyed by storage-assigned record
//! ids. Every read projects `record::id(id) AS id` so rows come back
//! with a plain string identifier ready for normalization. Partial
//! updates use `UPDATE ... MERGE` ($set-style shallow merge).

use async_trait::async_trait;
use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};
use tokio::sync::OnceCell;
use uuid::Uuid;

use super::storage::{Filter, Storage};
use super::{Collection, Document, RepoError, RepoResult, normalize};

static CONNECTION: OnceCell<Surreal<Db>> = OnceCell::const_new();

const NAMESPACE: &str = "catering";
const DATABASE: &str = "catering";

/// Persistent storage over an embedded SurrealDB instance.
#[derive(Clone)]
pub struct SurrealStorage {
    db: Surreal<Db>,
}

impl SurrealStorage {
    /// Connect to (or open) the embedded database under `data_dir`.
    ///
    /// The connection is established once per process and shared;
    /// repeated calls are no-ops returning the same handle. A failed
    /// connection surfaces as [`RepoError::Unavailable`] and is fatal
    /// at startup.
    pub async fn connect(data_dir: &str) -> RepoResult<Self> {
        let db = CONNECTION
            .get_or_try_init(|| async {
                tracing::info!(path = %data_dir, "Opening embedded document store");
                let db = Surreal::new::<RocksDb>(data_dir)
                    .await
                    .map_err(|e| RepoError::Unavailable(format!("Failed to open store: {e}")))?;
                db.use_ns(NAMESPACE)
                    .use_db(DATABASE)
                    .await
                    .map_err(|e| RepoError::Unavailable(format!("Failed to select db: {e}")))?;
                Ok::<_, RepoError>(db)
            })
            .await?
            .clone();

        Ok(Self { db })
    }

    fn generate_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Build `WHERE f0 = $v0 AND f1 = $v1 ...` for an equality filter.
    /// Field names are static identifiers from our own code, only the
    /// values are bound.
    fn where_clause(filter: Filter<'_>) -> String {
        if filter.is_empty() {
            return String::new();
        }
        let conditions: Vec<String> = filter
            .iter()
            .enumerate()
            .map(|(i, (field, _))| format!("{field} = $v{i}"))
            .collect();
        format!(" WHERE {}", conditions.join(" AND "))
    }

    fn rows_to_documents(rows: Vec<Value>) -> Vec<Document> {
        rows.into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(normalize(map)),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Storage for SurrealStorage {
    async fn list(&self, collection: Collection) -> RepoResult<Vec<Document>> {
        let mut result = self
            .db
            .query("SELECT *, record::id(id) AS id FROM type::table($tb)")
            .bind(("tb", collection.table()))
            .await?;
        let rows: Vec<Value> = result.take(0)?;
        Ok(Self::rows_to_documents(rows))
    }

    async fn get(&self, collection: Collection, id: &str) -> RepoResult<Option<Document>> {
        let mut result = self
            .db
            .query("SELECT *, record::id(id) AS id FROM type::thing($tb, $id)")
            .bind(("tb", collection.table()))
            .bind(("id", id.to_string()))
            .await?;
        let rows: Vec<Value> = result.take(0)?;
        Ok(Self::rows_to_documents(rows).into_iter().next())
    }

    async fn find(&self, collection: Collection, filter: Filter<'_>) -> RepoResult<Vec<Document>> {
        let sql = format!(
            "SELECT *, record::id(id) AS id FROM type::table($tb){}",
            Self::where_clause(filter)
        );
        let mut query = self.db.query(sql).bind(("tb", collection.table()));
        for (i, (_, value)) in filter.iter().enumerate() {
            query = query.bind((format!("v{i}"), value.clone()));
        }
        let rows: Vec<Value> = query.await?.take(0)?;
        Ok(Self::rows_to_documents(rows))
    }

    async fn create(&self, collection: Collection, doc: Document) -> RepoResult<Document> {
        let id = Self::generate_id();
        let mut result = self
            .db
            .query("CREATE type::thing($tb, $id) CONTENT $data RETURN NONE")
            .query("SELECT *, record::id(id) AS id FROM type::thing($tb, $id)")
            .bind(("tb", collection.table()))
            .bind(("id", id))
            .bind(("data", doc))
            .await?;
        let rows: Vec<Value> = result.take(1)?;
        Self::rows_to_documents(rows)
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Created document not readable".into()))
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Document,
    ) -> RepoResult<Option<Document>> {
        // UPDATE only touches existing records; the follow-up SELECT
        // comes back empty for an unknown id.
        let mut result = self
            .db
            .query("UPDATE type::thing($tb, $id) MERGE $data RETURN NONE")
            .query("SELECT *, record::id(id) AS id FROM type::thing($tb, $id)")
            .bind(("tb", collection.table()))
            .bind(("id", id.to_string()))
            .bind(("data", patch))
            .await?;
        let rows: Vec<Value> = result.take(1)?;
        Ok(Self::rows_to_documents(rows).into_iter().next())
    }

    async fn delete(&self, collection: Collection, id: &str) -> RepoResult<bool> {
        let mut result = self
            .db
            .query("DELETE type::thing($tb, $id) RETURN BEFORE")
            .bind(("tb", collection.table()))
            .bind(("id", id.to_string()))
            .await?;
        let rows: Vec<serde::de::IgnoredAny> = result.take(0)?;
        Ok(!rows.is_empty())
    }

    async fn delete_where(&self, collection: Collection, filter: Filter<'_>) -> RepoResult<u64> {
        let sql = format!(
            "DELETE type::table($tb){} RETURN BEFORE",
            Self::where_clause(filter)
        );
        let mut query = self.db.query(sql).bind(("tb", collection.table()));
        for (i, (_, value)) in filter.iter().enumerate() {
            query = query.bind((format!("v{i}"), value.clone()));
        }
        let rows: Vec<serde::de::IgnoredAny> = query.await?.take(0)?;
        Ok(rows.len() as u64)
    }

    async fn mark_code_as_used(&self, code: &str) -> RepoResult<bool> {
        // Single conditional UPDATE: the store serializes it, so two
        // concurrent calls against the same unused code cannot both
        // match the `isUsed = false` predicate.
        let mut result = self
            .db
            .query(
                "UPDATE type::table($tb) SET isUsed = true \
                 WHERE code = $code AND isUsed = false RETURN BEFORE",
            )
            .bind(("tb", Collection::UserCodes.table()))
            .bind(("code", code.to_string()))
            .await?;
        let rows: Vec<serde::de::IgnoredAny> = result.take(0)?;
        Ok(!rows.is_empty())
    }
}
