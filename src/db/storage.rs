//! Storage trait
//!
//! Generic document CRUD plus the handful of entity-specific operations
//! that go beyond a raw lookup. Backends implement the primitive
//! operations; the composite ones are default methods expressed in terms
//! of the primitives, except where atomicity forces a native
//! implementation (`mark_code_as_used`).

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{Collection, Document, RepoResult, apply_amount_defaults, sort_by_created_desc};

/// Equality filter: field name -> expected value, ANDed together.
pub type Filter<'a> = &'a [(&'a str, Value)];

#[async_trait]
pub trait Storage: Send + Sync {
    /// All documents in a collection.
    async fn list(&self, collection: Collection) -> RepoResult<Vec<Document>>;

    /// Single document by id, `None` when missing.
    async fn get(&self, collection: Collection, id: &str) -> RepoResult<Option<Document>>;

    /// Documents matching all filter fields exactly.
    async fn find(&self, collection: Collection, filter: Filter<'_>) -> RepoResult<Vec<Document>>;

    /// Insert a document; the backend assigns the id and returns the
    /// stored record.
    async fn create(&self, collection: Collection, doc: Document) -> RepoResult<Document>;

    /// Shallow-merge `patch` into the document ($set semantics; absent
    /// fields untouched). `None` when the id does not exist.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Document,
    ) -> RepoResult<Option<Document>>;

    /// Delete by id; `false` when the id does not exist.
    async fn delete(&self, collection: Collection, id: &str) -> RepoResult<bool>;

    /// Delete every document matching the filter, returning the count.
    async fn delete_where(&self, collection: Collection, filter: Filter<'_>) -> RepoResult<u64>;

    /// Atomically flip an unused code to used. Exactly one concurrent
    /// caller wins; the rest (and any retry) see `false`.
    async fn mark_code_as_used(&self, code: &str) -> RepoResult<bool>;

    // ── Composite operations ────────────────────────────────────────

    /// Booking by id with derived amount defaults backfilled.
    async fn get_booking(&self, id: &str) -> RepoResult<Option<Document>> {
        Ok(self.get(Collection::Bookings, id).await?.map(|mut doc| {
            apply_amount_defaults(&mut doc);
            doc
        }))
    }

    /// Staff whose request for this booking is exactly `accepted`.
    /// Requests whose staffId no longer resolves are silently dropped;
    /// the result carries no duplicates.
    async fn get_accepted_staff_for_booking(&self, booking_id: &str) -> RepoResult<Vec<Document>> {
        let requests = self
            .find(
                Collection::StaffRequests,
                &[("bookingId", json!(booking_id)), ("status", json!("accepted"))],
            )
            .await?;

        let mut seen = std::collections::HashSet::new();
        let mut staff = Vec::new();
        for request in requests {
            let Some(staff_id) = request.get("staffId").and_then(Value::as_str) else {
                continue;
            };
            if !seen.insert(staff_id.to_string()) {
                continue;
            }
            if let Some(member) = self.get(Collection::Staff, staff_id).await? {
                staff.push(member);
            }
        }
        Ok(staff)
    }

    /// Unused code document by its code value. Consumed codes do not
    /// match.
    async fn get_user_code_by_value(&self, code: &str) -> RepoResult<Option<Document>> {
        let matches = self
            .find(
                Collection::UserCodes,
                &[("code", json!(code)), ("isUsed", json!(false))],
            )
            .await?;
        Ok(matches.into_iter().next())
    }

    /// Staff request by its access token.
    async fn get_staff_request_by_token(&self, token: &str) -> RepoResult<Option<Document>> {
        let matches = self
            .find(Collection::StaffRequests, &[("token", json!(token))])
            .await?;
        Ok(matches.into_iter().next())
    }

    /// Code requests, newest first.
    async fn get_code_requests(&self) -> RepoResult<Vec<Document>> {
        let mut requests = self.list(Collection::CodeRequests).await?;
        sort_by_created_desc(&mut requests);
        Ok(requests)
    }

    /// Audit entries filtered by type/id, newest first.
    async fn get_audit_history(
        &self,
        entity_type: Option<&str>,
        entity_id: Option<&str>,
    ) -> RepoResult<Vec<Document>> {
        let mut filter: Vec<(&str, Value)> = Vec::new();
        if let Some(entity_type) = entity_type {
            filter.push(("entityType", json!(entity_type)));
        }
        if let Some(entity_id) = entity_id {
            filter.push(("entityId", json!(entity_id)));
        }
        let mut entries = self.find(Collection::AuditHistory, &filter).await?;
        sort_by_created_desc(&mut entries);
        Ok(entries)
    }

    /// The singleton company-info record, if any.
    async fn get_company_info(&self) -> RepoResult<Option<Document>> {
        let records = self.list(Collection::CompanyInfo).await?;
        Ok(records.into_iter().next())
    }

    /// Merge into the singleton company-info record, creating it when
    /// absent (upsert semantics).
    async fn upsert_company_info(&self, patch: Document) -> RepoResult<Document> {
        let existing_id = self
            .get_company_info()
            .await?
            .and_then(|doc| doc.get("id").and_then(Value::as_str).map(str::to_string));

        match existing_id {
            Some(id) => {
                let updated = self.update(Collection::CompanyInfo, &id, patch).await?;
                updated.ok_or_else(|| {
                    super::RepoError::Database("Company info vanished during upsert".into())
                })
            }
            None => self.create(Collection::CompanyInfo, patch).await,
        }
    }
}
