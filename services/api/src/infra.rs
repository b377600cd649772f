use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use nyumba::config::VerificationConfig;
use nyumba::workflows::listings::{ListingId, ListingStatus, PropertyListing};
use nyumba::workflows::verification::{
    AccountProfile, DocumentId, DocumentStatus, GracePolicy, RepositoryError, UserId,
    VerificationDocument, VerificationRepository,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory stand-in for the hosted document and account stores.
#[derive(Default, Clone)]
pub(crate) struct InMemoryVerificationRepository {
    documents: Arc<Mutex<HashMap<DocumentId, VerificationDocument>>>,
    accounts: Arc<Mutex<HashMap<UserId, AccountProfile>>>,
}

impl InMemoryVerificationRepository {
    pub(crate) fn seed_account(&self, profile: AccountProfile) {
        self.accounts
            .lock()
            .expect("accounts mutex poisoned")
            .insert(profile.id.clone(), profile);
    }
}

impl VerificationRepository for InMemoryVerificationRepository {
    fn insert_document(
        &self,
        document: VerificationDocument,
    ) -> Result<VerificationDocument, RepositoryError> {
        let mut guard = self.documents.lock().expect("documents mutex poisoned");
        if guard.contains_key(&document.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(document.id.clone(), document.clone());
        Ok(document)
    }

    fn update_document(&self, document: VerificationDocument) -> Result<(), RepositoryError> {
        let mut guard = self.documents.lock().expect("documents mutex poisoned");
        if guard.contains_key(&document.id) {
            guard.insert(document.id.clone(), document);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch_document(
        &self,
        id: &DocumentId,
    ) -> Result<Option<VerificationDocument>, RepositoryError> {
        let guard = self.documents.lock().expect("documents mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn documents_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<VerificationDocument>, RepositoryError> {
        let guard = self.documents.lock().expect("documents mutex poisoned");
        let mut documents: Vec<_> = guard
            .values()
            .filter(|document| &document.user_id == user_id)
            .cloned()
            .collect();
        documents.sort_by_key(|document| document.submitted_at);
        Ok(documents)
    }

    fn documents_with_status(
        &self,
        status: DocumentStatus,
    ) -> Result<Vec<VerificationDocument>, RepositoryError> {
        let guard = self.documents.lock().expect("documents mutex poisoned");
        let mut documents: Vec<_> = guard
            .values()
            .filter(|document| document.status == status)
            .cloned()
            .collect();
        documents.sort_by_key(|document| document.submitted_at);
        Ok(documents)
    }

    fn account_profile(&self, user_id: &UserId) -> Result<Option<AccountProfile>, RepositoryError> {
        let guard = self.accounts.lock().expect("accounts mutex poisoned");
        Ok(guard.get(user_id).cloned())
    }
}

/// In-memory stand-in for the listing store.
#[derive(Default, Clone)]
pub(crate) struct InMemoryListingRepository {
    records: Arc<Mutex<HashMap<ListingId, PropertyListing>>>,
}

impl nyumba::workflows::listings::ListingRepository for InMemoryListingRepository {
    fn insert(&self, listing: PropertyListing) -> Result<PropertyListing, RepositoryError> {
        let mut guard = self.records.lock().expect("listings mutex poisoned");
        if guard.contains_key(&listing.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(listing.id.clone(), listing.clone());
        Ok(listing)
    }

    fn update(&self, listing: PropertyListing) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("listings mutex poisoned");
        if guard.contains_key(&listing.id) {
            guard.insert(listing.id.clone(), listing);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ListingId) -> Result<Option<PropertyListing>, RepositoryError> {
        let guard = self.records.lock().expect("listings mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_owner(&self, owner_id: &UserId) -> Result<Vec<PropertyListing>, RepositoryError> {
        let guard = self.records.lock().expect("listings mutex poisoned");
        let mut listings: Vec<_> = guard
            .values()
            .filter(|listing| &listing.owner_id == owner_id)
            .cloned()
            .collect();
        listings.sort_by_key(|listing| listing.created_at);
        Ok(listings)
    }

    fn available(&self, limit: usize) -> Result<Vec<PropertyListing>, RepositoryError> {
        let guard = self.records.lock().expect("listings mutex poisoned");
        let mut listings: Vec<_> = guard
            .values()
            .filter(|listing| listing.status == ListingStatus::Available)
            .cloned()
            .collect();
        listings.sort_by_key(|listing| listing.created_at);
        listings.truncate(limit);
        Ok(listings)
    }
}

pub(crate) fn grace_policy_from(config: &VerificationConfig) -> GracePolicy {
    GracePolicy::new(config.grace_window_days)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|value| value.with_timezone(&Utc))
        .map_err(|err| format!("failed to parse '{raw}' as an RFC 3339 timestamp ({err})"))
}
