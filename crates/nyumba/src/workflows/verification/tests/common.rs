use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::workflows::verification::domain::{
    AccountProfile, AccountRole, DocumentId, DocumentStatus, DocumentSubmission, DocumentType,
    UserId, VerificationDocument,
};
use crate::workflows::verification::gate::{GracePolicy, VerificationGate};
use crate::workflows::verification::repository::{RepositoryError, VerificationRepository};
use crate::workflows::verification::service::VerificationService;

pub(super) fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn days(count: i64) -> Duration {
    Duration::days(count)
}

pub(super) fn landlord(created_at: DateTime<Utc>) -> AccountProfile {
    AccountProfile {
        id: UserId("user-landlord".to_string()),
        name: "Amina Phiri".to_string(),
        role: AccountRole::Landlord,
        business_registration_number: None,
        license_number: None,
        created_at,
    }
}

pub(super) fn agency(created_at: DateTime<Utc>) -> AccountProfile {
    AccountProfile {
        id: UserId("user-agency".to_string()),
        name: "Lakeview Estates".to_string(),
        role: AccountRole::RealEstateAgency,
        business_registration_number: Some("BRN-2041".to_string()),
        license_number: Some("REA-0117".to_string()),
        created_at,
    }
}

pub(super) fn renter(created_at: DateTime<Utc>) -> AccountProfile {
    AccountProfile {
        id: UserId("user-renter".to_string()),
        name: "Joseph Banda".to_string(),
        role: AccountRole::Renter,
        business_registration_number: None,
        license_number: None,
        created_at,
    }
}

pub(super) fn document(
    user_id: &UserId,
    status: DocumentStatus,
    submitted_at: DateTime<Utc>,
) -> VerificationDocument {
    VerificationDocument {
        id: DocumentId(format!("doc-fixture-{}", submitted_at.timestamp())),
        user_id: user_id.clone(),
        document_type: DocumentType::NationalId,
        document_url: "https://storage.nyumba.example/docs/national-id.pdf".to_string(),
        document_name: "national-id.pdf".to_string(),
        status,
        admin_notes: None,
        submitted_at,
        reviewed_at: None,
        reviewed_by: None,
    }
}

pub(super) fn submission(user_id: &UserId) -> DocumentSubmission {
    DocumentSubmission {
        user_id: user_id.clone(),
        document_type: DocumentType::BusinessLicense,
        document_url: "https://storage.nyumba.example/docs/business-license.pdf".to_string(),
        document_name: "business-license.pdf".to_string(),
    }
}

pub(super) fn gate() -> VerificationGate {
    VerificationGate::new(GracePolicy::default())
}

pub(super) fn build_service(
    profile: AccountProfile,
) -> (VerificationService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = MemoryRepository::with_account(profile);
    let service = VerificationService::new(repository.clone(), GracePolicy::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) documents: Arc<Mutex<HashMap<DocumentId, VerificationDocument>>>,
    pub(super) accounts: Arc<Mutex<HashMap<UserId, AccountProfile>>>,
}

impl MemoryRepository {
    pub(super) fn with_account(profile: AccountProfile) -> Arc<Self> {
        let repository = Self::default();
        repository.add_account(profile);
        Arc::new(repository)
    }

    pub(super) fn add_account(&self, profile: AccountProfile) {
        self.accounts
            .lock()
            .expect("accounts mutex poisoned")
            .insert(profile.id.clone(), profile);
    }
}

impl VerificationRepository for MemoryRepository {
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

pub(super) struct UnavailableRepository;

impl VerificationRepository for UnavailableRepository {
    fn insert_document(
        &self,
        _document: VerificationDocument,
    ) -> Result<VerificationDocument, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_document(&self, _document: VerificationDocument) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_document(
        &self,
        _id: &DocumentId,
    ) -> Result<Option<VerificationDocument>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn documents_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<VerificationDocument>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn documents_with_status(
        &self,
        _status: DocumentStatus,
    ) -> Result<Vec<VerificationDocument>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn account_profile(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<AccountProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
