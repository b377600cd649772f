use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{AccountProfile, DocumentId, DocumentStatus, UserId, VerificationDocument};

/// Storage abstraction over the hosted document and account stores so the
/// service module can be exercised in isolation.
pub trait VerificationRepository: Send + Sync {
    fn insert_document(
        &self,
        document: VerificationDocument,
    ) -> Result<VerificationDocument, RepositoryError>;
    fn update_document(&self, document: VerificationDocument) -> Result<(), RepositoryError>;
    fn fetch_document(&self, id: &DocumentId)
        -> Result<Option<VerificationDocument>, RepositoryError>;
    fn documents_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<VerificationDocument>, RepositoryError>;
    fn documents_with_status(
        &self,
        status: DocumentStatus,
    ) -> Result<Vec<VerificationDocument>, RepositoryError>;
    fn account_profile(&self, user_id: &UserId) -> Result<Option<AccountProfile>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a document's exposed review state.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub document_id: DocumentId,
    pub user_id: UserId,
    pub document_name: String,
    pub document_type: &'static str,
    pub status: &'static str,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

impl VerificationDocument {
    pub fn status_view(&self) -> DocumentView {
        DocumentView {
            document_id: self.id.clone(),
            user_id: self.user_id.clone(),
            document_name: self.document_name.clone(),
            document_type: self.document_type.label(),
            status: self.status.label(),
            submitted_at: self.submitted_at,
            reviewed_at: self.reviewed_at,
            admin_notes: self.admin_notes.clone(),
        }
    }
}
