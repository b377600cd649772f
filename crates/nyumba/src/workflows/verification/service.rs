use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::domain::{
    DocumentId, DocumentStatus, DocumentSubmission, ReviewCommand, UserId, VerificationDocument,
};
use super::gate::{GracePolicy, ListingPermission, VerificationGate};
use super::repository::{RepositoryError, VerificationRepository};

/// Service composing the listing-permission gate with the document and
/// account stores.
pub struct VerificationService<R> {
    repository: Arc<R>,
    gate: VerificationGate,
}

static DOCUMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_document_id() -> DocumentId {
    let id = DOCUMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    DocumentId(format!("doc-{id:06}"))
}

impl<R> VerificationService<R>
where
    R: VerificationRepository + 'static,
{
    pub fn new(repository: Arc<R>, policy: GracePolicy) -> Self {
        Self {
            repository,
            gate: VerificationGate::new(policy),
        }
    }

    pub fn gate(&self) -> &VerificationGate {
        &self.gate
    }

    /// Record a new document for administrative review.
    pub fn submit_document(
        &self,
        submission: DocumentSubmission,
    ) -> Result<VerificationDocument, VerificationServiceError> {
        self.submit_document_at(submission, Utc::now())
    }

    pub fn submit_document_at(
        &self,
        submission: DocumentSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Result<VerificationDocument, VerificationServiceError> {
        if self
            .repository
            .account_profile(&submission.user_id)?
            .is_none()
        {
            return Err(VerificationServiceError::UnknownAccount(submission.user_id));
        }

        let document = VerificationDocument {
            id: next_document_id(),
            user_id: submission.user_id,
            document_type: submission.document_type,
            document_url: submission.document_url,
            document_name: submission.document_name,
            status: DocumentStatus::Pending,
            admin_notes: None,
            submitted_at,
            reviewed_at: None,
            reviewed_by: None,
        };

        let stored = self.repository.insert_document(document)?;
        Ok(stored)
    }

    /// Apply an administrative verdict to a pending document. Review fields
    /// are written exactly once; re-reviewing is an error.
    pub fn review_document(
        &self,
        command: ReviewCommand,
    ) -> Result<VerificationDocument, VerificationServiceError> {
        self.review_document_at(command, Utc::now())
    }

    pub fn review_document_at(
        &self,
        command: ReviewCommand,
        reviewed_at: DateTime<Utc>,
    ) -> Result<VerificationDocument, VerificationServiceError> {
        let mut document = self
            .repository
            .fetch_document(&command.document_id)?
            .ok_or(RepositoryError::NotFound)?;

        if document.status != DocumentStatus::Pending {
            return Err(VerificationServiceError::AlreadyReviewed {
                document_id: command.document_id,
                status: document.status.label(),
            });
        }

        document.status = command.verdict.resulting_status();
        document.admin_notes = command.admin_notes;
        document.reviewed_at = Some(reviewed_at);
        document.reviewed_by = Some(command.reviewed_by);

        self.repository.update_document(document.clone())?;
        Ok(document)
    }

    /// Evaluate whether the account may currently create listings.
    pub fn listing_permission(
        &self,
        user_id: &UserId,
    ) -> Result<ListingPermission, VerificationServiceError> {
        self.listing_permission_at(user_id, Utc::now())
    }

    pub fn listing_permission_at(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<ListingPermission, VerificationServiceError> {
        let account = self.repository.account_profile(user_id)?;
        let documents = self.repository.documents_for_user(user_id)?;
        Ok(self.gate.decide(now, account.as_ref(), &documents))
    }

    /// Documents submitted by one account, for dashboard rendering.
    pub fn documents_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<VerificationDocument>, VerificationServiceError> {
        Ok(self.repository.documents_for_user(user_id)?)
    }

    /// Documents awaiting administrative review.
    pub fn review_queue(&self) -> Result<Vec<VerificationDocument>, VerificationServiceError> {
        Ok(self
            .repository
            .documents_with_status(DocumentStatus::Pending)?)
    }
}

/// Error raised by the verification service.
#[derive(Debug, thiserror::Error)]
pub enum VerificationServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("document {document_id:?} was already reviewed as {status}")]
    AlreadyReviewed {
        document_id: DocumentId,
        status: &'static str,
    },
    #[error("no account found for user {0:?}")]
    UnknownAccount(UserId),
}
