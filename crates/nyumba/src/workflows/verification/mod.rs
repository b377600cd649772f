//! Verification document lifecycle and the listing-permission gate.
//!
//! Accounts may list properties during a limited grace window starting at
//! sign-up; submitting an identity or business document while unreviewed
//! opens a fresh window measured from the submission instant, and a single
//! approved document unlocks listing permanently. The gate itself is a pure
//! computation over store records so it can be evaluated at listing-creation
//! time and on dashboards without coordination.

pub mod domain;
pub mod gate;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AccountProfile, AccountRole, DocumentId, DocumentStatus, DocumentSubmission, DocumentType,
    ReviewCommand, ReviewVerdict, UserId, VerificationDocument,
};
pub use gate::{GracePolicy, ListingPermission, VerificationGate};
pub use repository::{DocumentView, RepositoryError, VerificationRepository};
pub use router::verification_router;
pub use service::{VerificationService, VerificationServiceError};
