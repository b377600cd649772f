//! Property listings and the verification-gated creation flow.
//!
//! Creating a listing consults the verification gate: blocked owners receive
//! the gate's decision, and owners listing during a grace window have their
//! listings flagged until a document is approved.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{
    ListingDraft, ListingId, ListingRuleViolation, ListingStatus, ListingType, ListingView,
    PropertyListing,
};
pub use repository::{ListingRepository, RepositoryError};
pub use router::listing_router;
pub use service::{CreatedListing, ListingService, ListingServiceError};
