use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::domain::{ListingDraft, ListingId, ListingRuleViolation, ListingStatus, PropertyListing};
use super::repository::{ListingRepository, RepositoryError};
use crate::workflows::verification::domain::UserId;
use crate::workflows::verification::gate::ListingPermission;
use crate::workflows::verification::repository::VerificationRepository;
use crate::workflows::verification::service::{VerificationService, VerificationServiceError};

/// Service gating listing creation on the owner's verification state.
pub struct ListingService<L, V> {
    listings: Arc<L>,
    verification: Arc<VerificationService<V>>,
}

static LISTING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_listing_id() -> ListingId {
    let id = LISTING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ListingId(format!("prop-{id:06}"))
}

/// Stored listing plus the permission snapshot that allowed it, so response
/// payloads can echo the grace status back to the owner.
#[derive(Debug, Clone)]
pub struct CreatedListing {
    pub listing: PropertyListing,
    pub permission: ListingPermission,
}

impl<L, V> ListingService<L, V>
where
    L: ListingRepository + 'static,
    V: VerificationRepository + 'static,
{
    pub fn new(listings: Arc<L>, verification: Arc<VerificationService<V>>) -> Self {
        Self {
            listings,
            verification,
        }
    }

    /// Create a listing if the owner's verification state allows it.
    pub fn create_listing(
        &self,
        draft: ListingDraft,
    ) -> Result<CreatedListing, ListingServiceError> {
        self.create_listing_at(draft, Utc::now())
    }

    pub fn create_listing_at(
        &self,
        draft: ListingDraft,
        now: DateTime<Utc>,
    ) -> Result<CreatedListing, ListingServiceError> {
        draft.validate()?;

        let permission = self
            .verification
            .listing_permission_at(&draft.owner_id, now)?;
        if !permission.can_list_properties {
            return Err(ListingServiceError::Blocked(permission));
        }

        // A reason accompanies grace-window permissions; its absence means
        // the owner holds an approved document.
        let verified_owner = permission.reason.is_none();

        let listing = PropertyListing {
            id: next_listing_id(),
            owner_id: draft.owner_id,
            title: draft.title,
            description: draft.description,
            price: draft.price,
            currency: draft.currency,
            location: draft.location,
            district: draft.district,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            area_sqm: draft.area_sqm,
            listing_type: draft.listing_type,
            status: ListingStatus::Available,
            amenities: draft.amenities,
            verified_owner,
            views: 0,
            created_at: now,
        };

        let stored = self.listings.insert(listing)?;
        Ok(CreatedListing {
            listing: stored,
            permission,
        })
    }

    /// Fetch a listing for detail rendering, counting the view.
    pub fn view_listing(&self, id: &ListingId) -> Result<PropertyListing, ListingServiceError> {
        let mut listing = self.listings.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        listing.views += 1;
        self.listings.update(listing.clone())?;
        Ok(listing)
    }

    /// Listings currently open for browsing.
    pub fn browse(&self, limit: usize) -> Result<Vec<PropertyListing>, ListingServiceError> {
        Ok(self.listings.available(limit)?)
    }

    /// All listings created by one owner, for dashboard rendering.
    pub fn listings_for_owner(
        &self,
        owner_id: &UserId,
    ) -> Result<Vec<PropertyListing>, ListingServiceError> {
        Ok(self.listings.for_owner(owner_id)?)
    }
}

/// Error raised by the listing service.
#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error(transparent)]
    Rule(#[from] ListingRuleViolation),
    #[error(transparent)]
    Verification(#[from] VerificationServiceError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("listing creation blocked: {}", .0.reason.as_deref().unwrap_or("verification required"))]
    Blocked(ListingPermission),
}
