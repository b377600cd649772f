use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::verification::domain::UserId;

/// Identifier wrapper for property listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// Advertised transaction type for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Rent,
    Sale,
    Lease,
}

impl ListingType {
    pub const fn label(self) -> &'static str {
        match self {
            ListingType::Rent => "rent",
            ListingType::Sale => "sale",
            ListingType::Lease => "lease",
        }
    }
}

/// Availability state shown to browsing renters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Available,
    Rented,
    Sold,
}

impl ListingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Rented => "rented",
            ListingStatus::Sold => "sold",
        }
    }
}

/// Owner-provided payload for creating a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub currency: String,
    pub location: String,
    pub district: String,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area_sqm: u32,
    pub listing_type: ListingType,
    pub amenities: Vec<String>,
}

impl ListingDraft {
    /// Intake rules applied before the verification gate runs.
    pub fn validate(&self) -> Result<(), ListingRuleViolation> {
        if self.title.trim().is_empty() {
            return Err(ListingRuleViolation::MissingTitle);
        }
        if self.price == 0 {
            return Err(ListingRuleViolation::ZeroPrice);
        }
        if self.location.trim().is_empty() {
            return Err(ListingRuleViolation::MissingLocation);
        }
        Ok(())
    }
}

/// Intake validation errors for listing drafts.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListingRuleViolation {
    #[error("listing title must not be empty")]
    MissingTitle,
    #[error("listing price must be greater than zero")]
    ZeroPrice,
    #[error("listing location must not be empty")]
    MissingLocation,
}

/// Persisted property listing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    pub id: ListingId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub currency: String,
    pub location: String,
    pub district: String,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area_sqm: u32,
    pub listing_type: ListingType,
    pub status: ListingStatus,
    pub amenities: Vec<String>,
    pub verified_owner: bool,
    pub views: u32,
    pub created_at: DateTime<Utc>,
}

impl PropertyListing {
    pub fn summary_view(&self) -> ListingView {
        ListingView {
            listing_id: self.id.clone(),
            title: self.title.clone(),
            price: self.price,
            currency: self.currency.clone(),
            location: self.location.clone(),
            district: self.district.clone(),
            listing_type: self.listing_type.label(),
            status: self.status.label(),
            verified_owner: self.verified_owner,
            views: self.views,
        }
    }
}

/// Card-sized projection of a listing for browse responses.
#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    pub listing_id: ListingId,
    pub title: String,
    pub price: u32,
    pub currency: String,
    pub location: String,
    pub district: String,
    pub listing_type: &'static str,
    pub status: &'static str,
    pub verified_owner: bool,
    pub views: u32,
}
