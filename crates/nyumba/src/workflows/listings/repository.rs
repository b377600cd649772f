use super::domain::{ListingId, PropertyListing};
use crate::workflows::verification::domain::UserId;

pub use crate::workflows::verification::repository::RepositoryError;

/// Storage abstraction for listings so the service can run against fakes.
pub trait ListingRepository: Send + Sync {
    fn insert(&self, listing: PropertyListing) -> Result<PropertyListing, RepositoryError>;
    fn update(&self, listing: PropertyListing) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ListingId) -> Result<Option<PropertyListing>, RepositoryError>;
    fn for_owner(&self, owner_id: &UserId) -> Result<Vec<PropertyListing>, RepositoryError>;
    fn available(&self, limit: usize) -> Result<Vec<PropertyListing>, RepositoryError>;
}
