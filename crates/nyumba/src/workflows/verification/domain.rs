use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for marketplace accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for verification documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// Kinds of evidence accepted for identity, ownership, or business checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    BusinessLicense,
    PropertyDeed,
    NationalId,
    Other,
}

impl DocumentType {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentType::BusinessLicense => "business_license",
            DocumentType::PropertyDeed => "property_deed",
            DocumentType::NationalId => "national_id",
            DocumentType::Other => "other",
        }
    }
}

/// Review state of a submitted document. A document leaves `Pending` exactly
/// once and never returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Verified,
    Rejected,
}

impl DocumentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Verified => "verified",
            DocumentStatus::Rejected => "rejected",
        }
    }
}

/// Closed set of marketplace account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    Renter,
    Landlord,
    RealEstateAgency,
    Admin,
    LodgeOwner,
    BnbOwner,
}

impl AccountRole {
    pub const fn label(self) -> &'static str {
        match self {
            AccountRole::Renter => "renter",
            AccountRole::Landlord => "landlord",
            AccountRole::RealEstateAgency => "real_estate_agency",
            AccountRole::Admin => "admin",
            AccountRole::LodgeOwner => "lodge_owner",
            AccountRole::BnbOwner => "bnb_owner",
        }
    }

    /// Roles eligible to create listings at all; eligible accounts are still
    /// subject to the verification gate.
    pub const fn may_list_properties(self) -> bool {
        matches!(
            self,
            AccountRole::Landlord | AccountRole::RealEstateAgency | AccountRole::Admin
        )
    }
}

/// Persisted verification document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationDocument {
    pub id: DocumentId,
    pub user_id: UserId,
    pub document_type: DocumentType,
    pub document_url: String,
    pub document_name: String,
    pub status: DocumentStatus,
    pub admin_notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<UserId>,
}

/// Account profile snapshot read from the account store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: UserId,
    pub name: String,
    pub role: AccountRole,
    pub business_registration_number: Option<String>,
    pub license_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Inbound payload for the document upload flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSubmission {
    pub user_id: UserId,
    pub document_type: DocumentType,
    pub document_url: String,
    pub document_name: String,
}

/// Administrative verdict applied to a pending document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewVerdict {
    Approved,
    Rejected,
}

impl ReviewVerdict {
    pub const fn resulting_status(self) -> DocumentStatus {
        match self {
            ReviewVerdict::Approved => DocumentStatus::Verified,
            ReviewVerdict::Rejected => DocumentStatus::Rejected,
        }
    }
}

/// Administrative review request against a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewCommand {
    pub document_id: DocumentId,
    pub verdict: ReviewVerdict,
    pub admin_notes: Option<String>,
    pub reviewed_by: UserId,
}
