use crate::infra::{InMemoryListingRepository, InMemoryVerificationRepository};
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use nyumba::error::AppError;
use nyumba::workflows::listings::{ListingDraft, ListingService, ListingServiceError, ListingType};
use nyumba::workflows::verification::{
    AccountProfile, AccountRole, DocumentSubmission, DocumentType, GracePolicy, ListingPermission,
    ReviewCommand, ReviewVerdict, UserId, VerificationService,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Account creation instant for the demo landlord (RFC 3339). Defaults to now.
    #[arg(long, value_parser = crate::infra::parse_timestamp)]
    pub(crate) account_created: Option<DateTime<Utc>>,
    /// Grace window length in days (defaults to the standard window)
    #[arg(long)]
    pub(crate) window_days: Option<i64>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let created = args.account_created.unwrap_or_else(Utc::now);
    let policy = args
        .window_days
        .map(GracePolicy::new)
        .unwrap_or_default();

    let landlord = UserId("demo-landlord".to_string());
    let renter = UserId("demo-renter".to_string());

    let repository = Arc::new(InMemoryVerificationRepository::default());
    repository.seed_account(AccountProfile {
        id: landlord.clone(),
        name: "Amina Phiri".to_string(),
        role: AccountRole::Landlord,
        business_registration_number: Some("BRN-8841".to_string()),
        license_number: None,
        created_at: created,
    });
    repository.seed_account(AccountProfile {
        id: renter.clone(),
        name: "Joseph Banda".to_string(),
        role: AccountRole::Renter,
        business_registration_number: None,
        license_number: None,
        created_at: created,
    });

    let verification = Arc::new(VerificationService::new(repository, policy));
    let listings = Arc::new(ListingService::new(
        Arc::new(InMemoryListingRepository::default()),
        verification.clone(),
    ));

    println!("Verification gate demo");
    println!(
        "Landlord account created {created} (grace window {} days)",
        policy.window_days
    );

    let day_zero = verification.listing_permission_at(&landlord, created)?;
    println!("\nDay 0 (new account)");
    render_permission(&day_zero);

    println!("\nDay 1: landlord lists a property during the sign-up window");
    match listings.create_listing_at(demo_draft(&landlord), created + Duration::days(1)) {
        Ok(created_listing) => {
            println!(
                "- Created {} -> verified_owner={}",
                created_listing.listing.id.0, created_listing.listing.verified_owner
            );
        }
        Err(err) => println!("- Listing rejected: {err}"),
    }

    println!("\nDay 4: landlord uploads a business license");
    let document = verification.submit_document_at(
        DocumentSubmission {
            user_id: landlord.clone(),
            document_type: DocumentType::BusinessLicense,
            document_url: "https://storage.nyumba.example/docs/license.pdf".to_string(),
            document_name: "business-license.pdf".to_string(),
        },
        created + Duration::days(4),
    )?;
    println!("- Stored {} (status {})", document.id.0, document.status.label());

    let day_eight = verification.listing_permission_at(&landlord, created + Duration::days(8))?;
    println!("\nDay 8 (sign-up window lapsed, review pending)");
    render_permission(&day_eight);

    println!("\nDay 9: admin approves the document");
    let reviewed = verification.review_document_at(
        ReviewCommand {
            document_id: document.id.clone(),
            verdict: ReviewVerdict::Approved,
            admin_notes: Some("Matches business registry".to_string()),
            reviewed_by: UserId("demo-admin".to_string()),
        },
        created + Duration::days(9),
    )?;
    println!(
        "- Document {} now {}",
        reviewed.id.0,
        reviewed.status.label()
    );

    let much_later = verification.listing_permission_at(&landlord, created + Duration::days(400))?;
    println!("\nDay 400 (verified account)");
    render_permission(&much_later);

    match serde_json::to_string_pretty(&much_later) {
        Ok(json) => println!("  Permission payload:\n{json}"),
        Err(err) => println!("  Permission payload unavailable: {err}"),
    }

    println!("\nDay 400: verified landlord lists again");
    match listings.create_listing_at(demo_draft(&landlord), created + Duration::days(400)) {
        Ok(created_listing) => {
            println!(
                "- Created {} -> verified_owner={}",
                created_listing.listing.id.0, created_listing.listing.verified_owner
            );
        }
        Err(err) => println!("- Listing rejected: {err}"),
    }

    println!("\nRenter attempts to list");
    match listings.create_listing_at(demo_draft(&renter), created + Duration::days(1)) {
        Ok(_) => println!("- Unexpectedly allowed"),
        Err(ListingServiceError::Blocked(permission)) => render_permission(&permission),
        Err(err) => println!("- Listing rejected: {err}"),
    }

    Ok(())
}

fn render_permission(permission: &ListingPermission) {
    println!(
        "- can_list_properties={} days_remaining={:?}",
        permission.can_list_properties, permission.days_remaining
    );
    match &permission.reason {
        Some(reason) => println!("  Reason: {reason}"),
        None => println!("  Reason: none (fully verified)"),
    }
}

fn demo_draft(owner_id: &UserId) -> ListingDraft {
    ListingDraft {
        owner_id: owner_id.clone(),
        title: "Two-bedroom apartment in Area 47".to_string(),
        description: "Walled compound with borehole water and solar backup.".to_string(),
        price: 350_000,
        currency: "MWK".to_string(),
        location: "Lilongwe".to_string(),
        district: "Area 47".to_string(),
        bedrooms: 2,
        bathrooms: 1,
        area_sqm: 96,
        listing_type: ListingType::Rent,
        amenities: vec!["Borehole".to_string(), "Solar backup".to_string()],
    }
}
