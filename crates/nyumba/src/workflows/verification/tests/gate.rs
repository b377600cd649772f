use super::common::*;
use crate::workflows::verification::domain::DocumentStatus;
use crate::workflows::verification::gate::{GracePolicy, VerificationGate};

#[test]
fn new_account_has_full_window_on_day_zero() {
    let account = landlord(epoch());

    let decision = gate().decide(epoch(), Some(&account), &[]);

    assert!(decision.can_list_properties);
    assert_eq!(decision.days_remaining, Some(5));
    assert_eq!(
        decision.reason.as_deref(),
        Some("New account. 5 days remaining to verify your account.")
    );
}

#[test]
fn new_account_expires_after_window() {
    let account = landlord(epoch());

    let decision = gate().decide(epoch() + days(6), Some(&account), &[]);

    assert!(!decision.can_list_properties);
    assert_eq!(decision.days_remaining, Some(0));
    assert_eq!(
        decision.reason.as_deref(),
        Some("Verification period expired. Please verify your account to list properties.")
    );
}

#[test]
fn pending_document_grants_window_from_submission() {
    let account = landlord(epoch() - days(30));
    let documents = vec![document(&account.id, DocumentStatus::Pending, epoch())];

    let decision = gate().decide(epoch() + days(2), Some(&account), &documents);

    assert!(decision.can_list_properties);
    assert_eq!(decision.days_remaining, Some(3));
    assert_eq!(
        decision.reason.as_deref(),
        Some("Verification pending. 3 days remaining to complete verification.")
    );
}

#[test]
fn pending_rule_outranks_expired_account_age() {
    let account = landlord(epoch());
    let documents = vec![document(&account.id, DocumentStatus::Pending, epoch() + days(3))];

    let decision = gate().decide(epoch() + days(7), Some(&account), &documents);

    assert!(decision.can_list_properties);
    assert_eq!(decision.days_remaining, Some(1));
    assert_eq!(
        decision.reason.as_deref(),
        Some("Verification pending. 1 days remaining to complete verification.")
    );
}

#[test]
fn verified_document_unlocks_permanently() {
    let account = landlord(epoch() - days(400));
    let documents = vec![
        document(&account.id, DocumentStatus::Verified, epoch() - days(300)),
        document(&account.id, DocumentStatus::Rejected, epoch() - days(200)),
        document(&account.id, DocumentStatus::Pending, epoch() - days(100)),
    ];

    for at in [epoch(), epoch() + days(1000)] {
        let decision = gate().decide(at, Some(&account), &documents);
        assert!(decision.can_list_properties);
        assert_eq!(decision.reason, None);
        assert_eq!(decision.days_remaining, None);
    }
}

#[test]
fn earliest_pending_submission_anchors_the_window() {
    let account = landlord(epoch() - days(60));
    let documents = vec![
        document(&account.id, DocumentStatus::Pending, epoch()),
        document(&account.id, DocumentStatus::Pending, epoch() + days(4)),
    ];

    // Six days past the earliest submission: the later document does not
    // reopen the window.
    let decision = gate().decide(epoch() + days(6), Some(&account), &documents);

    assert!(!decision.can_list_properties);
    assert_eq!(decision.days_remaining, Some(0));
}

#[test]
fn deadline_passed_within_the_day_still_counts_as_zero() {
    let account = landlord(epoch() - days(60));
    let documents = vec![document(&account.id, DocumentStatus::Pending, epoch())];
    let deadline = epoch() + days(5);

    let barely_late = gate().decide(
        deadline + chrono::Duration::seconds(1),
        Some(&account),
        &documents,
    );
    assert!(barely_late.can_list_properties);
    assert_eq!(barely_late.days_remaining, Some(0));

    let a_day_late = gate().decide(deadline + days(1), Some(&account), &documents);
    assert!(!a_day_late.can_list_properties);
    assert_eq!(a_day_late.days_remaining, Some(0));
}

#[test]
fn rejected_documents_fall_back_to_account_age() {
    let account = landlord(epoch());
    // Rejected the day after sign-up; the window still runs from account
    // creation, so the account is already locked out at day six.
    let documents = vec![document(&account.id, DocumentStatus::Rejected, epoch() + days(1))];

    let decision = gate().decide(epoch() + days(6), Some(&account), &documents);

    assert!(!decision.can_list_properties);
    assert_eq!(decision.days_remaining, Some(0));
}

#[test]
fn renter_role_never_lists() {
    let account = renter(epoch());

    let bare = gate().decide(epoch(), Some(&account), &[]);
    assert!(!bare.can_list_properties);
    assert_eq!(bare.days_remaining, None);

    let documents = vec![document(&account.id, DocumentStatus::Verified, epoch())];
    let with_verified = gate().decide(epoch(), Some(&account), &documents);
    assert!(!with_verified.can_list_properties);
}

#[test]
fn missing_account_is_blocked_defensively() {
    let decision = gate().decide(epoch(), None, &[]);

    assert!(!decision.can_list_properties);
    assert_eq!(
        decision.reason.as_deref(),
        Some("Unable to determine verification status.")
    );
    assert_eq!(decision.days_remaining, None);
}

#[test]
fn days_remaining_decreases_daily_until_blocked() {
    let account = landlord(epoch());
    let gate = gate();

    for day in 0..=5 {
        let decision = gate.decide(epoch() + days(day), Some(&account), &[]);
        assert!(decision.can_list_properties, "day {day} should remain open");
        assert_eq!(decision.days_remaining, Some(5 - day));
    }

    for day in 6..=9 {
        let decision = gate.decide(epoch() + days(day), Some(&account), &[]);
        assert!(!decision.can_list_properties, "day {day} should be blocked");
        assert_eq!(decision.days_remaining, Some(0));
    }
}

#[test]
fn repeated_evaluation_is_stable() {
    let account = agency(epoch());
    let documents = vec![document(&account.id, DocumentStatus::Pending, epoch())];
    let gate = gate();

    let first = gate.decide(epoch() + days(2), Some(&account), &documents);
    let second = gate.decide(epoch() + days(2), Some(&account), &documents);

    assert_eq!(first, second);
}

#[test]
fn custom_window_scales_grace() {
    let gate = VerificationGate::new(GracePolicy::new(10));
    let account = landlord(epoch());

    let decision = gate.decide(epoch(), Some(&account), &[]);

    assert_eq!(decision.days_remaining, Some(10));
}

#[test]
fn non_positive_window_falls_back_to_default() {
    assert_eq!(GracePolicy::new(0).window_days, 5);
    assert_eq!(GracePolicy::new(-3).window_days, 5);
}
