use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AccountProfile, AccountRole, DocumentStatus, VerificationDocument};

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

const DEFAULT_WINDOW_DAYS: i64 = 5;

/// Grace window applied to new accounts and pending document reviews alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GracePolicy {
    pub window_days: i64,
}

impl GracePolicy {
    pub fn new(window_days: i64) -> Self {
        let sanitized = if window_days > 0 {
            window_days
        } else {
            DEFAULT_WINDOW_DAYS
        };

        Self {
            window_days: sanitized,
        }
    }

    pub fn deadline_from(&self, window_start: DateTime<Utc>) -> DateTime<Utc> {
        window_start + Duration::days(self.window_days)
    }
}

impl Default for GracePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

/// Outcome of evaluating whether an account may currently list properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPermission {
    pub can_list_properties: bool,
    pub reason: Option<String>,
    pub days_remaining: Option<i64>,
}

impl ListingPermission {
    fn verified() -> Self {
        Self {
            can_list_properties: true,
            reason: None,
            days_remaining: None,
        }
    }

    fn pending_grace(days_remaining: i64) -> Self {
        Self {
            can_list_properties: true,
            reason: Some(format!(
                "Verification pending. {days_remaining} days remaining to complete verification."
            )),
            days_remaining: Some(days_remaining),
        }
    }

    fn new_account_grace(days_remaining: i64) -> Self {
        Self {
            can_list_properties: true,
            reason: Some(format!(
                "New account. {days_remaining} days remaining to verify your account."
            )),
            days_remaining: Some(days_remaining),
        }
    }

    fn expired() -> Self {
        Self {
            can_list_properties: false,
            reason: Some(
                "Verification period expired. Please verify your account to list properties."
                    .to_string(),
            ),
            days_remaining: Some(0),
        }
    }

    fn unknown_account() -> Self {
        Self {
            can_list_properties: false,
            reason: Some("Unable to determine verification status.".to_string()),
            days_remaining: None,
        }
    }

    fn role_excluded(role: AccountRole) -> Self {
        Self {
            can_list_properties: false,
            reason: Some(format!(
                "Accounts registered as {} cannot list properties.",
                role.label()
            )),
            days_remaining: None,
        }
    }
}

/// Decides whether an account may currently create listings, and why.
///
/// The decision is a pure function of the evaluation instant, the account
/// profile, and the account's verification documents; it performs no I/O and
/// never mutates store state.
#[derive(Debug, Clone, Default)]
pub struct VerificationGate {
    policy: GracePolicy,
}

impl VerificationGate {
    pub fn new(policy: GracePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GracePolicy {
        &self.policy
    }

    /// Evaluate the permission rules in priority order; the first match wins.
    ///
    /// Rejected documents neither unlock nor block: an account holding only
    /// rejected documents is judged by raw account age, which can leave a
    /// prompt submitter locked out once the sign-up window lapses.
    pub fn decide(
        &self,
        now: DateTime<Utc>,
        account: Option<&AccountProfile>,
        documents: &[VerificationDocument],
    ) -> ListingPermission {
        if let Some(profile) = account {
            if !profile.role.may_list_properties() {
                return ListingPermission::role_excluded(profile.role);
            }
        }

        if documents
            .iter()
            .any(|document| document.status == DocumentStatus::Verified)
        {
            return ListingPermission::verified();
        }

        let earliest_pending = documents
            .iter()
            .filter(|document| document.status == DocumentStatus::Pending)
            .map(|document| document.submitted_at)
            .min();

        if let Some(submitted_at) = earliest_pending {
            let days = self.days_until_deadline(now, submitted_at);
            return if days >= 0 {
                ListingPermission::pending_grace(days)
            } else {
                ListingPermission::expired()
            };
        }

        match account {
            Some(profile) => {
                let days = self.days_until_deadline(now, profile.created_at);
                if days >= 0 {
                    ListingPermission::new_account_grace(days)
                } else {
                    ListingPermission::expired()
                }
            }
            None => ListingPermission::unknown_account(),
        }
    }

    /// Whole days until the window closes, rounded up so a deadline later the
    /// same day still reports zero days remaining rather than expiring.
    fn days_until_deadline(&self, now: DateTime<Utc>, window_start: DateTime<Utc>) -> i64 {
        let deadline = self.policy.deadline_from(window_start);
        let millis = (deadline - now).num_milliseconds();
        millis.div_euclid(DAY_MILLIS) + i64::from(millis.rem_euclid(DAY_MILLIS) > 0)
    }
}
