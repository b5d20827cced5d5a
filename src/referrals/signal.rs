//! Lifecycle signals for the referrals resource.

use serde_json::Value;

use crate::store::Signal;

/// Signals emitted by the referral dispatchers.
///
/// Three operations share the slice: fetching the single referral,
/// fetching the mapped collection, and saving a follow-up. All three
/// request signals collapse to the same loading transition in the
/// reducer; the success signals differ in which field they touch.
#[derive(Debug, Clone)]
pub enum ReferralsSignal {
    /// Single-referral fetch started.
    DetailRequested,

    /// Single-referral fetch succeeded; payload replaces the referral.
    DetailLoaded { payload: Value },

    /// Single-referral fetch failed.
    DetailFailed,

    /// Collection fetch started.
    ListRequested,

    /// Collection fetch succeeded; payload replaces the collection.
    ListLoaded { payload: Value },

    /// Collection fetch failed.
    ListFailed,

    /// Follow-up save started.
    FollowUpRequested,

    /// Follow-up save succeeded; payload becomes the referral's
    /// `followUp` field, sibling fields untouched.
    FollowUpSaved { payload: Value },

    /// Follow-up save failed.
    FollowUpFailed,
}

impl Signal for ReferralsSignal {}
