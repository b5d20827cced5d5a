//! State for the referrals resource.

use serde_json::Value;

use crate::store::{Phase, ResourceState};

/// View model for referrals.
///
/// Carries both the mapped collection (reading id → referral) and the
/// currently inspected single referral. Payloads are opaque JSON: the
/// collection is replaced wholesale on each list success, the single
/// referral on each detail success. The one exception is a follow-up
/// save, which replaces only the referral's `followUp` key and keeps
/// all sibling fields (see the reducer).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferralsState {
    /// Last successfully fetched referral collection.
    pub referrals: Option<Value>,
    /// Last successfully fetched single referral.
    pub referral: Option<Value>,
    /// True strictly between a request signal and its terminal signal.
    pub is_loading: bool,
    /// Set when the last request failed; cleared by the next request.
    pub fetch_failed: bool,
}

impl ResourceState for ReferralsState {}

impl ReferralsState {
    /// Coarse lifecycle phase for view consumption.
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.fetch_failed {
            Phase::Errored
        } else if self.referrals.is_some() || self.referral.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }
}
