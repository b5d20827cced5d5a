//! Dispatchers for referral operations.

use serde_json::Value;
use tracing::warn;

use crate::app::AppStore;
use crate::referrals::signal::ReferralsSignal;
use crate::transport::ApiClient;

/// Fetch the current single referral from `GET /referral`.
///
/// Emits `DetailRequested` before the first await, then exactly one of
/// `DetailLoaded` / `DetailFailed`.
pub async fn fetch_referral(client: &ApiClient, store: &AppStore) {
    store.dispatch(ReferralsSignal::DetailRequested);

    match client.get_json("referral").await {
        Ok(payload) => store.dispatch(ReferralsSignal::DetailLoaded { payload }),
        Err(err) => {
            warn!(error = %err, "referral fetch failed");
            store.dispatch(ReferralsSignal::DetailFailed);
        }
    }
}

/// Fetch the mapped referral collection from `GET /referrals`.
///
/// Emits `ListRequested` before the first await, then exactly one of
/// `ListLoaded` / `ListFailed`.
pub async fn fetch_referrals(client: &ApiClient, store: &AppStore) {
    store.dispatch(ReferralsSignal::ListRequested);

    match client.get_json("referrals").await {
        Ok(payload) => store.dispatch(ReferralsSignal::ListLoaded { payload }),
        Err(err) => {
            warn!(error = %err, "referral list fetch failed");
            store.dispatch(ReferralsSignal::ListFailed);
        }
    }
}

/// Save a follow-up via `PUT /followup`.
///
/// Carries the follow-up body on the request (not idempotent). The
/// response body becomes the referral's `followUp` field through the
/// reducer's targeted merge; sibling fields of the referral survive.
pub async fn update_follow_up(client: &ApiClient, store: &AppStore, follow_up: Value) {
    store.dispatch(ReferralsSignal::FollowUpRequested);

    match client.put_json("followup", &follow_up).await {
        Ok(payload) => store.dispatch(ReferralsSignal::FollowUpSaved { payload }),
        Err(err) => {
            warn!(error = %err, "follow-up update failed");
            store.dispatch(ReferralsSignal::FollowUpFailed);
        }
    }
}
