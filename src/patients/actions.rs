//! Dispatcher for patient operations.

use tracing::warn;

use crate::app::AppStore;
use crate::patients::signal::PatientsSignal;
use crate::transport::ApiClient;

/// Fetch the patient collection from `GET /patient`.
///
/// Emits `ListRequested` before the first await, then exactly one of
/// `ListLoaded` / `ListFailed`. Transport errors are absorbed here:
/// they are logged and collapse into the failure signal, so the caller
/// only ever observes the outcome through the store.
pub async fn fetch_patients(client: &ApiClient, store: &AppStore) {
    store.dispatch(PatientsSignal::ListRequested);

    match client.get_json("patient").await {
        Ok(payload) => store.dispatch(PatientsSignal::ListLoaded { payload }),
        Err(err) => {
            warn!(error = %err, "patient list fetch failed");
            store.dispatch(PatientsSignal::ListFailed);
        }
    }
}
