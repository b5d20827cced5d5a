//! State for the patients resource.

use serde_json::Value;

use crate::store::{Phase, ResourceState};

/// View model for the patient collection.
///
/// `patients` holds the last successfully fetched collection verbatim
/// as opaque JSON (no schema applied); absent until the first success
/// and replaced wholesale on each subsequent one. On failure the field
/// keeps its prior value, so views keep showing last-known-good data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatientsState {
    /// Last successfully fetched patient collection.
    pub patients: Option<Value>,
    /// True strictly between a request signal and its terminal signal.
    pub is_loading: bool,
    /// Set when the last request failed; cleared by the next request.
    pub fetch_failed: bool,
}

impl ResourceState for PatientsState {}

impl PatientsState {
    /// Coarse lifecycle phase for view consumption.
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.fetch_failed {
            Phase::Errored
        } else if self.patients.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }
}
