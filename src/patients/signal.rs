//! Lifecycle signals for the patients resource.

use serde_json::Value;

use crate::store::Signal;

/// Signals emitted by the patient list dispatcher.
#[derive(Debug, Clone)]
pub enum PatientsSignal {
    /// List fetch started.
    ListRequested,

    /// List fetch succeeded; payload is the decoded response body.
    ListLoaded { payload: Value },

    /// List fetch failed. Detail goes to the log, not to state.
    ListFailed,
}

impl Signal for PatientsSignal {}
