//! Application root store.

use tracing::trace;

use crate::action::Action;
use crate::patients::PatientsReducer;
use crate::referrals::ReferralsReducer;
use crate::store::Store;

/// The single process-wide source of truth.
///
/// Owned by the application root and cloned into every consumer.
/// Holds one slice per resource; all transitions go through
/// [`AppStore::dispatch`], never through ad hoc mutation.
#[derive(Clone, Default)]
pub struct AppStore {
    patients: Store<PatientsReducer>,
    referrals: Store<ReferralsReducer>,
}

impl AppStore {
    /// Create a store with every slice at rest (no data, not loading).
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer an action to every slice reducer.
    ///
    /// Slices ignore foreign variants, so routing is unconditional.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        trace!(?action, "dispatching");
        self.patients.dispatch(action.clone());
        self.referrals.dispatch(action);
    }

    /// Handle to the patients slice.
    pub fn patients(&self) -> &Store<PatientsReducer> {
        &self.patients
    }

    /// Handle to the referrals slice.
    pub fn referrals(&self) -> &Store<ReferralsReducer> {
        &self.referrals
    }
}
