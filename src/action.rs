//! App-level action union.

use crate::patients::PatientsSignal;
use crate::referrals::ReferralsSignal;
use crate::store::Signal;

/// A lifecycle signal from any resource, routed through the root store.
///
/// Every dispatched action is offered to every slice reducer; a reducer
/// returns its state unchanged for variants belonging to another slice.
#[derive(Debug, Clone)]
pub enum Action {
    Patients(PatientsSignal),
    Referrals(ReferralsSignal),
}

impl Signal for Action {}

impl From<PatientsSignal> for Action {
    fn from(signal: PatientsSignal) -> Self {
        Action::Patients(signal)
    }
}

impl From<ReferralsSignal> for Action {
    fn from(signal: ReferralsSignal) -> Self {
        Action::Referrals(signal)
    }
}
