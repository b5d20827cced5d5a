use crate::action::Action;
use crate::patients::signal::PatientsSignal;
use crate::patients::state::PatientsState;
use crate::store::Reducer;

pub struct PatientsReducer;

impl Reducer for PatientsReducer {
    type State = PatientsState;
    type Signal = Action;

    fn reduce(state: Self::State, action: Self::Signal) -> Self::State {
        // Actions for other slices leave this slice untouched.
        let Action::Patients(signal) = action else {
            return state;
        };

        match signal {
            PatientsSignal::ListRequested => PatientsState {
                is_loading: true,
                fetch_failed: false,
                ..state
            },
            PatientsSignal::ListLoaded { payload } => PatientsState {
                patients: Some(payload),
                is_loading: false,
                ..state
            },
            PatientsSignal::ListFailed => PatientsState {
                is_loading: false,
                fetch_failed: true,
                ..state
            },
        }
    }
}
