use serde_json::{Map, Value};

use crate::action::Action;
use crate::referrals::signal::ReferralsSignal;
use crate::referrals::state::ReferralsState;
use crate::store::Reducer;

pub struct ReferralsReducer;

impl Reducer for ReferralsReducer {
    type State = ReferralsState;
    type Signal = Action;

    fn reduce(state: Self::State, action: Self::Signal) -> Self::State {
        // Actions for other slices leave this slice untouched.
        let Action::Referrals(signal) = action else {
            return state;
        };

        match signal {
            // All three operations share the loading transition.
            ReferralsSignal::DetailRequested
            | ReferralsSignal::ListRequested
            | ReferralsSignal::FollowUpRequested => ReferralsState {
                is_loading: true,
                fetch_failed: false,
                ..state
            },

            ReferralsSignal::DetailLoaded { payload } => ReferralsState {
                referral: Some(payload),
                is_loading: false,
                ..state
            },

            ReferralsSignal::ListLoaded { payload } => ReferralsState {
                referrals: Some(payload),
                is_loading: false,
                ..state
            },

            // Targeted merge: only the `followUp` key changes, sibling
            // fields of the referral survive. A missing or non-object
            // referral degrades to an object holding only `followUp`.
            ReferralsSignal::FollowUpSaved { payload } => {
                let mut fields = match state.referral {
                    Some(Value::Object(fields)) => fields,
                    _ => Map::new(),
                };
                fields.insert("followUp".to_string(), payload);
                ReferralsState {
                    referrals: state.referrals,
                    referral: Some(Value::Object(fields)),
                    is_loading: false,
                    fetch_failed: state.fetch_failed,
                }
            }

            ReferralsSignal::DetailFailed
            | ReferralsSignal::ListFailed
            | ReferralsSignal::FollowUpFailed => ReferralsState {
                is_loading: false,
                fetch_failed: true,
                ..state
            },
        }
    }
}
