mod actions;
mod reducer;
mod signal;
mod state;

pub use actions::{fetch_referral, fetch_referrals, update_follow_up};
pub use reducer::ReferralsReducer;
pub use signal::ReferralsSignal;
pub use state::ReferralsState;
