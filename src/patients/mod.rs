mod actions;
mod reducer;
mod signal;
mod state;

pub use actions::fetch_patients;
pub use reducer::PatientsReducer;
pub use signal::PatientsSignal;
pub use state::PatientsState;
