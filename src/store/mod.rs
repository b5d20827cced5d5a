//! Unidirectional data-flow primitives.
//!
//! This module provides the base traits for the request-lifecycle state
//! model and the generic slice container.
//!
//! - **State**: immutable per-resource view model
//! - **Signal**: lifecycle events (requested / succeeded / failed)
//! - **Reducer**: pure function that transforms state based on signals
//! - **Store**: thread-safe container funneling all transitions through
//!   one serial dispatch path

mod handle;
mod reducer;
mod signal;
mod state;

pub use handle::Store;
pub use reducer::Reducer;
pub use signal::Signal;
pub use state::{Phase, ResourceState};
