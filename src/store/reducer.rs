//! Reducer trait for the unidirectional flow.

use super::signal::Signal;
use super::state::ResourceState;

/// Reducer transforms state based on signals.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Signal) -> State
pub trait Reducer {
    /// The state slice this reducer operates on.
    type State: ResourceState;

    /// The signal type this reducer handles.
    type Signal: Signal;

    /// Process a signal and return the new state.
    ///
    /// This should be a pure function with no side effects. Signals
    /// that do not concern this slice must return the state unchanged.
    fn reduce(state: Self::State, signal: Self::Signal) -> Self::State;
}
