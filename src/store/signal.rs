//! Base trait for lifecycle signals.

use std::fmt::Debug;

/// Marker trait for lifecycle signal objects.
///
/// Signals represent the stages of one asynchronous operation:
/// - the request was started
/// - the request succeeded, carrying the response payload
/// - the request failed
///
/// Signals are cloned when fanned out to several reducers and may be
/// logged, hence the `Clone + Debug` bounds.
pub trait Signal: Clone + Debug + Send + 'static {}
