//! Base trait for per-resource state slices.

/// Marker trait for resource state slices.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data a view needs to render the resource)
/// - Comparable (PartialEq for detecting changes)
pub trait ResourceState: Clone + PartialEq + Default + Send + 'static {}

/// Coarse request-lifecycle phase derived from a state slice.
///
/// The phase is a projection of the slice's flags and data fields, not
/// stored state: `Loading` while a request is in flight, `Errored` when
/// the last request failed, `Ready` once data has arrived, `Idle`
/// before the first request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Errored,
}
