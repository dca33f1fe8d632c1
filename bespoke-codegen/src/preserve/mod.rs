//! Preservation of hand-authored regions across regenerations.
//!
//! - [`Markers`] - sentinel comment lines around each bespoke region
//! - [`extract`] - reads a previous file into a [`PreservationStore`]

mod extract;
mod markers;

pub use extract::{PreservationStore, extract};
pub use markers::{MARKER_TAG, Marker, MarkerKind, Markers};
