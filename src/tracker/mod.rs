//! Progress tracking: completion rules and the caller-facing [`Tracker`].

pub mod completion;
pub mod service;

pub use completion::recompute;
pub use service::{NeededList, SetSummary, Tracker};
