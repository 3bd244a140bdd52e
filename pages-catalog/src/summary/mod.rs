//! Run summary types and helpers.

mod capture_summary;
mod discovery_summary;
mod result;

pub use capture_summary::CaptureSummary;
pub use discovery_summary::DiscoverySummary;
pub use result::{CaptureResult, ProcessingResult};
