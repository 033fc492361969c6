//! Engine for the interactive mentorship guides: selection state, progress,
//! turnover/ROI and effort formulas, and the CRM/analytics seams.

pub mod calculations;
pub mod canonical;
pub mod lead;
pub mod models;
pub mod progress;
pub mod sinks;
pub mod store;

pub use canonical::CanonicalSelection;
pub use lead::{LeadContext, LeadSubmission};
pub use models::*;
pub use sinks::{EventSink, GuideEvent, LeadSink, LeadSinkError};
pub use store::{SelectionStore, SubmitOutcome};
