//! Submission seam
//!
//! Forms hand a [`Submission`] to a [`Submitter`]. The default submitter
//! only waits and logs; a real backend plugs in behind the same trait.

mod simulated;
mod submission;
mod traits;

pub use simulated::SimulatedSubmitter;
pub use submission::Submission;
pub use traits::{SubmitError, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;
