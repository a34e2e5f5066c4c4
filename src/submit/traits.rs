//! Trait abstraction for form submission to enable mocking in tests

use super::Submission;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a submitter. The simulated submitter never fails.
#[derive(Debug, Error)]
#[allow(dead_code)] // Constructed by real backends behind `Submitter`
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission could not be delivered: {0}")]
    Transport(String),
}

/// Sends a validated submission somewhere
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver the submission; resolves once the round-trip is over
    async fn submit(&self, submission: Submission) -> Result<(), SubmitError>;
}
