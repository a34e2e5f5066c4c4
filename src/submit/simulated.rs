//! Fixed-delay stand-in for a backend

use super::{Submission, SubmitError, Submitter};
use async_trait::async_trait;
use std::time::Duration;

/// Waits for a fixed delay, then writes the payload to the log
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Round-trip delay used when nothing is configured
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: Submission) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;

        match serde_json::to_string(&submission) {
            Ok(payload) => tracing::info!(
                form = submission.form,
                id = %submission.id,
                %payload,
                "Submission sent"
            ),
            Err(e) => tracing::warn!(form = submission.form, "Failed to encode submission: {e}"),
        }

        Ok(())
    }
}
