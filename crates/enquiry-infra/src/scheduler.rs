//! Stage-transition scheduling policy.

use std::time::Duration;

use enquiry_core::ports::StageSchedulerPort;

/// Delay applied to the blank state between stages, long enough for the
/// exit/enter animation to play.
pub const STAGE_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Scheduler that settles stage transitions after a fixed delay.
pub struct FixedDelayScheduler {
    delay: Duration,
}

impl FixedDelayScheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelayScheduler {
    fn default() -> Self {
        Self::new(STAGE_SETTLE_DELAY)
    }
}

#[async_trait::async_trait]
impl StageSchedulerPort for FixedDelayScheduler {
    async fn stage_settle_delay(&self) {
        tokio::time::sleep(self.delay).await;
    }
}
