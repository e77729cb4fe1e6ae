/// Scheduling policy for the blank-state stage transition.
///
/// The UI layer applies the animation delay here; the state machine
/// itself stays delay-free. Tests inject a zero-delay implementation.
#[async_trait::async_trait]
pub trait StageSchedulerPort: Send + Sync {
    async fn stage_settle_delay(&self);
}
