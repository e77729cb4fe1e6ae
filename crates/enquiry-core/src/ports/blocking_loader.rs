/// Blocking-loader surface toggled around the areas-of-practice load
/// and the submission call.
#[async_trait::async_trait]
pub trait BlockingLoaderPort: Send + Sync {
    async fn set_visible(&self, visible: bool);
}
