/// Toast/snackbar sink provided by the UI shell. Fire-and-forget.
#[async_trait::async_trait]
pub trait NotificationPort: Send + Sync {
    async fn notify(&self, message: &str);
}
