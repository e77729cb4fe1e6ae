use crate::enquiry::AreaOfPractice;
use crate::ports::LookupError;

/// Fetches the areas-of-practice taxonomy, once per wizard instance.
#[async_trait::async_trait]
pub trait AreasOfPracticePort: Send + Sync {
    async fn load(&self) -> Result<Vec<AreaOfPractice>, LookupError>;
}
