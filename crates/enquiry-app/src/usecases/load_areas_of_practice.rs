//! Use case for loading the areas-of-practice taxonomy.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use enquiry_core::enquiry::AreaOfPractice;
use enquiry_core::ports::{AreasOfPracticePort, LookupError};

/// Fetches the enquiry topic list. Invoked once on wizard mount.
pub struct LoadAreasOfPractice {
    areas: Arc<dyn AreasOfPracticePort>,
}

impl LoadAreasOfPractice {
    pub fn new(areas: Arc<dyn AreasOfPracticePort>) -> Self {
        Self { areas }
    }

    pub async fn execute(&self) -> Result<Vec<AreaOfPractice>, LookupError> {
        let span = info_span!("usecase.load_areas_of_practice.execute");
        async {
            let areas = self.areas.load().await?;
            info!(count = areas.len(), "areas of practice loaded");
            Ok(areas)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAreasPort {
        areas: Vec<AreaOfPractice>,
    }

    #[async_trait::async_trait]
    impl AreasOfPracticePort for FixedAreasPort {
        async fn load(&self) -> Result<Vec<AreaOfPractice>, LookupError> {
            Ok(self.areas.clone())
        }
    }

    struct FailingAreasPort;

    #[async_trait::async_trait]
    impl AreasOfPracticePort for FailingAreasPort {
        async fn load(&self) -> Result<Vec<AreaOfPractice>, LookupError> {
            Err(LookupError::Transport("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn returns_the_loaded_list() {
        let use_case = LoadAreasOfPractice::new(Arc::new(FixedAreasPort {
            areas: vec![AreaOfPractice {
                id: "employment".into(),
                name: "Employment".into(),
            }],
        }));

        let areas = use_case.execute().await.unwrap();

        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].id, "employment");
    }

    #[tokio::test]
    async fn propagates_lookup_failures() {
        let use_case = LoadAreasOfPractice::new(Arc::new(FailingAreasPort));

        let result = use_case.execute().await;

        assert!(matches!(result, Err(LookupError::Transport(_))));
    }
}
