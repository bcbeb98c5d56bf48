use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use business::domain::cart::use_cases::clean_expired::{
    CleanExpiredCartsParams, CleanExpiredCartsUseCase,
};

/// Runs the stale cart sweep every `interval`, starting immediately.
pub fn spawn(use_case: Arc<dyn CleanExpiredCartsUseCase>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            run_once(use_case.as_ref()).await;
        }
    })
}

async fn run_once(use_case: &dyn CleanExpiredCartsUseCase) {
    let params = CleanExpiredCartsParams { now: Utc::now() };
    if let Err(e) = use_case.execute(params).await {
        tracing::error!("Stale cart sweep failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::cart::errors::CartError;
    use business::domain::errors::RepositoryError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSweep {
        runs: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl CleanExpiredCartsUseCase for CountingSweep {
        async fn execute(&self, _params: CleanExpiredCartsParams) -> Result<u64, CartError> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(CartError::Repository(RepositoryError::DatabaseError))
            } else {
                Ok(2)
            }
        }
    }

    #[tokio::test]
    async fn should_keep_running_after_a_failed_sweep() {
        let sweep = CountingSweep {
            runs: AtomicUsize::new(0),
            fail: true,
        };

        run_once(&sweep).await;
        run_once(&sweep).await;

        assert_eq!(sweep.runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn should_sweep_on_first_tick() {
        let sweep = Arc::new(CountingSweep {
            runs: AtomicUsize::new(0),
            fail: false,
        });

        let handle = spawn(sweep.clone(), Duration::from_secs(3600));
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();

        assert_eq!(sweep.runs.load(Ordering::SeqCst), 1);
    }
}
