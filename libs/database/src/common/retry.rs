use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff for the startup connection
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts after the first one
    pub retries: u32,
    pub initial_delay: Duration,
    /// The delay doubles after each failure up to this cap
    pub max_delay: Duration,
}

/// Run `operation` until it succeeds or `config.retries` retries have failed.
///
/// Each wait is jittered to between half and all of the nominal delay.
/// The last error is returned unchanged.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut delay = config.initial_delay;
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= config.retries => {
                warn!(attempts = attempt + 1, error = %e, "Giving up");
                return Err(e);
            }
            Err(e) => {
                let wait = jitter(delay);
                debug!(
                    attempt = attempt + 1,
                    wait_ms = wait.as_millis() as u64,
                    error = %e,
                    "Retrying"
                );
                tokio::time::sleep(wait).await;
                delay = (delay * 2).min(config.max_delay);
                attempt += 1;
            }
        }
    }
}

fn jitter(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let percent = 50 + RandomState::new().hash_one(std::time::Instant::now()) % 51;
    delay * percent as u32 / 100
}
