use std::time::Duration;

use rand::{rng, Rng};

/// Bound used by [`wait_random_default`].
pub const DEFAULT_MAX_DELAY: f64 = 10.0;

/// Sample a delay uniformly from `[0, max_delay)` seconds, suspend the
/// current task for that long, and return the sampled value.
///
/// The return value is the sampled delay, not the measured wall-clock time.
/// A `max_delay` of zero (or below) skips the suspension and returns `0.0`.
/// Cancelling the task during the suspension drops the future without
/// yielding a value.
pub async fn wait_random(max_delay: f64) -> f64 {
    let delay = sample_delay(max_delay);
    log::debug!("sampled delay of {:.3}s (bound {:.3}s)", delay, max_delay);
    if delay > 0.0 {
        tokio::time::sleep(Duration::from_secs_f64(delay)).await;
    }
    delay
}

/// [`wait_random`] with the default 10 second bound.
pub async fn wait_random_default() -> f64 {
    wait_random(DEFAULT_MAX_DELAY).await
}

fn sample_delay(max_delay: f64) -> f64 {
    // Degenerate or inverted interval: rand rejects an empty range.
    if max_delay <= 0.0 {
        return 0.0;
    }
    let mut rng = rng();
    rng.random_range(0.0..max_delay)
}
