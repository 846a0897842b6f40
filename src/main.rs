mod waiter;

use waiter::{wait_random, DEFAULT_MAX_DELAY};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let max_delay = args
        .windows(2)
        .find(|w| w[0] == "--max-delay")
        .map(|w| w[1].parse::<f64>())
        .transpose()?
        .unwrap_or(DEFAULT_MAX_DELAY);
    let delay = wait_random(max_delay).await;
    log::info!("waited for {:.3} seconds", delay);
    Ok(())
}
