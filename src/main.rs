use swxmon_service::{logging, Aggregator, Config};
use tracing::info;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    logging::init(config.verbose);

    let run_once = std::env::args().any(|arg| arg == "--once");
    let interval = config.refresh_interval();
    info!(
        live = config.enable_live_providers,
        interval_secs = interval.as_secs(),
        run_once,
        "starting space weather monitor"
    );

    let mut aggregator = Aggregator::new(config);
    loop {
        let snapshot = aggregator.refresh().await;
        if run_once {
            // Print the snapshot for piping into other tools; the periodic
            // service only logs.
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(err) => tracing::error!(%err, "snapshot serialization failed"),
            }
            break;
        }
        tokio::time::sleep(interval).await;
    }
}
