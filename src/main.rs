use clap::Parser;
use page_snap::{SnapshotConfig, Snapshotter};

mod args;
use args::{Args, convert_malformed_policy};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Snapshotting page: {}", args.url);

    let mut config = match &args.config {
        Some(path) => match SnapshotConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => SnapshotConfig::new(),
    };

    // WebDriver endpoint priority: explicit flag, then environment, then
    // config file (or its default).
    if let Some(url) = &args.webdriver_url {
        config.webdriver_url = url.clone();
    } else if let Ok(url) = std::env::var("WEBDRIVER_URL") {
        if !url.is_empty() {
            config.webdriver_url = url;
        }
    }
    if let Some(policy) = args.malformed_hrefs {
        config.malformed_hrefs = convert_malformed_policy(policy);
    }
    if let Some(secs) = args.timeout {
        config.capture_timeout_secs = secs;
    }

    let start_time = std::time::Instant::now();
    let snapshotter = Snapshotter::new(config);

    match snapshotter.capture(&args.url).await {
        Ok(snapshot) => {
            ::log::info!(
                "Captured {} anchors in {:.2} seconds",
                snapshot.anchors.len(),
                start_time.elapsed().as_secs_f64()
            );

            let json = if args.pretty {
                serde_json::to_string_pretty(&snapshot)
            } else {
                serde_json::to_string(&snapshot)
            };
            match json {
                Ok(out) => println!("{}", out),
                Err(e) => {
                    ::log::error!("Failed to serialize snapshot: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            ::log::error!("Failed to capture {}: {}", args.url, e);
            std::process::exit(1);
        }
    }
}
