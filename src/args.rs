use clap::{Parser, ValueEnum};
use page_snap::MalformedHrefPolicy;

#[derive(Parser, Debug)]
#[command(name = "page-snap")]
#[command(about = "Snapshots a loaded page's outbound links and metadata as JSON")]
#[command(version)]
pub struct Args {
    /// URL of the page to snapshot
    pub url: String,

    /// WebDriver endpoint (falls back to WEBDRIVER_URL, then the config file)
    #[arg(short, long)]
    pub webdriver_url: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// What to do with anchors whose href does not resolve
    #[arg(short, long, value_enum)]
    pub malformed_hrefs: Option<MalformedHrefArg>,

    /// Overall capture timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MalformedHrefArg {
    /// Drop the offending anchor, keep the rest of the snapshot
    Skip,
    /// Abort the snapshot with the resolution error
    Fail,
}

/// Convert from CLI argument policy to internal policy
pub fn convert_malformed_policy(arg: MalformedHrefArg) -> MalformedHrefPolicy {
    match arg {
        MalformedHrefArg::Skip => MalformedHrefPolicy::Skip,
        MalformedHrefArg::Fail => MalformedHrefPolicy::Fail,
    }
}
