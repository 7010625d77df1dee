use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Disposition of anchors whose href cannot be resolved into an absolute URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedHrefPolicy {
    /// Drop the offending anchor, keep the rest of the snapshot
    #[default]
    Skip,

    /// Abort the whole snapshot with the resolution error
    Fail,
}

/// Configuration for page snapshot capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum seconds for one capture (navigation plus in-page read)
    #[serde(default = "default_capture_timeout_secs")]
    pub capture_timeout_secs: u64,

    /// What to do with anchors whose href does not resolve
    #[serde(default)]
    pub malformed_hrefs: MalformedHrefPolicy,
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for capture_timeout_secs
fn default_capture_timeout_secs() -> u64 {
    45
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            capture_timeout_secs: default_capture_timeout_secs(),
            malformed_hrefs: MalformedHrefPolicy::default(),
        }
    }
}

impl SnapshotConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the WebDriver endpoint
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    /// Set the overall capture timeout in seconds
    pub fn with_capture_timeout(mut self, secs: u64) -> Self {
        self.capture_timeout_secs = secs;
        self
    }

    /// Set the malformed-href disposition
    pub fn with_malformed_hrefs(mut self, policy: MalformedHrefPolicy) -> Self {
        self.malformed_hrefs = policy;
        self
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
