use fantoccini::{Client, ClientBuilder};
use serde::Deserialize;
use tokio::time::timeout;
use url::Url;

use crate::config::SnapshotConfig;
use crate::error::SnapshotError;
use crate::extract;
use crate::results::Snapshot;

use super::{DomSnapshot, RawAnchor};

/// In-page capture script, evaluated once per snapshot.
///
/// A raw read only: attribute values, text content, viewport geometry, and
/// page state come back exactly as the document reports them. All
/// normalization and validation happens on the Rust side.
const CAPTURE_SCRIPT: &str = r#"
    const article = document.querySelector("article");
    const anchors = Array.from(document.body.querySelectorAll("a[href]"))
        .filter(a => (a.getAttribute("href") || "") !== "")
        .map(a => {
            const rect = a.getBoundingClientRect();
            return {
                attributes: Object.fromEntries(
                    Array.from(a.attributes).map(at => [at.name, at.value])
                ),
                text: a.textContent || "",
                rect: { x: rect.x, y: rect.y, width: rect.width, height: rect.height },
                in_article: article !== null && article.contains(a)
            };
        });
    return {
        base_url: document.baseURI,
        title: document.title,
        charset: document.characterSet,
        width: document.documentElement.scrollWidth,
        height: document.documentElement.scrollHeight,
        scroll_x: window.scrollX,
        scroll_y: window.scrollY,
        has_article: article !== null,
        anchors: anchors
    };
"#;

/// Wire shape of the capture script's return value.
#[derive(Debug, Deserialize)]
struct CapturedPage {
    base_url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    charset: String,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    scroll_x: f64,
    #[serde(default)]
    scroll_y: f64,
    #[serde(default)]
    has_article: bool,
    #[serde(default)]
    anchors: Vec<RawAnchor>,
}

impl TryFrom<CapturedPage> for DomSnapshot {
    type Error = SnapshotError;

    fn try_from(page: CapturedPage) -> Result<Self, SnapshotError> {
        let base = Url::parse(&page.base_url)?;
        Ok(DomSnapshot {
            base,
            title: page.title,
            charset: page.charset,
            content_size: (page.width, page.height),
            scroll: (page.scroll_x, page.scroll_y),
            has_article: page.has_article,
            anchors: page.anchors,
        })
    }
}

/// Reads the raw DOM state of the page currently loaded in `client`.
pub async fn capture_document(client: &Client) -> Result<DomSnapshot, SnapshotError> {
    let value = client.execute(CAPTURE_SCRIPT, vec![]).await?;
    let page: CapturedPage = serde_json::from_value(value)?;
    page.try_into()
}

/// Captures page snapshots over a WebDriver session.
pub struct Snapshotter {
    config: SnapshotConfig,
}

impl Snapshotter {
    /// Create a snapshotter with the given configuration
    pub fn new(config: SnapshotConfig) -> Self {
        Self { config }
    }

    /// Connects to the WebDriver instance named by the configuration.
    pub async fn connect(&self) -> Result<Client, SnapshotError> {
        match ClientBuilder::native()
            .connect(&self.config.webdriver_url)
            .await
        {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", self.config.webdriver_url);
                Ok(client)
            }
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    self.config.webdriver_url,
                    e
                );
                Err(e.into())
            }
        }
    }

    /// Navigates a fresh WebDriver session to `url` and snapshots the loaded
    /// page. The session is closed afterwards regardless of the outcome.
    pub async fn capture(&self, url: &str) -> Result<Snapshot, SnapshotError> {
        let client = self.connect().await?;
        let result = self.capture_with(&client, url).await;

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }

        result
    }

    /// Navigates an existing session to `url` and snapshots the loaded page.
    ///
    /// Navigation plus the in-page read share one overall time budget; a
    /// page that never settles surfaces as [`SnapshotError::Timeout`].
    pub async fn capture_with(&self, client: &Client, url: &str) -> Result<Snapshot, SnapshotError> {
        ::log::debug!("Capturing snapshot of: {}", url);

        let budget = std::time::Duration::from_secs(self.config.capture_timeout_secs);
        let dom = timeout(budget, async {
            client.goto(url).await?;
            capture_document(client).await
        })
        .await
        .map_err(|_| {
            ::log::error!("Timeout capturing: {}", url);
            SnapshotError::Timeout(self.config.capture_timeout_secs)
        })??;

        extract::snapshot(&dom, self.config.malformed_hrefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_decode() {
        let value = json!({
            "base_url": "https://example.com/news/",
            "title": "Front page",
            "charset": "UTF-8",
            "width": 1280.0,
            "height": 5000.0,
            "scroll_x": 0.0,
            "scroll_y": 600.0,
            "has_article": true,
            "anchors": [{
                "attributes": {"href": "/story", "rel": "bookmark"},
                "text": "A story",
                "rect": {"x": 10.2, "y": 20.8, "width": 100.0, "height": 16.0},
                "in_article": true
            }]
        });

        let page: CapturedPage = serde_json::from_value(value).unwrap();
        let dom = DomSnapshot::try_from(page).unwrap();

        assert_eq!(dom.base.as_str(), "https://example.com/news/");
        assert_eq!(dom.scroll, (0.0, 600.0));
        assert!(dom.has_article);
        assert_eq!(dom.anchors.len(), 1);
        assert!(dom.anchors[0].in_article);
        assert_eq!(dom.anchors[0].attributes["href"], "/story");
    }

    #[test]
    fn test_wire_decode_fills_defaults() {
        let value = json!({"base_url": "https://example.com/"});
        let page: CapturedPage = serde_json::from_value(value).unwrap();
        let dom = DomSnapshot::try_from(page).unwrap();

        assert!(dom.anchors.is_empty());
        assert_eq!(dom.content_size, (0.0, 0.0));
        assert!(!dom.has_article);
    }

    #[test]
    fn test_bad_base_uri_is_an_error() {
        let value = json!({"base_url": "no/scheme/here"});
        let page: CapturedPage = serde_json::from_value(value).unwrap();
        assert!(DomSnapshot::try_from(page).is_err());
    }
}
