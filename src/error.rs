use thiserror::Error;

/// Errors surfaced while capturing or extracting a page snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// An anchor's href could not be resolved against the page base URL.
    ///
    /// Whether this aborts the snapshot or only drops the anchor is decided
    /// by [`MalformedHrefPolicy`](crate::config::MalformedHrefPolicy).
    #[error("cannot resolve href {href:?} against the page base URL: {source}")]
    MalformedHref {
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// The document URL (or the base URI reported by the page) is not a
    /// valid absolute URL.
    #[error("invalid document URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A WebDriver session could not be established.
    #[error("failed to establish WebDriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    /// A WebDriver command (navigation or script evaluation) failed.
    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    /// The in-page capture returned data the wire schema does not match.
    #[error("page capture returned malformed data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The overall capture exceeded the configured time budget.
    #[error("page capture timed out after {0} seconds")]
    Timeout(u64),
}
