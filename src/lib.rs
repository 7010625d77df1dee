//! Structured snapshots of a loaded web page's outbound links and metadata.
//!
//! The core of the crate is a pure extraction pipeline ([`extract`]) that
//! turns raw DOM anchor state into canonical, size-bounded records plus
//! page-level metadata. Documents reach the pipeline through the read-only
//! [`documents::DocumentLike`] capability, with two backends: a live
//! WebDriver capture ([`documents::webdriver`]) and an offline HTML parser
//! ([`documents::parsed`]).

// Re-export modules
pub mod config;
pub mod documents;
pub mod error;
pub mod extract;
pub mod results;

// Re-export commonly used types for convenience
pub use config::{MalformedHrefPolicy, SnapshotConfig};
pub use documents::webdriver::Snapshotter;
pub use documents::{DocumentLike, DomSnapshot};
pub use error::SnapshotError;
pub use results::{AnchorRecord, PageMeta, Rect, Snapshot};
