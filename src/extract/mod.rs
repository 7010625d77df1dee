//! The anchor normalization and validation pipeline.
//!
//! Pure and synchronous: every function here is a function of the document
//! it is handed (plus the malformed-href policy) and produces the same
//! output for the same input. No I/O, no DOM mutation, no retained state.

pub mod anchor;
pub mod text;
pub mod urlcanon;

#[cfg(test)]
mod tests;

use crate::config::MalformedHrefPolicy;
use crate::documents::DocumentLike;
use crate::error::SnapshotError;
use crate::results::{AnchorRecord, PageMeta, Snapshot};

pub use anchor::{make_anchor, validate_anchor};
pub use text::{normalize_whitespace, squash_whitespace};

/// Captures page-level metadata.
///
/// Values pass through as reported by the document; only the content
/// dimensions are rounded to integer pixels.
pub fn collect_meta<D: DocumentLike>(doc: &D) -> PageMeta {
    let (width, height) = doc.content_size();
    PageMeta {
        title: doc.title(),
        width: width.round() as i64,
        height: height.round() as i64,
        charset: doc.charset(),
    }
}

/// Builds and validates a record for every anchor in the document, in
/// document order.
///
/// Anchors failing validation are silently excluded. Anchors whose href does
/// not resolve are dropped or abort the call, depending on `policy`.
/// Duplicates (including several anchors pointing at the same href) are
/// preserved.
pub fn collect_anchors<D: DocumentLike>(
    doc: &D,
    policy: MalformedHrefPolicy,
) -> Result<Vec<AnchorRecord>, SnapshotError> {
    let article = doc.article_element();
    let mut records = Vec::new();

    for elem in doc.anchor_elements() {
        match anchor::make_anchor(doc, elem, article) {
            Ok(record) => {
                if anchor::validate_anchor(&record) {
                    records.push(record);
                }
            }
            Err(e) => match policy {
                MalformedHrefPolicy::Skip => {
                    ::log::debug!("Dropping anchor: {}", e);
                }
                MalformedHrefPolicy::Fail => return Err(e),
            },
        }
    }

    Ok(records)
}

/// Produces the full snapshot for one document: page metadata plus the
/// ordered sequence of valid anchor records.
pub fn snapshot<D: DocumentLike>(
    doc: &D,
    policy: MalformedHrefPolicy,
) -> Result<Snapshot, SnapshotError> {
    Ok(Snapshot {
        meta: collect_meta(doc),
        anchors: collect_anchors(doc, policy)?,
    })
}
