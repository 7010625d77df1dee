use crate::documents::DocumentLike;
use crate::error::SnapshotError;
use crate::results::{AnchorRecord, Rect};

use super::text::squash_whitespace;
use super::urlcanon;

/// Maximum anchor text length, in characters.
pub const ANCHOR_TEXT_MAX_LEN: usize = 1024;

/// Maximum canonical href length, in characters.
pub const ANCHOR_HREF_MAX_LEN: usize = 2048;

/// Maximum rel length, in characters.
pub const ANCHOR_REL_MAX_LEN: usize = 128;

/// Builds a canonical anchor record from one anchor element.
///
/// Geometry is converted from viewport to page coordinates by adding the
/// current scroll offsets, then rounded per field. Flags are emitted in a
/// fixed order: `inarticle` (element sits inside `article`'s subtree) before
/// `newtab` (`target` squashes to `_blank`, case-insensitively). Anchor text
/// falls back to the `title` attribute when the element renders no text.
///
/// Fails only when the raw `href` cannot be resolved against the document
/// base URL; the caller decides whether that drops the anchor or the whole
/// snapshot.
pub fn make_anchor<D: DocumentLike>(
    doc: &D,
    elem: D::Elem,
    article: Option<D::Elem>,
) -> Result<AnchorRecord, SnapshotError> {
    let view = doc.bounding_rect(elem);
    let (scroll_x, scroll_y) = doc.scroll_offset();

    let mut flags: Vec<&str> = Vec::new();
    if let Some(article) = article {
        if doc.contains(article, elem) {
            flags.push("inarticle");
        }
    }
    let target = squash_whitespace(&doc.attr(elem, "target").unwrap_or_default());
    if target.to_lowercase() == "_blank" {
        flags.push("newtab");
    }

    let mut text = squash_whitespace(&doc.text_content(elem));
    if text.is_empty() {
        text = squash_whitespace(&doc.attr(elem, "title").unwrap_or_default());
    }

    let raw_href = doc.attr(elem, "href").unwrap_or_default();
    let href = urlcanon::canonicalize(&raw_href, doc.base_url())
        .map_err(|source| SnapshotError::MalformedHref {
            href: raw_href,
            source,
        })?;

    // Commas separate rel tokens just like whitespace does; squashing after
    // the replacement collapses any resulting runs.
    let rel = squash_whitespace(&doc.attr(elem, "rel").unwrap_or_default().replace(',', " "))
        .to_lowercase();

    Ok(AnchorRecord {
        text,
        href: href.to_string(),
        rel,
        flags: flags.join(" "),
        rect: Rect {
            x: (view.x + scroll_x).round() as i64,
            y: (view.y + scroll_y).round() as i64,
            width: view.width.round() as i64,
            height: view.height.round() as i64,
        },
    })
}

/// Returns whether an anchor record satisfies the size and safety
/// constraints.
///
/// Length caps are counted in characters, not bytes. A pure predicate: used
/// strictly as a filter, never as an error path.
pub fn validate_anchor(anchor: &AnchorRecord) -> bool {
    if anchor.text.chars().count() > ANCHOR_TEXT_MAX_LEN {
        return false;
    }
    let href_len = anchor.href.chars().count();
    if href_len == 0 || href_len > ANCHOR_HREF_MAX_LEN {
        return false;
    }
    if anchor.rel.chars().count() > ANCHOR_REL_MAX_LEN {
        return false;
    }
    if anchor.href.starts_with("javascript:") {
        return false;
    }
    true
}
