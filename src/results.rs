use serde::{Deserialize, Serialize};

/// Bounding box of an anchor in page (document) coordinates.
///
/// Values are viewport-relative pixels offset by the scroll position at
/// capture time, rounded to the nearest integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// A canonical, size-bounded record built from a single anchor element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorRecord {
    /// One-line anchor text (falls back to the title attribute when empty)
    pub text: String,

    /// Canonical absolute URL (query parameters sorted, punycode host)
    pub href: String,

    /// Lower-cased, space-separated relation tokens
    pub rel: String,

    /// Space-separated flags drawn from "inarticle" and "newtab"
    pub flags: String,

    /// Geometry in page coordinates
    pub rect: Rect,
}

/// Page-level metadata captured once per snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Document title as reported by the host environment
    pub title: String,

    /// Full scrollable content width in pixels (not just the viewport)
    pub width: i64,

    /// Full scrollable content height in pixels
    pub height: i64,

    /// Detected character encoding
    pub charset: String,
}

/// The sole output value of one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Page metadata
    pub meta: PageMeta,

    /// Valid anchor records, in document order (duplicates preserved)
    pub anchors: Vec<AnchorRecord>,
}
