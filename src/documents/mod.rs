//! Read-only document access for the extraction pipeline.
//!
//! The pipeline never touches a rendering engine directly: it reads documents
//! through the narrow [`DocumentLike`] capability, so the same code runs
//! against a live WebDriver capture, a parsed HTML string, or a synthetic
//! document in tests.

pub mod parsed;
pub mod webdriver;

use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

/// Bounding box in viewport coordinates, as reported by the host environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ViewRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Narrow read-only view of a loaded document.
///
/// Exposes exactly what the extraction pipeline needs: anchor element query,
/// attribute and text reads, bounding geometry, scroll offsets, base-URL
/// access, and the containment test behind the "inarticle" flag. Element
/// handles are opaque and only valid for the document that produced them.
pub trait DocumentLike {
    type Elem: Copy;

    /// Base URL that relative hrefs resolve against.
    fn base_url(&self) -> &Url;

    /// Document title.
    fn title(&self) -> String;

    /// Detected character encoding.
    fn charset(&self) -> String;

    /// Full scrollable content size in pixels (width, height).
    fn content_size(&self) -> (f64, f64);

    /// Current scroll position (x, y).
    fn scroll_offset(&self) -> (f64, f64);

    /// Anchor elements carrying a non-empty `href` attribute, in document
    /// order, scoped to the body subtree.
    fn anchor_elements(&self) -> Vec<Self::Elem>;

    /// The designated article container, when the document has one.
    fn article_element(&self) -> Option<Self::Elem>;

    /// Raw attribute value, unnormalized.
    fn attr(&self, elem: Self::Elem, name: &str) -> Option<String>;

    /// Raw text content of the element's subtree.
    fn text_content(&self, elem: Self::Elem) -> String;

    /// Bounding rectangle in viewport coordinates.
    fn bounding_rect(&self, elem: Self::Elem) -> ViewRect;

    /// Whether `elem` sits inside `ancestor`'s subtree.
    fn contains(&self, ancestor: Self::Elem, elem: Self::Elem) -> bool;
}

/// Raw DOM state of one anchor element, exactly as read from the host
/// document. Normalization happens later, in the extraction pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAnchor {
    /// All attributes of the element, name to raw value
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// Raw text content
    #[serde(default)]
    pub text: String,

    /// Bounding rectangle in viewport coordinates
    #[serde(default)]
    pub rect: ViewRect,

    /// Whether the element sits inside the designated article container
    #[serde(default)]
    pub in_article: bool,
}

/// Element handle for [`DomSnapshot`] documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomHandle {
    /// The n-th captured anchor, in document order
    Anchor(usize),
    /// The designated article container
    Article,
}

/// Materialized state of one loaded document.
///
/// This is the explicit context value the pipeline runs over instead of
/// ambient document/window globals. Both backends produce it: the WebDriver
/// capture deserializes one from the in-page script, and the parsed backend
/// builds one from an HTML string. Immutable once built.
#[derive(Debug, Clone)]
pub struct DomSnapshot {
    /// Base URL relative hrefs resolve against
    pub base: Url,

    /// Document title
    pub title: String,

    /// Character encoding reported by the document
    pub charset: String,

    /// Full scrollable content size (width, height)
    pub content_size: (f64, f64),

    /// Scroll position at capture time (x, y)
    pub scroll: (f64, f64),

    /// Whether the document has a designated article container
    pub has_article: bool,

    /// Anchor elements with a non-empty href, in document order
    pub anchors: Vec<RawAnchor>,
}

impl DomSnapshot {
    /// Creates an empty snapshot for the given base URL.
    pub fn new(base: Url) -> Self {
        Self {
            base,
            title: String::new(),
            charset: String::new(),
            content_size: (0.0, 0.0),
            scroll: (0.0, 0.0),
            has_article: false,
            anchors: Vec::new(),
        }
    }

    fn anchor(&self, handle: DomHandle) -> Option<&RawAnchor> {
        match handle {
            DomHandle::Anchor(i) => self.anchors.get(i),
            DomHandle::Article => None,
        }
    }
}

impl DocumentLike for DomSnapshot {
    type Elem = DomHandle;

    fn base_url(&self) -> &Url {
        &self.base
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn charset(&self) -> String {
        self.charset.clone()
    }

    fn content_size(&self) -> (f64, f64) {
        self.content_size
    }

    fn scroll_offset(&self) -> (f64, f64) {
        self.scroll
    }

    fn anchor_elements(&self) -> Vec<DomHandle> {
        (0..self.anchors.len()).map(DomHandle::Anchor).collect()
    }

    fn article_element(&self) -> Option<DomHandle> {
        self.has_article.then_some(DomHandle::Article)
    }

    fn attr(&self, elem: DomHandle, name: &str) -> Option<String> {
        self.anchor(elem)
            .and_then(|a| a.attributes.get(name).cloned())
    }

    fn text_content(&self, elem: DomHandle) -> String {
        self.anchor(elem).map(|a| a.text.clone()).unwrap_or_default()
    }

    fn bounding_rect(&self, elem: DomHandle) -> ViewRect {
        self.anchor(elem).map(|a| a.rect).unwrap_or_default()
    }

    fn contains(&self, ancestor: DomHandle, elem: DomHandle) -> bool {
        // Containment is flattened at capture time: the only ancestor the
        // snapshot can answer for is the article container.
        match ancestor {
            DomHandle::Article => self.anchor(elem).map(|a| a.in_article).unwrap_or(false),
            DomHandle::Anchor(_) => false,
        }
    }
}
