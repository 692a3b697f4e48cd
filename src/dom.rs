//! Narrow query capability over a parsed markup tree.
//!
//! Extractors only ever talk to [`MarkupNode`]. The trait is implemented once for
//! [`scraper::ElementRef`], so the extraction rules stay independent of the
//! parser and can be exercised against any tree that offers these few queries.

use scraper::{ElementRef, Selector};

/// Read-only element handle with the handful of queries extraction needs.
pub trait MarkupNode: Copy + Sized {
    /// All descendants matching a CSS selector, in document order.
    ///
    /// An invalid selector matches nothing.
    fn select_all(&self, css: &str) -> Vec<Self>;

    /// Parent element, if any.
    fn parent_element(&self) -> Option<Self>;

    /// Direct child elements, in document order.
    fn child_elements(&self) -> Vec<Self>;

    /// The element immediately following this one among its siblings.
    fn next_element(&self) -> Option<Self>;

    /// Lower-case tag name.
    fn tag_name(&self) -> &str;

    /// Concatenated text of this element and all its descendants.
    fn text_content(&self) -> String;

    /// Value of an attribute.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Whether two handles point at the same element.
    fn same_element(&self, other: &Self) -> bool;

    /// First descendant matching a CSS selector.
    fn select_first(&self, css: &str) -> Option<Self> {
        self.select_all(css).into_iter().next()
    }

    /// Every other child element of this element's parent.
    fn sibling_elements(&self) -> Vec<Self> {
        let Some(parent) = self.parent_element() else {
            return Vec::new();
        };
        parent
            .child_elements()
            .into_iter()
            .filter(|child| !child.same_element(self))
            .collect()
    }

    /// Whether the `class` attribute contains a class starting with `prefix`.
    fn has_class_prefix(&self, prefix: &str) -> bool {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().any(|c| c.starts_with(prefix)))
            .unwrap_or(false)
    }
}

impl<'a> MarkupNode for ElementRef<'a> {
    fn select_all(&self, css: &str) -> Vec<Self> {
        match Selector::parse(css) {
            Ok(selector) => self.select(&selector).collect(),
            Err(e) => {
                log::warn!("Ignoring invalid selector '{css}': {e}");
                Vec::new()
            }
        }
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn child_elements(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn next_element(&self) -> Option<Self> {
        self.next_siblings().find_map(ElementRef::wrap)
    }

    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn text_content(&self) -> String {
        self.text().collect::<String>()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn same_element(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Whether the element starts a new document section.
pub fn is_heading<N: MarkupNode>(node: &N) -> bool {
    matches!(node.tag_name(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
        || node.has_class_prefix("mw-heading")
}

/// Find the first `tag` element that follows the section anchor `anchor_id`.
///
/// Wiki markup puts the anchor id either on a `<span>` inside the heading or on
/// the heading itself, which may in turn be wrapped in a `<div class="mw-heading">`.
/// The following siblings of the anchor are searched first, then those of its
/// parent when the anchor sits inside the heading. The search stops at the next
/// heading so a later section's element is never picked up.
pub fn section_element<N: MarkupNode>(root: N, anchor_id: &str, tag: &str) -> Option<N> {
    let anchor = root.select_first(&format!("[id=\"{anchor_id}\"]"))?;

    let mut scopes = vec![anchor];
    if let Some(parent) = anchor.parent_element() {
        // a bare heading anchor owns its section; its parent is the page body
        if !is_heading(&anchor) || is_heading(&parent) {
            scopes.push(parent);
        }
    }

    for start in scopes {
        let mut current = start.next_element();
        while let Some(node) = current {
            if node.tag_name() == tag {
                return Some(node);
            }
            if is_heading(&node) {
                break;
            }
            current = node.next_element();
        }
    }

    log::debug!("No <{tag}> found after section '{anchor_id}'");
    None
}
