//! Node matchers.
//!
//! A [`Matcher`] is a named, stateless predicate over an element of a parsed
//! page. Matchers look at the tag name, attributes, rendered text, and the
//! parent/grandparent elements. The helpers in this module make the ancestor
//! checks safe when an ancestor is missing: the element directly under the
//! document root simply has no parent element.

use std::fmt;

use scraper::ElementRef;

/// Predicate signature shared by all matchers.
pub type Predicate = fn(&ElementRef<'_>) -> bool;

/// A named node predicate.
///
/// Matchers are plain function pointers, so they are `Copy` and can live in
/// `const` recipe tables.
#[derive(Clone, Copy)]
pub struct Matcher {
    name: &'static str,
    predicate: Predicate,
}

impl Matcher {
    /// Creates a matcher from a description and a predicate.
    pub const fn new(name: &'static str, predicate: Predicate) -> Self {
        Self { name, predicate }
    }

    /// Short human description used in log output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `element` is selected by this matcher.
    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        (self.predicate)(element)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Matcher").field(&self.name).finish()
    }
}

/// Whether the element has the given (lowercase) tag name.
pub fn is_tag(element: &ElementRef<'_>, tag: &str) -> bool {
    element.value().name() == tag
}

pub fn is_anchor(element: &ElementRef<'_>) -> bool {
    is_tag(element, "a")
}

/// The parent element, or `None` at the top of the tree.
pub fn parent<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.parent().and_then(ElementRef::wrap)
}

/// The parent's parent element, or `None` when either is absent.
pub fn grandparent<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    parent(element).and_then(|p| parent(&p))
}

/// Attribute value, with a missing attribute reading as the empty string.
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> &'a str {
    element.value().attr(name).unwrap_or("")
}

/// Whole-string comparison of the `class` attribute.
pub fn class_is(element: Option<ElementRef<'_>>, class: &str) -> bool {
    element.is_some_and(|el| attr(&el, "class") == class)
}

/// Substring test on the `class` attribute.
pub fn class_contains(element: Option<ElementRef<'_>>, needle: &str) -> bool {
    element.is_some_and(|el| attr(&el, "class").contains(needle))
}

/// Rendered text of an element.
///
/// Descendant text nodes are trimmed, empty ones are dropped, and the rest
/// are joined with a single space, so `<a> [PDF] </a>` reads as `[PDF]`.
pub fn text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
