//! The size-selection query engine.

use crate::catalog::Catalog;

/// The core query engine: resolves `(name, width, height)` requests into
/// ready-to-embed markup.
///
/// A selector borrows its [`Catalog`] for the whole of its lifetime and
/// holds no other state, so [`render`](Selector::render) is a pure function
/// of the catalog and its arguments. Since the catalog is immutable, any
/// number of threads may query one selector, or many copies of it, at once.
#[derive(Clone, Copy, Debug)]
pub struct Selector<'a> {
    catalog: &'a Catalog,
}

impl<'a> Selector<'a> {
    pub fn new(catalog: &'a Catalog) -> Selector<'a> {
        Selector { catalog }
    }

    /// The catalog this selector reads from.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Resolve a request into complete markup, or `None` for an unknown
    /// icon name. An unknown name is a normal outcome, not a fault.
    ///
    /// Selection only considers the requested height: the chosen rendition
    /// is the first whose natural height is at least `height`, falling back
    /// to the tallest one when the request is larger than anything
    /// available. Both requested dimensions are then substituted verbatim
    /// into the chosen template, width first; no validation is applied to
    /// them.
    pub fn render(&self, name: &str, width: i32, height: i32) -> Option<String> {
        let entry = self.catalog.get(name)?;
        Some(entry.select(height).fill(width, height))
    }
}
