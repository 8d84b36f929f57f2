//! The immutable icon catalog and its builder.

use std::collections::HashMap;

use crate::error::{new_error, Error, ErrorKind};
use crate::variant::Variant;

/// One icon's full set of available renditions, strictly ascending by
/// natural height.
#[derive(Clone, Debug)]
pub struct IconEntry {
    name: String,
    variants: Vec<Variant>,
}

impl IconEntry {
    fn new(name: String, mut variants: Vec<Variant>) -> Result<IconEntry, Error> {
        if name.is_empty() {
            return Err(new_error(ErrorKind::EmptyName));
        }
        if variants.is_empty() {
            return Err(new_error(ErrorKind::NoVariants(name)));
        }
        variants.sort_by_key(Variant::natural_height);
        if variants
            .windows(2)
            .any(|pair| pair[0].natural_height() == pair[1].natural_height())
        {
            return Err(new_error(ErrorKind::DuplicateHeight(name)));
        }
        Ok(IconEntry { name, variants })
    }

    /// The icon's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All renditions, ascending by natural height.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Select the best-fitting rendition for a requested height: the first
    /// whose natural height is at least the request, or the tallest one
    /// available when the request exceeds every natural height.
    ///
    /// The fallback never refuses an oversized request; callers always get
    /// the largest rendition there is. Width is not consulted.
    pub fn select(&self, requested_height: i32) -> &Variant {
        self.variants
            .iter()
            .find(|v| i64::from(v.natural_height()) >= i64::from(requested_height))
            // Entries are never empty, so the tallest rendition exists.
            .unwrap_or_else(|| &self.variants[self.variants.len() - 1])
    }
}

/// The complete, immutable, name-keyed collection of icon entries.
///
/// Built once through [`CatalogBuilder`] and never mutated afterwards, which
/// makes shared reads safe from any number of threads without locks.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: HashMap<String, IconEntry>,
}

impl Catalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Look up one icon's entry.
    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.entries.get(name)
    }

    /// Whether an icon of this name is available.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of icons in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &IconEntry> {
        let mut entries: Vec<&IconEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        entries.into_iter()
    }

    /// Resolve a request directly against the catalog.
    ///
    /// Identical semantics to [`Selector::render`](crate::Selector::render);
    /// the selector is the long-lived query handle, this is the one-off
    /// convenience.
    pub fn render(&self, name: &str, width: i32, height: i32) -> Option<String> {
        self.get(name)
            .map(|entry| entry.select(height).fill(width, height))
    }
}

/// Builder enforcing the catalog invariants at the construction boundary.
///
/// Rejecting bad data here is what lets the query path run without any
/// runtime checks: a finished [`Catalog`] contains no empty entries, no
/// duplicate names, and no duplicate heights within an entry.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: HashMap<String, IconEntry>,
}

impl CatalogBuilder {
    pub fn new() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Add one icon with its renditions.
    ///
    /// Variants may arrive in any order; they are sorted by natural height
    /// here. Duplicate heights and duplicate names are rejected.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        variants: Vec<Variant>,
    ) -> Result<&mut Self, Error> {
        let entry = IconEntry::new(name.into(), variants)?;
        if self.entries.contains_key(entry.name()) {
            return Err(new_error(ErrorKind::DuplicateIcon(entry.name().to_owned())));
        }
        self.entries.insert(entry.name().to_owned(), entry);
        Ok(self)
    }

    /// Finish construction. Infallible: every invariant was checked on the
    /// way in.
    pub fn build(self) -> Catalog {
        Catalog {
            entries: self.entries,
        }
    }
}
