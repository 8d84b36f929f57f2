//! A size-aware catalog of pre-rendered vector icons.
//!
//! Icon sets like GitHub's octicons ship several hand-tuned renditions of
//! each symbol, one per natural height. This crate holds those renditions in
//! an immutable [`Catalog`] and answers size queries through a [`Selector`]:
//! given a symbolic icon name and a requested pixel size, it picks the
//! best-fitting rendition and stamps the requested dimensions into its
//! markup, yielding a complete `<svg>` string ready to embed.
//!
//! ```
//! use vecicon::{Catalog, Selector, Variant};
//!
//! let mut builder = Catalog::builder();
//! builder.push(
//!     "alert",
//!     vec![Variant::from_fragment(16, 16, r#"<path d="M8 1 1 15h14z"></path>"#)?],
//! )?;
//! let catalog = builder.build();
//!
//! let selector = Selector::new(&catalog);
//! let markup = selector.render("alert", 32, 32).unwrap();
//! assert!(markup.contains(r#"width="32" height="32" viewBox="0 0 16 16""#));
//! assert!(selector.render("no-such-icon", 32, 32).is_none());
//! # Ok::<(), vecicon::Error>(())
//! ```
//!
//! The catalog is built once, before first use, and never mutated; a
//! process-wide instance can live in a `std::sync::OnceLock` and be queried
//! from any thread without synchronization. No I/O happens at lookup time.
//!
//! With the `json` feature enabled, [`data::catalog_from_json`] builds a
//! catalog straight from the octicons `data.json` format.

mod catalog;
mod error;
mod selector;
mod variant;

#[cfg(feature = "json")]
pub mod data;

pub use crate::catalog::{Catalog, CatalogBuilder, IconEntry};
pub use crate::error::{new_error, Error, ErrorKind};
pub use crate::selector::Selector;
pub use crate::variant::{Variant, SIZE_SLOT};
