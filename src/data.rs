//! Loader for the octicons `data.json` catalog format.
//!
//! The format maps each icon name to a record carrying a set of height-keyed
//! renditions, each with an intrinsic width and a markup fragment:
//!
//! ```json
//! {"alert": {"name": "alert",
//!            "keywords": ["warning", "triangle"],
//!            "heights": {"16": {"width": 16,
//!                               "path": "<path d=\"M8.22…\"></path>"}}}}
//! ```
//!
//! Keywords are ignored; the catalog only answers name lookups.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::{new_error, Error, ErrorKind};
use crate::variant::Variant;

#[derive(Deserialize)]
struct RawIcon {
    heights: BTreeMap<String, RawRendition>,
}

#[derive(Deserialize)]
struct RawRendition {
    width: u32,
    path: String,
}

/// Decode a catalog from the octicons JSON data format.
///
/// Height keys are ordered numerically, not lexically, so a three-digit
/// height sorts after the two-digit ones. Every catalog invariant is
/// enforced on the decoded data; the input is treated as untrusted.
pub fn catalog_from_json(data: &str) -> Result<Catalog, Error> {
    let raw: BTreeMap<String, RawIcon> = serde_json::from_str(data)
        .map_err(|e| Error::from(Box::new(e) as Box<dyn std::error::Error>))?;
    let mut builder = Catalog::builder();
    for (name, icon) in raw {
        let mut variants = Vec::with_capacity(icon.heights.len());
        for (key, rendition) in icon.heights {
            let height: u32 = key
                .parse()
                .map_err(|_| new_error(ErrorKind::BadHeightKey(key)))?;
            variants.push(Variant::from_fragment(
                rendition.width,
                height,
                &rendition.path,
            )?);
        }
        builder.push(name, variants)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_wraps_fragments() {
        let data = r#"{
            "alert": {
                "name": "alert",
                "keywords": ["warning", "triangle"],
                "heights": {
                    "16": {"width": 16,
                           "path": "<path fill-rule=\"evenodd\" d=\"M8 1\"></path>"},
                    "24": {"width": 24, "path": "<path d=\"M12 2\"></path>"}
                }
            }
        }"#;
        let catalog = catalog_from_json(data).unwrap();
        assert_eq!(catalog.len(), 1);
        let entry = catalog.get("alert").unwrap();
        assert_eq!(entry.variants().len(), 2);
        assert_eq!(entry.variants()[0].natural_height(), 16);
        assert!(!entry.variants()[0].template().contains("fill-rule"));
        assert!(entry.variants()[1]
            .template()
            .contains(r#"viewBox="0 0 24 24""#));
    }

    #[test]
    fn heights_are_ordered_numerically() {
        // Lexically "128" sorts before "96"; numerically it must come after.
        let data = r#"{
            "banner": {
                "name": "banner",
                "keywords": [],
                "heights": {
                    "96": {"width": 96, "path": "<path d=\"a\"></path>"},
                    "128": {"width": 128, "path": "<path d=\"b\"></path>"}
                }
            }
        }"#;
        let catalog = catalog_from_json(data).unwrap();
        let heights: Vec<u32> = catalog
            .get("banner")
            .unwrap()
            .variants()
            .iter()
            .map(Variant::natural_height)
            .collect();
        assert_eq!(heights, [96, 128]);
    }

    #[test]
    fn rejects_non_numeric_height_key() {
        let data = r#"{"x": {"heights": {"tall": {"width": 16, "path": "<path/>"}}}}"#;
        assert!(catalog_from_json(data).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(catalog_from_json("not json").is_err());
    }
}
