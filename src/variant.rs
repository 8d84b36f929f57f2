//! A single pre-rendered rendition of an icon.

use std::fmt::Write;

use crate::error::{new_error, Error, ErrorKind};

/// The positional size slot recognized in variant templates.
///
/// A template carries exactly two, filled in order: requested width first,
/// then requested height.
pub const SIZE_SLOT: &str = "{}";

const SVG_XMLNS: &str = "http://www.w3.org/2000/svg";

// Octicons data decorates its path fragments with this hint. It has no
// effect on the displayed SVG, but takes up space.
const FILL_RULE_HINT: &str = r#"<path fill-rule="evenodd" "#;

/// One pre-rendered rendition of an icon at a specific natural height.
///
/// The template is complete vector markup except for two ordered size slots
/// in the opening tag; the `viewBox` is baked in at construction from the
/// natural size and never rewritten afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    natural_width: u32,
    natural_height: u32,
    template: String,
}

impl Variant {
    /// Create a variant from a finished template.
    ///
    /// The natural dimensions must be positive and the template must carry
    /// exactly two [`SIZE_SLOT`] markers.
    pub fn new(
        natural_width: u32,
        natural_height: u32,
        template: impl Into<String>,
    ) -> Result<Variant, Error> {
        let template = template.into();
        if natural_width == 0 || natural_height == 0 {
            return Err(new_error(ErrorKind::ZeroDimension));
        }
        if template.matches(SIZE_SLOT).count() != 2 {
            return Err(new_error(ErrorKind::BadTemplate(template)));
        }
        Ok(Variant {
            natural_width,
            natural_height,
            template,
        })
    }

    /// Create a variant by wrapping a raw markup fragment, such as a
    /// `<path>` element, in the standard `<svg>` envelope.
    ///
    /// The envelope declares the two size slots and a `viewBox` fixed to the
    /// natural size. A redundant `fill-rule="evenodd"` hint on a leading
    /// `<path>` is dropped. Fragments containing a slot marker of their own
    /// are rejected, since they would corrupt the positional contract.
    pub fn from_fragment(
        natural_width: u32,
        natural_height: u32,
        fragment: &str,
    ) -> Result<Variant, Error> {
        if fragment.contains(SIZE_SLOT) {
            return Err(new_error(ErrorKind::BadTemplate(fragment.to_owned())));
        }
        let fragment = match fragment.strip_prefix(FILL_RULE_HINT) {
            Some(rest) => format!("<path {}", rest),
            None => fragment.to_owned(),
        };
        let template = format!(
            r#"<svg xmlns="{}" width="{{}}" height="{{}}" viewBox="0 0 {} {}">{}</svg>"#,
            SVG_XMLNS, natural_width, natural_height, fragment
        );
        Variant::new(natural_width, natural_height, template)
    }

    /// The intrinsic height baked into this rendition.
    pub fn natural_height(&self) -> u32 {
        self.natural_height
    }

    /// The intrinsic aspect-correct width of this rendition.
    ///
    /// Never consulted during selection or substitution; it exists to drive
    /// the `viewBox` written at construction time.
    pub fn natural_width(&self) -> u32 {
        self.natural_width
    }

    /// The markup template with its two unfilled size slots.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Substitute the requested dimensions into the template's two slots,
    /// width first.
    ///
    /// The values are written verbatim; the natural size plays no part here.
    pub fn fill(&self, width: i32, height: i32) -> String {
        let mut out = String::with_capacity(self.template.len() + 8);
        let mut rest = self.template.as_str();
        for value in [width, height] {
            // Construction guarantees both slots are present.
            if let Some((head, tail)) = rest.split_once(SIZE_SLOT) {
                out.push_str(head);
                let _ = write!(out, "{}", value);
                rest = tail;
            }
        }
        out.push_str(rest);
        out
    }
}
