//! The image-operation contract.
//!
//! [`ImageOp`] is the interface a rendering or compositing caller consumes:
//! produce a filtered image (allocating the destination or writing into a
//! caller-supplied one), report geometry, allocate compatible destinations,
//! map points through the op's geometry, and surface rendering hints.
//!
//! Operations in this crate are pixelwise, so their geometry queries are
//! identities; an op that resamples or warps would implement the same
//! contract with non-trivial `bounds`/`map_point`.

use crate::OpsResult;
use rasterop_core::{ColorModel, PackedImage, Point, Rect};
use std::collections::BTreeMap;

/// Opaque hint map an operation may hand to a renderer.
///
/// Every operation in this crate carries no hints:
/// [`ImageOp::rendering_hints`] returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderingHints {
    entries: BTreeMap<String, String>,
}

impl RenderingHints {
    /// Creates an empty hint map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no hints are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the hint value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Sets a hint, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Iterates over the hints in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A single-input, single-output image operation.
///
/// # Contract
///
/// - Validation failures are raised before any buffer is allocated or
///   mutated; a failed call has no side effects.
/// - [`filter`](Self::filter) allocates its destination via
///   [`create_compatible_dest_image`](Self::create_compatible_dest_image);
///   [`filter_into`](Self::filter_into) mutates the caller's image in place.
/// - Implementations own only immutable state, so a single op value can be
///   shared across threads and reused across calls.
pub trait ImageOp {
    /// Filters `src` into a freshly allocated destination and returns it.
    ///
    /// The destination has the source's dimensions and color model, with
    /// every pixel transformed.
    ///
    /// # Errors
    ///
    /// Fails if the source's format is outside the op's allowed set.
    /// Nothing is allocated on failure.
    fn filter(&self, src: &PackedImage) -> OpsResult<PackedImage>;

    /// Filters `src` into the caller-supplied `dst`, mutating it in place.
    ///
    /// # Errors
    ///
    /// Fails if the source's format is outside the op's allowed set, if the
    /// destination's dimensions differ from the source's, or if the
    /// destination's format differs from the source's. `dst` is unchanged
    /// on failure.
    fn filter_into(&self, src: &PackedImage, dst: &mut PackedImage) -> OpsResult<()>;

    /// Returns the bounding rectangle of the filtered result:
    /// `[0, 0, width, height]` of the source.
    fn bounds(&self, src: &PackedImage) -> Rect;

    /// Allocates a zeroed destination compatible with `src`.
    ///
    /// Uses the source's color model unless `color_model` supplies another;
    /// the alpha-premultiplication flag travels with that color model.
    fn create_compatible_dest_image(
        &self,
        src: &PackedImage,
        color_model: Option<&ColorModel>,
    ) -> OpsResult<PackedImage>;

    /// Maps a point in source space to destination space.
    fn map_point(&self, src: Point) -> Point;

    /// Returns the rendering hints of this operation, if any.
    fn rendering_hints(&self) -> Option<RenderingHints>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_map() {
        let mut hints = RenderingHints::new();
        assert!(hints.is_empty());
        hints.insert("interpolation", "nearest");
        assert_eq!(hints.get("interpolation"), Some("nearest"));
        assert_eq!(hints.iter().count(), 1);
    }
}
