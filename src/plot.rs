//! Plot facade.
//!
//! One method per glyph kind, each accepting the three call shapes of
//! [`Call`], plus the deprecated marker shorthands that resolve to the
//! scatter glyph with a fixed marker preset. The facade owns the renderer
//! list and the deprecation-notice registry; everything else is delegated
//! to the binder, the value resolver, and the renderer factory.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::Result;
use crate::glyph::args::{bind, Call};
use crate::glyph::kind::{GlyphKind, MarkerKind};
use crate::glyph::value::Value;
use crate::renderer::{build_renderer, GlyphRenderer};

/// Once-per-name deprecation notice registry.
///
/// Owned by the [`Plot`] rather than hidden in a global, so tests can
/// reset and inspect it.
#[derive(Debug, Clone, Default)]
pub struct DeprecationNotices {
    seen: BTreeSet<&'static str>,
}

impl DeprecationNotices {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deprecated method invocation; logs a warning the first
    /// time each name is seen and returns whether this was the first.
    pub fn warn_once(&mut self, method: &'static str) -> bool {
        if !self.seen.insert(method) {
            return false;
        }
        log::warn!("{method}() is deprecated, use scatter() with the `marker` option instead");
        true
    }

    /// Whether a notice for this name has been emitted.
    #[must_use]
    pub fn seen(&self, method: &str) -> bool {
        self.seen.contains(method)
    }

    /// Number of distinct names noticed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no notices have been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forget all emitted notices.
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}

macro_rules! glyph_methods {
    ($($(#[$meta:meta])* ($method:ident, $kind:ident)),* $(,)?) => {
        $(
            $(#[$meta])*
            ///
            /// Accepts no arguments, a single options map, or the glyph's
            /// positional values with an optional trailing options map.
            ///
            /// # Errors
            ///
            /// Any construction-time binding or resolution error.
            pub fn $method(&mut self, call: impl Into<Call>) -> Result<Arc<GlyphRenderer>> {
                self.glyph(GlyphKind::$kind, call)
            }
        )*
    };
}

macro_rules! marker_aliases {
    ($(($method:ident, $marker:ident)),* $(,)?) => {
        $(
            #[doc = concat!(
                "Marker shorthand for [`Plot::scatter`] with [`MarkerKind::",
                stringify!($marker),
                "`].",
            )]
            #[deprecated(note = "use `scatter` with the `marker` option")]
            pub fn $method(&mut self, call: impl Into<Call>) -> Result<Arc<GlyphRenderer>> {
                self.marker_glyph(stringify!($method), MarkerKind::$marker, call.into())
            }
        )*
    };
}

/// The owning container glyph renderers are registered with.
#[derive(Debug, Clone, Default)]
pub struct Plot {
    renderers: Vec<Arc<GlyphRenderer>>,
    notices: DeprecationNotices,
}

impl Plot {
    /// Create an empty plot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a renderer for any glyph kind and register it.
    ///
    /// The per-kind methods below are shorthands for this.
    ///
    /// # Errors
    ///
    /// Any construction-time binding or resolution error.
    pub fn glyph(
        &mut self,
        kind: GlyphKind,
        call: impl Into<Call>,
    ) -> Result<Arc<GlyphRenderer>> {
        let (args, display) = call.into().into_parts();
        let bound = bind(kind, args)?;
        let renderer = Arc::new(build_renderer(kind, bound, display)?);
        self.renderers.push(Arc::clone(&renderer));
        Ok(renderer)
    }

    /// Registered renderers, in insertion order.
    #[must_use]
    pub fn renderers(&self) -> &[Arc<GlyphRenderer>] {
        &self.renderers
    }

    /// Remove a renderer; returns whether it was registered.
    pub fn remove_renderer(&mut self, renderer: &Arc<GlyphRenderer>) -> bool {
        let before = self.renderers.len();
        self.renderers.retain(|r| !Arc::ptr_eq(r, renderer));
        self.renderers.len() != before
    }

    /// The deprecation-notice registry.
    #[must_use]
    pub fn notices(&self) -> &DeprecationNotices {
        &self.notices
    }

    /// Mutable access to the notice registry (tests reset it here).
    pub fn notices_mut(&mut self) -> &mut DeprecationNotices {
        &mut self.notices
    }

    fn marker_glyph(
        &mut self,
        method: &'static str,
        marker: MarkerKind,
        call: Call,
    ) -> Result<Arc<GlyphRenderer>> {
        self.notices.warn_once(method);
        self.glyph(GlyphKind::Scatter, call.options([("marker", Value::Marker(marker))]))
    }

    glyph_methods! {
        /// Draw circles with a per-item radius.
        (circle, Circle),
        /// Draw rings bounded by an inner and outer radius.
        (annulus, Annulus),
        /// Draw filled circular wedges.
        (wedge, Wedge),
        /// Draw wedges bounded by two radii and two angles.
        (annular_wedge, AnnularWedge),
        /// Draw circular arc strokes.
        (arc, Arc),
        /// Draw a single connected polyline.
        (line, Line),
        /// Draw one polyline per row.
        (multi_line, MultiLine),
        /// Draw disconnected line segments.
        (segment, Segment),
        /// Draw rays from origin points.
        (ray, Ray),
        /// Draw center-anchored rectangles.
        (rect, Rect),
        /// Draw edge-anchored rectangles.
        (quad, Quad),
        /// Draw corner-anchored rectangles.
        (block, Block),
        /// Draw vertical bars.
        (vbar, VBar),
        /// Draw horizontal bars.
        (hbar, HBar),
        /// Draw color-mapped scalar images.
        (image, Image),
        /// Draw images of packed RGBA pixels.
        (image_rgba, ImageRgba),
        /// Draw text anchored at data points.
        (text, Text),
        /// Draw markers with a selectable shape.
        (scatter, Scatter),
    }

    marker_aliases! {
        (asterisk, Asterisk),
        (circle_cross, CircleCross),
        (circle_dot, CircleDot),
        (circle_x, CircleX),
        (circle_y, CircleY),
        (cross, Cross),
        (dash, Dash),
        (diamond, Diamond),
        (diamond_cross, DiamondCross),
        (diamond_dot, DiamondDot),
        (dot, Dot),
        (hex, Hex),
        (hex_dot, HexDot),
        (inverted_triangle, InvertedTriangle),
        (plus, Plus),
        (square, Square),
        (square_cross, SquareCross),
        (square_dot, SquareDot),
        (square_pin, SquarePin),
        (square_x, SquareX),
        (star, Star),
        (star_dot, StarDot),
        (triangle, Triangle),
        (triangle_dot, TriangleDot),
        (triangle_pin, TrianglePin),
        (x, X),
        (y, Y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ColumnDataSource;
    use crate::glyph::value::{AttrValue, Scalar};

    #[test]
    fn test_facade_appends_in_order() {
        let mut plot = Plot::new();
        let first = plot.circle(()).unwrap();
        let second = plot.line(()).unwrap();
        assert_eq!(plot.renderers().len(), 2);
        assert!(Arc::ptr_eq(&plot.renderers()[0], &first));
        assert!(Arc::ptr_eq(&plot.renderers()[1], &second));
    }

    #[test]
    fn test_facade_positional_call() {
        let mut plot = Plot::new();
        let source = Arc::new(ColumnDataSource::from_xy(&[1.0], &[2.0]));
        let renderer = plot
            .circle(
                Call::positional(["x".into(), "y".into(), 0.5.into()])
                    .options([("fill_color", "red")])
                    .source(source),
            )
            .unwrap();
        assert_eq!(renderer.attr("x"), Some(&AttrValue::Field("x".into())));
        assert_eq!(renderer.attr("radius"), Some(&AttrValue::Scalar(Scalar::Number(0.5))));
    }

    #[test]
    fn test_remove_renderer() {
        let mut plot = Plot::new();
        let renderer = plot.circle(()).unwrap();
        assert!(plot.remove_renderer(&renderer));
        assert!(plot.renderers().is_empty());
        assert!(!plot.remove_renderer(&renderer));
    }

    #[test]
    fn test_marker_alias_presets_marker() {
        let mut plot = Plot::new();
        #[allow(deprecated)]
        let renderer = plot.square(()).unwrap();
        assert_eq!(renderer.kind(), GlyphKind::Scatter);
        assert_eq!(
            renderer.attr("marker"),
            Some(&AttrValue::Scalar(Scalar::Marker(MarkerKind::Square)))
        );
    }

    #[test]
    fn test_deprecation_notice_once_per_name() {
        let mut plot = Plot::new();
        #[allow(deprecated)]
        {
            plot.square(()).unwrap();
            plot.square(()).unwrap();
            plot.triangle(()).unwrap();
        }
        assert_eq!(plot.notices().len(), 2);
        assert!(plot.notices().seen("square"));
        assert!(plot.notices().seen("triangle"));
        assert!(!plot.notices().seen("scatter"));
    }

    #[test]
    fn test_notice_registry_resets() {
        let mut notices = DeprecationNotices::new();
        assert!(notices.warn_once("dash"));
        assert!(!notices.warn_once("dash"));
        notices.reset();
        assert!(notices.is_empty());
        assert!(notices.warn_once("dash"));
    }

    #[test]
    fn test_plain_scatter_emits_no_notice() {
        let mut plot = Plot::new();
        plot.scatter(()).unwrap();
        assert!(plot.notices().is_empty());
    }
}
