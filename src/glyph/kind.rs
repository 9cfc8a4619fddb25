//! Glyph and marker catalogs.

/// One visual primitive kind with a fixed attribute schema.
///
/// The catalog is immutable; each kind's positional order, attribute set,
/// and defaults live in the schema registry ([`super::spec::GlyphSpec`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GlyphKind {
    /// Circles with a per-item radius.
    Circle,
    /// Rings bounded by an inner and outer radius.
    Annulus,
    /// Filled circular wedges.
    Wedge,
    /// Wedges bounded by two radii and two angles.
    AnnularWedge,
    /// Circular arc strokes.
    Arc,
    /// A single connected polyline.
    Line,
    /// One polyline per row.
    MultiLine,
    /// Disconnected line segments.
    Segment,
    /// Half-open rays from an origin point.
    Ray,
    /// Center-anchored rectangles.
    Rect,
    /// Edge-anchored rectangles.
    Quad,
    /// Corner-anchored rectangles.
    Block,
    /// Vertical bars.
    VBar,
    /// Horizontal bars.
    HBar,
    /// Scalar images color-mapped at draw time.
    Image,
    /// Images of packed RGBA pixels.
    ImageRgba,
    /// Text anchored at data points.
    Text,
    /// Markers with a selectable shape.
    Scatter,
}

impl GlyphKind {
    /// Every kind in the catalog, in declaration order.
    pub const ALL: [GlyphKind; 18] = [
        GlyphKind::Circle,
        GlyphKind::Annulus,
        GlyphKind::Wedge,
        GlyphKind::AnnularWedge,
        GlyphKind::Arc,
        GlyphKind::Line,
        GlyphKind::MultiLine,
        GlyphKind::Segment,
        GlyphKind::Ray,
        GlyphKind::Rect,
        GlyphKind::Quad,
        GlyphKind::Block,
        GlyphKind::VBar,
        GlyphKind::HBar,
        GlyphKind::Image,
        GlyphKind::ImageRgba,
        GlyphKind::Text,
        GlyphKind::Scatter,
    ];

    /// The facade method name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GlyphKind::Circle => "circle",
            GlyphKind::Annulus => "annulus",
            GlyphKind::Wedge => "wedge",
            GlyphKind::AnnularWedge => "annular_wedge",
            GlyphKind::Arc => "arc",
            GlyphKind::Line => "line",
            GlyphKind::MultiLine => "multi_line",
            GlyphKind::Segment => "segment",
            GlyphKind::Ray => "ray",
            GlyphKind::Rect => "rect",
            GlyphKind::Quad => "quad",
            GlyphKind::Block => "block",
            GlyphKind::VBar => "vbar",
            GlyphKind::HBar => "hbar",
            GlyphKind::Image => "image",
            GlyphKind::ImageRgba => "image_rgba",
            GlyphKind::Text => "text",
            GlyphKind::Scatter => "scatter",
        }
    }
}

/// Marker shape used by [`GlyphKind::Scatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[allow(missing_docs)] // shape names are self-describing
pub enum MarkerKind {
    Asterisk,
    #[default]
    Circle,
    CircleCross,
    CircleDot,
    CircleX,
    CircleY,
    Cross,
    Dash,
    Diamond,
    DiamondCross,
    DiamondDot,
    Dot,
    Hex,
    HexDot,
    InvertedTriangle,
    Plus,
    Square,
    SquareCross,
    SquareDot,
    SquarePin,
    SquareX,
    Star,
    StarDot,
    Triangle,
    TriangleDot,
    TrianglePin,
    X,
    Y,
}

impl MarkerKind {
    /// Every marker shape, in declaration order.
    pub const ALL: [MarkerKind; 28] = [
        MarkerKind::Asterisk,
        MarkerKind::Circle,
        MarkerKind::CircleCross,
        MarkerKind::CircleDot,
        MarkerKind::CircleX,
        MarkerKind::CircleY,
        MarkerKind::Cross,
        MarkerKind::Dash,
        MarkerKind::Diamond,
        MarkerKind::DiamondCross,
        MarkerKind::DiamondDot,
        MarkerKind::Dot,
        MarkerKind::Hex,
        MarkerKind::HexDot,
        MarkerKind::InvertedTriangle,
        MarkerKind::Plus,
        MarkerKind::Square,
        MarkerKind::SquareCross,
        MarkerKind::SquareDot,
        MarkerKind::SquarePin,
        MarkerKind::SquareX,
        MarkerKind::Star,
        MarkerKind::StarDot,
        MarkerKind::Triangle,
        MarkerKind::TriangleDot,
        MarkerKind::TrianglePin,
        MarkerKind::X,
        MarkerKind::Y,
    ];

    /// The marker's snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MarkerKind::Asterisk => "asterisk",
            MarkerKind::Circle => "circle",
            MarkerKind::CircleCross => "circle_cross",
            MarkerKind::CircleDot => "circle_dot",
            MarkerKind::CircleX => "circle_x",
            MarkerKind::CircleY => "circle_y",
            MarkerKind::Cross => "cross",
            MarkerKind::Dash => "dash",
            MarkerKind::Diamond => "diamond",
            MarkerKind::DiamondCross => "diamond_cross",
            MarkerKind::DiamondDot => "diamond_dot",
            MarkerKind::Dot => "dot",
            MarkerKind::Hex => "hex",
            MarkerKind::HexDot => "hex_dot",
            MarkerKind::InvertedTriangle => "inverted_triangle",
            MarkerKind::Plus => "plus",
            MarkerKind::Square => "square",
            MarkerKind::SquareCross => "square_cross",
            MarkerKind::SquareDot => "square_dot",
            MarkerKind::SquarePin => "square_pin",
            MarkerKind::SquareX => "square_x",
            MarkerKind::Star => "star",
            MarkerKind::StarDot => "star_dot",
            MarkerKind::Triangle => "triangle",
            MarkerKind::TriangleDot => "triangle_dot",
            MarkerKind::TrianglePin => "triangle_pin",
            MarkerKind::X => "x",
            MarkerKind::Y => "y",
        }
    }

    /// Look up a marker by its snake_case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        MarkerKind::ALL.into_iter().find(|m| m.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_names_unique() {
        for (i, a) in GlyphKind::ALL.iter().enumerate() {
            for b in &GlyphKind::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_marker_round_trip() {
        for marker in MarkerKind::ALL {
            assert_eq!(MarkerKind::from_name(marker.name()), Some(marker));
        }
        assert_eq!(MarkerKind::from_name("pentagon"), None);
    }

    #[test]
    fn test_marker_default_is_circle() {
        assert_eq!(MarkerKind::default(), MarkerKind::Circle);
    }
}
