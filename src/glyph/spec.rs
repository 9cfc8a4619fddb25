//! Static glyph schema registry.
//!
//! One record per [`GlyphKind`]: its ordered positional-attribute names,
//! full attribute set, and defaults. The argument binder consults this
//! table instead of duplicating shape metadata at every call site.
//!
//! Attribute sets compose from a per-glyph base table plus shared style
//! families (line, fill, text), mirroring how the glyph catalog is
//! organized: most glyphs stroke and fill, a few only stroke, text glyphs
//! carry text styling instead.

use crate::color::Rgba;

use super::kind::{GlyphKind, MarkerKind};

/// Element type of a glyph attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// A number per item.
    Number,
    /// An opacity in `0.0..=1.0` per item.
    Alpha,
    /// An angle per item, interpreted through angle units.
    Angle,
    /// A text string per item.
    Text,
    /// A color per item.
    Color,
    /// A marker shape per item.
    Marker,
    /// A list of numbers per item (polyline coordinates).
    NumberList,
    /// A 2-D numeric matrix per item.
    Image,
}

/// Which unit vocabulary an attribute's `<name>_units` suffix accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitsKind {
    /// Angular units.
    Angle,
    /// Data-space vs screen-space distances.
    Spatial,
}

/// A parsed units value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    /// Radians.
    Rad,
    /// Degrees.
    Deg,
    /// Turns (1.0 = full revolution).
    Turn,
    /// Data-space distance.
    Data,
    /// Screen-space (pixel) distance.
    Screen,
}

impl Units {
    /// Parse a units name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rad" => Some(Units::Rad),
            "deg" => Some(Units::Deg),
            "turn" => Some(Units::Turn),
            "data" => Some(Units::Data),
            "screen" => Some(Units::Screen),
            _ => None,
        }
    }

    /// Whether this value belongs to the given vocabulary.
    #[must_use]
    pub fn valid_for(self, kind: UnitsKind) -> bool {
        match kind {
            UnitsKind::Angle => matches!(self, Units::Rad | Units::Deg | Units::Turn),
            UnitsKind::Spatial => matches!(self, Units::Data | Units::Screen),
        }
    }

    /// The vocabulary's default value.
    #[must_use]
    pub const fn default_for(kind: UnitsKind) -> Self {
        match kind {
            UnitsKind::Angle => Units::Rad,
            UnitsKind::Spatial => Units::Data,
        }
    }
}

/// Default value an attribute takes when a call leaves it unbound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrDefault {
    /// A field reference to the attribute's own name.
    SelfField,
    /// A constant number.
    Number(f64),
    /// A constant string.
    Text(&'static str),
    /// A constant color.
    Color(Rgba),
    /// A constant marker shape.
    Marker(MarkerKind),
}

/// Schema entry for one attribute of one glyph kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttrSpec {
    /// Attribute name.
    pub name: &'static str,
    /// Element type.
    pub ty: ElementType,
    /// Whether the attribute may vary per item (array or field reference).
    pub vectorized: bool,
    /// Units vocabulary for the `<name>_units` companion key, if any.
    pub units: Option<UnitsKind>,
    /// Whether the attribute participates in the color/alpha pairing and
    /// therefore accepts selection/nonselection/hover/muted variants.
    pub paired: bool,
    /// Default applied when unbound.
    pub default: AttrDefault,
}

const fn coord(name: &'static str) -> AttrSpec {
    AttrSpec {
        name,
        ty: ElementType::Number,
        vectorized: true,
        units: None,
        paired: false,
        default: AttrDefault::SelfField,
    }
}

const fn dist(name: &'static str) -> AttrSpec {
    AttrSpec { units: Some(UnitsKind::Spatial), ..coord(name) }
}

const fn angle(name: &'static str, default: AttrDefault) -> AttrSpec {
    AttrSpec { ty: ElementType::Angle, units: Some(UnitsKind::Angle), default, ..coord(name) }
}

const fn lists(name: &'static str) -> AttrSpec {
    AttrSpec { ty: ElementType::NumberList, ..coord(name) }
}

const fn image(name: &'static str) -> AttrSpec {
    AttrSpec { ty: ElementType::Image, ..coord(name) }
}

const fn text(name: &'static str) -> AttrSpec {
    AttrSpec { ty: ElementType::Text, ..coord(name) }
}

const fn style_color(name: &'static str, default: Rgba) -> AttrSpec {
    AttrSpec {
        name,
        ty: ElementType::Color,
        vectorized: true,
        units: None,
        paired: true,
        default: AttrDefault::Color(default),
    }
}

const fn style_alpha(name: &'static str) -> AttrSpec {
    AttrSpec {
        ty: ElementType::Alpha,
        default: AttrDefault::Number(1.0),
        ..style_color(name, Rgba::BLACK)
    }
}

const fn style_num(name: &'static str, default: f64) -> AttrSpec {
    AttrSpec {
        name,
        ty: ElementType::Number,
        vectorized: true,
        units: None,
        paired: false,
        default: AttrDefault::Number(default),
    }
}

const fn scalar(spec: AttrSpec) -> AttrSpec {
    AttrSpec { vectorized: false, ..spec }
}

/// Vectorized stroke styling shared by most glyphs.
static LINE_STYLE: [AttrSpec; 3] = [
    style_color("line_color", Rgba::BLACK),
    style_alpha("line_alpha"),
    style_num("line_width", 1.0),
];

/// Vectorized fill styling.
static FILL_STYLE: [AttrSpec; 2] = [style_color("fill_color", Rgba::GRAY), style_alpha("fill_alpha")];

/// Vectorized text styling.
static TEXT_STYLE: [AttrSpec; 3] = [
    style_color("text_color", Rgba::BLACK),
    style_alpha("text_alpha"),
    text_size(),
];

const fn text_size() -> AttrSpec {
    AttrSpec {
        name: "text_font_size",
        ty: ElementType::Text,
        vectorized: true,
        units: None,
        paired: false,
        default: AttrDefault::Text("16px"),
    }
}

/// Which shared style families a glyph carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleFamilies {
    /// Stroke styling (`line_*`).
    pub line: bool,
    /// Fill styling (`fill_*`).
    pub fill: bool,
    /// Text styling (`text_*`).
    pub text: bool,
}

impl StyleFamilies {
    const NONE: Self = Self { line: false, fill: false, text: false };
    const LINE: Self = Self { line: true, ..Self::NONE };
    const LINE_FILL: Self = Self { line: true, fill: true, text: false };
    const TEXT: Self = Self { text: true, ..Self::NONE };
}

/// How an options-map key maps into the schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrKey {
    /// A base attribute of the glyph.
    Base(&'static AttrSpec),
    /// A `selection_`/`nonselection_`/`hover_`/`muted_` variant of a
    /// paired attribute.
    Variant(RenderVariant, &'static AttrSpec),
    /// A `<name>_units` companion of a unit-bearing attribute.
    Units(&'static AttrSpec),
}

/// The four alternate-state glyph variants a renderer can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderVariant {
    /// Styling applied to selected items.
    Selection,
    /// Styling applied to unselected items while a selection exists.
    Nonselection,
    /// Styling applied to hovered items.
    Hover,
    /// Styling applied while the renderer is muted.
    Muted,
}

impl RenderVariant {
    /// All variants, in declaration order.
    pub const ALL: [RenderVariant; 4] = [
        RenderVariant::Selection,
        RenderVariant::Nonselection,
        RenderVariant::Hover,
        RenderVariant::Muted,
    ];

    /// The option-key prefix for this variant.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            RenderVariant::Selection => "selection_",
            RenderVariant::Nonselection => "nonselection_",
            RenderVariant::Hover => "hover_",
            RenderVariant::Muted => "muted_",
        }
    }
}

/// Schema record for one glyph kind.
#[derive(Debug)]
pub struct GlyphSpec {
    /// The glyph kind this record describes.
    pub kind: GlyphKind,
    /// Required positional attribute names, in declared order.
    pub positional: &'static [&'static str],
    /// Glyph-specific attributes (positional attributes first).
    base: &'static [AttrSpec],
    /// Shared style families the glyph carries.
    families: StyleFamilies,
}

impl GlyphSpec {
    /// Every attribute of the glyph: base table plus style families.
    pub fn attrs(&self) -> impl Iterator<Item = &'static AttrSpec> {
        let base: &'static [AttrSpec] = self.base;
        let line: &'static [AttrSpec] = if self.families.line { &LINE_STYLE } else { &[] };
        let fill: &'static [AttrSpec] = if self.families.fill { &FILL_STYLE } else { &[] };
        let text: &'static [AttrSpec] = if self.families.text { &TEXT_STYLE } else { &[] };
        base.iter().chain(line).chain(fill).chain(text)
    }

    /// Look up a base attribute by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'static AttrSpec> {
        self.attrs().find(|spec| spec.name == name)
    }

    /// Classify an options-map key against the schema.
    ///
    /// Variant prefixes are recognized only on paired (color/alpha)
    /// attributes, and `_units` suffixes only on unit-bearing attributes;
    /// anything else is unknown.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<AttrKey> {
        if let Some(spec) = self.attr(key) {
            return Some(AttrKey::Base(spec));
        }
        if let Some(base) = key.strip_suffix("_units") {
            if let Some(spec) = self.attr(base) {
                if spec.units.is_some() {
                    return Some(AttrKey::Units(spec));
                }
            }
        }
        for variant in RenderVariant::ALL {
            if let Some(base) = key.strip_prefix(variant.prefix()) {
                if let Some(spec) = self.attr(base) {
                    if spec.paired {
                        return Some(AttrKey::Variant(variant, spec));
                    }
                }
            }
        }
        None
    }

    /// The comma-separated positional signature, for error messages.
    #[must_use]
    pub fn signature(&self) -> String {
        self.positional.join(", ")
    }
}

static CIRCLE: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Circle,
    positional: &["x", "y", "radius"],
    base: &[coord("x"), coord("y"), dist("radius")],
    families: StyleFamilies::LINE_FILL,
};

static ANNULUS: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Annulus,
    positional: &["x", "y", "inner_radius", "outer_radius"],
    base: &[coord("x"), coord("y"), dist("inner_radius"), dist("outer_radius")],
    families: StyleFamilies::LINE_FILL,
};

static WEDGE: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Wedge,
    positional: &["x", "y", "radius", "start_angle", "end_angle"],
    base: &[
        coord("x"),
        coord("y"),
        dist("radius"),
        angle("start_angle", AttrDefault::SelfField),
        angle("end_angle", AttrDefault::SelfField),
    ],
    families: StyleFamilies::LINE_FILL,
};

static ANNULAR_WEDGE: GlyphSpec = GlyphSpec {
    kind: GlyphKind::AnnularWedge,
    positional: &["x", "y", "inner_radius", "outer_radius", "start_angle", "end_angle"],
    base: &[
        coord("x"),
        coord("y"),
        dist("inner_radius"),
        dist("outer_radius"),
        angle("start_angle", AttrDefault::SelfField),
        angle("end_angle", AttrDefault::SelfField),
    ],
    families: StyleFamilies::LINE_FILL,
};

static ARC: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Arc,
    positional: &["x", "y", "radius", "start_angle", "end_angle"],
    base: &[
        coord("x"),
        coord("y"),
        dist("radius"),
        angle("start_angle", AttrDefault::SelfField),
        angle("end_angle", AttrDefault::SelfField),
    ],
    families: StyleFamilies::LINE,
};

// A connected polyline strokes uniformly, so its line styling is scalar
// rather than per-item.
static LINE: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Line,
    positional: &["x", "y"],
    base: &[
        coord("x"),
        coord("y"),
        scalar(style_color("line_color", Rgba::BLACK)),
        scalar(style_alpha("line_alpha")),
        scalar(style_num("line_width", 1.0)),
    ],
    families: StyleFamilies::NONE,
};

static MULTI_LINE: GlyphSpec = GlyphSpec {
    kind: GlyphKind::MultiLine,
    positional: &["xs", "ys"],
    base: &[lists("xs"), lists("ys")],
    families: StyleFamilies::LINE,
};

static SEGMENT: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Segment,
    positional: &["x0", "y0", "x1", "y1"],
    base: &[coord("x0"), coord("y0"), coord("x1"), coord("y1")],
    families: StyleFamilies::LINE,
};

static RAY: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Ray,
    positional: &["x", "y", "length"],
    base: &[coord("x"), coord("y"), dist("length"), angle("angle", AttrDefault::Number(0.0))],
    families: StyleFamilies::LINE,
};

static RECT: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Rect,
    positional: &["x", "y", "width", "height"],
    base: &[
        coord("x"),
        coord("y"),
        dist("width"),
        dist("height"),
        angle("angle", AttrDefault::Number(0.0)),
    ],
    families: StyleFamilies::LINE_FILL,
};

static QUAD: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Quad,
    positional: &["left", "right", "bottom", "top"],
    base: &[coord("left"), coord("right"), coord("bottom"), coord("top")],
    families: StyleFamilies::LINE_FILL,
};

static BLOCK: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Block,
    positional: &["x", "y", "width", "height"],
    base: &[coord("x"), coord("y"), dist("width"), dist("height")],
    families: StyleFamilies::LINE_FILL,
};

static VBAR: GlyphSpec = GlyphSpec {
    kind: GlyphKind::VBar,
    positional: &["x", "width", "top", "bottom"],
    base: &[coord("x"), dist("width"), coord("top"), coord("bottom")],
    families: StyleFamilies::LINE_FILL,
};

static HBAR: GlyphSpec = GlyphSpec {
    kind: GlyphKind::HBar,
    positional: &["y", "height", "right", "left"],
    base: &[coord("y"), dist("height"), coord("right"), coord("left")],
    families: StyleFamilies::LINE_FILL,
};

static IMAGE: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Image,
    positional: &["image", "x", "y", "dw", "dh"],
    base: &[image("image"), coord("x"), coord("y"), dist("dw"), dist("dh")],
    families: StyleFamilies::NONE,
};

static IMAGE_RGBA: GlyphSpec = GlyphSpec {
    kind: GlyphKind::ImageRgba,
    positional: &["image", "x", "y", "dw", "dh"],
    base: &[image("image"), coord("x"), coord("y"), dist("dw"), dist("dh")],
    families: StyleFamilies::NONE,
};

static TEXT: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Text,
    positional: &["x", "y", "text"],
    base: &[coord("x"), coord("y"), text("text"), angle("angle", AttrDefault::Number(0.0))],
    families: StyleFamilies::TEXT,
};

static SCATTER: GlyphSpec = GlyphSpec {
    kind: GlyphKind::Scatter,
    positional: &["x", "y"],
    base: &[
        coord("x"),
        coord("y"),
        AttrSpec { units: Some(UnitsKind::Spatial), ..style_num("size", 4.0) },
        AttrSpec {
            name: "marker",
            ty: ElementType::Marker,
            vectorized: true,
            units: None,
            paired: false,
            default: AttrDefault::Marker(MarkerKind::Circle),
        },
    ],
    families: StyleFamilies::LINE_FILL,
};

impl GlyphKind {
    /// The schema record for this kind.
    #[must_use]
    pub fn spec(self) -> &'static GlyphSpec {
        match self {
            GlyphKind::Circle => &CIRCLE,
            GlyphKind::Annulus => &ANNULUS,
            GlyphKind::Wedge => &WEDGE,
            GlyphKind::AnnularWedge => &ANNULAR_WEDGE,
            GlyphKind::Arc => &ARC,
            GlyphKind::Line => &LINE,
            GlyphKind::MultiLine => &MULTI_LINE,
            GlyphKind::Segment => &SEGMENT,
            GlyphKind::Ray => &RAY,
            GlyphKind::Rect => &RECT,
            GlyphKind::Quad => &QUAD,
            GlyphKind::Block => &BLOCK,
            GlyphKind::VBar => &VBAR,
            GlyphKind::HBar => &HBAR,
            GlyphKind::Image => &IMAGE,
            GlyphKind::ImageRgba => &IMAGE_RGBA,
            GlyphKind::Text => &TEXT,
            GlyphKind::Scatter => &SCATTER,
        }
    }
}
