//! Glyph renderers and the renderer factory.
//!
//! A [`GlyphRenderer`] is the bound combination of a glyph kind, its
//! resolved attributes, a shared data source, and a view filter, plus the
//! display state a plot needs to draw it: alternate-state glyph overrides,
//! legend association, render level, visibility, and coordinate overrides.
//!
//! Construction never touches column data; field references stay symbolic
//! until [`GlyphRenderer::materialize`] resolves them at draw time.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::color::Rgba;
use crate::data::{Column, ColumnDataSource};
use crate::error::{Error, Result};
use crate::glyph::args::BoundArgs;
use crate::glyph::kind::GlyphKind;
use crate::glyph::spec::{AttrDefault, RenderVariant, Units};
use crate::glyph::value::{resolve, ArrayValue, AttrValue, Scalar};
use crate::view::ViewFilter;

/// Draw-order level of a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderLevel {
    /// Below everything, for image backdrops.
    Image,
    /// Below glyphs.
    Underlay,
    /// Normal glyph level.
    #[default]
    Glyph,
    /// Axis/grid guides.
    Guide,
    /// Above glyphs.
    Annotation,
    /// Above everything.
    Overlay,
}

/// Legend association for a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Legend {
    /// A fixed legend label for the whole renderer.
    Label(String),
    /// One legend entry per distinct value of a source column.
    Field(String),
    /// Like `Field`, but grouped at construction time.
    Group(String),
}

/// Axis scale shape used by a coordinate override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleKind {
    /// Linear mapping.
    #[default]
    Linear,
    /// Logarithmic mapping.
    Log,
}

/// Per-renderer coordinate-system override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoordinateMapping {
    /// Scale shape for the x dimension.
    pub x_scale: ScaleKind,
    /// Scale shape for the y dimension.
    pub y_scale: ScaleKind,
}

/// One alternate-state glyph slot (selection, nonselection, hover, muted).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GlyphOverride {
    /// The plot derives the alternate styling automatically.
    #[default]
    Auto,
    /// No alternate styling for this state.
    Off,
    /// Explicit attribute overrides, keyed by base attribute name.
    Styled(BTreeMap<String, AttrValue>),
}

/// Auxiliary display state attached to a glyph call.
#[derive(Debug, Clone, Default)]
pub(crate) struct DisplayState {
    pub(crate) source: Option<Arc<ColumnDataSource>>,
    pub(crate) view: ViewFilter,
    pub(crate) legend: Option<Legend>,
    pub(crate) level: RenderLevel,
    pub(crate) name: Option<String>,
    pub(crate) visible: Option<bool>,
    pub(crate) x_range_name: Option<String>,
    pub(crate) y_range_name: Option<String>,
    pub(crate) coordinates: Option<CoordinateMapping>,
}

/// A materialized attribute, ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Materialized<'a> {
    /// One constant for all items.
    Constant(&'a Scalar),
    /// A data source column.
    Column(&'a Column),
    /// Explicit per-item values.
    Array(&'a ArrayValue),
    /// Explicit per-item colors.
    Colors(&'a [Rgba]),
}

/// The bound combination of a glyph, its attributes, and a data source.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRenderer {
    kind: GlyphKind,
    attrs: BTreeMap<String, AttrValue>,
    units: BTreeMap<String, Units>,
    source: Option<Arc<ColumnDataSource>>,
    view: ViewFilter,
    selection_glyph: GlyphOverride,
    nonselection_glyph: GlyphOverride,
    hover_glyph: GlyphOverride,
    muted_glyph: GlyphOverride,
    legend: Option<Legend>,
    level: RenderLevel,
    name: Option<String>,
    visible: bool,
    x_range_name: String,
    y_range_name: String,
    coordinates: Option<CoordinateMapping>,
}

impl GlyphRenderer {
    /// The glyph kind.
    #[must_use]
    pub fn kind(&self) -> GlyphKind {
        self.kind
    }

    /// A resolved attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// All resolved attributes, in name order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Effective units for a unit-bearing attribute.
    ///
    /// Falls back to the vocabulary default when the call did not supply a
    /// `<name>_units` key; `None` for attributes without units.
    #[must_use]
    pub fn units(&self, attr: &str) -> Option<Units> {
        if let Some(&units) = self.units.get(attr) {
            return Some(units);
        }
        let spec = self.kind.spec().attr(attr)?;
        spec.units.map(Units::default_for)
    }

    /// The bound data source, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Arc<ColumnDataSource>> {
        self.source.as_ref()
    }

    /// The view filter.
    #[must_use]
    pub fn view(&self) -> &ViewFilter {
        &self.view
    }

    /// Row indices visible through the view filter.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        let nrow = self.source.as_ref().map_or(0, |s| s.nrow());
        self.view.select(nrow)
    }

    /// The selection-state glyph slot.
    #[must_use]
    pub fn selection_glyph(&self) -> &GlyphOverride {
        &self.selection_glyph
    }

    /// The nonselection-state glyph slot.
    #[must_use]
    pub fn nonselection_glyph(&self) -> &GlyphOverride {
        &self.nonselection_glyph
    }

    /// The hover-state glyph slot.
    #[must_use]
    pub fn hover_glyph(&self) -> &GlyphOverride {
        &self.hover_glyph
    }

    /// The muted-state glyph slot.
    #[must_use]
    pub fn muted_glyph(&self) -> &GlyphOverride {
        &self.muted_glyph
    }

    /// Legend association, if any.
    #[must_use]
    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Draw-order level.
    #[must_use]
    pub fn level(&self) -> RenderLevel {
        self.level
    }

    /// Renderer name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the renderer is visible.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Name of the x range this renderer maps to.
    #[must_use]
    pub fn x_range_name(&self) -> &str {
        &self.x_range_name
    }

    /// Name of the y range this renderer maps to.
    #[must_use]
    pub fn y_range_name(&self) -> &str {
        &self.y_range_name
    }

    /// Coordinate-system override, if any.
    #[must_use]
    pub fn coordinates(&self) -> Option<&CoordinateMapping> {
        self.coordinates.as_ref()
    }

    /// Materialize an attribute for drawing.
    ///
    /// This is the single deferred step of the pipeline: a field reference
    /// is looked up in the data source here, and only here.
    ///
    /// # Errors
    ///
    /// [`Error::UnresolvedField`] when a field reference names a column the
    /// source does not have (or no source is bound);
    /// [`Error::UnknownAttribute`] when `name` is not part of the glyph's
    /// schema.
    pub fn materialize(&self, name: &str) -> Result<Materialized<'_>> {
        let value = self.attrs.get(name).ok_or_else(|| Error::UnknownAttribute {
            glyph: self.kind.name(),
            name: name.to_string(),
        })?;
        match value {
            AttrValue::Scalar(scalar) => Ok(Materialized::Constant(scalar)),
            AttrValue::Array(array) => Ok(Materialized::Array(array)),
            AttrValue::ColorBuffer(colors) => Ok(Materialized::Colors(colors)),
            AttrValue::Field(field) => {
                let column = self
                    .source
                    .as_ref()
                    .and_then(|source| source.column(field))
                    .ok_or_else(|| Error::UnresolvedField { field: field.clone() })?;
                Ok(Materialized::Column(column))
            }
        }
    }
}

fn default_value(default: AttrDefault, name: &'static str) -> AttrValue {
    match default {
        AttrDefault::SelfField => AttrValue::Field(name.to_string()),
        AttrDefault::Number(v) => AttrValue::Scalar(Scalar::Number(v)),
        AttrDefault::Text(s) => AttrValue::Scalar(Scalar::Text(s.to_string())),
        AttrDefault::Color(c) => AttrValue::Scalar(Scalar::Color(c)),
        AttrDefault::Marker(m) => AttrValue::Scalar(Scalar::Marker(m)),
    }
}

/// Build a renderer from bound arguments and display state.
///
/// Runs the value resolver over every bound attribute, fills unbound
/// attributes from schema defaults, and folds variant bindings into the
/// alternate-state glyph slots. Does not register the renderer; the plot
/// owns its list.
///
/// # Errors
///
/// Propagates [`Error::InvalidAttributeValue`] from value resolution.
pub(crate) fn build_renderer(
    kind: GlyphKind,
    bound: BoundArgs,
    display: DisplayState,
) -> Result<GlyphRenderer> {
    let spec = kind.spec();
    let has_source = display.source.is_some();
    let BoundArgs { mut base, variants, units } = bound;

    let mut attrs = BTreeMap::new();
    for attr in spec.attrs() {
        let value = match base.remove(attr.name) {
            Some(raw) => resolve(attr, raw, has_source)?,
            None => default_value(attr.default, attr.name),
        };
        attrs.insert(attr.name.to_string(), value);
    }

    let mut slots: BTreeMap<RenderVariant, BTreeMap<String, AttrValue>> = BTreeMap::new();
    for ((variant, name), raw) in variants {
        // lookup() only yields variants of attributes in the schema
        if let Some(attr) = spec.attr(&name) {
            let value = resolve(attr, raw, has_source)?;
            slots.entry(variant).or_default().insert(name, value);
        }
    }
    let mut slot = |variant: RenderVariant, empty: GlyphOverride| {
        slots.remove(&variant).map_or(empty, GlyphOverride::Styled)
    };
    let selection_glyph = slot(RenderVariant::Selection, GlyphOverride::Auto);
    let nonselection_glyph = slot(RenderVariant::Nonselection, GlyphOverride::Auto);
    let hover_glyph = slot(RenderVariant::Hover, GlyphOverride::Off);
    let muted_glyph = slot(RenderVariant::Muted, GlyphOverride::Auto);

    Ok(GlyphRenderer {
        kind,
        attrs,
        units,
        source: display.source,
        view: display.view,
        selection_glyph,
        nonselection_glyph,
        hover_glyph,
        muted_glyph,
        legend: display.legend,
        level: display.level,
        name: display.name,
        visible: display.visible.unwrap_or(true),
        x_range_name: display.x_range_name.unwrap_or_else(|| "default".to_string()),
        y_range_name: display.y_range_name.unwrap_or_else(|| "default".to_string()),
        coordinates: display.coordinates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::value::Value;

    fn renderer_with_source() -> GlyphRenderer {
        let source = Arc::new(ColumnDataSource::from_xy(&[1.0, 2.0], &[3.0, 4.0]));
        let mut bound = BoundArgs::default();
        bound.base.insert("radius".into(), Value::Number(2.0));
        let display = DisplayState { source: Some(source), ..DisplayState::default() };
        build_renderer(GlyphKind::Circle, bound, display).unwrap()
    }

    #[test]
    fn test_defaults_fill_unbound_attrs() {
        let renderer = renderer_with_source();
        assert_eq!(renderer.attr("x"), Some(&AttrValue::Field("x".into())));
        assert_eq!(renderer.attr("radius"), Some(&AttrValue::Scalar(Scalar::Number(2.0))));
        assert_eq!(
            renderer.attr("fill_color"),
            Some(&AttrValue::Scalar(Scalar::Color(Rgba::GRAY)))
        );
        assert_eq!(renderer.attr("fill_alpha"), Some(&AttrValue::Scalar(Scalar::Number(1.0))));
    }

    #[test]
    fn test_materialize_field_and_constant() {
        let renderer = renderer_with_source();
        match renderer.materialize("x").unwrap() {
            Materialized::Column(Column::Numbers(v)) => assert_eq!(v, &[1.0, 2.0]),
            other => panic!("expected column, got {other:?}"),
        }
        assert!(matches!(renderer.materialize("radius").unwrap(), Materialized::Constant(_)));
    }

    #[test]
    fn test_materialize_missing_field_is_deferred_error() {
        let source = Arc::new(ColumnDataSource::new());
        let mut bound = BoundArgs::default();
        bound.base.insert("x".into(), Value::Text("missing".into()));
        let display = DisplayState { source: Some(source), ..DisplayState::default() };
        // construction succeeds: field validity is a draw-time concern
        let renderer = build_renderer(GlyphKind::Circle, bound, display).unwrap();
        let err = renderer.materialize("x").unwrap_err();
        assert_eq!(err, Error::UnresolvedField { field: "missing".into() });
    }

    #[test]
    fn test_materialize_unknown_attr() {
        let renderer = renderer_with_source();
        assert!(matches!(
            renderer.materialize("bogus"),
            Err(Error::UnknownAttribute { glyph: "circle", .. })
        ));
    }

    #[test]
    fn test_variant_bindings_fill_slots() {
        let mut bound = BoundArgs::default();
        bound
            .variants
            .insert((RenderVariant::Hover, "fill_color".into()), Value::Text("red".into()));
        let renderer =
            build_renderer(GlyphKind::Circle, bound, DisplayState::default()).unwrap();
        match renderer.hover_glyph() {
            GlyphOverride::Styled(map) => {
                assert_eq!(
                    map.get("fill_color"),
                    Some(&AttrValue::Scalar(Scalar::Color(Rgba::RED)))
                );
            }
            other => panic!("expected styled hover slot, got {other:?}"),
        }
        assert_eq!(renderer.selection_glyph(), &GlyphOverride::Auto);
        assert_eq!(renderer.muted_glyph(), &GlyphOverride::Auto);
    }

    #[test]
    fn test_default_slots() {
        let renderer =
            build_renderer(GlyphKind::Circle, BoundArgs::default(), DisplayState::default())
                .unwrap();
        assert_eq!(renderer.hover_glyph(), &GlyphOverride::Off);
        assert_eq!(renderer.selection_glyph(), &GlyphOverride::Auto);
        assert!(renderer.visible());
        assert_eq!(renderer.x_range_name(), "default");
        assert_eq!(renderer.level(), RenderLevel::Glyph);
    }

    #[test]
    fn test_units_fall_back_to_vocabulary_default() {
        let renderer =
            build_renderer(GlyphKind::Wedge, BoundArgs::default(), DisplayState::default())
                .unwrap();
        assert_eq!(renderer.units("start_angle"), Some(Units::Rad));
        assert_eq!(renderer.units("radius"), Some(Units::Data));
        assert_eq!(renderer.units("x"), None);
    }

    #[test]
    fn test_indices_follow_view_filter() {
        let source = Arc::new(ColumnDataSource::from_xy(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]));
        let display = DisplayState {
            source: Some(source),
            view: ViewFilter::indices(vec![2, 0]),
            ..DisplayState::default()
        };
        let renderer = build_renderer(GlyphKind::Circle, BoundArgs::default(), display).unwrap();
        assert_eq!(renderer.indices(), vec![2, 0]);
    }
}
