//! Call classification and the argument binder.
//!
//! A glyph method accepts three call shapes: no arguments, a single
//! options map, or the glyph's fixed positional list with an optional
//! trailing options map. [`Call`] captures the shape as an explicit
//! tagged union at the API boundary; [`bind`] turns it into a raw
//! attribute mapping ready for value resolution.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::data::ColumnDataSource;
use crate::error::{Error, Result};
use crate::renderer::{CoordinateMapping, DisplayState, Legend, RenderLevel};
use crate::view::ViewFilter;

use super::kind::GlyphKind;
use super::spec::{AttrKey, GlyphSpec, RenderVariant, Units};
use super::value::Value;

/// Name→value options, as supplied by the caller.
pub type OptionsMap = BTreeMap<String, Value>;

/// The shape of a glyph call's arguments.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Args {
    /// No arguments; every attribute takes its schema default.
    #[default]
    Empty,
    /// A single name→value options map.
    Options(OptionsMap),
    /// The glyph's declared positional values, in declared order, plus an
    /// optional trailing options map.
    Positional(Vec<Value>, Option<OptionsMap>),
}

/// One glyph call: the argument shape plus auxiliary display state.
#[derive(Debug, Clone, Default)]
pub struct Call {
    args: Args,
    display: DisplayState,
}

impl Call {
    /// A call with no arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A call carrying a single options map.
    #[must_use]
    pub fn with_options<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::new().options(pairs)
    }

    /// A call carrying the glyph's positional values.
    #[must_use]
    pub fn positional(values: impl IntoIterator<Item = Value>) -> Self {
        Self { args: Args::Positional(values.into_iter().collect(), None), ..Self::default() }
    }

    /// Add option entries.
    ///
    /// On an empty call this makes it an options call; on a positional
    /// call the entries land in the trailing options map.
    #[must_use]
    pub fn options<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let entries = pairs.into_iter().map(|(k, v)| (k.into(), v.into()));
        self.args = match self.args {
            Args::Empty => Args::Options(entries.collect()),
            Args::Options(mut map) => {
                map.extend(entries);
                Args::Options(map)
            }
            Args::Positional(values, trailing) => {
                let mut map = trailing.unwrap_or_default();
                map.extend(entries);
                Args::Positional(values, Some(map))
            }
        };
        self
    }

    /// Bind a data source.
    #[must_use]
    pub fn source(mut self, source: Arc<ColumnDataSource>) -> Self {
        self.display.source = Some(source);
        self
    }

    /// Attach a view filter.
    #[must_use]
    pub fn view(mut self, view: ViewFilter) -> Self {
        self.display.view = view;
        self
    }

    /// Set a fixed legend label.
    #[must_use]
    pub fn legend_label(mut self, label: impl Into<String>) -> Self {
        self.display.legend = Some(Legend::Label(label.into()));
        self
    }

    /// Legend entries from the distinct values of a source column.
    #[must_use]
    pub fn legend_field(mut self, field: impl Into<String>) -> Self {
        self.display.legend = Some(Legend::Field(field.into()));
        self
    }

    /// Like [`Call::legend_field`], grouped at construction time.
    #[must_use]
    pub fn legend_group(mut self, field: impl Into<String>) -> Self {
        self.display.legend = Some(Legend::Group(field.into()));
        self
    }

    /// Set the draw-order level.
    #[must_use]
    pub fn level(mut self, level: RenderLevel) -> Self {
        self.display.level = level;
        self
    }

    /// Name the renderer.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.display.name = Some(name.into());
        self
    }

    /// Set initial visibility.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.display.visible = Some(visible);
        self
    }

    /// Map the renderer onto a named x range.
    #[must_use]
    pub fn x_range_name(mut self, name: impl Into<String>) -> Self {
        self.display.x_range_name = Some(name.into());
        self
    }

    /// Map the renderer onto a named y range.
    #[must_use]
    pub fn y_range_name(mut self, name: impl Into<String>) -> Self {
        self.display.y_range_name = Some(name.into());
        self
    }

    /// Override the coordinate system.
    #[must_use]
    pub fn coordinates(mut self, coordinates: CoordinateMapping) -> Self {
        self.display.coordinates = Some(coordinates);
        self
    }

    /// The argument shape.
    #[must_use]
    pub fn args(&self) -> &Args {
        &self.args
    }

    pub(crate) fn into_parts(self) -> (Args, DisplayState) {
        (self.args, self.display)
    }
}

impl From<()> for Call {
    fn from((): ()) -> Self {
        Call::new()
    }
}

/// Binder output: raw values keyed by schema attribute, ready for the
/// value resolver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArgs {
    /// Base attribute bindings.
    pub base: BTreeMap<String, Value>,
    /// Alternate-state variant bindings, keyed by (variant, base name).
    pub variants: BTreeMap<(RenderVariant, String), Value>,
    /// Units bindings, keyed by base attribute name.
    pub units: BTreeMap<String, Units>,
}

fn classify(
    spec: &GlyphSpec,
    glyph: &'static str,
    bound: &mut BoundArgs,
    key: String,
    value: Value,
) -> Result<()> {
    match spec.lookup(&key) {
        None => Err(Error::UnknownAttribute { glyph, name: key }),
        Some(AttrKey::Base(attr)) => {
            if bound.base.contains_key(attr.name) {
                return Err(Error::AmbiguousAttribute { name: attr.name.to_string() });
            }
            bound.base.insert(attr.name.to_string(), value);
            Ok(())
        }
        Some(AttrKey::Units(attr)) => {
            let Value::Text(text) = value else {
                return Err(Error::InvalidAttributeValue {
                    attribute: key,
                    reason: "units must be a string".into(),
                });
            };
            let units = Units::parse(&text).ok_or_else(|| Error::InvalidAttributeValue {
                attribute: key.clone(),
                reason: format!("`{text}` is not a units name"),
            })?;
            if let Some(vocabulary) = attr.units {
                if !units.valid_for(vocabulary) {
                    return Err(Error::InvalidAttributeValue {
                        attribute: key,
                        reason: format!("`{text}` is not valid for this attribute"),
                    });
                }
            }
            bound.units.insert(attr.name.to_string(), units);
            Ok(())
        }
        Some(AttrKey::Variant(variant, attr)) => {
            bound.variants.insert((variant, attr.name.to_string()), value);
            Ok(())
        }
    }
}

/// Bind a call's arguments against a glyph's schema.
///
/// Overload resolution, first match wins: empty → all defaults; a single
/// options map → classified key by key; a positional list matching the
/// declared count → bound in declared order, trailing options merged in.
///
/// # Errors
///
/// [`Error::ArgumentShapeMismatch`] for any other positional count,
/// [`Error::UnknownAttribute`] for keys outside the schema, and
/// [`Error::AmbiguousAttribute`] when a trailing option names a
/// positionally-bound attribute.
pub fn bind(kind: GlyphKind, args: Args) -> Result<BoundArgs> {
    let spec = kind.spec();
    let mut bound = BoundArgs::default();
    match args {
        Args::Empty => Ok(bound),
        Args::Options(map) => {
            for (key, value) in map {
                classify(spec, kind.name(), &mut bound, key, value)?;
            }
            Ok(bound)
        }
        Args::Positional(values, trailing) => {
            if values.len() != spec.positional.len() {
                return Err(Error::ArgumentShapeMismatch {
                    glyph: kind.name(),
                    expected: spec.positional.len(),
                    signature: spec.signature(),
                    got: values.len(),
                });
            }
            for (&name, value) in spec.positional.iter().zip(values) {
                bound.base.insert(name.to_string(), value);
            }
            if let Some(map) = trailing {
                for (key, value) in map {
                    classify(spec, kind.name(), &mut bound, key, value)?;
                }
            }
            Ok(bound)
        }
    }
}
