//! Attribute values and the value resolver.
//!
//! Callers hand the API loosely-shaped [`Value`]s; the resolver normalizes
//! each one against its attribute's schema entry into an [`AttrValue`]:
//! a constant, a deferred field reference, an explicit array, or a color
//! buffer.

use crate::color::Rgba;
use crate::error::{Error, Result};

use super::kind::MarkerKind;
use super::spec::{AttrSpec, ElementType};

/// A raw caller-supplied attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single number.
    Number(f64),
    /// A string: a literal, a color name, a marker name, or a field
    /// reference, depending on the receiving attribute and context.
    Text(String),
    /// A single color.
    Color(Rgba),
    /// A single marker shape.
    Marker(MarkerKind),
    /// Per-item numbers.
    Numbers(Vec<f64>),
    /// Per-item strings.
    Texts(Vec<String>),
    /// Per-item colors.
    Colors(Vec<Rgba>),
    /// Per-item packed `0xRRGGBBAA` colors.
    PackedColors(Vec<u32>),
    /// Per-item numeric lists.
    Lists(Vec<Vec<f64>>),
    /// Per-item 2-D matrices.
    Images(Vec<Vec<Vec<f64>>>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Rgba> for Value {
    fn from(c: Rgba) -> Self {
        Value::Color(c)
    }
}

impl From<MarkerKind> for Value {
    fn from(m: MarkerKind) -> Self {
        Value::Marker(m)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Numbers(v)
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Value::Numbers(v.to_vec())
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Texts(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::Texts(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<Rgba>> for Value {
    fn from(v: Vec<Rgba>) -> Self {
        Value::Colors(v)
    }
}

impl From<Vec<u32>> for Value {
    fn from(v: Vec<u32>) -> Self {
        Value::PackedColors(v)
    }
}

impl From<Vec<Vec<f64>>> for Value {
    fn from(v: Vec<Vec<f64>>) -> Self {
        Value::Lists(v)
    }
}

impl From<Vec<Vec<Vec<f64>>>> for Value {
    fn from(v: Vec<Vec<Vec<f64>>>) -> Self {
        Value::Images(v)
    }
}

/// A resolved constant applied to every item.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Constant number.
    Number(f64),
    /// Constant string.
    Text(String),
    /// Constant color.
    Color(Rgba),
    /// Constant marker shape.
    Marker(MarkerKind),
}

/// A resolved explicit per-item array.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayValue {
    /// Per-item numbers.
    Numbers(Vec<f64>),
    /// Per-item strings.
    Texts(Vec<String>),
    /// Per-item marker shapes.
    Markers(Vec<MarkerKind>),
    /// Per-item numeric lists.
    Lists(Vec<Vec<f64>>),
    /// Per-item matrices.
    Images(Vec<Vec<Vec<f64>>>),
}

/// A fully-resolved attribute value.
///
/// Field references stay symbolic until the renderer materializes them
/// against its data source; cross-attribute length agreement is likewise a
/// draw-time concern.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// One constant for all items.
    Scalar(Scalar),
    /// A column name to look up in the data source at draw time.
    Field(String),
    /// Explicit per-item values.
    Array(ArrayValue),
    /// Explicit per-item colors, decoded from a color list or packed
    /// buffer. Never reinterpreted as a field reference.
    ColorBuffer(Vec<Rgba>),
}

fn invalid(spec: &AttrSpec, reason: impl Into<String>) -> Error {
    Error::InvalidAttributeValue { attribute: spec.name.to_string(), reason: reason.into() }
}

fn vectorized_or(spec: &AttrSpec, value: AttrValue) -> Result<AttrValue> {
    if spec.vectorized {
        Ok(value)
    } else {
        Err(invalid(spec, "attribute takes a single constant, not per-item values"))
    }
}

fn check_alpha(spec: &AttrSpec, v: f64) -> Result<f64> {
    if spec.ty == ElementType::Alpha && !(0.0..=1.0).contains(&v) {
        return Err(invalid(spec, format!("alpha {v} outside 0.0..=1.0")));
    }
    Ok(v)
}

/// Resolve a raw value against an attribute's schema entry.
///
/// Pure function of `(spec, value, has_source)`. A string prefers a field
/// reference whenever the attribute is vectorized and a data source is
/// bound; color and marker attributes first try to parse the string as a
/// literal of their element type.
///
/// # Errors
///
/// Returns [`Error::InvalidAttributeValue`] when the value's shape cannot
/// be reconciled with the element type.
pub fn resolve(spec: &AttrSpec, value: Value, has_source: bool) -> Result<AttrValue> {
    let field_ok = spec.vectorized && has_source;
    match (spec.ty, value) {
        // Numbers, alphas and angles share numeric handling.
        (ElementType::Number | ElementType::Alpha | ElementType::Angle, value) => match value {
            Value::Number(v) => Ok(AttrValue::Scalar(Scalar::Number(check_alpha(spec, v)?))),
            Value::Text(name) if field_ok => Ok(AttrValue::Field(name)),
            Value::Text(_) => Err(invalid(spec, "expected a number or a bound data source")),
            Value::Numbers(vs) => {
                if spec.ty == ElementType::Alpha {
                    for &v in &vs {
                        check_alpha(spec, v)?;
                    }
                }
                vectorized_or(spec, AttrValue::Array(ArrayValue::Numbers(vs)))
            }
            other => Err(invalid(spec, format!("expected a number, got {other:?}"))),
        },

        (ElementType::Text, value) => match value {
            Value::Text(name) if field_ok => Ok(AttrValue::Field(name)),
            Value::Text(s) => Ok(AttrValue::Scalar(Scalar::Text(s))),
            Value::Texts(vs) => vectorized_or(spec, AttrValue::Array(ArrayValue::Texts(vs))),
            other => Err(invalid(spec, format!("expected text, got {other:?}"))),
        },

        (ElementType::Color, value) => match value {
            Value::Color(c) => Ok(AttrValue::Scalar(Scalar::Color(c))),
            // A parseable color string is always a literal, never a field.
            Value::Text(s) => match Rgba::parse(&s) {
                Some(c) => Ok(AttrValue::Scalar(Scalar::Color(c))),
                None if field_ok => Ok(AttrValue::Field(s)),
                None => Err(invalid(spec, format!("`{s}` is not a color"))),
            },
            Value::Colors(cs) => vectorized_or(spec, AttrValue::ColorBuffer(cs)),
            Value::PackedColors(packed) => {
                let decoded = packed.into_iter().map(Rgba::from_packed).collect();
                vectorized_or(spec, AttrValue::ColorBuffer(decoded))
            }
            Value::Texts(names) => {
                let mut colors = Vec::with_capacity(names.len());
                for name in &names {
                    let color = Rgba::parse(name)
                        .ok_or_else(|| invalid(spec, format!("`{name}` is not a color")))?;
                    colors.push(color);
                }
                vectorized_or(spec, AttrValue::ColorBuffer(colors))
            }
            other => Err(invalid(spec, format!("expected a color, got {other:?}"))),
        },

        (ElementType::Marker, value) => match value {
            Value::Marker(m) => Ok(AttrValue::Scalar(Scalar::Marker(m))),
            Value::Text(s) => match MarkerKind::from_name(&s) {
                Some(m) => Ok(AttrValue::Scalar(Scalar::Marker(m))),
                None if field_ok => Ok(AttrValue::Field(s)),
                None => Err(invalid(spec, format!("`{s}` is not a marker shape"))),
            },
            Value::Texts(names) => {
                let mut markers = Vec::with_capacity(names.len());
                for name in &names {
                    let marker = MarkerKind::from_name(name)
                        .ok_or_else(|| invalid(spec, format!("`{name}` is not a marker shape")))?;
                    markers.push(marker);
                }
                vectorized_or(spec, AttrValue::Array(ArrayValue::Markers(markers)))
            }
            other => Err(invalid(spec, format!("expected a marker, got {other:?}"))),
        },

        (ElementType::NumberList, value) => match value {
            Value::Text(name) if field_ok => Ok(AttrValue::Field(name)),
            Value::Lists(lists) => vectorized_or(spec, AttrValue::Array(ArrayValue::Lists(lists))),
            other => {
                Err(invalid(spec, format!("expected per-item number lists, got {other:?}")))
            }
        },

        (ElementType::Image, value) => match value {
            Value::Text(name) if field_ok => Ok(AttrValue::Field(name)),
            Value::Images(images) => {
                vectorized_or(spec, AttrValue::Array(ArrayValue::Images(images)))
            }
            other => Err(invalid(spec, format!("expected per-item matrices, got {other:?}"))),
        },
    }
}
