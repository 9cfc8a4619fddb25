//! End-to-end construction tests for the glyph facade.
//!
//! Exercises every glyph kind through the three call shapes and checks the
//! whole error taxonomy, including the single deferred error class.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use glyphic::glyph::{Call, ElementType, GlyphKind, MarkerKind, Value};
use glyphic::prelude::*;
use glyphic::renderer::{CoordinateMapping, Materialized, ScaleKind};

/// A type-correct sample value for one attribute of a glyph.
fn sample_value(ty: ElementType) -> Value {
    match ty {
        ElementType::Number | ElementType::Angle => Value::Number(1.5),
        ElementType::Alpha => Value::Number(0.5),
        ElementType::Text => Value::Text("label".into()),
        ElementType::Color => Value::Text("red".into()),
        ElementType::Marker => Value::Marker(MarkerKind::Diamond),
        ElementType::NumberList => Value::Lists(vec![vec![1.0, 2.0], vec![3.0]]),
        ElementType::Image => Value::Images(vec![vec![vec![0.0, 1.0], vec![2.0, 3.0]]]),
    }
}

fn positional_values(kind: GlyphKind) -> Vec<Value> {
    let spec = kind.spec();
    spec.positional
        .iter()
        .map(|name| {
            let attr = spec.attr(name).expect("positional attr in schema");
            sample_value(attr.ty)
        })
        .collect()
}

#[test]
fn every_kind_accepts_zero_arguments_with_defaults() {
    for kind in GlyphKind::ALL {
        let mut plot = Plot::new();
        let renderer = plot.glyph(kind, ()).unwrap();
        for name in kind.spec().positional {
            assert!(
                renderer.attr(name).is_some(),
                "{}: required attribute `{name}` missing after zero-arg call",
                kind.name()
            );
        }
        assert_eq!(plot.renderers().len(), 1);
    }
}

#[test]
fn every_kind_accepts_exact_positional_count() {
    for kind in GlyphKind::ALL {
        let mut plot = Plot::new();
        let renderer = plot.glyph(kind, Call::positional(positional_values(kind))).unwrap();
        assert_eq!(renderer.kind(), kind);
    }
}

#[test]
fn off_by_one_positional_count_is_a_shape_mismatch() {
    for kind in GlyphKind::ALL {
        let expected = kind.spec().positional.len();
        for delta in [-1i64, 1] {
            let count = usize::try_from(expected as i64 + delta).unwrap();
            let mut values = positional_values(kind);
            values.resize(count, Value::Number(0.0));
            let mut plot = Plot::new();
            let err = plot.glyph(kind, Call::positional(values)).unwrap_err();
            match err {
                Error::ArgumentShapeMismatch { glyph, expected: e, got, .. } => {
                    assert_eq!(glyph, kind.name());
                    assert_eq!(e, expected);
                    assert_eq!(got, count);
                }
                other => panic!("{}: expected shape mismatch, got {other:?}", kind.name()),
            }
        }
    }
}

#[test]
fn double_binding_is_ambiguous_for_every_kind() {
    for kind in GlyphKind::ALL {
        let first = kind.spec().positional[0];
        let attr = kind.spec().attr(first).unwrap();
        let call = Call::positional(positional_values(kind))
            .options([(first, sample_value(attr.ty))]);
        let mut plot = Plot::new();
        let err = plot.glyph(kind, call).unwrap_err();
        assert_eq!(
            err,
            Error::AmbiguousAttribute { name: first.to_string() },
            "{}",
            kind.name()
        );
    }
}

#[test]
fn unknown_options_key_is_rejected() {
    let mut plot = Plot::new();
    let err = plot.circle(Call::with_options([("widthh", 1.0)])).unwrap_err();
    assert_eq!(err, Error::UnknownAttribute { glyph: "circle", name: "widthh".into() });
}

#[test]
fn string_resolves_to_field_only_when_source_is_bound() {
    let source = Arc::new(ColumnDataSource::new());

    let mut plot = Plot::new();
    let with_source = plot
        .text(Call::with_options([("text", "labels")]).source(Arc::clone(&source)))
        .unwrap();
    assert!(matches!(with_source.attr("text"), Some(glyphic::glyph::AttrValue::Field(f)) if f == "labels"));

    let without_source = plot.text(Call::with_options([("text", "labels")])).unwrap();
    assert!(matches!(
        without_source.attr("text"),
        Some(glyphic::glyph::AttrValue::Scalar(glyphic::glyph::Scalar::Text(s))) if s == "labels"
    ));
}

#[test]
fn field_references_are_not_eagerly_validated() {
    // the source has no such column; construction must still succeed
    let source = Arc::new(ColumnDataSource::from_xy(&[1.0], &[2.0]));
    let mut plot = Plot::new();
    let renderer = plot
        .circle(Call::with_options([("radius", "not_a_column")]).source(source))
        .unwrap();

    let err = renderer.materialize("radius").unwrap_err();
    assert_eq!(err, Error::UnresolvedField { field: "not_a_column".into() });

    // the bound columns still materialize
    assert!(matches!(renderer.materialize("x"), Ok(Materialized::Column(_))));
}

#[test]
fn binding_the_same_call_twice_is_idempotent() {
    let source = Arc::new(ColumnDataSource::from_xy(&[1.0, 2.0], &[3.0, 4.0]));
    let call = Call::positional(["x".into(), "y".into(), 0.5.into()])
        .options([("fill_color", "navy")])
        .source(source)
        .legend_label("series A");

    let mut plot = Plot::new();
    let first = plot.circle(call.clone()).unwrap();
    let second = plot.circle(call).unwrap();

    assert_eq!(plot.renderers().len(), 2);
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
}

#[test]
fn deprecated_aliases_notice_once_and_preset_the_marker() {
    let mut plot = Plot::new();

    let star = plot.star(()).unwrap();
    assert_eq!(star.kind(), GlyphKind::Scatter);
    assert_eq!(
        star.attr("marker"),
        Some(&glyphic::glyph::AttrValue::Scalar(glyphic::glyph::Scalar::Marker(
            MarkerKind::Star
        )))
    );

    plot.star(()).unwrap();
    plot.star(()).unwrap();
    plot.x(()).unwrap();
    plot.inverted_triangle(()).unwrap();

    assert_eq!(plot.notices().len(), 3);
    assert!(plot.notices().seen("star"));
    assert!(plot.notices().seen("x"));
    assert!(plot.notices().seen("inverted_triangle"));

    // the registry is resettable between test cases
    plot.notices_mut().reset();
    assert!(plot.notices().is_empty());
    plot.x(()).unwrap();
    assert_eq!(plot.notices().len(), 1);
}

#[test]
fn view_filter_is_carried_not_applied() {
    let source = Arc::new(ColumnDataSource::from_xy(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]));
    let mut plot = Plot::new();
    let renderer = plot
        .circle(Call::new().source(source).view(ViewFilter::indices(vec![0, 2])))
        .unwrap();
    assert_eq!(renderer.view(), &ViewFilter::indices(vec![0, 2]));
    assert_eq!(renderer.indices(), vec![0, 2]);
}

#[test]
fn display_state_defaults_and_overrides() {
    let mut plot = Plot::new();
    let plain = plot.vbar(()).unwrap();
    assert!(plain.visible());
    assert_eq!(plain.level(), RenderLevel::Glyph);
    assert_eq!(plain.x_range_name(), "default");
    assert!(plain.legend().is_none());
    assert!(plain.coordinates().is_none());

    let styled = plot
        .vbar(
            Call::new()
                .legend_field("category")
                .level(RenderLevel::Annotation)
                .name("bars")
                .visible(false)
                .x_range_name("secondary")
                .coordinates(CoordinateMapping {
                    x_scale: ScaleKind::Log,
                    y_scale: ScaleKind::Linear,
                }),
        )
        .unwrap();
    assert_eq!(styled.legend(), Some(&Legend::Field("category".into())));
    assert_eq!(styled.level(), RenderLevel::Annotation);
    assert_eq!(styled.name(), Some("bars"));
    assert!(!styled.visible());
    assert_eq!(styled.x_range_name(), "secondary");
    assert_eq!(styled.coordinates().map(|c| c.x_scale), Some(ScaleKind::Log));
}

#[test]
fn variant_options_populate_override_slots() {
    let mut plot = Plot::new();
    let renderer = plot
        .circle(Call::with_options([
            ("hover_fill_color", Value::from("red")),
            ("muted_fill_alpha", Value::from(0.2)),
        ]))
        .unwrap();

    assert!(matches!(renderer.hover_glyph(), GlyphOverride::Styled(map) if map.len() == 1));
    assert!(matches!(renderer.muted_glyph(), GlyphOverride::Styled(map) if map.len() == 1));
    assert_eq!(renderer.selection_glyph(), &GlyphOverride::Auto);
    assert_eq!(renderer.nonselection_glyph(), &GlyphOverride::Auto);
}
