//! Glyph schemas, values, and call binding.
//!
//! # Components
//!
//! - **Kinds**: the fixed glyph and marker catalogs
//! - **Specs**: the static per-glyph schema registry (positional order,
//!   attribute element types, vectorization, units, defaults)
//! - **Values**: raw caller values and their resolution into constants,
//!   field references, arrays, or color buffers
//! - **Args**: call-shape classification and the argument binder
//!
//! # Example
//!
//! ```rust
//! use glyphic::glyph::{Call, GlyphKind};
//! use glyphic::Plot;
//!
//! let mut plot = Plot::new();
//! let renderer = plot
//!     .circle(Call::positional([vec![1.0, 2.0].into(), vec![3.0, 4.0].into(), 0.5.into()]))
//!     .unwrap();
//! assert_eq!(renderer.kind(), GlyphKind::Circle);
//! ```

pub mod args;
pub mod kind;
pub mod spec;
pub mod value;

pub use args::{bind, Args, BoundArgs, Call, OptionsMap};
pub use kind::{GlyphKind, MarkerKind};
pub use spec::{AttrDefault, AttrKey, AttrSpec, ElementType, GlyphSpec, RenderVariant, Units, UnitsKind};
pub use value::{resolve, ArrayValue, AttrValue, Scalar, Value};
