//! # Glyphic
//!
//! A typed vectorized-attribute glyph construction API for plotting
//! front-ends.
//!
//! Every visual attribute of a glyph (coordinates, radii, colors, text)
//! can be supplied as a single constant, an explicit per-item array, or a
//! field reference into a columnar data source. Calls are validated
//! against a static per-glyph schema at construction time; field lookups
//! stay symbolic until draw time.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use glyphic::prelude::*;
//!
//! let source = Arc::new(ColumnDataSource::from_xy(
//!     &[1.0, 2.0, 3.0],
//!     &[2.0, 4.0, 1.0],
//! ));
//!
//! let mut plot = Plot::new();
//! let renderer = plot
//!     .circle(
//!         Call::positional(["x".into(), "y".into(), 0.2.into()])
//!             .options([("fill_color", Value::from("navy")), ("fill_alpha", Value::from(0.5))])
//!             .source(source),
//!     )
//!     .unwrap();
//!
//! assert!(renderer.visible());
//! ```
//!
//! ## Call Shapes
//!
//! Each glyph method accepts three call shapes, resolved in order:
//!
//! - **No arguments**: every attribute takes its schema default
//! - **Options map**: attributes bound by name
//! - **Positional**: the glyph's declared positional values, optionally
//!   followed by a trailing options map
//!
//! Shape mismatches, unknown option keys, doubly-bound attributes, and
//! type-incompatible values are all synchronous construction errors; a
//! field reference naming a missing column is the single deferred error,
//! raised when the renderer materializes the attribute.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA color type and CSS-style parsing.
pub mod color;

/// Columnar data sources.
pub mod data;

/// View filters.
pub mod view;

// ============================================================================
// Construction Modules
// ============================================================================

/// Glyph schemas, values, and call binding.
pub mod glyph;

/// Glyph renderers and the renderer factory.
pub mod renderer;

/// The plot facade.
pub mod plot;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for glyph construction.
pub mod error;

pub use error::{Error, Result};
pub use plot::Plot;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use glyphic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::data::{Column, ColumnDataSource};
    pub use crate::error::{Error, Result};
    pub use crate::glyph::{Call, GlyphKind, MarkerKind, Value};
    pub use crate::plot::Plot;
    pub use crate::renderer::{GlyphOverride, GlyphRenderer, Legend, RenderLevel};
    pub use crate::view::ViewFilter;
}
