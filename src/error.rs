//! Error types for glyph construction.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while binding a glyph call.
///
/// Everything except [`Error::UnresolvedField`] is raised synchronously at
/// construction time; `UnresolvedField` is deferred until a field reference
/// is materialized against its data source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Positional argument count does not match any accepted call shape.
    #[error(
        "{glyph} expects no arguments, a single options map, or {expected} \
         positional values ({signature}) with an optional trailing options map; \
         got {got} positional values"
    )]
    ArgumentShapeMismatch {
        /// Glyph method that was called.
        glyph: &'static str,
        /// Declared required-positional count.
        expected: usize,
        /// Declared positional names, comma separated.
        signature: String,
        /// Positional count actually supplied.
        got: usize,
    },

    /// Options map contains a key that is not part of the glyph's schema.
    #[error("unknown attribute `{name}` for glyph {glyph}")]
    UnknownAttribute {
        /// Glyph method that was called.
        glyph: &'static str,
        /// The offending key.
        name: String,
    },

    /// The same attribute was supplied both positionally and in the
    /// trailing options map.
    #[error("attribute `{name}` bound both positionally and in the options map")]
    AmbiguousAttribute {
        /// Name of the doubly-bound attribute.
        name: String,
    },

    /// A value's runtime shape does not fit the attribute's element type.
    #[error("invalid value for attribute `{attribute}`: {reason}")]
    InvalidAttributeValue {
        /// Attribute whose resolution failed.
        attribute: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A field reference names a column absent from the data source.
    ///
    /// Raised at draw/materialization time, never at construction time.
    #[error("field `{field}` not present in data source")]
    UnresolvedField {
        /// The missing column name.
        field: String,
    },
}
