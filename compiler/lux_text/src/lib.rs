//! Text coordinates for lux sources.
//!
//! This crate is the coordinate system every other lux layer builds on:
//! - [`SourceText`] owns the complete source string
//! - [`Span`] locates a fragment of it as a half-open byte range
//! - [`Location`] is the human-readable `line:column` form of an offset
//!
//! Spans are byte-exact and cheap; locations are derived on demand and only
//! meant for diagnostics.

mod error;
mod location;
mod source_text;
mod span;

pub use error::TextError;
pub use location::Location;
pub use source_text::SourceText;
pub use span::Span;
