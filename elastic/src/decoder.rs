//! Decoder trait for schema-driven conversions.
//!
//! A `Decoder<T, D>` is a capability object that knows how to build a `D`
//! out of a borrowed `T`. Unlike a plain `TryFrom`, the decoder itself
//! carries context (for the attribute engine: which declared type to
//! produce), so the same source type can be decoded into many shapes.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! # Implementation Guide
//!
//! ```no_run
//! use elastic::decoder::{DecodableFrom, Decoder};
//!
//! struct Raw(String);
//! struct Upper(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Raw> for Upper {}
//!
//! struct UpperCodec;
//!
//! impl Decoder<Raw, Upper> for UpperCodec {
//!     type Error = MyError;
//!
//!     fn decode(&self, input: &Raw) -> Result<Upper, Self::Error> {
//!         Ok(Upper(input.0.to_uppercase()))
//!     }
//! }
//! ```

/// Decoder capability for converting a borrowed `T` into a `D`.
///
/// # Type Parameters
///
/// * `T` - The source representation (usually a generic tree node)
/// * `D` - The destination type that can be decoded from `T`
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `input` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` cannot be placed into `D`. Errors raised
    /// by nested decoders are returned as they are.
    fn decode(&self, input: &T) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
pub trait DecodableFrom<T> {}
