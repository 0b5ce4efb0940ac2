//! Encoder trait, the inverse of [`crate::decoder::Decoder`].
//!
//! Encoding needs no outside context: a decoded value remembers enough
//! about its own shape to render itself back, so the trait is implemented
//! on the value and takes only `&self`.

/// Encoder for converting `self` (of type `T`) into `E`.
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be produced by encoding a `T`.
pub trait EncodableTo<T> {}
