//! # elastic
//!
//! Core traits for decoding and encoding in the elastic attributes toolkit.
//!
//! This crate defines the `Decoder` and `Encoder` capability traits that
//! every convertible type in the workspace implements. The attribute engine
//! uses them to recurse into nested types without probing for methods at
//! runtime: a type that can be built from a generic tree exposes a
//! `Decoder`, and a value that can be turned back into one exposes an
//! `Encoder`.
//!
//! ## Overview
//!
//! The conversion pattern flows like this:
//! ```text
//! JSON/YAML → Node → Record        (decode)
//! Record → Node → JSON/YAML        (encode)
//! ```
//!
//! ## Type Safety
//!
//! The traits use marker traits (`DecodableFrom` and `EncodableTo`) so that
//! only declared conversions compile.
//!
//! ## Example
//!
//! Concrete implementations live in the `attributes` crate:
//!
//! ```ignore
//! use elastic::decoder::Decoder;
//! use elastic::encoder::Encoder;
//!
//! let codec = schema.codec("City")?;
//! let city = codec.decode(&node)?;
//! let node = city.encode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
