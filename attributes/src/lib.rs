//! # attributes
//!
//! Declarative attribute mapping between generic trees and typed records.
//!
//! Types declare named, optionally typed attributes on a [`SchemaBuilder`].
//! The built [`Schema`] hands out a [`Codec`] per type, which decodes a
//! generic [`tree::Node`] into a [`Record`]; the record encodes itself back.
//!
//! ```
//! use attributes::{Attribute, Decoder, Descriptor, Encoder, SchemaBuilder};
//! use tree::Node;
//!
//! let mut builder = SchemaBuilder::new();
//! builder
//!     .declare("Item", Attribute::new("description").as_default())?
//!     .declare("Item", Attribute::new("notes"))?
//!     .declare("List", Attribute::new("items").with_type(Descriptor::collection("Item")))?;
//! let schema = builder.build();
//!
//! let input = Node::map([(
//!     "items",
//!     Node::Sequence(vec![
//!         Node::from("buy milk"),
//!         Node::map([("description", "water plants"), ("notes", "in the room too")]),
//!     ]),
//! )]);
//! let list = schema.codec("List")?.decode(&input)?;
//! assert_eq!(input, list.encode()?);
//! # Ok::<(), attributes::error::Error>(())
//! ```
//!
//! ## Default attribute
//!
//! A type may mark one attribute as its default. Input that is not a map is
//! placed in that attribute, and a record whose other attributes are all
//! unset encodes as the default attribute's value alone.

#![forbid(unsafe_code)]

mod decode;
pub mod definition;
pub mod descriptor;
mod encode;
pub mod error;
pub mod record;
pub mod schema;
pub mod temporal;

#[cfg(test)]
mod testing;

pub use definition::Definition;
pub use descriptor::{Descriptor, ScalarKind};
pub use elastic::decoder::Decoder;
pub use elastic::encoder::Encoder;
pub use record::{Record, Value};
pub use schema::{Attribute, Codec, Schema, SchemaBuilder};
