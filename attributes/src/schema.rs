//! Schema registry: per-type, ordered attribute declarations.
//!
//! Declarations are collected by a [`SchemaBuilder`] and frozen into an
//! immutable [`Schema`]. A built schema is shared by reference counting, so
//! codecs and the records they decode can hold on to it cheaply.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::descriptor::{Coercion, Descriptor};
use crate::error::{Error, Result};

/// One attribute declaration: `(name, descriptor, is_default)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    descriptor: Descriptor,
    is_default: bool,
}

impl Attribute {
    /// An untyped, non-default attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            descriptor: Descriptor::None,
            is_default: false,
        }
    }

    pub fn with_type(mut self, descriptor: Descriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    /// Marks this attribute as the one that absorbs non-map input.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.descriptor != Descriptor::None {
            write!(f, ": {}", self.descriptor)?;
        }
        if self.is_default {
            write!(f, " (default)")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    types: IndexMap<String, Vec<Attribute>>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `attribute` on `type_name`, overwriting any declaration of
    /// the same name in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultipleDefaults`] if `attribute` is a default
    /// attribute and the type already has a different one.
    pub fn declare(&mut self, type_name: &str, attribute: Attribute) -> Result<&mut Self> {
        let attributes = self.types.entry(type_name.to_string()).or_default();

        if attribute.is_default {
            if let Some(existing) = attributes
                .iter()
                .find(|a| a.is_default && a.name != attribute.name)
            {
                return Err(Error::MultipleDefaults {
                    type_name: type_name.to_string(),
                    existing: existing.name.clone(),
                    attempted: attribute.name,
                });
            }
        }

        debug!(type_name, attribute = %attribute, "declare attribute");
        match attributes.iter_mut().find(|a| a.name == attribute.name) {
            Some(slot) => *slot = attribute,
            None => attributes.push(attribute),
        }
        Ok(self)
    }

    /// Registers a type with no attributes (or leaves an existing one alone).
    pub fn declare_type(&mut self, type_name: &str) -> &mut Self {
        self.types.entry(type_name.to_string()).or_default();
        self
    }

    /// Declarations of `type_name` in declaration order. Empty for a type
    /// that has none.
    pub fn lookup(&self, type_name: &str) -> &[Attribute] {
        self.types.get(type_name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Freezes the declarations into a [`Schema`].
    ///
    /// Types referenced by nested or collection descriptors but never
    /// declared are registered with no attributes.
    pub fn build(&self) -> Schema {
        let mut names: IndexMap<String, Vec<Attribute>> = self.types.clone();
        for attributes in self.types.values() {
            for attribute in attributes {
                if let Some(referenced) = attribute.descriptor.referenced_type() {
                    names.entry(referenced.to_string()).or_default();
                }
            }
        }

        let index: HashMap<String, TypeIndex> = names
            .keys()
            .enumerate()
            .map(|(i, name)| (name.clone(), TypeIndex(i)))
            .collect();

        let types = names
            .into_iter()
            .map(|(name, attributes)| {
                let coercions = attributes
                    .iter()
                    .map(|a| a.descriptor.resolve(|referenced| index[referenced]))
                    .collect();
                let default = attributes.iter().position(|a| a.is_default);
                TypeSchema {
                    name,
                    attributes,
                    coercions,
                    default,
                }
            })
            .collect::<Vec<_>>();

        debug!(types = types.len(), "schema built");
        Schema {
            inner: Arc::new(Inner { types, index }),
        }
    }
}

/// Position of a type inside a built schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TypeIndex(usize);

pub(crate) struct TypeSchema {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) coercions: Vec<Coercion>,
    pub(crate) default: Option<usize>,
}

impl TypeSchema {
    pub(crate) fn position(&self, attribute: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == attribute)
    }
}

struct Inner {
    types: Vec<TypeSchema>,
    index: HashMap<String, TypeIndex>,
}

/// An immutable set of type declarations.
#[derive(Clone)]
pub struct Schema {
    inner: Arc<Inner>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Declarations of `type_name` in declaration order. Empty for an
    /// unknown type.
    pub fn lookup(&self, type_name: &str) -> &[Attribute] {
        self.inner
            .index
            .get(type_name)
            .map(|i| self.type_schema(*i).attributes.as_slice())
            .unwrap_or(&[])
    }

    pub fn default_attribute(&self, type_name: &str) -> Option<&Attribute> {
        self.lookup(type_name).iter().find(|a| a.is_default)
    }

    /// Names of all known types, declared ones first, in declaration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.inner.types.iter().map(|t| t.name.as_str())
    }

    /// The codec that decodes into and encodes from `type_name`.
    pub fn codec(&self, type_name: &str) -> Result<Codec> {
        self.inner
            .index
            .get(type_name)
            .map(|i| self.codec_at(*i))
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))
    }

    pub(crate) fn codec_at(&self, index: TypeIndex) -> Codec {
        Codec {
            schema: self.clone(),
            index,
        }
    }

    pub(crate) fn type_schema(&self, index: TypeIndex) -> &TypeSchema {
        &self.inner.types[index.0]
    }

    fn same(&self, other: &Schema) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.type_names()).finish()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ty in &self.inner.types {
            writeln!(f, "{}", ty.name)?;
            for attribute in &ty.attributes {
                writeln!(f, "    {}", attribute)?;
            }
        }
        Ok(())
    }
}

/// Decode/encode capability for one declared type.
#[derive(Clone)]
pub struct Codec {
    schema: Schema,
    index: TypeIndex,
}

impl Codec {
    pub fn type_name(&self) -> &str {
        &self.type_schema().name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.type_schema().attributes
    }

    pub(crate) fn type_schema(&self) -> &TypeSchema {
        self.schema.type_schema(self.index)
    }
}

impl PartialEq for Codec {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.schema.same(&other.schema)
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Codec").field(&self.type_name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Attribute, Schema, SchemaBuilder};
    use crate::descriptor::Descriptor;
    use crate::error::Error;

    #[test]
    fn test_lookup_keeps_declaration_order() {
        let mut builder = SchemaBuilder::new();
        builder
            .declare("City", Attribute::new("name"))
            .unwrap()
            .declare("City", Attribute::new("mayor").with_type(Descriptor::nested("Person")))
            .unwrap();

        let names: Vec<&str> = builder.lookup("City").iter().map(Attribute::name).collect();
        assert_eq!(vec!["name", "mayor"], names);
    }

    #[rstest(type_name, case("Nowhere"), case(""))]
    fn test_lookup_unknown_type_is_empty(type_name: &str) {
        let builder = SchemaBuilder::new();
        assert!(builder.lookup(type_name).is_empty());
        assert!(builder.build().lookup(type_name).is_empty());
    }

    #[test]
    fn test_redeclare_overwrites_in_place() {
        let mut builder = SchemaBuilder::new();
        builder
            .declare("Apple", Attribute::new("picked_at"))
            .unwrap()
            .declare("Apple", Attribute::new("color"))
            .unwrap()
            .declare("Apple", Attribute::new("picked_at").with_type(Descriptor::Temporal))
            .unwrap();

        let attributes = builder.lookup("Apple");
        assert_eq!(2, attributes.len());
        assert_eq!("picked_at", attributes[0].name());
        assert_eq!(&Descriptor::Temporal, attributes[0].descriptor());
    }

    #[test]
    fn test_second_default_is_rejected() {
        let mut builder = SchemaBuilder::new();
        builder
            .declare("Item", Attribute::new("description").as_default())
            .unwrap();

        let err = builder
            .declare("Item", Attribute::new("notes").as_default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MultipleDefaults { ref existing, ref attempted, .. }
                if existing == "description" && attempted == "notes"
        ));
        // the rejected declaration leaves the type untouched
        assert_eq!(1, builder.lookup("Item").len());
    }

    #[test]
    fn test_redeclaring_the_default_is_allowed() {
        let mut builder = SchemaBuilder::new();
        builder
            .declare("Item", Attribute::new("description").as_default())
            .unwrap()
            .declare(
                "Item",
                Attribute::new("description")
                    .with_type(Descriptor::nested("Text"))
                    .as_default(),
            )
            .unwrap();
        assert_eq!(1, builder.lookup("Item").len());
    }

    #[test]
    fn test_build_registers_referenced_types() {
        let mut builder = Schema::builder();
        builder
            .declare("Country", Attribute::new("cities").with_type(Descriptor::collection("City")))
            .unwrap();
        let schema = builder.build();

        let names: Vec<&str> = schema.type_names().collect();
        assert_eq!(vec!["Country", "City"], names);
        assert!(schema.lookup("City").is_empty());
        assert!(schema.codec("City").is_ok());
    }

    #[test]
    fn test_codec_for_unknown_type() {
        let schema = SchemaBuilder::new().build();
        assert!(matches!(schema.codec("Ghost"), Err(Error::UnknownType(name)) if name == "Ghost"));
    }

    #[test]
    fn test_default_attribute() {
        let mut builder = SchemaBuilder::new();
        builder
            .declare("Item", Attribute::new("description").as_default())
            .unwrap()
            .declare("Item", Attribute::new("notes"))
            .unwrap();
        let schema = builder.build();

        assert_eq!(
            Some("description"),
            schema.default_attribute("Item").map(Attribute::name)
        );
        assert_eq!(None, schema.default_attribute("Ghost"));
    }

    #[test]
    fn test_codecs_compare_by_schema_identity() {
        let mut builder = SchemaBuilder::new();
        builder.declare_type("Person");
        let first = builder.build();
        let second = builder.build();

        assert_eq!(first.codec("Person").unwrap(), first.codec("Person").unwrap());
        assert_ne!(first.codec("Person").unwrap(), second.codec("Person").unwrap());
    }

    #[test]
    fn test_schema_display() {
        let mut builder = SchemaBuilder::new();
        builder
            .declare("Item", Attribute::new("description").as_default())
            .unwrap()
            .declare("List", Attribute::new("items").with_type(Descriptor::collection("Item")))
            .unwrap();

        let expected = "Item\n    description (default)\nList\n    items: [Item]\n";
        assert_eq!(expected, builder.build().to_string());
    }
}
