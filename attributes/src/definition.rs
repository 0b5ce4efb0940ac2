//! Schema definition documents.
//!
//! A definition maps type names to their attributes, in order. Each
//! attribute is written in one of the declaration forms:
//!
//! ```yaml
//! Person:
//!   name: ~                        # no coercion
//! City:
//!   name: ~
//!   mayor: Person                  # nested type
//! Country:
//!   cities: [City]                 # collection of a nested type
//! Item:
//!   description: { default: true } # options map
//!   notes: ~
//! Apple:
//!   picked_at: time                # built-in descriptor
//! Marker: ~                        # type without attributes
//! ```
//!
//! Built-in words are listed on [`Descriptor`]'s `FromStr` implementation;
//! any other word names a nested type.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::schema::{Attribute, Schema, SchemaBuilder};

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Definition {
    types: IndexMap<String, Option<IndexMap<String, Option<AttributeSpec>>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AttributeSpec {
    Type(TypeSpec),
    Options(OptionsSpec),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TypeSpec {
    Word(String),
    Collection(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsSpec {
    #[serde(rename = "type", default)]
    kind: Option<TypeSpec>,
    #[serde(default)]
    default: bool,
}

impl TypeSpec {
    fn descriptor(&self, type_name: &str, attribute: &str) -> Result<Descriptor> {
        match self {
            TypeSpec::Word(word) => word.parse(),
            TypeSpec::Collection(elements) => match elements.as_slice() {
                [element] if !Descriptor::is_builtin(element) => {
                    Ok(Descriptor::collection(element.trim()))
                }
                [element] => Err(Error::Definition(format!(
                    "{}.{}: collection element must be a declared type, not {}",
                    type_name, attribute, element
                ))),
                _ => Err(Error::Definition(format!(
                    "{}.{}: collection must name exactly one element type, got {}",
                    type_name,
                    attribute,
                    elements.len()
                ))),
            },
        }
    }
}

impl Definition {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yml::from_str(text)?)
    }

    /// Replays the definition as declarations on a fresh builder.
    pub fn to_builder(&self) -> Result<SchemaBuilder> {
        let mut builder = SchemaBuilder::new();
        for (type_name, attributes) in &self.types {
            builder.declare_type(type_name);
            for (name, spec) in attributes.iter().flatten() {
                let attribute = match spec {
                    None => Attribute::new(name),
                    Some(AttributeSpec::Type(kind)) => {
                        Attribute::new(name).with_type(kind.descriptor(type_name, name)?)
                    }
                    Some(AttributeSpec::Options(options)) => {
                        let mut attribute = Attribute::new(name);
                        if let Some(kind) = &options.kind {
                            attribute = attribute.with_type(kind.descriptor(type_name, name)?);
                        }
                        if options.default {
                            attribute = attribute.as_default();
                        }
                        attribute
                    }
                };
                builder.declare(type_name, attribute)?;
            }
        }
        Ok(builder)
    }

    pub fn build(&self) -> Result<Schema> {
        Ok(self.to_builder()?.build())
    }
}
