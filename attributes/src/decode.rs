//! Decoding generic tree nodes into records.

use std::collections::HashMap;

use elastic::decoder::{DecodableFrom, Decoder};
use tracing::{debug, trace};
use tree::{Key, Map, Node};

use crate::descriptor::Coercion;
use crate::error::{Error, Result};
use crate::record::{Record, Value};
use crate::schema::{Attribute, Codec};
use crate::temporal;

static NULL: Node = Node::Null;

impl DecodableFrom<Node> for Record {}

impl Decoder<Node, Record> for Codec {
    type Error = Error;

    /// A map input fills every declared attribute from the entry of the same
    /// name. Any other input goes to the default attribute alone, and fails
    /// with [`Error::InvalidRootShape`] when the type has none.
    fn decode(&self, input: &Node) -> Result<Record> {
        let ty = self.type_schema();
        let mut record = Record::new(self);

        match input {
            Node::Map(map) => {
                let entries = canonical_entries(map);
                let declared = ty.attributes.iter().zip(&ty.coercions);
                for (slot, (attribute, coercion)) in record.slots.iter_mut().zip(declared) {
                    let value = entries.get(attribute.name()).copied().unwrap_or(&NULL);
                    trace!(
                        type_name = %ty.name,
                        attribute = attribute.name(),
                        kind = value.kind(),
                        "decode attribute"
                    );
                    *slot = self.coerce(value, attribute, coercion)?;
                }
            }
            _ => {
                let Some(default) = ty.default else {
                    return Err(Error::InvalidRootShape {
                        type_name: ty.name.clone(),
                        found: input.kind(),
                    });
                };
                let attribute = &ty.attributes[default];
                debug!(
                    type_name = %ty.name,
                    attribute = attribute.name(),
                    kind = input.kind(),
                    "decode into default attribute"
                );
                record.slots[default] = self.coerce(input, attribute, &ty.coercions[default])?;
            }
        }

        Ok(record)
    }
}

impl Codec {
    fn coerce(&self, value: &Node, attribute: &Attribute, coercion: &Coercion) -> Result<Option<Value>> {
        if value.is_null() {
            return Ok(None);
        }

        let value = match coercion {
            Coercion::Collection(element) => {
                let Node::Sequence(items) = value else {
                    return Err(Error::ExpectedSequence {
                        type_name: self.type_name().to_string(),
                        attribute: attribute.name().to_string(),
                        found: value.kind(),
                    });
                };
                let codec = self.schema().codec_at(*element);
                let records = items
                    .iter()
                    .map(|item| codec.decode(item))
                    .collect::<Result<Vec<_>>>()?;
                Value::List(records)
            }
            Coercion::Nested(nested) => Value::Record(self.schema().codec_at(*nested).decode(value)?),
            Coercion::Temporal => {
                let text = value.as_str().ok_or_else(|| Error::ExpectedTimestamp {
                    type_name: self.type_name().to_string(),
                    attribute: attribute.name().to_string(),
                    found: value.kind(),
                })?;
                Value::Time(temporal::parse(text)?)
            }
            Coercion::Scalar(kind) => Value::Node(kind.cast(value)?),
            Coercion::Opaque | Coercion::None => Value::Node(value.clone()),
        };
        Ok(Some(value))
    }
}

/// Maps every key of `map` to its text form. When both forms of a name are
/// present the symbol key wins.
fn canonical_entries(map: &Map) -> HashMap<&str, &Node> {
    let mut entries = HashMap::with_capacity(map.len());
    for (key, value) in map {
        match key {
            Key::Symbol(name) => {
                entries.insert(name.as_str(), value);
            }
            Key::Text(name) => {
                entries.entry(name.as_str()).or_insert(value);
            }
        }
    }
    entries
}
