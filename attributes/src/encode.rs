//! Encoding records back into generic tree nodes.

use elastic::encoder::{EncodableTo, Encoder};
use tracing::{debug, trace};
use tree::{Key, Map, Node};

use crate::error::{Error, Result};
use crate::record::{Record, Value};
use crate::schema::Codec;
use crate::temporal;

impl EncodableTo<Record> for Node {}

impl Encoder<Record, Node> for Record {
    type Error = Error;

    /// When the type has a default attribute and no other attribute is set,
    /// the record collapses to the encoding of the default attribute alone
    /// (`Null` if that is unset too). Otherwise a map keyed by attribute name
    /// in declaration order; unset attributes and `Null` encodings are left
    /// out.
    fn encode(&self) -> Result<Node> {
        let ty = self.codec().type_schema();

        if let Some(default) = ty.default {
            let others_unset = self
                .slots
                .iter()
                .enumerate()
                .all(|(i, slot)| i == default || slot.is_none());
            if others_unset {
                debug!(type_name = %ty.name, "collapse to default attribute");
                return match &self.slots[default] {
                    Some(value) => encode_value(value),
                    None => Ok(Node::Null),
                };
            }
        }

        let mut map = Map::with_capacity(self.slots.len());
        for (attribute, slot) in ty.attributes.iter().zip(&self.slots) {
            let Some(value) = slot else { continue };
            let node = encode_value(value)?;
            trace!(
                type_name = %ty.name,
                attribute = attribute.name(),
                kind = node.kind(),
                "encode attribute"
            );
            if !node.is_null() {
                map.insert(Key::text(attribute.name()), node);
            }
        }
        Ok(Node::Map(map))
    }
}

fn encode_value(value: &Value) -> Result<Node> {
    match value {
        Value::List(records) => records
            .iter()
            .map(|record| record.encode())
            .collect::<Result<Vec<_>>>()
            .map(Node::Sequence),
        Value::Record(record) => record.encode(),
        Value::Time(time) => Ok(Node::Text(temporal::render(time))),
        Value::Node(node) => Ok(node.clone()),
    }
}

impl Codec {
    /// Encodes `record`, which must be an instance of this codec's type.
    pub fn encode(&self, record: &Record) -> Result<Node> {
        if record.codec() != self {
            return Err(Error::TypeMismatch {
                expected: self.type_name().to_string(),
                found: record.type_name().to_string(),
            });
        }
        record.encode()
    }
}
