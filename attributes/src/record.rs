//! Typed records: one slot per declared attribute.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use tree::Node;

use crate::error::{Error, Result};
use crate::schema::{Attribute, Codec};
use crate::temporal;

/// A decoded attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A generic value: passthrough, opaque container or cast scalar.
    Node(Node),
    Record(Record),
    List(Vec<Record>),
    Time(DateTime<FixedOffset>),
}

impl Value {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_node().and_then(Node::as_str)
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Record]> {
        match self {
            Value::List(records) => Some(records),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Time(time) => Some(time),
            _ => None,
        }
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Node(Node::from(value))
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Vec<Record>> for Value {
    fn from(value: Vec<Record>) -> Self {
        Value::List(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Time(value)
    }
}

/// An instance of a declared type.
///
/// Every slot starts out unset (`None`). Unset is distinct from any value,
/// including empty text, zero and `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    codec: Codec,
    pub(crate) slots: Vec<Option<Value>>,
}

impl Record {
    /// An instance of the codec's type with every attribute unset.
    pub fn new(codec: &Codec) -> Self {
        Record {
            codec: codec.clone(),
            slots: vec![None; codec.attributes().len()],
        }
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    pub fn type_name(&self) -> &str {
        self.codec.type_name()
    }

    /// Value of `name`; `None` when unset or not declared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let position = self.codec.type_schema().position(name)?;
        self.slots[position].as_ref()
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets `name` and returns its previous value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        let position = self.position(name)?;
        Ok(self.slots[position].replace(value.into()))
    }

    /// Unsets `name` and returns its previous value.
    pub fn clear(&mut self, name: &str) -> Result<Option<Value>> {
        let position = self.position(name)?;
        Ok(self.slots[position].take())
    }

    /// Declarations paired with their current values, in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&Attribute, Option<&Value>)> {
        self.codec
            .attributes()
            .iter()
            .zip(self.slots.iter().map(Option::as_ref))
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.codec
            .type_schema()
            .position(name)
            .ok_or_else(|| Error::UnknownAttribute {
                type_name: self.type_name().to_string(),
                attribute: name.to_string(),
            })
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{}", self.type_name())?;
        let pad = "    ".repeat(depth + 1);
        for (attribute, value) in self.attributes() {
            let Some(value) = value else { continue };
            write!(f, "{}{}:", pad, attribute.name())?;
            match value {
                Value::Node(node) => writeln!(f, " {}", node)?,
                Value::Time(time) => writeln!(f, " {}", temporal::render(time))?,
                Value::Record(record) => {
                    write!(f, " ")?;
                    record.fmt_indented(f, depth + 1)?;
                }
                Value::List(records) => {
                    writeln!(f)?;
                    for record in records {
                        write!(f, "{}  - ", pad)?;
                        record.fmt_indented(f, depth + 2)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
