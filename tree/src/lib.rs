//! Generic tree values.
//!
//! A [`Node`] is an already-parsed, loosely-typed value with no schema
//! attached: the shape a JSON or YAML parser hands back. Map keys come in
//! two forms, [`Key::Text`] and [`Key::Symbol`]. They are distinct keys
//! inside a map, so opaque data keeps its original key identity, but
//! consumers that look attributes up by name treat them as equivalent.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered map from keys to nodes. Insertion order is preserved.
pub type Map = IndexMap<Key, Node>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Text(String),
    Symbol(String),
}

impl Key {
    pub fn text(name: impl Into<String>) -> Self {
        Key::Text(name.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Key::Symbol(name.into())
    }

    /// Returns the key name regardless of its form.
    pub fn as_str(&self) -> &str {
        match self {
            Key::Text(s) | Key::Symbol(s) => s,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(s) => write!(f, "{:?}", s),
            Key::Symbol(s) => write!(f, ":{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Symbol(String),
    Sequence(Vec<Node>),
    Map(Map),
}

impl Node {
    pub fn symbol(name: impl Into<String>) -> Self {
        Node::Symbol(name.into())
    }

    /// Builds a map node from `(key, value)` pairs, keeping their order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Key>,
        V: Into<Node>,
    {
        Node::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Short name of the node's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Boolean(_) => "boolean",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::Text(_) => "text",
            Node::Symbol(_) => "symbol",
            Node::Sequence(_) => "sequence",
            Node::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns the string content of a text or symbol scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Text(s) | Node::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `name` in a map node, accepting either key form.
    /// A symbol key wins over a text key with the same name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        let map = self.as_map()?;
        map.get(&Key::symbol(name))
            .or_else(|| map.get(&Key::text(name)))
    }

    /// Returns a copy in which every symbol key, at any depth, is replaced
    /// by the text key of the same name. Symbol scalars are left alone.
    pub fn canonical_keys(&self) -> Node {
        match self {
            Node::Sequence(items) => Node::Sequence(items.iter().map(Node::canonical_keys).collect()),
            Node::Map(map) => Node::Map(
                map.iter()
                    .map(|(k, v)| (Key::text(k.as_str()), v.canonical_keys()))
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Integer(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Boolean(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Sequence(value)
    }
}

impl From<Map> for Node {
    fn from(value: Map) -> Self {
        Node::Map(value)
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Node::Integer(i),
                // u64 beyond i64::MAX and every non-integral number
                None => Node::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Node::Text(s),
            serde_json::Value::Array(items) => {
                Node::Sequence(items.into_iter().map(Node::from).collect())
            }
            serde_json::Value::Object(map) => Node::Map(
                map.into_iter()
                    .map(|(k, v)| (Key::Text(k), Node::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Boolean(b) => write!(f, "{}", b),
            Node::Integer(i) => write!(f, "{}", i),
            Node::Float(x) => write!(f, "{:?}", x),
            Node::Text(s) => write!(f, "{:?}", s),
            Node::Symbol(s) => write!(f, ":{}", s),
            Node::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Node::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Symbols have no counterpart in JSON or YAML, so both symbol scalars and
// symbol keys serialize as plain strings.
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Boolean(b) => serializer.serialize_bool(*b),
            Node::Integer(i) => serializer.serialize_i64(*i),
            Node::Float(x) => serializer.serialize_f64(*x),
            Node::Text(s) | Node::Symbol(s) => serializer.serialize_str(s),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    state.serialize_entry(k.as_str(), v)?;
                }
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map, a sequence or a scalar")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        Node::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Node, E> {
        Ok(Node::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Node, E> {
        Ok(i64::try_from(v)
            .map(Node::Integer)
            .unwrap_or(Node::Float(v as f64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Node, E> {
        Ok(Node::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::Text(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(key) = access.next_key::<Node>()? {
            // YAML allows scalar keys of any kind; they all become text.
            let key = match key {
                Node::Text(s) => Key::Text(s),
                Node::Integer(_) | Node::Float(_) | Node::Boolean(_) => {
                    Key::Text(key.to_string())
                }
                other => {
                    return Err(de::Error::custom(format!(
                        "map keys must be scalars, got {}",
                        other.kind()
                    )));
                }
            };
            let value = access.next_value()?;
            map.insert(key, value);
        }
        Ok(Node::Map(map))
    }
}
