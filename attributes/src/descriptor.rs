//! Type descriptors: how one attribute's value is coerced.

use std::fmt;
use std::str::FromStr;

use tree::Node;

use crate::error::{Error, Result};
use crate::schema::TypeIndex;

/// Target of a plain scalar cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Text,
    Integer,
    Float,
    Boolean,
}

impl ScalarKind {
    /// Casts a scalar node into this kind.
    ///
    /// Text is parsed for the numeric and boolean kinds; any scalar renders
    /// to text. Sequences, maps and impossible conversions fail with
    /// [`Error::Cast`].
    pub fn cast(self, node: &Node) -> Result<Node> {
        let cast = match (self, node) {
            (ScalarKind::Text, Node::Text(_)) => Some(node.clone()),
            (ScalarKind::Text, Node::Symbol(s)) => Some(Node::Text(s.clone())),
            (ScalarKind::Text, Node::Integer(_) | Node::Float(_) | Node::Boolean(_)) => {
                Some(Node::Text(node.to_string()))
            }

            (ScalarKind::Integer, Node::Integer(_)) => Some(node.clone()),
            (ScalarKind::Integer, Node::Float(x))
                if x.fract() == 0.0 && *x >= i64::MIN as f64 && *x <= i64::MAX as f64 =>
            {
                Some(Node::Integer(*x as i64))
            }
            (ScalarKind::Integer, Node::Text(s)) => s.trim().parse().ok().map(Node::Integer),

            (ScalarKind::Float, Node::Float(_)) => Some(node.clone()),
            (ScalarKind::Float, Node::Integer(i)) => Some(Node::Float(*i as f64)),
            (ScalarKind::Float, Node::Text(s)) => s.trim().parse().ok().map(Node::Float),

            (ScalarKind::Boolean, Node::Boolean(_)) => Some(node.clone()),
            (ScalarKind::Boolean, Node::Text(s)) => match s.trim() {
                "true" => Some(Node::Boolean(true)),
                "false" => Some(Node::Boolean(false)),
                _ => None,
            },

            _ => None,
        };
        cast.ok_or_else(|| Error::Cast {
            kind: self,
            found: format!("{} {}", node.kind(), node),
        })
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Text => write!(f, "text"),
            ScalarKind::Integer => write!(f, "integer"),
            ScalarKind::Float => write!(f, "float"),
            ScalarKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// Declaration-time description of an attribute's type.
///
/// Nested and collection descriptors refer to other declared types by name;
/// the names are resolved when the schema is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// Values pass through unchanged.
    None,
    /// A value of another declared type.
    Nested(String),
    /// A sequence whose every element is a value of another declared type.
    Collection(String),
    /// A raw sequence or map, kept verbatim.
    Opaque,
    /// Timestamp text, parsed on decode and rendered back on encode.
    Temporal,
    /// A scalar cast.
    Scalar(ScalarKind),
}

impl Descriptor {
    pub fn nested(type_name: impl Into<String>) -> Self {
        Descriptor::Nested(type_name.into())
    }

    pub fn collection(element_type: impl Into<String>) -> Self {
        Descriptor::Collection(element_type.into())
    }

    /// Name of the declared type this descriptor depends on, if any.
    pub fn referenced_type(&self) -> Option<&str> {
        match self {
            Descriptor::Nested(name) | Descriptor::Collection(name) => Some(name),
            _ => None,
        }
    }

    /// Whether `word` names a built-in descriptor rather than a declared type.
    pub fn is_builtin(word: &str) -> bool {
        !matches!(word.parse(), Ok(Descriptor::Nested(_)) | Err(_))
    }

    pub(crate) fn resolve(&self, index_of: impl Fn(&str) -> TypeIndex) -> Coercion {
        match self {
            Descriptor::None => Coercion::None,
            Descriptor::Nested(name) => Coercion::Nested(index_of(name)),
            Descriptor::Collection(name) => Coercion::Collection(index_of(name)),
            Descriptor::Opaque => Coercion::Opaque,
            Descriptor::Temporal => Coercion::Temporal,
            Descriptor::Scalar(kind) => Coercion::Scalar(*kind),
        }
    }
}

/// Parses the short word forms used in schema definitions. Any word that is
/// not a built-in names a nested type.
impl FromStr for Descriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let word = s.trim();
        let descriptor = match word {
            "" => return Err(Error::Definition("empty type name".to_string())),
            "none" => Descriptor::None,
            "time" | "timestamp" => Descriptor::Temporal,
            "array" | "map" | "hash" | "opaque" => Descriptor::Opaque,
            "text" | "string" => Descriptor::Scalar(ScalarKind::Text),
            "integer" => Descriptor::Scalar(ScalarKind::Integer),
            "float" => Descriptor::Scalar(ScalarKind::Float),
            "boolean" => Descriptor::Scalar(ScalarKind::Boolean),
            name => Descriptor::Nested(name.to_string()),
        };
        Ok(descriptor)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::None => write!(f, "none"),
            Descriptor::Nested(name) => write!(f, "{}", name),
            Descriptor::Collection(name) => write!(f, "[{}]", name),
            Descriptor::Opaque => write!(f, "opaque"),
            Descriptor::Temporal => write!(f, "time"),
            Descriptor::Scalar(kind) => write!(f, "{}", kind),
        }
    }
}

/// A descriptor with its type references resolved against a built schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Coercion {
    None,
    Nested(TypeIndex),
    Collection(TypeIndex),
    Opaque,
    Temporal,
    Scalar(ScalarKind),
}
