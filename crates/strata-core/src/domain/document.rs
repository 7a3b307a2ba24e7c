//! Structured document model.
//!
//! [`Document`] is the tagged tree every structured template and every
//! on-disk JSON document is read into. Merging matches on it exhaustively, so
//! a list is never treated as a map or the other way around.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Number, Value};

/// Keyed map of a document. Insertion order is kept for output only.
pub type DocumentMap = IndexMap<String, Document>;

/// JSON pretty printers stop widening the indent past this.
const MAX_INDENT: usize = 10;

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// A structured document: scalar, ordered list or keyed map.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Scalar(Scalar),
    List(Vec<Document>),
    Map(DocumentMap),
}

impl Document {
    pub fn empty_map() -> Self {
        Self::Map(DocumentMap::new())
    }

    /// Parse JSON text, keeping key order.
    ///
    /// A leading byte-order mark is ignored.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        serde_json::from_str::<Value>(text).map(Self::from)
    }

    /// Pretty-print with `indent` spaces per level and a trailing newline.
    ///
    /// An indent of zero yields compact single-line output.
    pub fn to_pretty_string(&self, indent: usize) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        if indent == 0 {
            serde_json::to_writer(&mut buf, self)?;
        } else {
            let indent = " ".repeat(indent.min(MAX_INDENT));
            let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            self.serialize(&mut ser)?;
        }
        buf.push(b'\n');
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn as_map(&self) -> Option<&DocumentMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Document]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a key when this is a map.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Short name of the node shape, used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(Scalar::Null) => "null",
            Self::Scalar(Scalar::Bool(_)) => "boolean",
            Self::Scalar(Scalar::Number(_)) => "number",
            Self::Scalar(Scalar::String(_)) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "object",
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty_map()
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Scalar(Scalar::Null) => Value::Null,
            Document::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            Document::Scalar(Scalar::Number(n)) => Value::Number(n),
            Document::Scalar(Scalar::String(s)) => Value::String(s),
            Document::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Document::Map(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_owned()))
    }
}

impl From<bool> for Document {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(Scalar::Null) => serializer.serialize_unit(),
            Self::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            Self::Scalar(Scalar::Number(n)) => n.serialize(serializer),
            Self::Scalar(Scalar::String(s)) => serializer.serialize_str(s),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
