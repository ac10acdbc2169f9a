//! Serde bridges between [`Node`] and structured data formats.
//!
//! Parsers produce typed values (numbers, booleans, datetimes, nulls). The
//! tree only stores text, so these are rendered with their canonical string
//! form and null entries inside mappings or sequences are dropped.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use super::{Mapping, Node, Sequence};

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(value) => serializer.serialize_str(value),
            Self::Sequence(seq) => serializer.collect_seq(seq),
            Self::Mapping(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(NodeVisitor)?
            .ok_or_else(|| de::Error::custom("null is not a configuration value"))
    }
}

/// Child of a sequence or mapping; `null` reads as absent.
///
/// Children are always read with `deserialize_any`, so formats whose
/// values do not support `deserialize_option` (TOML datetimes) still load.
struct Child(Option<Node>);

impl<'de> Deserialize<'de> for Child {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor).map(Child)
    }
}

/// Key under which `toml` hands a datetime to `deserialize_any`.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Option<Node>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar, sequence or mapping")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(Node::Scalar(v.to_string())))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(Node::Scalar(v.to_string())))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(Some(Node::Scalar(v.to_string())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(Node::Scalar(v.to_string())))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(Some(Node::Scalar(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(Node::Scalar(v.to_string())))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
        Ok(Some(Node::Scalar(v.to_string())))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(Node::Scalar(v.to_owned())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(Node::Scalar(v)))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut seq = Sequence::new();
        while let Some(Child(item)) = access.next_element()? {
            if let Some(node) = item {
                seq.push(node);
            }
        }
        Ok(Some(Node::Sequence(seq)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = Mapping::new();
        while let Some(key) = access.next_key::<Node>()? {
            let Node::Scalar(name) = key else {
                return Err(de::Error::custom(format!(
                    "mapping keys must be scalars, found a {}",
                    key.kind()
                )));
            };
            let Child(value) = access.next_value()?;
            if name == TOML_DATETIME_KEY && map.is_empty() {
                return Ok(value);
            }
            if let Some(node) = value {
                map.insert(name, node);
            }
        }
        Ok(Some(Node::Mapping(map)))
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Value> for Node {
    /// Convert a JSON value.
    ///
    /// Null entries inside objects and arrays are skipped. A bare top-level
    /// null becomes an empty mapping.
    fn from(value: serde_json::Value) -> Self {
        from_json(value).unwrap_or_default()
    }
}

#[cfg(feature = "serde_json")]
fn from_json(value: serde_json::Value) -> Option<Node> {
    use serde_json::Value;

    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(Node::Scalar(flag.to_string())),
        Value::Number(number) => Some(Node::Scalar(number.to_string())),
        Value::String(text) => Some(Node::Scalar(text)),
        Value::Array(items) => Some(Node::Sequence(
            items.into_iter().filter_map(from_json).collect(),
        )),
        Value::Object(entries) => Some(Node::Mapping(
            entries
                .into_iter()
                .filter_map(|(key, child)| from_json(child).map(|node| (key, node)))
                .collect(),
        )),
    }
}
