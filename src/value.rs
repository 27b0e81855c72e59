//! Tree representation of parsed CCL.
//!
//! This module provides the [`Node`] enum. CCL has no value types of its own:
//! every leaf is text until an accessor interprets it. A node is therefore
//! one of three shapes:
//!
//! - [`Node::Scalar`]: leaf text
//! - [`Node::List`]: ordered items, from repeated keys or `= item` lines
//! - [`Node::Object`]: ordered, unique keys
//!
//! ## Usage Patterns
//!
//! ### Building trees
//!
//! ```rust
//! use ccl::{ccl, load, Node};
//!
//! let parsed = load("name = Alice\ntags = a\ntags = b");
//! let built = ccl!({
//!     "name": "Alice",
//!     "tags": ["a", "b"]
//! });
//! assert_eq!(parsed, built);
//! ```
//!
//! ### Inspecting
//!
//! ```rust
//! use ccl::load;
//!
//! let doc = load("db =\n  host = localhost");
//! let db = doc.get("db").unwrap();
//! assert!(db.is_object());
//! assert_eq!(db.get("host").and_then(|n| n.as_str()), Some("localhost"));
//! ```
//!
//! ### Printing
//!
//! `Display` renders the canonical form:
//!
//! ```rust
//! use ccl::load;
//!
//! let doc = load("b=2\na   =   1");
//! assert_eq!(doc.to_string(), "b = 2\na = 1");
//! ```

use crate::CclMap;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A node of a CCL hierarchy.
///
/// Equality is structural. Objects compare as maps, so two objects with the
/// same keys and values in a different order are equal.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Scalar(String),
    List(Vec<Node>),
    Object(CclMap),
}

impl Default for Node {
    /// The empty object, which is also the document of empty input.
    fn default() -> Self {
        Node::Object(CclMap::new())
    }
}

impl Node {
    /// Returns `true` if the node is a scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns `true` if the node is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Returns `true` if the node is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// If the node is a scalar, returns its text. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccl::Node;
    ///
    /// assert_eq!(Node::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Node::List(vec![]).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// If the node is a list, returns its items. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the node is an object, returns its map. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&CclMap> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a direct child of an object node.
    ///
    /// Returns `None` for scalars and lists. For multi-segment paths with
    /// error reporting, use [`get`](crate::get).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// The name of this node's shape, as used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::List(_) => "list",
            Node::Object(_) => "object",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::canonical_format(self))
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Scalar(s) => serializer.serialize_str(s),
            Node::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    /// Accepts any self-describing data. Numbers and booleans become their
    /// textual form and null becomes the empty scalar, since CCL leaves are text.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, sequence or map")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Node::Scalar(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Node::Scalar(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Node::Scalar(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Node::Scalar(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Node::Scalar(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Node::Scalar(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Node::Scalar(String::new()))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Node::Scalar(String::new()))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Node::List(items))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = CclMap::new();
                while let Some((key, value)) = access.next_entry::<String, Node>()? {
                    map.insert(key, value);
                }
                Ok(Node::Object(map))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_string())
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::List(value)
    }
}

impl From<CclMap> for Node {
    fn from(value: CclMap) -> Self {
        Node::Object(value)
    }
}
