//! Deserialize CCL into Rust types.
//!
//! This module provides the [`Deserializer`] that drives serde over a built
//! [`Node`] tree. CCL leaves are untyped text, so the type requested by the
//! target decides how a scalar is read:
//!
//! - **Integers and floats**: the same grammars as [`get_int`](crate::get_int)
//!   and [`get_float`](crate::get_float), then range-checked for the target
//! - **Booleans**: the configured [`BoolMode`](crate::BoolMode)
//! - **Options**: an empty scalar reads as `None`
//! - **Sequences**: a list, an object of anonymous `= item` lines, or with
//!   list coercion a lone scalar
//! - **Enums**: a scalar names a unit variant, a single-key object any other
//!   variant
//!
//! Errors carry the path of the offending node.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Database {
//!     host: String,
//!     port: u16,
//!     replicas: Vec<String>,
//! }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config {
//!     name: String,
//!     debug: bool,
//!     database: Database,
//! }
//!
//! let text = "\
//! name = app
//! debug = yes
//! database =
//!   host = localhost
//!   port = 5432
//!   replicas = r1
//!   replicas = r2";
//!
//! let config: Config = ccl::from_str(text).unwrap();
//! assert_eq!(config.database.port, 5432);
//! assert!(config.debug);
//! assert_eq!(config.database.replicas, vec!["r1", "r2"]);
//! ```

use crate::access::{is_integer, parse_float};
use crate::options::CclOptions;
use crate::{CclMap, Error, Node, Result};
use serde::de::{self, IntoDeserializer};

/// A serde deserializer reading from an owned [`Node`].
pub struct Deserializer<'a> {
    node: Node,
    path: String,
    options: &'a CclOptions,
}

impl<'a> Deserializer<'a> {
    /// Creates a deserializer for a whole document.
    pub fn from_node(node: Node, options: &'a CclOptions) -> Self {
        Deserializer {
            node,
            path: String::new(),
            options,
        }
    }

    fn child(&self, segment: &str, node: Node) -> Self {
        let path = if self.path.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.path, segment)
        };
        Deserializer {
            node,
            path,
            options: self.options,
        }
    }

    fn scalar(&self, expected: &str) -> Result<&str> {
        match &self.node {
            Node::Scalar(text) => Ok(text),
            other => Err(Error::type_mismatch(&self.path, expected, other.kind_name())),
        }
    }

    fn integer<T: std::str::FromStr>(&self, expected: &str) -> Result<T> {
        let text = self.scalar(expected)?;
        is_integer(text)
            .then(|| text.parse().ok())
            .flatten()
            .ok_or_else(|| Error::invalid_format(&self.path, expected, text))
    }

    fn float(&self) -> Result<f64> {
        let text = self.scalar("number")?;
        parse_float(text).ok_or_else(|| Error::invalid_format(&self.path, "number", text))
    }

    /// The items of a sequence-shaped node.
    fn into_items(self) -> Result<(Vec<Node>, Self)> {
        let Deserializer {
            node,
            path,
            options,
        } = self;
        let parent = Deserializer {
            node: Node::default(),
            path,
            options,
        };
        match node {
            Node::List(items) => Ok((items, parent)),
            Node::Object(map) if map.len() == 1 && map.get("").is_some_and(Node::is_list) => {
                match map.into_iter().next() {
                    Some((_, Node::List(items))) => Ok((items, parent)),
                    _ => Err(Error::type_mismatch(&parent.path, "list", "object")),
                }
            }
            Node::Scalar(text) if options.list_coercion => Ok((vec![Node::Scalar(text)], parent)),
            other => Err(Error::type_mismatch(&parent.path, "list", other.kind_name())),
        }
    }
}

macro_rules! deserialize_integer {
    ($($method:ident => $visit:ident($ty:ty),)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                visitor.$visit(self.integer::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'de, 'a> de::Deserializer<'de> for Deserializer<'a> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.node {
            Node::Scalar(text) => visitor.visit_string(text),
            Node::List(items) => visitor.visit_seq(SeqDeserializer::new(
                items,
                self.path,
                self.options,
            )),
            Node::Object(map) => visitor.visit_map(MapDeserializer::new(map, self.path, self.options)),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let mode = self.options.bool_mode;
        let text = self.scalar("boolean")?;
        match mode.parse(text) {
            Some(value) => visitor.visit_bool(value),
            None => Err(Error::invalid_format(&self.path, mode.expected(), text)),
        }
    }

    deserialize_integer! {
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f32(self.float()? as f32)
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f64(self.float()?)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let text = self.scalar("character")?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => visitor.visit_char(ch),
            _ => Err(Error::invalid_format(&self.path, "single character", text)),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.node {
            Node::Scalar(text) => visitor.visit_string(text),
            other => Err(Error::type_mismatch(&self.path, "scalar", other.kind_name())),
        }
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_bytes(self.scalar("scalar")?.as_bytes())
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if matches!(&self.node, Node::Scalar(text) if text.is_empty()) {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.scalar("empty value")? {
            "" => visitor.visit_unit(),
            text => Err(Error::invalid_format(&self.path, "empty value", text)),
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let (items, parent) = self.into_items()?;
        visitor.visit_seq(SeqDeserializer::new(items, parent.path, parent.options))
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.node {
            Node::Object(map) => visitor.visit_map(MapDeserializer::new(map, self.path, self.options)),
            // `key =` with nothing below it is an empty object.
            Node::Scalar(text) if text.is_empty() => {
                visitor.visit_map(MapDeserializer::new(CclMap::new(), self.path, self.options))
            }
            other => Err(Error::type_mismatch(&self.path, "object", other.kind_name())),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.node {
            Node::Scalar(text) => visitor.visit_enum(text.into_deserializer()),
            Node::Object(map) if map.len() == 1 => {
                let path = self.path;
                let options = self.options;
                match map.into_iter().next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value, path, options))
                    }
                    None => Err(Error::type_mismatch(&path, "enum", "object")),
                }
            }
            other => Err(Error::type_mismatch(&self.path, "enum", other.kind_name())),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

struct SeqDeserializer<'a> {
    iter: std::iter::Enumerate<std::vec::IntoIter<Node>>,
    path: String,
    options: &'a CclOptions,
}

impl<'a> SeqDeserializer<'a> {
    fn new(items: Vec<Node>, path: String, options: &'a CclOptions) -> Self {
        SeqDeserializer {
            iter: items.into_iter().enumerate(),
            path,
            options,
        }
    }

    fn element(&self, index: usize, node: Node) -> Deserializer<'a> {
        Deserializer {
            node,
            path: format!("{}[{}]", self.path, index),
            options: self.options,
        }
    }
}

impl<'de, 'a> de::SeqAccess<'de> for SeqDeserializer<'a> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((index, node)) => seed.deserialize(self.element(index, node)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer<'a> {
    iter: indexmap::map::IntoIter<String, Node>,
    value: Option<Deserializer<'a>>,
    parent: Deserializer<'a>,
}

impl<'a> MapDeserializer<'a> {
    fn new(map: CclMap, path: String, options: &'a CclOptions) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
            parent: Deserializer {
                node: Node::default(),
                path,
                options,
            },
        }
    }
}

impl<'de, 'a> de::MapAccess<'de> for MapDeserializer<'a> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, node)) => {
                self.value = Some(self.parent.child(&key, node));
                seed.deserialize(IntoDeserializer::<'de, Error>::into_deserializer(key))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(value),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer<'a> {
    variant: String,
    value: Deserializer<'a>,
}

impl<'a> EnumDeserializer<'a> {
    fn new(variant: String, node: Node, path: String, options: &'a CclOptions) -> Self {
        let parent = Deserializer {
            node: Node::default(),
            path,
            options,
        };
        let value = parent.child(&variant, node);
        EnumDeserializer { variant, value }
    }
}

impl<'de, 'a> de::EnumAccess<'de> for EnumDeserializer<'a> {
    type Error = Error;
    type Variant = VariantDeserializer<'a>;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant =
            seed.deserialize(IntoDeserializer::<'de, Error>::into_deserializer(self.variant))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer<'a> {
    value: Deserializer<'a>,
}

impl<'de, 'a> de::VariantAccess<'de> for VariantDeserializer<'a> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        de::Deserialize::deserialize(self.value)
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.value)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(self.value, visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_map(self.value, visitor)
    }
}
