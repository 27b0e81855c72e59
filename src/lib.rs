//! # ccl
//!
//! A parser, query layer and canonical formatter for CCL, the Categorical
//! Configuration Language.
//!
//! ## What is CCL?
//!
//! CCL is a line-oriented, indentation-sensitive configuration format built
//! from a single construct, the key/value statement:
//!
//! ```text
//! /= comments are entries whose key is "/"
//! name = my-app
//! database =
//!   host = localhost
//!   port = 5432
//! servers = web1
//! servers = web2
//! ```
//!
//! Nesting comes from indentation, lists from repeated keys or anonymous
//! `= item` lines, and every leaf is plain text until it is read through a
//! typed accessor.
//!
//! ## Pipeline
//!
//! - **Tokenize** ([`parse`]): text to a flat list of [`Entry`] values.
//!   Lines that fit no statement are dropped; [`parse_strict`] reports them
//!   instead.
//! - **Expand** ([`expand_dotted`], optional): `a.b = v` becomes the nested
//!   form `a =` / `  b = v`.
//! - **Build** ([`build_hierarchy`]): entries to a [`Node`] tree. Nested
//!   blocks become objects and duplicate keys become lists.
//! - **Access** ([`get_string`], [`get_int`], [`get_float`], [`get_bool`],
//!   [`get_list`]): typed reads by path, with errors that carry the path.
//! - **Format** ([`canonical_format`]): a tree back to text in one
//!   normalized style.
//!
//! [`load`] runs tokenize and build in one call. [`from_str`] goes further and
//! deserializes into any `T: Deserialize`.
//!
//! ## Quick Start
//!
//! ```rust
//! use ccl::{canonical_format, get_bool, get_int, get_list, load};
//!
//! let doc = load("debug = yes\ndb =\n    port=5432\nhosts = a\nhosts = b");
//!
//! assert!(get_bool(&doc, &["debug"]).unwrap());
//! assert_eq!(get_int(&doc, &["db", "port"]).unwrap(), 5432);
//! assert_eq!(get_list(&doc, &["hosts"]).unwrap(), vec!["a", "b"]);
//!
//! assert_eq!(
//!     canonical_format(&doc),
//!     "debug = yes\ndb =\n  port = 5432\nhosts = a\nhosts = b"
//! );
//! ```
//!
//! ### Working with entries
//!
//! Entry lists form a monoid under [`combine`] with the empty list as
//! identity, so configuration can be layered before it is built:
//!
//! ```rust
//! use ccl::{build_hierarchy, ccl, combine, filter, parse};
//!
//! let base = parse("/= defaults\nport = 80");
//! let local = parse("host = example.org");
//! let doc = build_hierarchy(&filter(combine(base, local)));
//! assert_eq!(doc, ccl!({"port": "80", "host": "example.org"}));
//! ```
//!
//! ### Options
//!
//! Behavior that implementations of the format disagree on is selected with
//! [`CclOptions`]: line-ending handling, whether tabs pad values, which
//! boolean literals are accepted, single-value list coercion, dotted-key
//! expansion and the output indentation unit.
//!
//! ## Diagnostics
//!
//! The crate logs through [`tracing`]: `debug` events summarize each pass and
//! `trace` events report every dropped line and list coercion. Install any
//! subscriber to see them.
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - load a document and read values
//! - **`typed_access.rs`** - accessors, errors and serde
//! - **`custom_options.rs`** - behavior options
//! - **`canonical_format.rs`** - normalizing documents
//!
//! Run any demo with: `cargo run --example <name>`

pub mod access;
pub mod de;
pub mod dotted;
pub mod entry;
pub mod error;
pub mod format;
pub mod hierarchy;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod value;

pub use access::{
    get, get_bool, get_bool_with_options, get_float, get_int, get_list, get_list_with_options,
    get_string, path_from_dotted,
};
pub use de::Deserializer;
pub use dotted::{expand_dotted, expand_dotted_with_options};
pub use entry::{combine, filter, Entry, COMMENT_KEY};
pub use error::{Error, ErrorKind, Result};
pub use format::{canonical_format, canonical_format_with_options, Formatter};
pub use hierarchy::{build_hierarchy, build_hierarchy_with_options};
pub use map::CclMap;
pub use options::{BoolMode, CclOptions, LineEndings, TabHandling};
pub use parser::{
    parse, parse_strict, parse_strict_with_options, parse_with_options, DroppedLine, Tokenizer,
};
pub use value::Node;

use serde::de::DeserializeOwned;

/// Parses CCL text and builds its hierarchy with default options.
///
/// # Examples
///
/// ```rust
/// use ccl::{ccl, load};
///
/// let doc = load("name = app\ntags = a\ntags = b");
/// assert_eq!(doc, ccl!({"name": "app", "tags": ["a", "b"]}));
/// ```
#[must_use]
pub fn load(input: &str) -> Node {
    load_with_options(input, &CclOptions::default())
}

/// Parses CCL text and builds its hierarchy.
///
/// # Examples
///
/// ```rust
/// use ccl::{ccl, load_with_options, CclOptions};
///
/// let options = CclOptions::new().with_dotted_keys(true);
/// let doc = load_with_options("db.host = localhost\ndb.port = 5432", &options);
/// assert_eq!(doc, ccl!({"db": {"host": "localhost", "port": "5432"}}));
/// ```
#[must_use]
pub fn load_with_options(input: &str, options: &CclOptions) -> Node {
    let entries = parse_with_options(input, options);
    build_hierarchy_with_options(&entries, options)
}

/// Deserialize an instance of type `T` from CCL text.
///
/// # Examples
///
/// ```rust
/// use ccl::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x = 1\ny = -2").unwrap();
/// assert_eq!(point, Point { x: 1, y: -2 });
/// ```
///
/// # Errors
///
/// Returns an error naming the path of the first node that does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(input: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(input, &CclOptions::default())
}

/// Deserialize an instance of type `T` from CCL text with custom options.
///
/// # Errors
///
/// As for [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(input: &str, options: &CclOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_node_with_options(load_with_options(input, options), options)
}

/// Deserialize an instance of type `T` from a built tree.
///
/// # Examples
///
/// ```rust
/// use ccl::{ccl, from_node};
/// use std::collections::BTreeMap;
///
/// let labels: BTreeMap<String, String> = from_node(ccl!({"a": "1", "b": "2"})).unwrap();
/// assert_eq!(labels["b"], "2");
/// ```
///
/// # Errors
///
/// As for [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_node<T>(node: Node) -> Result<T>
where
    T: DeserializeOwned,
{
    from_node_with_options(node, &CclOptions::default())
}

/// Deserialize an instance of type `T` from a built tree with custom options.
///
/// # Errors
///
/// As for [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_node_with_options<T>(node: Node, options: &CclOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::from_node(node, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_load_equals_pipeline() {
        let text = "a = 1\nb =\n  c = 2";
        assert_eq!(load(text), build_hierarchy(&parse(text)));
    }

    #[test]
    fn test_load_empty() {
        assert_eq!(load(""), Node::Object(CclMap::new()));
        assert_eq!(load("\n  \n"), Node::default());
    }

    #[test]
    fn test_format_then_load_round_trips() {
        let doc = load("b = 2\na =\n  x = 1\n  x = 2\n= anon");
        assert_eq!(load(&canonical_format(&doc)), doc);
    }

    #[test]
    fn test_from_str_point() {
        let point: Point = from_str("x = 1\ny = 2").unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }

    #[test]
    fn test_from_str_reports_path() {
        let err = from_str::<Point>("x = 1\ny = two").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(err.path(), Some("y"));
    }

    #[test]
    fn test_from_node_with_dotted_keys() {
        #[derive(Deserialize)]
        struct Config {
            db: Point,
        }

        let options = CclOptions::new().with_dotted_keys(true);
        let config: Config = from_str_with_options("db.x = 3\ndb.y = 4", &options).unwrap();
        assert_eq!(config.db, Point { x: 3, y: 4 });
    }
}
