//! Dotted-key expansion.
//!
//! Rewrites entries such as `database.host = localhost` into the entry that
//! the explicit nested form would have produced:
//!
//! ```text
//! database =
//!   host = localhost
//! ```
//!
//! Entries sharing a prefix are merged into one object, and dotted keys merge
//! with objects written out explicitly, before or after them. Within a level
//! that has dotted keys, repeated object blocks under one key merge as well.
//! Segments are trimmed of spaces and tabs. A key is left as written when one
//! of its segments is blank (`a..b`, `a.`, `.a`) or when a prefix already
//! holds a scalar or a list; expansion never fails.
//!
//! ```rust
//! use ccl::{build_hierarchy, ccl, expand_dotted, parse};
//!
//! let entries = expand_dotted(parse("db.host = localhost\ndb.port = 5432"));
//! assert_eq!(
//!     build_hierarchy(&entries),
//!     ccl!({"db": {"host": "localhost", "port": "5432"}})
//! );
//! ```

use crate::entry::Entry;
use crate::format::nested_block;
use crate::hierarchy::value_node;
use crate::options::CclOptions;
use crate::{CclMap, Node};
use tracing::{debug, trace};

/// Expands dotted keys with default options.
#[must_use]
pub fn expand_dotted(entries: Vec<Entry>) -> Vec<Entry> {
    expand_dotted_with_options(entries, &CclOptions::default())
}

/// Expands dotted keys, tokenizing nested values with `options`.
///
/// Entry lists without any expandable key are returned unchanged.
#[must_use]
pub fn expand_dotted_with_options(entries: Vec<Entry>, options: &CclOptions) -> Vec<Entry> {
    if !entries.iter().any(|e| dotted_segments(&e.key).is_some()) {
        return entries;
    }

    // Values are built one level at a time; the builder expands deeper levels itself.
    let level = CclOptions {
        dotted_keys: false,
        ..options.clone()
    };

    let mut merged = CclMap::new();
    for entry in entries {
        let node = value_node(&entry.value, &level);
        match dotted_segments(&entry.key) {
            Some(segments) if can_descend(&merged, &segments) => {
                insert_path(&mut merged, &segments, node);
            }
            Some(_) => {
                trace!(key = %entry.key, "prefix holds a non-object, keeping dotted key");
                place(&mut merged, entry.key, node);
            }
            None => place(&mut merged, entry.key, node),
        }
    }

    let mut expanded = Vec::with_capacity(merged.len());
    for (key, node) in merged {
        match node {
            Node::List(items) => {
                for item in items {
                    expanded.push(Entry::new(key.clone(), entry_value(item, &level)));
                }
            }
            other => expanded.push(Entry::new(key, entry_value(other, &level))),
        }
    }
    debug!(entries = expanded.len(), "expanded dotted keys");
    expanded
}

/// Splits `key` at dots when every trimmed segment is non-empty.
fn dotted_segments(key: &str) -> Option<Vec<&str>> {
    if !key.contains('.') {
        return None;
    }
    let segments: Vec<&str> = key.split('.').map(|s| s.trim_matches([' ', '\t'])).collect();
    if segments.iter().any(|s| s.is_empty()) {
        None
    } else {
        Some(segments)
    }
}

/// Every prefix of `segments` is either absent or an object.
fn can_descend(map: &CclMap, segments: &[&str]) -> bool {
    let mut current = map;
    for segment in &segments[..segments.len() - 1] {
        match current.get(segment) {
            None => return true,
            Some(Node::Object(child)) => current = child,
            Some(_) => return false,
        }
    }
    true
}

fn insert_path(map: &mut CclMap, segments: &[&str], node: Node) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };
    let mut current = map;
    for segment in parents {
        if !current.contains_key(segment) {
            current.insert(segment.to_string(), Node::default());
        }
        match current.get_mut(segment) {
            Some(Node::Object(child)) => current = child,
            _ => return,
        }
    }
    merge(current, last.to_string(), node);
}

fn place(map: &mut CclMap, key: String, node: Node) {
    if key.is_empty() {
        map.push_item(node);
    } else {
        merge(map, key, node);
    }
}

/// Appends `node` under `key`, folding an object into an object already there.
fn merge(map: &mut CclMap, key: String, node: Node) {
    match node {
        Node::Object(source) => match map.get_mut(&key) {
            Some(Node::Object(target)) => {
                trace!(key = %key, "merging object into existing object");
                merge_objects(target, source);
            }
            _ => map.append(key, Node::Object(source)),
        },
        other => map.append(key, other),
    }
}

fn merge_objects(target: &mut CclMap, source: CclMap) {
    for (key, node) in source {
        match (key.is_empty(), node) {
            (true, Node::List(items)) => {
                for item in items {
                    target.push_item(item);
                }
            }
            (true, node) => target.push_item(node),
            (false, node) => merge(target, key, node),
        }
    }
}

/// The entry value that rebuilds into `node`.
fn entry_value(node: Node, options: &CclOptions) -> String {
    match node {
        Node::Scalar(text) => text,
        Node::Object(map) => nested_block(&map, options),
        Node::List(items) => {
            let mut map = CclMap::new();
            for item in items {
                map.push_item(item);
            }
            nested_block(&map, options)
        }
    }
}
