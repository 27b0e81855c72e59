//! Hierarchy construction.
//!
//! Turns a flat entry list into a [`Node::Object`]. Nested-block values are
//! tokenized again and built into child objects; repeated keys become lists
//! through [`CclMap::append`]; empty keys collect into the anonymous `""`
//! list.
//!
//! The builder keeps its own stack of frames, one per nesting level, so deep
//! input grows the heap rather than the call stack.

use crate::dotted::expand_dotted_with_options;
use crate::entry::Entry;
use crate::options::CclOptions;
use crate::parser::parse_with_options;
use crate::{CclMap, Node};
use tracing::{debug, trace};

/// Where a finished child object goes in its parent.
enum Slot {
    Root,
    Key(String),
    Item,
}

impl Slot {
    fn for_key(key: String) -> Self {
        if key.is_empty() {
            Slot::Item
        } else {
            Slot::Key(key)
        }
    }
}

/// One object under construction.
struct Frame {
    entries: std::vec::IntoIter<Entry>,
    map: CclMap,
    slot: Slot,
}

impl Frame {
    fn new(entries: Vec<Entry>, slot: Slot) -> Self {
        Frame {
            map: CclMap::with_capacity(entries.len()),
            entries: entries.into_iter(),
            slot,
        }
    }

    fn place(&mut self, slot: Slot, node: Node) {
        match slot {
            Slot::Key(key) => self.map.append(key, node),
            Slot::Item | Slot::Root => self.map.push_item(node),
        }
    }
}

/// Builds the object tree for `entries` with default options.
///
/// # Examples
///
/// ```rust
/// use ccl::{build_hierarchy, ccl, parse};
///
/// let doc = build_hierarchy(&parse("db =\n  host = localhost\n  port = 5432"));
/// assert_eq!(doc, ccl!({"db": {"host": "localhost", "port": "5432"}}));
///
/// let doc = build_hierarchy(&parse("item = first\nitem = second"));
/// assert_eq!(doc, ccl!({"item": ["first", "second"]}));
/// ```
#[must_use]
pub fn build_hierarchy(entries: &[Entry]) -> Node {
    build_hierarchy_with_options(entries, &CclOptions::default())
}

/// Builds the object tree for `entries`.
///
/// Nested blocks are tokenized with `options`; when `options.dotted_keys` is
/// set, every level is passed through the dotted-key expander first.
#[must_use]
pub fn build_hierarchy_with_options(entries: &[Entry], options: &CclOptions) -> Node {
    debug!(entries = entries.len(), "building hierarchy");

    let root = level_entries(entries.to_vec(), options);
    let mut stack = vec![Frame::new(root, Slot::Root)];

    while let Some(frame) = stack.last_mut() {
        let Some(entry) = frame.entries.next() else {
            let Some(finished) = stack.pop() else { break };
            let node = Node::Object(finished.map);
            match stack.last_mut() {
                Some(parent) => parent.place(finished.slot, node),
                None => return node,
            }
            continue;
        };

        let nested = entry.is_nested_block();
        let slot = Slot::for_key(entry.key);
        if !nested {
            frame.place(slot, Node::Scalar(entry.value));
            continue;
        }

        let children = parse_with_options(&entry.value, options);
        if children.is_empty() {
            frame.place(slot, Node::Scalar(block_text(&entry.value)));
        } else {
            trace!(depth = stack.len(), "descending into nested block");
            stack.push(Frame::new(level_entries(children, options), slot));
        }
    }

    Node::default()
}

/// Builds the node for a single entry value: an object for nested blocks, a
/// scalar otherwise.
pub(crate) fn value_node(value: &str, options: &CclOptions) -> Node {
    if !crate::entry::is_nested_block(value) {
        return Node::Scalar(value.to_string());
    }
    let children = parse_with_options(value, options);
    if children.is_empty() {
        Node::Scalar(block_text(value))
    } else {
        build_hierarchy_with_options(&children, options)
    }
}

fn level_entries(entries: Vec<Entry>, options: &CclOptions) -> Vec<Entry> {
    if options.dotted_keys {
        expand_dotted_with_options(entries, options)
    } else {
        entries
    }
}

/// Text of a nested block that holds no statements, kept as a scalar.
///
/// Leading blank lines and the first line's indentation are removed; later
/// lines stay as written.
fn block_text(value: &str) -> String {
    let mut lines = value.split('\n').skip_while(|line| line.trim().is_empty());
    let Some(first) = lines.next() else {
        return String::new();
    };
    let mut text = first.trim_start_matches([' ', '\t']).to_string();
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    text
}
