//! Canonical CCL output.
//!
//! This module provides the [`Formatter`] that renders a [`Node`] tree back to
//! CCL text in one normalized style, whatever the source looked like:
//!
//! - **Scalars**: `key = value`, or `key =` when empty
//! - **Objects**: `key =` followed by the children one indentation unit deeper
//! - **Lists**: one line per item, repeating the owning key, so lists rebuild
//!   through duplicate-key coercion; items of the anonymous list print as
//!   `= item`
//! - **Multi-line scalars**: continuation lines are re-indented one unit deeper
//!   than their key
//! - **Line endings**: `\n` only; trailing spaces and `\r` are dropped from
//!   every line, and so are tabs when [`TabHandling::Whitespace`] is set
//!
//! Formatting is a fixed point after one pass: formatting, parsing and
//! formatting again yields the same text.
//!
//! ```rust
//! use ccl::{canonical_format, load};
//!
//! let doc = load("db =\n    host=localhost\nitem = a\nitem = b");
//! let text = canonical_format(&doc);
//! assert_eq!(text, "db =\n  host = localhost\nitem = a\nitem = b");
//! assert_eq!(canonical_format(&load(&text)), text);
//! ```

use crate::options::{CclOptions, TabHandling};
use crate::{CclMap, Node};

/// The canonical CCL writer.
///
/// Created via [`Formatter::new`]; most callers use [`canonical_format`].
pub struct Formatter<'a> {
    output: String,
    options: &'a CclOptions,
    lines: usize,
}

impl<'a> Formatter<'a> {
    pub fn new(options: &'a CclOptions) -> Self {
        Formatter {
            output: String::with_capacity(256),
            options,
            lines: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes a whole document.
    ///
    /// Objects print their entries at the top level, lists print as anonymous
    /// items and a lone scalar prints as its text.
    pub fn write_node(&mut self, node: &Node) {
        match node {
            Node::Object(map) => self.write_object(map, 0),
            Node::List(_) => self.write_entry("", node, 0),
            Node::Scalar(text) => {
                let mut lines = text.split('\n');
                if let Some(first) = lines.next() {
                    self.write_line(0, first);
                }
                self.write_continuation(lines, 0);
            }
        }
    }

    fn write_object(&mut self, map: &CclMap, depth: usize) {
        for (key, value) in map {
            self.write_entry(key, value, depth);
        }
    }

    fn write_entry(&mut self, key: &str, node: &Node, depth: usize) {
        match node {
            Node::Scalar(text) => self.write_scalar(key, text, depth),
            Node::Object(map) => {
                self.write_line(depth, &assignment(key));
                self.write_object(map, depth + 1);
            }
            Node::List(items) => {
                for item in items {
                    match item {
                        // A list directly inside a list has no key of its own.
                        Node::List(inner) => {
                            self.write_line(depth, &assignment(key));
                            for inner_item in inner {
                                self.write_entry("", inner_item, depth + 1);
                            }
                        }
                        other => self.write_entry(key, other, depth),
                    }
                }
            }
        }
    }

    fn write_scalar(&mut self, key: &str, text: &str, depth: usize) {
        let mut lines = text.split('\n');
        let mut first = lines.next().unwrap_or_default();
        if self.options.tabs == TabHandling::Whitespace {
            first = first.trim_start_matches([' ', '\t']);
        }

        let mut line = assignment(key);
        if !first.is_empty() {
            line.push(' ');
            line.push_str(first);
        }
        self.write_line(depth, &line);
        self.write_continuation(lines, depth + 1);
    }

    fn write_continuation<'t>(&mut self, lines: impl Iterator<Item = &'t str>, depth: usize) {
        for line in lines {
            let content = line.trim_start_matches([' ', '\t']);
            if content.trim().is_empty() {
                continue;
            }
            self.write_line(depth, content);
        }
    }

    fn write_line(&mut self, depth: usize, text: &str) {
        if self.lines > 0 {
            self.output.push('\n');
        }
        self.lines += 1;
        for _ in 0..depth * self.options.indent_unit() {
            self.output.push(' ');
        }
        let tabs = self.options.tabs;
        self.output.push_str(
            text.trim_end_matches(|ch: char| ch == '\r' || tabs.is_value_padding(ch)),
        );
    }
}

/// `key =`, or `=` for the anonymous key.
fn assignment(key: &str) -> String {
    if key.is_empty() {
        "=".to_string()
    } else {
        format!("{key} =")
    }
}

/// Renders `node` in canonical form with default options.
///
/// # Examples
///
/// ```rust
/// use ccl::{canonical_format, load};
///
/// let doc = load("= first\n= second");
/// assert_eq!(canonical_format(&doc), "= first\n= second");
/// ```
#[must_use]
pub fn canonical_format(node: &Node) -> String {
    canonical_format_with_options(node, &CclOptions::default())
}

/// Renders `node` in canonical form using `options.indent` as the unit.
///
/// # Examples
///
/// ```rust
/// use ccl::{canonical_format_with_options, load, CclOptions};
///
/// let doc = load("a =\n  b = c");
/// let options = CclOptions::new().with_indent(4);
/// assert_eq!(canonical_format_with_options(&doc, &options), "a =\n    b = c");
/// ```
#[must_use]
pub fn canonical_format_with_options(node: &Node, options: &CclOptions) -> String {
    let mut formatter = Formatter::new(options);
    formatter.write_node(node);
    formatter.into_inner()
}

/// Renders the children of `map` as the value of an entry: a leading newline
/// followed by the children one indentation unit deep.
pub(crate) fn nested_block(map: &CclMap, options: &CclOptions) -> String {
    let mut formatter = Formatter::new(options);
    formatter.write_object(map, 1);
    let body = formatter.into_inner();
    if body.is_empty() {
        body
    } else {
        format!("\n{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ccl, load, LineEndings};

    #[test]
    fn test_scalars() {
        assert_eq!(canonical_format(&ccl!({"key": "value"})), "key = value");
        assert_eq!(canonical_format(&ccl!({"key": ""})), "key =");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(canonical_format(&Node::default()), "");
    }

    #[test]
    fn test_normalizes_spacing() {
        let doc = load("key1=val1\nkey2   =    val2\n  ");
        assert_eq!(canonical_format(&doc), "key1 = val1\nkey2 = val2");
    }

    #[test]
    fn test_nested_objects_use_fixed_unit() {
        let doc = load("a =\n      b =\n          c = 1\n      d = 2");
        assert_eq!(canonical_format(&doc), "a =\n  b =\n    c = 1\n  d = 2");
    }

    #[test]
    fn test_lists_repeat_their_key() {
        let doc = ccl!({"servers": ["web1", "web2"]});
        assert_eq!(canonical_format(&doc), "servers = web1\nservers = web2");
    }

    #[test]
    fn test_anonymous_list() {
        let doc = ccl!({"": ["a", "b"], "nested": {"": ["x"]}});
        assert_eq!(canonical_format(&doc), "= a\n= b\nnested =\n  = x");
    }

    #[test]
    fn test_list_of_objects() {
        let doc = ccl!({"server": [{"host": "a"}, {"host": "b"}]});
        assert_eq!(
            canonical_format(&doc),
            "server =\n  host = a\nserver =\n  host = b"
        );
    }

    #[test]
    fn test_list_inside_list() {
        let doc = Node::List(vec![Node::List(vec![Node::from("x"), Node::from("y")])]);
        assert_eq!(canonical_format(&doc), "=\n  = x\n  = y");
    }

    #[test]
    fn test_multiline_scalar_reindented() {
        let doc = load("outer =\n inner = first\n          second");
        assert_eq!(canonical_format(&doc), "outer =\n  inner = first\n    second");
    }

    #[test]
    fn test_never_emits_crlf() {
        let options = CclOptions::new().with_line_endings(LineEndings::Preserve);
        let doc = crate::load_with_options("a = 1\r\nb = 2\r\n", &options);
        let text = canonical_format(&doc);
        assert!(!text.contains('\r'));
        assert_eq!(text, "a = 1\nb = 2");
    }

    #[test]
    fn test_trailing_whitespace_dropped() {
        let options = CclOptions::new().with_line_endings(LineEndings::Preserve);
        let doc = crate::load_with_options("a = x \r\nb = \r\nc = tab\t", &options);
        assert_eq!(canonical_format(&doc), "a = x\nb =\nc = tab\t");
    }

    #[test]
    fn test_trailing_tabs_dropped_when_whitespace() {
        let options = CclOptions::new().with_tabs(TabHandling::Whitespace);
        let doc = crate::load_with_options("a=\n a\t\t", &options);
        let text = canonical_format_with_options(&doc, &options);
        assert_eq!(text, "a = a");
        let again = crate::load_with_options(&text, &options);
        assert_eq!(canonical_format_with_options(&again, &options), text);

        let options = options.with_line_endings(LineEndings::Preserve);
        let doc = crate::load_with_options("==\t\r", &options);
        assert_eq!(canonical_format_with_options(&doc, &options), "= =");
    }

    #[test]
    fn test_leading_tabs_dropped_when_whitespace() {
        let doc = ccl!({"k": "\t value"});
        let options = CclOptions::new().with_tabs(TabHandling::Whitespace);
        assert_eq!(canonical_format_with_options(&doc, &options), "k = value");
        assert_eq!(canonical_format(&doc), "k = \t value");
    }

    #[test]
    fn test_nested_block_value() {
        let doc = ccl!({"host": "localhost", "port": "1"});
        let map = doc.as_object().unwrap();
        assert_eq!(
            nested_block(map, &CclOptions::default()),
            "\n  host = localhost\n  port = 1"
        );
        assert_eq!(nested_block(&CclMap::new(), &CclOptions::default()), "");
    }
}
