//! Flat key/value entries produced by the tokenizer.
//!
//! An [`Entry`] is the unit between tokenizing and hierarchy building. Entry
//! lists keep their order and their duplicates; both carry meaning.
//!
//! Entry lists form a monoid under [`combine`] with the empty list as
//! identity, which is what makes concatenating configuration fragments well
//! behaved.

use serde::{Deserialize, Serialize};

/// The key under which comments are stored.
pub const COMMENT_KEY: &str = "/";

/// A single key/value pair in source order.
///
/// `value` is either scalar text or the raw text of a nested block (a first
/// line that is blank followed by more indented lines). Nested blocks are
/// tokenized again by the hierarchy builder.
///
/// # Examples
///
/// ```rust
/// use ccl::{parse, Entry};
///
/// let entries = parse("name = Alice");
/// assert_eq!(entries, vec![Entry::new("name", "Alice")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns `true` if this entry came from a `/=` comment line.
    #[inline]
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.key == COMMENT_KEY
    }

    /// Returns `true` if the value is an unparsed nested block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccl::Entry;
    ///
    /// assert!(Entry::new("db", "\n  host = localhost").is_nested_block());
    /// assert!(!Entry::new("note", "first\n  second").is_nested_block());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_nested_block(&self) -> bool {
        is_nested_block(&self.value)
    }
}

/// A value is a nested block when it spans lines and its first line is blank.
pub(crate) fn is_nested_block(value: &str) -> bool {
    match value.split_once('\n') {
        Some((first, _)) => first.trim().is_empty(),
        None => false,
    }
}

/// Removes comment entries, keeping everything else in order.
///
/// # Examples
///
/// ```rust
/// use ccl::{filter, parse};
///
/// let entries = parse("/= generated file\nkey = value");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(filter(entries).len(), 1);
/// ```
#[must_use]
pub fn filter(entries: Vec<Entry>) -> Vec<Entry> {
    entries.into_iter().filter(|e| !e.is_comment()).collect()
}

/// Concatenates two entry lists.
///
/// # Examples
///
/// ```rust
/// use ccl::{build_hierarchy, combine, parse};
///
/// let base = parse("host = localhost");
/// let overlay = parse("port = 8080");
/// let doc = build_hierarchy(&combine(base, overlay));
/// assert_eq!(doc.as_object().map(|o| o.len()), Some(2));
/// ```
#[must_use]
pub fn combine(mut left: Vec<Entry>, right: Vec<Entry>) -> Vec<Entry> {
    left.extend(right);
    left
}
