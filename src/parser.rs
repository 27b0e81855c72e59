//! CCL tokenizer.
//!
//! This module turns raw text into an ordered list of [`Entry`] values. It is
//! the first stage of the pipeline and never fails.
//!
//! ## Grammar
//!
//! Each physical line is classified by its indentation (leading spaces and
//! tabs) and its content:
//!
//! - **Blank lines** are dropped
//! - **Continuation lines**, indented deeper than the key of the entry being
//!   read, are appended verbatim to that entry's value
//! - **Comments** start with `/=` and produce an entry with key `/`
//! - **Key/value lines** split at the first `=`
//! - Anything else is dropped
//!
//! A key line whose value is empty and which is followed by deeper lines thus
//! gets a value that starts with a newline: a nested block, tokenized again
//! by the hierarchy builder.
//!
//! ```rust
//! use ccl::{parse, Entry};
//!
//! let entries = parse("db =\n  host = localhost\nname = a=b");
//! assert_eq!(
//!     entries,
//!     vec![
//!         Entry::new("db", "\n  host = localhost"),
//!         Entry::new("name", "a=b"),
//!     ]
//! );
//! ```
//!
//! ## Strict mode
//!
//! [`parse_strict`] runs the same tokenizer but reports the first dropped
//! statement as [`Error::Syntax`] instead of ignoring it.

use crate::entry::{Entry, COMMENT_KEY};
use crate::options::{CclOptions, LineEndings, TabHandling};
use crate::{Error, Result};
use std::borrow::Cow;
use tracing::{debug, trace};

const COMMENT_MARKER: &str = "/=";

/// A statement the tokenizer could not attach to any entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLine {
    /// 1-based line number in the tokenized text.
    pub line: usize,
    /// 1-based column of the first non-whitespace character.
    pub col: usize,
    /// The line as written.
    pub text: String,
}

/// Entry currently accumulating continuation lines.
struct Pending {
    entry: Entry,
    indent: usize,
}

/// Line-by-line tokenizer state.
///
/// Most callers should use [`parse`] or [`parse_with_options`]; the
/// tokenizer is public for callers that want the dropped lines as well.
///
/// # Examples
///
/// ```rust
/// use ccl::{CclOptions, Tokenizer};
///
/// let options = CclOptions::new();
/// let (entries, dropped) = Tokenizer::new(&options).tokenize("a = 1\njunk\nb = 2");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(dropped[0].line, 2);
/// ```
pub struct Tokenizer<'a> {
    options: &'a CclOptions,
    entries: Vec<Entry>,
    pending: Option<Pending>,
    dropped: Vec<DroppedLine>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(options: &'a CclOptions) -> Self {
        Tokenizer {
            options,
            entries: Vec::new(),
            pending: None,
            dropped: Vec::new(),
        }
    }

    /// Tokenizes `input`, returning the entries and the dropped lines.
    pub fn tokenize(mut self, input: &str) -> (Vec<Entry>, Vec<DroppedLine>) {
        let text = match self.options.line_endings {
            LineEndings::Normalize if input.contains("\r\n") => {
                Cow::Owned(input.replace("\r\n", "\n"))
            }
            _ => Cow::Borrowed(input),
        };

        for (index, line) in text.split('\n').enumerate() {
            self.feed_line(index + 1, line);
        }
        self.flush();

        debug!(
            entries = self.entries.len(),
            dropped = self.dropped.len(),
            "tokenized"
        );
        (self.entries, self.dropped)
    }

    fn feed_line(&mut self, number: usize, line: &str) {
        let indent = indentation(line);
        let content = &line[indent..];

        if content.trim().is_empty() {
            return;
        }

        if let Some(pending) = self.pending.as_mut() {
            if indent > pending.indent {
                pending.entry.value.push('\n');
                pending.entry.value.push_str(line);
                return;
            }
        }
        self.flush();

        if let Some(body) = content.strip_prefix(COMMENT_MARKER) {
            let body = body.trim_matches(is_blank);
            self.start(Entry::new(COMMENT_KEY, body), indent);
        } else if let Some((key, value)) = content.split_once('=') {
            let key = key.trim_matches(is_blank);
            let value = self.trim_value(value);
            self.start(Entry::new(key, value), indent);
        } else {
            trace!(line = number, text = line, "dropping statement without '='");
            self.dropped.push(DroppedLine {
                line: number,
                col: indent + 1,
                text: line.to_string(),
            });
        }
    }

    fn start(&mut self, entry: Entry, indent: usize) {
        self.pending = Some(Pending { entry, indent });
    }

    fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            trace!(key = %pending.entry.key, indent = pending.indent, "entry");
            self.entries.push(pending.entry);
        }
    }

    fn trim_value<'s>(&self, value: &'s str) -> &'s str {
        let tabs: TabHandling = self.options.tabs;
        value.trim_matches(|ch: char| tabs.is_value_padding(ch))
    }
}

#[inline]
fn is_blank(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Number of leading spaces and tabs.
#[inline]
pub(crate) fn indentation(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

/// Tokenizes `input` with default options.
///
/// # Examples
///
/// ```rust
/// use ccl::{parse, Entry};
///
/// assert_eq!(parse("key = val"), vec![Entry::new("key", "val")]);
/// assert_eq!(parse("a=b=c"), vec![Entry::new("a", "b=c")]);
/// assert!(parse("").is_empty());
/// ```
#[must_use]
pub fn parse(input: &str) -> Vec<Entry> {
    parse_with_options(input, &CclOptions::default())
}

/// Tokenizes `input` with the given line-ending and tab policies.
#[must_use]
pub fn parse_with_options(input: &str, options: &CclOptions) -> Vec<Entry> {
    Tokenizer::new(options).tokenize(input).0
}

/// Tokenizes `input`, failing on the first statement that would be dropped.
///
/// # Examples
///
/// ```rust
/// use ccl::{parse_strict, ErrorKind};
///
/// assert!(parse_strict("a = 1\nb = 2").is_ok());
///
/// let err = parse_strict("a = 1\noops\n").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
/// assert!(err.to_string().contains("line 2"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] for a line that is neither blank, a comment, a
/// key/value statement nor a continuation of the previous entry.
pub fn parse_strict(input: &str) -> Result<Vec<Entry>> {
    parse_strict_with_options(input, &CclOptions::default())
}

/// Strict tokenizing with custom options. See [`parse_strict`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] for the first dropped statement.
pub fn parse_strict_with_options(input: &str, options: &CclOptions) -> Result<Vec<Entry>> {
    let (entries, dropped) = Tokenizer::new(options).tokenize(input);
    match dropped.into_iter().next() {
        None => Ok(entries),
        Some(line) => Err(Error::syntax(
            line.line,
            line.col,
            "expected 'key = value', a '/=' comment or an indented continuation",
            &line.text,
        )),
    }
}
