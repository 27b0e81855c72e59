//! Configuration options for CCL parsing, access and formatting.
//!
//! This module provides types to customize how CCL text is read and written:
//!
//! - [`CclOptions`]: Main configuration struct
//! - [`LineEndings`]: Normalize `\r\n` or keep `\r` as value content
//! - [`TabHandling`]: Treat tabs as content or as whitespace
//! - [`BoolMode`]: Strict or lenient boolean literals
//!
//! ## Examples
//!
//! ```rust
//! use ccl::{load_with_options, get_bool_with_options, BoolMode, CclOptions};
//!
//! let options = CclOptions::new().with_bool_mode(BoolMode::Strict);
//! let doc = load_with_options("debug = yes", &options);
//!
//! // "yes" is only accepted in lenient mode
//! assert!(get_bool_with_options(&doc, &["debug"], &options).is_err());
//! ```

/// How `\r\n` sequences are treated by the tokenizer.
///
/// # Examples
///
/// ```rust
/// use ccl::{parse_with_options, CclOptions, LineEndings};
///
/// let text = "key = value\r\n";
///
/// let normalized = parse_with_options(text, &CclOptions::new());
/// assert_eq!(normalized[0].value, "value");
///
/// let preserved = parse_with_options(
///     text,
///     &CclOptions::new().with_line_endings(LineEndings::Preserve),
/// );
/// assert_eq!(preserved[0].value, "value\r");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEndings {
    /// Rewrite `\r\n` to `\n` before splitting lines.
    #[default]
    Normalize,
    /// Keep `\r` as literal trailing content of the line.
    Preserve,
}

/// How tab characters around keys and values are treated.
///
/// Keys are always trimmed of surrounding spaces and tabs. Values differ:
///
/// - **Content**: only spaces are trimmed, tabs are part of the value
/// - **Whitespace**: spaces and tabs are both trimmed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TabHandling {
    /// Tabs around a value are kept as part of it.
    #[default]
    Content,
    /// Tabs are trimmed like spaces, on input and in canonical output.
    Whitespace,
}

impl TabHandling {
    /// Returns `true` if `ch` is trimmed from the edges of a value.
    #[inline]
    #[must_use]
    pub const fn is_value_padding(self, ch: char) -> bool {
        match self {
            TabHandling::Content => ch == ' ',
            TabHandling::Whitespace => ch == ' ' || ch == '\t',
        }
    }
}

/// Which literals [`get_bool`](crate::get_bool) accepts.
///
/// # Examples
///
/// ```rust
/// use ccl::BoolMode;
///
/// assert_eq!(BoolMode::Strict.parse("true"), Some(true));
/// assert_eq!(BoolMode::Strict.parse("yes"), None);
/// assert_eq!(BoolMode::Lenient.parse("YES"), Some(true));
/// assert_eq!(BoolMode::Lenient.parse("off"), Some(false));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BoolMode {
    /// Only `true` and `false`, case-sensitive.
    Strict,
    /// Also `yes`/`no`, `on`/`off` and `1`/`0`, case-insensitive.
    #[default]
    Lenient,
}

impl BoolMode {
    /// Parses `text` as a boolean under this mode.
    #[must_use]
    pub fn parse(self, text: &str) -> Option<bool> {
        match self {
            BoolMode::Strict => match text {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            BoolMode::Lenient => match text.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(true),
                "false" | "no" | "off" | "0" => Some(false),
                _ => None,
            },
        }
    }

    /// Describes the accepted literals, used in error messages.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            BoolMode::Strict => "true or false",
            BoolMode::Lenient => "true/false, yes/no, on/off or 1/0",
        }
    }
}

/// Configuration options for the CCL engine.
///
/// One value of this struct threads through every stage: the tokenizer reads
/// `line_endings` and `tabs`, the accessors read `bool_mode` and
/// `list_coercion`, the load pipeline reads `dotted_keys` and the formatter
/// reads `indent`.
///
/// # Examples
///
/// ```rust
/// use ccl::{BoolMode, CclOptions, TabHandling};
///
/// // Defaults
/// let options = CclOptions::new();
/// assert_eq!(options.indent, 2);
/// assert!(!options.dotted_keys);
///
/// // Custom configuration
/// let options = CclOptions::new()
///     .with_tabs(TabHandling::Whitespace)
///     .with_bool_mode(BoolMode::Strict)
///     .with_dotted_keys(true)
///     .with_indent(4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CclOptions {
    pub line_endings: LineEndings,
    pub tabs: TabHandling,
    pub bool_mode: BoolMode,
    pub list_coercion: bool,
    pub dotted_keys: bool,
    pub indent: usize,
}

impl Default for CclOptions {
    fn default() -> Self {
        CclOptions {
            line_endings: LineEndings::default(),
            tabs: TabHandling::default(),
            bool_mode: BoolMode::default(),
            list_coercion: false,
            dotted_keys: false,
            indent: 2,
        }
    }
}

impl CclOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccl::{BoolMode, CclOptions, LineEndings};
    ///
    /// let options = CclOptions::new();
    /// assert_eq!(options.line_endings, LineEndings::Normalize);
    /// assert_eq!(options.bool_mode, BoolMode::Lenient);
    /// assert!(!options.list_coercion);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that accept as little as possible: strict booleans, no list
    /// coercion, tabs kept as content and `\r` kept in values.
    #[must_use]
    pub fn strict() -> Self {
        CclOptions {
            line_endings: LineEndings::Preserve,
            tabs: TabHandling::Content,
            bool_mode: BoolMode::Strict,
            list_coercion: false,
            ..Default::default()
        }
    }

    /// Options that accept as much as possible: lenient booleans, list
    /// coercion, tabs treated as whitespace and normalized line endings.
    #[must_use]
    pub fn lenient() -> Self {
        CclOptions {
            line_endings: LineEndings::Normalize,
            tabs: TabHandling::Whitespace,
            bool_mode: BoolMode::Lenient,
            list_coercion: true,
            ..Default::default()
        }
    }

    /// Sets how `\r\n` line endings are handled.
    #[must_use]
    pub fn with_line_endings(mut self, line_endings: LineEndings) -> Self {
        self.line_endings = line_endings;
        self
    }

    /// Sets whether tabs are value content or whitespace.
    #[must_use]
    pub fn with_tabs(mut self, tabs: TabHandling) -> Self {
        self.tabs = tabs;
        self
    }

    /// Sets which boolean literals are accepted.
    #[must_use]
    pub fn with_bool_mode(mut self, bool_mode: BoolMode) -> Self {
        self.bool_mode = bool_mode;
        self
    }

    /// Enables or disables treating a lone scalar as a one-element list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccl::{get_list_with_options, load, CclOptions};
    ///
    /// let doc = load("host = localhost");
    /// let options = CclOptions::new().with_list_coercion(true);
    /// assert_eq!(
    ///     get_list_with_options(&doc, &["host"], &options).unwrap(),
    ///     vec!["localhost"]
    /// );
    /// ```
    #[must_use]
    pub fn with_list_coercion(mut self, enabled: bool) -> Self {
        self.list_coercion = enabled;
        self
    }

    /// Enables or disables expansion of dotted keys into nested objects.
    #[must_use]
    pub fn with_dotted_keys(mut self, enabled: bool) -> Self {
        self.dotted_keys = enabled;
        self
    }

    /// Sets the indentation unit (number of spaces per level) of canonical output.
    ///
    /// Values below 1 are treated as 1, since nesting is expressed by indentation.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// The indentation unit actually used by the formatter.
    #[inline]
    #[must_use]
    pub fn indent_unit(&self) -> usize {
        self.indent.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_bool_literals() {
        for text in ["true", "TRUE", "Yes", "on", "1"] {
            assert_eq!(BoolMode::Lenient.parse(text), Some(true), "{text}");
        }
        for text in ["false", "No", "OFF", "0"] {
            assert_eq!(BoolMode::Lenient.parse(text), Some(false), "{text}");
        }
        assert_eq!(BoolMode::Lenient.parse("maybe"), None);
        assert_eq!(BoolMode::Lenient.parse(""), None);
    }

    #[test]
    fn test_strict_bool_is_case_sensitive() {
        assert_eq!(BoolMode::Strict.parse("True"), None);
        assert_eq!(BoolMode::Strict.parse("1"), None);
        assert_eq!(BoolMode::Strict.parse("false"), Some(false));
    }

    #[test]
    fn test_value_padding() {
        assert!(TabHandling::Content.is_value_padding(' '));
        assert!(!TabHandling::Content.is_value_padding('\t'));
        assert!(TabHandling::Whitespace.is_value_padding('\t'));
    }

    #[test]
    fn test_presets() {
        let strict = CclOptions::strict();
        assert_eq!(strict.bool_mode, BoolMode::Strict);
        assert_eq!(strict.line_endings, LineEndings::Preserve);

        let lenient = CclOptions::lenient();
        assert!(lenient.list_coercion);
        assert_eq!(lenient.tabs, TabHandling::Whitespace);
    }

    #[test]
    fn test_indent_unit_is_never_zero() {
        assert_eq!(CclOptions::new().with_indent(0).indent_unit(), 1);
        assert_eq!(CclOptions::new().with_indent(4).indent_unit(), 4);
    }
}
