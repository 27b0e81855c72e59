//! Typed, path-based reads over a [`Node`] tree.
//!
//! A path is a sequence of keys. Every segment is looked up in an object;
//! reaching a scalar or a list before the path ends fails with
//! [`Error::NotAnObject`], a missing segment with [`Error::KeyNotFound`].
//! The final node is then interpreted:
//!
//! | Accessor | Accepts |
//! |---|---|
//! | [`get_string`] | a scalar |
//! | [`get_int`] | a scalar matching `[+-]?[0-9]+` that fits `i64` |
//! | [`get_float`] | a scalar matching `[+-]?(digits[.digits] \| .digits)([eE][+-]?digits)?` |
//! | [`get_bool`] | a scalar accepted by the configured [`BoolMode`](crate::BoolMode) |
//! | [`get_list`] | a list of scalars, or a lone scalar with list coercion |
//!
//! ```rust
//! use ccl::{get_int, get_list, get_string, load};
//!
//! let doc = load("db =\n  host = localhost\n  port = 5432\nservers = a\nservers = b");
//! assert_eq!(get_string(&doc, &["db", "host"]).unwrap(), "localhost");
//! assert_eq!(get_int(&doc, &["db", "port"]).unwrap(), 5432);
//! assert_eq!(get_list(&doc, &["servers"]).unwrap(), vec!["a", "b"]);
//! ```

use crate::options::CclOptions;
use crate::{Error, Node, Result};

/// Splits a dotted path such as `"db.host"` into segments.
///
/// # Examples
///
/// ```rust
/// use ccl::{get_string, load, path_from_dotted};
///
/// let doc = load("db =\n  host = localhost");
/// let path = path_from_dotted("db.host");
/// assert_eq!(get_string(&doc, &path).unwrap(), "localhost");
/// ```
#[must_use]
pub fn path_from_dotted(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('.').collect()
    }
}

fn join<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}

/// Returns the node at `path`. An empty path returns `root`.
///
/// # Errors
///
/// [`Error::NotAnObject`] when a segment is looked up in a scalar or a list,
/// [`Error::KeyNotFound`] when a segment is absent.
pub fn get<'a, S: AsRef<str>>(root: &'a Node, path: &[S]) -> Result<&'a Node> {
    let mut current = root;
    for segment in path {
        let key = segment.as_ref();
        current = match current {
            Node::Object(map) => map
                .get(key)
                .ok_or_else(|| Error::key_not_found(&join(path), key))?,
            other => return Err(Error::not_an_object(&join(path), key, other.kind_name())),
        };
    }
    Ok(current)
}

fn scalar<'a, S: AsRef<str>>(root: &'a Node, path: &[S]) -> Result<&'a str> {
    match get(root, path)? {
        Node::Scalar(text) => Ok(text),
        other => Err(Error::type_mismatch(&join(path), "scalar", other.kind_name())),
    }
}

/// Returns the scalar text at `path`.
///
/// # Errors
///
/// Navigation errors as for [`get`]; [`Error::TypeMismatch`] when the node is
/// not a scalar.
pub fn get_string<S: AsRef<str>>(root: &Node, path: &[S]) -> Result<String> {
    scalar(root, path).map(str::to_string)
}

/// Returns the scalar at `path` parsed as an integer.
///
/// # Examples
///
/// ```rust
/// use ccl::{get_int, load};
///
/// let doc = load("offset = -42\nbad = 42abc");
/// assert_eq!(get_int(&doc, &["offset"]).unwrap(), -42);
/// assert!(get_int(&doc, &["bad"]).is_err());
/// ```
///
/// # Errors
///
/// As for [`get_string`], plus [`Error::InvalidFormat`] when the whole text is
/// not an integer.
pub fn get_int<S: AsRef<str>>(root: &Node, path: &[S]) -> Result<i64> {
    let text = scalar(root, path)?;
    parse_int(text).ok_or_else(|| Error::invalid_format(&join(path), "integer", text))
}

/// Returns the scalar at `path` parsed as a float.
///
/// # Errors
///
/// As for [`get_string`], plus [`Error::InvalidFormat`] when the whole text is
/// not a decimal number. `inf` and `NaN` spellings are rejected.
pub fn get_float<S: AsRef<str>>(root: &Node, path: &[S]) -> Result<f64> {
    let text = scalar(root, path)?;
    parse_float(text).ok_or_else(|| Error::invalid_format(&join(path), "number", text))
}

/// Returns the scalar at `path` as a boolean, accepting lenient literals.
///
/// # Errors
///
/// As for [`get_string`], plus [`Error::InvalidFormat`] for other text.
pub fn get_bool<S: AsRef<str>>(root: &Node, path: &[S]) -> Result<bool> {
    get_bool_with_options(root, path, &CclOptions::default())
}

/// Returns the scalar at `path` as a boolean under `options.bool_mode`.
///
/// # Examples
///
/// ```rust
/// use ccl::{get_bool_with_options, load, BoolMode, CclOptions};
///
/// let doc = load("a = yes\nb = true");
/// let strict = CclOptions::new().with_bool_mode(BoolMode::Strict);
/// assert!(get_bool_with_options(&doc, &["a"], &strict).is_err());
/// assert!(get_bool_with_options(&doc, &["b"], &strict).unwrap());
/// ```
///
/// # Errors
///
/// As for [`get_bool`].
pub fn get_bool_with_options<S: AsRef<str>>(
    root: &Node,
    path: &[S],
    options: &CclOptions,
) -> Result<bool> {
    let text = scalar(root, path)?;
    options
        .bool_mode
        .parse(text)
        .ok_or_else(|| Error::invalid_format(&join(path), options.bool_mode.expected(), text))
}

/// Returns the scalar items of the list at `path`.
///
/// # Errors
///
/// Navigation errors as for [`get`]; [`Error::TypeMismatch`] when the node is
/// not a list or an item is not a scalar.
pub fn get_list<S: AsRef<str>>(root: &Node, path: &[S]) -> Result<Vec<String>> {
    get_list_with_options(root, path, &CclOptions::default())
}

/// Returns the scalar items of the list at `path`.
///
/// Besides a list node, an object holding nothing but anonymous items
/// (`key =` followed by `= item` lines) is read as a list. With
/// `options.list_coercion`, a lone scalar reads as a one-element list.
///
/// # Examples
///
/// ```rust
/// use ccl::{get_list, get_list_with_options, load, CclOptions};
///
/// let doc = load("ports =\n  = 80\n  = 443\nhost = localhost");
/// assert_eq!(get_list(&doc, &["ports"]).unwrap(), vec!["80", "443"]);
/// assert!(get_list(&doc, &["host"]).is_err());
///
/// let coerce = CclOptions::new().with_list_coercion(true);
/// assert_eq!(
///     get_list_with_options(&doc, &["host"], &coerce).unwrap(),
///     vec!["localhost"]
/// );
/// ```
///
/// # Errors
///
/// As for [`get_list`].
pub fn get_list_with_options<S: AsRef<str>>(
    root: &Node,
    path: &[S],
    options: &CclOptions,
) -> Result<Vec<String>> {
    let items: &[Node] = match get(root, path)? {
        Node::List(items) => items,
        Node::Object(map) if map.len() == 1 => match map.get("") {
            Some(Node::List(items)) => items,
            _ => return Err(Error::type_mismatch(&join(path), "list", "object")),
        },
        Node::Scalar(text) if options.list_coercion => return Ok(vec![text.clone()]),
        other => return Err(Error::type_mismatch(&join(path), "list", other.kind_name())),
    };

    items
        .iter()
        .map(|item| match item {
            Node::Scalar(text) => Ok(text.clone()),
            other => Err(Error::type_mismatch(
                &join(path),
                "list of scalars",
                &format!("list containing {}", other.kind_name()),
            )),
        })
        .collect()
}

/// Whole-text integer grammar: optional sign, then ASCII digits.
pub(crate) fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_int(text: &str) -> Option<i64> {
    is_integer(text).then(|| text.parse().ok()).flatten()
}

/// Whole-text decimal grammar with optional fraction and exponent.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (mantissa, None),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let has_digits = !whole.is_empty() || fraction.is_some_and(|f| !f.is_empty());
    if !has_digits || !all_digits(whole) || !fraction.map_or(true, all_digits) {
        return None;
    }

    if let Some(exponent) = exponent {
        let exp_digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if exp_digits.is_empty() || !all_digits(exp_digits) {
            return None;
        }
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ccl, BoolMode, ErrorKind};

    fn doc() -> Node {
        ccl!({
            "name": "app",
            "port": "8080",
            "ratio": "0.75",
            "flag": "on",
            "servers": ["a", "b"],
            "db": {"host": "localhost", "replicas": [{"host": "r1"}, {"host": "r2"}]}
        })
    }

    #[test]
    fn test_get_navigates() {
        let doc = doc();
        assert_eq!(get(&doc, &["db", "host"]).unwrap(), &Node::from("localhost"));
        let empty: [&str; 0] = [];
        assert_eq!(get(&doc, &empty).unwrap(), &doc);
    }

    #[test]
    fn test_key_not_found_carries_path() {
        let err = get_string(&doc(), &["db", "user"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyNotFound);
        assert_eq!(err, Error::key_not_found("db.user", "user"));
    }

    #[test]
    fn test_not_an_object() {
        let err = get_string(&doc(), &["name", "first"]).unwrap_err();
        assert_eq!(err, Error::not_an_object("name.first", "first", "scalar"));

        let err = get_string(&doc(), &["servers", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotAnObject);
    }

    #[test]
    fn test_type_mismatch() {
        assert_eq!(
            get_string(&doc(), &["db"]).unwrap_err(),
            Error::type_mismatch("db", "scalar", "object")
        );
        assert_eq!(
            get_int(&doc(), &["servers"]).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn test_numbers() {
        let doc = doc();
        assert_eq!(get_int(&doc, &["port"]).unwrap(), 8080);
        assert_eq!(get_float(&doc, &["ratio"]).unwrap(), 0.75);
        assert_eq!(get_float(&doc, &["port"]).unwrap(), 8080.0);
        assert_eq!(get_int(&doc, &["ratio"]).unwrap_err().kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_int_grammar() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("-17"), Some(-17));
        for bad in ["", "-", "1 ", " 1", "1_000", "0x10", "12a", "9223372036854775808"] {
            assert_eq!(parse_int(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn test_float_grammar() {
        assert_eq!(parse_float("98.6"), Some(98.6));
        assert_eq!(parse_float("-0.5"), Some(-0.5));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("2.5E-1"), Some(0.25));
        for bad in ["", ".", "e5", "1e", "inf", "NaN", "1.2.3", "3.14abc", " 1.0"] {
            assert_eq!(parse_float(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn test_bool_modes() {
        let doc = doc();
        assert!(get_bool(&doc, &["flag"]).unwrap());
        let strict = CclOptions::new().with_bool_mode(BoolMode::Strict);
        assert_eq!(
            get_bool_with_options(&doc, &["flag"], &strict).unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn test_lists() {
        let doc = doc();
        assert_eq!(get_list(&doc, &["servers"]).unwrap(), vec!["a", "b"]);
        assert_eq!(
            get_list(&doc, &["name"]).unwrap_err(),
            Error::type_mismatch("name", "list", "scalar")
        );
        assert_eq!(
            get_list(&doc, &["db", "replicas"]).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            get_list(&doc, &["missing"]).unwrap_err().kind(),
            ErrorKind::KeyNotFound
        );
    }

    #[test]
    fn test_list_coercion() {
        let options = CclOptions::new().with_list_coercion(true);
        assert_eq!(
            get_list_with_options(&doc(), &["name"], &options).unwrap(),
            vec!["app"]
        );
        // Coercion does not apply to objects.
        assert!(get_list_with_options(&doc(), &["db"], &options).is_err());
    }

    #[test]
    fn test_owned_path_segments() {
        let path: Vec<String> = vec!["db".into(), "host".into()];
        assert_eq!(get_string(&doc(), &path).unwrap(), "localhost");
        assert_eq!(path_from_dotted(""), Vec::<&str>::new());
        assert_eq!(path_from_dotted("a.b"), vec!["a", "b"]);
    }
}
