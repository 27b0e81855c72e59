//! Behavior shared with other CCL implementations.
//!
//! Each test pins one case: the input, the expected entries, and where it
//! matters the built tree or an accessor result.

use ccl::{
    build_hierarchy, canonical_format, ccl, get_bool, get_bool_with_options, get_float, get_int,
    get_list, get_list_with_options, get_string, load, load_with_options, parse,
    parse_with_options, BoolMode, CclOptions, Entry, ErrorKind, LineEndings, TabHandling,
};

fn entries(pairs: &[(&str, &str)]) -> Vec<Entry> {
    pairs.iter().map(|(k, v)| Entry::new(*k, *v)).collect()
}

// Parsing

#[test]
fn test_basic_key_value_pairs() {
    assert_eq!(
        parse("name = Alice\nage = 42"),
        entries(&[("name", "Alice"), ("age", "42")])
    );
}

#[test]
fn test_equals_in_values() {
    assert_eq!(
        parse("msg = a=b\nexpr=x==y"),
        entries(&[("msg", "a=b"), ("expr", "x==y")])
    );
}

#[test]
fn test_whitespace_variants() {
    assert_eq!(parse("key = val  "), entries(&[("key", "val")]));
    assert_eq!(parse("onlyspaces =     "), entries(&[("onlyspaces", "")]));
    assert_eq!(parse("  =  "), entries(&[("", "")]));
    assert_eq!(parse("\nkey = val\n"), entries(&[("key", "val")]));
    assert_eq!(
        parse("items =   spaced   \nitems = normal\nitems =\nitems =   "),
        entries(&[("items", "spaced"), ("items", "normal"), ("items", ""), ("items", "")])
    );
}

#[test]
fn test_section_header_lines_are_anonymous_entries() {
    let input = "== Database: Production ==\nhost = db.prod.com\n=== Cache: Redis Config ===\nport = 6379";
    assert_eq!(
        parse(input),
        entries(&[
            ("", "= Database: Production =="),
            ("host", "db.prod.com"),
            ("", "== Cache: Redis Config ==="),
            ("port", "6379"),
        ])
    );
}

#[test]
fn test_tabs_preserved_in_values() {
    assert_eq!(
        parse("value_with_tabs = text\t\twith\ttabs\t"),
        entries(&[("value_with_tabs", "text\t\twith\ttabs\t")])
    );
    assert_eq!(
        parse("key1=value1\nkey2  =  value2\nkey3\t=\tvalue3"),
        entries(&[("key1", "value1"), ("key2", "value2"), ("key3", "\tvalue3")])
    );
}

#[test]
fn test_tabs_as_whitespace() {
    let options = CclOptions::new().with_tabs(TabHandling::Whitespace);
    assert_eq!(
        parse_with_options("key3\t=\tvalue3\t", &options),
        entries(&[("key3", "value3")])
    );
}

#[test]
fn test_crlf_handling() {
    let input = "a = 1\r\nb =\r\n  c = 2\r\n";
    assert_eq!(parse(input), entries(&[("a", "1"), ("b", "\n  c = 2")]));

    let preserve = CclOptions::new().with_line_endings(LineEndings::Preserve);
    assert_eq!(
        parse_with_options("a = 1\r\n", &preserve),
        entries(&[("a", "1\r")])
    );
}

#[test]
fn test_multiline_values() {
    let input = "description = First line\n  Second line\n  Third line";
    assert_eq!(
        parse(input),
        entries(&[("description", "First line\n  Second line\n  Third line")])
    );
}

#[test]
fn test_unicode() {
    assert_eq!(
        parse("名前 = 太郎\nemoji = 🚀"),
        entries(&[("名前", "太郎"), ("emoji", "🚀")])
    );
    let doc = load("città = Roma");
    assert_eq!(canonical_format(&doc), "città = Roma");
}

#[test]
fn test_dotted_keys_are_literal_by_default() {
    assert_eq!(parse("a..b = value"), entries(&[("a..b", "value")]));
    assert_eq!(load("a.b = 1"), ccl!({"a.b": "1"}));
}

// Hierarchy

#[test]
fn test_nested_duplicate_keys() {
    let input = "config =\n  server = web1\n  server = web2\n  port = 80";
    assert_eq!(
        parse(input),
        entries(&[("config", "\n  server = web1\n  server = web2\n  port = 80")])
    );
    assert_eq!(
        build_hierarchy(&parse(input)),
        ccl!({"config": {"server": ["web1", "web2"], "port": "80"}})
    );
}

#[test]
fn test_list_with_empty_keys() {
    let doc = load("= 3\n= 1\n= 2");
    assert_eq!(doc, ccl!({"": ["3", "1", "2"]}));
    assert_eq!(get_list(&doc, &[""]).unwrap(), vec!["3", "1", "2"]);
}

#[test]
fn test_comments_kept_as_entries() {
    let doc = load("/= This is a comment\nkey = value\n/= another");
    assert_eq!(get_list(&doc, &["/"]).unwrap(), vec!["This is a comment", "another"]);
}

#[test]
fn test_mixed_flat_and_nested() {
    let input = "name = app\nserver =\n  host = localhost\n  ports =\n    = 80\n    = 443\nversion = 1";
    assert_eq!(
        load(input),
        ccl!({
            "name": "app",
            "server": {"host": "localhost", "ports": {"": ["80", "443"]}},
            "version": "1"
        })
    );
}

#[test]
fn test_deep_dotted_nesting() {
    let options = CclOptions::new().with_dotted_keys(true);
    let doc = load_with_options(
        "server.database.connection.host = localhost\nserver.database.connection.port = 5432",
        &options,
    );
    assert_eq!(
        get_int(&doc, &["server", "database", "connection", "port"]).unwrap(),
        5432
    );
}

#[test]
fn test_dotted_key_conflict() {
    let options = CclOptions::new().with_dotted_keys(true);
    let doc = load_with_options("database = old\ndatabase.host = localhost", &options);
    assert_eq!(doc, ccl!({"database": "old", "database.host": "localhost"}));
}

#[test]
fn test_dotted_key_merges_with_later_block() {
    let options = CclOptions::new().with_dotted_keys(true);
    let input = "database.host = localhost\ndatabase =\n  port = 3306\n  name = mydb";
    assert_eq!(
        parse(input),
        entries(&[
            ("database.host", "localhost"),
            ("database", "\n  port = 3306\n  name = mydb"),
        ])
    );
    assert_eq!(
        load_with_options(input, &options),
        ccl!({"database": {"host": "localhost", "name": "mydb", "port": "3306"}})
    );
}

#[test]
fn test_dotted_keys_merge_from_multiple_sources() {
    let options = CclOptions::new().with_dotted_keys(true);
    let input = "app.database.host = localhost\napp =\n  name = myapp\napp.database.port = 5432\napp =\n  version = 1.0";
    assert_eq!(
        load_with_options(input, &options),
        ccl!({
            "app": {
                "database": {"host": "localhost", "port": "5432"},
                "name": "myapp",
                "version": "1.0"
            }
        })
    );
}

// Typed access

#[test]
fn test_typed_values() {
    let doc = load("port = 8080\nneg = -17\ntemp = 98.6\nzero = 0\nzf = 0.0\nname = hello");
    assert_eq!(get_int(&doc, &["port"]).unwrap(), 8080);
    assert_eq!(get_int(&doc, &["neg"]).unwrap(), -17);
    assert_eq!(get_int(&doc, &["zero"]).unwrap(), 0);
    assert_eq!(get_float(&doc, &["temp"]).unwrap(), 98.6);
    assert_eq!(get_float(&doc, &["zf"]).unwrap(), 0.0);
    assert_eq!(get_string(&doc, &["name"]).unwrap(), "hello");
}

#[test]
fn test_typed_errors() {
    let doc = load("port = not_a_number\nratio = 1.2.3\nflag = maybe");
    assert_eq!(get_int(&doc, &["port"]).unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(get_float(&doc, &["ratio"]).unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(get_bool(&doc, &["flag"]).unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(get_int(&doc, &["nope"]).unwrap_err().kind(), ErrorKind::KeyNotFound);
}

#[test]
fn test_boolean_variants() {
    let doc = load("a = true\nb = yes\nc = on\nd = 1\ne = false\nf = no\ng = off\nh = 0");
    for key in ["a", "b", "c", "d"] {
        assert!(get_bool(&doc, &[key]).unwrap(), "{key}");
    }
    for key in ["e", "f", "g", "h"] {
        assert!(!get_bool(&doc, &[key]).unwrap(), "{key}");
    }

    let strict = CclOptions::new().with_bool_mode(BoolMode::Strict);
    assert!(get_bool_with_options(&doc, &["a"], &strict).unwrap());
    assert!(get_bool_with_options(&doc, &["b"], &strict).is_err());
}

#[test]
fn test_list_access() {
    let doc = load("servers = web1\nservers = web2\nservers = web3\nhost = localhost\nempty_list =");
    assert_eq!(get_list(&doc, &["servers"]).unwrap(), vec!["web1", "web2", "web3"]);
    assert_eq!(
        get_list(&doc, &["host"]).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );

    let coerce = CclOptions::new().with_list_coercion(true);
    assert_eq!(
        get_list_with_options(&doc, &["host"], &coerce).unwrap(),
        vec!["localhost"]
    );
    assert_eq!(
        get_list_with_options(&doc, &["empty_list"], &coerce).unwrap(),
        vec![""]
    );
}

#[test]
fn test_list_errors() {
    let doc = load("config =\n  port = 80\nname = x");
    assert_eq!(
        get_list(&doc, &["config", "missing"]).unwrap_err().kind(),
        ErrorKind::KeyNotFound
    );
    assert_eq!(
        get_list(&doc, &["name", "sub"]).unwrap_err().kind(),
        ErrorKind::NotAnObject
    );
}

#[test]
fn test_nested_list_access() {
    let doc = load("database =\n  hosts = primary\n  hosts = secondary\n  port = 5432");
    assert_eq!(
        get_list(&doc, &["database", "hosts"]).unwrap(),
        vec!["primary", "secondary"]
    );
}

// Canonical form

#[test]
fn test_canonical_spacing() {
    assert_eq!(
        canonical_format(&load("key1=value1\nkey2  =  value2")),
        "key1 = value1\nkey2 = value2"
    );
}

#[test]
fn test_canonical_empty_values_and_keys() {
    assert_eq!(canonical_format(&load("a =\n= x")), "a =\n= x");
}

#[test]
fn test_deterministic_output() {
    let input = "z = 1\na = 2\nm =\n  y = 3\n  b = 4";
    assert_eq!(canonical_format(&load(input)), canonical_format(&load(input)));
    assert_eq!(
        canonical_format(&load(input)),
        "z = 1\na = 2\nm =\n  y = 3\n  b = 4"
    );
}
