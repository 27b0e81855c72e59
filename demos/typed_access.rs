//! Typed accessors, their errors, and deserializing into structs.
//!
//! Run with: cargo run --example typed_access

use ccl::{from_str, get_bool, get_float, get_int, load, ErrorKind};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Limits {
    requests: u32,
    burst: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct Config {
    debug: bool,
    ratio: f64,
    limits: Limits,
    admins: Vec<String>,
}

const CONFIG: &str = "\
debug = yes
ratio = 0.75
limits =
  requests = 100
  burst =
admins =
  = alice
  = bob";

fn main() -> Result<(), Box<dyn Error>> {
    let doc = load(CONFIG);

    println!("debug:    {}", get_bool(&doc, &["debug"])?);
    println!("ratio:    {}", get_float(&doc, &["ratio"])?);
    println!("requests: {}", get_int(&doc, &["limits", "requests"])?);

    for path in [&["ratio"][..], &["limits"], &["limits", "requests", "max"]] {
        let err = get_int(&doc, path).unwrap_err();
        let label = match err.kind() {
            ErrorKind::InvalidFormat => "invalid format",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::NotAnObject => "not an object",
            _ => "other",
        };
        println!("{:<16} {}", label, err);
    }

    let config: Config = from_str(CONFIG)?;
    println!("\n{:#?}", config);

    Ok(())
}
