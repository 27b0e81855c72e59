//! Load a CCL document and read values from it.
//!
//! Run with: cargo run --example simple

use ccl::{get_int, get_list, get_string, load};
use std::error::Error;

const CONFIG: &str = "\
/= my application
name = my-app
database =
  host = localhost
  port = 5432
servers = web1
servers = web2";

fn main() -> Result<(), Box<dyn Error>> {
    let doc = load(CONFIG);

    println!("name:     {}", get_string(&doc, &["name"])?);
    println!("db host:  {}", get_string(&doc, &["database", "host"])?);
    println!("db port:  {}", get_int(&doc, &["database", "port"])?);
    println!("servers:  {:?}", get_list(&doc, &["servers"])?);

    // Missing keys are typed errors, not panics
    if let Err(err) = get_string(&doc, &["database", "user"]) {
        println!("\n{}", err);
    }

    Ok(())
}
