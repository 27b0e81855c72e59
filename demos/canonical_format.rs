//! Normalizing hand-written CCL into canonical form.
//!
//! Run with: cargo run --example canonical_format

use ccl::{canonical_format, canonical_format_with_options, load, CclOptions};

const MESSY: &str = "name=my-app\r
database   =\r
        host=localhost\r
        port   =   5432\r
servers=web1\r
\r
servers   = web2\r
motd = Hello\r
    and welcome";

fn main() {
    let doc = load(MESSY);

    let canonical = canonical_format(&doc);
    println!("{}\n", canonical);

    // Formatting is a fixed point
    assert_eq!(canonical_format(&load(&canonical)), canonical);
    println!("✓ Canonical form is stable");

    let options = CclOptions::new().with_indent(4);
    println!("\n{}", canonical_format_with_options(&doc, &options));
}
