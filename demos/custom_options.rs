//! Selecting behavior with CclOptions.
//!
//! Run with: cargo run --example custom_options

use ccl::{
    get_bool_with_options, get_list_with_options, load_with_options, parse_strict, parse_with_options,
    BoolMode, CclOptions, LineEndings, TabHandling,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Tabs: part of the value, or padding around it
    let text = "key\t=\tvalue\t";
    for tabs in [TabHandling::Content, TabHandling::Whitespace] {
        let options = CclOptions::new().with_tabs(tabs);
        println!("{:?}: {:?}", tabs, parse_with_options(text, &options));
    }

    // Line endings
    let text = "a = 1\r\nb = 2\r\n";
    for line_endings in [LineEndings::Normalize, LineEndings::Preserve] {
        let options = CclOptions::new().with_line_endings(line_endings);
        println!("{:?}: {:?}", line_endings, parse_with_options(text, &options));
    }

    // Booleans
    let strict = CclOptions::new().with_bool_mode(BoolMode::Strict);
    let doc = load_with_options("enabled = yes", &strict);
    match get_bool_with_options(&doc, &["enabled"], &strict) {
        Ok(value) => println!("strict: {}", value),
        Err(err) => println!("strict: {}", err),
    }
    println!(
        "lenient: {}",
        get_bool_with_options(&doc, &["enabled"], &CclOptions::new())?
    );

    // A single value read as a list
    let coerce = CclOptions::new().with_list_coercion(true);
    let doc = load_with_options("host = localhost", &coerce);
    println!("coerced: {:?}", get_list_with_options(&doc, &["host"], &coerce)?);

    // Dotted keys
    let dotted = CclOptions::new().with_dotted_keys(true);
    let doc = load_with_options("db.host = localhost\ndb.port = 5432", &dotted);
    println!("dotted:\n{}", doc);

    // Strict parsing reports what the default mode drops
    if let Err(err) = parse_strict("name = app\nthis line has no equals") {
        println!("\n{}", err);
    }

    Ok(())
}
