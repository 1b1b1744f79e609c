//! Converting LTSV input to JSON.
//!
//! Run with: cargo run --example to_json

use ltsv::parse_str;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = "label:text\thoge:fuga\nmm:value:1";

    let document = parse_str(input)?;

    // Document serializes as an array of objects, one per record, with
    // fields in line order.
    let json = serde_json::to_string_pretty(&document)?;
    println!("{}", json);

    Ok(())
}
