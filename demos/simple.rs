//! Basic LTSV parsing and document access.
//!
//! Run with: cargo run --example simple

use ltsv::parse_str;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = "host:127.0.0.1\tident:-\tstatus:200\n\
                 host:10.0.0.1\tident:-\tstatus:404";

    let document = parse_str(input)?;
    println!("parsed {} records", document.len());

    for (i, record) in document.iter().enumerate() {
        println!("record {}:", i);
        for (label, value) in record.iter() {
            println!("  {} = {}", label, value);
        }
    }

    // Lookup is by exact label...
    let first = document.get(0).expect("document is not empty");
    assert_eq!(first.get("status"), Some("200"));

    // ...or by field position.
    assert_eq!(first.label_at(0), Some("host"));

    Ok(())
}
