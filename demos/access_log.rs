//! Filtering an Apache-style access log kept in LTSV form.
//!
//! Run with: cargo run --example access_log [path]
//!
//! With no argument, a small built-in sample is used.

use ltsv::{parse_file, parse_str, Document};
use std::error::Error;

const SAMPLE: &str = "\
host:127.0.0.1\ttime:[10/Oct/2000:13:55:36 -0700]\treq:GET /apache_pb.gif HTTP/1.0\tstatus:200\tsize:2326
host:10.0.0.5\ttime:[10/Oct/2000:13:55:38 -0700]\treq:GET /missing.html HTTP/1.0\tstatus:404\tsize:209
host:127.0.0.1\ttime:[10/Oct/2000:13:55:39 -0700]\treq:POST /form HTTP/1.0\tstatus:500\tsize:611
";

fn main() -> Result<(), Box<dyn Error>> {
    let document: Document = match std::env::args().nth(1) {
        Some(path) => parse_file(path)?,
        None => parse_str(SAMPLE)?,
    };

    println!("{} requests total", document.len());

    for record in document.iter() {
        let status = record.get("status").unwrap_or("-");
        if status.starts_with('4') || status.starts_with('5') {
            println!(
                "{} {} -> {}",
                record.get("host").unwrap_or("-"),
                record.get("req").unwrap_or("-"),
                status,
            );
        }
    }

    Ok(())
}
