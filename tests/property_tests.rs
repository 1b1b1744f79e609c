//! Property-based tests - pragmatic approach covering the parse contract
//! across generated inputs rather than hand-picked lines.

use ltsv::{parse_str, Error};
use proptest::prelude::*;

/// Strategy for a grammar-valid label.
fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9A-Za-z_.-]{1,8}").unwrap()
}

/// Strategy for a grammar-valid value: printable ASCII, which includes
/// colons and spaces but none of the structural bytes.
fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~]{0,12}").unwrap()
}

/// Strategy for one line's worth of fields with guaranteed-unique labels.
fn fields() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((label(), value()), 1..6).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            // Suffixing the index keeps every label distinct without
            // leaving the label character class.
            .map(|(i, (label, value))| (format!("{label}{i}"), value))
            .collect()
    })
}

fn render_line(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(label, value)| format!("{label}:{value}"))
        .collect::<Vec<_>>()
        .join("\t")
}

proptest! {
    // Any document assembled from valid labels and values parses back with
    // matching record counts, field counts, and values.
    #[test]
    fn prop_valid_documents_roundtrip(lines in prop::collection::vec(fields(), 0..8)) {
        let text = lines
            .iter()
            .map(|fields| render_line(fields))
            .collect::<Vec<_>>()
            .join("\n");

        let document = parse_str(&text).unwrap();
        prop_assert_eq!(document.len(), lines.len());

        for (record, fields) in document.iter().zip(&lines) {
            prop_assert_eq!(record.len(), fields.len());
            for (i, (label, value)) in fields.iter().enumerate() {
                prop_assert_eq!(record.get(label), Some(value.as_str()));
                prop_assert_eq!(record.label_at(i), Some(label.as_str()));
            }
        }
    }

    // A repeated label within one line always fails with DuplicateLabel,
    // whatever the values are.
    #[test]
    fn prop_duplicate_label_always_fails(l in label(), v1 in value(), v2 in value()) {
        let text = format!("{l}:{v1}\t{l}:{v2}");
        match parse_str(&text) {
            Err(Error::DuplicateLabel { label, line, .. }) => {
                prop_assert_eq!(label, l);
                prop_assert_eq!(line, 1);
            }
            other => prop_assert!(false, "expected DuplicateLabel, got {:?}", other),
        }
    }

    // Arbitrary input never panics; it either parses or reports an error.
    #[test]
    fn prop_arbitrary_input_never_panics(text in "\\PC*") {
        let _ = parse_str(&text);
    }

    // Arbitrary bytes never panic either.
    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = ltsv::parse_slice(&bytes);
    }

    // Blank lines never change what the surrounding records parse to.
    #[test]
    fn prop_blank_lines_are_invisible(fields in fields(), blanks in 1..4usize) {
        let line = render_line(&fields);
        let padded = format!("{}{}{}", "\n".repeat(blanks), line, "\n".repeat(blanks));

        let document = parse_str(&padded).unwrap();
        prop_assert_eq!(document.len(), 1);
        prop_assert_eq!(document.get(0).unwrap().len(), fields.len());
    }
}
