#[macro_export]
macro_rules! record {
    // Handle empty record
    () => {
        $crate::Record::new()
    };

    // Handle non-empty record
    ($($label:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert($label.to_string(), $value.to_string());
        )+
        record
    }};
}

#[macro_export]
macro_rules! document {
    // Handle empty document
    () => {
        $crate::Document::new()
    };

    // Handle non-empty document
    ($($record:expr),+ $(,)?) => {{
        let mut document = $crate::Document::new();
        $(
            document.push($record);
        )+
        document
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Document, Record};

    #[test]
    fn test_record_macro_empty() {
        assert_eq!(record!(), Record::new());
    }

    #[test]
    fn test_record_macro_fields() {
        let record = record! {
            "host" => "127.0.0.1",
            "status" => 200,
        };
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("host"), Some("127.0.0.1"));
        assert_eq!(record.get("status"), Some("200"));
        assert_eq!(record.label_at(1), Some("status"));
    }

    #[test]
    fn test_document_macro() {
        assert_eq!(document!(), Document::new());

        let document = document![
            record! { "a" => "1" },
            record! { "b" => "2" },
        ];
        assert_eq!(document.len(), 2);
        assert_eq!(document.get(0).unwrap().get("a"), Some("1"));
        assert_eq!(document.get(1).unwrap().get("b"), Some("2"));
    }

    #[test]
    fn test_macros_match_parsed_input() {
        let parsed = crate::parse_str("a:1\tb:2\nc:3").unwrap();
        let built = document![
            record! { "a" => "1", "b" => "2" },
            record! { "c" => "3" },
        ];
        assert_eq!(parsed, built);
    }
}
