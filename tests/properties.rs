use proptest::prelude::*;
use typedcsv::{ParserOptions, RowParser};

fn numbered_lines(total: usize) -> String {
    (0..total).map(|i| format!("{i}\n")).collect()
}

proptest! {
    #[test]
    fn skipped_lines_are_never_yielded(total in 0usize..20, skip in 0usize..25) {
        let text = numbered_lines(total);
        let parser = RowParser::<(usize,), _>::new(
            text.as_bytes(),
            ParserOptions::new().with_skip_lines(skip),
        ).unwrap();

        let rows: Vec<usize> = parser.map(|r| r.unwrap().0).collect();
        let expected: Vec<usize> = (skip.min(total)..total).collect();
        prop_assert_eq!(rows, expected);
    }

    #[test]
    fn mixed_rows_roundtrip_through_text(
        rows in proptest::collection::vec((any::<i64>(), any::<u16>(), "[a-z ]{0,10}"), 0..10)
    ) {
        let text: String = rows
            .iter()
            .map(|(a, b, s)| format!("{a},{b},{s}\n"))
            .collect();
        let parsed: Vec<(i64, u16, String)> =
            typedcsv::read_rows(text.as_bytes(), ParserOptions::default()).unwrap();
        prop_assert_eq!(parsed, rows);
    }
}
