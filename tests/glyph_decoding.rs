use kata_rs::glyph::{decode, encode, GlyphDecoder, GlyphError, GlyphGrid, SeparatorPolicy};
use proptest::prelude::*;

const SCANS: [(&str, u64); 3] = [
    (
        concat!(
            "    _  _     _  _  _  _  _ \n",
            "  | _| _||_||_ |_   ||_||_|\n",
            "  ||_  _|  | _||_|  ||_| _|\n",
        ),
        123456789,
    ),
    (
        concat!(
            " _  _  _  _  _  _  _  _  _ \n",
            "| | _| _|| ||_ |_   ||_||_|\n",
            "|_||_  _||_| _||_|  ||_| _|\n",
        ),
        23056789,
    ),
    (
        concat!(
            " _  _  _  _  _  _  _  _  _ \n",
            "|_| _| _||_||_ |_ |_||_||_|\n",
            "|_||_  _||_| _||_| _||_| _|\n",
        ),
        823856989,
    ),
];

#[test]
fn decodes_known_scans() {
    for (scan, expected) in SCANS {
        assert_eq!(decode(scan).unwrap(), expected);
    }
}

#[test]
fn trailing_zeros_are_kept() {
    let scan = encode("123456780").unwrap();
    assert_eq!(decode(&scan).unwrap(), 123456780);
}

#[test]
fn editor_trimmed_scan_still_decodes() {
    // Only ones and fours leave the top row blank, so trimming empties it.
    let scan = encode("1414").unwrap();
    let trimmed: String = scan.lines().map(|row| format!("{}\n", row.trim_end())).collect();
    assert_eq!(trimmed, "\n  ||_|  ||_|\n  |  |  |  |\n");
    assert_eq!(decode(&trimmed).unwrap(), 1414);
}

#[test]
fn unknown_pattern_fails_instead_of_guessing() {
    // Third cell draws "|_ " over "  |", which no digit does.
    let scan = concat!(
        "    _  _ \n",
        "  | _||_ \n",
        "  ||_   |\n",
    );
    assert!(matches!(decode(scan), Err(GlyphError::UnknownGlyph { column: 2, .. })));
}

#[test]
fn batch_and_join_policies_agree_on_digits() {
    let scan = encode("457508000 664371495").unwrap();
    assert_eq!(decode(&scan).unwrap(), 4575080000664371495);
    assert_eq!(
        GlyphDecoder::default().decode_batch(&scan).unwrap(),
        vec![457508000, 664371495]
    );
    let strict = GlyphDecoder::new().with_separator_policy(SeparatorPolicy::Reject);
    assert_eq!(strict.separator_policy(), SeparatorPolicy::Reject);
    assert_eq!(strict.decode(&scan), Err(GlyphError::UnexpectedSeparator { column: 9 }));
}

#[test]
fn grid_round_trips_through_display() {
    let grid: GlyphGrid = SCANS[0].0.parse().unwrap();
    assert_eq!(grid.len(), 9);
    assert_eq!(grid.to_string(), SCANS[0].0);
}

proptest! {
    #[test]
    fn decode_inverts_encode(digits in "[1-9][0-9]{0,17}") {
        let scan = encode(&digits).unwrap();
        prop_assert_eq!(decode(&scan).unwrap(), digits.parse::<u64>().unwrap());
    }

    #[test]
    fn batch_recovers_each_number(numbers in prop::collection::vec(1u64..1_000_000_000, 1..4)) {
        let text: Vec<String> = numbers.iter().map(u64::to_string).collect();
        let scan = encode(&text.join(" ")).unwrap();
        prop_assert_eq!(GlyphDecoder::default().decode_batch(&scan).unwrap(), numbers);
    }
}
