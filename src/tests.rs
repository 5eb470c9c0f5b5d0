use crate::{
    Alphabet, CodecScheme, MotifCollection, ReverseError, ReverseIndex, build_index, decode,
    encode, project, write_index,
};
use crate::errors::{DecodeError, EncodeError};
use num_bigint::BigUint;
use std::io::Cursor;

fn dna() -> Alphabet {
    Alphabet::dna()
}

#[test]
fn test_round_trip_positional() {
    let alphabet = dna();
    for word in ["ACGT", "AAAA", "GGGG", "TACG", "A", "GATTACA"] {
        let len = word.len();
        let code = encode(word, &alphabet, Some(len), CodecScheme::Positional).unwrap();
        let decoded = decode(&code, &alphabet, len, CodecScheme::Positional).unwrap();
        assert_eq!(decoded, word);
    }
}

#[test]
fn test_round_trip_packed() {
    let alphabet = dna();
    for word in ["ACGT", "AAAA", "GGGG", "TACG", "A", "GATTACA"] {
        let len = word.len();
        let code = encode(word, &alphabet, Some(len), CodecScheme::Packed).unwrap();
        let decoded = decode(&code, &alphabet, len, CodecScheme::Packed).unwrap();
        assert_eq!(decoded, word);
    }
}

#[test]
fn test_round_trip_other_alphabet() {
    // The bijection holds for any alphabet, not just DNA
    let alphabet = Alphabet::from_str("01").unwrap();
    let word = "0110100";
    let code = encode(word, &alphabet, Some(7), CodecScheme::Positional).unwrap();
    assert_eq!(code, BigUint::from(0b0110100u32));
    assert_eq!(
        decode(&code, &alphabet, 7, CodecScheme::Positional).unwrap(),
        word
    );
}

#[test]
fn test_round_trip_long_word() {
    // 40 symbols exceeds u64 range (4^40 > 2^64); codes are BigUint
    let alphabet = dna();
    let word: String = "ACGT".chars().cycle().take(40).collect();
    for scheme in [CodecScheme::Positional, CodecScheme::Packed] {
        let code = encode(&word, &alphabet, Some(40), scheme).unwrap();
        assert_eq!(decode(&code, &alphabet, 40, scheme).unwrap(), word);
    }
}

#[test]
fn test_range_bound() {
    let alphabet = dna();
    let upper = BigUint::from(4u32).pow(4);
    for word in ["AAAA", "GGGG", "ACGT", "TTCA"] {
        let code = encode(word, &alphabet, None, CodecScheme::Positional).unwrap();
        assert!(code < upper);
    }
    // The extremes of the range are hit exactly
    let zero = encode("AAAA", &alphabet, None, CodecScheme::Positional).unwrap();
    assert_eq!(zero, BigUint::from(0u8));
    let max = encode("GGGG", &alphabet, None, CodecScheme::Positional).unwrap();
    assert_eq!(max, upper - BigUint::from(1u8));
}

#[test]
fn test_length_mismatch_detection() {
    let alphabet = dna();
    let result = encode("AC", &alphabet, Some(3), CodecScheme::Positional);
    assert_eq!(
        result,
        Err(EncodeError::LengthMismatch {
            actual: 2,
            expected: 3
        })
    );
}

#[test]
fn test_unknown_symbol_detection() {
    let alphabet = dna();
    let result = encode("ACGN", &alphabet, None, CodecScheme::Positional);
    match result {
        Err(EncodeError::UnknownSymbol { symbol, word }) => {
            assert_eq!(symbol, 'N');
            assert_eq!(word, "ACGN");
        }
        other => panic!("expected UnknownSymbol, got {:?}", other),
    }
}

#[test]
fn test_positional_codes_sort_lexicographically() {
    // Alphabet-order lexicographic word order and numeric code order agree
    let alphabet = dna();
    let words = ["AAT", "ATA", "TAA", "TCG", "CAA", "GGG"];
    let mut by_code: Vec<&str> = words.to_vec();
    by_code.sort_by_key(|w| encode(w, &alphabet, None, CodecScheme::Positional).unwrap());

    let rank = |w: &str| -> Vec<usize> { w.chars().map(|c| alphabet.rank(c).unwrap()).collect() };
    let mut by_rank: Vec<&str> = words.to_vec();
    by_rank.sort_by_key(|w| rank(w));

    assert_eq!(by_code, by_rank);
}

#[test]
fn test_schemes_are_distinct_bijections() {
    let alphabet = dna();
    let positional = encode("AT", &alphabet, None, CodecScheme::Positional).unwrap();
    let packed = encode("AT", &alphabet, None, CodecScheme::Packed).unwrap();
    // positional: 0*4 + 1 = 1; packed: 0 | 1 << 2 = 4
    assert_eq!(positional, BigUint::from(1u8));
    assert_eq!(packed, BigUint::from(4u8));
}

#[test]
fn test_decode_out_of_range() {
    let alphabet = dna();
    let code = BigUint::from(16u8); // 4^2, one past the largest 2-symbol code
    let result = decode(&code, &alphabet, 2, CodecScheme::Positional);
    assert_eq!(
        result,
        Err(DecodeError::CodeOutOfRange {
            code: BigUint::from(16u8),
            length: 2,
            base: 4
        })
    );

    // Packed scheme enforces the same bound
    assert!(decode(&code, &alphabet, 2, CodecScheme::Packed).is_err());
}

#[test]
fn test_projection_keeps_trailing_symbols() {
    let alphabet = dna();
    let full = encode("ACGT", &alphabet, None, CodecScheme::Positional).unwrap();
    let tail = encode("GT", &alphabet, None, CodecScheme::Positional).unwrap();
    assert_eq!(project(&full, 4, 2, &alphabet), tail);
}

#[test]
fn test_projection_identity_and_zero() {
    let alphabet = dna();
    let full = encode("TCGA", &alphabet, None, CodecScheme::Positional).unwrap();
    assert_eq!(project(&full, 4, 4, &alphabet), full);
    assert_eq!(project(&full, 4, 0, &alphabet), BigUint::from(0u8));
}

#[test]
#[should_panic(expected = "projection target length")]
fn test_projection_precondition() {
    let alphabet = dna();
    project(&BigUint::from(7u8), 2, 4, &alphabet);
}

#[test]
fn test_build_index_sorted_unique() {
    let alphabet = dna();
    let collection = MotifCollection::from_json_str(
        r#"{"GGGG": {}, "AAAA": {}, "TTTT": {}, "CCCC": {}, "ACGT": {}}"#,
    )
    .unwrap();

    let entries = build_index(&collection, &alphabet, CodecScheme::Positional, false).unwrap();
    assert_eq!(entries.len(), 5);
    for pair in entries.windows(2) {
        assert!(pair[0].code < pair[1].code, "codes must strictly ascend");
    }
    assert!(entries.iter().all(|e| e.weight.is_none()));
}

#[test]
fn test_build_index_with_occurrence_weights() {
    let alphabet = dna();
    let collection = MotifCollection::from_json_str(
        r#"{
            "AAAA": {"org": {"seq1": [1, 2, 3], "seq2": [4, 5, 6, 7, 8]}},
            "GGGG": {}
        }"#,
    )
    .unwrap();

    let entries = build_index(&collection, &alphabet, CodecScheme::Positional, true).unwrap();
    // AAAA encodes to 0 and sorts first
    assert_eq!(entries[0].weight, Some(8));
    assert_eq!(entries[1].weight, Some(0));
}

#[test]
fn test_build_index_rejects_mixed_lengths() {
    let alphabet = dna();
    let collection = MotifCollection::from_json_str(r#"{"AAAA": {}, "CC": {}}"#).unwrap();
    let result = build_index(&collection, &alphabet, CodecScheme::Positional, false);
    assert!(matches!(result, Err(EncodeError::LengthMismatch { .. })));
}

#[test]
fn test_build_index_aborts_on_unknown_symbol() {
    let alphabet = dna();
    let collection = MotifCollection::from_json_str(r#"{"ACGN": {}}"#).unwrap();
    let result = build_index(&collection, &alphabet, CodecScheme::Positional, false);
    assert!(matches!(result, Err(EncodeError::UnknownSymbol { .. })));
}

#[test]
fn test_index_file_format() {
    let alphabet = dna();
    let collection =
        MotifCollection::from_json_str(r#"{"AT": {"o": {"s": [1, 2]}}, "AA": {}}"#).unwrap();
    let entries = build_index(&collection, &alphabet, CodecScheme::Positional, true).unwrap();

    let mut out = Vec::new();
    write_index(&entries, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    // AA -> 0 (weight 0), AT -> 1 (weight 2)
    assert_eq!(text, "2\n0 0\n1 2\n");
}

#[test]
fn test_index_build_is_idempotent() {
    let alphabet = dna();
    let json = r#"{"TACG": {"a": {"x": [1]}}, "GCAT": {"b": {"y": [2, 3]}}, "AAAA": {}}"#;

    let mut first = Vec::new();
    let collection = MotifCollection::from_json_str(json).unwrap();
    let entries = build_index(&collection, &alphabet, CodecScheme::Positional, true).unwrap();
    write_index(&entries, &mut first).unwrap();

    // A fresh parse re-enumerates the map in some other order; the sorted
    // output must still be byte-identical.
    let mut second = Vec::new();
    let collection = MotifCollection::from_json_str(json).unwrap();
    let entries = build_index(&collection, &alphabet, CodecScheme::Positional, true).unwrap();
    write_index(&entries, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_reverse_streams_in_file_order() {
    let alphabet = dna();
    let input = Cursor::new("3\n0\n5\n13\n");
    let motifs: Vec<String> = ReverseIndex::new(input, 2, alphabet, CodecScheme::Positional)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(motifs, ["AA", "TT", "GT"]);
}

#[test]
fn test_reverse_ignores_weight_column() {
    let alphabet = dna();
    let input = Cursor::new("2\n5 7\n13 2\n");
    let motifs: Vec<String> = ReverseIndex::new(input, 2, alphabet, CodecScheme::Positional)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(motifs, ["TT", "GT"]);
}

#[test]
fn test_reverse_fails_fast_on_range_error() {
    let alphabet = dna();
    // 16 does not fit in two base-4 digits; line 4 must never be reached
    let input = Cursor::new("3\n5\n16\n7\n");
    let mut reverse = ReverseIndex::new(input, 2, alphabet, CodecScheme::Positional);

    assert_eq!(reverse.next().unwrap().unwrap(), "TT");

    match reverse.next() {
        Some(Err(ReverseError::Decode { line, code, length, .. })) => {
            assert_eq!(line, 3);
            assert_eq!(code, BigUint::from(16u8));
            assert_eq!(length, 2);
        }
        other => panic!("expected decode failure, got {:?}", other),
    }

    assert!(reverse.next().is_none());
}

#[test]
fn test_reverse_reports_malformed_line() {
    let alphabet = dna();
    let input = Cursor::new("1\nnot-a-number\n");
    let mut reverse = ReverseIndex::new(input, 2, alphabet, CodecScheme::Positional);

    assert!(matches!(
        reverse.next(),
        Some(Err(ReverseError::Parse { line: 2, .. }))
    ));
    assert!(reverse.next().is_none());
}

#[test]
fn test_index_then_reverse_round_trip() {
    let alphabet = dna();
    let collection =
        MotifCollection::from_json_str(r#"{"GATT": {}, "ACAT": {}, "TTTT": {}}"#).unwrap();
    let entries = build_index(&collection, &alphabet, CodecScheme::Positional, false).unwrap();

    let mut file = Vec::new();
    write_index(&entries, &mut file).unwrap();

    let motifs: Vec<String> =
        ReverseIndex::new(Cursor::new(file), 4, dna(), CodecScheme::Positional)
            .collect::<Result<_, _>>()
            .unwrap();

    let mut expected = vec!["GATT", "ACAT", "TTTT"];
    expected.sort_by_key(|w| encode(w, &dna(), None, CodecScheme::Positional).unwrap());
    assert_eq!(motifs, expected);
}

#[test]
fn test_packed_round_trip_through_index() {
    // The scheme choice at build time must be mirrored at reverse time
    let alphabet = dna();
    let collection = MotifCollection::from_json_str(r#"{"CGCG": {}, "ATAT": {}}"#).unwrap();
    let entries = build_index(&collection, &alphabet, CodecScheme::Packed, false).unwrap();

    let mut file = Vec::new();
    write_index(&entries, &mut file).unwrap();

    let mut motifs: Vec<String> =
        ReverseIndex::new(Cursor::new(file), 4, dna(), CodecScheme::Packed)
            .collect::<Result<_, _>>()
            .unwrap();
    motifs.sort();
    assert_eq!(motifs, ["ATAT", "CGCG"]);
}
