//! Property-based tests for the codec round trip.
//!
//! These tests verify:
//!
//! 1. **Round trip**: decode(strip(encode(x))) = x for text without alphabet code points
//! 2. **Byte fidelity**: the same holds for arbitrary byte sequences
//! 3. **Length**: accent rotation and case flip keep the code-point count
//! 4. **Involution**: the case flip undoes itself
//! 5. **Timestamp**: encoding adds exactly five invisible code points
//! 6. **Quote containment**: every quote the letter stage writes opens a coded token

use chrono::{TimeZone, Utc};
use pejelagarto::tables::{is_alphabet_char, Component};
use pejelagarto::transform::{accents, case_flip, letters, numbers};
use pejelagarto::{
    decode, decode_to_string, encode_with_config, strip_invisible_timestamp, EncoderConfig,
};
use proptest::prelude::*;

fn config(seed: u64) -> EncoderConfig {
    EncoderConfig {
        verbose: false,
        seed: Some(seed),
        clock: Some(Utc.with_ymd_and_hms(2026, 1, 31, 23, 59, 0).unwrap()),
    }
}

fn roundtrip(input: &str, seed: u64) -> String {
    let coded = encode_with_config(input.as_bytes(), &config(seed));
    decode_to_string(&strip_invisible_timestamp(&coded))
}

// String generators
fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..40).prop_map(|chars| {
        chars
            .into_iter()
            .filter(|&c| !is_alphabet_char(c))
            .collect()
    })
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ,.!?'\\-]{0,60}").unwrap()
}

fn arb_digits() -> impl Strategy<Value = String> {
    prop::string::string_regex("-?[0-9]{1,300}").unwrap()
}

const VOWEL_HEAVY: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', 'w', 'A', 'E', 'I', 'O', 'U', 'à', 'é', 'î', 'õ', 'ü', 'ā',
    'ŭ', 'ÿ', 'Ø', 'b', 'n', ' ',
];

fn arb_prime_length() -> impl Strategy<Value = String> {
    prop::sample::select(vec![2usize, 3, 5, 7, 11, 6, 12, 245]).prop_flat_map(|len| {
        prop::collection::vec(prop::sample::select(VOWEL_HEAVY), len)
            .prop_map(|chars| chars.into_iter().collect())
    })
}

const RESERVED: &[char] = &[
    '\\', '\'', '\u{00AD}', '\u{FFF0}', '\u{FFF1}', '\u{3164}', '\u{E000}', '\u{E07F}',
    '\u{E0FF}', 'a', 'h', ' ', '-', '1', '.',
];

fn arb_reserved() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(RESERVED), 0..30)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_alphabet_only() -> impl Strategy<Value = String> {
    let all: Vec<char> = Component::ALL
        .iter()
        .flat_map(|component| component.alphabet().iter().copied())
        .collect();
    prop::collection::vec(prop::sample::select(all), 0..20)
        .prop_map(|chars| chars.into_iter().collect())
}

// ============================================================================
// Round trips
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn roundtrip_unicode(input in arb_unicode_string(), seed in any::<u64>()) {
        prop_assert_eq!(roundtrip(&input, seed), input);
    }

    #[test]
    fn roundtrip_ascii_text(input in arb_text(), seed in any::<u64>()) {
        prop_assert_eq!(roundtrip(&input, seed), input);
    }

    #[test]
    fn roundtrip_long_numbers(input in arb_digits()) {
        prop_assert_eq!(numbers::from_pejelagarto(&numbers::to_pejelagarto(&input)), input.clone());
        prop_assert_eq!(roundtrip(&input, 7), input);
    }

    #[test]
    fn roundtrip_prime_lengths(input in arb_prime_length(), seed in any::<u64>()) {
        prop_assert_eq!(accents::from_pejelagarto(&accents::to_pejelagarto(&input)), input.clone());
        prop_assert_eq!(roundtrip(&input, seed), input);
    }

    #[test]
    fn roundtrip_reserved_code_points(input in arb_reserved(), seed in any::<u64>()) {
        prop_assert_eq!(roundtrip(&input, seed), input);
    }

    #[test]
    fn alphabet_code_points_vanish(input in arb_alphabet_only(), seed in any::<u64>()) {
        let coded = encode_with_config(input.as_bytes(), &config(seed));
        prop_assert_eq!(decode(&strip_invisible_timestamp(&coded)), Vec::<u8>::new());
    }

    #[test]
    fn roundtrip_bytes(input in prop::collection::vec(any::<u8>(), 0..64), seed in any::<u64>()) {
        prop_assume!(!String::from_utf8_lossy(&input).chars().any(is_alphabet_char));

        let coded = encode_with_config(&input, &config(seed));
        prop_assert_eq!(decode(&strip_invisible_timestamp(&coded)), input);
    }
}

// ============================================================================
// Stage properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn case_flip_is_involution(input in arb_unicode_string()) {
        prop_assert_eq!(case_flip::flip_case(&case_flip::flip_case(&input)), input);
    }

    #[test]
    fn case_flip_preserves_length(input in arb_unicode_string()) {
        prop_assert_eq!(
            case_flip::flip_case(&input).chars().count(),
            input.chars().count()
        );
    }

    #[test]
    fn accents_preserve_length(input in arb_prime_length()) {
        prop_assert_eq!(
            accents::to_pejelagarto(&input).chars().count(),
            input.chars().count()
        );
    }

    #[test]
    fn timestamp_adds_five_code_points(input in arb_unicode_string(), seed in any::<u64>()) {
        let coded = encode_with_config(input.as_bytes(), &config(seed));
        let stripped = strip_invisible_timestamp(&coded);
        prop_assert_eq!(coded.chars().count(), stripped.chars().count() + 5);
    }

    #[test]
    fn quote_is_followed_by_coded_token(input in "[a-zA-Z ]{0,40}") {
        let coded = letters::to_pejelagarto(&input);
        let chars: Vec<char> = coded.chars().collect();
        for (i, _) in chars.iter().enumerate().filter(|&(_, &c)| c == '\'') {
            let token = &chars[i + 1..chars.len().min(i + 3)];
            prop_assert_eq!(token.len(), 2, "dangling quote in {:?}", coded);
            prop_assert!(
                token.iter().all(|c| "jxzJXZ".contains(*c)),
                "quote not followed by a coded token in {:?}",
                coded
            );
        }
        prop_assert_eq!(letters::from_pejelagarto(&coded), input);
    }
}
