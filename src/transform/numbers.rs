//! Number transform.
//!
//! A numeric run is an optional `-` followed by ASCII digits. Leading zeros
//! are copied as-is. The remaining digits are rewritten with arbitrary
//! precision: positive runs go from base 10 to base 8, negative runs from
//! base 10 to base 7.
//!
//! On the way back a run that contains a digit outside the coded base is
//! not a coded number and is copied unchanged.

use num_bigint::BigUint;
use num_traits::Num;

use crate::text::Direction;

const POSITIVE_RADIX: u32 = 8;
const NEGATIVE_RADIX: u32 = 7;

/// Rewrites every numeric run from base 10 to its coded base.
pub fn to_pejelagarto(input: &str) -> String {
    rewrite_numbers(input, Direction::ToPejelagarto)
}

/// Rewrites every coded numeric run back to base 10.
pub fn from_pejelagarto(input: &str) -> String {
    rewrite_numbers(input, Direction::FromPejelagarto)
}

fn rewrite_numbers(input: &str, direction: Direction) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let negative =
            chars[i] == '-' && chars.get(i + 1).map_or(false, char::is_ascii_digit);
        if !negative && !chars[i].is_ascii_digit() {
            result.push(chars[i]);
            i += 1;
            continue;
        }

        if negative {
            result.push('-');
            i += 1;
        }

        while i < chars.len() && chars[i] == '0' {
            result.push('0');
            i += 1;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let digits: String = chars[start..i].iter().collect();
        result.push_str(&convert(&digits, negative, direction));
    }
    result
}

fn convert(digits: &str, negative: bool, direction: Direction) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let coded = if negative { NEGATIVE_RADIX } else { POSITIVE_RADIX };
    let (from, to) = match direction {
        Direction::ToPejelagarto => (10, coded),
        Direction::FromPejelagarto => (coded, 10),
    };

    match BigUint::from_str_radix(digits, from) {
        Ok(value) => value.to_str_radix(to),
        Err(_) => digits.to_string(),
    }
}
