//! Accent rotation driven by the prime factorization of the text length.
//!
//! For a text of `N` code points with `N = p1^e1 * p2^e2 * ...`, the vowel
//! at (1-based) vowel position `p` is moved `e` steps along its one-rune
//! wheel. Decoding moves it back. Length never changes.

use crate::tables::wheels::{one_rune_wheel, wheel_position};
use crate::text::case::{to_lower, to_upper};
use crate::text::Direction;

/// Prime factorization of `n` as `(prime, exponent)` pairs, ascending.
///
/// Empty for `n <= 1`.
pub fn prime_factors(mut n: usize) -> Vec<(usize, u32)> {
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }

    let mut p = 2;
    while p * p <= n {
        let mut exponent = 0;
        while n % p == 0 {
            n /= p;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push((p, exponent));
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

/// A code point that counts as a vowel for the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Vowel {
    base: char,
    index: usize,
    upper: bool,
}

fn classify(c: char) -> Option<Vowel> {
    let lower = to_lower(c);
    let upper = lower != c;
    if upper && to_upper(lower) != c {
        return None;
    }
    wheel_position(lower).map(|(base, index)| Vowel { base, index, upper })
}

/// True when `c` takes part in the accent rotation.
pub fn is_vowel(c: char) -> bool {
    classify(c).is_some()
}

/// Rotates the accents forward.
pub fn to_pejelagarto(input: &str) -> String {
    rotate(input, Direction::ToPejelagarto)
}

/// Rotates the accents back.
pub fn from_pejelagarto(input: &str) -> String {
    rotate(input, Direction::FromPejelagarto)
}

fn rotate(input: &str, direction: Direction) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    let factors = prime_factors(chars.len());
    if factors.is_empty() {
        return input.to_string();
    }

    let vowels: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| is_vowel(**c))
        .map(|(i, _)| i)
        .collect();

    for (prime, exponent) in factors {
        let Some(&pos) = vowels.get(prime - 1) else {
            continue;
        };
        let Some(vowel) = classify(chars[pos]) else {
            continue;
        };
        let Some(wheel) = one_rune_wheel(vowel.base) else {
            continue;
        };

        let len = wheel.len();
        let step = exponent as usize % len;
        let target = match direction {
            Direction::ToPejelagarto => (vowel.index + step) % len,
            Direction::FromPejelagarto => (vowel.index + len - step) % len,
        };

        let mut rotated = wheel[target];
        if vowel.upper {
            let upper = to_upper(rotated);
            if to_lower(upper) == rotated {
                rotated = upper;
            }
        }
        chars[pos] = rotated;
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_factors() {
        assert_eq!(prime_factors(0), vec![]);
        assert_eq!(prime_factors(1), vec![]);
        assert_eq!(prime_factors(2), vec![(2, 1)]);
        assert_eq!(prime_factors(12), vec![(2, 2), (3, 1)]);
        assert_eq!(prime_factors(245), vec![(5, 1), (7, 2)]);
        assert_eq!(prime_factors(97), vec![(97, 1)]);
    }

    #[test]
    fn test_fifth_vowel_rotates() {
        assert_eq!(to_pejelagarto("aeiou"), "aeioù");
        assert_eq!(from_pejelagarto("aeioù"), "aeiou");
    }

    #[test]
    fn test_uppercase_is_kept() {
        assert_eq!(to_pejelagarto("AEIOU"), "AEIOÙ");
        assert_eq!(from_pejelagarto("AEIOÙ"), "AEIOU");
    }

    #[test]
    fn test_two_primes() {
        // 6 = 2 * 3: second and third vowels move one step
        assert_eq!(to_pejelagarto("aeioua"), "aèìoua");
        assert_eq!(from_pejelagarto("aèìoua"), "aeioua");
    }

    #[test]
    fn test_wheel_wraps() {
        // ă is the last entry of the a-wheel
        assert_eq!(to_pejelagarto("aă"), "aa");
        assert_eq!(from_pejelagarto("aa"), "aă");
    }

    #[test]
    fn test_unknown_accent_is_not_a_vowel() {
        // ǎ is not on any one-rune wheel
        assert!(!is_vowel('ǎ'));
        assert_eq!(to_pejelagarto("ǎe"), "ǎe");
    }

    #[test]
    fn test_combining_mark_base_counts() {
        // "a\u{0328}e" has length 3: the third vowel does not exist
        assert_eq!(to_pejelagarto("a\u{0328}e"), "a\u{0328}e");
        // length 4 = 2^2: the second vowel is e
        assert_eq!(to_pejelagarto("a\u{0328}ex"), "a\u{0328}éx");
    }

    #[test]
    fn test_too_few_vowels() {
        assert_eq!(to_pejelagarto("xyz"), "xyz");
        assert_eq!(to_pejelagarto("b"), "b");
        assert_eq!(to_pejelagarto(""), "");
    }
}
