//! Case flip at Fibonacci or Tribonacci positions.
//!
//! The parity of the word count picks the sequence. Flipping never changes
//! the word count or the length, so the stage is its own inverse.

use crate::text::case::invert_case;

/// Number of maximal runs of letters or digits.
pub fn count_words(input: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for c in input.chars() {
        let word_char = c.is_alphabetic() || c.is_numeric();
        if word_char && !in_word {
            count += 1;
        }
        in_word = word_char;
    }
    count
}

/// 1-based Fibonacci positions `1, 2, 3, 5, 8, ...` up to `max`.
pub fn fibonacci(max: usize) -> Vec<usize> {
    let mut positions = Vec::new();
    let (mut a, mut b) = (1usize, 2usize);
    while a <= max {
        positions.push(a);
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    positions
}

/// 1-based Tribonacci positions `1, 2, 4, 7, 13, ...` up to `max`.
pub fn tribonacci(max: usize) -> Vec<usize> {
    let mut positions = Vec::new();
    let (mut a, mut b, mut c) = (1usize, 2usize, 4usize);
    while a <= max {
        positions.push(a);
        let next = a.saturating_add(b).saturating_add(c);
        a = b;
        b = c;
        c = next;
    }
    positions
}

/// Inverts the case at the selected positions. Applying it twice is a no-op.
pub fn flip_case(input: &str) -> String {
    let words = count_words(input);
    if words == 0 {
        return input.to_string();
    }

    let mut chars: Vec<char> = input.chars().collect();
    let positions = if words % 2 == 1 {
        fibonacci(chars.len())
    } else {
        tribonacci(chars.len())
    };

    for pos in positions {
        chars[pos - 1] = invert_case(chars[pos - 1]);
    }
    chars.into_iter().collect()
}
