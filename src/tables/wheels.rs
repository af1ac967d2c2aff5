//! Vowel wheels for the accent rotation stage.
//!
//! Each base vowel owns an independent wheel: position 3 of `a` has nothing
//! to do with position 3 of `e`. Only the one-rune wheel is rotated; the
//! two-rune wheel (base letter plus combining mark) is kept so table
//! validation covers the combining forms too.

/// Base vowels. `w` and `y` count as vowels.
pub const BASE_VOWELS: [char; 7] = ['a', 'e', 'i', 'o', 'u', 'w', 'y'];

/// Single code point variants, base letter first.
pub const ONE_RUNE_WHEEL: &[(char, &[char])] = &[
    ('a', &['a', 'à', 'á', 'â', 'ã', 'å', 'ä', 'ā', 'ă']),
    ('e', &['e', 'è', 'é', 'ê', 'ẽ', 'ė', 'ë', 'ē', 'ĕ']),
    // dotless ı is left out, its case does not round-trip
    ('i', &['i', 'ì', 'í', 'î', 'ĩ', 'ï', 'ī', 'ĭ']),
    ('o', &['o', 'ò', 'ó', 'ô', 'õ', 'ø', 'ö', 'ō', 'ŏ']),
    ('u', &['u', 'ù', 'ú', 'û', 'ũ', 'ů', 'ü', 'ū', 'ŭ']),
    ('w', &['w', 'ẁ', 'ẃ', 'ŵ', 'ẅ']),
    ('y', &['y', 'ỳ', 'ý', 'ŷ', 'ỹ', 'ẏ', 'ÿ', 'ȳ']),
];

/// Base letter followed by a combining ogonek (U+0328), caron (U+030C) or
/// horn (U+031B).
pub const TWO_RUNE_WHEEL: &[(char, &[&str])] = &[
    ('a', &["a\u{0328}", "a\u{030C}"]),
    ('e', &["e\u{0328}", "e\u{030C}"]),
    ('i', &["i\u{0328}", "i\u{030C}"]),
    ('o', &["o\u{0328}", "o\u{030C}", "o\u{031B}"]),
    ('u', &["u\u{0328}", "u\u{030C}", "u\u{031B}"]),
    ('w', &["w\u{0328}", "w\u{030C}"]),
    ('y', &["y\u{0328}"]),
];

/// Returns the one-rune wheel of `base`.
pub fn one_rune_wheel(base: char) -> Option<&'static [char]> {
    ONE_RUNE_WHEEL
        .iter()
        .find(|(b, _)| *b == base)
        .map(|(_, wheel)| *wheel)
}

/// Finds a lowercase vowel on the one-rune wheels.
///
/// Returns the base vowel and the position of `c` on its wheel.
pub fn wheel_position(c: char) -> Option<(char, usize)> {
    ONE_RUNE_WHEEL.iter().find_map(|(base, wheel)| {
        wheel
            .iter()
            .position(|&variant| variant == c)
            .map(|idx| (*base, idx))
    })
}
