//! Locale-independent case helpers.
//!
//! Only simple mappings are used: one code point to one code point. A
//! character whose full mapping expands to several code points (`ß`, `İ`)
//! is treated as having no mapping in that direction, so every conversion
//! the codec makes can be undone by the opposite conversion.

/// Simple lowercase of `c`, or `c` itself when the mapping is not 1:1.
pub fn to_lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

/// Simple uppercase of `c`, or `c` itself when the mapping is not 1:1.
pub fn to_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// `lower(upper(c)) == c`.
pub fn lower_round_trips(c: char) -> bool {
    to_lower(to_upper(c)) == c
}

/// Folding to lowercase loses nothing: `upper(lower(c)) == upper(c)`.
///
/// Fails for characters like the Kelvin sign, whose lowercase is plain `k`.
pub fn folds_cleanly(c: char) -> bool {
    to_upper(to_lower(c)) == to_upper(c)
}

/// Case-insensitive comparison of two code points.
pub fn eq_ignore_case(a: char, b: char) -> bool {
    to_lower(a) == to_lower(b)
}

/// Inverts the case of `c` when the inversion can be undone.
///
/// Lowercasing is tried first, then uppercasing. Characters without a
/// reversible mapping come back unchanged.
pub fn invert_case(c: char) -> char {
    let lower = to_lower(c);
    if lower != c && to_upper(lower) == c {
        return lower;
    }
    let upper = to_upper(c);
    if upper != c && to_lower(upper) == c {
        return upper;
    }
    c
}

/// Applies the case of `source` to `target` when that is reversible.
///
/// Uppercase sources uppercase the target if the uppercase form survives a
/// round trip through lowercase; lowercase sources do the symmetric check.
/// Anything else leaves `target` untouched.
pub fn apply_case(source: char, target: char) -> char {
    if source.is_uppercase() {
        let upper = to_upper(target);
        if to_upper(to_lower(upper)) == upper {
            return upper;
        }
    } else if source.is_lowercase() {
        let lower = to_lower(target);
        if to_lower(to_upper(lower)) == lower {
            return lower;
        }
    }
    target
}
