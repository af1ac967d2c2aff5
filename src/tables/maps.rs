//! Substitution tables for the letter and punctuation stages.
//!
//! Keys are Human forms, values are Pejelagarto forms. Values longer than
//! one code point are written with a leading quote marker by the
//! substitution engine; the tables themselves never contain the marker.

/// Single-letter pairs. Every value maps back to its own key.
pub const LETTER_MAP: &[(&str, &str)] = &[
    ("a", "u"),
    ("b", "p"),
    ("d", "f"),
    ("e", "w"),
    ("f", "d"),
    ("g", "l"),
    ("i", "o"),
    ("k", "r"),
    ("l", "g"),
    ("m", "n"),
    ("n", "m"),
    ("o", "i"),
    ("p", "b"),
    ("q", "v"),
    ("r", "k"),
    ("u", "a"),
    ("v", "q"),
    ("w", "e"),
    ("y", "y"),
];

/// Words and digraphs rewritten as a whole.
///
/// Values use only [`CONJUNCTION_VALUE_LETTERS`] and no value is a prefix of
/// another one.
pub const CONJUNCTION_MAP: &[(&str, &str)] = &[
    ("hello", "jjzxz"),
    ("hola", "jjxz"),
    ("fran", "xxzj"),
    ("the", "zxj"),
    ("leg", "zzx"),
    ("el", "jz"),
    ("la", "xj"),
    ("ch", "jx"),
    ("sh", "xz"),
    ("th", "zj"),
];

/// Letters allowed in conjunction values: absent from the letter map and
/// from every conjunction key.
pub const CONJUNCTION_VALUE_LETTERS: &[char] = &['j', 'x', 'z'];

/// Punctuation pairs. Independent from the letter tables.
pub const PUNCTUATION_MAP: &[(&str, &str)] = &[
    ("?", "‽"),
    ("!", "¡"),
    (".", ".."),
    (",", "،"),
    (";", "⁏"),
    (":", "︰"),
    ("\"", "〞"),
    ("-", "\u{2010}"),
    ("(", "⦅"),
    (")", "⦆"),
];
