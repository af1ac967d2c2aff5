//! Invisible alphabets used to carry a timestamp inside coded text.
//!
//! Each date-time component has its own ordered list of code points that
//! render as nothing (or next to nothing) in most fonts. The offset of a code
//! point in its list is the component value. The five lists are disjoint, so a
//! single scan of the text recovers every component unambiguously.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// First year representable by [`YEAR_ALPHABET`].
pub const BASE_YEAR: i32 = 2025;

/// Day of month, index = day - 1.
pub const DAY_ALPHABET: &[char] = &[
    '\u{2300}', '\u{2301}', '\u{24FC}', '\u{2303}', '\u{2304}', '\u{2305}', '\u{2306}', '\u{2307}',
    '\u{2308}', '\u{2309}', '\u{230A}', '\u{230B}', '\u{230C}', '\u{230D}', '\u{230E}', '\u{230F}',
    '\u{2310}', '\u{2311}', '\u{2312}', '\u{2313}', '\u{2314}', '\u{2315}', '\u{2316}', '\u{2317}',
    '\u{2318}', '\u{2319}', '\u{24EA}', '\u{24EB}', '\u{231C}', '\u{231D}', '\u{231E}',
];

/// Month, index = month - 1.
pub const MONTH_ALPHABET: &[char] = &[
    '\u{233C}', '\u{233D}', '\u{233E}', '\u{233F}', '\u{2340}', '\u{A4F8}', '\u{A4F9}', '\u{A4FA}',
    '\u{A4FB}', '\u{A4FC}', '\u{2B4E}', '\u{2B4F}',
];

/// Year, index = year - [`BASE_YEAR`].
pub const YEAR_ALPHABET: &[char] = &[
    '\u{FE70}', '\u{FE71}', '\u{FE72}', '\u{FE73}', '\u{FE74}', '\u{FE75}', '\u{FE76}', '\u{FE77}',
    '\u{FE78}', '\u{FE79}', '\u{FE7A}', '\u{FE7B}', '\u{FE7C}', '\u{FE7D}', '\u{FE7E}', '\u{FC5E}',
    '\u{FC5F}', '\u{FC60}', '\u{FC61}', '\u{FC62}', '\u{FC63}', '\u{FBB2}', '\u{FBB3}', '\u{FBB4}',
    '\u{FBB5}', '\u{FBB6}', '\u{FBB7}', '\u{FBB8}', '\u{FBB9}', '\u{FBBA}', '\u{FBBB}', '\u{FBBC}',
    '\u{FBBD}', '\u{FBBE}', '\u{FBBF}', '\u{FBC0}', '\u{FBC1}', '\u{FBC2}', '\u{FBC3}', '\u{FBC4}',
    '\u{FBC5}', '\u{FBC6}', '\u{FBC7}', '\u{FBC8}', '\u{FBC9}', '\u{FBCA}', '\u{FBCB}', '\u{FBCC}',
    '\u{FBCD}', '\u{FBCE}', '\u{FBCF}', '\u{FBD0}', '\u{FBD1}', '\u{FBD2}', '\u{A674}', '\u{A675}',
    '\u{A676}', '\u{A677}', '\u{A678}', '\u{A679}', '\u{A67A}', '\u{A67B}', '\u{A67C}', '\u{A67D}',
    '\u{A67E}', '\u{A67F}', '\u{3192}', '\u{3193}', '\u{3194}', '\u{3195}', '\u{3196}', '\u{3197}',
    '\u{3198}', '\u{3199}', '\u{319A}', '\u{319B}', '\u{319C}', '\u{319D}', '\u{319E}', '\u{319F}',
    '\u{2E2F}', '\u{2E30}', '\u{2E31}', '\u{2E32}', '\u{2E33}', '\u{2E34}', '\u{2E35}', '\u{2E44}',
    '\u{2E49}', '\u{2E4E}', '\u{23A2}', '\u{23A3}', '\u{23A4}', '\u{23A5}', '\u{23A6}', '\u{23A7}',
    '\u{23A8}', '\u{23A9}', '\u{2DE0}', '\u{23A0}',
];

/// Hour of day.
pub const HOUR_ALPHABET: &[char] = &[
    '\u{23AA}', '\u{23AB}', '\u{23AC}', '\u{23AD}', '\u{23AE}', '\u{23AF}', '\u{23B0}', '\u{23B1}',
    '\u{23B2}', '\u{23B3}', '\u{23B4}', '\u{23B5}', '\u{23B6}', '\u{23B7}', '\u{23B8}', '\u{23B9}',
    '\u{23BA}', '\u{23BB}', '\u{23BC}', '\u{23BD}', '\u{23BE}', '\u{0F0B}', '\u{23C0}', '\u{02B9}',
];

/// Minute of hour.
pub const MINUTE_ALPHABET: &[char] = &[
    '\u{2DE1}', '\u{2DE2}', '\u{2DE3}', '\u{2DE4}', '\u{2DE5}', '\u{2DE6}', '\u{2DE7}', '\u{2DE8}',
    '\u{2DE9}', '\u{2DEA}', '\u{2DEB}', '\u{2DEC}', '\u{2DED}', '\u{2DEE}', '\u{2DEF}', '\u{2DF0}',
    '\u{2DF1}', '\u{2DF2}', '\u{2DF3}', '\u{2DF4}', '\u{2DF5}', '\u{2DF6}', '\u{2DF7}', '\u{2DF8}',
    '\u{2DF9}', '\u{2DFA}', '\u{2DFB}', '\u{2DFC}', '\u{2DFD}', '\u{2DFE}', '\u{2DFF}', '\u{2E00}',
    '\u{2E01}', '\u{2E02}', '\u{2E03}', '\u{2E04}', '\u{2E05}', '\u{2E06}', '\u{2E07}', '\u{2E08}',
    '\u{2427}', '\u{2428}', '\u{2429}', '\u{302A}', '\u{302B}', '\u{2FFC}', '\u{2FFD}', '\u{2FFE}',
    '\u{2FFF}', '\u{3099}', '\u{309A}', '\u{309B}', '\u{309C}', '\u{A702}', '\u{AAB8}', '\u{061C}',
    '\u{A950}', '\u{A951}', '\u{A926}', '\u{A952}',
];

/// A date-time component carried by one alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Day,
    Month,
    Year,
    Hour,
    Minute,
}

impl Component {
    /// All components in injection order.
    pub const ALL: [Component; 5] = [
        Component::Day,
        Component::Month,
        Component::Year,
        Component::Hour,
        Component::Minute,
    ];

    /// The alphabet that encodes this component.
    pub fn alphabet(self) -> &'static [char] {
        match self {
            Component::Day => DAY_ALPHABET,
            Component::Month => MONTH_ALPHABET,
            Component::Year => YEAR_ALPHABET,
            Component::Hour => HOUR_ALPHABET,
            Component::Minute => MINUTE_ALPHABET,
        }
    }

    /// Number of distinct values the component can take.
    pub fn expected_len(self) -> usize {
        match self {
            Component::Day => 31,
            Component::Month => 12,
            Component::Year => 100,
            Component::Hour => 24,
            Component::Minute => 60,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Component::Day => "day",
            Component::Month => "month",
            Component::Year => "year",
            Component::Hour => "hour",
            Component::Minute => "minute",
        }
    }
}

static LOOKUP: Lazy<HashMap<char, (Component, usize)>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for component in Component::ALL {
        for (offset, &c) in component.alphabet().iter().enumerate() {
            map.entry(c).or_insert((component, offset));
        }
    }
    map
});

/// Returns the component and offset encoded by `c`, if it belongs to an alphabet.
pub fn lookup(c: char) -> Option<(Component, usize)> {
    LOOKUP.get(&c).copied()
}

/// True when `c` belongs to any of the five alphabets.
pub fn is_alphabet_char(c: char) -> bool {
    LOOKUP.contains_key(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        for component in Component::ALL {
            assert_eq!(
                component.alphabet().len(),
                component.expected_len(),
                "{} alphabet",
                component.name()
            );
        }
    }

    #[test]
    fn test_lookup_roundtrip() {
        assert_eq!(lookup('\u{2300}'), Some((Component::Day, 0)));
        assert_eq!(lookup('\u{231E}'), Some((Component::Day, 30)));
        assert_eq!(lookup('\u{2B4F}'), Some((Component::Month, 11)));
        assert_eq!(lookup('\u{23A0}'), Some((Component::Year, 99)));
        assert_eq!(lookup('\u{02B9}'), Some((Component::Hour, 23)));
        assert_eq!(lookup('\u{A952}'), Some((Component::Minute, 59)));
    }

    #[test]
    fn test_plain_text_is_not_alphabet() {
        for c in "hello world 123 ‽¡".chars() {
            assert!(!is_alphabet_char(c), "{:?}", c);
        }
    }
}
