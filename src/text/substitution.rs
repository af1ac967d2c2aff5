//! Layered, case-preserving substitution engine.
//!
//! A [`SubstitutionMap`] groups rules by a signed length index. Index `+k`
//! rewrites Human runs of `k` code points; index `-k` rewrites coded runs of
//! `k` code points back. Values longer than one code point are written with
//! a leading quote marker, so their inverse index counts the marker too.
//!
//! Every rule scans the whole text once. Rewritten content is wrapped in a
//! pair of working markers and no later rule may touch a position inside
//! them. Markers already present in the input are escaped before the first
//! rule and restored after the last one.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use log::trace;

use crate::tables::{END_MARKER, QUOTE_MARKER, START_MARKER};
use crate::text::case::{apply_case, eq_ignore_case, folds_cleanly};
use crate::text::escape::{escaped_positions, internal_escape, strip_markers};

/// Which way a substitution pass runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Human to Pejelagarto: positive layers first.
    ToPejelagarto,
    /// Pejelagarto to Human: negative layers first.
    FromPejelagarto,
}

/// A single rewrite, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    key: Vec<char>,
    value: Vec<char>,
}

impl Rule {
    fn new(key: &str, value: &str) -> Self {
        let key: Vec<char> = key.chars().collect();
        let mut value: Vec<char> = value.chars().collect();
        // coded keys produce Human text, which never carries the marker
        if key.first() == Some(&QUOTE_MARKER) && value.first() == Some(&QUOTE_MARKER) {
            value.remove(0);
        }
        Self { key, value }
    }

    pub fn key(&self) -> String {
        self.key.iter().collect()
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    fn is_quoted(&self) -> bool {
        self.key.first() == Some(&QUOTE_MARKER)
    }
}

/// Bijective substitution map organised by signed length index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    layers: BTreeMap<i32, BTreeMap<String, String>>,
}

impl SubstitutionMap {
    /// Builds a map from Human -> Pejelagarto pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::from_tables(&[pairs])
    }

    /// Builds one map out of several tables.
    pub fn from_tables(tables: &[&[(&str, &str)]]) -> Self {
        let mut map = Self::default();
        for table in tables {
            for &(key, value) in table.iter() {
                map.insert(key, value);
            }
        }
        map
    }

    fn insert(&mut self, key: &str, value: &str) {
        let coded = if value.chars().count() > 1 {
            format!("{}{}", QUOTE_MARKER, value)
        } else {
            value.to_string()
        };

        let forward_index = signed_len(key);
        let inverse_index = -signed_len(&coded);

        self.layers
            .entry(forward_index)
            .or_default()
            .insert(key.to_string(), coded.clone());
        self.layers
            .entry(inverse_index)
            .or_default()
            .insert(coded, key.to_string());
    }

    /// Returns the rules stored under `index`.
    pub fn layer(&self, index: i32) -> Option<&BTreeMap<String, String>> {
        self.layers.get(&index)
    }

    /// Number of forward entries (positive indices).
    pub fn forward_len(&self) -> usize {
        self.layers
            .iter()
            .filter(|(index, _)| **index > 0)
            .map(|(_, layer)| layer.len())
            .sum()
    }

    /// Number of inverse entries (negative indices).
    pub fn inverse_len(&self) -> usize {
        self.layers
            .iter()
            .filter(|(index, _)| **index < 0)
            .map(|(_, layer)| layer.len())
            .sum()
    }

    /// Layer indices in the order `direction` runs them.
    ///
    /// The sign that matches the direction comes first; within a sign,
    /// longer runs go before shorter ones.
    pub fn indices(&self, direction: Direction) -> Vec<i32> {
        let mut indices: Vec<i32> = self.layers.keys().copied().collect();
        indices.sort_by_key(|&index| {
            let late = match direction {
                Direction::ToPejelagarto => index < 0,
                Direction::FromPejelagarto => index > 0,
            };
            (late, Reverse(index.unsigned_abs()))
        });
        indices
    }

    /// All rules in execution order for `direction`.
    ///
    /// Inside a layer, longer keys go first and ties are broken
    /// lexicographically.
    pub fn rules(&self, direction: Direction) -> Vec<Rule> {
        let mut rules = Vec::new();
        for index in self.indices(direction) {
            let Some(layer) = self.layers.get(&index) else {
                continue;
            };
            let mut entries: Vec<(&String, &String)> = layer.iter().collect();
            entries.sort_by(|(a, _), (b, _)| {
                b.chars()
                    .count()
                    .cmp(&a.chars().count())
                    .then_with(|| a.cmp(b))
            });
            rules.extend(entries.into_iter().map(|(key, value)| Rule::new(key, value)));
        }
        rules
    }
}

fn signed_len(s: &str) -> i32 {
    i32::try_from(s.chars().count()).unwrap_or(i32::MAX)
}

/// Runs `rules` over `input` in order.
pub fn apply_rules(input: &str, rules: &[Rule]) -> String {
    let mut text: Vec<char> = internal_escape(input).chars().collect();

    for rule in rules {
        text = apply_rule(&text, rule);
    }

    strip_markers(&text)
}

fn apply_rule(text: &[char], rule: &Rule) -> Vec<char> {
    let escaped = escaped_positions(text);
    let depth = marker_depths(text, &escaped);
    let quoted_word = if rule.is_quoted() {
        None
    } else {
        Some(quoted_word_flags(text, &escaped, &depth))
    };

    let key_len = rule.key.len();
    let mut result = Vec::with_capacity(text.len() + 8);
    let mut matches = 0usize;
    let mut pos = 0;

    while pos < text.len() {
        let in_coded_word = quoted_word.as_ref().map_or(false, |flags| flags[pos]);
        if escaped[pos] || depth[pos] > 0 || in_coded_word {
            result.push(text[pos]);
            pos += 1;
            continue;
        }

        if key_len > 0 && pos + key_len <= text.len() && matches_at(text, pos, rule, &escaped, &depth)
        {
            result.push(START_MARKER);
            result.extend(match_case(&text[pos..pos + key_len], &rule.value));
            result.push(END_MARKER);
            pos += key_len;
            matches += 1;
            continue;
        }

        result.push(text[pos]);
        pos += 1;
    }

    if matches > 0 {
        trace!("rule {:?} -> {:?}: {} matches", rule.key(), rule.value(), matches);
    }
    result
}

/// Marker depth seen before each position. Escaped markers do not count.
fn marker_depths(text: &[char], escaped: &[bool]) -> Vec<i32> {
    let mut depths = Vec::with_capacity(text.len());
    let mut depth = 0i32;
    for (i, &c) in text.iter().enumerate() {
        depths.push(depth);
        if escaped[i] {
            continue;
        }
        if c == START_MARKER {
            depth += 1;
        } else if c == END_MARKER {
            depth -= 1;
        }
    }
    depths
}

/// For each position, whether the current word already started with a live
/// quote marker.
///
/// The nearest non-letter before the position decides: the word counts as
/// coded when that character is an unescaped quote outside any marker.
fn quoted_word_flags(text: &[char], escaped: &[bool], depth: &[i32]) -> Vec<bool> {
    let mut flags = Vec::with_capacity(text.len());
    let mut coded = false;
    for (i, &c) in text.iter().enumerate() {
        flags.push(coded);
        if c.is_alphabetic() {
            continue;
        }
        coded = c == QUOTE_MARKER && !escaped[i] && depth[i] == 0;
    }
    flags
}

fn matches_at(text: &[char], pos: usize, rule: &Rule, escaped: &[bool], depth: &[i32]) -> bool {
    let quoted_key = rule.is_quoted();
    rule.key.iter().enumerate().all(|(offset, &k)| {
        let i = pos + offset;
        let c = text[i];
        if escaped[i] || depth[i] > 0 {
            return false;
        }
        if !quoted_key && c == QUOTE_MARKER {
            return false;
        }
        if !eq_ignore_case(c, k) {
            return false;
        }
        if c.is_alphabetic() && !folds_cleanly(c) {
            return false;
        }
        !(k.is_alphabetic() && !folds_cleanly(k))
    })
}

/// Copies the case pattern of `source` onto `replacement`.
///
/// A leading quote marker on either side is skipped so the letters line up.
fn match_case(source: &[char], replacement: &[char]) -> Vec<char> {
    let source_offset = usize::from(source.first() == Some(&QUOTE_MARKER));
    let replacement_offset = usize::from(replacement.first() == Some(&QUOTE_MARKER));

    replacement
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if i < replacement_offset {
                return c;
            }
            match source.get(i - replacement_offset + source_offset) {
                Some(&s) => apply_case(s, c),
                None => c,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(map: &SubstitutionMap, direction: Direction, input: &str) -> String {
        apply_rules(input, &map.rules(direction))
    }

    fn sample_map() -> SubstitutionMap {
        SubstitutionMap::from_pairs(&[("sh", "jx"), ("a", "o"), ("o", "a"), ("b", "p"), ("p", "b")])
    }

    #[test]
    fn test_layer_indices() {
        let map = sample_map();
        assert!(map.layer(2).is_some());
        assert!(map.layer(1).is_some());
        // "jx" is written as "'jx", so its inverse lives at -3
        assert_eq!(map.layer(-3).map(|l| l.get("'jx").cloned()), Some(Some("sh".to_string())));
        assert!(map.layer(-2).is_none());
        assert_eq!(map.forward_len(), 5);
        assert_eq!(map.inverse_len(), 5);
    }

    #[test]
    fn test_index_order() {
        let map = sample_map();
        assert_eq!(map.indices(Direction::ToPejelagarto), vec![2, 1, -3, -1]);
        assert_eq!(map.indices(Direction::FromPejelagarto), vec![-3, -1, 2, 1]);
    }

    #[test]
    fn test_rules_sorted_within_layer() {
        let map = SubstitutionMap::from_pairs(&[("b", "c"), ("a", "d")]);
        let keys: Vec<String> = map
            .rules(Direction::ToPejelagarto)
            .iter()
            .map(Rule::key)
            .collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_rematch_of_rewritten_text() {
        // a -> o must not be undone by o -> a in the same pass
        let map = sample_map();
        assert_eq!(run(&map, Direction::ToPejelagarto, "ao"), "oa");
    }

    #[test]
    fn test_multi_rune_value_gets_quote() {
        let map = sample_map();
        let coded = run(&map, Direction::ToPejelagarto, "shop");
        assert_eq!(coded, "'jxab");
        assert_eq!(run(&map, Direction::FromPejelagarto, &coded), "shop");
    }

    #[test]
    fn test_case_is_carried() {
        let map = sample_map();
        let coded = run(&map, Direction::ToPejelagarto, "ShOP");
        assert_eq!(coded, "'JxAB");
        assert_eq!(run(&map, Direction::FromPejelagarto, &coded), "ShOP");
    }

    #[test]
    fn test_markers_in_input_survive() {
        let map = sample_map();
        let input = "a\u{FFF0}b\u{FFF1}\\";
        let coded = run(&map, Direction::ToPejelagarto, input);
        assert_eq!(coded, "o\u{FFF0}p\u{FFF1}\\");
        assert_eq!(run(&map, Direction::FromPejelagarto, &coded), input);
    }

    #[test]
    fn test_escaped_positions_are_skipped() {
        let map = sample_map();
        assert_eq!(run(&map, Direction::ToPejelagarto, "\u{00AD}a"), "\u{00AD}a");
    }

    #[test]
    fn test_live_quote_protects_rest_of_word() {
        let map = sample_map();
        // an unescaped quote outside markers marks the word as already coded
        assert_eq!(run(&map, Direction::ToPejelagarto, "'ab a"), "'ab o");
    }

    #[test]
    fn test_irreversible_case_is_not_matched() {
        let map = SubstitutionMap::from_pairs(&[("k", "r"), ("r", "k")]);
        assert_eq!(run(&map, Direction::ToPejelagarto, "\u{212A}k"), "\u{212A}r");
    }

    #[test]
    fn test_match_case_skips_quote() {
        let source: Vec<char> = "Sh".chars().collect();
        let replacement: Vec<char> = "'jx".chars().collect();
        assert_eq!(match_case(&source, &replacement), vec!['\'', 'J', 'x']);
    }
}
