//! Invisible timestamp channel.
//!
//! One code point per component (day, month, year, hour, minute) is dropped
//! at word boundaries of the coded text. Reading takes the first code point
//! of each alphabet found in the text.

use chrono::{DateTime, Datelike, Timelike, Utc};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::tables::alphabets::lookup;
use crate::tables::{is_alphabet_char, Component, BASE_YEAR};

/// Removes every code point of the five alphabets.
pub fn strip_invisible_timestamp(input: &str) -> String {
    input.chars().filter(|&c| !is_alphabet_char(c)).collect()
}

/// Reconstructs the timestamp carried by `input` as `YYYY-MM-DDTHH:MM:00Z`.
///
/// Day, month and year are required. A missing hour or minute reads as zero.
pub fn read_invisible_timestamp(input: &str) -> Option<String> {
    let mut found: [Option<usize>; 5] = [None; 5];

    for c in input.chars() {
        if let Some((component, offset)) = lookup(c) {
            let slot = &mut found[component_slot(component)];
            if slot.is_none() {
                *slot = Some(offset);
            }
        }
    }

    let [day, month, year, hour, minute] = found;
    let (day, month, year) = (day?, month?, year?);

    Some(format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:00Z",
        BASE_YEAR + year as i32,
        month + 1,
        day + 1,
        hour.unwrap_or(0),
        minute.unwrap_or(0)
    ))
}

fn component_slot(component: Component) -> usize {
    match component {
        Component::Day => 0,
        Component::Month => 1,
        Component::Year => 2,
        Component::Hour => 3,
        Component::Minute => 4,
    }
}

/// The five code points encoding `instant`, in [`Component::ALL`] order.
///
/// Values outside an alphabet snap to offset zero.
pub fn encode_instant(instant: &DateTime<Utc>) -> [char; 5] {
    let offsets = [
        i64::from(instant.day()) - 1,
        i64::from(instant.month()) - 1,
        i64::from(instant.year()) - i64::from(BASE_YEAR),
        i64::from(instant.hour()),
        i64::from(instant.minute()),
    ];

    Component::ALL.map(|component| {
        let alphabet = component.alphabet();
        let offset = usize::try_from(offsets[component_slot(component)])
            .ok()
            .filter(|&o| o < alphabet.len())
            .unwrap_or(0);
        alphabet[offset]
    })
}

/// Candidate insertion indices: the start, right after every space or
/// newline, and the end.
pub fn insertion_positions(chars: &[char]) -> Vec<usize> {
    let mut positions = vec![0];
    positions.extend(
        chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == ' ' || c == '\n')
            .map(|(i, _)| i + 1),
    );
    positions.push(chars.len());
    positions.sort_unstable();
    positions.dedup();
    positions
}

/// Inserts the code points for `instant` at random word boundaries.
///
/// Up to five distinct positions are drawn; components that find no
/// position are appended at the end.
pub fn inject<R: Rng + ?Sized>(input: &str, instant: &DateTime<Utc>, rng: &mut R) -> String {
    let glyphs = encode_instant(instant);
    let mut chars: Vec<char> = input.chars().collect();

    let mut positions = insertion_positions(&chars);
    positions.shuffle(rng);
    positions.truncate(glyphs.len());
    positions.sort_unstable();

    debug!(
        "event=timestamp_inject instant={} positions={:?}",
        instant.format("%Y-%m-%dT%H:%M"),
        positions
    );

    for (i, &pos) in positions.iter().enumerate().rev() {
        chars.insert(pos, glyphs[i]);
    }
    chars.extend(&glyphs[positions.len()..]);

    chars.into_iter().collect()
}
