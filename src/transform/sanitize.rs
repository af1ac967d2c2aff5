//! Byte sanitizer.
//!
//! Turns an arbitrary byte sequence into valid text. Every byte that is not
//! part of a valid UTF-8 sequence becomes the pair `U+3164, U+E000 + byte`.
//! A literal U+3164 that could be misread as the start of such a pair is
//! written twice.

use crate::tables::{BYTE_MARKER, BYTE_RANGE_START};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Text(char),
    Byte(u8),
}

impl Piece {
    /// First code point this piece emits.
    fn first_char(self) -> char {
        match self {
            Piece::Text(c) => c,
            Piece::Byte(_) => BYTE_MARKER,
        }
    }
}

fn is_byte_char(c: char) -> bool {
    (BYTE_RANGE_START..BYTE_RANGE_START + 0x100).contains(&u32::from(c))
}

fn byte_char(byte: u8) -> char {
    char::from_u32(BYTE_RANGE_START + u32::from(byte)).unwrap_or(BYTE_MARKER)
}

fn split_pieces(input: &[u8]) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(input.len());
    let mut rest = input;

    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                pieces.extend(valid.chars().map(Piece::Text));
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                // the prefix was just validated
                if let Ok(valid) = std::str::from_utf8(valid) {
                    pieces.extend(valid.chars().map(Piece::Text));
                }
                let bad_len = e.error_len().unwrap_or(after.len());
                pieces.extend(after[..bad_len].iter().map(|&b| Piece::Byte(b)));
                rest = &after[bad_len..];
            }
        }
    }
    pieces
}

/// Converts arbitrary bytes to valid text.
pub fn sanitize_bytes(input: &[u8]) -> String {
    let pieces = split_pieces(input);
    let mut result = String::with_capacity(input.len() + 8);

    for (i, piece) in pieces.iter().enumerate() {
        match *piece {
            Piece::Byte(b) => {
                result.push(BYTE_MARKER);
                result.push(byte_char(b));
            }
            Piece::Text(c) => {
                result.push(c);
                if c == BYTE_MARKER {
                    let next = pieces.get(i + 1).map(|p| p.first_char());
                    if next.map_or(false, |n| n == BYTE_MARKER || is_byte_char(n)) {
                        result.push(BYTE_MARKER);
                    }
                }
            }
        }
    }
    result
}

/// Reverses [`sanitize_bytes`].
pub fn unsanitize(input: &str) -> Vec<u8> {
    let chars: Vec<char> = input.chars().collect();
    let mut result = Vec::with_capacity(input.len());
    let mut buf = [0u8; 4];
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == BYTE_MARKER {
            match chars.get(i + 1) {
                Some(&BYTE_MARKER) => {
                    result.extend_from_slice(BYTE_MARKER.encode_utf8(&mut buf).as_bytes());
                    i += 2;
                    continue;
                }
                Some(&next) if is_byte_char(next) => {
                    // the range holds exactly 256 code points
                    result.push((u32::from(next) - BYTE_RANGE_START) as u8);
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }
        result.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        i += 1;
    }
    result
}
