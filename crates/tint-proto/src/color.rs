//! The fixed color palette.
//!
//! Clients may only request colors from this closed set. Names are matched
//! case-insensitively; the canonical form is lowercase.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A color from the fixed palette.
///
/// The numeric wire representation follows the mIRC color table, which is
/// why the codes are not contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// mIRC 01.
    Black,
    /// mIRC 04.
    Red,
    /// mIRC 03.
    Green,
    /// mIRC 08.
    Yellow,
    /// mIRC 02.
    Blue,
    /// mIRC 06.
    Magenta,
    /// mIRC 11.
    Cyan,
    /// mIRC 00. The default for new sessions.
    White,
}

/// Error returned when a name is not in the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color: {0}")]
pub struct UnknownColor(pub String);

impl Color {
    /// Every palette entry, in display order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// The canonical (lowercase) name of this color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// The two-digit mIRC code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 1,
            Color::Blue => 2,
            Color::Green => 3,
            Color::Red => 4,
            Color::Magenta => 6,
            Color::Yellow => 8,
            Color::Cyan => 11,
        }
    }

    /// Look a color up by wire code.
    pub fn from_code(code: u8) -> Option<Color> {
        match code {
            0 => Some(Color::White),
            1 => Some(Color::Black),
            2 => Some(Color::Blue),
            3 => Some(Color::Green),
            4 => Some(Color::Red),
            6 => Some(Color::Magenta),
            8 => Some(Color::Yellow),
            11 => Some(Color::Cyan),
            _ => None,
        }
    }

    /// Membership test: is `name` (any case) in the palette?
    pub fn is_color(name: &str) -> bool {
        name.parse::<Color>().is_ok()
    }
}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
