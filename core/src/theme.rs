use core::fmt;

use crate::*;

/// How glyphs are drawn inside grid cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// The fixed glyph set, no escape codes.
    #[default]
    Plain,
    /// Custom mine and flag symbols, and ANSI-coloured digits.
    Fancy { mine: char, flag: char },
}

impl Theme {
    pub const MINE_SYMBOL: char = '*';
    pub const FLAG_SYMBOL: char = '¶';
    pub const SHADED_SYMBOL: char = '▓';
    pub const BLANK_SYMBOL: char = ' ';

    const RESET: &'static str = "\x1b[0m";

    pub fn fancy(mine: Option<char>, flag: Option<char>) -> Self {
        Self::Fancy {
            mine: mine.unwrap_or(Self::MINE_SYMBOL),
            flag: flag.unwrap_or(Self::FLAG_SYMBOL),
        }
    }

    const fn digit_color(digit: u8) -> &'static str {
        match digit {
            1 => "\x1b[34m",
            2 => "\x1b[32m",
            3 => "\x1b[31m",
            4 => "\x1b[35m",
            5 => "\x1b[37m",
            6 => "\x1b[33m",
            7 => "\x1b[90m",
            _ => "\x1b[36m",
        }
    }

    pub fn write_glyph(self, f: &mut impl fmt::Write, glyph: Glyph) -> fmt::Result {
        use Glyph::*;

        match (self, glyph) {
            (_, Blank) => f.write_char(Self::BLANK_SYMBOL),
            (_, Shaded) => f.write_char(Self::SHADED_SYMBOL),
            (Self::Plain, Digit(digit)) => write!(f, "{digit}"),
            (Self::Plain, Mine) => f.write_char(Self::MINE_SYMBOL),
            (Self::Plain, Flag) => f.write_char(Self::FLAG_SYMBOL),
            (Self::Fancy { .. }, Digit(digit)) => {
                write!(f, "{}{digit}{}", Self::digit_color(digit), Self::RESET)
            }
            (Self::Fancy { mine, .. }, Mine) => f.write_char(mine),
            (Self::Fancy { flag, .. }, Flag) => f.write_char(flag),
        }
    }
}
