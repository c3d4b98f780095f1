use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Flag,
}

impl Action {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "R" => Some(Self::Reveal),
            "F" => Some(Self::Flag),
            _ => None,
        }
    }
}

/// A well-formed move, already converted to zero-indexed board coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub coords: Coord2,
    pub action: Action,
}

impl Command {
    /// Parses `<row> <col> <R|F>` with one-indexed coordinates against a board of `size`.
    ///
    /// Surrounding whitespace and tokens past the third are ignored. Fewer than three tokens is
    /// `NotEnoughInputs`; anything else wrong with the three is `InvalidInput`.
    pub fn parse(line: &str, size: Coord2) -> core::result::Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let (Some(row), Some(col), Some(action)) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(CommandError::NotEnoughInputs);
        };

        let row = parse_index(row).ok_or(CommandError::InvalidInput)?;
        let col = parse_index(col).ok_or(CommandError::InvalidInput)?;
        let action = Action::from_token(action).ok_or(CommandError::InvalidInput)?;

        let (rows, cols) = size;
        let coords = (to_board_coord(row, rows)?, to_board_coord(col, cols)?);

        Ok(Self { coords, action })
    }
}

/// Accepts only a plain run of ASCII digits: no sign, no decimal point, no exponent.
fn parse_index(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn to_board_coord(index: u32, limit: Coord) -> core::result::Result<Coord, CommandError> {
    if (1..=u32::from(limit)).contains(&index) {
        Coord::try_from(index - 1).map_err(|_| CommandError::InvalidInput)
    } else {
        Err(CommandError::InvalidInput)
    }
}
