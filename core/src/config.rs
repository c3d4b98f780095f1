use ndarray::Array2;

use crate::*;

/// The only file extension accepted for board configurations, compared case-sensitively.
pub const CONFIG_EXTENSION: &str = "cfg";
pub const MAX_ROWS: usize = 20;
pub const MAX_COLS: usize = 20;
pub const MINE_SYMBOL: char = '*';
pub const SAFE_SYMBOL: char = '.';

/// Checks the extension of a configuration resource, as returned by `Path::extension`.
pub fn check_extension(extension: Option<&str>) -> core::result::Result<(), ConfigError> {
    if extension == Some(CONFIG_EXTENSION) {
        Ok(())
    } else {
        Err(ConfigError::WrongExtension {
            expected: CONFIG_EXTENSION,
        })
    }
}

/// Validates a configuration resource and builds the mine layout it describes.
///
/// Checks run in a fixed order and stop at the first failure: extension, trailing line
/// terminator, rectangular shape within `MAX_ROWS` x `MAX_COLS`, symbols, more than one cell,
/// and at least one safe cell.
pub fn parse_board_config(
    extension: Option<&str>,
    text: &str,
) -> core::result::Result<MineLayout, ConfigError> {
    check_extension(extension)?;
    parse_layout(text)
}

/// Validates configuration text (rows of `.` and `*`, each ended by a line terminator).
pub fn parse_layout(text: &str) -> core::result::Result<MineLayout, ConfigError> {
    if text.is_empty() {
        return Err(ConfigError::Empty);
    }
    let body = text
        .strip_suffix('\n')
        .ok_or(ConfigError::MissingTrailingNewline)?;

    let rows: Vec<&str> = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let width = rows[0].chars().count();
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found == 0 {
            return Err(ConfigError::EmptyRow { row: row + 1 });
        }
        if found != width {
            return Err(ConfigError::NotRectangular {
                row: row + 1,
                expected: width,
                found,
            });
        }
    }
    if rows.len() > MAX_ROWS {
        return Err(ConfigError::TooManyRows(rows.len()));
    }
    if width > MAX_COLS {
        return Err(ConfigError::TooManyColumns(width));
    }

    let mut mine_mask: Array2<bool> = Array2::default([rows.len(), width]);
    for (row, line) in rows.iter().enumerate() {
        for (col, symbol) in line.chars().enumerate() {
            mine_mask[[row, col]] = match symbol {
                MINE_SYMBOL => true,
                SAFE_SYMBOL => false,
                symbol => {
                    return Err(ConfigError::InvalidSymbol {
                        row: row + 1,
                        col: col + 1,
                        symbol,
                    });
                }
            };
        }
    }

    let layout = MineLayout::from_mine_mask(mine_mask);
    if layout.total_cells() <= 1 {
        return Err(ConfigError::SingleCell);
    }
    if layout.mine_count() >= layout.total_cells() {
        return Err(ConfigError::NoSafeCell);
    }

    log::debug!(
        "parsed {}x{} board with {} mines",
        rows.len(),
        width,
        layout.mine_count()
    );
    Ok(layout)
}
