use core::fmt::{self, Write};

use crate::*;

/// Renderer settings fixed for the whole session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw the `Mines:`/`Moves:` header above the grid.
    pub show_status: bool,
    pub theme: Theme,
}

/// Everything that goes into one frame. Rendering is done through `Display`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub snapshot: Snapshot,
    pub mines_remaining: CellCount,
    pub move_count: CellCount,
    pub rejection: Option<CommandError>,
    pub options: RenderOptions,
}

impl Frame {
    pub fn from_engine(
        engine: &PlayEngine,
        rejection: Option<CommandError>,
        options: RenderOptions,
    ) -> Self {
        Self {
            snapshot: Snapshot::from_engine(engine),
            mines_remaining: engine.mines_remaining_for_display(),
            move_count: engine.move_count(),
            rejection,
            options,
        }
    }

    /// Text of the message box. The outcome wins over any pending rejection.
    pub fn message(&self) -> String {
        match self.snapshot.outcome {
            Outcome::Won => "You Won!".into(),
            Outcome::Lost => "You Lost!".into(),
            Outcome::InProgress => self
                .rejection
                .map(|rejection| rejection.to_string())
                .unwrap_or_default(),
        }
    }

    /// Interior width of the grid, which is also the minimum width of the boxes.
    fn grid_width(&self) -> usize {
        (4 * usize::from(self.snapshot.size.1)).saturating_sub(1)
    }

    fn write_rule(&self, f: &mut fmt::Formatter<'_>, [left, mid, right]: [char; 3]) -> fmt::Result {
        f.write_char(left)?;
        for col in 0..self.snapshot.size.1 {
            if col > 0 {
                f.write_char(mid)?;
            }
            f.write_str("───")?;
        }
        f.write_char(right)?;
        f.write_char('\n')
    }

    fn write_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.snapshot.size;

        self.write_rule(f, ['┌', '┬', '┐'])?;
        for row in 0..rows {
            if row > 0 {
                self.write_rule(f, ['├', '┼', '┤'])?;
            }
            f.write_char('│')?;
            for col in 0..cols {
                f.write_char(' ')?;
                self.options
                    .theme
                    .write_glyph(f, self.snapshot.glyph_at((row, col)))?;
                f.write_str(" │")?;
            }
            f.write_char('\n')?;
        }
        self.write_rule(f, ['└', '┴', '┘'])
    }
}

/// Draws a double-line box around `lines`, left-aligned and padded to at least `min_width`.
fn write_box(f: &mut fmt::Formatter<'_>, lines: &[&str], min_width: usize) -> fmt::Result {
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .fold(min_width, usize::max);
    let border = "═".repeat(width);

    writeln!(f, "╔{border}╗")?;
    for line in lines {
        writeln!(f, "║{line:<width$}║")?;
    }
    writeln!(f, "╚{border}╝")
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.grid_width();

        if self.options.show_status {
            let mines = format!("Mines: {}", self.mines_remaining);
            let moves = format!("Moves: {}", self.move_count);
            write_box(f, &[&mines, &moves], width)?;
        }
        self.write_grid(f)?;
        write_box(f, &[&self.message()], width)
    }
}
