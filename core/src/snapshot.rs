use ndarray::Array2;

use crate::*;

/// What a single grid cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Blank,
    Digit(u8),
    Mine,
    Flag,
    Shaded,
}

/// Read-only display state of a board, with the end-of-game overlay already applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub size: Coord2,
    pub outcome: Outcome,
    pub glyphs: Array2<Glyph>,
}

impl Snapshot {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let size = engine.size();
        let outcome = engine.outcome();
        let glyphs = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            Self::cell_glyph(engine.cell_at((row as Coord, col as Coord)), outcome)
        });

        let snapshot = Self {
            size,
            outcome,
            glyphs,
        };
        if outcome == Outcome::Lost {
            snapshot.disclose_mines(engine.mine_layout())
        } else {
            snapshot
        }
    }

    pub fn glyph_at(&self, coords: Coord2) -> Glyph {
        self.glyphs[coords.to_nd_index()]
    }

    /// Covered cells stay blank until a win, when the remaining (necessarily mined) cells are
    /// shaded.
    fn cell_glyph(cell: EngineCell, outcome: Outcome) -> Glyph {
        match cell {
            EngineCell::Detonated => Glyph::Mine,
            EngineCell::Revealed(0) => Glyph::Blank,
            EngineCell::Revealed(count) => Glyph::Digit(count),
            EngineCell::Flagged => Glyph::Flag,
            EngineCell::Hidden if outcome == Outcome::Won => Glyph::Shaded,
            EngineCell::Hidden => Glyph::Blank,
        }
    }

    /// Shows every mine, flagged or not.
    fn disclose_mines(mut self, layout: &MineLayout) -> Self {
        for coords in layout.iter_mines() {
            self.glyphs[coords.to_nd_index()] = Glyph::Mine;
        }
        self
    }
}
