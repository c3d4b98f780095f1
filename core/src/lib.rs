//! Engine for a terminal minesweeper session: board configuration parsing, the reveal/flag state
//! machine, command parsing, frame rendering, and the read/apply/render loop tying them together.

use core::ops::Index;
use ndarray::Array2;

pub use command::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use render::*;
pub use session::*;
pub use snapshot::*;
pub use theme::*;
pub use tile::*;
pub use types::*;

mod command;
mod config;
mod engine;
mod error;
mod render;
mod session;
mod snapshot;
mod theme;
mod tile;
mod types;

/// Immutable mine placement plus the adjacency counts derived from it at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    adjacent: Array2<u8>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let mine_count = CellCount::try_from(mine_count).unwrap_or(CellCount::MAX);

        let size = dim_to_size(&mine_mask);
        let mut adjacent = Array2::zeros(size.to_nd_index());
        for coords in iter_coords(size) {
            adjacent[coords.to_nd_index()] = mine_mask
                .iter_neighbors(coords)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count() as u8;
        }

        Self {
            mine_mask,
            adjacent,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        dim_to_size(&self.mine_mask)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.adjacent[coords.to_nd_index()]
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size()).filter(|&coords| self[coords])
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    Flagged,
    Unflagged,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was already revealed; only the move counter advanced.
    NoChange,
    Revealed,
    HitMine,
    Won,
}
