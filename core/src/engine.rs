use std::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use ndarray::Array2;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Mutable board state for one session. Once the outcome is `Won` or `Lost` every mutation is
/// rejected with `GameError::AlreadyEnded`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    mine_layout: MineLayout,
    board: Array2<EngineCell>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    move_count: Saturating<CellCount>,
    outcome: Outcome,
}

impl PlayEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            move_count: Saturating(0),
            outcome: Default::default(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn move_count(&self) -> CellCount {
        self.move_count.0
    }

    /// Mines left to find as shown in the status header. Pinned to zero once the game is over,
    /// whatever the flags say.
    pub fn mines_remaining_for_display(&self) -> CellCount {
        if self.outcome.is_finished() {
            0
        } else {
            self.total_mines().saturating_sub(self.flagged_count.0)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> EngineCell {
        self.board[coords.to_nd_index()]
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use EngineCell::*;

        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_in_progress()?;

        match self.board[coords.to_nd_index()] {
            Hidden => {
                self.board[coords.to_nd_index()] = Flagged;
                self.flagged_count += 1;
                Ok(MarkOutcome::Flagged)
            }
            Flagged => {
                self.board[coords.to_nd_index()] = Hidden;
                self.flagged_count -= 1;
                Ok(MarkOutcome::Unflagged)
            }
            Revealed(_) | Detonated => Err(GameError::CellRevealed),
        }
    }

    /// Reveals a cell, cascading through zero-count regions. Every accepted call counts as a
    /// move, including one on an already revealed cell.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_in_progress()?;

        self.move_count += 1;

        if self.board[coords.to_nd_index()].is_flagged() {
            self.board[coords.to_nd_index()] = EngineCell::Hidden;
            self.flagged_count -= 1;
        }

        Ok(self.reveal_single_cell(coords))
    }

    fn reveal_single_cell(&mut self, coords: Coord2) -> RevealOutcome {
        let cell_state = self.board[coords.to_nd_index()];
        let has_mine = self.mine_layout[coords];

        match (cell_state, has_mine) {
            (EngineCell::Hidden, true) => {
                self.board[coords.to_nd_index()] = EngineCell::Detonated;
                self.end_game(Outcome::Lost);
                RevealOutcome::HitMine
            }
            (EngineCell::Hidden, false) => {
                self.flood_reveal(coords);

                if self.revealed_count == Saturating(self.mine_layout.safe_cell_count()) {
                    self.end_game(Outcome::Won);
                    RevealOutcome::Won
                } else {
                    RevealOutcome::Revealed
                }
            }
            _ => RevealOutcome::NoChange,
        }
    }

    /// Reveals the safe cell at `coords` and, while zero-count cells keep turning up, every
    /// hidden neighbor around them. Flagged cells stop the cascade.
    fn flood_reveal(&mut self, coords: Coord2) {
        let mut visited = BTreeSet::from([coords]);
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            if !matches!(self.board[visit_coords.to_nd_index()], EngineCell::Hidden) {
                continue;
            }

            let adjacent_mines = self.mine_layout.adjacent_mine_count(visit_coords);
            self.board[visit_coords.to_nd_index()] = EngineCell::Revealed(adjacent_mines);
            self.revealed_count += 1;

            if adjacent_mines == 0 {
                for pos in self.mine_layout.iter_neighbors(visit_coords) {
                    if matches!(self.board[pos.to_nd_index()], EngineCell::Hidden)
                        && visited.insert(pos)
                    {
                        to_visit.push_back(pos);
                    }
                }
            }
        }
    }

    fn end_game(&mut self, outcome: Outcome) {
        if self.outcome.is_finished() {
            return;
        }

        log::debug!("game ended: {:?} after {} moves", outcome, self.move_count.0);
        self.outcome = outcome;
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(size: Coord2, mines: &[Coord2]) -> MineLayout {
        MineLayout::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn reveal_hits_mine_and_detonates_only_that_cell() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 2), (1, 1)]));

        let outcome = engine.reveal((0, 2)).unwrap();

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(engine.outcome(), Outcome::Lost);
        assert_eq!(engine.cell_at((0, 2)), EngineCell::Detonated);
        assert_eq!(engine.cell_at((1, 1)), EngineCell::Hidden);
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.mines_remaining_for_display(), 0);
    }

    #[test]
    fn reveal_flood_fill_opens_zero_region() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 2)]));

        let outcome = engine.reveal((0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(engine.cell_at((0, 0)), EngineCell::Revealed(0));
        assert_eq!(engine.cell_at((0, 1)), EngineCell::Revealed(1));
        assert_eq!(engine.cell_at((2, 2)), EngineCell::Revealed(0));
        assert_eq!(engine.cell_at((0, 2)), EngineCell::Hidden);
        assert_eq!(engine.revealed_safe_count(), 8);
    }

    #[test]
    fn numbered_cell_does_not_cascade() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 2)]));

        assert_eq!(engine.reveal((1, 1)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(engine.cell_at((1, 1)), EngineCell::Revealed(1));
        assert_eq!(engine.revealed_safe_count(), 1);
        assert_eq!(engine.outcome(), Outcome::InProgress);
    }

    #[test]
    fn flood_fill_skips_flagged_cells() {
        let mut engine = PlayEngine::new(layout((1, 5), &[(0, 4)]));

        engine.toggle_flag((0, 1)).unwrap();
        assert_eq!(engine.reveal((0, 0)).unwrap(), RevealOutcome::Revealed);

        assert_eq!(engine.cell_at((0, 0)), EngineCell::Revealed(0));
        assert_eq!(engine.cell_at((0, 1)), EngineCell::Flagged);
        assert_eq!(engine.cell_at((0, 2)), EngineCell::Hidden);
    }

    #[test]
    fn reveal_clears_flag_first() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 2)]));

        engine.toggle_flag((0, 0)).unwrap();
        assert_eq!(engine.flag_count(), 1);

        assert_eq!(engine.reveal((0, 0)).unwrap(), RevealOutcome::Won);
        assert_eq!(engine.flag_count(), 0);
        assert_eq!(engine.cell_at((0, 0)), EngineCell::Revealed(0));
    }

    #[test]
    fn redundant_reveal_still_counts_as_move() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 2)]));

        engine.reveal((1, 1)).unwrap();
        let outcome = engine.reveal((1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::NoChange);
        assert_eq!(engine.move_count(), 2);
        assert_eq!(engine.revealed_safe_count(), 1);
    }

    #[test]
    fn toggle_flag_flips_and_does_not_count_moves() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 2)]));

        assert_eq!(engine.toggle_flag((1, 1)).unwrap(), MarkOutcome::Flagged);
        assert_eq!(engine.mines_remaining_for_display(), 0);
        assert_eq!(engine.toggle_flag((1, 1)).unwrap(), MarkOutcome::Unflagged);
        assert_eq!(engine.mines_remaining_for_display(), 1);
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn mines_remaining_never_goes_negative() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 2)]));

        engine.toggle_flag((0, 0)).unwrap();
        engine.toggle_flag((0, 1)).unwrap();

        assert_eq!(engine.flag_count(), 2);
        assert_eq!(engine.mines_remaining_for_display(), 0);
    }

    #[test]
    fn flagging_revealed_cell_is_rejected() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 2)]));

        engine.reveal((1, 1)).unwrap();

        assert_eq!(engine.toggle_flag((1, 1)), Err(GameError::CellRevealed));
        assert_eq!(engine.flag_count(), 0);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 2)]));

        assert_eq!(engine.reveal((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(engine.toggle_flag((0, 3)), Err(GameError::InvalidCoords));
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn finished_board_is_read_only() {
        let mut engine = PlayEngine::new(layout((2, 1), &[(0, 0)]));

        assert_eq!(engine.reveal((1, 0)).unwrap(), RevealOutcome::Won);
        assert!(engine.is_finished());

        assert_eq!(engine.reveal((0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(engine.toggle_flag((0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.outcome(), Outcome::Won);
    }

    #[test]
    fn full_cascade_on_largest_board() {
        let mut engine = PlayEngine::new(layout((20, 20), &[(19, 19)]));

        assert_eq!(engine.reveal((0, 0)).unwrap(), RevealOutcome::Won);
        assert_eq!(engine.revealed_safe_count(), 399);
    }
}
