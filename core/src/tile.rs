/// Canonical player-visible state stored by the gameplay engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EngineCell {
    #[default]
    Hidden,
    Flagged,
    /// A revealed safe cell with its adjacent mine count.
    Revealed(u8),
    /// A revealed mine, which ends the game.
    Detonated,
}

impl EngineCell {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        !self.is_unrevealed()
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}
