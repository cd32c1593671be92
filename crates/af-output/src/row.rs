//! Plain data row types written by output backends.

/// One ant entering one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRow<'g> {
    pub round: u64,
    pub ant:   u32,
    pub room:  &'g str,
}

/// Per-round totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRow {
    pub round:         u64,
    pub moves:         u32,
    /// Ants in the end room after this round.
    pub arrived_total: u32,
}
