/// What happens to a single cell between two generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fate {
    /// Alive with 2 or 3 neighbours.
    Survival,
    /// Alive with fewer than 2.
    Underpopulation,
    /// Alive with more than 3.
    Overpopulation,
    /// Dead with exactly 3.
    Birth,
    /// Dead otherwise.
    Stasis,
}

impl Fate {
    pub fn of(alive: bool, neighbours: u8) -> Self {
        match (alive, neighbours) {
            (true, 2 | 3) => Fate::Survival,
            (true, 0 | 1) => Fate::Underpopulation,
            (true, _) => Fate::Overpopulation,
            (false, 3) => Fate::Birth,
            (false, _) => Fate::Stasis,
        }
    }

    /// Liveness in the next generation.
    pub fn is_alive(self) -> bool {
        matches!(self, Fate::Survival | Fate::Birth)
    }
}

/// B3/S23.
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    matches!((neighbours, alive), (2 | 3, true) | (3, false))
}
