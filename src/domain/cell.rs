/// Per-position state of the board.
///
/// `alive` is the committed state read by every neighbour count.
/// `will_survive` holds the next state between `compute_next_generation`
/// and `commit_generation`; nothing outside that window should read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    column: usize,
    row: usize,
    alive: bool,
    will_survive: bool,
    edge: bool,
    sentinel: bool,
}

impl Cell {
    pub(crate) const fn new(column: usize, row: usize, edge: bool, sentinel: bool) -> Self {
        Self {
            column,
            row,
            alive: false,
            will_survive: false,
            edge,
            sentinel,
        }
    }

    pub const fn position(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Edge cells are never alive and never evaluated, but still count as neighbours.
    pub const fn is_edge(&self) -> bool {
        self.edge
    }

    /// Outermost ring: a neighbour-counting buffer that is never drawn.
    pub const fn is_sentinel(&self) -> bool {
        self.sentinel
    }

    /// Everything but the sentinel ring is rendered.
    pub const fn is_drawable(&self) -> bool {
        !self.sentinel
    }

    pub(crate) const fn will_survive(&self) -> bool {
        self.will_survive
    }

    pub(crate) fn set_will_survive(&mut self, next: bool) {
        self.will_survive = next && !self.edge;
    }

    /// Returns true when the state actually changed. Edge cells stay dead.
    pub(crate) fn set_alive(&mut self, alive: bool) -> bool {
        let alive = alive && !self.edge;
        let changed = self.alive != alive;
        self.alive = alive;
        changed
    }
}

/// Conway's B3/S23 transition for a single cell.
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2 | 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert!(!next_state(true, n), "alive with {n} neighbours should die");
        }
    }

    #[test]
    fn test_reproduction_only_at_three() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3);
        }
    }

    #[test]
    fn test_edge_cell_refuses_life() {
        let mut cell = Cell::new(0, 0, true, true);
        assert!(!cell.set_alive(true));
        assert!(!cell.is_alive());

        cell.set_will_survive(true);
        assert!(!cell.will_survive());
    }

    #[test]
    fn test_set_alive_reports_change() {
        let mut cell = Cell::new(3, 4, false, false);
        assert!(cell.set_alive(true));
        assert!(!cell.set_alive(true));
        assert!(cell.set_alive(false));
        assert_eq!(cell.position(), (3, 4));
    }
}
