use super::GridSimulation;

/// A small live-cell shape that edit mode can stamp onto the board.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    /// Live cells relative to the pattern's top-left corner.
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as (width, height).
    pub fn size(&self) -> (usize, usize) {
        let width = self.cells.iter().map(|&(c, _)| c).max().map_or(0, |c| c + 1);
        let height = self.cells.iter().map(|&(_, r)| r).max().map_or(0, |r| r + 1);
        (width, height)
    }

    /// Stamp the pattern centred on (column, row). Cells that would land on
    /// the edge ring or off the board are dropped; returns how many were set.
    pub fn stamp_centered(&self, grid: &mut GridSimulation, column: usize, row: usize) -> usize {
        let (width, height) = self.size();
        let left = column as isize - (width / 2) as isize;
        let top = row as isize - (height / 2) as isize;

        let mut placed = 0;
        for &(dc, dr) in self.cells {
            let (Ok(c), Ok(r)) = (
                usize::try_from(left + dc as isize),
                usize::try_from(top + dr as isize),
            ) else {
                continue;
            };
            if !grid.is_edge(c, r) && grid.set_alive(c, r, true).is_ok() {
                placed += 1;
            }
        }
        placed
    }
}

/// Classic shapes, smallest first.
pub mod presets {
    use super::Pattern;

    pub const BLOCK: Pattern = Pattern {
        name: "Block",
        description: "Still life",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    };

    pub const BLINKER: Pattern = Pattern {
        name: "Blinker",
        description: "Oscillator (period 2)",
        cells: &[(0, 0), (1, 0), (2, 0)],
    };

    pub const TOAD: Pattern = Pattern {
        name: "Toad",
        description: "Oscillator (period 2)",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    };

    pub const GLIDER: Pattern = Pattern {
        name: "Glider",
        description: "Travels diagonally (period 4)",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    };

    pub const LWSS: Pattern = Pattern {
        name: "LWSS",
        description: "Lightweight spaceship (period 4)",
        cells: &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
    };

    pub const R_PENTOMINO: Pattern = Pattern {
        name: "R-pentomino",
        description: "Methuselah",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    };

    pub const ALL: [Pattern; 6] = [BLOCK, BLINKER, TOAD, GLIDER, LWSS, R_PENTOMINO];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(presets::BLOCK.size(), (2, 2));
        assert_eq!(presets::GLIDER.size(), (3, 3));
        assert_eq!(presets::LWSS.size(), (5, 4));
    }

    #[test]
    fn test_stamp_centered_in_interior() {
        let mut grid = GridSimulation::new(12, 12, 5).unwrap();
        let placed = presets::GLIDER.stamp_centered(&mut grid, 6, 6);
        assert_eq!(placed, 5);
        assert_eq!(grid.population(), 5);
        // Top cell of the glider sits one above centre.
        assert!(grid.cell(6, 5).unwrap().is_alive());
    }

    #[test]
    fn test_stamp_drops_edge_cells() {
        let mut grid = GridSimulation::new(8, 8, 5).unwrap();
        let placed = presets::BLINKER.stamp_centered(&mut grid, 2, 3);
        // Blinker spans columns 1..=3; column 1 is edge.
        assert_eq!(placed, 2);
        assert!(!grid.cell(1, 3).unwrap().is_alive());

        assert_eq!(presets::BLOCK.stamp_centered(&mut grid, 0, 0), 0);
    }
}
