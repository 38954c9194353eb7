use super::{Cell, ColumnAnimator, TerrainProvider, cell::next_state, terrain::blocks_for_sample};
use crate::error::{Error, Result};
use rand::Rng;
use tracing::{debug, warn};

/// Width of the dead ring around the board.
///
/// Ring 0 is a sentinel that only pads neighbour counts and is never drawn.
/// Ring 1 is drawn as bare ground but never comes alive, so the outermost
/// living cells always have a drawn neighbour.
pub const EDGE_WIDTH: usize = 2;

/// Smallest dimension that still leaves one interior cell.
pub const MIN_DIMENSION: usize = 2 * EDGE_WIDTH + 1;

#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Summary of one committed generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
}

/// GridSimulation owns every cell and its column, and advances them one
/// generation per tick through a compute-then-commit pass.
#[derive(Clone, Debug)]
pub struct GridSimulation {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    animators: Vec<ColumnAnimator>,
    generation_pending: bool,
}

impl GridSimulation {
    /// Allocate a dead board. Fails when no interior cell would remain.
    pub fn new(columns: usize, rows: usize, max_building_height: u32) -> Result<Self> {
        if columns < MIN_DIMENSION || rows < MIN_DIMENSION {
            return Err(Error::GridTooSmall {
                columns,
                rows,
                minimum: MIN_DIMENSION,
            });
        }

        let cells = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (column, row)))
            .map(|(column, row)| {
                let ring = ring_distance(column, row, columns, rows);
                Cell::new(column, row, ring < EDGE_WIDTH, ring == 0)
            })
            .collect();

        Ok(Self {
            columns,
            rows,
            cells,
            animators: vec![ColumnAnimator::new(max_building_height); columns * rows],
            generation_pending: false,
        })
    }

    /// (columns, rows), edge ring included.
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    const fn index(&self, column: usize, row: usize) -> usize {
        row * self.columns + column
    }

    fn in_bounds(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows
    }

    /// Cell at (column, row), or `None` off the board.
    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        self.in_bounds(column, row)
            .then(|| &self.cells[self.index(column, row)])
    }

    /// Column animator at (column, row), or `None` off the board.
    pub fn animator(&self, column: usize, row: usize) -> Option<&ColumnAnimator> {
        self.in_bounds(column, row)
            .then(|| &self.animators[self.index(column, row)])
    }

    /// Out-of-range positions count as edge.
    pub fn is_edge(&self, column: usize, row: usize) -> bool {
        self.cell(column, row).is_none_or(Cell::is_edge)
    }

    /// Cells paired with their columns, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (&Cell, &ColumnAnimator)> + '_ {
        self.cells.iter().zip(self.animators.iter())
    }

    /// Live cells on the board.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Set one cell alive or dead. Returns whether it changed; edge cells
    /// never change.
    pub fn set_alive(&mut self, column: usize, row: usize, alive: bool) -> Result<bool> {
        if !self.in_bounds(column, row) {
            return Err(Error::OutOfBounds {
                column: column as i64,
                row: row as i64,
            });
        }
        let idx = self.index(column, row);
        Ok(self.cells[idx].set_alive(alive))
    }

    /// Fair coin per interior cell; edges stay dead.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .filter(|cell| !cell.is_edge())
            .for_each(|cell| {
                cell.set_alive(rng.random_bool(0.5));
            });
        self.generation_pending = false;
    }

    /// Kill every cell. Terrain and building stacks are untouched.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| {
            cell.set_alive(false);
        });
        self.generation_pending = false;
    }

    /// Always in bounds: callers only pass non-edge positions and the edge
    /// ring is at least one cell wide.
    fn live_neighbors(&self, column: usize, row: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dc, dr)| {
                let c = column.wrapping_add_signed(dc);
                let r = row.wrapping_add_signed(dr);
                &self.cells[self.index(c, r)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Evaluate the rule for every interior cell against the committed
    /// state, writing only `will_survive`.
    pub fn compute_next_generation(&mut self) {
        for idx in 0..self.cells.len() {
            if self.cells[idx].is_edge() {
                self.cells[idx].set_will_survive(false);
                continue;
            }
            let (column, row) = self.cells[idx].position();
            let neighbors = self.live_neighbors(column, row);
            let cell = &mut self.cells[idx];
            let next = next_state(cell.is_alive(), neighbors);
            cell.set_will_survive(next);
        }
        self.generation_pending = true;
    }

    /// Hand each cell's next state to its column, then make it current.
    ///
    /// Without a preceding `compute_next_generation` this does nothing.
    pub fn commit_generation(&mut self) -> GenerationStats {
        if !self.generation_pending {
            warn!("commit_generation called without a computed generation");
            return GenerationStats {
                population: self.population(),
                ..GenerationStats::default()
            };
        }

        let mut stats = GenerationStats::default();
        for (cell, animator) in self.cells.iter_mut().zip(self.animators.iter_mut()) {
            let next = cell.will_survive();
            if next {
                animator.on_became_alive();
                stats.population += 1;
            } else {
                animator.on_became_dead();
            }
            match (cell.is_alive(), next) {
                (false, true) => stats.births += 1,
                (true, false) => stats.deaths += 1,
                _ => {}
            }
            cell.set_alive(next);
        }
        self.generation_pending = false;

        debug!(
            population = stats.population,
            births = stats.births,
            deaths = stats.deaths,
            "generation committed"
        );
        stats
    }

    /// compute + commit in one call.
    pub fn step(&mut self) -> GenerationStats {
        self.compute_next_generation();
        self.commit_generation()
    }

    /// Raise terrain for every interior cell up to `level`.
    pub fn construct_level(
        &mut self,
        terrain: &dyn TerrainProvider,
        level: u32,
        max_terrain_level: u32,
    ) {
        for (cell, animator) in self.cells.iter().zip(self.animators.iter_mut()) {
            if cell.is_edge() {
                continue;
            }
            let (column, row) = cell.position();
            let blocks = blocks_for_sample(terrain.height_at(column, row), max_terrain_level);
            animator.set_terrain_height(blocks, level);
        }
    }

    /// Per-frame easing for every column.
    /// Ease every column one frame.
    pub fn advance_animation(&mut self, easing_factor: f32) {
        self.animators
            .iter_mut()
            .for_each(|animator| animator.advance_animation(easing_factor));
    }

    /// Drop every building to zero blocks at rest, leaving terrain alone.
    pub fn reset_buildings(&mut self) {
        self.animators
            .iter_mut()
            .for_each(ColumnAnimator::reset_buildings);
    }
}

/// Distance from (column, row) to the nearest board side.
const fn ring_distance(column: usize, row: usize, columns: usize, rows: usize) -> usize {
    let dx = min(column, columns - 1 - column);
    let dy = min(row, rows - 1 - row);
    min(dx, dy)
}

const fn min(a: usize, b: usize) -> usize {
    if a < b { a } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FlatTerrain, FractalNoise};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(columns: usize, rows: usize) -> GridSimulation {
        GridSimulation::new(columns, rows, 15).unwrap()
    }

    fn alive(grid: &GridSimulation, column: usize, row: usize) -> bool {
        grid.cell(column, row).unwrap().is_alive()
    }

    #[test]
    fn test_rejects_grid_without_interior() {
        assert_eq!(
            GridSimulation::new(4, 10, 15).unwrap_err(),
            Error::GridTooSmall { columns: 4, rows: 10, minimum: MIN_DIMENSION }
        );
        assert!(GridSimulation::new(10, 0, 15).is_err());
        assert!(GridSimulation::new(MIN_DIMENSION, MIN_DIMENSION, 15).is_ok());
    }

    #[test]
    fn test_border_classification() {
        let g = grid(7, 6);
        assert!(g.cell(0, 3).unwrap().is_sentinel());
        assert!(g.cell(1, 3).unwrap().is_edge());
        assert!(!g.cell(1, 3).unwrap().is_sentinel());
        assert!(g.cell(1, 3).unwrap().is_drawable());
        assert!(!g.cell(2, 2).unwrap().is_edge());
        assert!(g.cell(5, 2).unwrap().is_edge());
        assert!(g.cell(3, 4).unwrap().is_edge());
        assert!(g.is_edge(100, 100));
    }

    #[test]
    fn test_layout_is_row_major() {
        let g = grid(8, 6);
        for (i, (cell, _)) in g.iter_cells().enumerate() {
            assert_eq!(cell.position(), (i % 8, i / 8));
        }
        assert_eq!(g.iter_cells().count(), 48);
    }

    #[test]
    fn test_randomize_leaves_edges_dead() {
        let mut g = grid(12, 12);
        g.randomize(&mut StdRng::seed_from_u64(42));
        assert!(g.population() > 0);
        for (cell, _) in g.iter_cells() {
            if cell.is_edge() {
                assert!(!cell.is_alive());
            }
        }
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut g = grid(10, 10);
        g.randomize(&mut StdRng::seed_from_u64(1));
        g.clear();
        assert!(g.iter_cells().all(|(cell, _)| !cell.is_alive()));
    }

    #[test]
    fn test_set_alive_on_edge_is_ignored() {
        let mut g = grid(8, 8);
        assert_eq!(g.set_alive(1, 4, true), Ok(false));
        assert_eq!(g.set_alive(3, 3, true), Ok(true));
        assert!(g.set_alive(8, 0, true).is_err());
    }

    /// Arrange `neighbors` live cells around the centre of a 9x9 board.
    fn board_with_neighbors(center_alive: bool, neighbors: usize) -> GridSimulation {
        let mut g = grid(9, 9);
        let (cx, cy) = (4usize, 4usize);
        g.set_alive(cx, cy, center_alive).unwrap();
        for &(dc, dr) in NEIGHBOR_OFFSETS.iter().take(neighbors) {
            g.set_alive(cx.wrapping_add_signed(dc), cy.wrapping_add_signed(dr), true)
                .unwrap();
        }
        g
    }

    #[test]
    fn test_rule_table_for_every_neighbor_count() {
        for neighbors in 0..=8 {
            for center in [false, true] {
                let mut g = board_with_neighbors(center, neighbors);
                g.step();
                let expected = matches!((center, neighbors), (true, 2 | 3) | (false, 3));
                assert_eq!(
                    alive(&g, 4, 4),
                    expected,
                    "alive={center} neighbors={neighbors}"
                );
            }
        }
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut g = grid(8, 8);
        g.set_alive(3, 3, true).unwrap();
        let stats = g.step();
        assert!(!alive(&g, 3, 3));
        assert_eq!(stats, GenerationStats { population: 0, births: 0, deaths: 1 });
    }

    #[test]
    fn test_block_is_still_life() {
        let mut g = grid(8, 8);
        for (c, r) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
            g.set_alive(c, r, true).unwrap();
        }
        for _ in 0..10 {
            let stats = g.step();
            assert_eq!(stats.population, 4);
            assert_eq!(stats.births + stats.deaths, 0);
        }
        for (c, r) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
            assert!(alive(&g, c, r));
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut g = grid(9, 9);
        for c in 3..=5 {
            g.set_alive(c, 4, true).unwrap();
        }
        g.step();
        assert!(alive(&g, 4, 3) && alive(&g, 4, 4) && alive(&g, 4, 5));
        assert!(!alive(&g, 3, 4) && !alive(&g, 5, 4));
        g.step();
        assert!(alive(&g, 3, 4) && alive(&g, 4, 4) && alive(&g, 5, 4));
    }

    #[test]
    fn test_edges_never_come_alive() {
        let mut g = grid(10, 10);
        // Three live cells next to the edge ring would give edge cells a birth count.
        for r in 3..=5 {
            g.set_alive(2, r, true).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(9);
        for generation in 0..50 {
            g.step();
            for (cell, _) in g.iter_cells() {
                if cell.is_edge() {
                    assert!(!cell.is_alive(), "edge alive at generation {generation}");
                }
            }
            if generation % 10 == 0 {
                g.randomize(&mut rng);
            }
        }
    }

    #[test]
    fn test_commit_without_compute_is_noop() {
        let mut g = grid(8, 8);
        g.set_alive(3, 3, true).unwrap();
        let stats = g.commit_generation();
        assert_eq!(stats.population, 1);
        assert!(alive(&g, 3, 3));
        assert_eq!(g.animator(3, 3).unwrap().building_height(), 0);
    }

    #[test]
    fn test_commit_drives_columns() {
        let mut g = grid(8, 8);
        for (c, r) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
            g.set_alive(c, r, true).unwrap();
        }
        g.step();
        g.step();
        assert_eq!(g.animator(3, 3).unwrap().building_height(), 2);

        g.clear();
        g.step();
        assert_eq!(g.animator(3, 3).unwrap().building_height(), 2);
        assert!(g.animator(3, 3).unwrap().is_falling());
        g.step();
        assert_eq!(g.animator(3, 3).unwrap().building_height(), 1);
    }

    #[test]
    fn test_construct_level_skips_edges() {
        let mut g = grid(8, 8);
        let ramp = |column: usize, _row: usize| column as f32 / 8.0;
        g.construct_level(&ramp, 2, 5);
        assert_eq!(g.animator(0, 0).unwrap().terrain_height(), 0);
        assert_eq!(g.animator(1, 3).unwrap().terrain_height(), 0);
        assert_eq!(g.animator(2, 3).unwrap().terrain_height(), 2);

        g.construct_level(&FlatTerrain, 5, 5);
        assert_eq!(g.animator(5, 5).unwrap().terrain_height(), 1);
    }

    #[test]
    fn test_terrain_rises_monotonically_within_level() {
        let max_level = 5;
        let mut g = grid(24, 24);
        let noise = FractalNoise::new(&mut StdRng::seed_from_u64(17), 0.1, 10, 0.5);
        let mut previous: Vec<u32> = g.iter_cells().map(|(_, a)| a.terrain_height()).collect();

        for level in 1..=max_level {
            g.construct_level(&noise, level, max_level);
            for (i, (cell, column)) in g.iter_cells().enumerate() {
                if cell.is_edge() {
                    continue;
                }
                let height = column.terrain_height();
                assert!(
                    (1..=level).contains(&height),
                    "height {height} outside [1, {level}] at {:?}",
                    cell.position()
                );
                assert!(height >= previous[i], "terrain sank at {:?}", cell.position());
                previous[i] = height;
            }
        }

        // The noise must actually produce varied terrain for this to mean much.
        let tallest = previous.iter().max().copied().unwrap_or(0);
        assert!(tallest > 1);
    }
}
