mod cell;
mod column;
mod grid;
mod patterns;
mod terrain;

pub use cell::{Cell, next_state};
pub use column::{COLLAPSED, ColumnAnimator, RESTING, RISE_START};
pub use grid::{EDGE_WIDTH, GenerationStats, GridSimulation, MIN_DIMENSION};
pub use patterns::{Pattern, presets};
pub use terrain::{FlatTerrain, FractalNoise, TerrainProvider, blocks_for_sample};
