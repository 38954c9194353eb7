// Domain layer - simulation core, no window or clock access
pub mod domain;

// Application layer - session lifecycle, tick pacing, camera
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

pub use application::{BoardLayout, CameraRig, Phase, Session, TickClock};
pub use config::Config;
pub use domain::{
    Cell, ColumnAnimator, GenerationStats, GridSimulation, Pattern, TerrainProvider, presets,
};
pub use error::{Error, Result};

use tracing_subscriber::{EnvFilter, fmt};

/// Install the fmt subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,skyline_life=debug"));

    fmt().with_env_filter(filter).with_target(false).init();
}
