use clap::Parser;
use macroquad::prelude::*;
use skyline_life::{
    BoardLayout, CameraRig, Config, Session,
    input::{self, EditInput},
    rendering,
};
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "skyline-life", about = "Game of Life grown into a 3D skyline")]
struct Args {
    #[arg(long, default_value_t = 48)]
    columns: usize,

    #[arg(long, default_value_t = 48)]
    rows: usize,

    /// Seconds per generation
    #[arg(long, default_value_t = 0.1)]
    tick_seconds: f32,

    /// Fraction of the remaining distance animated blocks move each frame
    #[arg(long, default_value_t = 0.2)]
    easing: f32,

    #[arg(long, default_value_t = 15)]
    max_building_height: u32,

    #[arg(long, default_value_t = 5)]
    max_terrain_level: u32,

    /// Seed for the board and terrain
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            columns: self.columns,
            rows: self.rows,
            tick_seconds: self.tick_seconds,
            easing: self.easing,
            max_building_height: self.max_building_height,
            max_terrain_level: self.max_terrain_level,
            seed: self.seed,
            ..Config::default()
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Skyline Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        sample_count: 4,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    skyline_life::init_logging();
    let config = Args::parse().into_config();

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "cannot start session");
            std::process::exit(1);
        }
    };

    let (columns, rows) = session.grid().dimensions();
    let extent = columns.max(rows) as f32 * session.config().cell_size;
    let mut camera = CameraRig::new(extent);
    let mut edit = EditInput::default();
    info!("Space to start, Esc to return to editing");

    loop {
        let layout = BoardLayout::fit(screen_width(), screen_height(), columns, rows);

        input::process_keyboard_input(&mut session, &mut edit, &mut camera);
        input::handle_mouse_paint(&mut session, &mut edit, &layout);

        session.update(Duration::from_secs_f32(get_frame_time()));
        if !session.is_editing() {
            camera.update(session.running_time().as_secs_f32());
        }

        rendering::clear();
        if session.is_editing() {
            rendering::draw_edit_board(&session, &layout);
            rendering::draw_pattern_preview(&session, &edit, &layout);
        } else {
            rendering::draw_world(&session, &camera);
        }
        rendering::draw_hud(&session, &edit);

        next_frame().await;
    }
}
