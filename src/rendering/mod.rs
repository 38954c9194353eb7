use crate::application::{BoardLayout, CameraRig, Phase, Session};
use crate::domain::{Cell, ColumnAnimator};
use crate::input::EditInput;
use macroquad::prelude::*;

const BACKGROUND: Color = BLACK;
const GRID_LINE: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const ALIVE: Color = WHITE;
const TERRAIN: Color = Color::new(0.05, 0.05, 0.05, 1.0);
const TERRAIN_WIRE: Color = Color::new(0.55, 0.55, 0.55, 1.0);
const BUILDING: Color = WHITE;
const BUILDING_WIRE: Color = BLACK;
const GROUND: Color = Color::new(0.09, 0.09, 0.09, 1.0);

pub fn clear() {
    clear_background(BACKGROUND);
}

/// Flat top-down board used while editing.
pub fn draw_edit_board(session: &Session, layout: &BoardLayout) {
    set_default_camera();
    let size = layout.cell_px;
    let draw_lines = size >= 4.0;

    for (cell, _) in session.grid().iter_cells() {
        if cell.is_edge() {
            continue;
        }
        let (column, row) = cell.position();
        let (x, y) = layout.cell_to_screen(column, row);
        if cell.is_alive() {
            draw_rectangle(x, y, size, size, ALIVE);
        }
        if draw_lines {
            draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE);
        }
    }
}

/// Ghost of the selected pattern under the cursor.
pub fn draw_pattern_preview(session: &Session, input: &EditInput, layout: &BoardLayout) {
    let (columns, rows) = session.grid().dimensions();
    let (mx, my) = mouse_position();
    let Some((column, row)) = layout.screen_to_cell(mx, my, columns, rows) else {
        return;
    };

    let pattern = input.selected_pattern();
    let (width, height) = pattern.size();
    let left = column as isize - (width / 2) as isize;
    let top = row as isize - (height / 2) as isize;

    for &(dc, dr) in pattern.cells {
        let (c, r) = (left + dc as isize, top + dr as isize);
        if c < 0 || r < 0 || session.grid().is_edge(c as usize, r as usize) {
            continue;
        }
        let (x, y) = layout.cell_to_screen(c as usize, r as usize);
        draw_rectangle(x, y, layout.cell_px, layout.cell_px, Color::new(1.0, 1.0, 1.0, 0.35));
    }
}

/// Centre of block `level` (0 = lowest) of the column at (column, row).
fn block_center(column: usize, row: usize, level: f32, origin: Vec2, size: f32) -> Vec3 {
    vec3(
        origin.x + (column as f32 + 0.5) * size,
        origin.y + (row as f32 + 0.5) * size,
        (level + 0.5) * size,
    )
}

fn draw_column(cell: &Cell, column: &ColumnAnimator, origin: Vec2, size: f32) {
    let (c, r) = cell.position();
    let cube = vec3(size, size, size);

    if cell.is_edge() {
        let center = block_center(c, r, -0.5, origin, size);
        draw_cube(center, vec3(size, size, size * 0.05), None, GROUND);
        return;
    }

    let terrain = column.terrain_height();
    for level in 0..terrain {
        let offset = if level + 1 == terrain { column.terrain_offset() } else { 0.0 };
        let center = block_center(c, r, level as f32 + offset, origin, size);
        draw_cube(center, cube, None, TERRAIN);
        draw_cube_wires(center, cube, TERRAIN_WIRE);
    }

    let building = column.building_height();
    for level in 0..building {
        let offset = if level + 1 == building { column.building_offset() } else { 0.0 };
        let center = block_center(c, r, (terrain + level) as f32 + offset, origin, size);
        draw_cube(center, cube, None, BUILDING);
        draw_cube_wires(center, cube, BUILDING_WIRE);
    }
}

/// Terrain and building stacks seen through the orbiting camera.
pub fn draw_world(session: &Session, camera: &CameraRig) {
    let size = session.config().cell_size;
    let (columns, rows) = session.grid().dimensions();
    let origin = vec2(-(columns as f32) * size / 2.0, -(rows as f32) * size / 2.0);

    set_camera(&Camera3D {
        position: camera.eye(),
        target: Vec3::ZERO,
        up: Vec3::Z,
        ..Default::default()
    });

    session
        .grid()
        .iter_cells()
        .filter(|(cell, _)| cell.is_drawable())
        .for_each(|(cell, column)| draw_column(cell, column, origin, size));

    set_default_camera();
}

fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

pub fn draw_hud(session: &Session, input: &EditInput) {
    set_default_camera();
    let stats = session.last_stats();

    let status = match session.phase() {
        Phase::Editing => "Editing".to_string(),
        Phase::Constructing => format!(
            "Raising terrain {}/{}",
            session.level(),
            session.config().max_terrain_level
        ),
        Phase::Simulating => format!("Generation {}", session.generation()),
    };

    let mut lines = vec![
        (status, WHITE),
        (format!("Population: {}", session.grid().population()), GRAY),
        (format!("FPS: {}", get_fps()), GRAY),
    ];
    match session.phase() {
        Phase::Editing => {
            lines.push((format!("Pattern: {} (P)", input.selected_pattern().name), GRAY));
            lines.push(("LMB paint/erase  RMB stamp".to_string(), GRAY));
            lines.push(("Space start  R random  C clear".to_string(), GRAY));
        }
        _ => {
            lines.push((format!("Births {}  Deaths {}", stats.births, stats.deaths), GRAY));
            lines.push(("Esc back to editing".to_string(), GRAY));
        }
    }

    for (i, (text, color)) in lines.iter().enumerate() {
        draw_text_label(text, 12.0, 22.0 + i as f32 * 18.0, 18.0, *color);
    }
}
