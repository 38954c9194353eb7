mod stroke;

pub use stroke::{BrushStroke, StrokeMode};

use crate::application::{BoardLayout, CameraRig, Session};
use crate::domain::{Pattern, presets};
use macroquad::prelude::*;
use tracing::warn;

/// Edit-mode input state carried between frames.
#[derive(Debug, Default)]
pub struct EditInput {
    pub stroke: BrushStroke,
    pub pattern_index: usize,
}

impl EditInput {
    /// Preset stamped by a right click.
    pub fn selected_pattern(&self) -> Pattern {
        presets::ALL[self.pattern_index % presets::ALL.len()]
    }
}

/// Mouse painting on the flat edit board. Does nothing once running.
pub fn handle_mouse_paint(session: &mut Session, input: &mut EditInput, layout: &BoardLayout) {
    if !session.is_editing() {
        input.stroke.release();
        return;
    }

    let (mx, my) = mouse_position();
    let (columns, rows) = session.grid().dimensions();
    let hovered = layout
        .screen_to_cell(mx, my, columns, rows)
        .filter(|&(c, r)| !session.grid().is_edge(c, r));

    let result = match hovered {
        Some((c, r)) if is_mouse_button_pressed(MouseButton::Left) => {
            input.stroke.press(session, c, r)
        }
        Some((c, r)) if is_mouse_button_down(MouseButton::Left) => {
            input.stroke.drag(session, c, r)
        }
        _ => Ok(()),
    };
    if let Err(err) = result {
        warn!(%err, "paint failed");
    }

    if is_mouse_button_released(MouseButton::Left) {
        input.stroke.release();
    }

    if let Some((c, r)) = hovered
        && is_mouse_button_pressed(MouseButton::Right)
        && let Err(err) = session.stamp(&input.selected_pattern(), c, r)
    {
        warn!(%err, "stamp failed");
    }
}

/// Keyboard controls. Editing keys only act while the clock is stopped.
pub fn process_keyboard_input(
    session: &mut Session,
    input: &mut EditInput,
    camera: &mut CameraRig,
) {
    if is_key_pressed(KeyCode::Escape) {
        session.reset();
        input.stroke.release();
        camera.reset();
        return;
    }

    if !session.is_editing() {
        return;
    }

    type KeyAction = (KeyCode, fn(&mut Session) -> crate::Result<()>);
    let actions: [KeyAction; 3] = [
        (KeyCode::Space, |s| {
            s.start();
            Ok(())
        }),
        (KeyCode::R, Session::randomize),
        (KeyCode::C, Session::clear),
    ];

    for (key, action) in actions {
        if is_key_pressed(key)
            && let Err(err) = action(session)
        {
            warn!(%err, ?key, "key action failed");
        }
    }

    if is_key_pressed(KeyCode::P) {
        input.pattern_index = (input.pattern_index + 1) % presets::ALL.len();
    }
}
