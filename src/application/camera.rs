use macroquad::math::{Vec3, vec3};

/// CameraRig drives the 3D view once the session is running: it tilts back
/// from straight overhead during an opening time window and then keeps
/// orbiting around the board's vertical axis.
#[derive(Clone, Debug)]
pub struct CameraRig {
    home: Vec3,
    eye: Vec3,
    tilt_target: Vec3,
    tilt_window: (f32, f32),
    tilt_speed: f32,
    orbit_speed: f32,
    orbit_angle: f32,
}

impl CameraRig {
    /// `extent` is the board's side length in world units.
    pub fn new(extent: f32) -> Self {
        let home = vec3(0.0, 0.0, extent * 1.5);
        Self {
            home,
            eye: home,
            tilt_target: vec3(0.0, extent, extent),
            tilt_window: (0.0, 3.0),
            tilt_speed: 0.03,
            orbit_speed: 0.005,
            orbit_angle: 0.0,
        }
    }

    /// Advance one frame; `seconds` is the session's running time.
    pub fn update(&mut self, seconds: f32) {
        let (from, to) = self.tilt_window;
        if seconds > from && seconds < to {
            self.eye = self.eye.lerp(self.tilt_target, self.tilt_speed);
        }
        self.orbit_angle += self.orbit_speed;
    }

    /// Eye position with the orbit applied, looking at the origin.
    pub fn eye(&self) -> Vec3 {
        let (sin, cos) = self.orbit_angle.sin_cos();
        vec3(
            self.eye.x * cos - self.eye.y * sin,
            self.eye.x * sin + self.eye.y * cos,
            self.eye.z,
        )
    }

    pub const fn orbit_angle(&self) -> f32 {
        self.orbit_angle
    }

    /// Back to straight overhead with no orbit.
    pub fn reset(&mut self) {
        self.eye = self.home;
        self.orbit_angle = 0.0;
    }
}

/// Screen placement of the flat edit-mode board: centred, square cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_px: f32,
}

impl BoardLayout {
    /// Largest whole-pixel cells that fit the screen.
    pub fn fit(screen_width: f32, screen_height: f32, columns: usize, rows: usize) -> Self {
        let cell_px = (screen_width / columns as f32)
            .min(screen_height / rows as f32)
            .floor()
            .max(1.0);
        Self {
            origin_x: (screen_width - cell_px * columns as f32) / 2.0,
            origin_y: (screen_height - cell_px * rows as f32) / 2.0,
            cell_px,
        }
    }

    /// Cell under a screen point, if it lies on the board.
    pub fn screen_to_cell(
        &self,
        x: f32,
        y: f32,
        columns: usize,
        rows: usize,
    ) -> Option<(usize, usize)> {
        let column = ((x - self.origin_x) / self.cell_px).floor();
        let row = ((y - self.origin_y) / self.cell_px).floor();
        (column >= 0.0 && row >= 0.0 && (column as usize) < columns && (row as usize) < rows)
            .then(|| (column as usize, row as usize))
    }

    pub fn cell_to_screen(&self, column: usize, row: usize) -> (f32, f32) {
        (
            self.origin_x + column as f32 * self.cell_px,
            self.origin_y + row as f32 * self.cell_px,
        )
    }
}
