//! Per-cell column animation.
//!
//! A column is a stack of terrain blocks with a stack of building blocks on
//! top. Heights are discrete and authoritative; the offsets only move the
//! topmost block of each stack while it eases into place.
//!
//! Offsets are measured in block units relative to the resting position of
//! the top block: `0.0` is fully in place, `-1.0` is one block lower.

/// Offset of a top block that has just appeared and rises from below.
pub const RISE_START: f32 = -1.0;
/// Offset of a top block at rest.
pub const RESTING: f32 = 0.0;
/// Offset of a top block that has finished collapsing.
pub const COLLAPSED: f32 = -1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnAnimator {
    terrain_height: u32,
    building_height: u32,
    max_building_height: u32,
    terrain_offset: f32,
    building_offset: f32,
    falling: bool,
}

impl ColumnAnimator {
    /// A flat column at rest; buildings never exceed `max_building_height`.
    pub const fn new(max_building_height: u32) -> Self {
        Self {
            terrain_height: 0,
            building_height: 0,
            max_building_height,
            terrain_offset: RESTING,
            building_offset: RESTING,
            falling: false,
        }
    }

    /// Whole terrain blocks in the stack.
    pub const fn terrain_height(&self) -> u32 {
        self.terrain_height
    }

    /// Whole building blocks on top of the terrain.
    pub const fn building_height(&self) -> u32 {
        self.building_height
    }

    /// Eased position of the top terrain block, in blocks.
    pub const fn terrain_offset(&self) -> f32 {
        self.terrain_offset
    }

    pub const fn building_offset(&self) -> f32 {
        self.building_offset
    }

    /// True while a dead column is still shedding blocks.
    pub const fn is_falling(&self) -> bool {
        self.falling
    }

    /// Where the building top is heading on this frame.
    pub const fn building_target(&self) -> f32 {
        if self.falling { COLLAPSED } else { RESTING }
    }

    /// Rise: add one block (up to the cap) and cancel any collapse in progress.
    pub fn on_became_alive(&mut self) {
        if self.building_height < self.max_building_height {
            self.building_height += 1;
            self.building_offset = RISE_START;
        }
        self.falling = false;
    }

    /// Fall: the first dead tick only starts the top block falling; every
    /// following dead tick removes it and starts the next one.
    pub fn on_became_dead(&mut self) {
        if self.building_height == 0 {
            return;
        }

        if self.falling {
            self.building_height -= 1;
            if self.building_height == 0 {
                self.falling = false;
                self.building_offset = RESTING;
                return;
            }
        }

        self.falling = true;
        self.building_offset = RESTING;
    }

    /// Clamps `new_height` to `[1, level_ceiling]`. A changed height restarts
    /// the terrain top animation.
    pub fn set_terrain_height(&mut self, new_height: u32, level_ceiling: u32) {
        let clamped = new_height.clamp(1, level_ceiling.max(1));
        if clamped != self.terrain_height {
            self.terrain_height = clamped;
            self.terrain_offset = RISE_START;
        }
    }

    /// Moves both offsets a fixed fraction of the remaining distance.
    ///
    /// The fraction does not depend on frame duration, so the easing runs
    /// faster at higher frame rates. Discrete heights are never touched.
    pub fn advance_animation(&mut self, easing_factor: f32) {
        let easing = easing_factor.clamp(0.0, 1.0);
        self.terrain_offset += (RESTING - self.terrain_offset) * easing;
        self.building_offset += (self.building_target() - self.building_offset) * easing;
    }

    /// Drops every building block; terrain is kept.
    pub fn reset_buildings(&mut self) {
        self.building_height = 0;
        self.building_offset = RESTING;
        self.falling = false;
    }
}
