//! Terrain height sampling.
//!
//! The grid never generates noise itself; it asks a [`TerrainProvider`]
//! for a value in `[0, 1)` per interior cell and turns that into a block count.

use rand::Rng;
use rand::seq::SliceRandom;

/// Pure height sampler: same inputs, same output.
pub trait TerrainProvider {
    /// Noise value in `[0, 1)` for the given cell.
    fn height_at(&self, column: usize, row: usize) -> f32;
}

impl<F> TerrainProvider for F
where
    F: Fn(usize, usize) -> f32,
{
    fn height_at(&self, column: usize, row: usize) -> f32 {
        self(column, row)
    }
}

/// Every cell sits on a single terrain block.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatTerrain;

impl TerrainProvider for FlatTerrain {
    fn height_at(&self, _column: usize, _row: usize) -> f32 {
        0.0
    }
}

/// Map a noise sample to a block count in `[1, max_level]`.
pub fn blocks_for_sample(sample: f32, max_level: u32) -> u32 {
    let sample = sample.clamp(0.0, 1.0 - f32::EPSILON);
    1 + (sample * max_level as f32) as u32
}

/// Multi-octave value noise over a shuffled lattice.
#[derive(Clone)]
pub struct FractalNoise {
    permutation: [u8; 256],
    scale: f32,
    octaves: u32,
    falloff: f32,
}

impl FractalNoise {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, scale: f32, octaves: u32, falloff: f32) -> Self {
        let mut permutation = [0u8; 256];
        permutation
            .iter_mut()
            .enumerate()
            .for_each(|(i, p)| *p = i as u8);
        permutation.shuffle(rng);

        Self {
            permutation,
            scale,
            octaves: octaves.max(1),
            falloff,
        }
    }

    #[inline]
    fn lattice(&self, x: i64, y: i64) -> f32 {
        let xi = (x & 255) as usize;
        let yi = (y & 255) as usize;
        let h = self.permutation[(self.permutation[xi] as usize + yi) & 255];
        h as f32 / 256.0
    }

    /// Smoothly interpolated lattice value, in `[0, 1)`.
    fn sample(&self, x: f32, y: f32) -> f32 {
        let x0 = x.floor();
        let y0 = y.floor();
        let (tx, ty) = (smoothstep(x - x0), smoothstep(y - y0));
        let (xi, yi) = (x0 as i64, y0 as i64);

        let top = lerp(self.lattice(xi, yi), self.lattice(xi + 1, yi), tx);
        let bottom = lerp(self.lattice(xi, yi + 1), self.lattice(xi + 1, yi + 1), tx);
        lerp(top, bottom, ty)
    }
}

impl TerrainProvider for FractalNoise {
    fn height_at(&self, column: usize, row: usize) -> f32 {
        let mut total = 0.0;
        let mut norm = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;

        for _ in 0..self.octaves {
            let x = column as f32 * self.scale * frequency;
            let y = row as f32 * self.scale * frequency;
            total += self.sample(x, y) * amplitude;
            norm += amplitude;
            amplitude *= self.falloff;
            frequency *= 2.0;
        }

        if norm > 0.0 { total / norm } else { 0.0 }
    }
}

#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
