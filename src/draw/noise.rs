//! Gradient-noise fill.
//!
//! Classic permutation-table Perlin noise. The table is shuffled from a
//! seedable RNG so fills are reproducible; the default seed matches the
//! historical generator this replaces.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::buffer::{ImageBuffer, Pixel};

/// Spatial divisor applied to pixel coordinates before sampling.
const FREQUENCY: f64 = 50.0;

const DEFAULT_SEED: u64 = 42;

/// Coherent 2-D gradient noise over a shuffled permutation table.
#[derive(Clone)]
pub struct Perlin {
    perm: [u8; 512],
}

impl Perlin {
    /// Build the permutation table from a seed.
    pub fn new(seed: u64) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut rng = StdRng::seed_from_u64(seed);
        table.shuffle(&mut rng);
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { perm }
    }

    /// Noise value at `(x, y)`, roughly in `[-1, 1]`, continuous in both
    /// coordinates and zero-mean over large regions.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let xi = (x.floor() as i64 & 255) as usize;
        let yi = (y.floor() as i64 & 255) as usize;
        let xf = x - x.floor();
        let yf = y - y.floor();
        let u = fade(xf);
        let v = fade(yf);

        let p = &self.perm;
        let aa = p[p[xi] as usize + yi];
        let ab = p[p[xi] as usize + yi + 1];
        let ba = p[p[xi + 1] as usize + yi];
        let bb = p[p[xi + 1] as usize + yi + 1];

        let bottom = lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u);
        let top = lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u);
        lerp(bottom, top, v)
    }
}

impl Default for Perlin {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

fn grad(hash: u8, x: f64, y: f64) -> f64 {
    match hash & 3 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        _ => -x - y,
    }
}

impl<T: Pixel> ImageBuffer<T> {
    /// Fill the whole buffer with gradient noise: each pixel samples the
    /// noise field at `(x, y) / 50`, clamps the value to `[0, 1]`, and
    /// interpolates between `from` and `to`.
    pub fn fill_noise(&mut self, noise: &Perlin, from: T, to: T) {
        let (w, h) = self.size();
        for y in 0..h {
            for x in 0..w {
                let t = noise
                    .noise2(f64::from(x) / FREQUENCY, f64::from(y) / FREQUENCY)
                    .clamp(0.0, 1.0);
                self.set(x as i32, y as i32, T::lerp(from, to, t));
            }
        }
    }
}
