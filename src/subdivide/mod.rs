//! Recursive 4-way midpoint subdivision of colored triangles.
//!
//! Each call appends the three edge midpoints of a triangle to the shared site list, with colors
//! blended from the edge endpoints, and recurses into the four sub-triangles. Feeding the grown
//! site list back into a Voronoi diagram turns every sub-triangle corner into a mosaic tile.

use {
  rand::{Rng, RngCore},
  crate::{
    color,
    geometry::{self, P2, Triangle},
    noise::Simplex2,
    sampler::Site
  }
};

#[cfg(test)] mod tests;

/// Decides how far along an edge the midpoint color lies, 0 being the color of `from`.
pub trait ColorBlend {
  fn ratio(&self, rng: &mut dyn RngCore, from: P2, to: P2, midpoint: P2) -> f64;
}

/// Independent uniform ratio per midpoint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RandomBlend {
  pub low: f64,
  pub high: f64
}

impl Default for RandomBlend {
  fn default() -> Self {
    Self { low: 0.25, high: 0.75 }
  }
}

impl ColorBlend for RandomBlend {
  fn ratio(&self, rng: &mut dyn RngCore, _: P2, _: P2, _: P2) -> f64 {
    self.low + rng.gen::<f64>() * (self.high - self.low)
  }
}

/// Ratio sampled from simplex noise at the midpoint, so neighbouring midpoints get similar
/// blends and the mosaic forms coherent color fields.
#[derive(Debug, Clone)]
pub struct NoiseBlend {
  pub noise: Simplex2,
  pub frequency: f64,
  pub low: f64,
  pub high: f64
}

impl NoiseBlend {
  pub fn new<R: Rng + ?Sized>(rng: &mut R, frequency: f64, low: f64, high: f64) -> Self {
    Self { noise: Simplex2::new(rng), frequency, low, high }
  }
}

impl ColorBlend for NoiseBlend {
  fn ratio(&self, _: &mut dyn RngCore, from: P2, to: P2, midpoint: P2) -> f64 {
    let v = self.noise.get(midpoint.x * self.frequency, midpoint.y * self.frequency);
    let v = self.low + (v + 1.0) / 2.0 * (self.high - self.low);
    // an edge shared by two triangles is walked in both directions, it must get one color
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    if dy < 0.0 || (dy == 0.0 && dx < 0.0) { 1.0 - v } else { v }
  }
}

/// How many times a top-level triangle gets split.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SplitDepth {
  /// `base + floor(sqrt(r) · spread)` for a uniform `r`.
  Fixed { base: u32, spread: f64 },
  /// Split until the sub-triangles approach `min_cell` in height; jittered, at most `max_level`.
  Altitude { min_cell: f64, max_level: u32 }
}

impl SplitDepth {
  pub fn level<R: Rng + ?Sized>(&self, triangle: &Triangle, rng: &mut R) -> u32 {
    let jitter = rng.gen::<f64>().sqrt();
    match *self {
      SplitDepth::Fixed { base, spread } => base + (jitter * spread).floor() as u32,
      SplitDepth::Altitude { min_cell, max_level } => {
        let altitude = geometry::min_altitude(triangle);
        if min_cell <= 0.0 || altitude <= min_cell {
          return 0;
        }
        let level = (altitude / min_cell).log2() * (0.5 + 0.5 * jitter);
        level.floor().clamp(0.0, max_level as f64) as u32
      }
    }
  }
}

fn split_edge(from: Site, to: Site, blend: &dyn ColorBlend, rng: &mut dyn RngCore) -> Site {
  let midpoint = geometry::midpoint(from.point, to.point);
  let ratio = blend.ratio(rng, from.point, to.point, midpoint);
  Site::new(midpoint, color::mix(from.color, to.color, ratio))
}

/// Append the midpoints of `triangle` to `sites` and recurse `level - 1` times into the four
/// sub-triangles. Appends `4^level - 1` sites in total; level 0 does nothing.
pub fn subdivide(
  sites: &mut Vec<Site>,
  triangle: [Site; 3],
  level: u32,
  blend: &dyn ColorBlend,
  rng: &mut dyn RngCore
) {
  if level == 0 {
    return;
  }
  let [a, b, c] = triangle;
  let m01 = split_edge(a, b, blend, rng);
  let m12 = split_edge(b, c, blend, rng);
  let m20 = split_edge(c, a, blend, rng);
  sites.extend([m01, m12, m20]);

  if level - 1 > 0 {
    for sub in [[a, m01, m20], [m01, b, m12], [m20, m12, c], [m01, m12, m20]] {
      subdivide(sites, sub, level - 1, blend, rng);
    }
  }
}
