//! Seeded 2D simplex noise.

use rand::{Rng, seq::SliceRandom};

const F2: f64 = 0.366_025_403_784_438_6; // (sqrt(3) - 1) / 2
const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6

const GRAD: [[f64; 2]; 12] = [
  [1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0],
  [1.0, 0.0], [-1.0, 0.0], [1.0, 0.0], [-1.0, 0.0],
  [0.0, 1.0], [0.0, -1.0], [0.0, 1.0], [0.0, -1.0],
];

/// Coherent noise on the plane, values in `[-1, 1]`.
/// Two instances built from equally seeded generators are identical.
#[derive(Clone)]
pub struct Simplex2 {
  perm: [u8; 512]
}

impl std::fmt::Debug for Simplex2 {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.debug_struct("Simplex2").finish_non_exhaustive()
  }
}

impl Simplex2 {
  pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
    let mut table: Vec<u8> = (0..=255).collect();
    table.shuffle(rng);
    let mut perm = [0u8; 512];
    for (i, p) in perm.iter_mut().enumerate() {
      *p = table[i & 255];
    }
    Self { perm }
  }

  fn gradient(&self, i: i64, j: i64) -> [f64; 2] {
    let j = self.perm[(j & 255) as usize] as usize;
    GRAD[self.perm[(i & 255) as usize + j] as usize % 12]
  }

  pub fn get(&self, x: f64, y: f64) -> f64 {
    // skew onto the simplex grid
    let s = (x + y) * F2;
    let (i, j) = ((x + s).floor(), (y + s).floor());
    let t = (i + j) * G2;
    let (x0, y0) = (x - (i - t), y - (j - t));
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let corners = [
      (x0, y0, 0, 0),
      (x0 - i1 as f64 + G2, y0 - j1 as f64 + G2, i1, j1),
      (x0 - 1.0 + 2.0 * G2, y0 - 1.0 + 2.0 * G2, 1, 1),
    ];
    let (i, j) = (i as i64, j as i64);
    let n: f64 = corners.iter()
      .map(|&(dx, dy, di, dj)| {
        let t = 0.5 - dx * dx - dy * dy;
        if t < 0.0 {
          return 0.0;
        }
        let [gx, gy] = self.gradient(i + di, j + dj);
        t.powi(4) * (gx * dx + gy * dy)
      })
      .sum();
    (70.0 * n).clamp(-1.0, 1.0)
  }
}
