//! Planar primitives of the mosaic.
//!
//! The origin of the coordinate system is in the top-left corner of the screen, `y` points down,
//! one unit is one pixel. Sites generated with overdraw live partially at negative coordinates.

use {
  euclid::{Point2D, Box2D, point2},
  num_traits::Float,
  itertools::Itertools,
  crate::sdf::{SDF, Inflate}
};

pub mod clip;
pub use clip::clip_to_rect;
#[cfg(test)] mod tests;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenSpace;

pub type P2 = Point2D<f64, ScreenSpace>;
pub type Rect = Box2D<f64, ScreenSpace>;
/// Closed ring of vertices, the last vertex connects back to the first one.
pub type Polygon = Vec<P2>;
pub type Triangle = [P2; 3];

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something with a distance field and a finite extent; can be textured and drawn.
pub trait Shape: SDF<f64> + BoundingBox<f64, ScreenSpace> {
  /// Grow the shape outwards by `radius`, rounding the corners.
  fn inflate(self, radius: f64) -> Inflate<Self> where Self: Sized {
    Inflate { shape: self, radius }
  }
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f64> + BoundingBox<f64, ScreenSpace> {}

impl BoundingBox<f64, ScreenSpace> for [P2] {
  fn bounding_box(&self) -> Rect {
    Box2D::from_points(self.iter())
  }
}

impl <T, S, B> BoundingBox<T, S> for &B where B: BoundingBox<T, S> + ?Sized {
  fn bounding_box(&self) -> Box2D<T, S> { (**self).bounding_box() }
}

/// `[0, width) × [0, height)`
pub fn screen_rect(width: u32, height: u32) -> Rect {
  Box2D::new(point2(0.0, 0.0), point2(width as f64, height as f64))
}

/// Screen rectangle scaled by `overdraw` around its center.
pub fn overdraw_rect(width: u32, height: u32, overdraw: f64) -> Rect {
  let border_x = (overdraw - 1.0) * width as f64 / 2.0;
  let border_y = (overdraw - 1.0) * height as f64 / 2.0;
  Box2D::new(
    point2(-border_x, -border_y),
    point2(width as f64 + border_x, height as f64 + border_y)
  )
}

/// Shoelace formula, positive for counter-clockwise rings in a y-up basis.
pub fn signed_area<T: Float, U>(polygon: &[Point2D<T, U>]) -> T {
  let two = T::one() + T::one();
  polygon.iter()
    .circular_tuple_windows()
    .map(|(a, b)| a.x * b.y - b.x * a.y)
    .fold(T::zero(), |acc, x| acc + x) / two
}

pub fn area<T: Float, U>(polygon: &[Point2D<T, U>]) -> T {
  signed_area(polygon).abs()
}

/// Area-weighted centroid of a simple polygon. `None` when the ring encloses no area.
pub fn centroid<T: Float, U>(polygon: &[Point2D<T, U>]) -> Option<Point2D<T, U>> {
  let (mut x, mut y, mut k) = (T::zero(), T::zero(), T::zero());
  for (a, b) in polygon.iter().circular_tuple_windows() {
    let c = a.x * b.y - b.x * a.y;
    k = k + c;
    x = x + (a.x + b.x) * c;
    y = y + (a.y + b.y) * c;
  }
  let k = k * T::from(3.0)?;
  (k != T::zero()).then(|| Point2D::new(x / k, y / k))
}

/// Integer midpoint, `(a + b) >> 1` on each axis.
///
/// The sum is truncated toward zero first, then halved with an arithmetic shift, which floors:
/// `(0 + 3) >> 1 == 1`, `(-3) >> 1 == -2`.
pub fn midpoint(a: P2, b: P2) -> P2 {
  let half = |a: f64, b: f64| (((a + b) as i64) >> 1) as f64;
  point2(half(a.x, b.x), half(a.y, b.y))
}

/// True when any of the vertices lies in `[0, width) × [0, height)`.
///
/// Only vertices are tested: a triangle spanning the screen with all three corners outside is
/// reported as not touching it.
pub fn touches_screen(vertices: &[P2], width: f64, height: f64) -> bool {
  vertices.iter()
    .any(|p| p.x >= 0.0 && p.x < width && p.y >= 0.0 && p.y < height)
}

/// Smallest of the three altitudes, `2 · area / longest edge`. Zero for degenerate triangles.
pub fn min_altitude(triangle: &Triangle) -> f64 {
  let longest = triangle.iter()
    .circular_tuple_windows()
    .map(|(a, b)| a.distance_to(*b))
    .fold(0.0, f64::max);
  if longest <= 0.0 {
    return 0.0;
  }
  2.0 * area(&triangle[..]) / longest
}

/// Even-odd rule.
pub fn contains(polygon: &[P2], p: P2) -> bool {
  polygon.iter()
    .circular_tuple_windows()
    .filter(|(a, b)| (a.y > p.y) != (b.y > p.y)
      && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x)
    .count() % 2 == 1
}

/// Distance from `p` to the segment `a..b`.
pub fn segment_distance(p: P2, a: P2, b: P2) -> f64 {
  let ab = b - a;
  let len2 = ab.square_length();
  if len2 <= 0.0 {
    return p.distance_to(a);
  }
  let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
  p.distance_to(a + ab * t)
}
