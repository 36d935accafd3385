use {
  euclid::{Point2D, Box2D},
  itertools::Itertools,
  crate::geometry::{self, BoundingBox, ScreenSpace, P2}
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, ScreenSpace>) -> T;
}

/// Distance to the closest edge of the ring, negative inside.
impl SDF<f64> for [P2] {
  fn sdf(&self, pixel: P2) -> f64 {
    let distance = self.iter()
      .circular_tuple_windows()
      .map(|(a, b)| geometry::segment_distance(pixel, *a, *b))
      .fold(f64::MAX, f64::min);
    if geometry::contains(self, pixel) { -distance } else { distance }
  }
}

impl <T, S> SDF<T> for &S where S: SDF<T> + ?Sized {
  fn sdf(&self, pixel: Point2D<T, ScreenSpace>) -> T { (**self).sdf(pixel) }
}

/// Shape grown outwards by `radius`. A polygon inflated by half the line width covers
/// exactly the area of its fill plus its stroke.
#[derive(Debug, Copy, Clone)]
pub struct Inflate<S> {
  pub shape: S,
  pub radius: f64
}

impl <S> SDF<f64> for Inflate<S> where S: SDF<f64> {
  fn sdf(&self, pixel: P2) -> f64 {
    self.shape.sdf(pixel) - self.radius
  }
}

impl <S> BoundingBox<f64, ScreenSpace> for Inflate<S> where S: BoundingBox<f64, ScreenSpace> {
  fn bounding_box(&self) -> Box2D<f64, ScreenSpace> {
    self.shape.bounding_box().inflate(self.radius, self.radius)
  }
}
