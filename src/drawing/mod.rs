use {
  euclid::Box2D,
  crate::{
    geometry::{BoundingBox, Shape, ScreenSpace, P2},
    sdf::SDF
  }
};

mod impl_draw_rgbaimage;
#[cfg(test)] mod tests;

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

/// A shape together with the paint it is filled with.
#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF<f64> for Texture<S, T> where S: SDF<f64> {
  fn sdf(&self, pixel: P2) -> f64 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<f64, ScreenSpace> for Texture<S, T> where S: BoundingBox<f64, ScreenSpace> {
  fn bounding_box(&self) -> Box2D<f64, ScreenSpace> { self.shape.bounding_box() } }

/// Pixels of a `width × height` image touched by `bounding_box`.
fn pixel_bounds(
  bounding_box: Box2D<f64, ScreenSpace>,
  width: u32,
  height: u32
) -> Option<Box2D<u32, ScreenSpace>> {
  let screen = Box2D::from_size((width as f64, height as f64).into());
  bounding_box
    .round_out()
    .intersection(&screen)
    .and_then(|x| x.try_cast())
}
