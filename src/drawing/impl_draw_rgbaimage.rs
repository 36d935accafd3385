use {
  euclid::point2,
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Texture, pixel_bounds},
    geometry::{BoundingBox, Shape},
    sdf::SDF
  }
};

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let (width, height) = image.dimensions();
    let bounding_box = match pixel_bounds(self.bounding_box(), width, height) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        // sample at the pixel center
        let sdf = self.sdf(point2(x as f64 + 0.5, y as f64 + 0.5));
        let pixel = image.get_pixel_mut(x, y);
        *pixel = sdf_overlay_aa(sdf, *pixel, self.texture);
      });
  }
}

/// Coverage of a one pixel wide band around the contour, `sdf` in pixels.
fn sdf_overlay_aa(sdf: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let alpha = (0.5 - sdf) // antialias
    .clamp(0.0, 1.0);
  if alpha <= 0.0 {
    return col1;
  }
  if alpha >= 1.0 && col2.0[3] == u8::MAX {
    return col2;
  }
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}
