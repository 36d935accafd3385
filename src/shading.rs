//! Rendering of the clipped mosaic and the soft-focus compositing pass.
//!
//! The sharp mosaic is blurred, then laid back over itself through a mask in which every cell
//! is as bright as it is large: big cells melt into a soft glow while small cells keep their
//! crisp edges.

use {
  image::{imageops, RgbaImage},
  rayon::prelude::*,
  crate::{
    color::{ease_out_quad, Color},
    drawing::Draw,
    error::{Error, Result},
    geometry::Shape,
    mosaic::ClippedCell
  }
};

/// Fill every cell with its color and outline it with a `stroke_width` wide line of the same
/// color, which closes the hairline gaps between neighbours.
pub fn draw_cells(image: &mut RgbaImage, cells: &[ClippedCell], stroke_width: f64) {
  for cell in cells {
    cell.polygon.as_slice()
      .inflate(stroke_width / 2.0)
      .texture(cell.color.to_rgba())
      .draw(image);
  }
}

/// Gray level per area: min–max normalized, eased, scaled to `0..=255`. All equal areas map
/// to white.
pub fn brightness(areas: &[f64]) -> Vec<u8> {
  let (min, max) = areas.iter()
    .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &a| (min.min(a), max.max(a)));
  areas.iter()
    .map(|&a| {
      let t = if max > min { (a - min) / (max - min) } else { 1.0 };
      (255.0 * ease_out_quad(t)).round() as u8
    })
    .collect()
}

/// Black image with every cell painted in its [`brightness`].
pub fn area_mask(cells: &[ClippedCell], width: u32, height: u32, stroke_width: f64) -> RgbaImage {
  let mut mask = RgbaImage::from_pixel(width, height, Color::BLACK.to_rgba());
  let areas = cells.iter().map(|c| c.area).collect::<Vec<_>>();
  for (cell, value) in cells.iter().zip(brightness(&areas)) {
    cell.polygon.as_slice()
      .inflate(stroke_width / 2.0)
      .texture(Color::gray(value).to_rgba())
      .draw(&mut mask);
  }
  mask
}

/// Copy the green channel of `mask` into the alpha channel of `target`.
pub fn transfer_alpha(target: &mut RgbaImage, mask: &RgbaImage) -> Result<()> {
  if target.dimensions() != mask.dimensions() {
    return Err(Error::InvalidConfig(format!(
      "alpha mask is {:?}, image is {:?}", mask.dimensions(), target.dimensions()
    )));
  }
  target.par_chunks_mut(4)
    .zip(mask.par_chunks(4))
    .for_each(|(pixel, mask)| pixel[3] = mask[1]);
  Ok(())
}

/// Blur a copy of `canvas` and of `mask` with a gaussian of sigma `blur_radius / 2`, use the
/// mask as the alpha of the blurred copy and lay it over `canvas`.
pub fn composite(canvas: &mut RgbaImage, mask: &RgbaImage, blur_radius: f64) -> Result<()> {
  let sigma = (blur_radius / 2.0) as f32;
  let mut blurred = crate::profile!("blur", imageops::blur(canvas, sigma));
  let mask = imageops::blur(mask, sigma);
  transfer_alpha(&mut blurred, &mask)?;
  imageops::overlay(canvas, &blurred, 0, 0);
  // the canvas is opaque, blending rounds its alpha down
  canvas.par_chunks_mut(4).for_each(|pixel| pixel[3] = u8::MAX);
  Ok(())
}
