//! Random point cloud with palette colors.

use {
  rand::Rng,
  euclid::point2,
  crate::{
    color::Color,
    geometry::P2,
    palette::Palette
  }
};

/// Generator point of the mosaic together with its color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Site {
  pub point: P2,
  pub color: Color
}

impl Site {
  pub fn new(point: P2, color: Color) -> Self {
    Self { point, color }
  }
}

/// Number of initial sites for a screen, one per 150000 px² of the overdraw area,
/// at least 3.
pub fn default_site_count(width: u32, height: u32, overdraw: f64) -> usize {
  let area = width as f64 * overdraw * overdraw * height as f64;
  ((area / 150_000.0).floor() as usize).max(3)
}

/// `count` sites uniformly distributed over the screen grown by `overdraw` around its center,
/// each colored by an independent uniform pick from `palette`.
pub fn random_sites<R: Rng + ?Sized>(
  rng: &mut R,
  palette: &Palette,
  count: usize,
  width: u32,
  height: u32,
  overdraw: f64
) -> Vec<Site> {
  let (width, height) = (width as f64, height as f64);
  let border_x = -(overdraw * width - width) / 2.0;
  let border_y = -(overdraw * height - height) / 2.0;

  (0..count)
    .map(|_| {
      let point = point2(
        border_x + rng.gen::<f64>() * width * overdraw,
        border_y + rng.gen::<f64>() * height * overdraw
      );
      Site::new(point, palette.pick(rng))
    })
    .collect()
}

#[test] fn sites_cover_overdraw_rect() -> anyhow::Result<()> {
  use rand::SeedableRng;

  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let palette = Palette::parse(&["#ff0000", "#0000ff"])?;
  let sites = random_sites(&mut rng, &palette, 500, 800, 600, 1.5);
  assert_eq!(sites.len(), 500);

  let rect = crate::geometry::overdraw_rect(800, 600, 1.5);
  assert!(sites.iter().all(|s| rect.contains(s.point)));
  // some land in the overdraw border
  assert!(sites.iter().any(|s| s.point.x < 0.0));
  assert!(sites.iter().any(|s| s.point.y > 600.0));
  assert!(sites.iter().any(|s| s.color == palette.colors()[0]));
  assert!(sites.iter().any(|s| s.color == palette.colors()[1]));
  Ok(())
}

#[test] fn site_count_formula() {
  assert_eq!(default_site_count(800, 600, 1.5), 7);
  assert_eq!(default_site_count(10, 10, 1.5), 3);
}
