//! Final mosaic tiles: Voronoi cells clipped to the screen.

use {
  rayon::prelude::*,
  crate::{
    color::Color,
    geometry::{self, Polygon, Rect},
    sampler::Site
  }
};

/// Cells of this area or less are dropped.
pub const MIN_AREA: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ClippedCell {
  pub polygon: Polygon,
  pub color: Color,
  pub area: f64
}

/// Clip every cell to `screen`, pairing it with the color of its site. Missing cells, cells
/// outside the screen and slivers of at most [`MIN_AREA`] are discarded; order is kept.
pub fn clip_cells(polygons: &[Option<Polygon>], sites: &[Site], screen: &Rect) -> Vec<ClippedCell> {
  polygons.par_iter()
    .zip(sites.par_iter())
    .filter_map(|(polygon, site)| {
      let polygon = geometry::clip_to_rect(polygon.as_ref()?, screen)?;
      let area = geometry::area(polygon.as_slice());
      (area > MIN_AREA).then(|| ClippedCell { polygon, color: site.color, area })
    })
    .collect()
}

/// Sum of all cell areas.
pub fn total_area(cells: &[ClippedCell]) -> f64 {
  cells.iter().map(|c| c.area).sum()
}

#[cfg(test)] mod tests {
  use {
    super::*,
    euclid::point2,
    crate::geometry::screen_rect
  };

  fn site(color: Color) -> Site {
    Site::new(point2(0.0, 0.0), color)
  }

  #[test] fn area_filter() {
    let screen = screen_rect(100, 100);
    let polygons = vec![
      // area 1, dropped
      Some(vec![point2(0.0, 0.0), point2(1.0, 0.0), point2(1.0, 1.0), point2(0.0, 1.0)]),
      // area 1.0201, kept
      Some(vec![point2(0.0, 0.0), point2(1.01, 0.0), point2(1.01, 1.01), point2(0.0, 1.01)]),
      None,
      // outside the screen
      Some(vec![point2(200.0, 0.0), point2(300.0, 0.0), point2(250.0, 50.0)]),
      Some(vec![point2(10.0, 10.0), point2(60.0, 20.0), point2(30.0, 70.0)])
    ];
    let sites = [Color::BLACK, Color::WHITE, Color::BLACK, Color::BLACK, Color::gray(7)].map(site);
    let cells = clip_cells(&polygons, &sites, &screen);

    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].color, Color::WHITE);
    assert_eq!(cells[1].color, Color::gray(7));
    assert_eq!(cells[1].polygon, polygons[4].clone().unwrap());
    assert!(cells.iter().all(|c| c.area > MIN_AREA));
  }

  #[test] fn clips_to_screen() {
    let screen = screen_rect(10, 10);
    let polygons = vec![Some(vec![point2(-10.0, -10.0), point2(20.0, -10.0), point2(20.0, 20.0), point2(-10.0, 20.0)])];
    let cells = clip_cells(&polygons, &[site(Color::BLACK)], &screen);
    assert_eq!(total_area(&cells), 100.0);
  }
}
