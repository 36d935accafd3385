use {
  euclid::point2,
  crate::{
    error::Result,
    geometry::{self, Rect},
    sampler::Site,
    voronoi::Voronoi
  }
};

/// Lloyd relaxation: `iterations` times, move every site to the centroid of its cell, truncated
/// to integer coordinates. Colors stay with their site. Sites without a cell do not move.
pub fn relax(mut sites: Vec<Site>, extent: Rect, iterations: usize) -> Result<Vec<Site>> {
  for _ in 0..iterations {
    let diagram = Voronoi::new(&sites, extent)?;
    for (site, cell) in sites.iter_mut().zip(diagram.polygons()) {
      if let Some(c) = cell.as_deref().and_then(geometry::centroid) {
        site.point = point2(c.x.trunc(), c.y.trunc());
      }
    }
  }
  Ok(sites)
}
