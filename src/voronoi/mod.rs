//! Voronoi diagram of a site list, bounded to a rectangular extent.
//!
//! Built on an incremental [`spade::DelaunayTriangulation`]. Four helper sites far outside the
//! extent are inserted first so that every real site is an interior vertex of the
//! triangulation and owns a bounded cell; cells are then clipped to the extent. Helper cells and
//! triangles touching a helper are not reported.

use {
  spade::{DelaunayTriangulation, Point2, Triangulation},
  euclid::point2,
  crate::{
    error::{Error, Result},
    geometry::{self, P2, Polygon, Rect},
    sampler::Site
  }
};

pub mod relax;
pub use relax::relax;

/// How far out the helper sites are placed, in extent sizes.
const HELPER_DISTANCE: f64 = 4.0;

/// What a triangulation vertex stands for.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Owner {
  Helper,
  Site(usize)
}

#[derive(Debug, Clone)]
pub struct Voronoi {
  cells: Vec<Option<Polygon>>,
  triangles: Vec<[usize; 3]>
}

impl Voronoi {
  pub fn new(sites: &[Site], extent: Rect) -> Result<Self> {
    Self::from_points(sites.iter().map(|s| s.point), extent)
  }

  pub fn from_points(points: impl ExactSizeIterator<Item = P2>, extent: Rect) -> Result<Self> {
    if extent.is_empty() {
      return Err(Error::InvalidConfig(format!("empty Voronoi extent {:?}", extent)));
    }
    let site_count = points.len();
    let mut triangulation = DelaunayTriangulation::<Point2<f64>>::new();
    let mut owners: Vec<Option<Owner>> = Vec::with_capacity(site_count + 4);

    let helpers = helper_points(&extent).map(|p| (p, Owner::Helper));
    let sites = points.enumerate().map(|(i, p)| (p, Owner::Site(i)));
    for (point, owner) in helpers.into_iter().chain(sites) {
      let vertex = triangulation.insert(Point2::new(point.x, point.y))?.index();
      if owners.len() <= vertex {
        owners.resize(vertex + 1, None);
      }
      // coincident sites share one vertex, the first one keeps the cell
      owners[vertex].get_or_insert(owner);
    }
    let owner_of = |vertex: usize| owner(&owners, vertex);

    let mut cells = vec![None; site_count];
    for vertex in triangulation.vertices() {
      let site = match owner_of(vertex.fix().index())? {
        Owner::Site(site) => site,
        Owner::Helper => continue
      };
      let center = vertex.position();
      let ring: Option<Vec<(f64, P2)>> = vertex.out_edges()
        .map(|edge| edge.face().as_inner().map(|face| {
          let c = face.circumcenter();
          ((c.y - center.y).atan2(c.x - center.x), point2(c.x, c.y))
        }))
        .collect();
      cells[site] = ring.and_then(|mut ring| {
        ring.sort_by(|a, b| a.0.total_cmp(&b.0));
        let polygon = ring.into_iter().map(|(_, p)| p).collect::<Polygon>();
        geometry::clip_to_rect(&polygon, &extent)
      });
    }

    let mut triangles = Vec::with_capacity(triangulation.num_inner_faces());
    'faces: for face in triangulation.inner_faces() {
      let mut triangle = [0; 3];
      for (slot, vertex) in triangle.iter_mut().zip(face.vertices()) {
        match owner_of(vertex.fix().index())? {
          Owner::Site(site) => *slot = site,
          Owner::Helper => continue 'faces
        }
      }
      triangles.push(triangle);
    }

    Ok(Self { cells, triangles })
  }

  /// One cell per input site, in input order. `None` for sites that share their position with an
  /// earlier site, or whose cell falls outside the extent.
  pub fn polygons(&self) -> &[Option<Polygon>] {
    &self.cells
  }

  /// Delaunay triangles as indices into the input site list.
  pub fn triangles(&self) -> &[[usize; 3]] {
    &self.triangles
  }
}

/// What the triangulation vertex `vertex` was inserted for. Every inserted vertex is recorded,
/// a miss means the site list and the triangulation are out of sync.
fn owner(owners: &[Option<Owner>], vertex: usize) -> Result<Owner> {
  owners.get(vertex)
    .copied()
    .flatten()
    .ok_or(Error::SiteNotFound { vertex })
}

fn helper_points(extent: &Rect) -> [P2; 4] {
  let size = extent.size();
  let center = extent.center();
  let (dx, dy) = (size.width * (0.5 + HELPER_DISTANCE), size.height * (0.5 + HELPER_DISTANCE));
  [
    point2(center.x - dx, center.y),
    point2(center.x + dx, center.y),
    point2(center.x, center.y - dy),
    point2(center.x, center.y + dy)
  ]
}
