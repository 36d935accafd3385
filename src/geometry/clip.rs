//! Sutherland–Hodgman clipping against an axis-aligned rectangle.
//!
//! The subject ring is clipped sequentially against the four half-planes bounding the
//! rectangle. Works for any simple subject polygon; the clipper being a rectangle keeps every
//! edge test a single comparison.

use {
  super::{P2, Polygon, Rect},
  euclid::point2
};

#[derive(Debug, Copy, Clone)]
enum Edge {
  Left(f64),
  Right(f64),
  Top(f64),
  Bottom(f64)
}

impl Edge {
  fn inside(self, p: P2) -> bool {
    match self {
      Edge::Left(x) => p.x >= x,
      Edge::Right(x) => p.x <= x,
      Edge::Top(y) => p.y >= y,
      Edge::Bottom(y) => p.y <= y,
    }
  }

  /// Intersection of segment `a..b` with the edge line. Only called for segments crossing it.
  fn intersect(self, a: P2, b: P2) -> P2 {
    match self {
      Edge::Left(x) | Edge::Right(x) => {
        let t = (x - a.x) / (b.x - a.x);
        point2(x, a.y + (b.y - a.y) * t)
      }
      Edge::Top(y) | Edge::Bottom(y) => {
        let t = (y - a.y) / (b.y - a.y);
        point2(a.x + (b.x - a.x) * t, y)
      }
    }
  }

  fn clip(self, subject: &[P2]) -> Polygon {
    let mut output = Vec::with_capacity(subject.len() + 2);
    let mut prev = match subject.last() {
      Some(&p) => p,
      None => return output
    };
    for &current in subject {
      match (self.inside(prev), self.inside(current)) {
        (true, true) => output.push(current),
        (true, false) => output.push(self.intersect(prev, current)),
        (false, true) => {
          output.push(self.intersect(prev, current));
          output.push(current);
        }
        (false, false) => ()
      }
      prev = current;
    }
    output
  }
}

/// Clip `subject` to `rect`. `None` when less than a triangle survives.
pub fn clip_to_rect(subject: &[P2], rect: &Rect) -> Option<Polygon> {
  let edges = [
    Edge::Left(rect.min.x),
    Edge::Right(rect.max.x),
    Edge::Top(rect.min.y),
    Edge::Bottom(rect.max.y)
  ];
  let clipped = edges.iter()
    .try_fold(subject.to_vec(), |polygon, edge| {
      let polygon = edge.clip(&polygon);
      (polygon.len() >= 3).then(|| polygon)
    })?;
  Some(clipped)
}
