use {
  super::*,
  approx::assert_relative_eq
};

fn square(min: f64, max: f64) -> Polygon {
  vec![point2(min, min), point2(max, min), point2(max, max), point2(min, max)]
}

#[test] fn shoelace() {
  let sq = square(0.0, 3.0);
  assert_eq!(area(sq.as_slice()), 9.0);
  let reversed: Polygon = sq.iter().rev().copied().collect();
  assert_eq!(signed_area(sq.as_slice()), -signed_area(reversed.as_slice()));
  assert_eq!(area::<f64, ScreenSpace>(&[]), 0.0);
}

#[test] fn centroid_of_square_and_degenerate() {
  let c = centroid(square(2.0, 6.0).as_slice()).unwrap();
  assert_relative_eq!(c.x, 4.0);
  assert_relative_eq!(c.y, 4.0);
  let line = [point2(0.0, 0.0), point2(1.0, 1.0), point2(2.0, 2.0)];
  assert!(centroid::<f64, ScreenSpace>(&line).is_none());
}

#[test] fn truncated_midpoint() {
  assert_eq!(midpoint(point2(0.0, 0.0), point2(3.0, 3.0)), point2(1.0, 1.0));
  assert_eq!(midpoint(point2(-3.0, 0.0), point2(0.0, 5.5)), point2(-2.0, 2.0));
}

#[test] fn screen_touch() {
  let inside_one = [point2(-50.0, -50.0), point2(10.0, 10.0), point2(-50.0, 80.0)];
  assert!(touches_screen(&inside_one, 100.0, 100.0));

  // edge crosses the screen, no vertex inside
  let crossing = [point2(-10.0, 50.0), point2(110.0, 50.0), point2(50.0, 200.0)];
  assert!(!touches_screen(&crossing, 100.0, 100.0));

  // right and bottom borders are open
  assert!(!touches_screen(&[point2(100.0, 0.0)], 100.0, 100.0));
  assert!(!touches_screen(&[point2(0.0, 100.0)], 100.0, 100.0));
  assert!(touches_screen(&[point2(0.0, 0.0)], 100.0, 100.0));
}

#[test] fn altitude() {
  let right = [point2(0.0, 0.0), point2(4.0, 0.0), point2(0.0, 4.0)];
  assert_relative_eq!(min_altitude(&right), 16.0 / 32f64.sqrt(), epsilon = 1e-12);
  let point = [point2(1.0, 1.0); 3];
  assert_eq!(min_altitude(&point), 0.0);
}

#[test] fn even_odd() {
  let sq = square(0.0, 10.0);
  assert!(contains(&sq, point2(5.0, 5.0)));
  assert!(!contains(&sq, point2(15.0, 5.0)));
  assert!(!contains(&sq, point2(-1.0, -1.0)));
}

#[test] fn distance_to_segment() {
  let (a, b) = (point2(0.0, 0.0), point2(10.0, 0.0));
  assert_eq!(segment_distance(point2(5.0, 3.0), a, b), 3.0);
  assert_eq!(segment_distance(point2(13.0, 4.0), a, b), 5.0);
  assert_eq!(segment_distance(point2(3.0, 4.0), a, a), 5.0);
}

#[test] fn overdraw_extent() {
  let rect = overdraw_rect(800, 600, 1.5);
  assert_eq!(rect.min, point2(-200.0, -150.0));
  assert_eq!(rect.max, point2(1000.0, 750.0));
  assert_eq!(overdraw_rect(800, 600, 1.0), screen_rect(800, 600));
}

#[test] fn clip_inside_is_identity() {
  let screen = screen_rect(100, 100);
  let polygon = vec![point2(10.0, 10.0), point2(60.0, 20.0), point2(30.0, 70.0)];
  let clipped = clip_to_rect(&polygon, &screen).unwrap();
  assert_eq!(clipped, polygon);
  assert_eq!(area(clipped.as_slice()), area(polygon.as_slice()));
}

#[test] fn clip_covering_polygon() {
  let screen = screen_rect(100, 50);
  let clipped = clip_to_rect(&square(-20.0, 200.0), &screen).unwrap();
  assert_relative_eq!(area(clipped.as_slice()), 5000.0);
  assert!(clipped.iter().all(|p| (0.0..=100.0).contains(&p.x) && (0.0..=50.0).contains(&p.y)));
}

#[test] fn clip_partial_and_outside() {
  let screen = screen_rect(10, 10);
  let half_out = vec![point2(-5.0, 0.0), point2(5.0, 0.0), point2(5.0, 10.0), point2(-5.0, 10.0)];
  assert_relative_eq!(area(clip_to_rect(&half_out, &screen).unwrap().as_slice()), 50.0);

  let outside = vec![point2(20.0, 20.0), point2(30.0, 20.0), point2(25.0, 30.0)];
  assert!(clip_to_rect(&outside, &screen).is_none());
  assert!(clip_to_rect(&[], &screen).is_none());
}

#[test] fn bounding_box_of_ring() {
  let bb = square(-1.0, 4.0).as_slice().bounding_box();
  assert_eq!(bb, Box2D::new(point2(-1.0, -1.0), point2(4.0, 4.0)));
}
