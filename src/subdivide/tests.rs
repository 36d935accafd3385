use {
  super::*,
  crate::color::Color,
  euclid::point2,
  rand::SeedableRng,
  rand_pcg::Pcg64
};

fn triangle() -> [Site; 3] {
  [
    Site::new(point2(0.0, 0.0), Color::rgb(255, 0, 0)),
    Site::new(point2(512.0, 0.0), Color::rgb(0, 255, 0)),
    Site::new(point2(0.0, 512.0), Color::rgb(0, 0, 255))
  ]
}

#[test] fn appends_four_to_the_level_minus_one() {
  let mut rng = Pcg64::seed_from_u64(0);
  for level in 1..=5 {
    let mut sites = triangle().to_vec();
    subdivide(&mut sites, triangle(), level, &RandomBlend::default(), &mut rng);
    assert_eq!(sites.len() - 3, 4usize.pow(level) - 1);
  }
}

#[test] fn level_zero_is_a_no_op() {
  let mut rng = Pcg64::seed_from_u64(0);
  let mut sites = vec![];
  subdivide(&mut sites, triangle(), 0, &RandomBlend::default(), &mut rng);
  assert!(sites.is_empty());
}

#[test] fn existing_sites_untouched() {
  let mut rng = Pcg64::seed_from_u64(1);
  let before = vec![
    Site::new(point2(-10.0, 4.0), Color::WHITE),
    Site::new(point2(7.0, 7.0), Color::BLACK)
  ];
  let mut sites = before.clone();
  subdivide(&mut sites, triangle(), 3, &RandomBlend::default(), &mut rng);
  assert_eq!(&sites[..before.len()], &before[..]);
}

#[test] fn midpoints_are_truncated() {
  let mut rng = Pcg64::seed_from_u64(2);
  let corners = [
    Site::new(point2(0.0, 0.0), Color::BLACK),
    Site::new(point2(3.0, 3.0), Color::BLACK),
    Site::new(point2(0.0, 3.0), Color::BLACK)
  ];
  let mut sites = vec![];
  subdivide(&mut sites, corners, 1, &RandomBlend::default(), &mut rng);
  assert_eq!(sites[0].point, point2(1.0, 1.0));
  assert_eq!(sites[1].point, point2(1.0, 3.0));
  assert_eq!(sites[2].point, point2(0.0, 1.0));
  // same colors on both ends blend into the same color
  assert!(sites.iter().all(|s| s.color == Color::BLACK));
}

#[test] fn random_blend_range() {
  let mut rng = Pcg64::seed_from_u64(3);
  let blend = RandomBlend::default();
  let p = point2(0.0, 0.0);
  for _ in 0..1000 {
    let r = blend.ratio(&mut rng, p, p, p);
    assert!((0.25..0.75).contains(&r));
  }
}

#[test] fn noise_blend_range_and_direction() {
  let mut rng = Pcg64::seed_from_u64(4);
  let blend = NoiseBlend::new(&mut rng, 0.15, 0.15, 0.85);
  for i in 0..200 {
    let a = point2(i as f64 * 3.7, 11.0 - i as f64 * 1.3);
    let b = point2(a.x + 17.0, a.y - 5.0 + (i % 7) as f64);
    let m = geometry::midpoint(a, b);
    let forward = blend.ratio(&mut rng, a, b, m);
    let backward = blend.ratio(&mut rng, b, a, m);
    assert!((0.15..=0.85).contains(&forward));
    approx::assert_relative_eq!(forward + backward, 1.0, epsilon = 1e-12);
  }
}

#[test] fn shared_edge_gets_one_color() {
  let mut rng = Pcg64::seed_from_u64(5);
  let blend = NoiseBlend::new(&mut rng, 0.15, 0.15, 0.85);
  let (a, b) = (
    Site::new(point2(10.0, 40.0), Color::rgb(230, 57, 70)),
    Site::new(point2(90.0, 12.0), Color::rgb(29, 53, 87))
  );
  let forward = split_edge(a, b, &blend, &mut rng);
  let backward = split_edge(b, a, &blend, &mut rng);
  assert_eq!(forward.point, backward.point);
  for (f, b) in [
    (forward.color.r, backward.color.r),
    (forward.color.g, backward.color.g),
    (forward.color.b, backward.color.b)
  ] {
    assert!((f as i16 - b as i16).abs() <= 1);
  }
}

#[test] fn fixed_depth_is_four_or_five() {
  let mut rng = Pcg64::seed_from_u64(6);
  let depth = SplitDepth::Fixed { base: 4, spread: 2.0 };
  let t = [point2(0.0, 0.0), point2(1.0, 0.0), point2(0.0, 1.0)];
  let levels: Vec<u32> = (0..500).map(|_| depth.level(&t, &mut rng)).collect();
  assert!(levels.iter().all(|l| (4..=5).contains(l)));
  assert!(levels.contains(&4) && levels.contains(&5));
}

#[test] fn altitude_depth() {
  let mut rng = Pcg64::seed_from_u64(7);
  let depth = SplitDepth::Altitude { min_cell: 8.0, max_level: 6 };
  let tiny = [point2(0.0, 0.0), point2(4.0, 0.0), point2(0.0, 4.0)];
  let huge = [point2(0.0, 0.0), point2(1e6, 0.0), point2(0.0, 1e6)];
  let sliver = [point2(0.0, 0.0), point2(1000.0, 0.0), point2(2000.0, 1.0)];
  for _ in 0..100 {
    assert_eq!(depth.level(&tiny, &mut rng), 0);
    assert_eq!(depth.level(&sliver, &mut rng), 0);
    assert!(depth.level(&huge, &mut rng) <= 6);
  }
}
