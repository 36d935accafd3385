use {
  super::*,
  euclid::point2,
  image::{Rgba, RgbaImage},
  crate::geometry::Polygon
};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn square(min: f64, max: f64) -> Polygon {
  vec![point2(min, min), point2(max, min), point2(max, max), point2(min, max)]
}

#[test] fn fill_polygon() {
  let mut image = RgbaImage::new(32, 32);
  square(8.0, 24.0).as_slice()
    .texture(RED)
    .draw(&mut image);

  assert_eq!(*image.get_pixel(16, 16), RED);
  assert_eq!(*image.get_pixel(8, 8), RED);
  assert_eq!(*image.get_pixel(23, 23), RED);
  assert_eq!(*image.get_pixel(24, 16), Rgba([0; 4]));
  assert_eq!(*image.get_pixel(2, 2), Rgba([0; 4]));
}

#[test] fn antialiased_edge() {
  let mut image = RgbaImage::from_pixel(16, 16, BLUE);
  square(4.0, 10.5).as_slice()
    .texture(RED)
    .draw(&mut image);

  // pixel center 10.5 lies on the contour: half covered
  let edge = image.get_pixel(10, 6);
  assert!(edge.0[0] > 64 && edge.0[0] < 192, "{:?}", edge);
  assert!(edge.0[2] > 64 && edge.0[2] < 192, "{:?}", edge);
  assert_eq!(*image.get_pixel(9, 6), RED);
  assert_eq!(*image.get_pixel(11, 6), BLUE);
}

#[test] fn inflate_adds_stroke() {
  let mut image = RgbaImage::new(32, 32);
  square(8.0, 24.0).as_slice()
    .inflate(1.0)
    .texture(RED)
    .draw(&mut image);

  assert_eq!(*image.get_pixel(7, 16), RED);
  assert_eq!(*image.get_pixel(24, 16), RED);
  assert_eq!(*image.get_pixel(5, 16), Rgba([0; 4]));
}

#[test] fn offscreen_shapes() {
  let mut image = RgbaImage::new(16, 16);
  square(-40.0, -20.0).as_slice().texture(RED).draw(&mut image);
  assert!(image.pixels().all(|p| *p == Rgba([0; 4])));

  // partially visible
  square(-40.0, 4.0).as_slice().texture(RED).draw(&mut image);
  assert_eq!(*image.get_pixel(0, 0), RED);
  assert_eq!(*image.get_pixel(8, 8), Rgba([0; 4]));
}

#[test] fn polymorphic() {
  let mut image = RgbaImage::new(32, 32);
  let (a, b) = (square(0.0, 10.0), square(20.0, 30.0));
  let shapes: Vec<Box<dyn Draw<RgbaImage> + '_>> = vec![
    Box::new(a.as_slice().texture(RED)),
    Box::new(b.as_slice().inflate(1.0).texture(BLUE))
  ];
  shapes.iter().for_each(|shape| shape.draw(&mut image));
  assert_eq!(*image.get_pixel(5, 5), RED);
  assert_eq!(*image.get_pixel(25, 25), BLUE);
  assert_eq!(*image.get_pixel(15, 15), Rgba([0; 4]));
}
