//! Painterly generative art from recursively subdivided Voronoi mosaics.
//!
//! A paint scatters a handful of colored sites over the screen, triangulates them, splits every
//! visible Delaunay triangle into a fan of sub-triangles with blended colors, and tessellates
//! the resulting point cloud once more into a fine Voronoi mosaic. The mosaic is then clipped to
//! the screen, rasterized, and optionally softened with a blurred, area-masked copy of itself.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   voronoi_mosaic::{error::Result, paint::{self, PaintConfig, Painter}},
//! #   rand::SeedableRng
//! # };
//! # fn main() -> Result<()> {
//! let painter = Painter::new(PaintConfig::advanced(1280, 800))?;
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! // every call produces a new picture
//! let image = painter.paint(&mut rng)?;
//! paint::save_png(&image, "out.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline
//! - [`sampler`]: random sites over the overdraw rectangle, colors from a [`palette`];
//! - [`voronoi`]: Voronoi cells and Delaunay triangles, optional Lloyd relaxation ([`voronoi::relax()`]);
//! - [`subdivide`]: 4-way midpoint subdivision, colors mixed with [`color::mix`];
//! - [`mosaic`]: cells clipped to the screen ([`geometry::clip`]);
//! - [`shading`]: rasterization through [`drawing::Draw`], mask, blur, composite.
//!
//! [`paint::Painter`] runs all of them. Shapes are drawn through their signed distance function,
//! see [`sdf::SDF`] and [`geometry::Shape`].

pub mod error;
pub mod util;
pub mod logging;
pub mod geometry;
pub mod sdf;
pub mod color;
pub mod palette;
pub mod noise;
pub mod sampler;
pub mod voronoi;
pub mod subdivide;
pub mod mosaic;
pub mod drawing;
pub mod shading;
pub mod paint;
