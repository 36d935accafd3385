//! One paint: sites → Voronoi → subdivision → fine Voronoi → clipping → shading.
//!
//! Every paint is independent. All randomness comes from the `Rng` handed to
//! [`Painter::paint`], so a seeded generator reproduces the image exactly.

use {
  std::{fs::File, io::BufWriter, path::Path},
  image::{codecs::png::PngEncoder, ColorType, ImageEncoder, RgbaImage},
  log::info,
  rand::Rng,
  crate::{
    color::Color,
    error::{Error, Result},
    geometry::{self, Rect},
    mosaic::{self, ClippedCell},
    palette::Palette,
    profile,
    sampler::{self, Site},
    shading,
    subdivide::{subdivide, ColorBlend, NoiseBlend, RandomBlend, SplitDepth},
    util,
    voronoi::{self, Voronoi}
  }
};


/// Deepest allowed subdivision of a top-level triangle.
pub const MAX_LEVEL: u32 = 6;

/// How midpoint colors are blended.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BlendConfig {
  /// Uniform random ratio in `[0.25, 0.75]`.
  Basic,
  /// Simplex noise sampled at `frequency` per pixel, mapped onto `[low, high]`.
  Noise { frequency: f64, low: f64, high: f64 }
}

impl BlendConfig {
  fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Box<dyn ColorBlend> {
    match *self {
      BlendConfig::Basic => Box::new(RandomBlend::default()),
      BlendConfig::Noise { frequency, low, high } =>
        Box::new(NoiseBlend::new(rng, frequency, low, high))
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaintConfig {
  pub width: u32,
  pub height: u32,
  /// Sites are scattered over the screen scaled by this factor around its center.
  pub overdraw: f64,
  /// `None`: one site per 150000 px² of overdraw area.
  pub site_count: Option<usize>,
  /// `None`: a random built-in palette, extended with black.
  pub palette: Option<Palette>,
  pub blend: BlendConfig,
  pub split_depth: SplitDepth,
  pub relax_iterations: usize,
  pub stroke_width: f64,
  /// Blur and mask the mosaic; otherwise the sharp mosaic is returned.
  pub composite: bool,
  pub blur_radius: f64,
  pub background: Color
}

impl PaintConfig {
  /// Random blends, fixed split depth, sharp output.
  pub fn basic(width: u32, height: u32) -> Self {
    Self {
      width,
      height,
      overdraw: 1.5,
      site_count: None,
      palette: None,
      blend: BlendConfig::Basic,
      split_depth: SplitDepth::Fixed { base: 4, spread: 2.0 },
      relax_iterations: 0,
      stroke_width: 2.0,
      composite: false,
      blur_radius: 100.0,
      background: Color::BLACK
    }
  }

  /// Noise-driven blends, altitude-driven split depth, one relaxation step, soft compositing.
  pub fn advanced(width: u32, height: u32) -> Self {
    Self {
      blend: BlendConfig::Noise { frequency: 0.15, low: 0.15, high: 0.85 },
      split_depth: SplitDepth::Altitude { min_cell: 6.0, max_level: MAX_LEVEL },
      relax_iterations: 1,
      composite: true,
      ..Self::basic(width, height)
    }
  }

  pub fn with_size(mut self, width: u32, height: u32) -> Self {
    self.width = width;
    self.height = height;
    self
  }
  pub fn with_overdraw(mut self, overdraw: f64) -> Self {
    self.overdraw = overdraw;
    self
  }
  pub fn with_site_count(mut self, site_count: usize) -> Self {
    self.site_count = Some(site_count);
    self
  }
  pub fn with_palette(mut self, palette: Palette) -> Self {
    self.palette = Some(palette);
    self
  }
  pub fn with_blend(mut self, blend: BlendConfig) -> Self {
    self.blend = blend;
    self
  }
  pub fn with_split_depth(mut self, split_depth: SplitDepth) -> Self {
    self.split_depth = split_depth;
    self
  }
  pub fn with_relax_iterations(mut self, relax_iterations: usize) -> Self {
    self.relax_iterations = relax_iterations;
    self
  }
  pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
    self.stroke_width = stroke_width;
    self
  }
  pub fn with_composite(mut self, composite: bool) -> Self {
    self.composite = composite;
    self
  }
  pub fn with_blur_radius(mut self, blur_radius: f64) -> Self {
    self.blur_radius = blur_radius;
    self
  }
  pub fn with_background(mut self, background: Color) -> Self {
    self.background = background;
    self
  }

  pub fn validate(&self) -> Result<()> {
    let invalid = |msg: String| Err(Error::InvalidConfig(msg));
    if self.width == 0 || self.height == 0 {
      return invalid(format!("empty canvas {}x{}", self.width, self.height));
    }
    if !self.overdraw.is_finite() || self.overdraw < 1.0 {
      return invalid(format!("overdraw must be at least 1, got {}", self.overdraw));
    }
    if self.site_count == Some(0) {
      return invalid("site count must be positive".into());
    }
    if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
      return invalid(format!("bad stroke width {}", self.stroke_width));
    }
    if !(self.blur_radius.is_finite() && self.blur_radius >= 0.0) {
      return invalid(format!("bad blur radius {}", self.blur_radius));
    }
    if let BlendConfig::Noise { frequency, low, high } = self.blend {
      if !frequency.is_finite() || !(0.0..=1.0).contains(&low) || !(low..=1.0).contains(&high) {
        return invalid(format!("bad noise blend {:?}", self.blend));
      }
    }
    match self.split_depth {
      SplitDepth::Fixed { base, spread } => {
        let deepest = spread.is_finite().then(|| base as f64 + (spread.ceil() - 1.0).max(0.0));
        if spread < 0.0 || deepest.map_or(true, |d| d > MAX_LEVEL as f64) {
          return invalid(format!("split depth {:?} exceeds {}", self.split_depth, MAX_LEVEL));
        }
      }
      SplitDepth::Altitude { min_cell, max_level } => {
        if !(min_cell.is_finite() && min_cell > 0.0) || max_level > MAX_LEVEL {
          return invalid(format!("bad split depth {:?}", self.split_depth));
        }
      }
    }
    Ok(())
  }
}

impl Default for PaintConfig {
  fn default() -> Self {
    Self::advanced(1280, 800)
  }
}

/// Rectangles derived from the configuration, shared by every stage.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaintContext {
  /// `[0, width) × [0, height)`
  pub screen: Rect,
  /// Screen grown by the overdraw factor, the Voronoi extent.
  pub extent: Rect
}

impl PaintContext {
  pub fn new(config: &PaintConfig) -> Self {
    Self {
      screen: geometry::screen_rect(config.width, config.height),
      extent: geometry::overdraw_rect(config.width, config.height, config.overdraw)
    }
  }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PaintStats {
  pub initial_sites: usize,
  pub triangles_drawn: usize,
  pub triangles_culled: usize,
  pub final_sites: usize,
  pub cells: usize
}

#[derive(Debug, Clone)]
pub struct Mosaic {
  pub cells: Vec<ClippedCell>,
  pub stats: PaintStats
}

impl Mosaic {
  pub fn total_area(&self) -> f64 {
    mosaic::total_area(&self.cells)
  }
}

#[derive(Debug, Clone)]
pub struct Painter {
  config: PaintConfig,
  context: PaintContext
}

impl Painter {
  pub fn new(config: PaintConfig) -> Result<Self> {
    config.validate()?;
    let context = PaintContext::new(&config);
    Ok(Self { config, context })
  }

  pub fn config(&self) -> &PaintConfig {
    &self.config
  }

  pub fn context(&self) -> &PaintContext {
    &self.context
  }

  /// Geometry and colors of one paint, clipped to the screen.
  pub fn mosaic<R: Rng>(&self, rng: &mut R) -> Result<Mosaic> {
    let PaintConfig { width, height, overdraw, .. } = self.config;
    let PaintContext { screen, extent } = self.context;

    let palette = match &self.config.palette {
      Some(palette) => palette.clone(),
      None => Palette::random(rng)?
    };
    let count = self.config.site_count
      .unwrap_or_else(|| sampler::default_site_count(width, height, overdraw));
    let sites = sampler::random_sites(rng, &palette, count, width, height, overdraw);
    let mut sites = profile!("relax", voronoi::relax(sites, extent, self.config.relax_iterations))?;
    let mut stats = PaintStats { initial_sites: sites.len(), ..Default::default() };

    let blend = self.config.blend.build(rng);
    let diagram = profile!("voronoi", Voronoi::new(&sites, extent))?;
    profile!("subdivide", for &[i, j, k] in diagram.triangles() {
      let triangle: [Site; 3] = [sites[i], sites[j], sites[k]];
      let vertices = triangle.map(|s| s.point);
      if !geometry::touches_screen(&vertices, width as f64, height as f64) {
        stats.triangles_culled += 1;
        continue;
      }
      let level = self.config.split_depth.level(&vertices, rng);
      subdivide(&mut sites, triangle, level, blend.as_ref(), rng);
      stats.triangles_drawn += 1;
    });
    info!(
      "triangles: {}, drawn = {}, culled = {}",
      diagram.triangles().len(), stats.triangles_drawn, stats.triangles_culled
    );

    let diagram = profile!("voronoi", Voronoi::new(&sites, extent))?;
    let cells = profile!("clip", mosaic::clip_cells(diagram.polygons(), &sites, &screen));
    stats.final_sites = sites.len();
    stats.cells = cells.len();
    info!("{} sites, {} cells", stats.final_sites, stats.cells);

    Ok(Mosaic { cells, stats })
  }

  /// Paint a new picture.
  pub fn paint<R: Rng>(&self, rng: &mut R) -> Result<RgbaImage> {
    let Mosaic { cells, .. } = self.mosaic(rng)?;
    let PaintConfig { width, height, stroke_width, .. } = self.config;

    let mut canvas = RgbaImage::from_pixel(width, height, self.config.background.to_rgba());
    log::debug!("framebuffer: {}", util::buffer_size(canvas.len()));
    profile!("draw", shading::draw_cells(&mut canvas, &cells, stroke_width));
    if self.config.composite {
      let mask = profile!("mask", shading::area_mask(&cells, width, height, stroke_width));
      profile!("composite", shading::composite(&mut canvas, &mask, self.config.blur_radius))?;
    }
    Ok(canvas)
  }
}

/// Write `image` as PNG, creating or truncating `path`.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
  let writer = BufWriter::new(File::create(path)?);
  PngEncoder::new(writer)
    .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
  Ok(())
}
