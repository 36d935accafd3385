use {
  anyhow::{bail, Context, Result},
  log::info,
  rand::{Rng, SeedableRng},
  voronoi_mosaic::{
    logging::{init_logging, LoggingConfig},
    paint::{self, PaintConfig, Painter},
    profile,
    util
  }
};

/// `voronoi-mosaic [out.png] [width] [height] [seed]`, preset from `MOSAIC_PRESET`.
fn main() -> Result<()> {
  init_logging(LoggingConfig::default());

  let mut args = std::env::args().skip(1);
  let path = args.next().unwrap_or_else(|| "out.png".into());
  let width = args.next().map(|x| x.parse()).transpose().context("width")?.unwrap_or(1280);
  let height = args.next().map(|x| x.parse()).transpose().context("height")?.unwrap_or(800);
  let seed = match args.next() {
    Some(x) => x.parse().context("seed")?,
    None => rand::thread_rng().gen()
  };

  let config = match std::env::var("MOSAIC_PRESET").as_deref() {
    Ok("basic") => PaintConfig::basic(width, height),
    Ok("advanced") | Err(_) => PaintConfig::advanced(width, height),
    Ok(other) => bail!("unknown preset {:?}, expected basic or advanced", other)
  };
  info!("painting {}x{}, seed {}", width, height, seed);

  let painter = Painter::new(config)?;
  let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
  let image = profile!("paint", painter.paint(&mut rng))?;
  paint::save_png(&image, &path)?;
  info!("{} written, {}", path, util::buffer_size(image.len()));
  Ok(())
}
