//! Built-in palettes.

use {
  rand::{Rng, seq::SliceRandom},
  crate::{
    color::Color,
    error::{Error, Result}
  }
};

const PALETTES: &[&[&str]] = &[
  &["#264653", "#2a9d8f", "#e9c46a", "#f4a261", "#e76f51"],
  &["#e63946", "#f1faee", "#a8dadc", "#457b9d", "#1d3557"],
  &["#ffbe0b", "#fb5607", "#ff006e", "#8338ec", "#3a86ff"],
  &["#606c38", "#283618", "#fefae0", "#dda15e", "#bc6c25"],
  &["#cdb4db", "#ffc8dd", "#ffafcc", "#bde0fe", "#a2d2ff"],
  &["#003049", "#d62828", "#f77f00", "#fcbf49", "#eae2b7"],
  &["#0b132b", "#1c2541", "#3a506b", "#5bc0be", "#ffffff"],
  &["#f72585", "#7209b7", "#3a0ca3", "#4361ee", "#4cc9f0"],
  &["#ffcdb2", "#ffb4a2", "#e5989b", "#b5838d", "#6d6875"],
  &["#335c67", "#fff3b0", "#e09f3e", "#9e2a2b", "#540b0e"],
  &["#edae49", "#d1495b", "#00798c", "#30638e", "#003d5b"],
  &["#8ecae6", "#219ebc", "#023047", "#ffb703", "#fb8500"],
];

/// Ordered, immutable set of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
  colors: Vec<Color>
}

impl Palette {
  pub fn new(colors: Vec<Color>) -> Result<Self> {
    if colors.is_empty() {
      return Err(Error::InvalidConfig("palette has no colors".into()));
    }
    Ok(Self { colors })
  }

  pub fn parse(hex: &[&str]) -> Result<Self> {
    hex.iter()
      .map(|s| s.parse())
      .collect::<Result<Vec<_>>>()
      .and_then(Self::new)
  }

  /// Every built-in palette.
  pub fn all() -> Result<Vec<Self>> {
    PALETTES.iter()
      .map(|hex| Self::parse(hex))
      .collect()
  }

  /// Every built-in palette, each extended with black.
  pub fn all_with_black() -> Result<Vec<Self>> {
    Ok(Self::all()?
      .into_iter()
      .map(Self::with_black)
      .collect())
  }

  /// Pick one of the built-in palettes, extended with black.
  pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
    Self::all_with_black()?
      .choose(rng)
      .cloned()
      .ok_or_else(|| Error::InvalidConfig("no built-in palettes".into()))
  }

  pub fn with_black(mut self) -> Self {
    if !self.colors.contains(&Color::BLACK) {
      self.colors.push(Color::BLACK);
    }
    self
  }

  pub fn colors(&self) -> &[Color] {
    &self.colors
  }

  pub fn len(&self) -> usize {
    self.colors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }

  /// Uniformly random color of the palette.
  pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
    self.colors[rng.gen_range(0..self.colors.len())]
  }
}

#[test] fn builtin_palettes_parse() -> anyhow::Result<()> {
  let palettes = Palette::all_with_black()?;
  assert_eq!(palettes.len(), PALETTES.len());
  assert!(palettes.iter().all(|p| p.colors().last() == Some(&Color::BLACK)));
  Ok(())
}

#[test] fn pick_stays_in_palette() -> anyhow::Result<()> {
  use rand::SeedableRng;

  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let palette = Palette::parse(&["#ff0000", "#00ff00"])?;
  assert!(Palette::parse(&[]).is_err());
  for _ in 0..64 {
    assert!(palette.colors().contains(&palette.pick(&mut rng)));
  }
  Ok(())
}
