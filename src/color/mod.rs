//! sRGB colors and pigment-like mixing.
//!
//! [`mix`] blends in Kubelka–Munk space over a coarse visible spectrum. Each color is turned
//! into a reflectance curve over 38 bands (380 to 750 nm) built from three smooth, overlapping
//! primary curves. In every band the reflectance `R` becomes an absorption/scattering ratio
//! `K/S = (1 - R)² / 2R`, the ratios are averaged and turned back into reflectance, and the
//! mixed curve is projected back to RGB through three cone-like sensitivity curves.
//! Concentrations are weighted by the luminance of each color, like paint with a tinting
//! strength. Since the primaries overlap, blue and yellow meet in a green, not in black.

use {
  std::{fmt, str::FromStr, sync::OnceLock},
  image::Rgba,
  num_traits::Float,
  crate::error::{Error, Result}
};


/// Wavelength bands, 380 nm to 750 nm in 10 nm steps.
const BANDS: usize = 38;
/// Every primary reflects at least this much in every band.
const PRIMARY_FLOOR: f64 = 0.04;
/// Keeps `K/S` finite for black.
const MIN_REFLECTANCE: f64 = 1e-6;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8
}

impl Color {
  pub const BLACK: Color = Color::rgb(0, 0, 0);
  pub const WHITE: Color = Color::rgb(255, 255, 255);

  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// Opaque pixel.
  pub fn to_rgba(self) -> Rgba<u8> {
    Rgba([self.r, self.g, self.b, 255])
  }

  pub fn gray(value: u8) -> Self {
    Self::rgb(value, value, value)
  }

  fn to_linear(self) -> [f64; 3] {
    [self.r, self.g, self.b].map(srgb_to_linear)
  }

  fn from_linear([r, g, b]: [f64; 3]) -> Self {
    Self::rgb(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
  }
}

/// `#rgb` or `#rrggbb`, the leading `#` is optional.
impl FromStr for Color {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let err = || Error::ParseColor(s.to_string());
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() {
      return Err(err());
    }
    let channel = |range: std::ops::Range<usize>, repeat: bool| -> Result<u8> {
      let digits = &hex[range];
      let value = u8::from_str_radix(digits, 16).map_err(|_| err())?;
      Ok(if repeat { value * 17 } else { value })
    };
    match hex.len() {
      3 => Ok(Self::rgb(channel(0..1, true)?, channel(1..2, true)?, channel(2..3, true)?)),
      6 => Ok(Self::rgb(channel(0..2, false)?, channel(2..4, false)?, channel(4..6, false)?)),
      _ => Err(err())
    }
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

fn srgb_to_linear(c: u8) -> f64 {
  let c = c as f64 / 255.0;
  if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

fn linear_to_srgb(v: f64) -> u8 {
  let v = v.clamp(0.0, 1.0);
  let c = if v <= 0.0031308 { v * 12.92 } else { 1.055 * v.powf(1.0 / 2.4) - 0.055 };
  (c * 255.0).round() as u8
}

fn luminance([r, g, b]: [f64; 3]) -> f64 {
  (0.2126 * r + 0.7152 * g + 0.0722 * b).max(MIN_REFLECTANCE)
}

fn absorption(reflectance: f64) -> f64 {
  (1.0 - reflectance).powi(2) / (2.0 * reflectance)
}

fn reflectance(ks: f64) -> f64 {
  1.0 + ks - (ks * ks + 2.0 * ks).sqrt()
}

fn sigmoid(x: f64) -> f64 {
  1.0 / (1.0 + (-x).exp())
}

fn gaussian(x: f64, mean: f64, sigma: f64) -> f64 {
  (-0.5 * ((x - mean) / sigma).powi(2)).exp()
}

fn invert3(m: [[f64; 3]; 3]) -> [[f64; 3]; 3] {
  let [[a, b, c], [d, e, f], [g, h, i]] = m;
  let det = a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g);
  [
    [(e * i - f * h) / det, (c * h - b * i) / det, (b * f - c * e) / det],
    [(f * g - d * i) / det, (a * i - c * g) / det, (c * d - a * f) / det],
    [(d * h - e * g) / det, (b * g - a * h) / det, (a * e - b * d) / det]
  ]
}

/// Linear RGB ⇄ reflectance curve.
///
/// The red, green and blue primary curves sum to 1 in every band, so white is a flat curve of
/// 1, gray a flat curve. `projection` is chosen so that each primary curve maps back onto its
/// own unit vector, which makes the round trip exact.
struct Spectrum {
  primaries: [[f64; 3]; BANDS],
  projection: [[f64; BANDS]; 3]
}

impl Spectrum {
  fn new() -> Self {
    let mut primaries = [[0.0; 3]; BANDS];
    let mut sensitivity = [[0.0; BANDS]; 3];
    for (band, primary) in primaries.iter_mut().enumerate() {
      let wavelength = 380.0 + 10.0 * band as f64;
      let red = sigmoid((wavelength - 585.0) / 22.0);
      let blue = sigmoid((485.0 - wavelength) / 22.0);
      let green = (1.0 - red - blue).max(0.0);
      *primary = [red, green, blue].map(|v| PRIMARY_FLOOR + (1.0 - 3.0 * PRIMARY_FLOOR) * v);

      sensitivity[0][band] = gaussian(wavelength, 600.0, 40.0);
      sensitivity[1][band] = gaussian(wavelength, 545.0, 40.0);
      sensitivity[2][band] = gaussian(wavelength, 450.0, 30.0);
    }

    // response[cone][primary]
    let mut response = [[0.0; 3]; 3];
    for (row, cone) in response.iter_mut().zip(&sensitivity) {
      for (p, value) in row.iter_mut().enumerate() {
        *value = cone.iter().zip(&primaries).map(|(s, primary)| s * primary[p]).sum();
      }
    }
    let inverse = invert3(response);

    let mut projection = [[0.0; BANDS]; 3];
    for (row, weights) in projection.iter_mut().zip(inverse) {
      for (band, value) in row.iter_mut().enumerate() {
        *value = weights.iter().zip(&sensitivity).map(|(w, cone)| w * cone[band]).sum();
      }
    }
    Self { primaries, projection }
  }

  fn get() -> &'static Self {
    static SPECTRUM: OnceLock<Spectrum> = OnceLock::new();
    SPECTRUM.get_or_init(Spectrum::new)
  }

  fn reflectance(&self, linear: [f64; 3]) -> [f64; BANDS] {
    self.primaries.map(|primary| {
      let r: f64 = primary.iter().zip(linear).map(|(p, c)| p * c).sum();
      r.max(MIN_REFLECTANCE)
    })
  }

  fn linear(&self, reflectance: &[f64; BANDS]) -> [f64; 3] {
    self.projection.map(|row| row.iter().zip(reflectance).map(|(w, r)| w * r).sum())
  }
}

/// Mix `a` into `b`; `ratio` of 0 yields `a`, 1 yields `b`. Values outside `[0, 1]` are clamped.
/// `mix(a, b, t)` and `mix(b, a, 1 - t)` agree.
pub fn mix(a: Color, b: Color, ratio: f64) -> Color {
  let t = ratio.clamp(0.0, 1.0);
  let (la, lb) = (a.to_linear(), b.to_linear());
  let wa = luminance(la) * (1.0 - t).powi(2);
  let wb = luminance(lb) * t.powi(2);
  let t = wb / (wa + wb);

  let spectrum = Spectrum::get();
  let (ra, rb) = (spectrum.reflectance(la), spectrum.reflectance(lb));
  let mut mixed = [0.0; BANDS];
  for ((m, ra), rb) in mixed.iter_mut().zip(ra).zip(rb) {
    *m = reflectance(absorption(ra) * (1.0 - t) + absorption(rb) * t);
  }
  Color::from_linear(spectrum.linear(&mixed))
}

/// Decelerating quadratic, maps `[0, 1]` onto `[0, 1]`.
pub fn ease_out_quad<F: Float>(t: F) -> F {
  t * (F::one() + F::one() - t)
}
