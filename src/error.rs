//! Crate error type.
//!
//! Numeric degeneracies (zero-area triangles, coincident sites, slivers) are filtered by the
//! pipeline and never show up here. What remains is bad input and broken invariants.
use std::fmt;

#[derive(Debug)]
pub enum Error {
  /// A triangulation vertex has no site recorded for it. The site list and the
  /// triangulation went out of sync, the paint can not continue.
  SiteNotFound { vertex: usize },
  /// Site coordinates the triangulation refuses (NaN, infinite or out of range).
  Triangulation(spade::InsertionError),
  InvalidConfig(String),
  ParseColor(String),
  Image(image::ImageError),
  Io(std::io::Error),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match self {
      SiteNotFound { vertex } =>
        write!(f, "could not find the site of triangulation vertex #{}", vertex),
      Triangulation(err) => write!(f, "triangulation failed: {:?}", err),
      InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
      ParseColor(literal) => write!(f, "invalid color literal {:?}", literal),
      Image(err) => write!(f, "{}", err),
      Io(err) => write!(f, "{}", err),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Image(err) => Some(err),
      Error::Io(err) => Some(err),
      _ => None
    }
  }
}

impl From<spade::InsertionError> for Error {
  fn from(e: spade::InsertionError) -> Self { Error::Triangulation(e) }
}
impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self { Error::Image(e) }
}
impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self { Error::Io(e) }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
