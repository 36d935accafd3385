/// Evaluate an expression and log how long it took, at `debug` level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    ::log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Human readable size of a framebuffer, for log lines.
pub fn buffer_size(bytes: usize) -> String {
  use humansize::{FileSize, file_size_opts as options};

  bytes.file_size(options::CONVENTIONAL)
    .unwrap_or_else(|_| format!("{} B", bytes))
}

#[test] fn readable_sizes() {
  assert!(buffer_size(1280 * 800 * 4).ends_with("MB"));
  assert_eq!(profile!("noop", 2 + 2), 4);
}
