use std::{f32::consts::PI, sync::OnceLock};

/// Normalization factor for the truncated double Fourier series used by the swan functions.
pub fn swan_normalization() -> f32 {
  576. / PI.powi(6)
}

/// A derived constant that is computed the first time it's read and then cached until it's
/// explicitly invalidated.
pub struct MemoizedConstant {
  cell: OnceLock<f32>,
  compute: fn() -> f32,
}

impl MemoizedConstant {
  pub const fn new(compute: fn() -> f32) -> Self {
    MemoizedConstant {
      cell: OnceLock::new(),
      compute,
    }
  }

  #[inline(always)]
  pub fn get(&self) -> f32 {
    *self.cell.get_or_init(self.compute)
  }

  pub fn is_initialized(&self) -> bool {
    self.cell.get().is_some()
  }

  /// Drops the cached value so that the next read recomputes it.
  pub fn invalidate(&mut self) {
    self.cell.take();
  }
}

impl std::fmt::Debug for MemoizedConstant {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MemoizedConstant")
      .field("value", &self.cell.get())
      .finish()
  }
}

/// All memoized constants needed by the catalogue.  Each one is its own field so that functions
/// sharing a constant read the exact same cell.
#[derive(Debug)]
pub struct MemoizedConstants {
  /// `C = 576 / pi^6`, shared by `Swan` and `Circular Swan`
  pub swan_c: MemoizedConstant,
}

impl MemoizedConstants {
  pub const fn new() -> Self {
    MemoizedConstants {
      swan_c: MemoizedConstant::new(swan_normalization),
    }
  }

  pub fn invalidate_all(&mut self) {
    self.swan_c.invalidate();
  }
}

impl Default for MemoizedConstants {
  fn default() -> Self {
    Self::new()
  }
}
