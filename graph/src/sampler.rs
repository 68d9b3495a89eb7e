use log::{debug, info};

use crate::{FunctionCatalogue, GraphError, Vec3};

/// Returns the cell-centered normalized `(u, v)` coordinate for linear grid index `ix`, where
/// `ix = z * resolution + x`.  Both components lie in [-1, 1).
#[inline(always)]
pub fn grid_coord(resolution: usize, ix: usize) -> (f32, f32) {
  let step = 2. / resolution as f32;
  let z = ix / resolution;
  let x = ix % resolution;
  let u = (x as f32 + 0.5) * step - 1.;
  let v = (z as f32 + 0.5) * step - 1.;
  (u, v)
}

/// Owns the grid resolution and the active function selection, and resamples the whole grid
/// on demand.
#[derive(Debug)]
pub struct GridSampler<'a> {
  catalogue: &'a FunctionCatalogue,
  resolution: usize,
  point_count: usize,
  active_function: usize,
}

impl<'a> GridSampler<'a> {
  pub fn new(
    catalogue: &'a FunctionCatalogue,
    resolution: usize,
    default_function: usize,
  ) -> Result<Self, GraphError> {
    // `resolution^2` has to fit in a `usize` so the whole grid is addressable
    let point_count = match resolution.checked_mul(resolution) {
      Some(point_count) if resolution >= 1 => point_count,
      _ => {
        return Err(GraphError::InvalidResolution {
          resolution: i64::try_from(resolution).unwrap_or(i64::MAX),
        })
      }
    };
    let label = catalogue.label_of(default_function)?;

    info!(
      "Initialized graph with resolution {resolution} ({point_count} points), function: {label}"
    );
    Ok(GridSampler {
      catalogue,
      resolution,
      point_count,
      active_function: default_function,
    })
  }

  pub fn catalogue(&self) -> &'a FunctionCatalogue {
    self.catalogue
  }

  pub fn resolution(&self) -> usize {
    self.resolution
  }

  pub fn point_count(&self) -> usize {
    self.point_count
  }

  /// Uniform scale for each point so that neighbors just touch.  Equal to the grid step.
  pub fn point_scale(&self) -> f32 {
    2. / self.resolution as f32
  }

  pub fn active_function(&self) -> usize {
    self.active_function
  }

  pub fn active_label(&self) -> &'static str {
    self.catalogue.entries()[self.active_function].label
  }

  pub fn set_active_function(&mut self, index: usize) -> Result<(), GraphError> {
    let label = self.catalogue.label_of(index)?;
    debug!("Switching graph function to {label}");
    self.active_function = index;
    Ok(())
  }

  /// Advances to the next function, wrapping back to the first one after the last.  Returns the
  /// new active index.
  pub fn cycle_active_function(&mut self) -> usize {
    self.active_function = (self.active_function + 1) % self.catalogue.count();
    debug!("Cycled graph function to {}", self.active_label());
    self.active_function
  }

  /// Clears `out` and fills it with one position per grid point in z-major order.
  pub fn sample_into(&self, t: f32, out: &mut Vec<Vec3>) {
    let entry = &self.catalogue.entries()[self.active_function];
    let point_count = self.point_count();

    out.clear();
    out.reserve(point_count);
    for ix in 0..point_count {
      let (u, v) = grid_coord(self.resolution, ix);
      out.push(self.catalogue.eval_entry(entry, u, v, t));
    }
  }

  pub fn sample(&self, t: f32) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(self.point_count());
    self.sample_into(t, &mut positions);
    positions
  }
}
