use std::sync::OnceLock;

use nanoserde::SerJson;

use crate::{constants::MemoizedConstants, functions, GraphError, Vec3};

pub type GraphFunction = fn(&MemoizedConstants, f32, f32, f32) -> Vec3;

pub struct FunctionEntry {
  pub label: &'static str,
  pub eval: GraphFunction,
}

/// The single source of truth for function order and labels.  Host-side pickers index into this
/// directly, so entries must only ever be appended.
const FUNCTIONS: &[FunctionEntry] = &[
  FunctionEntry {
    label: "Sine",
    eval: |_, u, v, t| functions::sine(u, v, t),
  },
  FunctionEntry {
    label: "Sine 2D",
    eval: |_, u, v, t| functions::sine_2d(u, v, t),
  },
  FunctionEntry {
    label: "Multi Sine",
    eval: |_, u, v, t| functions::multi_sine(u, v, t),
  },
  FunctionEntry {
    label: "Multi Sine 2D",
    eval: |_, u, v, t| functions::multi_sine_2d(u, v, t),
  },
  FunctionEntry {
    label: "Ripple",
    eval: |_, u, v, t| functions::ripple(u, v, t),
  },
  FunctionEntry {
    label: "Cylinder",
    eval: |_, u, v, t| functions::cylinder(u, v, t),
  },
  FunctionEntry {
    label: "Sphere",
    eval: |_, u, v, t| functions::sphere(u, v, t),
  },
  FunctionEntry {
    label: "Torus",
    eval: |_, u, v, t| functions::torus(u, v, t),
  },
  FunctionEntry {
    label: "Swan",
    eval: |constants, u, v, t| functions::swan(u, v, t, constants.swan_c.get()),
  },
  FunctionEntry {
    label: "Circular Swan",
    eval: |constants, u, v, t| functions::circular_swan(u, v, t, constants.swan_c.get()),
  },
];

static SHARED_CATALOGUE: OnceLock<FunctionCatalogue> = OnceLock::new();

/// Fixed, ordered set of selectable graph functions along with the memoized constants they
/// depend on.
#[derive(Debug)]
pub struct FunctionCatalogue {
  entries: &'static [FunctionEntry],
  constants: MemoizedConstants,
}

impl std::fmt::Debug for FunctionEntry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FunctionEntry")
      .field("label", &self.label)
      .finish()
  }
}

impl Default for FunctionCatalogue {
  fn default() -> Self {
    Self::new()
  }
}

impl FunctionCatalogue {
  pub const fn new() -> Self {
    FunctionCatalogue {
      entries: FUNCTIONS,
      constants: MemoizedConstants::new(),
    }
  }

  /// Process-wide catalogue for callers that need a `'static` borrow.
  pub fn shared() -> &'static FunctionCatalogue {
    SHARED_CATALOGUE.get_or_init(FunctionCatalogue::new)
  }

  pub(crate) fn entries(&self) -> &'static [FunctionEntry] {
    self.entries
  }

  #[inline(always)]
  pub fn count(&self) -> usize {
    self.entries.len()
  }

  pub fn get(&self, index: usize) -> Result<&FunctionEntry, GraphError> {
    self.entries.get(index).ok_or(GraphError::IndexOutOfRange {
      index: index as i64,
      count: self.count(),
    })
  }

  /// Converts a signed index coming from the host into a valid catalogue index.
  pub fn check_index(&self, index: i64) -> Result<usize, GraphError> {
    if index < 0 || index as u64 >= self.count() as u64 {
      return Err(GraphError::IndexOutOfRange {
        index,
        count: self.count(),
      });
    }
    Ok(index as usize)
  }

  pub fn label_of(&self, index: usize) -> Result<&'static str, GraphError> {
    self.get(index).map(|entry| entry.label)
  }

  pub fn labels(&self) -> impl Iterator<Item = &'static str> {
    self.entries.iter().map(|entry| entry.label)
  }

  pub fn index_of(&self, label: &str) -> Result<usize, GraphError> {
    self
      .entries
      .iter()
      .position(|entry| entry.label == label)
      .ok_or_else(|| GraphError::UnknownFunction(label.to_owned()))
  }

  pub fn evaluate(&self, index: usize, u: f32, v: f32, t: f32) -> Result<Vec3, GraphError> {
    let entry = self.get(index)?;
    Ok(self.eval_entry(entry, u, v, t))
  }

  #[inline(always)]
  pub(crate) fn eval_entry(&self, entry: &FunctionEntry, u: f32, v: f32, t: f32) -> Vec3 {
    (entry.eval)(&self.constants, u, v, t)
  }

  pub fn constants(&self) -> &MemoizedConstants {
    &self.constants
  }

  pub fn invalidate_constants(&mut self) {
    self.constants.invalidate_all();
  }

  /// JSON array of function labels in index order, for populating a function picker.
  pub fn serialize_labels(&self) -> String {
    let labels: Vec<String> = self.labels().map(String::from).collect();
    SerJson::serialize_json(&labels)
  }
}
