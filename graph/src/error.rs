use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
pub enum GraphError {
  /// Grid resolution must be at least 1.
  InvalidResolution { resolution: i64 },
  /// Function index outside of `[0, count)`.
  IndexOutOfRange { index: i64, count: usize },
  UnknownFunction(String),
  InvalidParams(String),
}

impl Display for GraphError {
  #[cold]
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      GraphError::InvalidResolution { resolution } => {
        write!(
          f,
          "Invalid grid resolution; expected >= 1 with resolution^2 fitting in usize, found: \
           {resolution}"
        )
      }
      GraphError::IndexOutOfRange { index, count } => write!(
        f,
        "Function index out of range; expected 0 <= index < {count}, found: {index}"
      ),
      GraphError::UnknownFunction(label) => {
        write!(f, "No function registered with label \"{label}\"")
      }
      GraphError::InvalidParams(msg) => write!(f, "Failed to deserialize graph params: {msg}"),
    }
  }
}

impl std::error::Error for GraphError {}
