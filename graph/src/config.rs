use nanoserde::DeJson;

use crate::{FunctionCatalogue, GraphError, GridSampler};

/// Host-supplied settings for a graph, e.g. `{"resolution": 50, "function": "Ripple"}`.
#[derive(Clone, Debug, DeJson)]
pub struct GraphParams {
  pub resolution: usize,
  /// Label of the initially active function.  The first function is used if not set.
  pub function: Option<String>,
}

impl GraphParams {
  pub fn from_json(json: &str) -> Result<Self, GraphError> {
    GraphParams::deserialize_json(json).map_err(|err| GraphError::InvalidParams(err.to_string()))
  }

  pub fn build<'a>(&self, catalogue: &'a FunctionCatalogue) -> Result<GridSampler<'a>, GraphError> {
    let default_function = match &self.function {
      Some(label) => catalogue.index_of(label)?,
      None => 0,
    };
    GridSampler::new(catalogue, self.resolution, default_function)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_full_params() {
    let params = GraphParams::from_json(r#"{"resolution": 50, "function": "Torus"}"#).unwrap();
    assert_eq!(params.resolution, 50);
    assert_eq!(params.function.as_deref(), Some("Torus"));

    let sampler = params.build(FunctionCatalogue::shared()).unwrap();
    assert_eq!(sampler.resolution(), 50);
    assert_eq!(sampler.active_label(), "Torus");
  }

  #[test]
  fn function_defaults_to_first() {
    let params = GraphParams::from_json(r#"{"resolution": 10}"#).unwrap();
    assert!(params.function.is_none());
    let sampler = params.build(FunctionCatalogue::shared()).unwrap();
    assert_eq!(sampler.active_function(), 0);
  }

  #[test]
  fn invalid_params_rejected() {
    assert!(matches!(
      GraphParams::from_json(r#"{"function": "Sine"}"#),
      Err(GraphError::InvalidParams(_))
    ));
    assert!(matches!(
      GraphParams::from_json("not json"),
      Err(GraphError::InvalidParams(_))
    ));

    let params = GraphParams::from_json(r#"{"resolution": 0}"#).unwrap();
    assert_eq!(
      params.build(FunctionCatalogue::shared()).unwrap_err(),
      GraphError::InvalidResolution { resolution: 0 }
    );

    let params = GraphParams::from_json(r#"{"resolution": 10, "function": "Spiral"}"#).unwrap();
    assert_eq!(
      params.build(FunctionCatalogue::shared()).unwrap_err(),
      GraphError::UnknownFunction("Spiral".to_owned())
    );
  }
}
