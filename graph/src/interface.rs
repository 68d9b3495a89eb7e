use log::error;
use wasm_bindgen::prelude::*;

use crate::{FunctionCatalogue, GraphParams, GridSampler, Vec3};

static mut DID_INIT: bool = false;

fn maybe_init() {
  unsafe {
    if DID_INIT {
      return;
    }
    DID_INIT = true;
  }

  console_error_panic_hook::set_once();
  wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

pub struct GraphCtx {
  pub sampler: GridSampler<'static>,
  pub positions: Vec<Vec3>,
}

impl GraphCtx {
  fn new(sampler: GridSampler<'static>) -> Self {
    let positions = Vec::with_capacity(sampler.point_count());
    GraphCtx { sampler, positions }
  }
}

fn into_ctx_ptr(sampler: Result<GridSampler<'static>, crate::GraphError>) -> *mut GraphCtx {
  match sampler {
    Ok(sampler) => Box::into_raw(Box::new(GraphCtx::new(sampler))),
    Err(err) => {
      error!("Failed to initialize graph: {err}");
      std::ptr::null_mut()
    }
  }
}

// Init returns null for invalid input, so every export has to tolerate a null ctx.
fn ctx_ref<'a>(ctx: *const GraphCtx) -> Option<&'a GraphCtx> {
  let ctx = unsafe { ctx.as_ref() };
  if ctx.is_none() {
    error!("Graph context is null; was `graph_init` rejected?");
  }
  ctx
}

fn ctx_mut<'a>(ctx: *mut GraphCtx) -> Option<&'a mut GraphCtx> {
  let ctx = unsafe { ctx.as_mut() };
  if ctx.is_none() {
    error!("Graph context is null; was `graph_init` rejected?");
  }
  ctx
}

/// Returns null if `resolution` or `default_function` are invalid.
#[wasm_bindgen]
pub fn graph_init(resolution: usize, default_function: usize) -> *mut GraphCtx {
  maybe_init();

  into_ctx_ptr(GridSampler::new(
    FunctionCatalogue::shared(),
    resolution,
    default_function,
  ))
}

/// Returns null if the params are malformed or invalid.
#[wasm_bindgen]
pub fn graph_init_from_params(params: &str) -> *mut GraphCtx {
  maybe_init();

  let sampler = GraphParams::from_json(params)
    .and_then(|params| params.build(FunctionCatalogue::shared()));
  into_ctx_ptr(sampler)
}

#[wasm_bindgen]
pub fn graph_free(ctx: *mut GraphCtx) {
  if ctx.is_null() {
    return;
  }
  drop(unsafe { Box::from_raw(ctx) });
}

#[wasm_bindgen]
pub fn graph_get_function_count() -> usize {
  FunctionCatalogue::shared().count()
}

/// JSON-encoded array of function labels in index order
#[wasm_bindgen]
pub fn graph_get_function_labels() -> String {
  FunctionCatalogue::shared().serialize_labels()
}

/// Returns `false` and leaves the selection untouched if `index` is out of range.
#[wasm_bindgen]
pub fn graph_set_active_function(ctx: *mut GraphCtx, index: i32) -> bool {
  let Some(ctx) = ctx_mut(ctx) else {
    return false;
  };
  let res = FunctionCatalogue::shared()
    .check_index(index as i64)
    .and_then(|index| ctx.sampler.set_active_function(index));
  match res {
    Ok(()) => true,
    Err(err) => {
      error!("{err}");
      false
    }
  }
}

#[wasm_bindgen]
pub fn graph_cycle_active_function(ctx: *mut GraphCtx) -> usize {
  let Some(ctx) = ctx_mut(ctx) else {
    return 0;
  };
  ctx.sampler.cycle_active_function()
}

#[wasm_bindgen]
pub fn graph_get_active_function(ctx: *const GraphCtx) -> usize {
  let Some(ctx) = ctx_ref(ctx) else {
    return 0;
  };
  ctx.sampler.active_function()
}

#[wasm_bindgen]
pub fn graph_get_point_scale(ctx: *const GraphCtx) -> f32 {
  let Some(ctx) = ctx_ref(ctx) else {
    return 0.;
  };
  ctx.sampler.point_scale()
}

/// Resamples the grid at time `t` and returns the positions flattened as `[x0, y0, z0, x1, ...]`.
#[wasm_bindgen]
pub fn graph_sample(ctx: *mut GraphCtx, t: f32) -> Vec<f32> {
  let Some(ctx) = ctx_mut(ctx) else {
    return Vec::new();
  };
  ctx.sampler.sample_into(t, &mut ctx.positions);

  let positions = unsafe {
    std::slice::from_raw_parts(
      ctx.positions.as_ptr() as *const f32,
      ctx.positions.len() * 3,
    )
  };
  positions.to_owned()
}
