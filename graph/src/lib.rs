//! Animated function graph: a fixed catalogue of parametric surface/wave functions `f(u, v, t)`
//! and a sampler that re-evaluates a grid of `resolution * resolution` points with the active one
//! every frame.
//!
//! The host owns the actual visual points; it just copies the positions produced by
//! [`GridSampler::sample`] onto them.

pub mod catalogue;
pub mod config;
pub mod constants;
pub mod error;
pub mod functions;
#[cfg(feature = "bindgen")]
pub mod interface;
pub mod sampler;

pub use self::catalogue::{FunctionCatalogue, FunctionEntry};
pub use self::config::GraphParams;
pub use self::constants::{MemoizedConstant, MemoizedConstants};
pub use self::error::GraphError;
pub use self::sampler::{grid_coord, GridSampler};

pub type Vec3 = nalgebra::Vector3<f32>;
