#![doc = include_str!("../README.md")]

pub use crate::assembly::{build_cone_track, build_ring_track};
pub use crate::error::Error;
pub use crate::types::*;

mod assembly;
pub mod bearing;
mod cone;
mod error;
pub mod ring;
mod tangency;
mod types;
