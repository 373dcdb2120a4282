//! Implements the base structures: configuration and material parameters

mod config;
mod parameters;
pub use crate::base::config::*;
pub use crate::base::parameters::*;
