//! Implements the material models: hardening laws, local state, the
//! elastoplastic model, and the strain-history updater

mod elastoplastic;
mod hardening;
mod loading_path;
mod local_state;
mod updater;
pub use crate::material::elastoplastic::*;
pub use crate::material::hardening::*;
pub use crate::material::loading_path::*;
pub use crate::material::local_state::*;
pub use crate::material::updater::*;
