//! Makes available common structures needed to run a constitutive update
//!
//! You may write `use uniax::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analytical::ElastPlastUniaxial;
pub use crate::base::{Config, ParamHardening, ParamUniaxial};
pub use crate::material::{Elastoplastic1D, Hardening, LoadingPath, LocalState, UpdateHistory, Updater};
pub use crate::StrError;
