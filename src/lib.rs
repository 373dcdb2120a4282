//! Uniax - Uniaxial elastoplasticity with return-mapping stress update
//!
//! This crate implements the constitutive update of a one-dimensional
//! elastoplastic material with isotropic hardening. Given a prescribed
//! total-strain history, the code computes the stress history and the
//! evolving internal state (accumulated plastic strain) by means of an
//! implicit return-mapping algorithm: an elastic trial state is predicted
//! and, if the yield condition is violated, a scalar Newton-Raphson
//! iteration finds the plastic multiplier restoring consistency with the
//! yield surface.
//!
//! The crate is organized in three layers:
//!
//! * [base] -- numeric controls ([base::Config]) and material parameters
//!   ([base::ParamUniaxial], [base::ParamHardening])
//! * [material] -- hardening laws, the local state, the elastoplastic
//!   model, and the strain-history updater
//! * [analytical] -- closed-form solutions for verification
//!
//! # Example
//!
//! ```
//! use uniax::prelude::*;
//!
//! fn main() -> Result<(), StrError> {
//!     // model with linear hardening
//!     let config = Config::new();
//!     let param = ParamUniaxial::sample_steel_linear();
//!     let model = Elastoplastic1D::new(&config, &param)?;
//!
//!     // follow a monotonic strain ramp
//!     let path = LoadingPath::new_linear(0.01, 10)?;
//!     let mut updater = Updater::new(model);
//!     let history = updater.follow_strain(path.strains())?;
//!
//!     // the material has yielded
//!     assert!(history.states.last().unwrap().peq > 0.0);
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod material;
pub mod prelude;
