//! Implements closed-form solutions for verifying the constitutive update

mod elast_plast_uniaxial;
pub use crate::analytical::elast_plast_uniaxial::*;
