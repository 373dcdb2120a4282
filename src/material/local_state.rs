use serde::{Deserialize, Serialize};

/// Holds the local state of a uniaxial material point
///
/// The internal variables (`peq` and `eps_plastic`) evolve only during
/// plastic updates; `peq` is non-negative and non-decreasing over any
/// loading history (isotropic hardening).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalState {
    /// Holds the current (axial) stress σ
    pub stress: f64,

    /// Holds the current total strain ε
    pub strain: f64,

    /// Holds the plastic strain εᵖ (signed; tracks the loading direction)
    pub eps_plastic: f64,

    /// Holds the accumulated equivalent plastic strain
    pub peq: f64,

    /// Holds the elastic (vs elastoplastic) flag for the last update
    pub elastic: bool,

    /// Holds the plastic multiplier Δλ computed by the last update
    ///
    /// On a convergence failure, this value holds the last Newton iterate.
    pub algo_lambda: f64,

    /// Holds the yield-function residual left by the last update
    ///
    /// On a convergence failure, this value holds the last residual.
    pub algo_residual: f64,
}

impl LocalState {
    /// Allocates a new instance corresponding to the virgin (zero) state
    pub fn new() -> Self {
        LocalState {
            stress: 0.0,
            strain: 0.0,
            eps_plastic: 0.0,
            peq: 0.0,
            elastic: true,
            algo_lambda: 0.0,
            algo_residual: 0.0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
