use super::{Elastoplastic1D, LocalState};
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds the results of following a strain history
///
/// The arrays have length `n_increments + 1`: index 0 corresponds to the
/// initial zero state and index `i + 1` to input increment `i`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateHistory {
    /// Holds the stress history
    pub stress: Vector,

    /// Holds the cumulative total-strain history
    pub strain: Vector,

    /// Holds the local state after each increment
    pub states: Vec<LocalState>,
}

/// Integrates the constitutive update over a prescribed strain history
///
/// The updater performs a strictly sequential fold: increment `i + 1`
/// depends on the internal state left by increment `i`, so the order of
/// the updates must not be changed.
pub struct Updater {
    /// Holds the elastoplastic model
    pub model: Elastoplastic1D,
}

impl Updater {
    /// Allocates a new instance
    pub fn new(model: Elastoplastic1D) -> Self {
        Updater { model }
    }

    /// Follows the strain history, threading the local state increment by increment
    ///
    /// The per-increment strain deltas are computed from the input history
    /// (the first delta is measured from zero strain) and accumulated
    /// sequentially. A convergence failure in any increment aborts the
    /// integration and bubbles up the error.
    pub fn follow_strain(&mut self, strain_history: &[f64]) -> Result<UpdateHistory, StrError> {
        let n = strain_history.len();
        let mut stress = Vector::new(n + 1);
        let mut strain = Vector::new(n + 1);
        let mut states = Vec::with_capacity(n + 1);
        let mut state = LocalState::new();
        states.push(state.clone());
        let mut eps_curr = 0.0;
        for i in 0..n {
            let delta = if i == 0 {
                strain_history[0]
            } else {
                strain_history[i] - strain_history[i - 1]
            };
            eps_curr += delta;
            self.model.update_stress(&mut state, eps_curr)?;
            stress[i + 1] = state.stress;
            strain[i + 1] = eps_curr;
            states.push(state.clone());
        }
        Ok(UpdateHistory { stress, strain, states })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
