use super::{Hardening, LocalState};
use crate::base::{Config, ParamUniaxial};
use crate::StrError;

/// Implements 1D elastoplasticity with isotropic hardening
///
/// The model is driven by the total strain at the end of each increment.
/// The yield function is
///
/// ```text
/// f = |σ| - z(peq)
/// ```
///
/// where `z(peq)` is the current yield stress given by the hardening law.
/// An elastic trial stress is predicted first:
///
/// ```text
/// σ_trial = E (ε - εᵖ)
/// ```
///
/// If `f(σ_trial) ≤ 0`, the trial state is admissible and the update is
/// purely elastic. Otherwise, the stress is mapped back onto the yield
/// surface by solving the consistency condition for the plastic
/// multiplier `Δλ ≥ 0`:
///
/// ```text
/// |σ_trial| - Δλ E - z(peq + Δλ) = 0
/// ```
///
/// The root is found with Newton-Raphson iterations; the hardening state
/// is re-evaluated at every iteration, making the scheme fully implicit.
pub struct Elastoplastic1D {
    /// Elastic (Young's) modulus
    young: f64,

    /// Hardening law z(peq)
    hardening: Hardening,

    /// Absolute tolerance for the yield-function residual
    fun_tol: f64,

    /// Absolute tolerance for the Newton-Raphson step
    step_tol: f64,

    /// Maximum number of Newton-Raphson iterations
    n_max_iterations: usize,

    /// Verbose mode during iterations
    verbose_iterations: bool,
}

impl Elastoplastic1D {
    /// Allocates a new instance
    pub fn new(config: &Config, param: &ParamUniaxial) -> Result<Self, StrError> {
        if let Some(msg) = config.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate model because config.validate() failed");
        }
        if let Some(msg) = param.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate model because param.validate() failed");
        }
        let hardening = Hardening::new(&param.hardening)?;
        Ok(Elastoplastic1D {
            young: param.young,
            hardening,
            fun_tol: config.fun_tol,
            step_tol: config.step_tol,
            n_max_iterations: config.n_max_iterations,
            verbose_iterations: config.verbose_iterations,
        })
    }

    /// Returns the elastic modulus
    pub fn young(&self) -> f64 {
        self.young
    }

    /// Calculates the yield function f at the given state
    pub fn yield_function(&self, state: &LocalState) -> f64 {
        let (z, _) = self.hardening.evaluate(state.peq);
        f64::abs(state.stress) - z
    }

    /// Updates the stress given the total strain at the end of the increment
    ///
    /// The internal variables `peq` and `eps_plastic` are updated in place.
    /// On a convergence failure, an error is returned and the last Newton
    /// iterate and residual are left in `state.algo_lambda` and
    /// `state.algo_residual` for the caller to inspect (e.g., to retry
    /// with a smaller strain increment).
    pub fn update_stress(&mut self, state: &mut LocalState, eps_total: f64) -> Result<(), StrError> {
        state.strain = eps_total;

        // elastic trial state
        let stress_trial = self.young * (eps_total - state.eps_plastic);
        let (z, mut dz_dpeq) = self.hardening.evaluate(state.peq);
        let f_trial = f64::abs(stress_trial) - z;

        // elastic update: the trial state is admissible
        if f_trial <= 0.0 {
            state.stress = stress_trial;
            state.elastic = true;
            state.algo_lambda = 0.0;
            state.algo_residual = f_trial;
            return Ok(());
        }

        // unreachable with a validated (positive) initial yield stress
        if stress_trial == 0.0 {
            return Err("trial stress is zero in the plastic branch");
        }

        // return mapping: Newton-Raphson for Δλ
        let abs_trial = f64::abs(stress_trial);
        let mut f = f_trial;
        let mut delta_lambda = 0.0;
        let mut converged = false;
        if self.verbose_iterations {
            println!("{:>5} {:>23} {:>23}", "iter", "|step|", "|f|");
        }
        for iteration in 0..self.n_max_iterations {
            // Newton update: Δλ ← Δλ - f / (df/dΔλ)
            let jacobian = -self.young - dz_dpeq;
            let step = f / jacobian;
            delta_lambda -= step;

            // re-evaluate the hardening state at the updated multiplier
            let (z_new, dz_new) = self.hardening.evaluate(state.peq + delta_lambda);
            dz_dpeq = dz_new;
            f = abs_trial - delta_lambda * self.young - z_new;

            if self.verbose_iterations {
                println!("{:>5} {:>23.15e} {:>23.15e}", iteration + 1, f64::abs(step), f64::abs(f));
            }
            if f64::abs(step) < self.step_tol || f64::abs(f) < self.fun_tol {
                if self.verbose_iterations {
                    println!("converged in {} iterations", iteration + 1);
                }
                converged = true;
                break;
            }
        }
        state.algo_lambda = delta_lambda;
        state.algo_residual = f;
        if !converged {
            return Err("Newton-Raphson did not converge in the return mapping");
        }

        // map the trial stress back onto the yield surface
        state.stress = (1.0 - delta_lambda * self.young / abs_trial) * stress_trial;
        state.peq += delta_lambda;
        state.eps_plastic += delta_lambda * stress_trial / abs_trial;
        state.elastic = false;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
