use crate::StrError;

/// Solution of the monotonic uniaxial tension problem with linear hardening
///
/// For a virgin material pulled monotonically to a total strain `ε ≥ 0`,
/// the response is linear elastic up to the yield strain `εy = Y / E` and
/// elastoplastic beyond it. Enforcing the yield condition
/// `σ = Y + H·εᵖ` together with the additive decomposition
/// `ε = σ/E + εᵖ` gives
///
/// ```text
/// εᵖ = (E ε - Y) / (E + H)
/// σ  = Y + H εᵖ
/// ```
///
/// Note that the elastoplastic tangent w.r.t. the total strain is
/// `E H / (E + H)`, not `H`.
pub struct ElastPlastUniaxial {
    young: f64,
    yield_init: f64,
    hh: f64,
    eps_yield: f64,
}

impl ElastPlastUniaxial {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `young` -- Young's modulus
    /// * `yield_init` -- initial yield stress `Y`
    /// * `hh` -- (linear) hardening modulus `H`
    pub fn new(young: f64, yield_init: f64, hh: f64) -> Result<Self, StrError> {
        if young <= 0.0 {
            return Err("young modulus must be > 0.0");
        }
        if yield_init <= 0.0 {
            return Err("yield_init must be > 0.0");
        }
        if hh < 0.0 {
            return Err("hh must be ≥ 0.0");
        }
        Ok(ElastPlastUniaxial {
            young,
            yield_init,
            hh,
            eps_yield: yield_init / young,
        })
    }

    /// Calculates the solution at the given (monotonic, non-negative) total strain
    ///
    /// Returns `(stress, eps_elastic, eps_plastic)`
    pub fn calc(&self, eps: f64) -> (f64, f64, f64) {
        if eps <= self.eps_yield {
            return (self.young * eps, eps, 0.0);
        }
        let eps_plastic = (self.young * eps - self.yield_init) / (self.young + self.hh);
        let stress = self.yield_init + self.hh * eps_plastic;
        (stress, stress / self.young, eps_plastic)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
