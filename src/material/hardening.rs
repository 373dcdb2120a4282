use crate::base::ParamHardening;
use crate::StrError;

/// Specifies the essential function of isotropic hardening laws
///
/// A hardening law maps the accumulated equivalent plastic strain `peq`
/// to the current yield stress `z` and its derivative `dz/dpeq`.
/// Implementations must be pure and stateless.
pub trait HardeningTrait: Send {
    /// Evaluates the yield stress and its derivative at peq
    ///
    /// Returns `(z, dz_dpeq)`
    fn evaluate(&self, peq: f64) -> (f64, f64);
}

/// Implements linear isotropic hardening
///
/// ```text
/// z(peq) = yield_init + hh · peq
/// ```
pub struct LinearHardening {
    yield_init: f64,
    hh: f64,
}

impl LinearHardening {
    /// Allocates a new instance
    pub fn new(yield_init: f64, hh: f64) -> Self {
        LinearHardening { yield_init, hh }
    }
}

impl HardeningTrait for LinearHardening {
    fn evaluate(&self, peq: f64) -> (f64, f64) {
        (self.yield_init + self.hh * peq, self.hh)
    }
}

/// Implements Voce (saturating exponential) isotropic hardening
///
/// ```text
/// z(peq) = s0 + r0 · peq + r_inf · (1 - exp(-b · peq))
/// ```
pub struct VoceHardening {
    s0: f64,
    r0: f64,
    r_inf: f64,
    b: f64,
}

impl VoceHardening {
    /// Allocates a new instance
    pub fn new(s0: f64, r0: f64, r_inf: f64, b: f64) -> Self {
        VoceHardening { s0, r0, r_inf, b }
    }
}

impl HardeningTrait for VoceHardening {
    fn evaluate(&self, peq: f64) -> (f64, f64) {
        let e = f64::exp(-self.b * peq);
        let z = self.s0 + self.r0 * peq + self.r_inf * (1.0 - e);
        let dz_dpeq = self.r0 + self.r_inf * self.b * e;
        (z, dz_dpeq)
    }
}

/// Holds the actual hardening law implementation
pub struct Hardening {
    /// Holds the actual law implementation
    pub actual: Box<dyn HardeningTrait>,
}

impl Hardening {
    /// Allocates a new instance
    pub fn new(param: &ParamHardening) -> Result<Self, StrError> {
        if let Some(msg) = param.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate hardening law because param.validate() failed");
        }
        let actual: Box<dyn HardeningTrait> = match *param {
            ParamHardening::Linear { yield_init, hh } => Box::new(LinearHardening::new(yield_init, hh)),
            ParamHardening::Voce { s0, r0, r_inf, b } => Box::new(VoceHardening::new(s0, r0, r_inf, b)),
        };
        Ok(Hardening { actual })
    }

    /// Evaluates the yield stress and its derivative at peq
    ///
    /// Returns `(z, dz_dpeq)`
    pub fn evaluate(&self, peq: f64) -> (f64, f64) {
        self.actual.evaluate(peq)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
