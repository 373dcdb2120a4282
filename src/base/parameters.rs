use serde::{Deserialize, Serialize};

/// Holds parameters for isotropic hardening laws
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamHardening {
    /// Linear hardening
    ///
    /// The yield stress grows linearly with the accumulated plastic strain:
    ///
    /// ```text
    /// z(peq) = yield_init + hh · peq
    /// ```
    Linear {
        /// Initial yield stress
        yield_init: f64,

        /// Hardening modulus
        hh: f64,
    },

    /// Voce (saturating exponential) hardening
    ///
    /// ```text
    /// z(peq) = s0 + r0 · peq + r_inf · (1 - exp(-b · peq))
    /// ```
    Voce {
        /// Initial yield stress
        s0: f64,

        /// Linear hardening rate
        r0: f64,

        /// Saturation stress
        r_inf: f64,

        /// Saturation rate
        b: f64,
    },
}

/// Holds material parameters for the uniaxial elastoplastic model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamUniaxial {
    /// Elastic (Young's) modulus
    pub young: f64,

    /// Hardening law parameters
    pub hardening: ParamHardening,
}

impl ParamHardening {
    /// Returns the initial yield stress
    pub fn yield_init(&self) -> f64 {
        match self {
            ParamHardening::Linear { yield_init, .. } => *yield_init,
            ParamHardening::Voce { s0, .. } => *s0,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        match self {
            ParamHardening::Linear { yield_init, .. } => {
                if *yield_init <= 0.0 {
                    return Some(format!(
                        "yield_init = {:?} is incorrect; it must be > 0.0",
                        yield_init
                    ));
                }
            }
            ParamHardening::Voce { s0, r_inf, b, .. } => {
                if *s0 <= 0.0 {
                    return Some(format!("s0 = {:?} is incorrect; it must be > 0.0", s0));
                }
                if *r_inf < 0.0 {
                    return Some(format!("r_inf = {:?} is incorrect; it must be ≥ 0.0", r_inf));
                }
                if *b < 0.0 {
                    return Some(format!("b = {:?} is incorrect; it must be ≥ 0.0", b));
                }
            }
        }
        None
    }
}

impl ParamUniaxial {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.young <= 0.0 {
            return Some(format!("young = {:?} is incorrect; it must be > 0.0", self.young));
        }
        self.hardening.validate()
    }

    /// Returns sample parameters for a steel with linear hardening
    pub fn sample_steel_linear() -> Self {
        ParamUniaxial {
            young: 200e3,
            hardening: ParamHardening::Linear {
                yield_init: 425.0,
                hh: 5000.0,
            },
        }
    }

    /// Returns sample parameters for a steel with Voce hardening
    pub fn sample_steel_voce() -> Self {
        ParamUniaxial {
            young: 200e3,
            hardening: ParamHardening::Voce {
                s0: 300.0,
                r0: 5000.0,
                r_inf: 125.0,
                b: 1000.0,
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ParamHardening, ParamUniaxial};

    #[test]
    fn sample_params_are_consistent() {
        let param = ParamUniaxial::sample_steel_linear();
        assert_eq!(param.validate(), None);
        assert_eq!(param.hardening.yield_init(), 425.0);

        let param = ParamUniaxial::sample_steel_voce();
        assert_eq!(param.validate(), None);
        assert_eq!(param.hardening.yield_init(), 300.0);
    }

    #[test]
    fn validate_captures_incorrect_data() {
        let mut param = ParamUniaxial::sample_steel_linear();
        param.young = 0.0;
        assert_eq!(
            param.validate(),
            Some("young = 0.0 is incorrect; it must be > 0.0".to_string())
        );

        let hardening = ParamHardening::Linear {
            yield_init: -425.0,
            hh: 5000.0,
        };
        assert_eq!(
            hardening.validate(),
            Some("yield_init = -425.0 is incorrect; it must be > 0.0".to_string())
        );

        let hardening = ParamHardening::Voce {
            s0: 0.0,
            r0: 5000.0,
            r_inf: 125.0,
            b: 1000.0,
        };
        assert_eq!(hardening.validate(), Some("s0 = 0.0 is incorrect; it must be > 0.0".to_string()));

        let hardening = ParamHardening::Voce {
            s0: 300.0,
            r0: 5000.0,
            r_inf: -1.0,
            b: 1000.0,
        };
        assert_eq!(
            hardening.validate(),
            Some("r_inf = -1.0 is incorrect; it must be ≥ 0.0".to_string())
        );

        let hardening = ParamHardening::Voce {
            s0: 300.0,
            r0: 5000.0,
            r_inf: 125.0,
            b: -1000.0,
        };
        assert_eq!(
            hardening.validate(),
            Some("b = -1000.0 is incorrect; it must be ≥ 0.0".to_string())
        );
    }

    #[test]
    fn serde_works() {
        let json = r#"{
            "young": 200000.0,
            "hardening": { "Voce": { "s0": 300.0, "r0": 5000.0, "r_inf": 125.0, "b": 1000.0 } }
        }"#;
        let param: ParamUniaxial = serde_json::from_str(json).unwrap();
        assert_eq!(param, ParamUniaxial::sample_steel_voce());
        let text = serde_json::to_string(&param).unwrap();
        let back: ParamUniaxial = serde_json::from_str(&text).unwrap();
        assert_eq!(back, param);
    }
}
