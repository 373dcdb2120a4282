use std::fmt;

/// Defines the smallest allowed tolerance (Config)
pub const CONFIG_MIN_TOL: f64 = 1e-15;

/// Holds the numeric controls for the return-mapping iterations
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Absolute tolerance for the yield-function residual
    pub fun_tol: f64,

    /// Absolute tolerance for the Newton-Raphson step on the plastic multiplier
    pub step_tol: f64,

    /// Maximum number of Newton-Raphson iterations
    pub n_max_iterations: usize,

    /// Verbose mode during iterations
    pub verbose_iterations: bool,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            fun_tol: 1e-12,
            step_tol: 1e-12,
            n_max_iterations: 100,
            verbose_iterations: false,
        }
    }

    /// Sets the absolute tolerance for the yield-function residual
    pub fn set_fun_tol(&mut self, value: f64) -> &mut Self {
        self.fun_tol = value;
        self
    }

    /// Sets the absolute tolerance for the Newton-Raphson step
    pub fn set_step_tol(&mut self, value: f64) -> &mut Self {
        self.step_tol = value;
        self
    }

    /// Sets the maximum number of Newton-Raphson iterations
    pub fn set_n_max_iterations(&mut self, value: usize) -> &mut Self {
        self.n_max_iterations = value;
        self
    }

    /// Enables or disables the verbose mode during iterations
    pub fn set_verbose_iterations(&mut self, flag: bool) -> &mut Self {
        self.verbose_iterations = flag;
        self
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.fun_tol < CONFIG_MIN_TOL {
            return Some(format!(
                "fun_tol = {:?} is incorrect; it must be ≥ {:e}",
                self.fun_tol, CONFIG_MIN_TOL
            ));
        }
        if self.step_tol < CONFIG_MIN_TOL {
            return Some(format!(
                "step_tol = {:?} is incorrect; it must be ≥ {:e}",
                self.step_tol, CONFIG_MIN_TOL
            ));
        }
        if self.n_max_iterations < 1 {
            return Some(format!(
                "n_max_iterations = {} is incorrect; it must be ≥ 1",
                self.n_max_iterations
            ));
        }
        None
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Numeric controls\n").unwrap();
        write!(f, "================\n").unwrap();
        write!(f, "fun_tol = {:?}\n", self.fun_tol).unwrap();
        write!(f, "step_tol = {:?}\n", self.step_tol).unwrap();
        write!(f, "n_max_iterations = {:?}\n", self.n_max_iterations).unwrap();
        write!(f, "verbose_iterations = {:?}\n", self.verbose_iterations).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
