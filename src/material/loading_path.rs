use crate::StrError;

/// Generates total-strain histories for uniaxial loading programs
///
/// A path is a sequence of strain values, built segment by segment.
/// Every path starts at zero strain; segment joins are not duplicated,
/// so a ramp followed by a reversal shares the turning point.
#[derive(Clone, Debug)]
pub struct LoadingPath {
    strains: Vec<f64>,
}

impl LoadingPath {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        LoadingPath { strains: Vec::new() }
    }

    /// Returns an access to the strain values
    pub fn strains(&self) -> &[f64] {
        &self.strains
    }

    /// Appends a single strain value
    pub fn push_strain(&mut self, value: f64) -> &mut Self {
        self.strains.push(value);
        self
    }

    /// Appends a linear segment ending exactly at eps_target
    ///
    /// The segment adds `n_increments` equally spaced values, starting
    /// after the current end of the path (or after an initial zero entry,
    /// pushed automatically when the path is empty).
    pub fn segment(&mut self, eps_target: f64, n_increments: usize) -> Result<&mut Self, StrError> {
        if n_increments < 1 {
            return Err("n_increments must be ≥ 1");
        }
        if self.strains.is_empty() {
            self.strains.push(0.0);
        }
        let eps_start = *self.strains.last().unwrap();
        let delta = (eps_target - eps_start) / (n_increments as f64);
        for i in 1..n_increments {
            self.strains.push(eps_start + delta * (i as f64));
        }
        self.strains.push(eps_target); // exact endpoint
        Ok(self)
    }

    /// Generates a linear ramp from zero to eps_max
    pub fn new_linear(eps_max: f64, n_increments: usize) -> Result<Self, StrError> {
        let mut path = LoadingPath::new();
        path.segment(eps_max, n_increments)?;
        Ok(path)
    }

    /// Generates a ramp to eps_max followed by a reversal to eps_min
    pub fn new_cycle(eps_max: f64, eps_min: f64, n_increments: usize) -> Result<Self, StrError> {
        let mut path = LoadingPath::new();
        path.segment(eps_max, n_increments)?.segment(eps_min, n_increments)?;
        Ok(path)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
