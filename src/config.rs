use crate::WeightError;

/// Number of objectives used when none is given.
pub const DEFAULT_OBJECTIVES: usize = 4;
/// Number of levels per objective used when none is given.
pub const DEFAULT_DIVISIONS: usize = 5;

/// Parameters of one weight generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Vector length, one coordinate per objective.
    pub objectives: usize,
    /// Discrete levels per coordinate. The simplex is cut into
    /// `divisions - 1` unit steps.
    pub divisions: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            objectives: DEFAULT_OBJECTIVES,
            divisions: DEFAULT_DIVISIONS,
        }
    }
}

impl GeneratorConfig {
    pub fn new(objectives: usize, divisions: usize) -> Self {
        Self {
            objectives,
            divisions,
        }
    }

    /// Integer total every retained candidate sums to.
    pub fn steps(&self) -> usize {
        self.divisions.saturating_sub(1)
    }

    /// Number of candidates the odometer visits, `divisions ^ objectives`.
    pub fn candidate_space(&self) -> Option<u64> {
        let base = u64::try_from(self.divisions).ok()?;
        let exp = u32::try_from(self.objectives).ok()?;
        base.checked_pow(exp)
    }

    /// Reject configurations that would divide by zero, produce empty
    /// vectors or never finish enumerating.
    pub fn validate(&self) -> Result<(), WeightError> {
        if self.objectives == 0 {
            return Err(WeightError::Config(
                "objectives must be at least 1".to_string(),
            ));
        }
        if self.divisions < 2 {
            return Err(WeightError::Config(format!(
                "divisions must be at least 2 (got {}), one division leaves nothing to normalize by",
                self.divisions
            )));
        }
        if self.candidate_space().is_none() {
            return Err(WeightError::Config(format!(
                "{} divisions over {} objectives overflows the enumeration space",
                self.divisions, self.objectives
            )));
        }
        Ok(())
    }
}
