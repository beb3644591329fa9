use std::collections::HashSet;
use std::fmt;

use crate::odometer::compositions_with_progress;
use crate::{GeneratorConfig, WeightError};

/// Fractional digits written for every coordinate.
pub const PRECISION: usize = 8;

/// Default tolerance when checking that a row sums to one.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Uniformly spaced points on the unit simplex, one row per weight vector.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    objectives: usize,
    rows: Vec<Vec<f64>>,
}

impl WeightMatrix {
    /// Build a matrix from rows that all have `objectives` coordinates.
    pub fn from_rows(objectives: usize, rows: Vec<Vec<f64>>) -> Result<Self, WeightError> {
        if objectives == 0 {
            return Err(WeightError::Shape("matrix has no columns".to_string()));
        }
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != objectives) {
            return Err(WeightError::Shape(format!(
                "row {} has {} values, expected {}",
                idx + 1,
                row.len(),
                objectives
            )));
        }
        Ok(Self { objectives, rows })
    }

    /// Divide integer compositions of `steps` by `steps`.
    pub fn normalize(
        objectives: usize,
        steps: usize,
        compositions: &[Vec<usize>],
    ) -> Result<Self, WeightError> {
        if steps == 0 {
            return Err(WeightError::Config(
                "cannot normalize by zero steps".to_string(),
            ));
        }
        let scale = steps as f64;
        let rows = compositions
            .iter()
            .map(|c| c.iter().map(|&v| v as f64 / scale).collect())
            .collect();
        Self::from_rows(objectives, rows)
    }

    pub fn objectives(&self) -> usize {
        self.objectives
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// File name consumers look the matrix up by, `W{obj}D_{rows}.dat`.
    pub fn file_name(&self) -> String {
        file_name_for(self.objectives, self.rows.len())
    }

    /// Verify every coordinate lies in `[0, 1]`, every row sums to one
    /// within `tolerance` and no row repeats.
    pub fn check_simplex(&self, tolerance: f64) -> Result<(), WeightError> {
        let mut seen = HashSet::with_capacity(self.rows.len());
        for (idx, row) in self.rows.iter().enumerate() {
            let line = idx + 1;
            if let Some(v) = row.iter().find(|v| !(0.0..=1.0).contains(*v)) {
                return Err(WeightError::Simplex(format!(
                    "row {line} has coordinate {v} outside [0, 1]"
                )));
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > tolerance {
                return Err(WeightError::Simplex(format!(
                    "row {line} sums to {sum:.8}, expected 1"
                )));
            }
            let key: Vec<u64> = row.iter().map(|v| (v + 0.0).to_bits()).collect();
            if !seen.insert(key) {
                return Err(WeightError::Simplex(format!("row {line} is a duplicate")));
            }
        }
        Ok(())
    }
}

impl fmt::Display for WeightMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let mut first = true;
            for v in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{v:.prec$}", prec = PRECISION)?;
                first = false;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

pub fn file_name_for(objectives: usize, rows: usize) -> String {
    format!("W{objectives}D_{rows}.dat")
}

/// Enumerate and normalize all weight vectors for `config`.
pub fn generate(config: &GeneratorConfig) -> Result<WeightMatrix, WeightError> {
    generate_with_progress(config, |_| {})
}

/// [`generate`] reporting the number of visited candidates to `on_visit`.
pub fn generate_with_progress<F>(
    config: &GeneratorConfig,
    on_visit: F,
) -> Result<WeightMatrix, WeightError>
where
    F: FnMut(u64),
{
    let compositions = compositions_with_progress(config, on_visit)?;
    let matrix = WeightMatrix::normalize(config.objectives, config.steps(), &compositions)?;
    tracing::info!(
        objectives = config.objectives,
        divisions = config.divisions,
        rows = matrix.len(),
        "generated weight vectors"
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_objectives_two_divisions() {
        let m = generate(&GeneratorConfig::new(3, 2)).unwrap();
        assert_eq!(
            m.rows(),
            &[
                vec![0.0, 0.0, 1.0],
                vec![0.0, 1.0, 0.0],
                vec![1.0, 0.0, 0.0]
            ]
        );
        assert_eq!(m.file_name(), "W3D_3.dat");
    }

    #[test]
    fn display_uses_fixed_precision() {
        let m = generate(&GeneratorConfig::new(2, 3)).unwrap();
        assert_eq!(
            m.to_string(),
            "0.00000000 1.00000000\n0.50000000 0.50000000\n1.00000000 0.00000000\n"
        );
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = WeightMatrix::from_rows(2, vec![vec![0.5, 0.5], vec![1.0]]).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn zero_steps_never_normalized() {
        let err = WeightMatrix::normalize(3, 0, &[vec![0, 0, 0]]).unwrap_err();
        assert!(matches!(err, WeightError::Config(_)));
    }

    #[test]
    fn simplex_check_flags_bad_rows() {
        let off = WeightMatrix::from_rows(2, vec![vec![0.5, 0.6]]).unwrap();
        assert!(off.check_simplex(SUM_TOLERANCE).is_err());

        let dup = WeightMatrix::from_rows(2, vec![vec![0.5, 0.5], vec![0.5, 0.5]]).unwrap();
        let err = dup.check_simplex(SUM_TOLERANCE).unwrap_err();
        assert!(err.to_string().contains("duplicate"));

        let neg = WeightMatrix::from_rows(2, vec![vec![-0.5, 1.5]]).unwrap();
        assert!(neg.check_simplex(SUM_TOLERANCE).is_err());
    }

    #[test]
    fn signed_zero_rows_are_duplicates() {
        let m = WeightMatrix::from_rows(2, vec![vec![-0.0, 1.0], vec![0.0, 1.0]]).unwrap();
        let err = m.check_simplex(SUM_TOLERANCE).unwrap_err();
        assert!(err.to_string().contains("row 2 is a duplicate"));
    }

    #[test]
    fn generated_matrix_is_on_simplex() {
        let m = generate(&GeneratorConfig::default()).unwrap();
        assert_eq!(m.len(), 35);
        m.check_simplex(SUM_TOLERANCE).unwrap();
    }
}
