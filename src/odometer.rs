//! Odometer enumeration of fixed-length digit vectors.
//!
//! Candidates are visited like the readings of a mechanical odometer with
//! `objectives` wheels of `divisions` positions each: all base-`divisions`
//! numbers of `objectives` digits, in ascending order. Filtering by digit
//! sum yields the compositions of `divisions - 1` into `objectives` parts.

use crate::{GeneratorConfig, WeightError};

/// Lazy walk over every digit vector of a fixed length and base.
#[derive(Debug, Clone)]
pub struct Odometer {
    digits: Vec<usize>,
    base: usize,
    exhausted: bool,
}

impl Odometer {
    /// Start at the all-zero reading.
    pub fn new(len: usize, base: usize) -> Self {
        Self {
            digits: vec![0; len],
            base,
            exhausted: len == 0 || base == 0,
        }
    }

    /// The current reading, or `None` once the first wheel has rolled over.
    pub fn current(&self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(&self.digits)
        }
    }

    /// Increment the last wheel and carry right to left.
    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        let last = self.digits.len() - 1;
        self.digits[last] += 1;
        for pos in (1..self.digits.len()).rev() {
            if self.digits[pos] >= self.base {
                self.digits[pos] = 0;
                self.digits[pos - 1] += 1;
            }
        }
        if self.digits[0] >= self.base {
            self.exhausted = true;
        }
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let reading = self.current()?.to_vec();
        self.advance();
        Some(reading)
    }
}

/// Every candidate whose coordinates sum to `config.steps()`, in odometer
/// order.
pub fn compositions(config: &GeneratorConfig) -> Result<Vec<Vec<usize>>, WeightError> {
    compositions_with_progress(config, |_| {})
}

/// Same as [`compositions`], calling `on_visit` with the number of
/// candidates visited so far after each odometer step.
pub fn compositions_with_progress<F>(
    config: &GeneratorConfig,
    mut on_visit: F,
) -> Result<Vec<Vec<usize>>, WeightError>
where
    F: FnMut(u64),
{
    config.validate()?;
    let target = config.steps();
    let mut odometer = Odometer::new(config.objectives, config.divisions);
    let mut out = Vec::new();
    let mut visited = 0u64;

    while let Some(candidate) = odometer.current() {
        if candidate.iter().sum::<usize>() == target {
            out.push(candidate.to_vec());
        }
        visited += 1;
        on_visit(visited);
        odometer.advance();
    }

    tracing::debug!(
        visited,
        retained = out.len(),
        objectives = config.objectives,
        divisions = config.divisions,
        "odometer walk finished"
    );
    Ok(out)
}

/// Number of ways to write `total` as an ordered sum of `parts`
/// non-negative integers, `C(total + parts - 1, parts - 1)`.
///
/// Returns `None` if the count does not fit in a `u128`.
pub fn composition_count(total: usize, parts: usize) -> Option<u128> {
    if parts == 0 {
        return Some(u128::from(total == 0));
    }
    let n = total as u128 + parts as u128 - 1;
    let k = (parts as u128 - 1).min(total as u128);
    let mut acc: u128 = 1;
    for i in 1..=k {
        // acc * (n - k + i) is always divisible by i here
        acc = acc.checked_mul(n - k + i)? / i;
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn odometer_visits_every_reading_in_order() {
        let readings: Vec<Vec<usize>> = Odometer::new(2, 3).collect();
        assert_eq!(readings.len(), 9);
        assert_eq!(readings[0], vec![0, 0]);
        assert_eq!(readings[3], vec![1, 0]);
        assert_eq!(readings[8], vec![2, 2]);
        assert!(readings.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn single_wheel_counts_up() {
        let readings: Vec<Vec<usize>> = Odometer::new(1, 4).collect();
        assert_eq!(readings, vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn empty_odometer_yields_nothing() {
        assert_eq!(Odometer::new(0, 3).count(), 0);
        assert_eq!(Odometer::new(3, 0).count(), 0);
    }

    #[test]
    fn two_objectives_three_divisions() {
        let rows = compositions(&GeneratorConfig::new(2, 3)).unwrap();
        assert_eq!(rows, vec![vec![0, 2], vec![1, 1], vec![2, 0]]);
    }

    #[test]
    fn progress_sees_whole_space() {
        let cfg = GeneratorConfig::new(3, 4);
        let mut last = 0;
        compositions_with_progress(&cfg, |n| last = n).unwrap();
        assert_eq!(Some(last), cfg.candidate_space());
    }

    #[test]
    fn known_counts() {
        assert_eq!(composition_count(4, 4), Some(35));
        assert_eq!(composition_count(2, 2), Some(3));
        assert_eq!(composition_count(0, 5), Some(1));
        assert_eq!(composition_count(12, 3), Some(91));
        assert_eq!(composition_count(3, 0), Some(0));
        assert_eq!(composition_count(usize::MAX, 2), Some(usize::MAX as u128 + 1));
        assert_eq!(composition_count(usize::MAX, 1), Some(1));
        assert_eq!(composition_count(1000, 1000), None);
    }

    quickcheck! {
        fn count_symmetric_in_bars_and_stars(total: u8, parts: u8) -> bool {
            let total = total as usize % 40;
            let parts = parts as usize % 40 + 1;
            // C(t + p - 1, p - 1) == C(t + p - 1, t)
            composition_count(total, parts) == composition_count(parts - 1, total + 1)
        }

        fn count_matches_enumeration(objectives: u8, divisions: u8) -> bool {
            let cfg = GeneratorConfig::new(objectives as usize % 4 + 1, divisions as usize % 6 + 2);
            let rows = compositions(&cfg).unwrap();
            composition_count(cfg.steps(), cfg.objectives) == Some(rows.len() as u128)
        }
    }
}
