//! Strength-curve formulas for e1RM estimation and rep-max projection.
//!
//! Every formula maps an observed set (weight, reps) to an estimated 1RM and
//! has an algebraic inverse that projects the weight liftable for a target rep
//! count from a known 1RM.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormulaError;

/// Repetition count at which the Brzycki denominator `37 - r` reaches zero.
const BRZYCKI_SINGULAR_REPS: u32 = 37;

/// Lombardi exponent.
const LOMBARDI_EXPONENT: f64 = 0.10;

/// Mayhew coefficients: 1RM = 100w / (A + B × e^(C × r)).
mod mayhew {
    pub const A: f64 = 52.2;
    pub const B: f64 = 41.9;
    pub const C: f64 = -0.055;
}

/// Formulas known to the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// The lifted weight is taken as the 1RM.
    None,
    Epley,
    Brzycki,
    Lombardi,
    Mayhew,
}

impl Formula {
    /// Returns all formula variants.
    pub fn all() -> &'static [Formula] {
        &[
            Formula::None,
            Formula::Epley,
            Formula::Brzycki,
            Formula::Lombardi,
            Formula::Mayhew,
        ]
    }

    /// Returns the lowercase key used in files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Formula::None => "none",
            Formula::Epley => "epley",
            Formula::Brzycki => "brzycki",
            Formula::Lombardi => "lombardi",
            Formula::Mayhew => "mayhew",
        }
    }

    /// Returns the display name for the formula.
    pub fn display_name(&self) -> &'static str {
        match self {
            Formula::None => "None",
            Formula::Epley => "Epley",
            Formula::Brzycki => "Brzycki",
            Formula::Lombardi => "Lombardi",
            Formula::Mayhew => "Mayhew",
        }
    }

    /// Estimates 1RM from a set of `reps` repetitions at `weight`.
    ///
    /// For reps == 1, returns the weight directly regardless of formula.
    ///
    /// # Errors
    /// `InvalidArgument` for non-positive weight or zero reps,
    /// `DomainError` for Brzycki at 37 reps or more.
    pub fn one_rm(&self, weight: f64, reps: u32) -> Result<f64, FormulaError> {
        validate_weight(weight)?;
        validate_reps(reps)?;

        if reps == 1 {
            return Ok(weight);
        }

        let r = reps as f64;
        let w = weight;

        let one_rm = match self {
            Formula::None => w,
            // Epley: w × (1 + r/30)
            Formula::Epley => w * (1.0 + r / 30.0),
            // Brzycki: w × 36 / (37 - r)
            Formula::Brzycki => {
                self.guard_brzycki(reps)?;
                w * (36.0 / (37.0 - r))
            }
            // Lombardi: w × r^0.10
            Formula::Lombardi => w * r.powf(LOMBARDI_EXPONENT),
            // Mayhew: 100w / (52.2 + 41.9 × e^(-0.055r))
            Formula::Mayhew => w * (100.0 / mayhew_percentage(r)),
        };

        ensure_finite(one_rm, weight, reps)
    }

    /// Projects the weight liftable for `reps` repetitions given a known 1RM.
    ///
    /// This is the algebraic inverse of [`Formula::one_rm`]; for reps == 1 the
    /// 1RM is returned unchanged.
    pub fn weight_at(&self, one_rm: f64, reps: u32) -> Result<f64, FormulaError> {
        validate_weight(one_rm)?;
        validate_reps(reps)?;

        if reps == 1 {
            return Ok(one_rm);
        }

        let r = reps as f64;

        let weight = match self {
            Formula::None => one_rm,
            Formula::Epley => one_rm / (1.0 + r / 30.0),
            Formula::Brzycki => {
                self.guard_brzycki(reps)?;
                one_rm * ((37.0 - r) / 36.0)
            }
            Formula::Lombardi => one_rm / r.powf(LOMBARDI_EXPONENT),
            Formula::Mayhew => one_rm * (mayhew_percentage(r) / 100.0),
        };

        ensure_finite(weight, one_rm, reps)
    }

    fn guard_brzycki(&self, reps: u32) -> Result<(), FormulaError> {
        if reps >= BRZYCKI_SINGULAR_REPS {
            return Err(FormulaError::DomainError {
                formula: self.display_name(),
                reps,
            });
        }
        Ok(())
    }
}

/// Percentage of 1RM liftable for `r` reps under Mayhew.
fn mayhew_percentage(r: f64) -> f64 {
    mayhew::A + mayhew::B * (mayhew::C * r).exp()
}

/// Rejects results that overflowed for inputs near `f64::MAX`.
fn ensure_finite(result: f64, weight: f64, reps: u32) -> Result<f64, FormulaError> {
    if !result.is_finite() {
        return Err(FormulaError::InvalidArgument(format!(
            "weight {} at {} repetitions is out of range",
            weight, reps
        )));
    }
    Ok(result)
}

fn validate_weight(weight: f64) -> Result<(), FormulaError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(FormulaError::bad_weight(weight));
    }
    Ok(())
}

fn validate_reps(reps: u32) -> Result<(), FormulaError> {
    if reps == 0 {
        return Err(FormulaError::bad_reps(reps));
    }
    Ok(())
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Formula::all()
            .iter()
            .copied()
            .find(|f| f.key() == key)
            .ok_or_else(|| FormulaError::InvalidArgument(format!("unknown formula: {}", s)))
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Helper to check floating point equality with tolerance
    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_single_rep_is_the_weight() {
        for formula in Formula::all() {
            assert_eq!(formula.one_rm(100.0, 1).unwrap(), 100.0);
            assert_eq!(formula.weight_at(142.5, 1).unwrap(), 142.5);
        }
    }

    #[test]
    fn test_epley_five_reps() {
        // 100 × (1 + 5/30) = 116.67
        let e1rm = Formula::Epley.one_rm(100.0, 5).unwrap();
        assert!(approx_eq(e1rm, 116.667, 0.01));
    }

    #[test]
    fn test_brzycki_ten_reps() {
        // 100 × 36 / 27 = 133.33
        let e1rm = Formula::Brzycki.one_rm(100.0, 10).unwrap();
        assert!(approx_eq(e1rm, 133.333, 0.01));
    }

    #[test]
    fn test_lombardi_ten_reps() {
        // 100 × 10^0.1 = 125.89
        let e1rm = Formula::Lombardi.one_rm(100.0, 10).unwrap();
        assert!(approx_eq(e1rm, 125.893, 0.01));
    }

    #[test]
    fn test_mayhew_ten_reps() {
        // 100 × 100 / (52.2 + 41.9 × e^-0.55) = 100 × 100 / 76.374 = 130.93
        let e1rm = Formula::Mayhew.one_rm(100.0, 10).unwrap();
        assert!(approx_eq(e1rm, 130.93, 0.05));
    }

    #[test]
    fn test_none_passes_weight_through() {
        assert_eq!(Formula::None.one_rm(80.0, 8).unwrap(), 80.0);
        assert_eq!(Formula::None.weight_at(80.0, 8).unwrap(), 80.0);
    }

    #[test]
    fn test_brzycki_singular_at_37_reps() {
        assert!(Formula::Brzycki.one_rm(100.0, 36).is_ok());
        assert_eq!(
            Formula::Brzycki.one_rm(100.0, 37),
            Err(FormulaError::DomainError {
                formula: "Brzycki",
                reps: 37
            })
        );
        assert!(matches!(
            Formula::Brzycki.weight_at(100.0, 40),
            Err(FormulaError::DomainError { .. })
        ));
    }

    #[test]
    fn test_other_formulas_accept_high_reps() {
        assert!(Formula::Epley.one_rm(100.0, 50).is_ok());
        assert!(Formula::Lombardi.one_rm(100.0, 50).is_ok());
        assert!(Formula::Mayhew.one_rm(100.0, 50).is_ok());
    }

    #[test]
    fn test_invalid_weight() {
        for weight in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Formula::Epley.one_rm(weight, 5),
                Err(FormulaError::InvalidArgument(_))
            ));
        }
        assert!(Formula::Mayhew.weight_at(0.0, 5).is_err());
    }

    #[test]
    fn test_non_finite_result_rejected() {
        // 1e308 × 36 would overflow before the divide
        let e1rm = Formula::Brzycki.one_rm(1e307, 12).unwrap();
        assert!(e1rm.is_finite());

        for formula in &Formula::all()[1..] {
            assert!(matches!(
                formula.one_rm(f64::MAX, 36),
                Err(FormulaError::InvalidArgument(_))
            ));
        }
        assert!(matches!(
            Formula::Brzycki.one_rm(1e308, 36),
            Err(FormulaError::InvalidArgument(_))
        ));
        assert!(Formula::Lombardi.weight_at(f64::MAX, 2).unwrap().is_finite());
    }

    #[test]
    fn test_zero_reps() {
        assert!(matches!(
            Formula::Epley.one_rm(100.0, 0),
            Err(FormulaError::InvalidArgument(_))
        ));
        assert!(Formula::Epley.weight_at(100.0, 0).is_err());
    }

    #[test]
    fn test_formula_from_str() {
        assert_eq!(Formula::from_str("epley").unwrap(), Formula::Epley);
        assert_eq!(Formula::from_str(" Mayhew ").unwrap(), Formula::Mayhew);
        assert_eq!(Formula::from_str("NONE").unwrap(), Formula::None);
        assert!(Formula::from_str("wathan").is_err());
    }

    proptest! {
        #[test]
        fn prop_inverse_undoes_forward(
            weight in 1.0f64..500.0,
            reps in 2u32..=36,
            idx in 0usize..5,
        ) {
            let formula = Formula::all()[idx];
            let one_rm = formula.one_rm(weight, reps).unwrap();
            let back = formula.weight_at(one_rm, reps).unwrap();
            prop_assert!((back - weight).abs() < 1e-9 * weight);
        }

        #[test]
        fn prop_estimate_never_below_weight(weight in 1.0f64..500.0, reps in 1u32..=36) {
            for formula in Formula::all() {
                prop_assert!(formula.one_rm(weight, reps).unwrap() >= weight);
            }
        }
    }
}
