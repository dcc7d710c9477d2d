use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Estimation formulas for a one-rep max.
///
/// - Epley: `w × (1 + r/30)`
/// - Brzycki: `w × 36 / (37 - r)`
/// - Lander: `w × 100 / (101.3 - 2.67 × r)`
///
/// A single rep is already a max, so every formula returns the weight itself for `r = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum OneRepMaxFormula {
    #[default]
    Epley,
    Brzycki,
    Lander,
}

impl OneRepMaxFormula {
    /// Returns `None` when the formula has no meaningful value for `reps`
    /// (zero reps, or a denominator at or below zero).
    pub fn estimate(&self, weight: Decimal, reps: u32) -> Option<Decimal> {
        if reps == 0 {
            return None;
        }
        if reps == 1 {
            return Some(weight);
        }

        let r = Decimal::from(reps);
        let estimate = match self {
            Self::Epley => weight * (Decimal::from(30) + r) / Decimal::from(30),
            Self::Brzycki => {
                let denominator = Decimal::from(37) - r;
                if denominator <= Decimal::ZERO {
                    return None;
                }
                weight * Decimal::from(36) / denominator
            }
            Self::Lander => {
                let denominator = Decimal::new(1013, 1) - Decimal::new(267, 2) * r;
                if denominator <= Decimal::ZERO {
                    return None;
                }
                weight * Decimal::from(100) / denominator
            }
        };

        Some(estimate.round_dp(2))
    }
}

/// Epley estimate. Callers guarantee `reps >= 1`.
pub fn estimate_one_rep_max(weight: Decimal, reps: u32) -> Decimal {
    OneRepMaxFormula::Epley
        .estimate(weight, reps)
        .unwrap_or(weight)
}
