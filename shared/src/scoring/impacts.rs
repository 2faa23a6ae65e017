//! Converts raw sub-scores into percentage impacts that sum to exactly 100

use rust_decimal::prelude::*;

use crate::models::{Factor, FactorImpacts};

/// Lowest sub-score shown on the dashboard, so no factor renders as 0 %
pub const VISUAL_FLOOR: f64 = 0.1;

/// Floor every sub-score at [`VISUAL_FLOOR`] and normalize
pub fn visual_impacts(sub_scores: &[(Factor, f64)]) -> FactorImpacts {
    let floored: Vec<(Factor, f64)> = sub_scores
        .iter()
        .map(|&(factor, score)| (factor, floor_score(score)))
        .collect();
    normalize(&floored)
}

fn floor_score(score: f64) -> f64 {
    if score.is_nan() {
        VISUAL_FLOOR
    } else {
        score.max(VISUAL_FLOOR)
    }
}

/// Express each sub-score as a share of the total, rounded to one decimal.
///
/// The rounding remainder goes to the largest entry (first in input order on
/// ties) so the total is exactly 100. An all-zero input is split evenly.
pub fn normalize(sub_scores: &[(Factor, f64)]) -> FactorImpacts {
    if sub_scores.is_empty() {
        return FactorImpacts::default();
    }

    let scores: Vec<f64> = sub_scores
        .iter()
        .map(|&(_, score)| if score.is_finite() { score.max(0.0) } else { 0.0 })
        .collect();
    let total: f64 = scores.iter().sum();

    let shares: Vec<f64> = if total > 0.0 {
        scores.iter().map(|score| score / total * 100.0).collect()
    } else {
        vec![100.0 / scores.len() as f64; scores.len()]
    };

    let mut percents: Vec<Decimal> = shares.into_iter().map(round_percent).collect();

    let remainder = Decimal::ONE_HUNDRED - percents.iter().copied().sum::<Decimal>();
    if !remainder.is_zero() {
        let largest = largest_index(&percents);
        percents[largest] += remainder;
    }

    sub_scores
        .iter()
        .map(|&(factor, _)| factor)
        .zip(percents)
        .collect()
}

/// Round on the exact binary value of the share, so a float just below a
/// half rounds down instead of being shortened into a tie first
fn round_percent(share: f64) -> Decimal {
    Decimal::from_f64_retain(share)
        .unwrap_or_default()
        .round_dp(1)
}

fn largest_index(values: &[Decimal]) -> usize {
    let mut largest = 0;
    for (index, value) in values.iter().enumerate().skip(1) {
        if *value > values[largest] {
            largest = index;
        }
    }
    largest
}
