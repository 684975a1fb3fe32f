//! Lifestyle ("future self") scoring.
//!
//! A weighted score out of 100 plus four 0–100 dimensions, computed from
//! sleep, steps, alcohol, and screen time.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::base::types::{InvalidInput, ensure_in_range};

const LOW_SCORE: u8 = 60;
const LOW_SCORE_SUMMARY: &str = "Bro… Future You wordt een wandelende café latte als je zo doorgaat. ☕👀";
const GOOD_SCORE_SUMMARY: &str = "Lekker bezig. Kleine tweaks en je future self glimt. ✨";

#[derive(Debug, Clone, Deserialize)]
pub struct FutureSelfInput {
    pub sleep_hours: f64,
    pub steps_per_day: u32,
    pub alcohol_units_per_week: u32,
    pub screen_time_hours: f64,
}

impl FutureSelfInput {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        ensure_in_range("sleep_hours", self.sleep_hours, 0.0..=14.0)?;
        ensure_in_range("steps_per_day", self.steps_per_day, 0..=50_000)?;
        ensure_in_range("alcohol_units_per_week", self.alcohol_units_per_week, 0..=70)?;
        ensure_in_range("screen_time_hours", self.screen_time_hours, 0.0..=18.0)?;

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub energy: u8,
    pub mobility: u8,
    pub mental_balance: u8,
    pub injury_risk: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FutureSelfScore {
    pub score: u8,
    pub dimensions: Dimensions,
    pub summary: &'static str,
}

/// Clamps a dimension to 0–100 and drops the fraction.
fn dimension(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}

/// Scores a validated input.
#[instrument(skip_all)]
pub fn score(input: &FutureSelfInput) -> FutureSelfScore {
    let sleep = input.sleep_hours;
    let steps = i64::from(input.steps_per_day);
    let alcohol = i64::from(input.alcohol_units_per_week);
    let screen = input.screen_time_hours;

    let mut score: i64 = 100;

    // Sleep: 7–9 hours is the target.
    if sleep < 7.0 {
        score -= ((7.0 - sleep) * 5.0) as i64;
    } else if sleep > 9.0 {
        score -= ((sleep - 9.0) * 3.0) as i64;
    }

    // Steps: below 8k costs more than above 15k.
    if steps < 8000 {
        score -= (8000 - steps) / 400;
    } else if steps > 15_000 {
        score -= (steps - 15_000) / 1000;
    }

    score -= (alcohol * 2).min(30);

    if screen > 6.0 {
        score -= ((screen - 6.0) * 3.0) as i64;
    }

    let score = score.clamp(0, 100) as u8;

    let (steps, alcohol) = (steps as f64, alcohol as f64);

    let dimensions = Dimensions {
        energy: dimension(50.0 + (sleep - 7.0) * 8.0 - alcohol),
        mobility: dimension(50.0 + (steps - 8000.0) / 120.0),
        mental_balance: dimension(60.0 - (screen - 3.0) * 6.0 + (sleep - 7.0) * 5.0),
        injury_risk: dimension(70.0 - (steps - 10_000.0) / 200.0 - alcohol),
    };

    let summary = if score < LOW_SCORE { LOW_SCORE_SUMMARY } else { GOOD_SCORE_SUMMARY };

    FutureSelfScore { score, dimensions, summary }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(sleep_hours: f64, steps_per_day: u32, alcohol_units_per_week: u32, screen_time_hours: f64) -> FutureSelfInput {
        FutureSelfInput {
            sleep_hours,
            steps_per_day,
            alcohol_units_per_week,
            screen_time_hours,
        }
    }

    #[test]
    fn test_healthy_week() {
        let result = score(&input(8.0, 10_000, 0, 2.0));

        assert_eq!(result.score, 100);
        assert_eq!(
            result.dimensions,
            Dimensions {
                energy: 58,
                mobility: 66,
                mental_balance: 71,
                injury_risk: 70,
            }
        );
        assert_eq!(result.summary, GOOD_SCORE_SUMMARY);
    }

    #[test]
    fn test_rough_week() {
        let result = score(&input(5.0, 2000, 20, 10.0));

        // 100 - 10 (sleep) - 15 (steps) - 30 (alcohol, capped) - 12 (screen)
        assert_eq!(result.score, 33);
        assert_eq!(
            result.dimensions,
            Dimensions {
                energy: 14,
                mobility: 0,
                mental_balance: 8,
                injury_risk: 90,
            }
        );
        assert_eq!(result.summary, LOW_SCORE_SUMMARY);
    }

    #[test]
    fn test_oversleeping_and_overwalking_cost_points() {
        // 100 - 6 (11h sleep) - 5 (20k steps)
        assert_eq!(score(&input(11.0, 20_000, 0, 0.0)).score, 89);
    }

    #[test]
    fn test_score_never_goes_below_zero() {
        let result = score(&input(0.0, 0, 70, 18.0));

        assert_eq!(result.score, 0);
        assert_eq!(result.dimensions.energy, 0);
    }

    #[test]
    fn test_validation_bounds() {
        assert!(input(14.0, 50_000, 70, 18.0).validate().is_ok());
        assert_eq!(input(14.5, 0, 0, 0.0).validate().unwrap_err().field, "sleep_hours");
        assert_eq!(input(-1.0, 0, 0, 0.0).validate().unwrap_err().field, "sleep_hours");
        assert_eq!(input(8.0, 50_001, 0, 0.0).validate().unwrap_err().field, "steps_per_day");
        assert_eq!(input(8.0, 0, 71, 0.0).validate().unwrap_err().field, "alcohol_units_per_week");
        assert_eq!(input(8.0, 0, 0, 18.5).validate().unwrap_err().field, "screen_time_hours");
    }
}
