// SPDX-License-Identifier: MIT

//! Startup quality scorecard
//!
//! Linear point accumulation over the wizard answers and derived metrics,
//! capped to `0..=100`.

use crate::sage::context::Context;

pub const MAX_SCORE: u32 = 100;

/// First band whose threshold `value` satisfies, else 0
fn band(value: f64, bands: &[(f64, u32)], hit: impl Fn(f64, f64) -> bool) -> u32 {
    bands
        .iter()
        .find(|(threshold, _)| hit(value, *threshold))
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

fn below(value: f64, bands: &[(f64, u32)]) -> u32 {
    band(value, bands, |v, t| v < t)
}

fn at_least(value: f64, bands: &[(f64, u32)]) -> u32 {
    band(value, bands, |v, t| v >= t)
}

fn churn_points(answers: &Context) -> u32 {
    let churn_rate = answers.number_or("churn_rate", 100.0);
    below(churn_rate, &[(3.0, 25), (5.0, 20), (10.0, 10), (20.0, 5)])
}

fn unit_economics_points(answers: &Context) -> u32 {
    let cac = answers.number_or("cac", 0.0);
    let ltv = answers.number_or("ltv", 1.0);
    if ltv <= 0.0 {
        return 0;
    }
    below(cac / ltv, &[(0.2, 20), (0.3, 15), (0.5, 10), (1.0, 5)])
}

fn runway_points(answers: &Context) -> u32 {
    let runway = answers.number_or("runway", 0.0);
    at_least(runway, &[(18.0, 20), (12.0, 15), (6.0, 10), (3.0, 5)])
}

fn burn_points(answers: &Context) -> u32 {
    let burn_rate = answers.number_or("burn_rate", 0.0);
    let reported = answers.number_or("revenue_monthly", 0.0);
    let revenue = if reported != 0.0 {
        reported
    } else {
        answers.number_or("price", 0.0) * answers.number_or("customers", 0.0)
    };

    if revenue <= 0.0 {
        return 0;
    }
    if burn_rate < revenue {
        15
    } else if burn_rate < revenue * 1.5 {
        10
    } else if burn_rate < revenue * 2.0 {
        5
    } else {
        0
    }
}

fn growth_points(answers: &Context) -> u32 {
    let new_customers = answers.number_or("new_customers", 0.0);
    let customers = answers.number_or("customers", 0.0);
    if customers <= 0.0 {
        return 0;
    }
    let growth_rate = new_customers / customers * 100.0;
    at_least(growth_rate, &[(20.0, 15), (10.0, 10), (5.0, 5)])
}

fn team_points(answers: &Context) -> u32 {
    let team_size = answers.number_or("team_size", 1.0);
    band(team_size, &[(5.0, 10), (10.0, 5), (20.0, 2)], |v, t| v <= t)
}

fn price_points(answers: &Context) -> u32 {
    let price = answers.number_or("price", 0.0);
    at_least(price, &[(100.0, 10), (50.0, 8), (25.0, 5), (10.0, 3)])
}

/// Quality score from 0 to 100 for a set of answers and metrics
pub fn calculate_quality_score(answers: &Context) -> u32 {
    let score = churn_points(answers)
        + unit_economics_points(answers)
        + runway_points(answers)
        + burn_points(answers)
        + growth_points(answers)
        + team_points(answers)
        + price_points(answers);
    score.min(MAX_SCORE)
}

/// Feedback message for a score band
pub fn quality_feedback(score: u32) -> &'static str {
    match score {
        80..=u32::MAX => "🚀 Excellent! Your startup has strong fundamentals.",
        60..=79 => "✅ Good! You're on the right track with room for improvement.",
        40..=59 => "⚠️ Fair. Focus on the key metrics to improve your score.",
        20..=39 => "🔧 Needs work. Review the benchmarks and adjust your strategy.",
        _ => "🔄 Start with the basics. Focus on churn, CAC, and runway.",
    }
}

/// Score change formatted for display
pub fn score_delta(old_score: u32, new_score: u32) -> String {
    let delta = i64::from(new_score) - i64::from(old_score);
    if delta > 0 {
        format!("+{} pts", delta)
    } else {
        format!("{} pts", delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn answers(pairs: Vec<(&str, Value)>) -> Context {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_empty_answers() {
        // churn defaults to 100, cac to 0 and ltv to 1, team to 1
        assert_eq!(calculate_quality_score(&Context::empty()), 30);
    }

    #[test]
    fn test_strong_startup_is_capped() {
        let a = answers(vec![
            ("churn_rate", json!(2)),
            ("cac", json!(10)),
            ("ltv", json!(1000)),
            ("runway", json!(24)),
            ("burn_rate", json!(100)),
            ("price", json!(120)),
            ("customers", json!(100)),
            ("new_customers", json!(30)),
            ("team_size", json!(3)),
        ]);
        assert_eq!(calculate_quality_score(&a), MAX_SCORE);
    }

    #[test]
    fn test_churn_bands() {
        let score_for = |c: f64| churn_points(&answers(vec![("churn_rate", json!(c))]));
        assert_eq!(score_for(2.9), 25);
        assert_eq!(score_for(3.0), 20);
        assert_eq!(score_for(7.0), 10);
        assert_eq!(score_for(19.9), 5);
        assert_eq!(score_for(20.0), 0);
    }

    #[test]
    fn test_unit_economics_ignores_zero_ltv() {
        let a = answers(vec![("cac", json!(10)), ("ltv", json!(0))]);
        assert_eq!(unit_economics_points(&a), 0);

        let a = answers(vec![("cac", json!(25)), ("ltv", json!(100))]);
        assert_eq!(unit_economics_points(&a), 15);
    }

    #[test]
    fn test_runway_bands_inclusive() {
        let score_for = |r: f64| runway_points(&answers(vec![("runway", json!(r))]));
        assert_eq!(score_for(18.0), 20);
        assert_eq!(score_for(12.0), 15);
        assert_eq!(score_for(6.0), 10);
        assert_eq!(score_for(3.0), 5);
        assert_eq!(score_for(2.9), 0);
    }

    #[test]
    fn test_burn_uses_reported_revenue_first() {
        let a = answers(vec![
            ("burn_rate", json!(1400)),
            ("revenue_monthly", json!(1000)),
            ("price", json!(10)),
            ("customers", json!(10)),
        ]);
        assert_eq!(burn_points(&a), 10);

        // zero reported revenue falls back to price x customers
        let a = answers(vec![
            ("burn_rate", json!(50)),
            ("revenue_monthly", json!(0)),
            ("price", json!(10)),
            ("customers", json!(10)),
        ]);
        assert_eq!(burn_points(&a), 15);
    }

    #[test]
    fn test_growth_requires_customers() {
        let a = answers(vec![("new_customers", json!(5)), ("customers", json!(0))]);
        assert_eq!(growth_points(&a), 0);

        let a = answers(vec![("new_customers", json!(1)), ("customers", json!(10))]);
        assert_eq!(growth_points(&a), 10);
    }

    #[test]
    fn test_team_and_price_bands() {
        assert_eq!(team_points(&answers(vec![("team_size", json!(10))])), 5);
        assert_eq!(team_points(&answers(vec![("team_size", json!(21))])), 0);
        assert_eq!(price_points(&answers(vec![("price", json!(50))])), 8);
        assert_eq!(price_points(&answers(vec![("price", json!(9.99))])), 0);
    }

    #[test]
    fn test_feedback_bands() {
        assert!(quality_feedback(100).starts_with("🚀"));
        assert!(quality_feedback(80).starts_with("🚀"));
        assert!(quality_feedback(79).starts_with("✅"));
        assert!(quality_feedback(40).starts_with("⚠️"));
        assert!(quality_feedback(20).starts_with("🔧"));
        assert!(quality_feedback(0).starts_with("🔄"));
    }

    #[test]
    fn test_score_delta() {
        assert_eq!(score_delta(40, 55), "+15 pts");
        assert_eq!(score_delta(55, 40), "-15 pts");
        assert_eq!(score_delta(40, 40), "0 pts");
    }
}
