// SPDX-License-Identifier: MIT

//! Badges: eligibility and awarding
//!
//! Nothing is stored. An award is returned to the caller and logged.

use crate::adk::error::SageError;
use crate::sage::condition::BADGE_OPERATORS;
use crate::sage::context::Context;
use crate::sage::scan::{scan, ScanReport};
use crate::sage::types::Badge;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A badge granted to a user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeAward {
    pub user_id: String,
    pub badge: Badge,
    pub awarded_at: DateTime<Utc>,
    pub points_earned: u32,
}

/// Badges whose condition holds for `metrics` merged with `user_actions`
pub fn check_badge_eligibility(
    badges: &[Badge],
    metrics: &Context,
    user_actions: &Context,
) -> ScanReport<Badge> {
    let context = Context::merged(metrics, user_actions);
    scan(badges, &context, BADGE_OPERATORS)
}

/// Award the badge `badge_id` to `user_id`
pub fn award_badge(badges: &[Badge], user_id: &str, badge_id: &str) -> Result<BadgeAward, SageError> {
    let badge = badges
        .iter()
        .find(|b| b.id == badge_id)
        .ok_or_else(|| SageError::not_found("Badge", badge_id))?;

    log::info!("Awarding badge {} to {}", badge.id, user_id);

    Ok(BadgeAward {
        user_id: user_id.to_string(),
        badge: badge.clone(),
        awarded_at: Utc::now(),
        points_earned: badge.points,
    })
}

/// Sum of points over a set of badges
pub fn total_points(badges: &[Badge]) -> u32 {
    badges.iter().map(|b| b.points).sum()
}
