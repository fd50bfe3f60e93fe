// SPDX-License-Identifier: MIT

//! startup-sage: a guided financial questionnaire for early-stage startups
//!
//! - [`sage`] - conditions, metrics, scorecard, sanity rules and badges
//! - [`adk`] - model plumbing and the Sage advisor

pub mod adk;
pub mod sage;
