// SPDX-License-Identifier: MIT

//! Wizard: question flow, sanity rules and the quality scorecard

pub mod quality;
pub mod questions;
pub mod sanity;
pub mod session;

pub use quality::{calculate_quality_score, quality_feedback, score_delta};
pub use questions::{get_question_by_id, parse_answer, questions_for_project_type};
pub use sanity::{validate_metrics, worst_severity};
pub use session::WizardSession;
