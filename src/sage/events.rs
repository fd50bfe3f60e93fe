// SPDX-License-Identifier: MIT

//! Structured event logging
//!
//! Each event is one JSON payload on its own log target, so it can be
//! filtered with `RUST_LOG=user_actions=info` and friends.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

pub const USER_ACTIONS: &str = "user_actions";
pub const AGENT_INTERACTIONS: &str = "agent_interactions";
pub const FEEDBACK: &str = "feedback";

/// Rating a user gives to a piece of advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Positive,
    Negative,
}

/// One logged event
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub event_id: Uuid,
    pub timestamp: String,
    pub user_id: String,
    #[serde(flatten)]
    pub payload: Value,
}

impl Event {
    fn new(user_id: &str, payload: Value) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now().to_rfc3339(),
            user_id: user_id.to_string(),
            payload,
        }
    }
}

fn emit(target: &str, label: &str, event: &Event) {
    match serde_json::to_string(event) {
        Ok(json) => log::info!(target: target, "{}: {}", label, json),
        Err(e) => log::warn!(target: target, "Failed to serialize event: {}", e),
    }
}

/// Log something the user did
pub fn log_user_action(user_id: &str, action: &str, details: Option<Value>) -> Event {
    let event = Event::new(
        user_id,
        serde_json::json!({
            "action": action,
            "details": details.unwrap_or_else(|| serde_json::json!({})),
        }),
    );
    emit(USER_ACTIONS, "User action", &event);
    event
}

/// Log one exchange with the advisor
pub fn log_agent_interaction(
    user_id: &str,
    input: &str,
    response: &str,
    metrics: Option<Value>,
) -> Event {
    let event = Event::new(
        user_id,
        serde_json::json!({
            "input": input,
            "response": response,
            "metrics": metrics.unwrap_or_else(|| serde_json::json!({})),
        }),
    );
    emit(AGENT_INTERACTIONS, "Agent interaction", &event);
    event
}

/// Log a rating of a piece of advice
pub fn log_feedback(
    user_id: &str,
    advice_id: &str,
    rating: Rating,
    feedback_text: Option<&str>,
) -> Event {
    let event = Event::new(
        user_id,
        serde_json::json!({
            "advice_id": advice_id,
            "rating": rating,
            "feedback_text": feedback_text,
        }),
    );
    emit(FEEDBACK, "User feedback", &event);
    event
}
