// SPDX-License-Identifier: MIT

//! Agent module - defines agent types
//!
//! - `SageAgent` - the financial advisor behind the wizard
//! - `RecommendationTool` - the function the advisor answers through

mod recommendation;
mod sage;

pub use recommendation::{Priority, Recommendation, RecommendationTool, RECOMMENDATION_TOOL};
pub use sage::{ConversationEntry, SageAgent, NO_DATA_MESSAGE, SYSTEM_PROMPT};

use async_trait::async_trait;
use std::error::Error;

/// Core agent trait
#[async_trait]
pub trait Agent: Send + Sync {
    /// Returns the agent name
    fn name(&self) -> &str;

    /// Run the agent with the given input
    async fn run(&self, input: String) -> Result<String, Box<dyn Error + Send + Sync>>;
}
