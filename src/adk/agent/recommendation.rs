// SPDX-License-Identifier: MIT

//! The `recommendation` function the advisor forces the model to call

use crate::adk::tool::Tool;
use async_trait::async_trait;
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;

pub const RECOMMENDATION_TOOL: &str = "recommendation";

/// Priority level of the recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

/// One specific, actionable recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    /// One specific, actionable piece of advice
    pub advice: String,
    /// Priority level of the recommendation
    pub priority: Priority,
}

/// Tool wrapper exposing [`Recommendation`] as a callable function
pub struct RecommendationTool {
    description: String,
    schema: Value,
}

impl RecommendationTool {
    pub fn new() -> Self {
        let schema = SchemaSettings::draft07()
            .with(|s| s.inline_subschemas = true)
            .into_generator()
            .into_root_schema_for::<Recommendation>();

        let mut schema = serde_json::to_value(schema).unwrap_or_else(|_| Value::Object(Default::default()));
        if let Some(obj) = schema.as_object_mut() {
            obj.remove("$schema");
            obj.remove("title");
        }

        Self {
            description: "Provide a specific, actionable recommendation".to_string(),
            schema,
        }
    }

    /// Decode the arguments of a model's function call
    pub fn decode(args: &Value) -> Result<Recommendation, serde_json::Error> {
        serde_json::from_value(args.clone())
    }
}

impl Default for RecommendationTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for RecommendationTool {
    fn name(&self) -> &str {
        RECOMMENDATION_TOOL
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> &Value {
        &self.schema
    }

    async fn execute(&self, input: Value) -> Result<Value, Box<dyn Error + Send + Sync>> {
        let recommendation = Self::decode(&input)?;
        Ok(serde_json::to_value(recommendation)?)
    }
}
