// SPDX-License-Identifier: MIT

//! Model module - defines the LLM model trait and the OpenAI implementation
//!
//! - [openai] - OpenAI's chat completions API

pub mod openai;

use crate::adk::tool::Tool;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::Arc;

/// Configuration for model generation
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerationConfig {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub top_p: Option<f32>,
    /// Force the model to call this tool instead of answering freely
    pub tool_choice: Option<String>,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part::Text(text.into())],
        }
    }

    /// First function call named `name`, if any
    pub fn function_call(&self, name: &str) -> Option<&serde_json::Value> {
        self.parts.iter().find_map(|part| match part {
            Part::FunctionCall { name: n, args } if n == name => Some(args),
            _ => None,
        })
    }

    /// Concatenated text parts
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Parts of a message - text or function calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Part {
    /// Regular text output from the model
    Text(String),
    /// Function/tool call requested by the model
    FunctionCall {
        name: String,
        args: serde_json::Value,
    },
}

/// Core trait for LLM model implementations
#[async_trait]
pub trait Model: Send + Sync {
    async fn generate_content(
        &self,
        history: &[Content],
        config: Option<&GenerationConfig>,
        tools: Option<&[Arc<dyn Tool>]>,
    ) -> Result<Content, Box<dyn Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_function_call_lookup() {
        let content = Content {
            role: "model".to_string(),
            parts: vec![
                Part::Text("thinking out loud".to_string()),
                Part::FunctionCall {
                    name: "recommendation".to_string(),
                    args: json!({"advice": "Raise prices", "priority": "high"}),
                },
            ],
        };

        assert_eq!(
            content.function_call("recommendation").unwrap()["advice"],
            "Raise prices"
        );
        assert!(content.function_call("other").is_none());
        assert_eq!(content.joined_text(), "thinking out loud");
    }
}
