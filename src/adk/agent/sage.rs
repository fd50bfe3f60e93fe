// SPDX-License-Identifier: MIT

//! Sage - the advisor agent
//!
//! Computes the financial model from wizard answers and asks the model for
//! exactly one recommendation through the forced `recommendation` call.

use super::recommendation::{Recommendation, RecommendationTool, RECOMMENDATION_TOOL};
use super::Agent;
use crate::adk::error::{ModelError, SageError};
use crate::adk::model::{Content, GenerationConfig, Model};
use crate::adk::tool::Tool;
use crate::sage::context::Context;
use crate::sage::formulas::{calculate_model, Metrics};
use crate::sage::settings::Settings;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::error::Error;
use std::sync::Arc;

pub const SYSTEM_PROMPT: &str = r#"
You are **Sage**, an AI co-founder and financial advisor for startups.

Your role:
1. Ask concise clarifying questions to understand the startup's financial situation
2. Calculate key financial metrics (MRR, churn, CAC, runway, etc.)
3. Suggest one specific, actionable improvement based on the data
4. Explain financial concepts in plain language, avoiding jargon

Guidelines:
- Be encouraging but realistic
- Focus on runway and sustainability
- Provide specific, actionable advice
- Keep responses under 150 tokens
- Use emojis sparingly but effectively
"#;

pub const NO_DATA_MESSAGE: &str =
    "I need more data to provide specific advice. Please complete the wizard questions.";

/// One exchange kept in the in-process history
#[derive(Debug, Clone, Serialize)]
pub struct ConversationEntry {
    pub user_input: String,
    pub agent_response: String,
    pub metrics: Option<Metrics>,
    pub timestamp: DateTime<Utc>,
}

pub struct SageAgent {
    name: String,
    model: Arc<dyn Model>,
    config: GenerationConfig,
    tools: Vec<Arc<dyn Tool>>,
    history: Vec<ConversationEntry>,
    current_metrics: Option<Metrics>,
}

impl SageAgent {
    pub fn new(model: Arc<dyn Model>, settings: &Settings) -> Self {
        Self {
            name: "sage".to_string(),
            model,
            config: GenerationConfig {
                temperature: Some(settings.temperature),
                max_output_tokens: Some(settings.max_tokens),
                top_p: None,
                tool_choice: Some(RECOMMENDATION_TOOL.to_string()),
            },
            tools: vec![Arc::new(RecommendationTool::new())],
            history: Vec::new(),
            current_metrics: None,
        }
    }

    /// Compute the metrics for `drivers` and remember them
    pub fn calculate_model(&mut self, drivers: &Context) -> Metrics {
        let metrics = calculate_model(drivers);
        self.current_metrics = Some(metrics);
        metrics
    }

    pub fn current_metrics(&self) -> Option<&Metrics> {
        self.current_metrics.as_ref()
    }

    fn analysis_prompt(drivers: &Context, metrics: &Metrics) -> Result<String, SageError> {
        let context = json!({
            "drivers": drivers.to_json(),
            "metrics": metrics,
            "project_type": drivers.text("project_type").unwrap_or("Unknown"),
        });
        Ok(format!(
            "Analyze this startup data and provide one specific improvement suggestion: {}",
            serde_json::to_string_pretty(&context)?
        ))
    }

    /// Ask the model for one recommendation
    ///
    /// Returns `Ok(None)` when the model answers without calling the
    /// recommendation function.
    pub async fn recommend(
        &self,
        drivers: &Context,
        metrics: &Metrics,
    ) -> Result<Option<Recommendation>, SageError> {
        let history = vec![
            Content::text("system", SYSTEM_PROMPT),
            Content::text("user", Self::analysis_prompt(drivers, metrics)?),
        ];

        let response = self
            .model
            .generate_content(&history, Some(&self.config), Some(self.tools.as_slice()))
            .await?;

        match response.function_call(RECOMMENDATION_TOOL) {
            Some(args) => RecommendationTool::decode(args)
                .map(Some)
                .map_err(|e| SageError::from(ModelError::InvalidResponse(e.to_string()))),
            None => {
                log::warn!(
                    "Model answered without a recommendation call ({} parts)",
                    response.parts.len()
                );
                Ok(None)
            }
        }
    }

    /// One piece of advice as text; failures become a readable message
    pub async fn suggest_changes(&self, drivers: &Context, metrics: &Metrics) -> String {
        match self.recommend(drivers, metrics).await {
            Ok(Some(rec)) => {
                log::info!("Sage recommendation ({:?}): {}", rec.priority, rec.advice);
                rec.advice
            }
            Ok(None) => NO_DATA_MESSAGE.to_string(),
            Err(e) => {
                log::error!("Advice generation failed: {}", e);
                format!("Unable to generate advice at this time. Error: {}", e)
            }
        }
    }

    /// Record an exchange for later context
    pub fn log_conversation(
        &mut self,
        user_input: &str,
        agent_response: &str,
        metrics: Option<Metrics>,
    ) {
        self.history.push(ConversationEntry {
            user_input: user_input.to_string(),
            agent_response: agent_response.to_string(),
            metrics,
            timestamp: Utc::now(),
        });
    }

    /// The `k` most recent exchanges, oldest first
    pub fn relevant_context(&self, k: usize) -> &[ConversationEntry] {
        let start = self.history.len().saturating_sub(k);
        &self.history[start..]
    }
}

#[async_trait]
impl Agent for SageAgent {
    fn name(&self) -> &str {
        &self.name
    }

    /// Free-form question answered with the current metrics as context
    async fn run(&self, input: String) -> Result<String, Box<dyn Error + Send + Sync>> {
        let Some(metrics) = self.current_metrics else {
            return Ok(
                "I need to see your financial model first. Please complete the Wizard!".to_string(),
            );
        };

        let mut history = vec![Content::text("system", SYSTEM_PROMPT)];
        for entry in self.relevant_context(5) {
            history.push(Content::text("user", entry.user_input.clone()));
            history.push(Content::text("model", entry.agent_response.clone()));
        }
        history.push(Content::text(
            "user",
            format!(
                "Current metrics: {}\n\n{}",
                serde_json::to_string(&metrics)?,
                input
            ),
        ));

        let config = GenerationConfig {
            tool_choice: None,
            ..self.config.clone()
        };
        let response = self.model.generate_content(&history, Some(&config), None).await?;
        Ok(response.joined_text())
    }
}
