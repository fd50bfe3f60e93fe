// SPDX-License-Identifier: MIT

//! YAML schema types for the rule, badge and question tables

use serde::{Deserialize, Serialize};

/// How serious a sanity-rule violation is
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// A sanity rule flagging an implausible input
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub condition: String,
    pub message: String,
    pub severity: Severity,
}

/// A gamification badge
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub points: u32,
    pub condition: String,
}

/// Input kind of a wizard question
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Currency,
    Integer,
    Percent,
    Select,
}

/// A wizard question
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Choices for `select` questions
    #[serde(default)]
    pub options: Vec<String>,
    pub default: Option<serde_json::Value>,
    /// Project types this question applies to; empty means all
    #[serde(default)]
    pub branch: Vec<String>,
    pub help: Option<String>,
}

impl Question {
    /// Whether the question is asked for `project_type`
    pub fn applies_to(&self, project_type: &str) -> bool {
        self.branch.is_empty() || self.branch.iter().any(|b| b == project_type)
    }
}

/// Project types a questionnaire can branch on
pub const PROJECT_TYPES: &[&str] = &["B2B SaaS", "B2C SaaS", "E-commerce", "Marketplace"];
