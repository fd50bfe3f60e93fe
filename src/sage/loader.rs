//! Table loader - YAML loading for rules, badges and questions
//!
//! Each table is a YAML sequence. The tables shipped in `config/` are
//! embedded so the binary works without any files on disk.

use super::types::{Badge, Question, Rule};
use crate::adk::error::SageError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const DEFAULT_RULES: &str = include_str!("../../config/sanity_rules.yml");
pub const DEFAULT_BADGES: &str = include_str!("../../config/badges.yml");
pub const DEFAULT_QUESTIONS: &str = include_str!("../../config/questions.yml");

/// Loads condition and question tables from YAML
pub struct TableLoader;

impl TableLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a table from a YAML file
    pub fn load_file<T: DeserializeOwned, P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<T>, SageError> {
        let path = path.as_ref();
        log::debug!("Loading table from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a table from a YAML string
    pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<Vec<T>, SageError> {
        let table: Vec<T> = serde_yaml::from_str(content)?;
        Ok(table)
    }

    /// Rules from `path`, or the embedded table
    pub fn rules(&self, path: Option<&Path>) -> Result<Vec<Rule>, SageError> {
        match path {
            Some(p) => self.load_file(p),
            None => Self::parse_yaml(DEFAULT_RULES),
        }
    }

    /// Badges from `path`, or the embedded table
    pub fn badges(&self, path: Option<&Path>) -> Result<Vec<Badge>, SageError> {
        match path {
            Some(p) => self.load_file(p),
            None => Self::parse_yaml(DEFAULT_BADGES),
        }
    }

    /// Questions from `path`, or the embedded table
    pub fn questions(&self, path: Option<&Path>) -> Result<Vec<Question>, SageError> {
        match path {
            Some(p) => self.load_file(p),
            None => Self::parse_yaml(DEFAULT_QUESTIONS),
        }
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sage::types::{QuestionType, Severity, PROJECT_TYPES};
    use std::collections::HashSet;

    #[test]
    fn test_parse_rule_table() {
        let yaml = r#"
- id: high_churn
  name: High churn
  condition: "churn_rate > 20"
  message: "Churn above 20% a month is rarely sustainable."
  severity: warning
- id: short_runway
  name: Short runway
  condition: "runway < 3"
  message: "Less than three months of cash left."
  severity: critical
"#;
        let rules: Vec<Rule> = TableLoader::parse_yaml(yaml).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].id, "high_churn");
        assert_eq!(rules[1].severity, Severity::Critical);
    }

    #[test]
    fn test_invalid_severity_returns_error() {
        let yaml = r#"
- id: r
  name: R
  condition: "x > 1"
  message: m
  severity: catastrophic
"#;
        let result: Result<Vec<Rule>, _> = TableLoader::parse_yaml(yaml);
        assert!(matches!(result, Err(SageError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_returns_io_error() {
        let result = TableLoader::new().rules(Some(Path::new("does/not/exist.yml")));
        assert!(matches!(result, Err(SageError::Io(_))));
    }

    #[test]
    fn test_default_rules_structure() {
        let rules = TableLoader::new().rules(None).unwrap();
        assert!(!rules.is_empty());

        let ids: HashSet<&str> = rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), rules.len(), "rule ids must be unique");

        for rule in &rules {
            assert!(!rule.name.is_empty());
            assert!(!rule.message.is_empty());
            assert!(
                crate::sage::condition::parse_with(
                    &rule.condition,
                    crate::sage::condition::SANITY_OPERATORS
                )
                .is_ok(),
                "rule {} has a bad condition",
                rule.id
            );
        }
    }

    #[test]
    fn test_default_badges_structure() {
        let badges = TableLoader::new().badges(None).unwrap();
        assert!(!badges.is_empty());

        let ids: HashSet<&str> = badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), badges.len(), "badge ids must be unique");

        for badge in &badges {
            assert!(badge.points > 0);
            assert!(crate::sage::condition::parse_with(
                &badge.condition,
                crate::sage::condition::BADGE_OPERATORS
            )
            .is_ok());
        }
    }

    #[test]
    fn test_boolean_badges_use_lowercase() {
        use crate::sage::condition::{evaluate_condition, BADGE_OPERATORS};
        use crate::sage::context::Context;

        let badges = TableLoader::new().badges(None).unwrap();
        let flags: Vec<&str> = badges
            .iter()
            .filter(|b| b.condition.to_lowercase().ends_with("== true"))
            .map(|b| b.condition.as_str())
            .collect();
        assert_eq!(flags.len(), 2);
        for condition in &flags {
            assert!(condition.ends_with("== true"), "{}", condition);
        }

        let mut actions = Context::empty();
        actions.insert("wizard_completed", true);
        assert!(evaluate_condition("wizard_completed == true", &actions, BADGE_OPERATORS));
        assert!(!evaluate_condition("wizard_completed == True", &actions, BADGE_OPERATORS));
    }

    #[test]
    fn test_default_questions_structure() {
        let questions = TableLoader::new().questions(None).unwrap();
        assert_eq!(questions.len(), 20, "expected 20 questions");

        let ids: HashSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), questions.len(), "question ids must be unique");

        for q in &questions {
            if q.question_type == QuestionType::Select {
                assert!(!q.options.is_empty(), "{} has no options", q.id);
            }
            for project_type in &q.branch {
                assert!(
                    PROJECT_TYPES.contains(&project_type.as_str()),
                    "invalid project type in branch: {}",
                    project_type
                );
            }
        }
    }
}
