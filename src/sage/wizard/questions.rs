// SPDX-License-Identifier: MIT

//! Question lookup and answer parsing

use crate::adk::error::SageError;
use crate::sage::types::{Question, QuestionType};
use serde_json::Value;

/// Find a question by id
pub fn get_question_by_id<'a>(questions: &'a [Question], id: &str) -> Result<&'a Question, SageError> {
    questions
        .iter()
        .find(|q| q.id == id)
        .ok_or_else(|| SageError::not_found("Question", id))
}

/// Questions asked for a project type, in catalogue order
pub fn questions_for_project_type<'a>(
    questions: &'a [Question],
    project_type: &str,
) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| q.applies_to(project_type))
        .collect()
}

/// Turn raw user input into an answer value; blank input takes the default
pub fn parse_answer(question: &Question, raw: &str) -> Result<Value, SageError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return question
            .default
            .clone()
            .ok_or_else(|| SageError::invalid_answer(&question.id, "an answer is required"));
    }

    match question.question_type {
        QuestionType::Currency => {
            let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
            parse_number(question, &cleaned)
        }
        QuestionType::Percent => parse_number(question, raw.trim_end_matches('%').trim()),
        QuestionType::Integer => raw
            .replace(',', "")
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| SageError::invalid_answer(&question.id, "expected a whole number")),
        QuestionType::Select => select_option(question, raw).map(Value::from),
    }
}

fn parse_number(question: &Question, raw: &str) -> Result<Value, SageError> {
    let n = raw
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| SageError::invalid_answer(&question.id, "expected a number"))?;
    Ok(Value::from(n))
}

/// Accepts an option label (any case) or its 1-based position
fn select_option(question: &Question, raw: &str) -> Result<String, SageError> {
    if let Ok(index) = raw.parse::<usize>() {
        if let Some(option) = index.checked_sub(1).and_then(|i| question.options.get(i)) {
            return Ok(option.clone());
        }
    }

    question
        .options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(raw))
        .cloned()
        .ok_or_else(|| {
            SageError::invalid_answer(
                &question.id,
                format!("choose one of: {}", question.options.join(", ")),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sage::loader::TableLoader;
    use serde_json::json;

    fn question(id: &str, question_type: QuestionType) -> Question {
        Question {
            id: id.to_string(),
            text: format!("{}?", id),
            question_type,
            options: vec![],
            default: None,
            branch: vec![],
            help: None,
        }
    }

    #[test]
    fn test_get_question_by_id() {
        let questions = TableLoader::new().questions(None).unwrap();
        let q = get_question_by_id(&questions, "churn_rate").unwrap();
        assert_eq!(q.question_type, QuestionType::Percent);

        let err = get_question_by_id(&questions, "nope").unwrap_err();
        assert_eq!(err.to_string(), "Question with ID 'nope' not found");
    }

    #[test]
    fn test_questions_for_project_type() {
        let questions = TableLoader::new().questions(None).unwrap();

        let marketplace = questions_for_project_type(&questions, "Marketplace");
        assert!(marketplace.iter().any(|q| q.id == "take_rate"));
        assert!(marketplace.iter().any(|q| q.id == "gross_margin"));
        assert!(!marketplace.iter().any(|q| q.id == "sales_cycle_days"));
        assert!(marketplace.iter().any(|q| q.id == "price"));

        let b2b = questions_for_project_type(&questions, "B2B SaaS");
        assert!(b2b.iter().any(|q| q.id == "sales_cycle_days"));
        assert!(!b2b.iter().any(|q| q.id == "take_rate"));
    }

    #[test]
    fn test_parse_currency() {
        let q = question("price", QuestionType::Currency);
        assert_eq!(parse_answer(&q, "$1,250.50").unwrap(), json!(1250.5));
        assert!(parse_answer(&q, "lots").is_err());
    }

    #[test]
    fn test_parse_percent() {
        let q = question("churn_rate", QuestionType::Percent);
        assert_eq!(parse_answer(&q, "4.5%").unwrap(), json!(4.5));
        assert_eq!(parse_answer(&q, "7").unwrap(), json!(7.0));
    }

    #[test]
    fn test_parse_integer() {
        let q = question("customers", QuestionType::Integer);
        assert_eq!(parse_answer(&q, "1,200").unwrap(), json!(1200));
        assert!(matches!(
            parse_answer(&q, "12.5"),
            Err(SageError::InvalidAnswer { .. })
        ));
    }

    #[test]
    fn test_parse_select() {
        let mut q = question("project_type", QuestionType::Select);
        q.options = vec!["B2B SaaS".to_string(), "Marketplace".to_string()];

        assert_eq!(parse_answer(&q, "marketplace").unwrap(), json!("Marketplace"));
        assert_eq!(parse_answer(&q, "1").unwrap(), json!("B2B SaaS"));
        assert!(parse_answer(&q, "3").is_err());
        assert!(parse_answer(&q, "Hardware").is_err());
    }

    #[test]
    fn test_blank_uses_default() {
        let mut q = question("cash_balance", QuestionType::Currency);
        assert!(parse_answer(&q, "  ").is_err());

        q.default = Some(json!(50000));
        assert_eq!(parse_answer(&q, "").unwrap(), json!(50000));
    }
}
