// SPDX-License-Identifier: MIT

//! Interactive question flow over any line-based reader/writer

use super::questions::{parse_answer, questions_for_project_type};
use crate::adk::error::SageError;
use crate::sage::context::Context;
use crate::sage::types::Question;
use std::io::{BufRead, Write};

const PROJECT_TYPE_ID: &str = "project_type";

/// Walks the questionnaire, re-asking on invalid input
pub struct WizardSession<R, W> {
    questions: Vec<Question>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> WizardSession<R, W> {
    pub fn new(questions: Vec<Question>, input: R, output: W) -> Self {
        Self {
            questions,
            input,
            output,
        }
    }

    /// Run the wizard and return the collected answers
    ///
    /// The project type is asked first and decides which branched questions
    /// follow. End of input answers every remaining question with its default.
    pub fn run(&mut self) -> Result<Context, SageError> {
        let mut answers = Context::empty();

        let project_type = match self.questions.iter().find(|q| q.id == PROJECT_TYPE_ID) {
            Some(q) => {
                let q = q.clone();
                let total = self.plan_len("");
                let value = self.ask(&q, 1, total)?;
                answers.insert(PROJECT_TYPE_ID, value.clone());
                value.as_str().unwrap_or_default().to_string()
            }
            None => String::new(),
        };

        let plan: Vec<Question> = questions_for_project_type(&self.questions, &project_type)
            .into_iter()
            .filter(|q| q.id != PROJECT_TYPE_ID)
            .cloned()
            .collect();
        let offset = answers.len();
        let total = plan.len() + offset;

        for (i, question) in plan.iter().enumerate() {
            let value = self.ask(question, i + 1 + offset, total)?;
            answers.insert(question.id.clone(), value);
        }

        log::info!(
            "Wizard completed with {} answers for project type '{}'",
            answers.len(),
            project_type
        );
        Ok(answers)
    }

    fn plan_len(&self, project_type: &str) -> usize {
        if project_type.is_empty() {
            self.questions.iter().filter(|q| q.branch.is_empty()).count()
        } else {
            questions_for_project_type(&self.questions, project_type).len()
        }
    }

    fn ask(
        &mut self,
        question: &Question,
        index: usize,
        total: usize,
    ) -> Result<serde_json::Value, SageError> {
        loop {
            writeln!(self.output, "\nQuestion {} of {}", index, total)?;
            writeln!(self.output, "{}", question.text)?;
            if let Some(help) = &question.help {
                writeln!(self.output, "  ({})", help)?;
            }
            for (i, option) in question.options.iter().enumerate() {
                writeln!(self.output, "  {}. {}", i + 1, option)?;
            }
            match &question.default {
                Some(default) => write!(self.output, "[{}] > ", display_default(default))?,
                None => write!(self.output, "> ")?,
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // EOF: take the default or give up
                return parse_answer(question, "");
            }

            match parse_answer(question, &line) {
                Ok(value) => return Ok(value),
                Err(SageError::InvalidAnswer { reason, .. }) => {
                    writeln!(self.output, "Invalid answer: {}", reason)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn display_default(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sage::types::QuestionType;
    use serde_json::json;
    use std::io::Cursor;

    fn q(id: &str, question_type: QuestionType, branch: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            text: format!("{}?", id),
            question_type,
            options: if question_type == QuestionType::Select {
                vec!["B2B SaaS".to_string(), "Marketplace".to_string()]
            } else {
                vec![]
            },
            default: None,
            branch: branch.iter().map(|s| s.to_string()).collect(),
            help: None,
        }
    }

    fn catalogue() -> Vec<Question> {
        vec![
            q("project_type", QuestionType::Select, &[]),
            q("price", QuestionType::Currency, &[]),
            q("take_rate", QuestionType::Percent, &["Marketplace"]),
            q("sales_cycle_days", QuestionType::Integer, &["B2B SaaS"]),
        ]
    }

    #[test]
    fn test_branching_follows_project_type() {
        let input = Cursor::new("2\n49.99\n12%\n");
        let mut output = Vec::new();
        let answers = WizardSession::new(catalogue(), input, &mut output)
            .run()
            .unwrap();

        assert_eq!(answers.text("project_type"), Some("Marketplace"));
        assert_eq!(answers.number("price"), Some(49.99));
        assert_eq!(answers.number("take_rate"), Some(12.0));
        assert!(answers.get("sales_cycle_days").is_none());

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Question 3 of 3"));
    }

    #[test]
    fn test_invalid_answer_is_reasked() {
        let input = Cursor::new("B2B SaaS\nabc\n20\n45\n");
        let mut output = Vec::new();
        let answers = WizardSession::new(catalogue(), input, &mut output)
            .run()
            .unwrap();

        assert_eq!(answers.number("price"), Some(20.0));
        assert_eq!(answers.get("sales_cycle_days"), Some(&json!(45)));

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Invalid answer: expected a number"));
    }

    #[test]
    fn test_eof_uses_defaults() {
        let mut questions = catalogue();
        for question in &mut questions {
            question.default = Some(match question.question_type {
                QuestionType::Select => json!("B2B SaaS"),
                _ => json!(1),
            });
        }

        let answers = WizardSession::new(questions, Cursor::new(""), Vec::new())
            .run()
            .unwrap();
        assert_eq!(answers.text("project_type"), Some("B2B SaaS"));
        assert_eq!(answers.number("sales_cycle_days"), Some(1.0));
    }

    #[test]
    fn test_eof_without_default_fails() {
        let result = WizardSession::new(catalogue(), Cursor::new("1\n"), Vec::new()).run();
        assert!(matches!(result, Err(SageError::InvalidAnswer { .. })));
    }
}
