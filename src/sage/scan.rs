// SPDX-License-Identifier: MIT

//! Batch scan of a condition table
//!
//! Each record is evaluated on its own. A record whose condition cannot be
//! parsed is skipped and reported in [`ScanReport::failures`]; it never stops
//! the rest of the scan.

use crate::sage::condition::{try_evaluate, CompareOp};
use crate::sage::context::Context;
use crate::sage::types::{Badge, Rule};
use serde::Serialize;

/// A record gated by a condition string
pub trait Gated {
    fn id(&self) -> &str;
    fn condition(&self) -> &str;
}

impl Gated for Rule {
    fn id(&self) -> &str {
        &self.id
    }

    fn condition(&self) -> &str {
        &self.condition
    }
}

impl Gated for Badge {
    fn id(&self) -> &str {
        &self.id
    }

    fn condition(&self) -> &str {
        &self.condition
    }
}

/// A record that could not be evaluated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanFailure {
    pub id: String,
    pub reason: String,
}

/// Result of scanning a table against one context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport<T> {
    /// Records whose condition held, in table order
    pub matches: Vec<T>,
    pub failures: Vec<ScanFailure>,
}

impl<T> ScanReport<T> {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<T> Default for ScanReport<T> {
    fn default() -> Self {
        Self {
            matches: Vec::new(),
            failures: Vec::new(),
        }
    }
}

/// Evaluate every record of `table` against `context`
pub fn scan<T: Gated + Clone>(
    table: &[T],
    context: &Context,
    operators: &[CompareOp],
) -> ScanReport<T> {
    let mut report = ScanReport::default();

    for record in table {
        match try_evaluate(record.condition(), context, operators) {
            Ok(true) => {
                log::debug!("Condition '{}' of {} holds", record.condition(), record.id());
                report.matches.push(record.clone());
            }
            Ok(false) => {}
            Err(e) => {
                log::warn!("Error evaluating {}: {}", record.id(), e);
                report.failures.push(ScanFailure {
                    id: record.id().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
