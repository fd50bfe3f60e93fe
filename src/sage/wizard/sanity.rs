// SPDX-License-Identifier: MIT

//! Sanity checks over the wizard answers

use crate::sage::condition::SANITY_OPERATORS;
use crate::sage::context::Context;
use crate::sage::scan::{scan, ScanReport};
use crate::sage::types::{Rule, Severity};

/// Rules whose condition holds for `metrics` merged with `drivers`
///
/// Drivers win on key collision. Rules that cannot be evaluated are listed
/// in the report's failures and otherwise ignored.
pub fn validate_metrics(rules: &[Rule], metrics: &Context, drivers: &Context) -> ScanReport<Rule> {
    let context = Context::merged(metrics, drivers);
    let report = scan(rules, &context, SANITY_OPERATORS);

    if !report.matches.is_empty() {
        log::info!(
            "{} sanity rule(s) fired: {:?}",
            report.matches.len(),
            report.matches.iter().map(|r| &r.id).collect::<Vec<_>>()
        );
    }

    report
}

/// Most severe violation, if any
pub fn worst_severity(violations: &[Rule]) -> Option<Severity> {
    violations.iter().map(|r| r.severity).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn rule(id: &str, condition: &str, severity: Severity) -> Rule {
        Rule {
            id: id.to_string(),
            name: id.to_string(),
            condition: condition.to_string(),
            message: String::new(),
            severity,
        }
    }

    fn ctx(pairs: Vec<(&str, Value)>) -> Context {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_violation_scan_preserves_order() {
        let rules = vec![
            rule("r1", "churn_rate > 20", Severity::Warning),
            rule("r2", "runway < 3", Severity::Critical),
        ];
        let drivers = ctx(vec![("churn_rate", json!(25)), ("runway", json!(10))]);

        let report = validate_metrics(&rules, &Context::empty(), &drivers);
        let ids: Vec<&str> = report.matches.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1"]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_drivers_override_metrics() {
        let rules = vec![rule("short", "runway < 3", Severity::Critical)];
        let metrics = ctx(vec![("runway", json!(2.0))]);
        let drivers = ctx(vec![("runway", json!(8))]);

        let report = validate_metrics(&rules, &metrics, &drivers);
        assert!(report.matches.is_empty());
    }

    #[test]
    fn test_equality_rule_is_reported() {
        let rules = vec![
            rule("eq", "customers == 0", Severity::Info),
            rule("none", "customers <= 0", Severity::Info),
        ];
        let drivers = ctx(vec![("customers", json!(0))]);

        let report = validate_metrics(&rules, &Context::empty(), &drivers);
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].id, "none");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id, "eq");
    }

    #[test]
    fn test_worst_severity() {
        assert_eq!(worst_severity(&[]), None);
        let rules = vec![
            rule("a", "x > 1", Severity::Info),
            rule("b", "x > 1", Severity::Critical),
            rule("c", "x > 1", Severity::Warning),
        ];
        assert_eq!(worst_severity(&rules), Some(Severity::Critical));
    }
}
