// SPDX-License-Identifier: MIT

//! Financial metric formulas
//!
//! Every formula reads its drivers from a [`Context`] and returns `None`
//! when a driver is missing or not a number.

use crate::sage::context::Context;
use serde::{Deserialize, Serialize};

/// Derived metrics, in the order they are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Mrr,
    Churn,
    Cac,
    Runway,
    BurnRate,
    Ltv,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Mrr,
        Metric::Churn,
        Metric::Cac,
        Metric::Runway,
        Metric::BurnRate,
        Metric::Ltv,
    ];

    /// Context key the metric is published under
    pub fn name(self) -> &'static str {
        match self {
            Metric::Mrr => "mrr",
            Metric::Churn => "churn",
            Metric::Cac => "cac",
            Metric::Runway => "runway",
            Metric::BurnRate => "burn_rate",
            Metric::Ltv => "ltv",
        }
    }

    pub fn compute(self, drivers: &Context) -> Option<f64> {
        match self {
            Metric::Mrr => calc_mrr(drivers),
            Metric::Churn => calc_churn(drivers),
            Metric::Cac => calc_cac(drivers),
            Metric::Runway => calc_runway(drivers),
            Metric::BurnRate => calc_burn_rate(drivers),
            Metric::Ltv => calc_ltv(drivers),
        }
    }
}

/// Monthly Recurring Revenue
pub fn calc_mrr(d: &Context) -> Option<f64> {
    Some(d.number("price")? * d.number("customers")?)
}

/// Monthly churn rate, in percent
pub fn calc_churn(d: &Context) -> Option<f64> {
    d.number("churn_rate")
}

/// Customer Acquisition Cost
pub fn calc_cac(d: &Context) -> Option<f64> {
    Some(d.number("marketing_spend")? / d.number("new_customers")?.max(1.0))
}

/// Monthly burn; negative when revenue exceeds expenses
pub fn calc_burn_rate(d: &Context) -> Option<f64> {
    Some(d.number("expenses_monthly")? - calc_mrr(d)?)
}

/// Runway in months; a non-positive burn is clamped to 1
pub fn calc_runway(d: &Context) -> Option<f64> {
    let burn = calc_burn_rate(d)?;
    Some(d.number("cash_balance")? / burn.max(1.0))
}

/// Lifetime Value; zero churn yields 0
pub fn calc_ltv(d: &Context) -> Option<f64> {
    let churn_rate = d.number("churn_rate")?;
    if churn_rate == 0.0 {
        return Some(0.0);
    }
    Some(d.number("price")? / (churn_rate / 100.0))
}

/// All derived metrics for one set of drivers
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub mrr: f64,
    pub churn: f64,
    pub cac: f64,
    pub runway: f64,
    pub burn_rate: f64,
    pub ltv: f64,
}

impl Metrics {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Mrr => self.mrr,
            Metric::Churn => self.churn,
            Metric::Cac => self.cac,
            Metric::Runway => self.runway,
            Metric::BurnRate => self.burn_rate,
            Metric::Ltv => self.ltv,
        }
    }

    fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::Mrr => self.mrr = value,
            Metric::Churn => self.churn = value,
            Metric::Cac => self.cac = value,
            Metric::Runway => self.runway = value,
            Metric::BurnRate => self.burn_rate = value,
            Metric::Ltv => self.ltv = value,
        }
    }

    /// `(name, value)` pairs in computation order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Metric::ALL.iter().map(move |m| (m.name(), self.get(*m)))
    }

    pub fn to_context(&self) -> Context {
        self.iter().collect()
    }
}

/// Compute every metric; one whose drivers are missing becomes 0.0
pub fn calculate_model(drivers: &Context) -> Metrics {
    let drivers = drivers.normalized();
    let mut metrics = Metrics::default();

    for metric in Metric::ALL {
        match metric.compute(&drivers) {
            Some(value) => metrics.set(metric, value),
            None => log::debug!("Missing drivers for {}, defaulting to 0", metric.name()),
        }
    }

    metrics
}
