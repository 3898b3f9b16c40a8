use std::fmt;

use crate::common::simple_types::*;
use crate::customer_report::error::PolicyError;
use crate::customer_report::internal_types::ReportLine;

/// Writes a computed amount with at least one decimal place (`130.0`).
fn fmt_computed(money: Money, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:?}", money.value())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Discount {
    NotApplied,
    Applied(Money),
}

impl Discount {
    pub fn amount(&self) -> Money {
        match self {
            Discount::NotApplied => Money::ZERO,
            Discount::Applied(amount) => *amount,
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discount::NotApplied => f.write_str("0"),
            Discount::Applied(amount) => fmt_computed(*amount, f),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AverageOrder {
    NoOrders,
    Average(Money),
}

impl AverageOrder {
    pub fn amount(&self) -> Money {
        match self {
            AverageOrder::NoOrders => Money::ZERO,
            AverageOrder::Average(amount) => *amount,
        }
    }
}

impl fmt::Display for AverageOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageOrder::NoOrders => f.write_str("0"),
            AverageOrder::Average(amount) => fmt_computed(*amount, f),
        }
    }
}

/// The discount rule: `rate` of the total once the total is strictly above `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscountPolicy {
    threshold: Money,
    rate: f64,
}

impl DiscountPolicy {
    pub const DEFAULT_THRESHOLD: f64 = 1000.;
    pub const DEFAULT_RATE: f64 = 0.1;

    pub fn new(threshold: f64, rate: f64) -> Result<Self, PolicyError> {
        if !threshold.is_finite() {
            return Err(PolicyError::InvalidThreshold(threshold));
        }
        if !(0. ..=1.).contains(&rate) {
            return Err(PolicyError::InvalidRate(rate));
        }
        Ok(Self {
            threshold: Money::new(threshold),
            rate,
        })
    }

    pub fn threshold(&self) -> Money {
        self.threshold
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn discount_for(&self, total: Money) -> Discount {
        if total > self.threshold {
            Discount::Applied(total.scale(self.rate))
        } else {
            Discount::NotApplied
        }
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self {
            threshold: Money::new(Self::DEFAULT_THRESHOLD),
            rate: Self::DEFAULT_RATE,
        }
    }
}

/// Everything printed for one customer, computed up front.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerReport {
    pub customer_name: String,
    pub order_count: usize,
    pub total_amount: Money,
    pub discount: Discount,
    pub average_order: AverageOrder,
}

impl CustomerReport {
    pub(crate) fn lines(&self) -> [ReportLine<'_>; 5] {
        [
            ReportLine::Header(&self.customer_name),
            ReportLine::OrderCount(self.order_count),
            ReportLine::TotalAmount(self.total_amount),
            ReportLine::Discount(self.discount),
            ReportLine::AverageOrder(self.average_order),
        ]
    }
}

impl fmt::Display for CustomerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
