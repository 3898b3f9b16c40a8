use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::common::compound_types::*;
use crate::common::simple_types::*;
use crate::customer_report::public_types::*;

// ======================================================
// Section 1 : Define each step in the report using types
// ======================================================

/// What the report needs to know about a customer.
pub trait OrderSummary {
    fn customer_name(&self) -> &str;
    fn order_count(&self) -> usize;
    fn total_amount(&self) -> Money;
}

impl OrderSummary for Customer {
    fn customer_name(&self) -> &str {
        self.name().as_str()
    }
    fn order_count(&self) -> usize {
        Customer::order_count(self)
    }
    fn total_amount(&self) -> Money {
        Customer::total_amount(self)
    }
}

pub trait CalculateDiscount: Fn(Money) -> Discount + Copy {}
impl<T> CalculateDiscount for T where T: Fn(Money) -> Discount + Copy {}

impl DiscountPolicy {
    pub fn calculator(self) -> impl CalculateDiscount {
        move |total: Money| self.discount_for(total)
    }
}

// ======================================================
// Section 2 : Implementation
// ======================================================

// ---------------------------
// Discount step
// ---------------------------

pub fn calculate_discount(customer: &impl OrderSummary) -> Discount {
    let total = customer.total_amount();
    let discount = DiscountPolicy::default().discount_for(total);
    debug!(total = total.value(), discount = discount.amount().value(), "Calculated discount");
    discount
}

// ---------------------------
// Average step
// ---------------------------

pub fn average_order(customer: &impl OrderSummary) -> AverageOrder {
    match customer.order_count() {
        0 => AverageOrder::NoOrders,
        count => AverageOrder::Average(customer.total_amount().divide(count)),
    }
}

// ---------------------------
// Report step
// ---------------------------

pub fn build_report(
    calculate_discount: impl CalculateDiscount,
    customer: &impl OrderSummary,
) -> CustomerReport {
    let total_amount = customer.total_amount();
    let report = CustomerReport {
        customer_name: customer.customer_name().to_owned(),
        order_count: customer.order_count(),
        total_amount,
        discount: calculate_discount(total_amount),
        average_order: average_order(customer),
    };
    debug!(
        customer_name = %report.customer_name,
        order_count = report.order_count,
        "Built customer report"
    );
    report
}

pub fn write_customer_report(out: &mut impl Write, report: &CustomerReport) -> Result<()> {
    write!(out, "{report}").with_context(|| {
        format!("failed to write report for {}", report.customer_name)
    })?;
    Ok(())
}

/// Prints the five report lines for `customer` to standard output.
pub fn print_customer_report(customer: &impl OrderSummary) -> Result<()> {
    let report = build_report(DiscountPolicy::default().calculator(), customer);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_customer_report(&mut out, &report)?;
    out.flush().context("failed to flush standard output")
}
