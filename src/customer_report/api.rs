use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::common::compound_types::{Customer, Order};
use crate::customer_report::implementation::{build_report, write_customer_report};
use crate::customer_report::public_types::DiscountPolicy;

/// The two demonstration customers: one with two orders, one with none.
pub fn sample_customers() -> Vec<Customer> {
    let mut sap_customer = Customer::new(1, "SAP Customer");
    sap_customer.add_order(Order::new(101, 500.));
    sap_customer.add_order(Order::new(102, 800.));

    let empty_customer = Customer::new(2, "Empty Customer");

    vec![sap_customer, empty_customer]
}

/// Writes a report for every sample customer to `out`, in order.
pub fn run_demo(out: &mut impl Write, policy: DiscountPolicy) -> Result<()> {
    let calculate_discount = policy.calculator();
    for customer in sample_customers() {
        info!(customer_id = customer.id().value(), "Reporting on customer");
        let report = build_report(calculate_discount, &customer);
        write_customer_report(out, &report)?;
    }
    out.flush()?;
    Ok(())
}
