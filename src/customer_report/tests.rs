use std::io::{self, Write};

use rstest::rstest;

use crate::common::compound_types::{Customer, Order};
use crate::common::simple_types::Money;

use super::api::{run_demo, sample_customers};
use super::error::PolicyError;
use super::implementation::*;
use super::public_types::*;

fn customer_with(amounts: &[f64]) -> Customer {
    let mut customer = Customer::new(7, "Test Customer");
    for (index, amount) in amounts.iter().enumerate() {
        customer.add_order(Order::new(100 + index as u64, *amount));
    }
    customer
}

fn render(report: &CustomerReport) -> String {
    let mut buffer = Vec::new();
    write_customer_report(&mut buffer, report).unwrap();
    String::from_utf8(buffer).unwrap()
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn empty_customer_has_zero_totals() {
    let customer = Customer::new(2, "Empty Customer");

    assert_eq!(customer.total_amount(), Money::ZERO);
    assert_eq!(calculate_discount(&customer), Discount::NotApplied);
    assert_eq!(average_order(&customer), AverageOrder::NoOrders);
    assert_eq!(average_order(&customer).amount(), Money::ZERO);
}

#[test]
fn add_order_keeps_insertion_order() {
    let mut customer = Customer::new(1, "Ordered");
    customer.add_order(Order::new(3, 30.));
    customer.add_order(Order::new(1, 10.));
    customer.add_order(Order::new(3, 30.));

    let ids: Vec<u64> = customer.orders().iter().map(|o| o.id().value()).collect();
    assert_eq!(ids, vec![3, 1, 3]);
    assert_eq!(customer.order_count(), 3);
}

#[rstest]
#[case(&[1000.], Discount::NotApplied)]
#[case(&[999.99], Discount::NotApplied)]
#[case(&[400., 600.], Discount::NotApplied)]
#[case(&[1001.], Discount::Applied(Money::new(1001. * 0.1)))]
#[case(&[1000.01], Discount::Applied(Money::new(1000.01 * 0.1)))]
#[case(&[500., 800.], Discount::Applied(Money::new(130.)))]
fn discount_applies_strictly_above_threshold(#[case] amounts: &[f64], #[case] expected: Discount) {
    let customer = customer_with(amounts);
    assert_eq!(calculate_discount(&customer), expected);
}

#[test]
fn repeated_queries_are_stable() {
    let customer = customer_with(&[250.5, 900., 12.25]);

    assert_eq!(customer.total_amount(), customer.total_amount());
    assert_eq!(calculate_discount(&customer), calculate_discount(&customer));
}

#[rstest]
#[case(&[500., 800.], "Total Amount: 1300", "Discount: 130.0", "Average Order: 650.0")]
#[case(&[], "Total Amount: 0", "Discount: 0", "Average Order: 0")]
#[case(&[1000.], "Total Amount: 1000", "Discount: 0", "Average Order: 1000.0")]
#[case(&[100.5, 200.], "Total Amount: 300.5", "Discount: 0", "Average Order: 150.25")]
fn report_renders_amounts(
    #[case] amounts: &[f64],
    #[case] total_line: &str,
    #[case] discount_line: &str,
    #[case] average_line: &str,
) {
    let customer = customer_with(amounts);
    let report = build_report(DiscountPolicy::default().calculator(), &customer);
    let rendered = render(&report);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Customer Report for: Test Customer");
    assert_eq!(lines[1], format!("Total Orders: {}", amounts.len()));
    assert_eq!(lines[2], total_line);
    assert_eq!(lines[3], discount_line);
    assert_eq!(lines[4], average_line);
}

#[test]
fn custom_policy_changes_discount() {
    let policy = DiscountPolicy::new(100., 0.5).unwrap();
    let customer = customer_with(&[150.]);

    let report = build_report(policy.calculator(), &customer);
    assert_eq!(report.discount, Discount::Applied(Money::new(75.)));
}

#[rstest]
#[case(1000., 1.5, PolicyError::InvalidRate(1.5))]
#[case(1000., -0.1, PolicyError::InvalidRate(-0.1))]
#[case(f64::INFINITY, 0.1, PolicyError::InvalidThreshold(f64::INFINITY))]
fn invalid_policy_is_rejected(
    #[case] threshold: f64,
    #[case] rate: f64,
    #[case] expected: PolicyError,
) {
    assert_eq!(DiscountPolicy::new(threshold, rate), Err(expected));
}

#[test]
fn nan_rate_is_rejected() {
    assert!(matches!(
        DiscountPolicy::new(1000., f64::NAN),
        Err(PolicyError::InvalidRate(_))
    ));
}

#[test]
fn sample_customers_match_demo_data() {
    let customers = sample_customers();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].name().as_str(), "SAP Customer");
    assert_eq!(customers[0].total_amount(), Money::new(1300.));
    assert_eq!(customers[1].name().as_str(), "Empty Customer");
    assert!(customers[1].orders().is_empty());
}

#[test]
fn write_failure_is_reported() {
    let report = build_report(
        DiscountPolicy::default().calculator(),
        &customer_with(&[1.]),
    );
    let error = write_customer_report(&mut BrokenPipe, &report).unwrap_err();
    assert!(error.to_string().contains("Test Customer"));
}

#[test]
fn demo_stops_on_write_failure() {
    assert!(run_demo(&mut BrokenPipe, DiscountPolicy::default()).is_err());
}
