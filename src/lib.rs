//! Customers, their orders, and a threshold discount, rendered as a plain text report.

pub mod cli;

pub mod common {
    pub mod compound_types;
    pub mod simple_types;
}

pub mod customer_report {
    pub mod api;
    pub mod error;
    pub mod implementation;
    pub(crate) mod internal_types;
    pub mod public_types;

    #[cfg(test)]
    mod tests;
}

pub use common::compound_types::{Customer, Order};
pub use common::simple_types::{CustomerId, CustomerName, Money, OrderId};
pub use customer_report::api::{run_demo, sample_customers};
pub use customer_report::error::PolicyError;
pub use customer_report::implementation::{
    average_order, build_report, calculate_discount, print_customer_report,
    write_customer_report, CalculateDiscount, OrderSummary,
};
pub use customer_report::public_types::{AverageOrder, CustomerReport, Discount, DiscountPolicy};
