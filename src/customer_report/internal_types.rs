use std::fmt;

use crate::common::simple_types::*;
use crate::customer_report::public_types::{AverageOrder, Discount};

#[derive(Clone, Copy, Debug)]
pub(crate) enum ReportLine<'a> {
    Header(&'a str),
    OrderCount(usize),
    TotalAmount(Money),
    Discount(Discount),
    AverageOrder(AverageOrder),
}

impl ReportLine<'_> {
    fn label(&self) -> &'static str {
        match self {
            ReportLine::Header(_) => "Customer Report for:",
            ReportLine::OrderCount(_) => "Total Orders:",
            ReportLine::TotalAmount(_) => "Total Amount:",
            ReportLine::Discount(_) => "Discount:",
            ReportLine::AverageOrder(_) => "Average Order:",
        }
    }
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label();
        match self {
            ReportLine::Header(name) => write!(f, "{label} {name}"),
            ReportLine::OrderCount(count) => write!(f, "{label} {count}"),
            ReportLine::TotalAmount(total) => write!(f, "{label} {total}"),
            ReportLine::Discount(discount) => write!(f, "{label} {discount}"),
            ReportLine::AverageOrder(average) => write!(f, "{label} {average}"),
        }
    }
}
