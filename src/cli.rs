use clap::Parser;

use crate::customer_report::error::PolicyError;
use crate::customer_report::public_types::DiscountPolicy;

#[derive(Parser, Debug)]
#[command(name = "customer-report")]
#[command(about = "Print order totals and discounts for the sample customers.")]
pub struct CommandLine {
    /// Totals strictly above this amount receive a discount
    #[arg(long, default_value_t = DiscountPolicy::DEFAULT_THRESHOLD)]
    pub discount_threshold: f64,
    /// Fraction of the total given back as discount
    #[arg(long, default_value_t = DiscountPolicy::DEFAULT_RATE)]
    pub discount_rate: f64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn discount_policy(&self) -> Result<DiscountPolicy, PolicyError> {
        DiscountPolicy::new(self.discount_threshold, self.discount_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_standard_policy() {
        let command_line = CommandLine::try_parse_from(["customer-report"]).unwrap();
        assert_eq!(command_line.discount_policy(), Ok(DiscountPolicy::default()));
    }

    #[test]
    fn flags_override_policy() {
        let command_line = CommandLine::try_parse_from([
            "customer-report",
            "--discount-threshold",
            "50",
            "--discount-rate",
            "0.25",
        ])
        .unwrap();
        let policy = command_line.discount_policy().unwrap();
        assert_eq!(policy.threshold().value(), 50.);
        assert_eq!(policy.rate(), 0.25);
    }

    #[test]
    fn out_of_range_rate_is_rejected() {
        let command_line =
            CommandLine::try_parse_from(["customer-report", "--discount-rate", "2"]).unwrap();
        assert_eq!(
            command_line.discount_policy(),
            Err(PolicyError::InvalidRate(2.))
        );
    }
}
