use std::fmt;
use std::iter::Sum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CustomerId {
    value: u64,
}

impl CustomerId {
    pub fn new(id: u64) -> Self {
        Self { value: id }
    }
    pub fn value(&self) -> u64 {
        self.value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrderId {
    value: u64,
}

impl OrderId {
    pub fn new(id: u64) -> Self {
        Self { value: id }
    }
    pub fn value(&self) -> u64 {
        self.value
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerName {
    value: String,
}

impl CustomerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { value: name.into() }
    }
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A monetary amount. Negative values are representable and are not rejected.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Money {
    value: f64,
}

impl Money {
    pub const ZERO: Money = Money { value: 0. };

    pub fn new(value: f64) -> Self {
        Self { value }
    }
    pub fn value(&self) -> f64 {
        self.value
    }
    pub(crate) fn scale(self, factor: f64) -> Self {
        Self::new(self.value * factor)
    }
    pub(crate) fn divide(self, count: usize) -> Self {
        Self::new(self.value / count as f64)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl Sum<Self> for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |a, b| a + b)
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Plain rendering: whole amounts print without a fractional part (`1300`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
