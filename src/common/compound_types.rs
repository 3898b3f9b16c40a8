use tracing::debug;

use crate::common::simple_types::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Order {
    id: OrderId,
    amount: Money,
}

impl Order {
    pub fn new(id: u64, amount: impl Into<Money>) -> Self {
        Self {
            id: OrderId::new(id),
            amount: amount.into(),
        }
    }
    pub fn id(&self) -> OrderId {
        self.id
    }
    pub fn amount(&self) -> Money {
        self.amount
    }
}

/// A customer and the orders it owns, kept in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
    orders: Vec<Order>,
}

impl Customer {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(id),
            name: CustomerName::new(name),
            orders: Vec::new(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn add_order(&mut self, order: Order) {
        debug!(
            customer_id = self.id.value(),
            order_id = order.id().value(),
            amount = order.amount().value(),
            "Adding order"
        );
        self.orders.push(order);
    }

    /// Sum of every order amount; zero when there are no orders.
    pub fn total_amount(&self) -> Money {
        self.orders.iter().map(Order::amount).sum()
    }
}
