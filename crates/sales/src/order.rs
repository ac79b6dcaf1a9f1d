use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pos_core::{CustomerId, Entity, Money, OrderId};

use crate::line_item::LineItem;

/// Display name used when an order has neither a resolved customer nor a typed name.
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Mobile,
}

/// A finalized order as held by the order store.
///
/// `total_amount` is fixed when the order is materialized; it is not
/// re-derived from `items` afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub total_amount: Money,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
}

impl Order {
    pub fn is_walk_in(&self) -> bool {
        self.customer_id.is_none()
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity())).sum()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pos_core::ProductId;

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_value(OrderStatus::Cancelled).unwrap(), "cancelled");
        assert_eq!(serde_json::to_value(PaymentMethod::Mobile).unwrap(), "mobile");
    }

    #[test]
    fn walk_in_orders_omit_customer_id() {
        let order = Order {
            id: OrderId::new("ORD-003"),
            customer_id: None,
            customer_name: WALK_IN_CUSTOMER.to_owned(),
            items: vec![LineItem::new(
                ProductId::new("STK-003"),
                "Dell XPS 13",
                Money::new(220_000),
                2,
            )
            .unwrap()],
            total_amount: Money::new(440_000),
            order_date: NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(),
            status: OrderStatus::Completed,
            payment_method: PaymentMethod::Mobile,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("customerId").is_none());
        assert_eq!(json["orderDate"], "2024-01-17");
        assert!(order.is_walk_in());
        assert_eq!(order.item_count(), 2);
    }
}
