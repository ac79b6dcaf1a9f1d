//! Built-in sample orders.

use chrono::NaiveDate;

use pos_core::{CustomerId, DomainError, DomainResult, Money, OrderId, ProductId};

use crate::line_item::LineItem;
use crate::order::{Order, OrderStatus, PaymentMethod, WALK_IN_CUSTOMER};

fn line(id: &str, name: &str, price: u64, quantity: u32) -> DomainResult<LineItem> {
    LineItem::new(ProductId::new(id), name, Money::new(price), quantity).ok_or_else(|| {
        DomainError::validation(format!("sample line {id}: invalid quantity {quantity}"))
    })
}

fn sample_order(
    id: &str,
    customer: Option<(&str, &str)>,
    items: Vec<LineItem>,
    date: (i32, u32, u32),
    status: OrderStatus,
    payment_method: PaymentMethod,
) -> DomainResult<Order> {
    let (y, m, d) = date;
    let order_date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
        DomainError::validation(format!("order {id}: invalid order date {y}-{m}-{d}"))
    })?;
    let total_amount = Money::checked_sum(items.iter().map(LineItem::line_total))
        .ok_or_else(|| DomainError::validation(format!("order {id}: total overflows")))?;
    Ok(Order {
        id: OrderId::new(id),
        customer_id: customer.map(|(cid, _)| CustomerId::new(cid)),
        customer_name: customer.map_or(WALK_IN_CUSTOMER, |(_, name)| name).to_owned(),
        total_amount,
        items,
        order_date,
        status,
        payment_method,
    })
}

/// The three demo orders.
pub fn orders() -> DomainResult<Vec<Order>> {
    Ok(vec![
        sample_order(
            "ORD-001",
            Some(("1", "Chamath Perera")),
            vec![
                line("STK-001", "Samsung Galaxy S24", 125_000, 1)?,
                line("STK-004", "Sony WH-1000XM5", 45_000, 1)?,
            ],
            (2024, 1, 15),
            OrderStatus::Completed,
            PaymentMethod::Card,
        )?,
        sample_order(
            "ORD-002",
            Some(("2", "Kavindi Silva")),
            vec![line("STK-005", "iPad Air", 95_000, 1)?],
            (2024, 1, 16),
            OrderStatus::Pending,
            PaymentMethod::Cash,
        )?,
        sample_order(
            "ORD-003",
            None,
            vec![line("STK-003", "Dell XPS 13", 220_000, 1)?],
            (2024, 1, 17),
            OrderStatus::Completed,
            PaymentMethod::Mobile,
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_totals_match_their_lines() {
        let orders = orders().unwrap();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].total_amount, Money::new(170_000));
        assert_eq!(orders[2].customer_name, WALK_IN_CUSTOMER);
        assert!(orders[2].is_walk_in());
    }

    #[test]
    fn bad_seed_data_is_reported() {
        assert!(matches!(line("STK-001", "Phone", 1, 0), Err(DomainError::Validation(_))));
        let err = sample_order(
            "ORD-X",
            None,
            Vec::new(),
            (2024, 2, 30),
            OrderStatus::Pending,
            PaymentMethod::Cash,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("ORD-X")));
    }
}
