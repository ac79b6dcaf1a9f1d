//! End-to-end checkout over the sample data.

use chrono::NaiveDate;

use pos::{PosConfig, PosState, run_checkout};
use pos_core::{CustomerId, Money, OrderId, SequentialIds};
use pos_sales::{OrderStatus, OrderStore, PaymentMethod};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

#[test]
fn scripted_checkout_updates_the_order_book() {
    let mut state = PosState::sample().unwrap();
    let mut ids = PosConfig::default().id_generator(state.orders.ids());

    let summary = run_checkout(&mut state, ids.as_mut(), today()).unwrap();

    assert_eq!(
        summary.created,
        vec![OrderId::new("ORD-004"), OrderId::new("ORD-005")]
    );
    assert_eq!(summary.edited, vec![OrderId::new("ORD-002")]);
    assert_eq!(summary.deleted, vec![OrderId::new("ORD-003")]);

    let ids: Vec<_> = summary.orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["ORD-001", "ORD-002", "ORD-004", "ORD-005"]);
    assert_eq!(summary.grand_total, Money::new(905_000));

    let merged = state.orders.get(&OrderId::new("ORD-004")).unwrap();
    assert_eq!(merged.customer_id, Some(CustomerId::new("3")));
    assert_eq!(merged.customer_name, "Jon Jones");
    assert_eq!(merged.items.len(), 1);
    assert_eq!(merged.items[0].quantity(), 3);
    assert_eq!(merged.total_amount, Money::new(375_000));
    assert_eq!(merged.payment_method, PaymentMethod::Card);
    assert_eq!(merged.order_date, today());

    let typed = state.orders.get(&OrderId::new("ORD-005")).unwrap();
    assert_eq!(typed.customer_id, None);
    assert_eq!(typed.customer_name, "Nimal Fernando");
    assert_eq!(typed.total_amount, Money::new(170_000));
    assert_eq!(typed.status, OrderStatus::Completed);

    let edited = state.orders.get(&OrderId::new("ORD-002")).unwrap();
    assert_eq!(edited.total_amount, Money::new(190_000));
    assert_eq!(edited.status, OrderStatus::Completed);
    assert_eq!(edited.order_date, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
}

#[test]
fn summary_serializes_for_display() {
    let mut state = PosState::sample().unwrap();
    let mut ids = SequentialIds::new("SO", 4).starting_after(0);

    let summary = run_checkout(&mut state, &mut ids, today()).unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["created"][0], "SO-0001");
    assert_eq!(json["grandTotal"], 905_000);
    assert_eq!(json["orders"][2]["items"][0]["lineTotal"], 375_000);
    assert_eq!(json["orders"][2]["paymentMethod"], "card");
}
