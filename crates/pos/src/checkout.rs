//! Scripted checkout over the sample data.
//!
//! Drives the same calls a front-end would make: open a session, add lines,
//! pick or type a customer, submit; then edit and delete existing orders.

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use pos_catalog::{Catalog, sample as catalog_sample};
use pos_core::{CustomerId, IdGenerator, Money, OrderId, ProductId};
use pos_parties::{CustomerDirectory, sample as customer_sample};
use pos_sales::{
    InMemoryOrderStore, Order, OrderSession, OrderStatus, OrderStore, PaymentMethod,
    sample as order_sample,
};

/// Everything one in-memory session owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosState {
    pub catalog: Catalog,
    pub customers: CustomerDirectory,
    pub orders: InMemoryOrderStore,
}

impl PosState {
    pub fn sample() -> anyhow::Result<Self> {
        Ok(Self {
            catalog: catalog_sample::catalog().context("sample catalog")?,
            customers: customer_sample::directory().context("sample customers")?,
            orders: InMemoryOrderStore::with_orders(
                order_sample::orders().context("sample orders")?,
            )
            .context("sample order store")?,
        })
    }
}

/// Result of a checkout run, printed by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub created: Vec<OrderId>,
    pub edited: Vec<OrderId>,
    pub deleted: Vec<OrderId>,
    pub orders: Vec<Order>,
    pub grand_total: Money,
}

pub fn run_checkout(
    state: &mut PosState,
    ids: &mut dyn IdGenerator,
    today: NaiveDate,
) -> anyhow::Result<CheckoutSummary> {
    let mut created = Vec::new();
    let mut edited = Vec::new();
    let mut deleted = Vec::new();

    // Registered customer scanning the same phone twice.
    let mut session = OrderSession::create();
    let customer = state
        .customers
        .resolve(&CustomerId::new("3"))
        .context("customer 3 missing from directory")?;
    session.select_customer(Some(customer));
    session.add_item(&state.catalog, &ProductId::new("STK-001"), Some(1))?;
    session.add_item(&state.catalog, &ProductId::new("STK-001"), Some(2))?;
    session.set_payment_method(PaymentMethod::Card);
    let order = session.submit(&mut state.orders, &mut *ids, today)?;
    created.push(order.id);

    // Unregistered customer, typed name.
    let mut session = OrderSession::create();
    session.set_customer_name("Nimal Fernando");
    session.add_item(&state.catalog, &ProductId::new("STK-001"), Some(1))?;
    session.add_item(&state.catalog, &ProductId::new("STK-004"), Some(1))?;
    session.add_item(&state.catalog, &ProductId::new("STK-005"), Some(1))?;
    session.update_quantity(2, 0)?;
    session.set_status(OrderStatus::Completed);
    let order = session.submit(&mut state.orders, &mut *ids, today)?;
    created.push(order.id);

    // Pending order picked up again and completed with an extra tablet.
    let existing = state
        .orders
        .get(&OrderId::new("ORD-002"))
        .context("order ORD-002 missing from store")?;
    let mut session = OrderSession::edit(&existing);
    session.update_quantity(0, 2)?;
    session.set_status(OrderStatus::Completed);
    let order = session.submit(&mut state.orders, &mut *ids, today)?;
    edited.push(order.id);

    let removed = state.orders.remove(&OrderId::new("ORD-003"))?;
    deleted.push(removed.id);

    let orders = state.orders.list();
    let grand_total = Money::checked_sum(orders.iter().map(|o| o.total_amount))
        .context("grand total overflows")?;
    info!(
        orders = orders.len(),
        grand_total = %grand_total,
        "checkout finished"
    );

    Ok(CheckoutSummary {
        created,
        edited,
        deleted,
        orders,
        grand_total,
    })
}
