//! One open create/edit order dialog.
//!
//! A session owns a fresh [`OrderComposer`] plus the order header fields.
//! Cancelling is dropping the session; after a successful [`OrderSession::submit`]
//! the caller drops it too.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use pos_catalog::ProductLookup;
use pos_core::{DomainError, IdGenerator, OrderId, ProductId};
use pos_parties::CustomerRef;

use crate::composer::{CompositionError, DraftValidation, OrderComposer};
use crate::line_item::LineItem;
use crate::order::{Order, OrderStatus, PaymentMethod};
use crate::store::OrderStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("order is not ready: {0}")]
    Invalid(DraftValidation),

    #[error(transparent)]
    Store(#[from] DomainError),
}

/// Whether the session creates a new order or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    Create,
    Edit { id: OrderId, order_date: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSession {
    mode: SessionMode,
    composer: OrderComposer,
    customer: Option<CustomerRef>,
    customer_name: String,
    status: OrderStatus,
    payment_method: PaymentMethod,
}

impl OrderSession {
    /// New order: no lines, pending, paid in cash.
    pub fn create() -> Self {
        Self {
            mode: SessionMode::Create,
            composer: OrderComposer::new(),
            customer: None,
            customer_name: String::new(),
            status: OrderStatus::default(),
            payment_method: PaymentMethod::default(),
        }
    }

    /// Edit an existing order; lines and header are copied from it.
    pub fn edit(order: &Order) -> Self {
        let customer = order.customer_id.as_ref().map(|id| CustomerRef {
            id: id.clone(),
            name: order.customer_name.clone(),
        });
        Self {
            mode: SessionMode::Edit {
                id: order.id.clone(),
                order_date: order.order_date,
            },
            composer: OrderComposer::from_order(order),
            customer,
            customer_name: order.customer_name.clone(),
            status: order.status,
            payment_method: order.payment_method,
        }
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn composer(&self) -> &OrderComposer {
        &self.composer
    }

    pub fn items(&self) -> &[LineItem] {
        self.composer.items()
    }

    pub fn customer(&self) -> Option<&CustomerRef> {
        self.customer.as_ref()
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Pick a customer (or clear the pick). The name field follows the pick.
    pub fn select_customer(&mut self, customer: Option<CustomerRef>) {
        self.customer_name = customer.as_ref().map(|c| c.name.clone()).unwrap_or_default();
        self.customer = customer;
    }

    /// Free-text name used when no customer is picked.
    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn set_payment_method(&mut self, payment_method: PaymentMethod) {
        self.payment_method = payment_method;
    }

    pub fn add_item<C>(
        &mut self,
        catalog: &C,
        product_id: &ProductId,
        quantity: Option<i64>,
    ) -> Result<&LineItem, CompositionError>
    where
        C: ProductLookup + ?Sized,
    {
        self.composer.add_item(catalog, product_id, quantity)
    }

    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> Result<(), CompositionError> {
        self.composer.update_quantity(index, quantity)
    }

    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        self.composer.remove_item(index)
    }

    pub fn validate(&self) -> DraftValidation {
        self.composer
            .validate(self.customer.as_ref().map(|c| &c.id), &self.customer_name)
    }

    /// Validate, materialize and hand the order to the store.
    ///
    /// Create sessions draw a new id and use `today`; edit sessions keep the
    /// original id and date and replace the stored order.
    pub fn submit<S, G>(&self, store: &mut S, ids: &mut G, today: NaiveDate) -> Result<Order, SubmitError>
    where
        S: OrderStore + ?Sized,
        G: IdGenerator + ?Sized,
    {
        if let Err(validation) = self.validate().into_result() {
            warn!(%validation, "order submit rejected");
            return Err(SubmitError::Invalid(validation));
        }

        let (id, order_date) = match &self.mode {
            SessionMode::Create => (ids.next_order_id(), today),
            SessionMode::Edit { id, order_date } => (id.clone(), *order_date),
        };
        let order = self.composer.to_order(
            id,
            order_date,
            self.status,
            self.payment_method,
            self.customer.as_ref(),
            &self.customer_name,
        );

        match self.mode {
            SessionMode::Create => store.append(order.clone())?,
            SessionMode::Edit { .. } => store.replace(order.clone())?,
        }
        info!(
            order = %order.id,
            total = %order.total_amount,
            lines = order.items.len(),
            "order submitted"
        );
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::WALK_IN_CUSTOMER;
    use crate::sample;
    use crate::store::InMemoryOrderStore;
    use pos_catalog::sample as catalog_sample;
    use pos_core::{CustomerId, Money, SequentialIds};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn store() -> InMemoryOrderStore {
        InMemoryOrderStore::with_orders(sample::orders().unwrap()).unwrap()
    }

    fn ids(store: &InMemoryOrderStore) -> SequentialIds {
        let ids = SequentialIds::new("ORD", 3);
        let last = ids.highest_in(store.ids());
        ids.starting_after(last)
    }

    #[test]
    fn create_appends_walk_in_order() {
        let catalog = catalog_sample::catalog().unwrap();
        let mut store = store();
        let mut ids = ids(&store);

        let mut session = OrderSession::create();
        session.add_item(&catalog, &ProductId::new("STK-002"), Some(2)).unwrap();
        session.set_customer_name("   ");
        assert!(session.validate().missing_customer);

        session.set_customer_name("Walk-in Customer");
        session.set_payment_method(PaymentMethod::Mobile);
        let order = session.submit(&mut store, &mut ids, today()).unwrap();

        assert_eq!(order.id, OrderId::new("ORD-004"));
        assert_eq!(order.order_date, today());
        assert_eq!(order.customer_name, WALK_IN_CUSTOMER);
        assert_eq!(order.total_amount, Money::new(360_000));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(store.len(), 4);
        assert_eq!(store.list().last(), Some(&order));
    }

    #[test]
    fn invalid_submit_reports_both_problems_and_stores_nothing() {
        let mut store = store();
        let mut ids = ids(&store);
        let session = OrderSession::create();

        let err = session.submit(&mut store, &mut ids, today()).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Invalid(DraftValidation {
                missing_items: true,
                missing_customer: true,
            })
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn selecting_a_customer_fills_and_clears_the_name() {
        let mut session = OrderSession::create();
        session.select_customer(Some(CustomerRef {
            id: CustomerId::new("3"),
            name: "Jon Jones".to_owned(),
        }));
        assert_eq!(session.customer_name(), "Jon Jones");

        session.select_customer(None);
        assert_eq!(session.customer_name(), "");
        assert!(session.customer().is_none());
    }

    #[test]
    fn edit_replaces_in_place_and_keeps_id_and_date() {
        let catalog = catalog_sample::catalog().unwrap();
        let mut store = store();
        let mut ids = ids(&store);
        let original = store.get(&OrderId::new("ORD-001")).unwrap();

        let mut session = OrderSession::edit(&original);
        assert_eq!(session.items().len(), 2);
        assert_eq!(session.customer().map(|c| c.id.as_str()), Some("1"));

        session.add_item(&catalog, &ProductId::new("STK-004"), Some(1)).unwrap();
        session.remove_item(0).unwrap();
        session.set_status(OrderStatus::Cancelled);
        let order = session.submit(&mut store, &mut ids, today()).unwrap();

        assert_eq!(order.id, original.id);
        assert_eq!(order.order_date, original.order_date);
        assert_eq!(order.customer_name, "Chamath Perera");
        assert_eq!(order.total_amount, Money::new(90_000));
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[0], order);

        // The id generator was not consumed by the edit.
        assert_eq!(ids.next_order_id(), OrderId::new("ORD-004"));
    }

    #[test]
    fn editing_a_deleted_order_surfaces_store_error() {
        let mut store = store();
        let mut ids = ids(&store);
        let original = store.get(&OrderId::new("ORD-002")).unwrap();
        let session = OrderSession::edit(&original);
        store.remove(&original.id).unwrap();

        let err = session.submit(&mut store, &mut ids, today()).unwrap_err();
        assert!(matches!(err, SubmitError::Store(DomainError::NotFound(_))));
    }
}
