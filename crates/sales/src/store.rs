use tracing::debug;

use pos_core::{DomainError, DomainResult, OrderId, find_by_id, position_by_id};

use crate::order::Order;

/// Collection of finalized orders.
///
/// Create appends, edit replaces by id, delete removes. Listing preserves
/// insertion order.
pub trait OrderStore {
    fn get(&self, id: &OrderId) -> Option<Order>;
    fn list(&self) -> Vec<Order>;
    fn append(&mut self, order: Order) -> DomainResult<()>;
    fn replace(&mut self, order: Order) -> DomainResult<()>;
    fn remove(&mut self, id: &OrderId) -> DomainResult<Order>;
}

/// In-memory order store; contents last as long as the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryOrderStore {
    orders: Vec<Order>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> DomainResult<Self> {
        let mut store = Self::new();
        for order in orders {
            store.append(order)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &OrderId> {
        self.orders.iter().map(|o| &o.id)
    }

    fn position(&self, id: &OrderId) -> Option<usize> {
        position_by_id(&self.orders, id)
    }
}

impl OrderStore for InMemoryOrderStore {
    fn get(&self, id: &OrderId) -> Option<Order> {
        find_by_id(&self.orders, id).cloned()
    }

    fn list(&self) -> Vec<Order> {
        self.orders.clone()
    }

    fn append(&mut self, order: Order) -> DomainResult<()> {
        if self.position(&order.id).is_some() {
            return Err(DomainError::conflict(format!("order {} already exists", order.id)));
        }
        debug!(order = %order.id, "order appended");
        self.orders.push(order);
        Ok(())
    }

    fn replace(&mut self, order: Order) -> DomainResult<()> {
        let index = self
            .position(&order.id)
            .ok_or_else(|| DomainError::not_found(format!("order {}", order.id)))?;
        debug!(order = %order.id, "order replaced");
        self.orders[index] = order;
        Ok(())
    }

    fn remove(&mut self, id: &OrderId) -> DomainResult<Order> {
        let index = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(format!("order {id}")))?;
        debug!(order = %id, "order removed");
        Ok(self.orders.remove(index))
    }
}
