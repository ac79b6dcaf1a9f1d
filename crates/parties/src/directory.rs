use pos_core::{CustomerId, DomainError, DomainResult, Entity, find_by_id};

use crate::customer::{Customer, CustomerRef};

/// In-memory customer listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_customers(customers: impl IntoIterator<Item = Customer>) -> DomainResult<Self> {
        let mut directory = Self::new();
        for customer in customers {
            if directory.get(customer.id()).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate customer id {}",
                    customer.id()
                )));
            }
            directory.customers.push(customer);
        }
        Ok(directory)
    }

    pub fn get(&self, id: &CustomerId) -> Option<&Customer> {
        find_by_id(&self.customers, id)
    }

    pub fn resolve(&self, id: &CustomerId) -> Option<CustomerRef> {
        self.get(id).map(Customer::to_ref)
    }

    pub fn list(&self) -> &[Customer] {
        &self.customers
    }
}
