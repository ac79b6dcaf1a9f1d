use pos_core::{DomainError, DomainResult, Entity, ProductId, find_by_id};

use crate::product::Product;

/// Read-only product resolution used when composing orders.
pub trait ProductLookup {
    fn find(&self, id: &ProductId) -> Option<&Product>;
}

/// In-memory product listing, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate product ids.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let mut catalog = Self::new();
        for product in products {
            if catalog.get(product.id()).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
            catalog.products.push(product);
        }
        Ok(catalog)
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        find_by_id(&self.products, id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products that can be offered for a new order line (stock > 0).
    pub fn available(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_available())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for Catalog {
    /// Only in-stock products resolve; an out-of-stock entry is treated as
    /// unknown, matching what a product picker would offer.
    fn find(&self, id: &ProductId) -> Option<&Product> {
        self.get(id).filter(|p| p.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pos_core::Money;

    fn product(id: &str, qty: u32) -> Product {
        Product::new(ProductId::new(id), id, "Test", Money::new(100), qty)
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::from_products([product("A", 1), product("A", 2)]).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(msg) if msg.contains("A")));
    }

    #[test]
    fn available_skips_out_of_stock_and_keeps_order() {
        let catalog =
            Catalog::from_products([product("A", 1), product("B", 0), product("C", 4)]).unwrap();
        let ids: Vec<_> = catalog.available().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn lookup_hides_out_of_stock_products() {
        let catalog = Catalog::from_products([product("A", 0)]).unwrap();
        assert!(catalog.get(&ProductId::new("A")).is_some());
        assert!(catalog.find(&ProductId::new("A")).is_none());
        assert!(catalog.find(&ProductId::new("missing")).is_none());
    }
}
