//! Built-in sample stock used to seed a session.

use pos_core::{DomainResult, Money, ProductId};

use crate::catalog::Catalog;
use crate::product::Product;

/// The five demo stock items.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(
            ProductId::new("STK-001"),
            "Samsung Galaxy S24",
            "Electronics",
            Money::new(125_000),
            25,
        ),
        Product::new(
            ProductId::new("STK-002"),
            "iPhone 15",
            "Electronics",
            Money::new(180_000),
            15,
        ),
        Product::new(
            ProductId::new("STK-003"),
            "Dell XPS 13",
            "Computers",
            Money::new(220_000),
            8,
        ),
        Product::new(
            ProductId::new("STK-004"),
            "Sony WH-1000XM5",
            "Audio",
            Money::new(45_000),
            30,
        ),
        Product::new(
            ProductId::new("STK-005"),
            "iPad Air",
            "Tablets",
            Money::new(95_000),
            12,
        ),
    ]
}

pub fn catalog() -> DomainResult<Catalog> {
    Catalog::from_products(products())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_has_every_product() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.get(&ProductId::new("STK-004")).map(|p| p.unit_price()),
            Some(Money::new(45_000))
        );
    }
}
