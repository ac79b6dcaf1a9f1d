use serde::{Deserialize, Serialize};

use pos_core::{Entity, Money, ProductId};

/// Catalog entry: a stock item that can be sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    unit_price: Money,
    available_quantity: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Money,
        available_quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            unit_price,
            available_quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn available_quantity(&self) -> u32 {
        self.available_quantity
    }

    /// Whether the product may be offered for a new order line.
    pub fn is_available(&self) -> bool {
        self.available_quantity > 0
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
